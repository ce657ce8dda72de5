use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use goalie_core::service::format::{format_gaa, format_save_percentage, format_win_percentage};
use goalie_core::{Dashboard, DashboardUseCase, GameResult, GameStore};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    win: Color,
    loss: Color,
    ot: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    win: Color::Green,
    loss: Color::Red,
    ot: Color::Yellow,
};

pub struct StatsApp {
    pub dashboards: Vec<Dashboard>,
    pub current_index: usize,
}

impl StatsApp {
    pub fn new(dashboards: Vec<Dashboard>) -> Self {
        Self {
            dashboards,
            current_index: 0,
        }
    }

    pub fn next_window(&mut self) {
        if !self.dashboards.is_empty() && self.current_index < self.dashboards.len() - 1 {
            self.current_index += 1;
        }
    }

    pub fn previous_window(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn current_data(&self) -> Option<&Dashboard> {
        self.dashboards.get(self.current_index)
    }
}

pub fn run<S: GameStore>(store: &S) -> Result<()> {
    let dashboards = DashboardUseCase::new(store).get_all_windows()?;

    if dashboards.iter().all(|d| d.is_empty()) {
        println!("No games recorded yet. Add one with `goalie add`.");
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = StatsApp::new(dashboards);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut StatsApp,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.previous_window(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_window(),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn ui(frame: &mut Frame, app: &StatsApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / window tabs
            Constraint::Min(10),   // Stats + leagues
            Constraint::Length(8), // Recent games
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let Some(dashboard) = app.current_data() else {
        frame.render_widget(
            Paragraph::new("No data available").alignment(Alignment::Center),
            main_layout[1],
        );
        return;
    };

    // --- Header ---
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(1), Constraint::Length(34)])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        "GOALIE STATS",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let tabs: Vec<Span> = app
        .dashboards
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let label = format!(" {} ", d.window.to_string().to_uppercase());
            if i == app.current_index {
                let style = Style::default()
                    .fg(THEME.text)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED);
                Span::styled(label, style)
            } else {
                Span::styled(label, Style::default().fg(THEME.muted))
            }
        })
        .collect();
    let nav = Paragraph::new(Line::from(tabs))
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);
    frame.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)),
        main_layout[0],
    );

    // --- Content ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Percentage(65),
        ])
        .split(main_layout[1]);

    draw_summary(frame, dashboard, content_chunks[0]);
    draw_league_chart(frame, dashboard, content_chunks[2]);
    draw_recent(frame, dashboard, main_layout[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("WINDOW: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[3]);
}

fn draw_summary(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(3)])
        .split(area);

    let stats = &dashboard.stats;
    let row = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let info_text = if dashboard.is_empty() {
        vec![Line::from("No games in this window")]
    } else {
        vec![
            row("Save %", format_save_percentage(stats.save_percentage), THEME.primary),
            row("GAA", format_gaa(stats.gaa), THEME.primary),
            Line::from(""),
            row("Record", stats.record(), THEME.text),
            row("Games", stats.games_played.to_string(), THEME.text),
            row("Shutouts", stats.shutouts.to_string(), THEME.text),
            row("Shots", stats.shots_against.to_string(), THEME.text),
            row("Saves", stats.saves.to_string(), THEME.text),
        ]
    };

    let summary = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(summary, chunks[0]);

    let ratio = (stats.win_percentage / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win % ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.win))
        .ratio(ratio)
        .label(format_win_percentage(stats.win_percentage));
    frame.render_widget(gauge, chunks[1]);
}

fn draw_league_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    // Bar height is save percentage in thousandths.
    let bars: Vec<Bar> = dashboard
        .by_league
        .iter()
        .map(|l| {
            let value = (l.stats.save_percentage * 10.0).round().max(0.0) as u64;
            Bar::default()
                .label(Line::from(format!("{} ({})", l.league, l.stats.record())))
                .value(value)
                .style(Style::default().fg(THEME.primary))
                .text_value(format_save_percentage(l.stats.save_percentage))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .title(" Save % by League "),
        )
        .bar_width(12)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars))
        .max(1000);

    frame.render_widget(chart, area);
}

fn draw_recent(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let lines: Vec<Line> = dashboard
        .recent
        .iter()
        .map(|g| {
            let color = match g.outcome {
                GameResult::Win => THEME.win,
                GameResult::Loss => THEME.loss,
                GameResult::OvertimeLoss | GameResult::ShootoutLoss => THEME.ot,
            };
            let muted = Style::default().fg(THEME.muted);
            let text = Style::default().fg(THEME.text);
            let mut spans = vec![
                Span::styled(
                    format!("{:<9}", g.result),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<14}", g.date), muted),
                Span::styled(format!("vs {:<20}", g.opponent), text),
                Span::styled(format!("{:<8}", g.league), muted),
                Span::styled(
                    format!("{}  {}/{}", g.save_percentage, g.saves, g.shots_against),
                    text,
                ),
            ];
            if g.shutout {
                let badge = Style::default().fg(THEME.ot).add_modifier(Modifier::BOLD);
                spans.push(Span::styled("  SHUTOUT", badge));
            }
            Line::from(spans)
        })
        .collect();

    let recent = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Recent Games "),
    );
    frame.render_widget(recent, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalie_core::{MemoryGameStore, TimeWindow};

    fn app() -> StatsApp {
        let store = MemoryGameStore::new();
        StatsApp::new(DashboardUseCase::new(&store).get_all_windows().unwrap())
    }

    #[test]
    fn test_window_navigation_stops_at_edges() {
        let mut app = app();
        assert_eq!(app.current_data().unwrap().window, TimeWindow::All);

        app.previous_window();
        assert_eq!(app.current_index, 0);

        for _ in 0..10 {
            app.next_window();
        }
        assert_eq!(app.current_data().unwrap().window, TimeWindow::Week);

        app.previous_window();
        assert_eq!(app.current_data().unwrap().window, TimeWindow::Month);
    }

    #[test]
    fn test_empty_app_has_no_data() {
        let mut app = StatsApp::new(Vec::new());
        app.next_window();
        assert!(app.current_data().is_none());
    }
}
