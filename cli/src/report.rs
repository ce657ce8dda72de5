use goalie_core::service::format::{format_gaa, format_save_percentage, format_win_percentage};
use goalie_core::{Dashboard, Stats};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "GP")]
    games: u32,
    #[tabled(rename = "Record")]
    record: String,
    #[tabled(rename = "SV%")]
    save_pct: String,
    #[tabled(rename = "GAA")]
    gaa: String,
    #[tabled(rename = "SO")]
    shutouts: u32,
    #[tabled(rename = "SA")]
    shots: u64,
    #[tabled(rename = "Saves")]
    saves: i64,
    #[tabled(rename = "Win %")]
    win_pct: String,
}

impl StatsRow {
    fn new(league: &str, stats: &Stats) -> Self {
        Self {
            league: league.to_string(),
            games: stats.games_played,
            record: stats.record(),
            save_pct: format_save_percentage(stats.save_percentage),
            gaa: format_gaa(stats.gaa),
            shutouts: stats.shutouts,
            shots: stats.shots_against,
            saves: stats.saves,
            win_pct: format_win_percentage(stats.win_percentage),
        }
    }
}

pub fn show_stats(dashboard: &Dashboard) {
    if dashboard.is_empty() {
        println!("No games recorded ({}).", dashboard.window);
        return;
    }

    println!("\n\x1b[1;36mGoalie stats ({})\x1b[0m", dashboard.window);

    let mut rows = vec![StatsRow::new("All", &dashboard.stats)];
    // A single league would just repeat the totals.
    if dashboard.by_league.len() > 1 {
        rows.extend(dashboard.by_league.iter().map(|l| StatsRow::new(&l.league, &l.stats)));
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
