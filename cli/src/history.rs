use goalie_core::service::dto::GameSummary;
use goalie_core::service::format::format_date;
use goalie_core::Game;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "Opponent")]
    opponent: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "SA")]
    shots: u32,
    #[tabled(rename = "GA")]
    goals: u32,
    #[tabled(rename = "SV%")]
    save_pct: String,
    #[tabled(rename = "")]
    shutout: String,
}

impl From<GameSummary> for HistoryRow {
    fn from(summary: GameSummary) -> Self {
        Self {
            id: summary.short_id,
            date: summary.date,
            league: summary.league,
            opponent: summary.opponent,
            result: summary.result,
            shots: summary.shots_against,
            goals: summary.goals_allowed,
            save_pct: summary.save_percentage,
            shutout: if summary.shutout { "SO".to_string() } else { String::new() },
        }
    }
}

pub fn show_history(games: &[Game]) {
    if games.is_empty() {
        println!("No games found. Try adjusting your filters.");
        return;
    }

    let rows: Vec<HistoryRow> = games
        .iter()
        .map(|g| HistoryRow::from(GameSummary::from_entity(g)))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    let noun = if games.len() == 1 { "game" } else { "games" };
    println!("{}", table);
    println!("{} {}", games.len(), noun);
}

pub fn show_game(game: &Game) {
    let summary = GameSummary::from_entity(game);
    let badge = if summary.shutout {
        format!("{}  \x1b[1;33mSHUTOUT\x1b[0m", summary.result)
    } else {
        summary.result.clone()
    };

    println!("\n\x1b[1;36m{} vs {}\x1b[0m  {}", summary.team, summary.opponent, badge);
    println!("{} • {}", summary.league, summary.date);
    println!("  Save %:        {}", summary.save_percentage);
    println!("  Shots against: {}", summary.shots_against);
    println!("  Saves:         {}", summary.saves);
    println!("  Goals allowed: {}", summary.goals_allowed);
    if let Some(notes) = &summary.notes {
        println!("  Notes:         {}", notes);
    }
    println!("  ID:            {}", summary.id);
}

pub fn deleted_message(game: &Game) -> String {
    format!("Deleted game vs {} on {}.", game.opponent, format_date(game.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalie_core::{GameInput, GameResult};

    #[test]
    fn test_deleted_message_uses_display_date() {
        let game = Game::from_input(GameInput {
            date: "2025-01-05".parse().unwrap(),
            team: "Hawks".to_string(),
            league: "AAA".to_string(),
            opponent: "Bears".to_string(),
            shots_against: 30,
            goals_allowed: 2,
            result: GameResult::Win,
            notes: None,
        });
        assert_eq!(deleted_message(&game), "Deleted game vs Bears on Jan 5, 2025.");
    }
}
