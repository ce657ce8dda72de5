use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::game::{Game, GameResult};
use crate::service::format::{format_date, format_save_percentage};

/// A game flattened for list and card views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: Uuid,
    pub short_id: String,
    pub date: String,
    pub league: String,
    pub team: String,
    pub opponent: String,
    pub outcome: GameResult,
    /// Badge text, e.g. `OT LOSS`.
    pub result: String,
    pub shots_against: u32,
    pub goals_allowed: u32,
    pub saves: i64,
    pub save_percentage: String,
    pub shutout: bool,
    pub notes: Option<String>,
}

impl GameSummary {
    pub fn from_entity(game: &Game) -> Self {
        let id_str = game.id.to_string();
        Self {
            id: game.id,
            short_id: id_str[..8].to_string(),
            date: format_date(game.date),
            league: game.league.clone(),
            team: game.team.clone(),
            opponent: game.opponent.clone(),
            outcome: game.result,
            result: game.result.to_string(),
            shots_against: game.shots_against,
            goals_allowed: game.goals_allowed,
            saves: game.saves(),
            save_percentage: format_save_percentage(game.save_percentage()),
            shutout: game.is_shutout(),
            notes: game.notes.clone(),
        }
    }
}
