use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::validation::ParseError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "OTL")]
    OvertimeLoss,
    #[serde(rename = "SOL")]
    ShootoutLoss,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = match self {
            GameResult::Win => "WIN",
            GameResult::Loss => "LOSS",
            GameResult::OvertimeLoss => "OT LOSS",
            GameResult::ShootoutLoss => "SO LOSS",
        };
        f.write_str(badge)
    }
}

impl FromStr for GameResult {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "w" | "win" => Ok(GameResult::Win),
            "l" | "loss" => Ok(GameResult::Loss),
            "otl" | "ot" | "overtime" => Ok(GameResult::OvertimeLoss),
            "sol" | "so" | "shootout" => Ok(GameResult::ShootoutLoss),
            _ => Err(ParseError::UnknownResult(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub date: NaiveDate,
    pub team: String,
    pub league: String,
    pub opponent: String,
    pub shots_against: u32,
    pub goals_allowed: u32,
    pub result: GameResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    // Provenance only; never used for ordering.
    pub created_at: DateTime<Utc>,
}

/// A game as entered by the user, before the store assigns `id` and `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub date: NaiveDate,
    pub team: String,
    pub league: String,
    pub opponent: String,
    pub shots_against: u32,
    pub goals_allowed: u32,
    pub result: GameResult,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial replacement of a stored game. `None` leaves the field untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub date: Option<NaiveDate>,
    pub team: Option<String>,
    pub league: Option<String>,
    pub opponent: Option<String>,
    pub shots_against: Option<u32>,
    pub goals_allowed: Option<u32>,
    pub result: Option<GameResult>,
    /// `Some("")` clears existing notes.
    pub notes: Option<String>,
}

impl GameInput {
    /// Trims text fields and drops blank notes.
    pub fn normalized(self) -> Self {
        Self {
            team: self.team.trim().to_string(),
            league: self.league.trim().to_string(),
            opponent: self.opponent.trim().to_string(),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            ..self
        }
    }
}

impl GameUpdate {
    pub fn is_empty(&self) -> bool {
        *self == GameUpdate::default()
    }
}

impl Game {
    pub fn from_input(input: GameInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: input.date,
            team: input.team,
            league: input.league,
            opponent: input.opponent,
            shots_against: input.shots_against,
            goals_allowed: input.goals_allowed,
            result: input.result,
            notes: input.notes,
            created_at: Utc::now(),
        }
    }

    /// Merges `update` into this game. `id` and `created_at` never change.
    pub fn apply(&mut self, update: &GameUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(team) = &update.team {
            self.team = team.trim().to_string();
        }
        if let Some(league) = &update.league {
            self.league = league.trim().to_string();
        }
        if let Some(opponent) = &update.opponent {
            self.opponent = opponent.trim().to_string();
        }
        if let Some(shots) = update.shots_against {
            self.shots_against = shots;
        }
        if let Some(goals) = update.goals_allowed {
            self.goals_allowed = goals;
        }
        if let Some(result) = update.result {
            self.result = result;
        }
        if let Some(notes) = &update.notes {
            let notes = notes.trim();
            self.notes = if notes.is_empty() { None } else { Some(notes.to_string()) };
        }
    }

    /// Input view of this game, used to re-validate after a merge.
    pub fn to_input(&self) -> GameInput {
        GameInput {
            date: self.date,
            team: self.team.clone(),
            league: self.league.clone(),
            opponent: self.opponent.clone(),
            shots_against: self.shots_against,
            goals_allowed: self.goals_allowed,
            result: self.result,
            notes: self.notes.clone(),
        }
    }

    pub fn saves(&self) -> i64 {
        self.shots_against as i64 - self.goals_allowed as i64
    }

    pub fn save_percentage(&self) -> f64 {
        if self.shots_against == 0 {
            return 0.0;
        }
        self.saves() as f64 / self.shots_against as f64 * 100.0
    }

    /// Per-game shutout: a win with no goals allowed. The aggregate count in
    /// `Stats::shutouts` does not require the win.
    pub fn is_shutout(&self) -> bool {
        self.goals_allowed == 0 && self.result == GameResult::Win
    }
}
