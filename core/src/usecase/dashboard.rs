use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::stats::{LeagueStats, Stats};
use crate::repository::GameStore;
use crate::service::aggregate::{aggregate, aggregate_by_league};
use crate::service::dto::GameSummary;
use crate::service::filter::filter_by_time_from;
use crate::time::{today, TimeWindow};
use chrono::NaiveDate;

const RECENT_GAMES: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub window: TimeWindow,
    pub stats: Stats,
    pub by_league: Vec<LeagueStats>,
    pub recent: Vec<GameSummary>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.stats.games_played == 0
    }
}

/// Overall and per-league numbers for one time window, plus the latest games.
pub struct DashboardUseCase<'a, S: GameStore> {
    store: &'a S,
}

impl<'a, S: GameStore> DashboardUseCase<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn get_dashboard(&self, window: TimeWindow) -> Result<Dashboard> {
        self.get_dashboard_from(window, today())
    }

    pub fn get_dashboard_from(&self, window: TimeWindow, today: NaiveDate) -> Result<Dashboard> {
        let games = self.store.load()?;
        let games = filter_by_time_from(&games, window, today);

        Ok(Dashboard {
            window,
            stats: aggregate(&games),
            by_league: aggregate_by_league(&games),
            recent: games.iter().take(RECENT_GAMES).map(GameSummary::from_entity).collect(),
        })
    }

    /// One dashboard per window, in picker order (all, year, month, week).
    pub fn get_all_windows(&self) -> Result<Vec<Dashboard>> {
        let today = today();
        TimeWindow::CHOICES
            .iter()
            .map(|w| self.get_dashboard_from(*w, today))
            .collect()
    }
}
