use chrono::NaiveDate;

use crate::model::game::Game;
use crate::time::{today, TimeWindow};

/// Keeps games inside `window`, anchored on the current local day.
pub fn filter_by_time(games: &[Game], window: TimeWindow) -> Vec<Game> {
    filter_by_time_from(games, window, today())
}

/// Same as [`filter_by_time`] with an explicit anchor day. Input order is preserved.
pub fn filter_by_time_from(games: &[Game], window: TimeWindow, today: NaiveDate) -> Vec<Game> {
    games
        .iter()
        .filter(|g| window.contains(g.date, today))
        .cloned()
        .collect()
}

/// Exact, case-sensitive league match. `None` or an empty label keeps everything.
pub fn filter_by_league(games: &[Game], league: Option<&str>) -> Vec<Game> {
    match league.filter(|l| !l.is_empty()) {
        None => games.to_vec(),
        Some(league) => games.iter().filter(|g| g.league == league).cloned().collect(),
    }
}

/// Distinct league labels in first-seen order.
pub fn leagues(games: &[Game]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for game in games {
        if !seen.iter().any(|l| *l == game.league) {
            seen.push(game.league.clone());
        }
    }
    seen
}
