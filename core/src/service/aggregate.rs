use crate::model::game::{Game, GameResult};
use crate::model::stats::{LeagueStats, Stats};

/// Reduces a set of games into summary statistics.
///
/// Games are trusted as validated; nothing here re-checks `goals <= shots`.
pub fn aggregate(games: &[Game]) -> Stats {
    if games.is_empty() {
        return Stats::default();
    }

    let mut stats = Stats::default();
    for game in games {
        stats.games_played += 1;
        match game.result {
            GameResult::Win => stats.wins += 1,
            GameResult::Loss => stats.losses += 1,
            GameResult::OvertimeLoss | GameResult::ShootoutLoss => stats.ot_losses += 1,
        }
        stats.shots_against += game.shots_against as u64;
        stats.goals_allowed += game.goals_allowed as u64;
        if game.goals_allowed == 0 {
            stats.shutouts += 1;
        }
    }

    stats.saves = stats.shots_against as i64 - stats.goals_allowed as i64;
    stats.save_percentage = if stats.shots_against > 0 {
        stats.saves as f64 / stats.shots_against as f64 * 100.0
    } else {
        0.0
    };
    let played = stats.games_played as f64;
    stats.gaa = stats.goals_allowed as f64 / played;
    stats.win_percentage = stats.wins as f64 / played * 100.0;

    stats
}

/// Groups games by exact league label, in first-seen order, and aggregates each group.
pub fn aggregate_by_league(games: &[Game]) -> Vec<LeagueStats> {
    let mut groups: Vec<(&str, Vec<Game>)> = Vec::new();
    for game in games {
        match groups.iter_mut().find(|(league, _)| *league == game.league) {
            Some((_, members)) => members.push(game.clone()),
            None => groups.push((game.league.as_str(), vec![game.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(league, members)| LeagueStats {
            league: league.to_string(),
            stats: aggregate(&members),
        })
        .collect()
}
