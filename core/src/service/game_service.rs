use anyhow::{anyhow, Result};
use tracing::info;
use uuid::Uuid;

use crate::model::game::{Game, GameInput, GameUpdate};
use crate::model::validation::validate;
use crate::repository::GameStore;
use crate::service::filter::{filter_by_league, filter_by_time};
use crate::time::TimeWindow;
use crate::usecase::dashboard::{Dashboard, DashboardUseCase};

/// Validating front door to a [`GameStore`].
pub struct GameService<S: GameStore> {
    store: S,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_game(&self, input: GameInput) -> Result<Game> {
        let input = input.normalized();
        validate(&input)?;
        let game = self.store.add(input)?;
        info!(id = %game.id, date = %game.date, league = %game.league, "added game");
        Ok(game)
    }

    pub fn list_games(&self) -> Result<Vec<Game>> {
        self.store.load()
    }

    pub fn get_game(&self, id: &Uuid) -> Result<Option<Game>> {
        self.store.get(id)
    }

    /// Resolves a full id or a unique id prefix, as typed on the command line.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Game> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(anyhow!("Empty game id"));
        }
        let mut matches: Vec<Game> = self
            .store
            .load()?
            .into_iter()
            .filter(|g| g.id.to_string().starts_with(&prefix))
            .collect();

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(anyhow!("No game matches id '{}'", prefix)),
            n => Err(anyhow!("Ambiguous id '{}' matches {} games", prefix, n)),
        }
    }

    /// Merges `update` into the stored game after validating the merged result.
    /// Returns `false` when no game has `id`.
    pub fn update_game(&self, id: &Uuid, update: &GameUpdate) -> Result<bool> {
        let Some(mut merged) = self.store.get(id)? else {
            return Ok(false);
        };
        merged.apply(update);
        validate(&merged.to_input())?;

        let updated = self.store.update(id, update)?;
        if updated {
            info!(id = %id, "updated game");
        }
        Ok(updated)
    }

    /// Returns `false` when no game has `id`.
    pub fn delete_game(&self, id: &Uuid) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            info!(id = %id, "deleted game");
        }
        Ok(removed)
    }

    pub fn clear_games(&self) -> Result<()> {
        self.store.clear()
    }

    /// Games in `window`, optionally narrowed to one league, newest first.
    pub fn history(&self, window: TimeWindow, league: Option<&str>) -> Result<Vec<Game>> {
        let games = self.store.load()?;
        let games = filter_by_time(&games, window);
        Ok(filter_by_league(&games, league))
    }

    /// Overall and per-league stats for `window`, plus the latest games.
    pub fn dashboard(&self, window: TimeWindow) -> Result<Dashboard> {
        DashboardUseCase::new(&self.store).get_dashboard(window)
    }
}
