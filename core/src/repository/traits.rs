use crate::model::game::{Game, GameInput, GameUpdate};
use anyhow::Result;
use uuid::Uuid;

/// Durable storage for the game collection.
///
/// Every mutation is a read-modify-write of the whole collection with no
/// concurrency control. Callers must serialize mutations against a store;
/// two racing writers can lose an update.
pub trait GameStore {
    /// All stored games, newest first. Missing or unreadable data loads as empty.
    fn load(&self) -> Result<Vec<Game>>;
    fn save(&self, games: &[Game]) -> Result<()>;

    fn get(&self, id: &Uuid) -> Result<Option<Game>> {
        Ok(self.load()?.into_iter().find(|g| g.id == *id))
    }

    /// Assigns `id` and `created_at`, then stores the game in date order.
    fn add(&self, input: GameInput) -> Result<Game> {
        let mut games = self.load()?;
        let game = Game::from_input(input);
        games.push(game.clone());
        sort_by_date(&mut games);
        self.save(&games)?;
        Ok(game)
    }

    /// Returns `false` without writing when `id` is unknown.
    fn update(&self, id: &Uuid, update: &GameUpdate) -> Result<bool> {
        let mut games = self.load()?;
        match games.iter_mut().find(|g| g.id == *id) {
            Some(game) => game.apply(update),
            None => return Ok(false),
        }
        sort_by_date(&mut games);
        self.save(&games)?;
        Ok(true)
    }

    /// Returns `false` without writing when `id` is unknown.
    fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut games = self.load()?;
        let initial_len = games.len();
        games.retain(|g| g.id != *id);
        if games.len() == initial_len {
            return Ok(false);
        }
        self.save(&games)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()>;
}

/// Newest game first. Stable, so same-day games keep insertion order.
pub fn sort_by_date(games: &mut [Game]) {
    games.sort_by(|a, b| b.date.cmp(&a.date));
}
