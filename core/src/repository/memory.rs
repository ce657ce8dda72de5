use std::cell::RefCell;

use anyhow::Result;

use crate::model::game::Game;
use crate::repository::traits::GameStore;

/// In-process store with no persistence.
#[derive(Default, Debug)]
pub struct MemoryGameStore {
    games: RefCell<Vec<Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: RefCell::new(games),
        }
    }
}

impl GameStore for MemoryGameStore {
    fn load(&self) -> Result<Vec<Game>> {
        Ok(self.games.borrow().clone())
    }

    fn save(&self, games: &[Game]) -> Result<()> {
        *self.games.borrow_mut() = games.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.games.borrow_mut().clear();
        Ok(())
    }
}
