use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{debug, info, warn};

use crate::model::game::Game;
use crate::repository::traits::GameStore;

const DEFAULT_DIR_NAME: &str = ".goalie";
const DEFAULT_FILE_NAME: &str = "games.json";

/// Keeps the whole collection in one pretty-printed JSON document.
#[derive(Clone, Debug)]
pub struct FileGameStore {
    file_path: PathBuf,
}

impl FileGameStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);
        debug!(path = %path.display(), "opened game store");

        Ok(FileGameStore { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_games(&self) -> Result<Vec<Game>> {
        let content = fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let games = serde_json::from_str(&content)?;
        Ok(games)
    }
}

/// `~/.goalie`
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

impl GameStore for FileGameStore {
    fn load(&self) -> Result<Vec<Game>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        match self.read_games() {
            Ok(games) => Ok(games),
            Err(e) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "unreadable game data, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, games: &[Game]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, games)?;
        writer.flush()?;
        debug!(count = games.len(), "saved games");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        info!("cleared all games");
        Ok(())
    }
}
