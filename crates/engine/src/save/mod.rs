mod atomic_io;
mod model;

pub use model::{SaveGame, SavedMember, SAVE_VERSION};

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to read save '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write save '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode save '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse save '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid save '{path}': {message}")]
    Validate { path: PathBuf, message: String },
}

/// Slot-file store for save data. One JSON file per slot under `save_dir`.
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    pub fn slot_path(&self, slot: u32) -> PathBuf {
        self.save_dir.join(format!("slot{slot}.json"))
    }

    /// Slot 0 is reserved for "never saved" and never exists.
    pub fn savefile_exists(&self, slot: u32) -> bool {
        slot != 0 && self.slot_path(slot).is_file()
    }

    pub fn save_game(&self, slot: u32, save: &SaveGame) -> Result<(), SaveError> {
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(save).map_err(|source| SaveError::Encode {
            path: path.clone(),
            source,
        })?;
        atomic_io::write_text_atomic(&path, &json).map_err(|source| SaveError::Write {
            path: path.clone(),
            source,
        })?;
        info!(slot, path = %path.display(), "save_written");
        Ok(())
    }

    pub fn load_game(&self, slot: u32) -> Result<SaveGame, SaveError> {
        let path = self.slot_path(slot);
        let raw = fs::read_to_string(&path).map_err(|source| SaveError::Read {
            path: path.clone(),
            source,
        })?;
        let save: SaveGame = serde_json::from_str(&raw).map_err(|source| SaveError::Parse {
            path: path.clone(),
            source,
        })?;
        model::validate_save_game(&save).map_err(|message| SaveError::Validate {
            path: path.clone(),
            message,
        })?;
        Ok(save)
    }
}
