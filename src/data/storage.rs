use super::AppData;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DATA_FILE: &str = "data.json";
const BACKUP_FILE: &str = "data.json.bak";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access app data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse app data: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// Persistence for the shared app data, enabling mock storage in tests.
#[cfg_attr(test, mockall::automock)]
pub trait DataStore {
    /// Load saved data. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppData>, StoreError>;
    fn save(&self, data: &AppData) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
    /// Copy the saved data aside so a later `save` cannot destroy it.
    /// Returns where the copy went, or `None` if there was nothing to copy.
    fn backup(&self) -> Result<Option<PathBuf>, StoreError>;
}

/// File-based data storage: `data.json` in the config directory.
pub struct FileStore {
    config_dir: PathBuf,
}

impl FileStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(DATA_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.config_dir.join(BACKUP_FILE)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<AppData>, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let mut data: AppData = serde_json::from_str(&contents)?;
        data.clamp_selection();
        Ok(Some(data))
    }

    fn save(&self, data: &AppData) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.config_dir)?;
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(self.path(), json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn backup(&self) -> Result<Option<PathBuf>, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        std::fs::copy(&path, &backup)?;
        Ok(Some(backup))
    }
}
