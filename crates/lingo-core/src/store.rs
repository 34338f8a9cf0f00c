use std::fs;
use std::io;
use std::path::PathBuf;

use lingo_types::TranslationRecord;

/// Persistence seam for the translation history. Implementations are
/// best-effort: `load` never fails, and a failed write leaves the in-memory
/// history authoritative for the rest of the run.
pub trait HistoryStore: Send + Sync {
    /// Restore the persisted history; an unreadable or incompatible slot
    /// reads as empty.
    fn load(&self) -> Vec<TranslationRecord>;

    /// Overwrite the slot with the full history sequence.
    fn save(&self, history: &[TranslationRecord]) -> Result<(), StoreError>;

    /// Remove the slot entirely, not just its contents.
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// History slot realized as a single JSON file named after the versioned
/// storage key.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Vec<TranslationRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("history slot unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(history) => history,
            Err(e) => {
                tracing::debug!("history slot undecodable, starting empty: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, history: &[TranslationRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec(history)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // an absent slot is already cleared
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
