//! JsonFileStore - the collection as a single JSON array on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{FilmStore, StoreError};
use crate::film::{default_films, Film};

/// File-backed store. Reads and rewrites the whole file on every call.
///
/// The write is a plain overwrite, not a rename, so a crash mid-write can
/// leave a truncated file; the next `load` then falls back to the seed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    seed: Vec<Film>,
}

impl JsonFileStore {
    /// Store at `path`, falling back to the three default films.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, default_films())
    }

    pub fn with_seed(path: impl Into<PathBuf>, seed: Vec<Film>) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FilmStore for JsonFileStore {
    fn load(&self) -> Vec<Film> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "cannot read {} ({}), serving seed films",
                    self.path.display(),
                    e
                );
                return self.seed.clone();
            }
        };

        let records: Vec<Value> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "cannot parse {} ({}), serving seed films",
                    self.path.display(),
                    e
                );
                return self.seed.clone();
            }
        };

        // A record that no longer fits `Film` is dropped on its own; the next
        // save rewrites the file without it.
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(film) => Some(film),
                Err(e) => {
                    log::warn!(
                        "skipping record {} of {} ({})",
                        index,
                        self.path.display(),
                        e
                    );
                    None
                }
            })
            .collect()
    }

    fn save(&self, films: &[Film]) -> Result<(), StoreError> {
        let json = serde_json::to_string(films)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("wrote {} films to {}", films.len(), self.path.display());
        Ok(())
    }
}
