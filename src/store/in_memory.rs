//! InMemoryFilmStore - process-local store for tests and development.

use std::sync::{Arc, RwLock};

use super::{FilmStore, StoreError};
use crate::film::{default_films, Film};

/// In-memory stand-in for the JSON file.
///
/// `None` plays the role of an absent file: `load` returns the seed and
/// nothing is stored until the first `save`. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryFilmStore {
    films: Arc<RwLock<Option<Vec<Film>>>>,
    seed: Vec<Film>,
}

impl Default for InMemoryFilmStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFilmStore {
    /// Empty store that serves the default seed.
    pub fn new() -> Self {
        Self {
            films: Arc::new(RwLock::new(None)),
            seed: default_films(),
        }
    }

    /// Store that already holds `films`.
    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            films: Arc::new(RwLock::new(Some(films))),
            seed: default_films(),
        }
    }

    /// What has actually been saved, if anything.
    pub fn stored(&self) -> Option<Vec<Film>> {
        self.films.read().ok().and_then(|films| films.clone())
    }
}

impl FilmStore for InMemoryFilmStore {
    fn load(&self) -> Vec<Film> {
        match self.films.read() {
            Ok(films) => films.clone().unwrap_or_else(|| self.seed.clone()),
            Err(_) => {
                log::warn!("in-memory store lock poisoned, serving seed films");
                self.seed.clone()
            }
        }
    }

    fn save(&self, films: &[Film]) -> Result<(), StoreError> {
        let mut stored = self
            .films
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;
        *stored = Some(films.to_vec());
        Ok(())
    }
}
