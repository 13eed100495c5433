//! FilmStore - the storage dependency behind every handler.
//!
//! The collection is read in full at the start of each request and written
//! back in full after a successful mutation. There is no locking between
//! requests: two overlapping read-modify-write cycles lose one update.

mod error;
mod in_memory;
mod json_file;

pub use error::StoreError;
pub use in_memory::InMemoryFilmStore;
pub use json_file::JsonFileStore;

use crate::film::Film;

/// Whole-collection storage for films.
pub trait FilmStore: Send + Sync {
    /// Read the full collection, or the seed when nothing readable is stored.
    ///
    /// Never creates or alters the backing storage.
    fn load(&self) -> Vec<Film>;

    /// Replace the stored collection with `films`.
    fn save(&self, films: &[Film]) -> Result<(), StoreError>;
}

impl<S: FilmStore + ?Sized> FilmStore for std::sync::Arc<S> {
    fn load(&self) -> Vec<Film> {
        (**self).load()
    }

    fn save(&self, films: &[Film]) -> Result<(), StoreError> {
        (**self).save(films)
    }
}
