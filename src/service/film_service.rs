//! FilmService - one method per route.
//!
//! Every call loads the full collection from the store, works on it in
//! memory and, for mutations that succeed, writes the whole collection back.
//!
//! ## Example
//!
//! ```ignore
//! use film_api::{FilmService, InMemoryFilmStore};
//! use serde_json::json;
//!
//! let service = FilmService::new(InMemoryFilmStore::new());
//! let film = service.create(&json!({
//!     "title": "Nope", "budget": 1, "duration": 1, "link": "x"
//! }))?;
//! assert_eq!(film.id, 4);
//! ```

use serde_json::Value;

use super::error::ApiError;
use super::input::{parse_id, parse_minimum_duration, patch_fields, FilmInput};
use crate::collection::Collection;
use crate::film::Film;
use crate::store::FilmStore;

/// Request handlers over an injected [`FilmStore`].
pub struct FilmService<S> {
    store: S,
}

impl<S: FilmStore> FilmService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> Collection {
        Collection::new(self.store.load())
    }

    fn persist(&self, films: &Collection) -> Result<(), ApiError> {
        self.store.save(films.films()).map_err(|e| {
            log::error!("failed to persist films: {}", e);
            ApiError::from(e)
        })
    }

    /// `GET /:id`
    pub fn get(&self, id: &str) -> Result<Film, ApiError> {
        log::info!("GET /films/{}", id);
        let id = parse_id(id)?;
        self.load().find_by_id(id).cloned().ok_or(ApiError::NotFound)
    }

    /// `GET /`, optionally filtered by `minimum-duration`.
    pub fn list(&self, minimum_duration: Option<&str>) -> Result<Vec<Film>, ApiError> {
        log::info!("GET /films");
        let minimum = parse_minimum_duration(minimum_duration)?;
        let films = self.load();
        Ok(match minimum {
            Some(minutes) => films.with_minimum_duration(minutes),
            None => films.into_films(),
        })
    }

    /// `POST /` - create a film with the next positional id.
    pub fn create(&self, body: &Value) -> Result<Film, ApiError> {
        log::info!("POST /films");
        let input = FilmInput::from_body(body)?;

        let mut films = self.load();
        if films.find_by_title(&input.title).is_some() {
            return Err(ApiError::Conflict(
                "Film with the same title already exist".to_string(),
            ));
        }

        let id = films.next_id().ok_or_else(|| {
            log::error!("no film id left after {:?}", films.films().last().map(|f| f.id));
            ApiError::IdExhausted
        })?;
        let film = input.into_film(id);
        films.append(film.clone());
        self.persist(&films)?;
        Ok(film)
    }

    /// `DELETE /:id` - remove the first match and return it.
    pub fn delete(&self, id: &str) -> Result<Film, ApiError> {
        log::info!("DELETE /films/{}", id);
        let id = parse_id(id)?;

        let mut films = self.load();
        let index = films.find_index_by_id(id).ok_or(ApiError::NotFound)?;
        let removed = films.remove_at(index).ok_or(ApiError::NotFound)?;
        self.persist(&films)?;
        Ok(removed)
    }

    /// `PATCH /:id` - shallow-merge the raw body over the stored film.
    ///
    /// Only `title`/`link` emptiness and the presence of one known field are
    /// checked; the merge itself copies every body key, unknown ones included,
    /// and does not re-check signs.
    pub fn patch(&self, id: &str, body: &Value) -> Result<Film, ApiError> {
        log::info!("PATCH /films/{}", id);
        let id = parse_id(id)?;
        let fields = patch_fields(body)?;

        let mut films = self.load();
        let index = films.find_index_by_id(id).ok_or(ApiError::NotFound)?;
        let current = films.get(index).ok_or(ApiError::NotFound)?;
        let updated = current.merged_with(fields).ok_or(ApiError::InvalidData)?;

        films.replace_at(index, updated.clone());
        self.persist(&films)?;
        Ok(updated)
    }

    /// `PUT /:id` - replace the four fields of an existing film, or create one
    /// with exactly this id.
    ///
    /// The create branch appends to the loaded collection but never saves it,
    /// so the new film is gone on the next load.
    pub fn put(&self, id: &str, body: &Value) -> Result<Film, ApiError> {
        log::info!("PUT /films/{}", id);
        let id = parse_id(id)?;
        let input = FilmInput::from_body(body)?;

        let mut films = self.load();
        match films.find_index_by_id(id) {
            None => {
                // Always false: the lookup above already missed.
                if films.find_by_id(id).is_some() {
                    return Err(ApiError::Conflict(
                        "Film with the same id already exist".to_string(),
                    ));
                }
                let film = input.into_film(id);
                films.append(film.clone());
                log::debug!("created film {} in memory only", id);
                Ok(film)
            }
            Some(index) => {
                let mut updated = films.get(index).cloned().ok_or(ApiError::NotFound)?;
                updated.title = input.title;
                updated.budget = input.budget;
                updated.duration = input.duration;
                updated.link = input.link;

                films.replace_at(index, updated.clone());
                self.persist(&films)?;
                Ok(updated)
            }
        }
    }
}
