//! Shared fixtures for the films tests.

use film_api::{Film, FilmService, InMemoryFilmStore};
use serde_json::Number;

pub fn film(id: u64, title: &str, duration: u64) -> Film {
    Film::new(id, title, duration, Number::from(10), format!("https://example.com/{id}"))
}

/// Service over a store with nothing saved yet (serves the seed).
pub fn seeded_service() -> FilmService<InMemoryFilmStore> {
    FilmService::new(InMemoryFilmStore::new())
}

pub fn service_with(films: Vec<Film>) -> FilmService<InMemoryFilmStore> {
    FilmService::new(InMemoryFilmStore::with_films(films))
}
