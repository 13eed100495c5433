mod collection;
mod config;
mod film;
mod service;
mod store;

pub use collection::Collection;
pub use config::Config;
pub use film::{default_films, Film};
pub use service::{ApiError, FilmService};
pub use store::{FilmStore, InMemoryFilmStore, JsonFileStore, StoreError};

#[cfg(feature = "http")]
pub use service::http;
