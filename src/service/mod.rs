//! service - the film route handlers, independent of any HTTP framework.
//!
//! `FilmService<S>` holds the injected store and exposes one method per
//! route. Each returns the film(s) to send back or an [`ApiError`] that knows
//! its status code and body. The `http` feature mounts these on axum.

mod error;
mod film_service;
mod input;

#[cfg(feature = "http")]
pub mod http;

pub use error::ApiError;
pub use film_service::FilmService;
