//! Runtime configuration, from flags or the environment.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "film-api", version, about = "REST API over a JSON file of films")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "FILM_API_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,

    /// JSON file holding the film collection.
    #[arg(long, env = "FILM_API_DB", default_value = "data/films.json")]
    pub db: PathBuf,
}
