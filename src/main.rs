use std::sync::Arc;

use clap::Parser;
use film_api::{http, Config, FilmService, JsonFileStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let store = JsonFileStore::new(&config.db);
    log::info!("serving films from {}", store.path().display());

    let service = Arc::new(FilmService::new(store));
    http::serve(service, &config.addr).await
}
