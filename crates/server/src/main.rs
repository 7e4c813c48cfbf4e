mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

#[cfg(test)]
mod test_utils;

use crate::{config::Config, state::AppState, utils::shutdown::shutdown_signal};
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dotenv_path = config::load_dotenv();
    env_logger::init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Database migrations are up to date");

    let app = routes::router(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
