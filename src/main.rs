mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server");

    axum::serve(listener, router::router(AppState::new(db)))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
