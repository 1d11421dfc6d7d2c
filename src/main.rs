mod model;
mod server;
mod view;

use dioxus_logger::tracing::{self, Level};
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    startup::ensure_admin_user(&db, &config).await?;

    let app = router::router(&config)
        .with_state(AppState::new(db, config.upload_dir.clone()))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
