mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::responder::{ResponderQueue, ResponderWorker},
    startup,
    state::AppState,
};

/// Jobs the auto-responder may have waiting before new mentions are dropped.
const RESPONDER_QUEUE_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load .env before the subscriber reads RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let identity = startup::setup_identity(&config, http_client.clone());
    let blobs = startup::setup_storage(&config, http_client.clone());
    let completion = startup::setup_completion(&config, http_client);

    // Start the auto-responder in a separate task
    let (responder, receiver) = ResponderQueue::channel(RESPONDER_QUEUE_CAPACITY);
    let worker = ResponderWorker::new(
        db.clone(),
        completion,
        config.ai_profile_username.clone(),
        config.ai_profile_id,
    );
    tokio::spawn(worker.run(receiver));

    let app = router::router().with_state(AppState::new(
        db,
        identity,
        blobs,
        responder,
        config.email_redirect_url.clone(),
    ));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
