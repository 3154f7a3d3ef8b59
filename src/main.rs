use axum::serve;
use dotenvy::dotenv;
use link_analytics::config::Config;
use link_analytics::routes::{create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_TRACING_LEVEL: &str = "link_analytics=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    _ = dotenv();
    configure_tracing();
    let config = Config::from_env().expect("Loading configuration failed");
    tracing::info!(
        recency_window_days = config.policy.recency_window.num_days(),
        popularity_threshold = config.policy.popularity_threshold,
        "Analytics policy loaded"
    );
    let listener = create_listener(&config.server_address).await;
    let router = create_router(AppState {
        policy: config.policy,
    });
    serve(listener, router)
        .await
        .expect("Server failed to start");
}

fn configure_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or(DEFAULT_TRACING_LEVEL.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn create_listener(server_address: &str) -> TcpListener {
    let listener = TcpListener::bind(&server_address)
        .await
        .expect("Creating tcp listener failed");
    tracing::info!("Listening on address: {}", server_address);
    listener
}
