//! # Quizfeed
//!
//! Daily quiz API.
//!
//! Question content comes from a generative-text provider and is cached
//! wholesale in memory; a resident task replaces the pool on a fixed
//! interval. Every day all clients see the same deterministic selection of
//! questions, picked by a date-seeded shuffle over the current pool.
//!
//! ## Endpoints
//!
//! - `GET /api/quiz` -- today's questions, correct answers stripped
//! - `GET /api/answer-key` -- question id to correct-choice index, for the
//!   same daily selection
//!
//! Both return 503 until the pool has been populated at least once. There
//! is no persistence: the pool is rebuilt from the provider on every
//! start.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod refresh;
pub mod routes;
pub mod sampler;
pub mod state;

use config::Config;
use routes::{answer_key_handler, quiz_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new(Config::load());

    info!("Starting refresh task...");
    refresh::spawn(state.clone());

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/quiz", get(quiz_handler))
        .route("/api/answer-key", get(answer_key_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
