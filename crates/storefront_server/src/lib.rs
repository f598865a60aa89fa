//! HTTP surface for the storefront service.
//!
//! # Responsibility
//! - Map verbs and paths onto core services, one scoped session per request.
//! - Translate service error kinds into status codes in one place.
//!
//! # Invariants
//! - Handlers never hold a session across an `.await`.
//! - Every response passes through request logging and failure description.

use axum::routing::get;
use axum::{middleware, Router};
use log::info;
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
mod trace;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Builds the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root::read_root))
        .route("/healthz", get(routes::root::get_healthz))
        .route(
            "/items",
            get(routes::items::list_items).post(routes::items::create_item),
        )
        .route(
            "/items/{id}",
            get(routes::items::get_item)
                .put(routes::items::update_item)
                .delete(routes::items::delete_item),
        )
        .route(
            "/stores",
            get(routes::stores::list_stores).post(routes::stores::create_store),
        )
        .route(
            "/stores/{id}",
            get(routes::stores::get_store).delete(routes::stores::delete_store),
        )
        .layer(middleware::from_fn(error::describe_failures))
        .layer(middleware::from_fn(trace::log_requests))
        .with_state(state)
}

/// Serves the application until the process receives Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("event=server_start module=server status=ok addr={addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok addr={addr}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=server_signal module=server status=error error={err}");
    }
}
