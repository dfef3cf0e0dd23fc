//! HTTP server for the contact list.
//!
//! Routes:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/contacts` | list, newest first |
//! | POST | `/api/contacts` | create |
//! | GET | `/api/contacts/{id}` | fetch one |
//! | PUT | `/api/contacts/{id}` | replace name and phone |
//! | DELETE | `/api/contacts/{id}` | delete |
//! | GET | `/api/health` | store reachability and request counters |

pub mod envelope;
pub mod handlers;

use crate::observability::MetricsTracker;
use crate::services::ContactService;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub metrics: MetricsTracker,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self {
            service,
            metrics: MetricsTracker::new(),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/api/health", get(handlers::health))
        .with_state(state)
}

/// Serve `router` on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    info!(address = %listener.local_addr()?, "Contacts API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind `address` and serve `router` until Ctrl-C.
pub async fn run_server(address: SocketAddr, router: Router) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    serve(listener, router).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
