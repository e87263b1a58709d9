use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::catalog_store::Catalog;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
    middleware,
    response::{IntoResponse, Response},
    Router,
};

use super::{body::decode_body, log_requests, router::RouteTable, state::*, ServerConfig};

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// Every request lands here. The body is decoded before the catalog lock is
/// taken and the lock is held for the whole handler run.
async fn dispatch_request(
    State(config): State<ServerConfig>,
    State(catalog): State<GuardedCatalog>,
    State(routes): State<SharedRouteTable>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let fields = decode_body(&headers, &body);
    let policy = &config.policy;

    let outcome = {
        let mut guard = match catalog.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Catalog lock was poisoned, recovering.");
                poisoned.into_inner()
            }
        };
        routes.dispatch(&mut guard, policy, &method, uri.path(), fields.as_ref())
    };

    outcome.into_dispatch_response(policy).into_response()
}

pub fn make_app(config: ServerConfig, catalog: Catalog) -> Router {
    let state = ServerState {
        config,
        catalog: Arc::new(Mutex::new(catalog)),
        routes: Arc::new(RouteTable::catalog_routes()),
    };

    Router::new()
        .fallback(dispatch_request)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

pub async fn run_server(config: ServerConfig, catalog: Catalog) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Could not bind to {}", address))?;
    info!("Listening on {}", address);

    let start_time = Instant::now();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(
        "Server stopped after {}",
        format_uptime(start_time.elapsed())
    );
    Ok(())
}
