use axum::extract::FromRef;

use crate::catalog_store::Catalog;
use std::sync::{Arc, Mutex};

use super::router::RouteTable;
use super::ServerConfig;

/// Every request touches the catalog under this one lock, so operations are
/// applied one at a time.
pub type GuardedCatalog = Arc<Mutex<Catalog>>;
pub type SharedRouteTable = Arc<RouteTable>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub catalog: GuardedCatalog,
    pub routes: SharedRouteTable,
}

impl FromRef<ServerState> for GuardedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for SharedRouteTable {
    fn from_ref(input: &ServerState) -> Self {
        input.routes.clone()
    }
}
