mod body;
pub mod config;
mod handlers;
mod http_layers;
pub mod router;
pub mod server;
pub mod state;

pub use config::{LegacyPolicy, ServerConfig};
pub use handlers::{HandlerError, BODY_ERROR_MESSAGE, DELETED_MESSAGE};
pub use http_layers::*;
pub use router::{RouteTable, ENDPOINT_NOT_FOUND};
pub use server::run_server;
