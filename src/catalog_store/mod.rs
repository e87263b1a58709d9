mod load;
mod models;
mod query;
mod store;
mod validation;

pub use load::load_catalog;
pub use models::*;
pub use query::QueryResolver;
pub use store::{Catalog, StoreError};
pub use validation::{validate_name, validate_song, Fields, ValidationError, ValidationResult};
