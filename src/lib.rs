//! Catalog API: read-only product catalog over PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Category, NewProduct, Product, ProductView};
pub use routes::ApiDoc;
pub use service::CatalogService;
pub use state::AppState;
pub use store::{MemoryCatalogStore, PgCatalogStore, ProductFilter, ProductStore};
