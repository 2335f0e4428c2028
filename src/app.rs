//! Router assembly and the startup path that wires config, pool, schema and service.

use crate::config::{AppConfig, CorsConfig};
use crate::error::{AppError, ConfigError};
use crate::routes::{common_routes, docs_routes, product_routes};
use crate::service::CatalogService;
use crate::state::AppState;
use crate::store::{ensure_catalog_tables, ensure_database_exists, PgCatalogStore};
use axum::http::{HeaderValue, Method};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// All routes with tracing and, when origins are configured, CORS.
pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router, AppError> {
    let mut app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .merge(docs_routes())
        .layer(TraceLayer::new_for_http());

    if !cors.allowed_origins.is_empty() {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    key: "CORS_ALLOWED_ORIGINS".into(),
                    value: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        app = app.layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_origin(origins),
        );
    }

    Ok(app)
}

/// Connect to PostgreSQL, bring the catalog schema up if configured, and build the router.
pub async fn build(config: &AppConfig) -> Result<Router, AppError> {
    let db = &config.database;
    let options = db.connect_options()?;
    if db.create_if_missing {
        ensure_database_exists(&options).await?;
    }

    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout)
        .connect_with(options)
        .await?;
    tracing::info!(
        max_connections = db.max_connections,
        schema = %db.schema,
        "database connection established"
    );

    if db.sync_schema {
        ensure_catalog_tables(&pool, &db.schema).await?;
    }

    let store = PgCatalogStore::new(pool, db.schema.clone());
    let state = AppState {
        catalog: CatalogService::new(Arc::new(store)),
    };
    router(state, &config.cors)
}
