//! Shared application state for all routes. Built once in `main` and cloned per request.

use crate::service::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}
