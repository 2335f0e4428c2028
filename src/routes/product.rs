//! Product read routes.

use crate::handlers::product::{get_product, list_products, search_by_category, search_by_name, search_by_price};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/product-details/:id", get(get_product))
        .route("/products/search/by-name", get(search_by_name))
        .route("/products/search/by-price", get(search_by_price))
        .route("/products/search/by-category", get(search_by_category))
        .with_state(state)
}
