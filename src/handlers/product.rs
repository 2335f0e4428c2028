//! Product read handlers. Each one extracts its inputs, calls a single
//! `CatalogService` operation, and leaves error rendering to `AppError`.

use crate::error::{AppError, ErrorBody};
use crate::model::ProductView;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use std::collections::HashMap;

/// Raw query parameters; a repeated key keeps its last value.
type Params = Query<HashMap<String, String>>;

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

/// GET /products: all available products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductView>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, AppError> {
    Ok(Json(state.catalog.list_all().await?))
}

/// GET /products/product-details/:id
#[utoipa::path(
    get,
    path = "/products/product-details/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    responses(
        (status = 200, description = "Product found", body = ProductView),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProductView>, AppError> {
    // An id that does not even decode cannot name a product.
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "undecodable product id");
        AppError::NotFound("product not found".into())
    })?;
    Ok(Json(state.catalog.get_by_id(&id).await?))
}

/// GET /products/search/by-name?name=
#[utoipa::path(
    get,
    path = "/products/search/by-name",
    tag = "Products",
    params(("name" = String, Query, description = "Name or part of the name to search")),
    responses(
        (status = 200, description = "List of matching products", body = Vec<ProductView>),
        (status = 400, description = "Name missing", body = ErrorBody)
    )
)]
pub async fn search_by_name(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<ProductView>>, AppError> {
    Ok(Json(state.catalog.list_by_name(param(&params, "name")).await?))
}

/// GET /products/search/by-price?min=&max=
#[utoipa::path(
    get,
    path = "/products/search/by-price",
    tag = "Products",
    params(
        ("min" = f64, Query, description = "Minimum price"),
        ("max" = f64, Query, description = "Maximum price")
    ),
    responses(
        (status = 200, description = "List of products within the price range", body = Vec<ProductView>),
        (status = 400, description = "Bound missing or not a number", body = ErrorBody)
    )
)]
pub async fn search_by_price(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<ProductView>>, AppError> {
    let products = state
        .catalog
        .list_by_price_range(param(&params, "min"), param(&params, "max"))
        .await?;
    Ok(Json(products))
}

/// GET /products/search/by-category?category=
#[utoipa::path(
    get,
    path = "/products/search/by-category",
    tag = "Products",
    params(("category" = String, Query, description = "Category ID (UUID)")),
    responses(
        (status = 200, description = "List of products by category", body = Vec<ProductView>),
        (status = 400, description = "Category missing or invalid", body = ErrorBody)
    )
)]
pub async fn search_by_category(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<ProductView>>, AppError> {
    Ok(Json(state.catalog.list_by_category(param(&params, "category")).await?))
}
