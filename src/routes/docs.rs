//! OpenAPI document generated from the handler annotations, plus a Swagger UI page.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::product;
use crate::model::ProductView;
use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Products Client API", description = "Read-only queries over the product catalog"),
    paths(
        product::list_products,
        product::get_product,
        product::search_by_name,
        product::search_by_price,
        product::search_by_category
    ),
    components(schemas(ProductView, ErrorBody, ErrorDetail)),
    tags((name = "Products", description = "Product management and filtering"))
)]
pub struct ApiDoc;

const OPENAPI_PATH: &str = "/api-docs/openapi.json";

const VIEWER_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Products Client API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn viewer() -> Html<&'static str> {
    Html(VIEWER_HTML)
}

/// GET /api-docs (viewer) and GET /api-docs/openapi.json.
pub fn docs_routes() -> Router {
    Router::new()
        .route("/api-docs", get(viewer))
        .route(OPENAPI_PATH, get(openapi_json))
}
