#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_api::config::CorsConfig;
use catalog_api::{app, AppState, CatalogService, Category, MemoryCatalogStore, NewProduct, ProductStore};
use std::sync::Arc;
use tower::ServiceExt;

/// Seeded in-memory catalog plus the router serving it.
pub struct TestApp {
    pub store: Arc<MemoryCatalogStore>,
    pub router: Router,
    pub beverages: Category,
    pub cola_id: String,
    pub water_id: String,
}

/// Beverages: Cola (price 1.5, stock 10) and Water (price 0.5, stock 0).
pub fn beverages_app() -> TestApp {
    let store = Arc::new(MemoryCatalogStore::new());
    let beverages = store.insert_category("Beverages").unwrap();
    let cola = store
        .insert_product(NewProduct {
            name: "Cola".into(),
            price: 1.5,
            stock: 10,
            category_id: Some(beverages.id.clone()),
            ..Default::default()
        })
        .unwrap();
    let water = store
        .insert_product(NewProduct {
            name: "Water".into(),
            price: 0.5,
            stock: 0,
            category_id: Some(beverages.id.clone()),
            ..Default::default()
        })
        .unwrap();

    let router = router_over(store.clone());
    TestApp {
        store,
        router,
        beverages,
        cola_id: cola.id,
        water_id: water.id,
    }
}

/// Full application router over any store, without CORS.
pub fn router_over(store: Arc<dyn ProductStore>) -> Router {
    let state = AppState {
        catalog: CatalogService::new(store),
    };
    app::router(state, &CorsConfig::default()).unwrap()
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
