//! Catalog reads: validate raw inputs, run one filtered store read, shape rows into views.

use super::validation::{is_searchable, parse_category_id, parse_price_bound, parse_product_id, require_text};
use crate::error::AppError;
use crate::model::ProductView;
use crate::store::{ProductFilter, ProductStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        CatalogService { store }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }

    /// All available products.
    pub async fn list_all(&self) -> Result<Vec<ProductView>, AppError> {
        self.fetch(ProductFilter::All).await
    }

    /// One available product; any id that does not name one is `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<ProductView, AppError> {
        let not_found = || AppError::NotFound("product not found".into());
        let id = parse_product_id(id).ok_or_else(not_found)?;
        self.fetch(ProductFilter::Id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(not_found)
    }

    pub async fn list_by_name(&self, name: Option<&str>) -> Result<Vec<ProductView>, AppError> {
        let name = require_text(name, "name is required")?;
        if !is_searchable(name) {
            return Ok(Vec::new());
        }
        self.fetch(ProductFilter::NameContains(name.to_string())).await
    }

    /// Inclusive range; `min > max` is accepted and yields nothing.
    pub async fn list_by_price_range(
        &self,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<Vec<ProductView>, AppError> {
        let min = parse_price_bound(min)?;
        let max = parse_price_bound(max)?;
        self.fetch(ProductFilter::PriceBetween { min, max }).await
    }

    pub async fn list_by_category(&self, category: Option<&str>) -> Result<Vec<ProductView>, AppError> {
        let category_id = parse_category_id(category)?;
        self.fetch(ProductFilter::Category(category_id)).await
    }

    async fn fetch(&self, filter: ProductFilter) -> Result<Vec<ProductView>, AppError> {
        let rows = self.store.find_available(&filter).await?;
        tracing::debug!(filter = ?filter, count = rows.len(), "catalog read");
        Ok(rows.into_iter().map(ProductView::from).collect())
    }
}
