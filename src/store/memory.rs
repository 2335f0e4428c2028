//! In-process catalog store with the same read semantics as the PostgreSQL one.

use super::{ProductFilter, ProductStore};
use crate::error::AppError;
use crate::model::{Category, NewProduct, Product, ProductWithCategory};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    fn live_category(&self, id: Option<&str>) -> Option<&Category> {
        let id = id?;
        self.categories.iter().find(|c| c.id == id && c.is_live())
    }
}

#[derive(Default)]
pub struct MemoryCatalogStore {
    inner: RwLock<Catalog>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn select(&self, filter: &ProductFilter) -> Vec<ProductWithCategory> {
        let catalog = self.read();
        catalog
            .products
            .iter()
            .filter(|p| p.is_available())
            .filter_map(|p| {
                let category = catalog.live_category(p.category_id.as_deref());
                filter.matches(p, category).then(|| ProductWithCategory {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    image: p.image.clone(),
                    stock: p.stock,
                    category_name: category.map(|c| c.name.clone()),
                })
            })
            .collect()
    }

    pub fn insert_category(&self, name: &str) -> Result<Category, AppError> {
        let category = Category::create(name)?;
        self.write().categories.push(category.clone());
        Ok(category)
    }

    pub fn insert_product(&self, input: NewProduct) -> Result<Product, AppError> {
        let mut catalog = self.write();
        if let Some(ref category_id) = input.category_id {
            if !catalog.categories.iter().any(|c| c.id == *category_id) {
                return Err(AppError::Validation(format!("unknown category: {}", category_id)));
            }
        }
        let product = Product::create(input)?;
        catalog.products.push(product.clone());
        Ok(product)
    }

    pub fn update_stock(&self, id: &str, stock: i32) -> Result<Product, AppError> {
        let mut catalog = self.write();
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("product not found".into()))?;
        product.set_stock(stock)?;
        Ok(product.clone())
    }

    pub fn soft_delete_product(&self, id: &str) -> Result<(), AppError> {
        let mut catalog = self.write();
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("product not found".into()))?;
        product.deleted_at = Some(Utc::now());
        Ok(())
    }

    pub fn soft_delete_category(&self, id: &str) -> Result<(), AppError> {
        let mut catalog = self.write();
        let category = catalog
            .categories
            .iter_mut()
            .find(|c| c.id == id && c.is_live())
            .ok_or_else(|| AppError::NotFound("category not found".into()))?;
        category.deleted_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryCatalogStore {
    async fn find_available(&self, filter: &ProductFilter) -> Result<Vec<ProductWithCategory>, AppError> {
        Ok(self.select(filter))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, stock: i32, category_id: Option<&str>) -> NewProduct {
        NewProduct {
            name: name.into(),
            price: 2.0,
            stock,
            category_id: category_id.map(String::from),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn out_of_stock_and_deleted_products_are_hidden() {
        let store = MemoryCatalogStore::new();
        let kept = store.insert_product(new_product("Kept", 3, None)).unwrap();
        store.insert_product(new_product("Empty", 0, None)).unwrap();
        let gone = store.insert_product(new_product("Gone", 5, None)).unwrap();
        store.soft_delete_product(&gone.id).unwrap();

        let rows = store.find_available(&ProductFilter::All).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, kept.id);
    }

    #[tokio::test]
    async fn deleted_category_drops_name_and_category_matches() {
        let store = MemoryCatalogStore::new();
        let snacks = store.insert_category("Snacks").unwrap();
        store.insert_product(new_product("Chips", 4, Some(&snacks.id))).unwrap();
        store.soft_delete_category(&snacks.id).unwrap();

        let all = store.find_available(&ProductFilter::All).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category_name, None);

        let by_category = store
            .find_available(&ProductFilter::Category(snacks.id.clone()))
            .await
            .unwrap();
        assert!(by_category.is_empty());
    }

    #[tokio::test]
    async fn restocking_makes_a_product_visible() {
        let store = MemoryCatalogStore::new();
        let water = store.insert_product(new_product("Water", 0, None)).unwrap();
        assert!(store.find_available(&ProductFilter::All).await.unwrap().is_empty());

        let updated = store.update_stock(&water.id, 7).unwrap();
        assert_eq!(updated.availability, 1);
        assert_eq!(store.find_available(&ProductFilter::All).await.unwrap().len(), 1);

        store.update_stock(&water.id, 0).unwrap();
        assert!(store.find_available(&ProductFilter::All).await.unwrap().is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let store = MemoryCatalogStore::new();
        let err = store.insert_product(new_product("Cola", 1, Some("nope"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
