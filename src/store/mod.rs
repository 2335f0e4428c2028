//! Read access to available products, behind a trait so the service can run
//! against PostgreSQL or the in-process store.

mod memory;
mod postgres;
pub mod schema;

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;
pub use schema::{ensure_catalog_tables, ensure_database_exists};

use crate::error::AppError;
use crate::model::{Category, Product, ProductWithCategory};
use async_trait::async_trait;

/// Criteria for one filtered read. Every variant is implicitly restricted to
/// available, non-deleted products.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductFilter {
    All,
    Id(String),
    /// Case-sensitive substring match on the product name.
    NameContains(String),
    /// Inclusive on both ends; an inverted range matches nothing.
    PriceBetween { min: f64, max: f64 },
    /// Id of a live category.
    Category(String),
}

impl ProductFilter {
    /// `category` is the product's related category if it exists and is not soft-deleted.
    pub fn matches(&self, product: &Product, category: Option<&Category>) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Id(id) => product.id == *id,
            ProductFilter::NameContains(needle) => product.name.contains(needle.as_str()),
            ProductFilter::PriceBetween { min, max } => *min <= product.price && product.price <= *max,
            ProductFilter::Category(id) => category.map_or(false, |c| c.id == *id),
        }
    }
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Available products matching `filter`, each with its live category name.
    async fn find_available(&self, filter: &ProductFilter) -> Result<Vec<ProductWithCategory>, AppError>;

    /// Cheap connectivity check used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    fn product(name: &str, price: f64, category: Option<&Category>) -> Product {
        Product::create(NewProduct {
            name: name.into(),
            price,
            stock: 1,
            category_id: category.map(|c| c.id.clone()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn name_match_is_case_sensitive_substring() {
        let p = product("Sparkling Water", 1.0, None);
        assert!(ProductFilter::NameContains("Water".into()).matches(&p, None));
        assert!(ProductFilter::NameContains("kling W".into()).matches(&p, None));
        assert!(!ProductFilter::NameContains("water".into()).matches(&p, None));
    }

    #[test]
    fn price_range_is_inclusive() {
        let p = product("Cola", 1.5, None);
        assert!(ProductFilter::PriceBetween { min: 1.5, max: 1.5 }.matches(&p, None));
        assert!(ProductFilter::PriceBetween { min: 0.0, max: 2.0 }.matches(&p, None));
        assert!(!ProductFilter::PriceBetween { min: 1.6, max: 2.0 }.matches(&p, None));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let p = product("Cola", 1.5, None);
        assert!(!ProductFilter::PriceBetween { min: 2.0, max: 1.0 }.matches(&p, None));
    }

    #[test]
    fn category_filter_needs_the_live_category() {
        let beverages = Category::create("Beverages").unwrap();
        let p = product("Cola", 1.5, Some(&beverages));
        let filter = ProductFilter::Category(beverages.id.clone());
        assert!(filter.matches(&p, Some(&beverages)));
        assert!(!filter.matches(&p, None));
        assert!(!ProductFilter::Category("other".into()).matches(&p, Some(&beverages)));
    }

    #[test]
    fn id_filter_matches_exactly() {
        let p = product("Cola", 1.5, None);
        assert!(ProductFilter::Id(p.id.clone()).matches(&p, None));
        assert!(!ProductFilter::Id(p.id[..8].to_string()).matches(&p, None));
    }
}
