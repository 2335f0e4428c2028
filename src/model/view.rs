//! Response-shaped projection of a product and its category name.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One available product joined to the name of its live category.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct ProductWithCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub stock: i32,
    pub category_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<ProductWithCategory> for ProductView {
    fn from(row: ProductWithCategory) -> Self {
        ProductView {
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            stock: row.stock,
            category: row.category_name,
        }
    }
}
