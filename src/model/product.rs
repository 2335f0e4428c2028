//! Product rows and the stock-derived availability flag.

use crate::error::AppError;
use chrono::{DateTime, Utc};

/// Availability is derived from stock and must be recomputed before every write.
pub fn availability_for(stock: i32) -> i16 {
    if stock > 0 {
        1
    } else {
        0
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub stock: i32,
    pub availability: i16,
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input for the administrative insert path.
#[derive(Clone, Debug, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub stock: i32,
    pub category_id: Option<String>,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::Validation("price must be a non-negative number".into()));
        }
        validate_stock(self.stock)
    }
}

pub(crate) fn validate_stock(stock: i32) -> Result<(), AppError> {
    if stock < 0 {
        return Err(AppError::Validation("stock must be at least 0".into()));
    }
    Ok(())
}

impl Product {
    /// Build a new row with a generated id and availability derived from stock.
    pub fn create(input: NewProduct) -> Result<Self, AppError> {
        input.validate()?;
        let now = Utc::now();
        Ok(Product {
            id: uuid::Uuid::new_v4().to_string(),
            availability: availability_for(input.stock),
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            stock: input.stock,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    pub fn set_stock(&mut self, stock: i32) -> Result<(), AppError> {
        validate_stock(stock)?;
        self.stock = stock;
        self.availability = availability_for(stock);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.availability == 1 && self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cola(stock: i32) -> NewProduct {
        NewProduct {
            name: "Cola".into(),
            price: 1.5,
            stock,
            ..Default::default()
        }
    }

    #[test]
    fn availability_follows_stock() {
        assert_eq!(availability_for(0), 0);
        assert_eq!(availability_for(-3), 0);
        assert_eq!(availability_for(1), 1);
        assert_eq!(availability_for(i32::MAX), 1);
    }

    #[test]
    fn create_derives_availability() {
        assert_eq!(Product::create(cola(10)).unwrap().availability, 1);
        assert_eq!(Product::create(cola(0)).unwrap().availability, 0);
    }

    #[test]
    fn set_stock_recomputes_availability() {
        let mut p = Product::create(cola(10)).unwrap();
        p.set_stock(0).unwrap();
        assert_eq!(p.availability, 0);
        assert!(!p.is_available());
        p.set_stock(4).unwrap();
        assert_eq!(p.availability, 1);
        assert!(p.is_available());
    }

    #[test]
    fn rejects_negative_stock_and_price() {
        assert!(matches!(Product::create(cola(-1)), Err(AppError::Validation(_))));
        let mut input = cola(1);
        input.price = -0.5;
        assert!(matches!(Product::create(input), Err(AppError::Validation(_))));
        let mut p = Product::create(cola(1)).unwrap();
        assert!(p.set_stock(-2).is_err());
        assert_eq!(p.stock, 1);
    }

    #[test]
    fn rejects_blank_name() {
        let mut input = cola(1);
        input.name = "  ".into();
        assert!(Product::create(input).is_err());
    }

    #[test]
    fn soft_deleted_product_is_not_available() {
        let mut p = Product::create(cola(3)).unwrap();
        p.deleted_at = Some(Utc::now());
        assert!(!p.is_available());
    }
}
