//! PostgreSQL-backed catalog store. Reads are built with `QueryBuilder` so
//! every filter value is bound, never interpolated.

use super::schema::qualified_table;
use super::{ProductFilter, ProductStore};
use crate::error::AppError;
use crate::model::{availability_for, product::validate_stock, Category, NewProduct, Product, ProductWithCategory};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
    schema: String,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgCatalogStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert_category(&self, name: &str) -> Result<Category, AppError> {
        let category = Category::create(name)?;
        let sql = format!(
            "INSERT INTO {} (id, name, created_at, updated_at) VALUES ($1, $2, $3, $4)",
            qualified_table(&self.schema, "categories")
        );
        sqlx::query(&sql)
            .bind(&category.id)
            .bind(&category.name)
            .bind(category.created_at)
            .bind(category.updated_at)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id = %category.id, "category inserted");
        Ok(category)
    }

    pub async fn insert_product(&self, input: NewProduct) -> Result<Product, AppError> {
        let product = Product::create(input)?;
        let sql = format!(
            r#"
            INSERT INTO {} (id, name, description, price, image, stock, availability, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
            qualified_table(&self.schema, "products")
        );
        sqlx::query(&sql)
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image)
            .bind(product.stock)
            .bind(product.availability)
            .bind(&product.category_id)
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id = %product.id, availability = product.availability, "product inserted");
        Ok(product)
    }

    /// Set stock and recompute availability in the same statement.
    pub async fn update_stock(&self, id: &str, stock: i32) -> Result<Product, AppError> {
        validate_stock(stock)?;
        let sql = format!(
            "UPDATE {} SET stock = $2, availability = $3, updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL RETURNING *",
            qualified_table(&self.schema, "products")
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(stock)
            .bind(availability_for(stock))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("product not found".into()))
    }

    pub async fn soft_delete_product(&self, id: &str) -> Result<(), AppError> {
        self.soft_delete("products", id, "product not found").await
    }

    pub async fn soft_delete_category(&self, id: &str) -> Result<(), AppError> {
        self.soft_delete("categories", id, "category not found").await
    }

    async fn soft_delete(&self, table: &str, id: &str, missing: &str) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            qualified_table(&self.schema, table)
        );
        let done = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(missing.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgCatalogStore {
    async fn find_available(&self, filter: &ProductFilter) -> Result<Vec<ProductWithCategory>, AppError> {
        let mut query = select_available(&self.schema, filter);
        tracing::debug!(sql = %query.sql(), filter = ?filter, "query");
        let rows = query
            .build_query_as::<ProductWithCategory>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// SELECT over available products with the live category joined for its name.
pub(crate) fn select_available(schema: &str, filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
        "SELECT p.id, p.name, p.description, p.price, p.image, p.stock, c.name AS category_name \
         FROM {} p \
         LEFT JOIN {} c ON c.id = p.category_id AND c.deleted_at IS NULL \
         WHERE p.availability = 1 AND p.deleted_at IS NULL",
        qualified_table(schema, "products"),
        qualified_table(schema, "categories"),
    ));

    match filter {
        ProductFilter::All => {}
        ProductFilter::Id(id) => {
            query.push(" AND p.id = ");
            query.push_bind(id.clone());
        }
        ProductFilter::NameContains(needle) => {
            query.push(" AND p.name LIKE ");
            query.push_bind(format!("%{}%", escape_like(needle)));
            query.push(" ESCAPE '\\'");
        }
        ProductFilter::PriceBetween { min, max } => {
            query.push(" AND p.price BETWEEN ");
            query.push_bind(*min);
            query.push(" AND ");
            query.push_bind(*max);
        }
        ProductFilter::Category(id) => {
            query.push(" AND c.id = ");
            query.push_bind(id.clone());
        }
    }

    query.push(" ORDER BY p.created_at, p.id");
    query
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
