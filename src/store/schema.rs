//! Catalog DDL and database bootstrap. Tables live in the schema named by `DB_SCHEMA` (default `public`).

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified, quoted table name (e.g. `"public"."products"`).
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// Create the schema, `categories` and `products` if they do not exist. Idempotent.
pub async fn ensure_catalog_tables(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;

    let categories = qualified_table(schema, "categories");
    let products = qualified_table(schema, "products");

    let categories_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ
        )
        "#,
        categories
    );
    sqlx::query(&categories_ddl).execute(pool).await?;

    // availability is derived from stock; the check keeps writers outside this crate honest.
    let products_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
            image TEXT,
            stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
            availability SMALLINT NOT NULL DEFAULT 0
                CHECK (availability = CASE WHEN stock > 0 THEN 1 ELSE 0 END),
            category_id TEXT REFERENCES {} (id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ
        )
        "#,
        products, categories
    );
    sqlx::query(&products_ddl).execute(pool).await?;

    let index_ddl = format!(
        "CREATE INDEX IF NOT EXISTS products_category_id_idx ON {} (category_id)",
        products
    );
    sqlx::query(&index_ddl).execute(pool).await?;

    tracing::info!(schema = %schema, "catalog tables ready");
    Ok(())
}

/// Ensure the database named in `options` exists; create it if not. Connects to the
/// maintenance `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = options.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}
