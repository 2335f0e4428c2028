use crate::error::AppError;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn create(name: &str) -> Result<Self, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("category name is required".into()));
        }
        let now = Utc::now();
        Ok(Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}
