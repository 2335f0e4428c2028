//! Parsing and validation of raw filter inputs.

use crate::error::AppError;

/// Non-empty text or `BadRequest(message)`.
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// One price bound. Missing, unparsable and NaN values are rejected; infinities are allowed.
pub fn parse_price_bound(value: Option<&str>) -> Result<f64, AppError> {
    value
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| !n.is_nan())
        .ok_or_else(|| AppError::BadRequest("invalid price range".into()))
}

/// Product ids in canonical UUID form; `None` for anything that cannot name a product.
pub fn parse_product_id(value: &str) -> Option<String> {
    uuid::Uuid::parse_str(value.trim()).ok().map(|u| u.to_string())
}

/// Stored text never holds NUL, so a needle containing one matches nothing.
pub fn is_searchable(text: &str) -> bool {
    !text.contains('\0')
}

/// Category ids are UUID strings; anything else cannot name a category.
pub fn parse_category_id(value: Option<&str>) -> Result<String, AppError> {
    let raw = require_text(value, "category is required")?;
    uuid::Uuid::parse_str(raw.trim())
        .map(|u| u.to_string())
        .map_err(|_| AppError::BadRequest("invalid category id".into()))
}
