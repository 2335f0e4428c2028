//! HTTP handlers for product reads.

pub mod product;
pub use product::*;
