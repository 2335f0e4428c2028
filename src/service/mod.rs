//! CatalogService: validated, filtered product reads.

mod catalog;
mod validation;
pub use catalog::CatalogService;
