mod common;
mod docs;
mod product;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use product::product_routes;
