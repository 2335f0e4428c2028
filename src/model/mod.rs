pub mod category;
pub mod product;
pub mod view;

pub use category::Category;
pub use product::{availability_for, NewProduct, Product};
pub use view::{ProductView, ProductWithCategory};
