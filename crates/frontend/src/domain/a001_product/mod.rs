pub mod api;
pub mod catalog;

pub use catalog::ProductCatalog;
