pub mod aggregate;
pub mod metric;

pub use aggregate::{DayRecord, Product, ProductSeries};
pub use metric::Metric;
