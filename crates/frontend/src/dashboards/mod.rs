pub mod d400_product_series;

pub use d400_product_series::ui::ProductSeriesDashboard;
