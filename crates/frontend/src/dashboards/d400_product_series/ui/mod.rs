pub mod compare_chart;
pub mod dashboard;
pub mod series_table;
pub mod summary_cards;

pub use dashboard::ProductSeriesDashboard;
