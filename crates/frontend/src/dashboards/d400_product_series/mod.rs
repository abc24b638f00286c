//! Per-product inventory / procurement / sales dashboard.
//!
//! Everything except `api` and `ui` is pure and runs without a browser:
//! the view dispatches [`selection::SelectionEvent`]s into
//! [`store::DashboardStore`], spawns the returned fetch ticket and feeds the
//! response back through [`store::DashboardStore::complete`].

pub mod aligner;
pub mod api;
pub mod fetcher;
pub mod selection;
pub mod store;
pub mod summary;
pub mod ui;
pub mod visibility;
