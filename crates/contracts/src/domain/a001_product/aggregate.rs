use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Catalog entry returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

/// Measurements of one product for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// 1-based day index within the imported period
    pub day: u32,
    pub inventory: f64,
    pub procurement: f64,
    pub sales: f64,
}

impl DayRecord {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Inventory => self.inventory,
            Metric::Procurement => self.procurement,
            Metric::Sales => self.sales,
        }
    }
}

/// Day-series of one product.
///
/// Returned by `GET /product/{id}` (extra fields are ignored) and as the
/// element type of `GET /products/compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSeries {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub days: Vec<DayRecord>,
}

impl ProductSeries {
    /// Orders days ascending and keeps a single record per day.
    ///
    /// When the server repeats a day the later record replaces the earlier one.
    pub fn normalized(mut self) -> Self {
        self.days.sort_by_key(|record| record.day);
        let mut days: Vec<DayRecord> = Vec::with_capacity(self.days.len());
        for record in self.days {
            match days.last_mut() {
                Some(last) if last.day == record.day => *last = record,
                _ => days.push(record),
            }
        }
        self.days = days;
        self
    }
}
