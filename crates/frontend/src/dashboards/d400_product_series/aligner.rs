//! Merges several per-product day-series into one day-ordered table.
//!
//! Values are keyed by product id. Truncated product names are display
//! labels only and never take part in the join.

use std::collections::{BTreeMap, HashMap};

use contracts::domain::a001_product::{Metric, ProductSeries};
use serde_json::{Map, Value};

/// Characters of the product name kept in a display label
pub const LABEL_PREFIX_CHARS: usize = 10;

/// Short legend label: the first `LABEL_PREFIX_CHARS` characters plus an ellipsis
pub fn display_label(name: &str) -> String {
    let prefix: String = name.chars().take(LABEL_PREFIX_CHARS).collect();
    format!("{}...", prefix)
}

/// Key of one product/metric column in chart points, e.g. `0000001_sales`
pub fn column_key(product_id: &str, metric: Metric) -> String {
    format!("{}_{}", product_id, metric.key())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesColumn {
    pub product_id: String,
    /// Unique among the table's columns
    pub label: String,
}

/// One day's values across every product that reported that day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedRow {
    pub day: u32,
    values: BTreeMap<(String, Metric), f64>,
}

impl MergedRow {
    /// `None` when the product has no record for this day
    pub fn value(&self, product_id: &str, metric: Metric) -> Option<f64> {
        self.values
            .get(&(product_id.to_string(), metric))
            .copied()
    }

    /// Flat JSON object for a charting library:
    /// `{"day": 1, "<id>_inventory": 10, ...}`; absent products have no keys.
    pub fn chart_point(&self) -> Value {
        let mut point = Map::new();
        point.insert("day".to_string(), Value::from(self.day));
        for ((product_id, metric), value) in &self.values {
            point.insert(column_key(product_id, *metric), Value::from(*value));
        }
        Value::Object(point)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedTable {
    pub columns: Vec<SeriesColumn>,
    pub rows: Vec<MergedRow>,
}

impl MergedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Chart points for every row, ascending by day
    pub fn chart_points(&self) -> Vec<Value> {
        self.rows.iter().map(MergedRow::chart_point).collect()
    }
}

/// Align `series` (in selection order) on the union of their days.
pub fn align_series(series: &[ProductSeries]) -> MergedTable {
    let mut accumulator: BTreeMap<u32, MergedRow> = BTreeMap::new();
    let mut columns: Vec<SeriesColumn> = Vec::new();

    for product in series {
        if !columns.iter().any(|c| c.product_id == product.id) {
            columns.push(SeriesColumn {
                product_id: product.id.clone(),
                label: display_label(&product.name),
            });
        }
        for record in &product.days {
            let row = accumulator.entry(record.day).or_insert_with(|| MergedRow {
                day: record.day,
                values: BTreeMap::new(),
            });
            for metric in Metric::ALL {
                row.values
                    .insert((product.id.clone(), metric), record.value(metric));
            }
        }
    }

    disambiguate_labels(&mut columns);

    MergedTable {
        columns,
        rows: accumulator.into_values().collect(),
    }
}

/// Products whose names share a prefix get their id appended to the label.
fn disambiguate_labels(columns: &mut [SeriesColumn]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for column in columns.iter() {
        *counts.entry(column.label.clone()).or_default() += 1;
    }
    for column in columns.iter_mut() {
        if counts.get(&column.label).copied().unwrap_or(0) > 1 {
            column.label = format!("{} ({})", column.label, column.product_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::DayRecord;
    use std::collections::BTreeSet;

    fn labels(table: &MergedTable) -> Vec<&str> {
        table.columns.iter().map(|c| c.label.as_str()).collect()
    }

    fn record(day: u32, inventory: f64, procurement: f64, sales: f64) -> DayRecord {
        DayRecord {
            day,
            inventory,
            procurement,
            sales,
        }
    }

    fn series(id: &str, name: &str, days: &[u32]) -> ProductSeries {
        ProductSeries {
            id: id.to_string(),
            name: name.to_string(),
            days: days
                .iter()
                .map(|&d| record(d, d as f64 * 10.0, d as f64, d as f64 / 2.0))
                .collect(),
        }
    }

    #[test]
    fn test_single_product_single_day() {
        let products = vec![ProductSeries {
            id: "1".into(),
            name: "Widget".into(),
            days: vec![record(1, 10.0, 5.0, 2.0)],
        }];
        let table = align_series(&products);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(labels(&table), vec!["Widget..."]);
        let row = &table.rows[0];
        assert_eq!(row.day, 1);
        assert_eq!(row.value("1", Metric::Inventory), Some(10.0));
        assert_eq!(row.value("1", Metric::Procurement), Some(5.0));
        assert_eq!(row.value("1", Metric::Sales), Some(2.0));

        assert_eq!(
            row.chart_point(),
            serde_json::json!({
                "day": 1,
                "1_inventory": 10.0,
                "1_procurement": 5.0,
                "1_sales": 2.0
            })
        );
    }

    #[test]
    fn test_partial_overlap_is_union() {
        let table = align_series(&[series("a", "Alpha", &[1, 2]), series("b", "Beta", &[2, 3])]);

        let days: Vec<u32> = table.rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 2, 3]);

        assert_eq!(table.rows[0].value("a", Metric::Inventory), Some(10.0));
        assert_eq!(table.rows[0].value("b", Metric::Inventory), None);
        assert_eq!(table.rows[1].value("a", Metric::Sales), Some(1.0));
        assert_eq!(table.rows[1].value("b", Metric::Sales), Some(1.0));
        assert_eq!(table.rows[2].value("a", Metric::Sales), None);
        assert_eq!(table.rows[2].value("b", Metric::Inventory), Some(30.0));

        // Absent products contribute no keys, not zeros
        let point = table.rows[0].chart_point();
        assert!(point.get("b_inventory").is_none());
    }

    #[test]
    fn test_rows_sorted_and_counted() {
        let inputs = vec![
            series("a", "Alpha", &[5, 1, 9]),
            series("b", "Beta", &[2, 9, 4]),
            series("c", "Gamma", &[7]),
        ];
        let table = align_series(&inputs);

        assert!(table.rows.windows(2).all(|w| w[0].day < w[1].day));
        let distinct: BTreeSet<u32> = inputs
            .iter()
            .flat_map(|s| s.days.iter().map(|d| d.day))
            .collect();
        assert_eq!(table.rows.len(), distinct.len());
    }

    #[test]
    fn test_shared_name_prefix_does_not_collide() {
        let table = align_series(&[
            series("1", "Premium Coffee Beans 1kg", &[1]),
            series("2", "Premium Coffee Filters", &[1]),
        ]);

        let row = &table.rows[0];
        assert_eq!(row.value("1", Metric::Inventory), Some(10.0));
        assert_eq!(row.value("2", Metric::Inventory), Some(10.0));
        assert_eq!(labels(&table), vec!["Premium Co... (1)", "Premium Co... (2)"]);
        assert_eq!(row.chart_point().as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_columns_follow_input_order() {
        let table = align_series(&[series("z", "Zeta", &[1]), series("a", "Alpha", &[1])]);
        let ids: Vec<&str> = table.columns.iter().map(|c| c.product_id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_display_label_counts_characters() {
        assert_eq!(display_label("Widget"), "Widget...");
        assert_eq!(display_label("абвгдеёжзий"), "абвгдеёжзи...");
        assert_eq!(display_label(""), "...");
    }

    #[test]
    fn test_empty_input() {
        let table = align_series(&[]);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
