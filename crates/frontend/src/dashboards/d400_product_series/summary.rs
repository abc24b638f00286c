use contracts::domain::a001_product::{DayRecord, Metric, ProductSeries};

/// Mean of `metric` over `days`; `0.0` for an empty series.
pub fn average(metric: Metric, days: &[DayRecord]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    total(metric, days) / days.len() as f64
}

/// Sum of `metric` over `days`, unrounded.
pub fn total(metric: Metric, days: &[DayRecord]) -> f64 {
    days.iter().map(|record| record.value(metric)).sum()
}

/// Summary panel figures for one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub product_id: String,
    pub name: String,
    pub day_count: usize,
    pub average_inventory: f64,
    pub total_procurement: f64,
    pub total_sales: f64,
}

impl ProductSummary {
    pub fn from_series(series: &ProductSeries) -> Self {
        Self {
            product_id: series.id.clone(),
            name: series.name.clone(),
            day_count: series.days.len(),
            average_inventory: average(Metric::Inventory, &series.days),
            total_procurement: total(Metric::Procurement, &series.days),
            total_sales: total(Metric::Sales, &series.days),
        }
    }
}

/// One independent summary per product, in input order.
pub fn summarize(series: &[ProductSeries]) -> Vec<ProductSummary> {
    series.iter().map(ProductSummary::from_series).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, inventory: f64, procurement: f64, sales: f64) -> DayRecord {
        DayRecord {
            day,
            inventory,
            procurement,
            sales,
        }
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        for metric in Metric::ALL {
            assert_eq!(average(metric, &[]), 0.0);
            assert_eq!(total(metric, &[]), 0.0);
        }
    }

    #[test]
    fn test_average_matches_reference_mean() {
        let days: Vec<DayRecord> = (1..=37)
            .map(|d| {
                let x = d as f64;
                record(d, (x * 7.0) % 13.0, x * 1.25, 100.0 / x)
            })
            .collect();

        for metric in Metric::ALL {
            let mut sum = 0.0;
            let mut count = 0usize;
            for record in &days {
                sum += record.value(metric);
                count += 1;
            }
            let expected = sum / count as f64;
            assert!((average(metric, &days) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_totals_are_not_rounded() {
        let days = vec![record(1, 1.0, 0.105, 0.333), record(2, 2.0, 0.105, 0.333)];
        assert!((total(Metric::Procurement, &days) - 0.21).abs() < 1e-12);
        assert!((total(Metric::Sales, &days) - 0.666).abs() < 1e-12);
    }

    #[test]
    fn test_summaries_are_per_product() {
        let series = vec![
            ProductSeries {
                id: "1".into(),
                name: "Widget".into(),
                days: vec![record(1, 10.0, 5.0, 2.0), record(2, 20.0, 5.0, 3.0)],
            },
            ProductSeries {
                id: "2".into(),
                name: "Gadget".into(),
                days: vec![],
            },
        ];
        let summaries = summarize(&series);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].day_count, 2);
        assert_eq!(summaries[0].average_inventory, 15.0);
        assert_eq!(summaries[0].total_procurement, 10.0);
        assert_eq!(summaries[0].total_sales, 5.0);
        assert_eq!(summaries[1].day_count, 0);
        assert_eq!(summaries[1].average_inventory, 0.0);
    }
}
