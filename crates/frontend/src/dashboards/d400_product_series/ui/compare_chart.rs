//! Per-metric line chart of the compared products, drawn as inline SVG from
//! the merged table's chart points.

use contracts::domain::a001_product::Metric;
use leptos::prelude::*;
use serde_json::Value;

use super::series_table::format_metric;
use crate::dashboards::d400_product_series::aligner::{column_key, MergedTable};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;
const PALETTE: [&str; 5] = ["#2563eb", "#16a34a", "#dc2626", "#d97706", "#7c3aed"];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    /// `(day, value)`; days the product did not report are skipped
    pub points: Vec<(u32, f64)>,
}

/// One line per compared product, in column order.
pub fn chart_lines(table: &MergedTable, metric: Metric) -> Vec<ChartLine> {
    let chart_points = table.chart_points();
    table
        .columns
        .iter()
        .map(|column| {
            let key = column_key(&column.product_id, metric);
            let points = chart_points
                .iter()
                .filter_map(|point| {
                    let day = point.get("day").and_then(Value::as_u64)?;
                    let value = point.get(&key).and_then(Value::as_f64)?;
                    Some((u32::try_from(day).ok()?, value))
                })
                .collect();
            ChartLine {
                label: column.label.clone(),
                points,
            }
        })
        .collect()
}

/// `(low, high)` over every line; the axis always includes zero and never collapses.
pub fn value_range(lines: &[ChartLine]) -> (f64, f64) {
    let (low, high) = lines
        .iter()
        .flat_map(|line| line.points.iter().map(|(_, value)| *value))
        .fold((0.0_f64, 0.0_f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });
    if high > low {
        (low, high)
    } else {
        (low, low + 1.0)
    }
}

/// SVG `points` attribute for `points`, scaled into the plot area.
pub fn polyline_points(points: &[(u32, f64)], days: (u32, u32), values: (f64, f64)) -> String {
    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let (first_day, last_day) = days;
    let (low, high) = values;

    points
        .iter()
        .map(|&(day, value)| {
            let x = if last_day > first_day {
                PADDING + f64::from(day - first_day) / f64::from(last_day - first_day) * plot_width
            } else {
                WIDTH / 2.0
            };
            let y = HEIGHT - PADDING - (value - low) / (high - low) * plot_height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn CompareChart(table: MergedTable, metric: Metric) -> impl IntoView {
    let lines = chart_lines(&table, metric);
    let days = match (table.rows.first(), table.rows.last()) {
        (Some(first), Some(last)) => (first.day, last.day),
        _ => (0, 0),
    };
    let values = value_range(&lines);

    let polylines = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let color = PALETTE[index % PALETTE.len()];
            view! {
                <polyline
                    points=polyline_points(&line.points, days, values)
                    fill="none"
                    stroke=color
                    stroke-width="2"
                    stroke-linejoin="round"
                ></polyline>
            }
        })
        .collect_view();

    let legend = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let color = PALETTE[index % PALETTE.len()];
            view! {
                <span class="d400-legend__item" style=format!("color: {}", color)>
                    {line.label}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="d400-chart">
            <svg
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                width="100%"
                role="img"
            >
                <line x1="32" y1="208" x2="608" y2="208" stroke="currentColor" stroke-opacity="0.3"></line>
                <text x="4" y="20" font-size="11">{format_metric(metric, values.1)}</text>
                <text x="32" y="228" font-size="11">{format!("Day {}", days.0)}</text>
                <text x="560" y="228" font-size="11">{format!("Day {}", days.1)}</text>
                {polylines}
            </svg>
            <div class="d400-legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_product_series::aligner::align_series;
    use contracts::domain::a001_product::{DayRecord, ProductSeries};

    fn series(id: &str, name: &str, days: &[(u32, f64)]) -> ProductSeries {
        ProductSeries {
            id: id.to_string(),
            name: name.to_string(),
            days: days
                .iter()
                .map(|&(day, sales)| DayRecord {
                    day,
                    inventory: 0.0,
                    procurement: 0.0,
                    sales,
                })
                .collect(),
        }
    }

    #[test]
    fn test_lines_skip_missing_days() {
        let table = align_series(&[
            series("a", "Alpha", &[(1, 10.0), (2, 20.0)]),
            series("b", "Beta", &[(2, 5.0)]),
        ]);
        let lines = chart_lines(&table, Metric::Sales);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Alpha...");
        assert_eq!(lines[0].points, vec![(1, 10.0), (2, 20.0)]);
        assert_eq!(lines[1].points, vec![(2, 5.0)]);
    }

    #[test]
    fn test_value_range_includes_zero() {
        let lines = vec![ChartLine {
            label: "A".into(),
            points: vec![(1, 5.0), (2, 8.0)],
        }];
        assert_eq!(value_range(&lines), (0.0, 8.0));
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_polyline_corners() {
        let points = polyline_points(&[(1, 0.0), (3, 10.0)], (1, 3), (0.0, 10.0));
        assert_eq!(points, "32.0,208.0 608.0,32.0");
    }

    #[test]
    fn test_single_day_is_centered() {
        let points = polyline_points(&[(4, 1.0)], (4, 4), (0.0, 1.0));
        assert_eq!(points, "320.0,32.0");
    }
}
