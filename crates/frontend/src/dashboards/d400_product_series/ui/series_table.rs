use contracts::domain::a001_product::{Metric, ProductSeries};
use leptos::prelude::*;

use super::compare_chart::CompareChart;
use crate::dashboards::d400_product_series::aligner::MergedTable;
use crate::dashboards::d400_product_series::visibility::MetricVisibility;
use crate::shared::number_format::{format_count, format_money};

pub fn format_metric(metric: Metric, value: f64) -> String {
    if metric.is_monetary() {
        format_money(value)
    } else {
        format_count(value)
    }
}

/// Day-by-day values of one product, visible metrics only
#[component]
pub fn SingleTable(series: ProductSeries, visibility: MetricVisibility) -> impl IntoView {
    let metrics = visibility.visible_metrics();
    let header = metrics
        .iter()
        .map(|metric| view! { <th>{metric.title()}</th> })
        .collect_view();
    let rows = series
        .days
        .iter()
        .map(|record| {
            let cells = metrics
                .iter()
                .map(|metric| view! { <td class="num">{format_metric(*metric, record.value(*metric))}</td> })
                .collect_view();
            view! {
                <tr>
                    <td>{format!("Day {}", record.day)}</td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="d400-table">
            <thead>
                <tr>
                    <th>"Day"</th>
                    {header}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// One chart and aligned table per visible metric, one column per compared product
#[component]
pub fn CompareTable(table: MergedTable, visibility: MetricVisibility) -> impl IntoView {
    visibility
        .visible_metrics()
        .into_iter()
        .map(|metric| {
            let header = table
                .columns
                .iter()
                .map(|column| view! { <th title=column.product_id.clone()>{column.label.clone()}</th> })
                .collect_view();
            let rows = table
                .rows
                .iter()
                .map(|row| {
                    let cells = table
                        .columns
                        .iter()
                        .map(|column| {
                            let text = row
                                .value(&column.product_id, metric)
                                .map(|value| format_metric(metric, value))
                                .unwrap_or_default();
                            view! { <td class="num">{text}</td> }
                        })
                        .collect_view();
                    view! {
                        <tr>
                            <td>{row.day}</td>
                            {cells}
                        </tr>
                    }
                })
                .collect_view();

            view! {
                <div class="d400-compare-block">
                    <h4>{format!("{} comparison", metric.title())}</h4>
                    <CompareChart table=table.clone() metric=metric />
                    <table class="d400-table">
                        <thead>
                            <tr>
                                <th>"Day"</th>
                                {header}
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Metric::Inventory, 1234.4), "1,234");
        assert_eq!(format_metric(Metric::Sales, 1234.4), "$1,234.40");
        assert_eq!(format_metric(Metric::Procurement, 0.5), "$0.50");
    }
}
