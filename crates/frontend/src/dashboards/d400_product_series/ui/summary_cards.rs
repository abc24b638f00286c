use leptos::prelude::*;

use crate::dashboards::d400_product_series::summary::ProductSummary;
use crate::shared::number_format::{format_count, format_money};

#[component]
pub fn SummaryCards(summaries: Vec<ProductSummary>) -> impl IntoView {
    let cards = summaries
        .into_iter()
        .map(|summary| {
            view! {
                <div class="d400-summary-card">
                    <div class="d400-summary-card__title">{summary.name}</div>
                    <div class="d400-summary-card__meta">
                        {format!("ID: {} | {} days", summary.product_id, summary.day_count)}
                    </div>
                    <dl>
                        <dt>"Average inventory"</dt>
                        <dd>{format_count(summary.average_inventory)}</dd>
                        <dt>"Total procurement"</dt>
                        <dd>{format_money(summary.total_procurement)}</dd>
                        <dt>"Total sales"</dt>
                        <dd>{format_money(summary.total_sales)}</dd>
                    </dl>
                </div>
            }
        })
        .collect_view();

    view! { <div class="d400-summary">{cards}</div> }
}
