use contracts::domain::a001_product::{Metric, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::series_table::{CompareTable, SingleTable};
use super::summary_cards::SummaryCards;
use crate::dashboards::d400_product_series::api;
use crate::dashboards::d400_product_series::selection::{Mode, SelectionEvent, MAX_COMPARE};
use crate::dashboards::d400_product_series::store::{Completion, DashboardStore, SeriesData};
use crate::domain::a001_product::ProductCatalog;
use crate::system::auth::{use_session, Session};

/// Apply `event` and spawn the fetch it asks for, if any.
fn dispatch(store: RwSignal<DashboardStore>, session: StoredValue<Session>, event: SelectionEvent) {
    let Some(ticket) = store.try_update(|s| s.dispatch(event)).flatten() else {
        return;
    };
    let session = session.get_value();
    spawn_local(async move {
        let result = api::execute(&session, ticket.plan()).await;
        // The store is gone if the session expired and the dashboard unmounted.
        let outcome = store.try_update(|s| s.complete(&ticket, result));
        if let Some(Completion::Failed(err)) = outcome {
            log::error!("Failed to load product series: {}", err);
        }
    });
}

fn empty_state(message: &'static str) -> AnyView {
    view! {
        <div class="d400-empty">
            <p>{message}</p>
        </div>
    }
    .into_any()
}

/// Product series dashboard component
#[component]
pub fn ProductSeriesDashboard(#[prop(into)] catalog: Signal<ProductCatalog>) -> impl IntoView {
    let store = RwSignal::new(DashboardStore::new());
    let session = StoredValue::new(use_session());

    let single_picker = move || {
        let selected = store
            .with(|s| s.selection().single_id().map(str::to_string))
            .unwrap_or_default();
        let products = catalog.with(|c| c.products().to_vec());
        view! {
            <label for="d400-product-select">"Choose a product to view its data"</label>
            <select
                id="d400-product-select"
                class="d400-product-select"
                on:change=move |ev| {
                    let id = event_target_value(&ev);
                    if !id.is_empty() {
                        dispatch(store, session, SelectionEvent::SelectSingle(id));
                    }
                }
            >
                <option value="" selected=selected.is_empty()>"Select a product"</option>
                {products
                    .into_iter()
                    .map(|Product { id, name, .. }| {
                        let is_selected = id == selected;
                        view! { <option value=id selected=is_selected>{name}</option> }
                    })
                    .collect_view()}
            </select>
        }
    };

    let compare_picker = move || {
        let selection = store.with(|s| s.selection().clone());
        let products = catalog.with(|c| c.products().to_vec());
        let count = selection.compare_count();
        view! {
            <h3>{format!("Select products to compare (max {})", MAX_COMPARE)}</h3>
            <div class="d400-compare-grid">
                {products
                    .into_iter()
                    .map(|Product { id, name, .. }| {
                        let checked = selection.is_compare_member(&id);
                        let disabled = !selection.can_toggle_member(&id);
                        let name_class = if checked { "selected" } else { "" };
                        view! {
                            <label class="d400-compare-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    disabled=disabled
                                    on:change=move |_| {
                                        dispatch(
                                            store,
                                            session,
                                            SelectionEvent::ToggleCompareMember(id.clone()),
                                        )
                                    }
                                />
                                <span class=name_class>{name}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {(count > 0)
                .then(|| {
                    view! {
                        <div class="d400-compare-count">
                            {format!("{} of {} products selected", count, MAX_COMPARE)}
                        </div>
                    }
                })}
        }
    };

    let metric_toggles = Metric::ALL
        .into_iter()
        .map(|metric| {
            let class = move || {
                if store.with(|s| s.visibility().is_visible(metric)) {
                    "d400-metric-toggle d400-metric-toggle--on"
                } else {
                    "d400-metric-toggle"
                }
            };
            view! {
                <button class=class on:click=move |_| store.update(|s| s.toggle_metric(metric))>
                    {metric.title()}
                </button>
            }
        })
        .collect_view();

    let content = move || {
        let (mode, data, visibility, count) = store.with(|s| {
            (
                s.mode(),
                s.data().clone(),
                s.visibility(),
                s.selection().compare_count(),
            )
        });
        match (mode, data) {
            (Mode::Compare, _) if count == 0 => empty_state("Select products to compare"),
            (Mode::Compare, SeriesData::Compare { table, .. }) if table.is_empty() => {
                empty_state("The selected products have no recorded days")
            }
            (Mode::Compare, SeriesData::Compare { table, .. }) => {
                view! { <CompareTable table=table visibility=visibility /> }.into_any()
            }
            (Mode::Single, SeriesData::Single(series)) if !series.days.is_empty() => {
                let title = catalog
                    .with(|c| c.name_of(&series.id).map(str::to_string))
                    .unwrap_or_else(|| series.name.clone());
                view! {
                    <h2>{title}</h2>
                    <SingleTable series=series visibility=visibility />
                }
                .into_any()
            }
            (Mode::Compare, _) => empty_state("No comparison data yet"),
            (Mode::Single, _) => empty_state("Select a product to view its data"),
        }
    };

    let summaries = move || {
        let summaries = store.with(|s| s.summaries());
        (!summaries.is_empty()).then(|| view! { <SummaryCards summaries=summaries /> })
    };

    view! {
        <div id="d400_product_series--dashboard" class="d400-dashboard">
            <h1>"Inventory dashboard"</h1>

            {move || {
                catalog
                    .with(|c| c.refreshed_label().map(|label| (label, c.is_empty())))
                    .map(|(label, is_empty)| {
                        view! {
                            <div class="d400-catalog-status">
                                {format!("Products updated {} UTC", label)}
                                {is_empty.then(|| " (no products yet, import an Excel file first)")}
                            </div>
                        }
                    })
            }}

            <div class="d400-mode">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| dispatch(store, session, SelectionEvent::ToggleMode)
                >
                    {move || match store.with(|s| s.mode()) {
                        Mode::Single => "Switch to compare mode",
                        Mode::Compare => "Switch to single product mode",
                    }}
                </Button>
            </div>

            <div class="d400-selection">
                {move || match store.with(|s| s.mode()) {
                    Mode::Single => single_picker().into_any(),
                    Mode::Compare => compare_picker().into_any(),
                }}
            </div>

            {move || {
                store
                    .with(|s| s.cap_reached())
                    .then(|| {
                        view! {
                            <div class="d400-hint">
                                {format!("At most {} products can be compared at once", MAX_COMPARE)}
                            </div>
                        }
                    })
            }}

            <div class="d400-metrics">{metric_toggles}</div>

            {move || {
                store
                    .with(|s| s.is_loading())
                    .then(|| {
                        view! {
                            <div class="d400-loading">
                                <span>"Loading data..."</span>
                            </div>
                        }
                    })
            }}

            {move || {
                store
                    .with(|s| s.last_error().map(|err| err.to_string()))
                    .map(|err| {
                        view! {
                            <div class="d400-error">
                                <strong>"Error: "</strong>
                                {err}
                            </div>
                        }
                    })
            }}

            <div class="d400-content">{content}</div>

            {summaries}
        </div>
    }
}
