//! Dashboard state as a plain value: selection, fetch guard, fetched data
//! and metric visibility. The view only dispatches events and reads back.

use contracts::domain::a001_product::{Metric, ProductSeries};

use super::aligner::{align_series, MergedTable};
use super::fetcher::{FetchPayload, FetchPlan, FetchSequencer, FetchTicket};
use super::selection::{Mode, SelectionEvent, SelectionState, Transition};
use super::summary::{summarize, ProductSummary};
use super::visibility::MetricVisibility;
use crate::shared::error::ApiError;

/// Data currently on display
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SeriesData {
    #[default]
    Empty,
    Single(ProductSeries),
    Compare {
        series: Vec<ProductSeries>,
        table: MergedTable,
    },
}

/// Result of feeding a response back into the store
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Applied,
    /// Superseded by a later fetch or a mode switch; dropped
    Stale,
    /// Previous data kept
    Failed(ApiError),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    selection: SelectionState,
    sequencer: FetchSequencer,
    data: SeriesData,
    visibility: MetricVisibility,
    loading: bool,
    last_error: Option<ApiError>,
    /// Set when the last compare toggle hit the size cap
    cap_reached: bool,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection event; returns the fetch to spawn, if any.
    pub fn dispatch(&mut self, event: SelectionEvent) -> Option<FetchTicket> {
        let transition = self.selection.apply(event);
        self.cap_reached = transition == Transition::CapReached;
        if !transition.is_change() {
            return None;
        }

        if transition == Transition::ModeChanged {
            self.data = SeriesData::Empty;
            self.last_error = None;
        }

        let ticket = self.sequencer.issue(self.selection.fetch_plan());
        match &ticket {
            Some(ticket) => {
                log::debug!("Fetch #{} issued: {:?}", ticket.seq(), ticket.plan());
                self.loading = true;
            }
            None => {
                self.data = SeriesData::Empty;
                self.loading = false;
                self.last_error = None;
            }
        }
        ticket
    }

    /// Feed the outcome of `ticket` back; only the latest ticket is applied.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FetchPayload, ApiError>,
    ) -> Completion {
        if !self.sequencer.is_current(ticket) {
            log::debug!(
                "Discarding stale response #{} (latest #{})",
                ticket.seq(),
                self.sequencer.latest()
            );
            return Completion::Stale;
        }
        self.loading = false;

        match result {
            Ok(payload) => {
                self.data = Self::into_data(ticket.plan(), payload);
                self.last_error = None;
                Completion::Applied
            }
            Err(err) => {
                log::warn!("Fetch #{} failed: {}", ticket.seq(), err);
                self.last_error = Some(err.clone());
                Completion::Failed(err)
            }
        }
    }

    fn into_data(plan: &FetchPlan, payload: FetchPayload) -> SeriesData {
        match payload {
            FetchPayload::Single(series) => SeriesData::Single(series),
            FetchPayload::Compare(mut series) => {
                if let FetchPlan::Compare(ids) = plan {
                    series.sort_by_key(|s| {
                        ids.iter().position(|id| *id == s.id).unwrap_or(usize::MAX)
                    });
                }
                let table = align_series(&series);
                SeriesData::Compare { series, table }
            }
        }
    }

    pub fn toggle_metric(&mut self, metric: Metric) {
        self.visibility.toggle(metric);
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> Mode {
        self.selection.mode()
    }

    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    pub fn visibility(&self) -> MetricVisibility {
        self.visibility
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn cap_reached(&self) -> bool {
        self.cap_reached
    }

    pub fn single_series(&self) -> Option<&ProductSeries> {
        match &self.data {
            SeriesData::Single(series) => Some(series),
            _ => None,
        }
    }

    pub fn merged_table(&self) -> Option<&MergedTable> {
        match &self.data {
            SeriesData::Compare { table, .. } => Some(table),
            _ => None,
        }
    }

    /// Summary panel content for whatever is on display
    pub fn summaries(&self) -> Vec<ProductSummary> {
        match &self.data {
            SeriesData::Empty => Vec::new(),
            SeriesData::Single(series) => summarize(std::slice::from_ref(series)),
            SeriesData::Compare { series, .. } => summarize(series),
        }
    }
}
