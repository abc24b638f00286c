//! Fetch planning and the last-issued-wins guard.
//!
//! Responses may resolve in any order. Every issued fetch carries a
//! monotonically increasing sequence number and only the latest one may
//! update the dashboard; superseded requests still run to completion and
//! their results are dropped.

use contracts::domain::a001_product::ProductSeries;

/// Request(s) needed for the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Nothing selected; render the empty state
    Nothing,
    /// `GET /product/{id}`
    Single(String),
    /// `GET /products/compare` for the whole current set
    Compare(Vec<String>),
}

/// Data returned for a plan
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPayload {
    Single(ProductSeries),
    Compare(Vec<ProductSeries>),
}

/// An issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    plan: FetchPlan,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn plan(&self) -> &FetchPlan {
        &self.plan
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    /// Issue a ticket for `plan`.
    ///
    /// `FetchPlan::Nothing` issues no ticket but still supersedes every
    /// outstanding one.
    pub fn issue(&mut self, plan: FetchPlan) -> Option<FetchTicket> {
        self.latest += 1;
        match plan {
            FetchPlan::Nothing => None,
            plan => Some(FetchTicket {
                seq: self.latest,
                plan,
            }),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_increase() {
        let mut sequencer = FetchSequencer::default();
        let first = sequencer.issue(FetchPlan::Single("1".into())).unwrap();
        let second = sequencer.issue(FetchPlan::Single("2".into())).unwrap();
        assert!(second.seq() > first.seq());
        assert!(!sequencer.is_current(&first));
        assert!(sequencer.is_current(&second));
    }

    #[test]
    fn test_nothing_supersedes_outstanding() {
        let mut sequencer = FetchSequencer::default();
        let ticket = sequencer
            .issue(FetchPlan::Compare(vec!["1".into()]))
            .unwrap();
        assert!(sequencer.issue(FetchPlan::Nothing).is_none());
        assert!(!sequencer.is_current(&ticket));
    }
}
