use serde::{Deserialize, Serialize};

/// One of the three per-day measurements recorded for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Units on hand at the end of the day
    Inventory,
    /// Money spent on purchasing that day
    Procurement,
    /// Money received from sales that day
    Sales,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Inventory, Metric::Procurement, Metric::Sales];

    /// Field name used on the wire and in chart column keys
    pub fn key(self) -> &'static str {
        match self {
            Metric::Inventory => "inventory",
            Metric::Procurement => "procurement",
            Metric::Sales => "sales",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Inventory => "Inventory",
            Metric::Procurement => "Procurement amount",
            Metric::Sales => "Sales amount",
        }
    }

    /// Procurement and sales are money; inventory is a unit count.
    pub fn is_monetary(self) -> bool {
        !matches!(self, Metric::Inventory)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
