use super::fetcher::FetchPlan;

/// Maximum number of products shown side-by-side
pub const MAX_COMPARE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Single,
    Compare,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    ToggleMode,
    SelectSingle(String),
    ToggleCompareMember(String),
}

/// What an event did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Mode flipped; every id and every fetched series is dropped
    ModeChanged,
    /// Active id(s) changed within the current mode
    SelectionChanged,
    /// Compare set already holds `MAX_COMPARE` ids; nothing changed
    CapReached,
    /// Event does not apply to the current mode; nothing changed
    Ignored,
}

impl Transition {
    pub fn is_change(self) -> bool {
        matches!(self, Transition::ModeChanged | Transition::SelectionChanged)
    }
}

/// Single/Compare selection state machine.
///
/// `compare_ids` keeps insertion order; it is the order series are merged
/// and listed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    mode: Mode,
    single_id: Option<String>,
    compare_ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn single_id(&self) -> Option<&str> {
        self.single_id.as_deref()
    }

    pub fn compare_ids(&self) -> &[String] {
        &self.compare_ids
    }

    pub fn compare_count(&self) -> usize {
        self.compare_ids.len()
    }

    pub fn is_compare_member(&self, id: &str) -> bool {
        self.compare_ids.iter().any(|member| member == id)
    }

    /// Whether toggling `id` would change the compare set
    pub fn can_toggle_member(&self, id: &str) -> bool {
        self.is_compare_member(id) || self.compare_ids.len() < MAX_COMPARE
    }

    /// Pure reducer form of [`SelectionState::apply`].
    pub fn reduce(mut self, event: SelectionEvent) -> (Self, Transition) {
        let transition = self.apply(event);
        (self, transition)
    }

    pub fn apply(&mut self, event: SelectionEvent) -> Transition {
        match (self.mode, event) {
            (mode, SelectionEvent::ToggleMode) => {
                self.mode = match mode {
                    Mode::Single => Mode::Compare,
                    Mode::Compare => Mode::Single,
                };
                self.single_id = None;
                self.compare_ids.clear();
                Transition::ModeChanged
            }
            (Mode::Single, SelectionEvent::SelectSingle(id)) => {
                // Re-selecting the active id still counts as a change and refetches.
                self.single_id = Some(id);
                Transition::SelectionChanged
            }
            (Mode::Compare, SelectionEvent::ToggleCompareMember(id)) => {
                if let Some(pos) = self.compare_ids.iter().position(|member| *member == id) {
                    self.compare_ids.remove(pos);
                    Transition::SelectionChanged
                } else if self.compare_ids.len() < MAX_COMPARE {
                    self.compare_ids.push(id);
                    Transition::SelectionChanged
                } else {
                    Transition::CapReached
                }
            }
            (mode, event) => {
                log::warn!("Selection event {:?} ignored in {:?} mode", event, mode);
                Transition::Ignored
            }
        }
    }

    /// Fetch required to display the current selection
    pub fn fetch_plan(&self) -> FetchPlan {
        match self.mode {
            Mode::Single => match &self.single_id {
                Some(id) => FetchPlan::Single(id.clone()),
                None => FetchPlan::Nothing,
            },
            Mode::Compare if self.compare_ids.is_empty() => FetchPlan::Nothing,
            Mode::Compare => FetchPlan::Compare(self.compare_ids.clone()),
        }
    }
}
