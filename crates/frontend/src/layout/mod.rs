pub mod navigation;

pub use navigation::Navigation;

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Import,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Import];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Import => "Data import",
        }
    }
}
