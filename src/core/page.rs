//! Page identity.
//!
//! Each template declares which page it is via `data-page` on `<body>`.
//! A missing marker means the home page: the single-template case needs no
//! marker at all, and only the home page gets the full section treatment.

/// Which page a template renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageId {
    Home,
    Other(String),
}

impl PageId {
    /// Resolve a `data-page` marker. Absent markers default to the home page.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            None | Some("home") => Self::Home,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// The marker name, for matching against navigation `page` fields.
    pub fn name(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Other(name) => name,
        }
    }
}
