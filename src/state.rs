mod filter;
mod tracker;

pub use filter::{categories, filter_items, Filter};
pub use tracker::{active_section, active_section_in, Rect, ACTIVATION_OFFSET};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Anchored page sections, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Portfolio,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Portfolio => "portfolio",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Portfolio => "Portfolio",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| PageError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleMenu,
    SelectFilter(String),
    /// Closes the menu. Scrolling is the caller's job and `active_section`
    /// only follows once the tracker sees the new position.
    NavigateTo(Section),
    SectionInView(Section),
}

/// Transient UI flags of the page. Every action yields a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub active_filter: Filter,
    pub active_section: Section,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, action: &Action, categories: &[Filter]) -> Self {
        let mut next = self.clone();
        match action {
            Action::ToggleMenu => next.menu_open = !self.menu_open,
            Action::SelectFilter(raw) => match Filter::parse(raw, categories) {
                Ok(filter) => next.active_filter = filter,
                Err(e) => log::warn!("ignoring filter selection: {e}"),
            },
            Action::NavigateTo(_) => next.menu_open = false,
            Action::SectionInView(section) => next.active_section = *section,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Vec<Filter> {
        vec![
            Filter::All,
            Filter::Category("Branding".to_string()),
            Filter::Category("Print".to_string()),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert!(!state.menu_open);
        assert_eq!(state.active_filter, Filter::All);
        assert_eq!(state.active_section, Section::Home);
    }

    #[test]
    fn test_toggle_menu_twice_closes() {
        let state = UiState::new();
        let opened = state.apply(&Action::ToggleMenu, &cats());
        assert!(opened.menu_open);
        let closed = opened.apply(&Action::ToggleMenu, &cats());
        assert!(!closed.menu_open);
        // previous snapshot untouched
        assert!(opened.menu_open);
    }

    #[test]
    fn test_navigate_closes_menu_from_any_state() {
        for open in [true, false] {
            for section in Section::ALL {
                let state = UiState {
                    menu_open: open,
                    ..UiState::new()
                };
                let next = state.apply(&Action::NavigateTo(section), &cats());
                assert!(!next.menu_open);
            }
        }
    }

    #[test]
    fn test_navigate_leaves_active_section_to_tracker() {
        let state = UiState::new();
        let next = state.apply(&Action::NavigateTo(Section::Contact), &cats());
        assert_eq!(next.active_section, Section::Home);

        let next = next.apply(&Action::SectionInView(Section::Contact), &cats());
        assert_eq!(next.active_section, Section::Contact);
    }

    #[test]
    fn test_section_in_view_is_idempotent() {
        let state = UiState::new().apply(&Action::SectionInView(Section::About), &cats());
        let again = state.apply(&Action::SectionInView(Section::About), &cats());
        assert_eq!(state, again);
    }

    #[test]
    fn test_select_known_filter() {
        let state = UiState::new().apply(&Action::SelectFilter("Print".to_string()), &cats());
        assert_eq!(state.active_filter, Filter::Category("Print".to_string()));

        let state = state.apply(&Action::SelectFilter("All".to_string()), &cats());
        assert_eq!(state.active_filter, Filter::All);
    }

    #[test]
    fn test_select_unknown_filter_is_ignored() {
        let state = UiState::new().apply(&Action::SelectFilter("Print".to_string()), &cats());
        let next = state.apply(&Action::SelectFilter("Motion".to_string()), &cats());
        assert_eq!(next, state);

        let next = state.apply(&Action::SelectFilter("print".to_string()), &cats());
        assert_eq!(next, state);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "Home".parse::<Section>(),
            Err(PageError::UnknownSection("Home".to_string()))
        );
    }
}
