use crate::enums::{GestaltTab, InvalidTabIdentifier};
use serde::{Deserialize, Serialize};

/// Which tab of the analyzer is currently open.
///
/// Owned by one UI session; the active tab is always one of the five
/// [`GestaltTab`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabSelector {
    active: GestaltTab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> GestaltTab {
        self.active
    }

    pub fn select(&mut self, tab: GestaltTab) {
        self.active = tab;
    }

    /// Switch by token. An unknown token is rejected and the active tab stays as it was.
    pub fn select_code(&mut self, code: &str) -> Result<GestaltTab, InvalidTabIdentifier> {
        let tab = code.parse::<GestaltTab>()?;
        self.active = tab;
        Ok(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_principles() {
        assert_eq!(TabSelector::new().active(), GestaltTab::Principles);
    }

    #[test]
    fn test_select_then_active() {
        let mut selector = TabSelector::new();
        for tab in GestaltTab::all() {
            selector.select(tab);
            assert_eq!(selector.active(), tab);
        }
    }

    #[test]
    fn test_select_code_reaches_every_tab_from_every_tab() {
        let mut selector = TabSelector::new();
        for from in GestaltTab::all() {
            for to in GestaltTab::all() {
                selector.select(from);
                assert_eq!(selector.select_code(to.code()), Ok(to));
                assert_eq!(selector.active(), to);
            }
        }
    }

    #[test]
    fn test_unknown_code_keeps_state() {
        let mut selector = TabSelector::new();
        selector.select(GestaltTab::Tools);

        let err = selector.select_code("analysis").unwrap_err();
        assert_eq!(err, InvalidTabIdentifier("analysis".to_string()));
        assert_eq!(selector.active(), GestaltTab::Tools);

        assert!(selector.select_code("").is_err());
        assert_eq!(selector.active(), GestaltTab::Tools);
    }
}
