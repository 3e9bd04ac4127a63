//! ViewModel for the analyzer page

use contracts::domain::a001_gestalt_analysis::{ContentCatalog, SectionView, TabSelector};
use contracts::enums::{GestaltTab, InvalidTabIdentifier};
use leptos::prelude::*;

/// Session state of one analyzer page instance
#[derive(Clone, Copy)]
pub struct GestaltAnalyzerVm {
    /// Active tab
    pub selector: RwSignal<TabSelector>,
    /// Value bound to the thaw `TabList`
    pub selected_tab_value: RwSignal<String>,
}

impl GestaltAnalyzerVm {
    pub fn new() -> Self {
        let selector = TabSelector::new();
        Self {
            selector: RwSignal::new(selector),
            selected_tab_value: RwSignal::new(selector.active().code().to_string()),
        }
    }

    pub fn active(&self) -> GestaltTab {
        self.selector.get().active()
    }

    pub fn select(&self, tab: GestaltTab) {
        if self.selector.get_untracked().active() == tab {
            return;
        }
        log::debug!("gestalt analyzer: switching to tab {}", tab);
        self.selector.update(|s| s.select(tab));
        if self.selected_tab_value.get_untracked() != tab.code() {
            self.selected_tab_value.set(tab.code().to_string());
        }
    }

    /// Apply a tab token coming from the tab list.
    ///
    /// On an unknown token the selection is left alone and the tab list is
    /// pointed back at the active tab.
    pub fn select_code(&self, code: &str) -> Result<GestaltTab, InvalidTabIdentifier> {
        let mut next = self.selector.get_untracked();
        match next.select_code(code) {
            Ok(tab) => {
                self.select(tab);
                Ok(tab)
            }
            Err(err) => {
                log::warn!("gestalt analyzer: {}", err);
                let active = next.active().code();
                if self.selected_tab_value.get_untracked() != active {
                    self.selected_tab_value.set(active.to_string());
                }
                Err(err)
            }
        }
    }

    /// Panel of the active tab
    pub fn section(&self) -> SectionView {
        SectionView::render(self.active(), ContentCatalog::global())
    }
}

impl Default for GestaltAnalyzerVm {
    fn default() -> Self {
        Self::new()
    }
}
