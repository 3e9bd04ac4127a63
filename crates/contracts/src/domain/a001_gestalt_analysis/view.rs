//! Structural rendering of a tab panel.
//!
//! `SectionView` is what the frontend draws; building it is pure, so the
//! same tab and catalog always give an equal view.

use super::aggregate::{Accent, DisplayRecord};
use super::catalog::ContentCatalog;
use crate::enums::GestaltTab;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    /// Zero-based position, top to bottom
    pub position: usize,
    pub step: Option<u32>,
    pub title: String,
    pub description: String,
    /// Last item is drawn without a bottom border
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub tab: GestaltTab,
    pub heading: String,
    pub description: String,
    pub accent: Accent,
    pub icon_name: String,
    pub items: Vec<SectionItem>,
}

impl SectionView {
    pub fn render(tab: GestaltTab, catalog: &ContentCatalog) -> Self {
        let section = catalog.section(tab);
        let records = catalog.lookup(tab);
        let last = records.len().saturating_sub(1);

        let items = records
            .iter()
            .enumerate()
            .map(|(position, record)| SectionItem::from_record(position, record, position == last))
            .collect();

        Self {
            tab,
            heading: section.heading.clone(),
            description: section.description.clone(),
            accent: section.accent,
            icon_name: tab.icon_name().to_string(),
            items,
        }
    }

    /// Workflow panels draw a numbered badge before each item
    pub fn is_stepped(&self) -> bool {
        self.items.iter().any(|item| item.step.is_some())
    }
}

impl SectionItem {
    fn from_record(position: usize, record: &DisplayRecord, is_last: bool) -> Self {
        Self {
            position,
            step: record.step_number(),
            title: record.title().to_string(),
            description: record.description().to_string(),
            is_last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_gestalt_analysis::TabSelector;

    fn render_active(selector: &TabSelector) -> SectionView {
        SectionView::render(selector.active(), ContentCatalog::global())
    }

    #[test]
    fn test_selection_scenario() {
        let mut selector = TabSelector::new();

        let view = render_active(&selector);
        assert_eq!(view.tab, GestaltTab::Principles);
        assert_eq!(view.items.len(), 5);
        assert!(!view.is_stepped());

        selector.select_code("workflow").unwrap();
        let view = render_active(&selector);
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.items[0].title, "Initial Capture");
        assert_eq!(view.items[0].step, Some(1));
        assert!(view.is_stepped());

        selector.select_code("tools").unwrap();
        assert_eq!(render_active(&selector).items.len(), 3);

        selector.select_code("benefits").unwrap();
        let view = render_active(&selector);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.items.last().map(|i| i.title.as_str()), Some("Active Knowledge"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = ContentCatalog::global();
        for tab in GestaltTab::all() {
            assert_eq!(SectionView::render(tab, catalog), SectionView::render(tab, catalog));
        }
    }

    #[test]
    fn test_only_final_item_is_last() {
        let view = SectionView::render(GestaltTab::Structure, ContentCatalog::global());
        let last_flags: Vec<bool> = view.items.iter().map(|i| i.is_last).collect();
        assert_eq!(last_flags, vec![false, false, false, false, true]);
        let positions: Vec<usize> = view.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_header_comes_from_section() {
        let view = SectionView::render(GestaltTab::Benefits, ContentCatalog::global());
        assert_eq!(view.heading, "Benefits & Outcomes");
        assert_eq!(view.accent, Accent::Teal);
        assert_eq!(view.icon_name, "message-square-text");
    }

    #[test]
    fn test_rejected_selection_leaves_catalog_untouched() {
        let before = SectionView::render(GestaltTab::Tools, ContentCatalog::global());
        let mut selector = TabSelector::new();
        assert!(selector.select_code("TOOLS").is_err());
        assert_eq!(SectionView::render(GestaltTab::Tools, ContentCatalog::global()), before);
    }
}
