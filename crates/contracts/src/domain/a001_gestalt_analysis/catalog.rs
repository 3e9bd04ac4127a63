//! Static content of the analyzer tabs.
//!
//! Built once on first access and never mutated afterwards, so the catalog can
//! be shared by every render without synchronization.

use super::aggregate::{Accent, DisplayRecord, TabSection};
use crate::enums::GestaltTab;
use once_cell::sync::Lazy;

// ─── Structures ─────────────────────────────────────────────────────────────

struct CatalogEntry {
    section: TabSection,
    records: Vec<DisplayRecord>,
}

pub struct ContentCatalog {
    principles: CatalogEntry,
    workflow: CatalogEntry,
    structure: CatalogEntry,
    tools: CatalogEntry,
    benefits: CatalogEntry,
}

// ─── Global instance ────────────────────────────────────────────────────────

pub static GESTALT_CATALOG: Lazy<ContentCatalog> = Lazy::new(ContentCatalog::build);

// ─── Implementation ─────────────────────────────────────────────────────────

impl ContentCatalog {
    pub fn global() -> &'static ContentCatalog {
        &GESTALT_CATALOG
    }

    fn build() -> Self {
        Self {
            principles: CatalogEntry {
                section: TabSection::new(
                    "Core Principles",
                    "Fundamental concepts that drive the methodology",
                    Accent::Blue,
                ),
                records: vec![
                    DisplayRecord::plain("Modularity", "Create atomic notes that represent single, distinct ideas"),
                    DisplayRecord::plain("Own Words Processing", "Rewrite concepts in your own language to solidify understanding"),
                    DisplayRecord::plain("Ready for Publication", "Write notes as if they could be published immediately"),
                    DisplayRecord::plain("Deep Engagement", "Take time to process information slowly and deliberately"),
                    DisplayRecord::plain("Linkage & Networks", "Connect notes to create a network of ideas"),
                ],
            },
            workflow: CatalogEntry {
                section: TabSection::new(
                    "Workflow Process",
                    "Step-by-step implementation of the methodology",
                    Accent::Green,
                ),
                records: vec![
                    DisplayRecord::step(1, "Initial Capture", "Take rough notes while engaging with material"),
                    DisplayRecord::step(2, "Process Notes", "Transform rough notes into permanent notes"),
                    DisplayRecord::step(3, "Write in Own Words", "Rewrite concepts while preserving meaning"),
                    DisplayRecord::step(4, "Create Individual Notes", "Each concept becomes its own note"),
                    DisplayRecord::step(5, "Link to Framework", "Connect new notes to existing knowledge"),
                    DisplayRecord::step(6, "Index & Reference", "Maintain references to sources"),
                ],
            },
            structure: CatalogEntry {
                section: TabSection::new(
                    "Organization Structure",
                    "How information is organized in the system",
                    Accent::Purple,
                ),
                records: vec![
                    DisplayRecord::plain("Daily Notes", "Entry points showing when notes were created"),
                    DisplayRecord::plain("Index Notes", "Topic-centered collections organizing notes by subject"),
                    DisplayRecord::plain("Reference Notes", "Notes about source materials"),
                    DisplayRecord::plain("Content Notes", "Individual concept notes with atomic ideas"),
                    DisplayRecord::plain("Backlinks", "Exploration of connections between notes"),
                ],
            },
            tools: CatalogEntry {
                section: TabSection::new(
                    "Tools & Resources",
                    "Software and resources that support the methodology",
                    Accent::Orange,
                ),
                records: vec![
                    DisplayRecord::plain("Obsidian", "Primary tool for implementation"),
                    DisplayRecord::plain("Command line/Neovim", "Alternative workflow"),
                    DisplayRecord::plain("Excalibrain", "Visualization tool for exploring note relationships"),
                ],
            },
            benefits: CatalogEntry {
                section: TabSection::new(
                    "Benefits & Outcomes",
                    "Advantages gained from implementing this approach",
                    Accent::Teal,
                ),
                records: vec![
                    DisplayRecord::plain("Accelerated Learning", "Process enables learning much faster than peers"),
                    DisplayRecord::plain("Deep Understanding", "Supports deep engagement with material"),
                    DisplayRecord::plain("Idea Network", "Builds connections that can be recombined into new writing"),
                    DisplayRecord::plain("Rapid Retrieval", "Allows quick access through multiple paths"),
                    DisplayRecord::plain("Active Knowledge", "Transforms passive reading into knowledge creation"),
                ],
            },
        }
    }

    fn entry(&self, tab: GestaltTab) -> &CatalogEntry {
        match tab {
            GestaltTab::Principles => &self.principles,
            GestaltTab::Workflow => &self.workflow,
            GestaltTab::Structure => &self.structure,
            GestaltTab::Tools => &self.tools,
            GestaltTab::Benefits => &self.benefits,
        }
    }

    /// Records of a tab, in the order they are rendered
    pub fn lookup(&self, tab: GestaltTab) -> &[DisplayRecord] {
        &self.entry(tab).records
    }

    pub fn section(&self, tab: GestaltTab) -> &TabSection {
        &self.entry(tab).section
    }

    pub fn record_count(&self, tab: GestaltTab) -> usize {
        self.entry(tab).records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_filled_records() {
        let catalog = ContentCatalog::global();
        for tab in GestaltTab::all() {
            let records = catalog.lookup(tab);
            assert!(!records.is_empty(), "{tab} has no records");
            for record in records {
                assert!(!record.title().is_empty());
                assert!(!record.description().is_empty());
            }
            let section = catalog.section(tab);
            assert!(!section.heading.is_empty());
            assert!(!section.description.is_empty());
        }
    }

    #[test]
    fn test_record_counts() {
        let catalog = ContentCatalog::global();
        assert_eq!(catalog.record_count(GestaltTab::Principles), 5);
        assert_eq!(catalog.record_count(GestaltTab::Workflow), 6);
        assert_eq!(catalog.record_count(GestaltTab::Structure), 5);
        assert_eq!(catalog.record_count(GestaltTab::Tools), 3);
        assert_eq!(catalog.record_count(GestaltTab::Benefits), 5);
    }

    #[test]
    fn test_workflow_steps_are_sequential() {
        let steps: Vec<Option<u32>> = ContentCatalog::global()
            .lookup(GestaltTab::Workflow)
            .iter()
            .map(DisplayRecord::step_number)
            .collect();
        assert_eq!(steps, (1..=6).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_only_workflow_carries_steps() {
        let catalog = ContentCatalog::global();
        for tab in GestaltTab::all() {
            if tab == GestaltTab::Workflow {
                continue;
            }
            assert!(catalog.lookup(tab).iter().all(|r| r.step_number().is_none()));
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = ContentCatalog::global();
        let principles = catalog.lookup(GestaltTab::Principles);
        assert_eq!(principles[0].title(), "Modularity");
        assert_eq!(principles[4].title(), "Linkage & Networks");

        let benefits = catalog.lookup(GestaltTab::Benefits);
        assert_eq!(benefits.last().map(DisplayRecord::title), Some("Active Knowledge"));
    }

    #[test]
    fn test_sections_use_distinct_accents() {
        let catalog = ContentCatalog::global();
        assert_eq!(catalog.section(GestaltTab::Workflow).heading, "Workflow Process");
        assert_eq!(catalog.section(GestaltTab::Tools).accent, Accent::Orange);

        let mut accents: Vec<&'static str> = GestaltTab::all()
            .iter()
            .map(|t| catalog.section(*t).accent.css_modifier())
            .collect();
        accents.sort();
        accents.dedup();
        assert_eq!(accents.len(), 5);
    }
}
