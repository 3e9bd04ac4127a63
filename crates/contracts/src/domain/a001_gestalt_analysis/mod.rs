//! Contextual Gestalt Analyzer: static methodology breakdown shown in tabs

pub mod aggregate;
pub mod catalog;
pub mod selector;
pub mod view;

pub use aggregate::{Accent, DisplayRecord, TabSection, ANALYZER_INTRO, ANALYZER_TAGLINE, ANALYZER_TITLE};
pub use catalog::{ContentCatalog, GESTALT_CATALOG};
pub use selector::TabSelector;
pub use view::{SectionItem, SectionView};
