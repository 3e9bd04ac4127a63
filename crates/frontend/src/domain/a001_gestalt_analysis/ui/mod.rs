//! Analyzer UI - header card, tab bar and the active section panel

pub mod page;
pub mod section_panel;
pub mod view_model;

pub use page::GestaltAnalyzerPage;
pub use view_model::GestaltAnalyzerVm;
