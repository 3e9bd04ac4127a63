//! Shared domain model of the Contextual Gestalt Analyzer.
//!
//! Target-independent: nothing here touches the DOM, so the frontend and
//! native unit tests see exactly the same catalog and selection rules.

pub mod domain;
pub mod enums;
