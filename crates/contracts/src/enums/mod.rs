pub mod gestalt_tab;

pub use gestalt_tab::{GestaltTab, InvalidTabIdentifier};
