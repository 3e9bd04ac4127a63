use serde::{Deserialize, Serialize};

pub const ANALYZER_TITLE: &str = "Contextual Gestalt Analyzer";
pub const ANALYZER_TAGLINE: &str = "Extracting methodologies and frameworks from any content";
pub const ANALYZER_INTRO: &str = "This tool analyzes content to identify the underlying methodologies, \
principles, and frameworks that can be applied as a lens to other domains.";

/// One titled description shown inside a tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRecord {
    Plain {
        title: String,
        description: String,
    },
    /// Workflow entry, numbered from 1
    Step {
        step: u32,
        title: String,
        description: String,
    },
}

impl DisplayRecord {
    pub fn plain(title: &str, description: &str) -> Self {
        DisplayRecord::Plain {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn step(step: u32, title: &str, description: &str) -> Self {
        DisplayRecord::Step {
            step,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DisplayRecord::Plain { title, .. } | DisplayRecord::Step { title, .. } => title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            DisplayRecord::Plain { description, .. }
            | DisplayRecord::Step { description, .. } => description,
        }
    }

    pub fn step_number(&self) -> Option<u32> {
        match self {
            DisplayRecord::Plain { .. } => None,
            DisplayRecord::Step { step, .. } => Some(*step),
        }
    }
}

/// Colour family a section is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
}

impl Accent {
    /// CSS modifier, e.g. `gestalt-section--green`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Teal => "teal",
        }
    }
}

/// Card header of a tab panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSection {
    pub heading: String,
    pub description: String,
    pub accent: Accent,
}

impl TabSection {
    pub fn new(heading: &str, description: &str, accent: Accent) -> Self {
        Self {
            heading: heading.to_string(),
            description: description.to_string(),
            accent,
        }
    }
}
