use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category tabs of the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestaltTab {
    #[default]
    Principles,
    Workflow,
    Structure,
    Tools,
    Benefits,
}

/// Token that does not name any of the five tabs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tab identifier: {0:?}")]
pub struct InvalidTabIdentifier(pub String);

impl GestaltTab {
    /// Lowercase token used as the tab value
    pub fn code(&self) -> &'static str {
        match self {
            GestaltTab::Principles => "principles",
            GestaltTab::Workflow => "workflow",
            GestaltTab::Structure => "structure",
            GestaltTab::Tools => "tools",
            GestaltTab::Benefits => "benefits",
        }
    }

    /// Label shown on the tab trigger
    pub fn display_name(&self) -> &'static str {
        match self {
            GestaltTab::Principles => "Principles",
            GestaltTab::Workflow => "Workflow",
            GestaltTab::Structure => "Structure",
            GestaltTab::Tools => "Tools",
            GestaltTab::Benefits => "Benefits",
        }
    }

    /// Key understood by the frontend `icon()` helper
    pub fn icon_name(&self) -> &'static str {
        match self {
            GestaltTab::Principles => "info",
            GestaltTab::Workflow => "layers",
            GestaltTab::Structure => "network",
            GestaltTab::Tools => "wrench",
            GestaltTab::Benefits => "message-square-text",
        }
    }

    /// All tabs in display order
    pub fn all() -> [GestaltTab; 5] {
        [
            GestaltTab::Principles,
            GestaltTab::Workflow,
            GestaltTab::Structure,
            GestaltTab::Tools,
            GestaltTab::Benefits,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "principles" => Some(GestaltTab::Principles),
            "workflow" => Some(GestaltTab::Workflow),
            "structure" => Some(GestaltTab::Structure),
            "tools" => Some(GestaltTab::Tools),
            "benefits" => Some(GestaltTab::Benefits),
            _ => None,
        }
    }
}

impl FromStr for GestaltTab {
    type Err = InvalidTabIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| InvalidTabIdentifier(s.to_string()))
    }
}

impl fmt::Display for GestaltTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for tab in GestaltTab::all() {
            assert_eq!(GestaltTab::from_code(tab.code()), Some(tab));
            assert_eq!(tab.code().parse::<GestaltTab>(), Ok(tab));
        }
    }

    #[test]
    fn test_default_is_principles() {
        assert_eq!(GestaltTab::default(), GestaltTab::Principles);
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        assert_eq!(
            "".parse::<GestaltTab>(),
            Err(InvalidTabIdentifier(String::new()))
        );
        assert!("Workflow".parse::<GestaltTab>().is_err());
        assert!("summary".parse::<GestaltTab>().is_err());
        assert_eq!(
            InvalidTabIdentifier("summary".into()).to_string(),
            "invalid tab identifier: \"summary\""
        );
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&GestaltTab::Workflow).unwrap();
        assert_eq!(json, "\"workflow\"");
        let tab: GestaltTab = serde_json::from_str("\"benefits\"").unwrap();
        assert_eq!(tab, GestaltTab::Benefits);
    }
}
