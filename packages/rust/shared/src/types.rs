//! Core domain types for specgloss requirement documents.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecglossError};

/// Marker that both detects an existing rationale and prefixes an inserted one.
pub const RATIONALE_MARKER: &str = "**Rationale**:";

/// Token marking a requirement's normative statement line (case-sensitive).
pub const NORMATIVE_KEYWORD: &str = "SHALL";

/// Prefix of a requirement header line.
pub const REQUIREMENT_HEADER_PREFIX: &str = "### REQ-";

/// Prefix of a higher-level section heading.
pub const SECTION_HEADING_PREFIX: &str = "## ";

/// Matches a bare requirement ID such as `REQ-TIME-001` or `REQ-AI-ARCH-012`.
static REQUIREMENT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^REQ-([A-Z]+(?:-[A-Z]+)*)-(\d+)$").expect("requirement id regex")
});

// ---------------------------------------------------------------------------
// RequirementId
// ---------------------------------------------------------------------------

/// A parsed requirement identifier of the form `REQ-<FAMILY>-<NUMBER>`.
///
/// The family may span several hyphenated uppercase tokens (`AI-ARCH`); the
/// number keeps its original digits so zero padding survives display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId {
    family: String,
    number: String,
}

impl RequirementId {
    /// Parse an ID, returning `None` when it does not have the expected shape.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = REQUIREMENT_ID_RE.captures(raw)?;
        Some(Self {
            family: caps[1].to_string(),
            number: caps[2].to_string(),
        })
    }

    /// The family segment (`TIME`, `AI-ARCH`, ...).
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The decimal number segment, as written.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "REQ-{}-{}", self.family, self.number)
    }
}

impl std::str::FromStr for RequirementId {
    type Err = SpecglossError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            SpecglossError::validation(format!(
                "'{s}' is not a requirement id (expected REQ-<FAMILY>-<NUMBER>)"
            ))
        })
    }
}

/// Whether a line starts a new requirement or a higher-level section.
pub fn is_section_boundary(line: &str) -> bool {
    line.starts_with(REQUIREMENT_HEADER_PREFIX) || line.starts_with(SECTION_HEADING_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_token_family() {
        let id = RequirementId::parse("REQ-TIME-001").expect("parse");
        assert_eq!(id.family(), "TIME");
        assert_eq!(id.number(), "001");
        assert_eq!(id.to_string(), "REQ-TIME-001");
    }

    #[test]
    fn parses_hyphenated_family() {
        let id: RequirementId = "REQ-AI-ARCH-012".parse().expect("parse");
        assert_eq!(id.family(), "AI-ARCH");
        assert_eq!(id.number(), "012");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "REQ-", "REQ-time-001", "REQ-TIME", "REQ-TIME-", "REQ-TIME-01a", "XREQ-TIME-1"] {
            assert!(RequirementId::parse(raw).is_none(), "{raw} should not parse");
        }
        let err = "REQ-1".parse::<RequirementId>().unwrap_err();
        assert!(err.to_string().contains("REQ-1"));
    }

    #[test]
    fn section_boundaries() {
        assert!(is_section_boundary("### REQ-GOV-002: Exit Rights"));
        assert!(is_section_boundary("## Governance"));
        assert!(!is_section_boundary("#### Scenario: exit"));
        assert!(!is_section_boundary("# Title"));
        assert!(!is_section_boundary("The system SHALL allow exit."));
    }
}
