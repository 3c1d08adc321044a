//! Line-level recognition of requirement blocks.
//!
//! A block starts at a `### REQ-<FAMILY>-<NUMBER>:<title>` header and runs up
//! to the next requirement header or `## ` heading.

use std::sync::LazyLock;

use regex::Regex;

use specgloss_shared::{NORMATIVE_KEYWORD, RATIONALE_MARKER, RequirementId, is_section_boundary};

/// Matches a requirement header, capturing the ID and the raw title.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### (REQ-[A-Z]+(?:-[A-Z]+)*-\d+):(.*)$").expect("requirement header regex")
});

/// A recognized requirement header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementHeader<'a> {
    /// Parsed requirement ID.
    pub id: RequirementId,
    /// Title text after the colon, untrimmed.
    pub title: &'a str,
}

impl<'a> RequirementHeader<'a> {
    /// Parse a header line; any other line yields `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;
        let id = RequirementId::parse(caps.get(1)?.as_str())?;
        let title = caps.get(2).map_or("", |m| m.as_str());
        Some(Self { id, title })
    }
}

pub(crate) fn is_normative(line: &str) -> bool {
    line.contains(NORMATIVE_KEYWORD)
}

pub(crate) fn is_rationale(line: &str) -> bool {
    line.contains(RATIONALE_MARKER)
}

/// Number of leading `body` lines before the next section boundary.
fn block_len<S: AsRef<str>>(body: &[S]) -> usize {
    body.iter()
        .position(|line| is_section_boundary(line.as_ref()))
        .unwrap_or(body.len())
}

/// Whether the block starting at `body` (the lines after a header) already
/// carries a rationale.
///
/// Two places count: any of the first `lookahead` block lines, and the first
/// non-blank line after the block's first normative line, which is where a
/// rationale gets inserted. The second check keeps annotation a fixed point
/// for blocks whose normative line sits near the end of the window.
pub(crate) fn has_rationale<S: AsRef<str>>(body: &[S], lookahead: usize) -> bool {
    let block = &body[..block_len(body)];

    if block
        .iter()
        .take(lookahead)
        .any(|line| is_rationale(line.as_ref()))
    {
        return true;
    }

    block
        .iter()
        .position(|line| is_normative(line.as_ref()))
        .and_then(|n| {
            block[n + 1..]
                .iter()
                .map(|line| line.as_ref())
                .find(|line| !line.trim().is_empty())
        })
        .is_some_and(is_rationale)
}
