//! Rationale insertion for Markdown requirement documents.
//!
//! [`annotate`] walks a document's lines once and, for every requirement
//! block without a rationale, splices a blank line and a
//! `**Rationale**: <text>` line directly after the block's first `SHALL`
//! line. Everything else is copied verbatim, and annotating an annotated
//! document inserts nothing.

mod blocks;

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, instrument};

use specgloss_classifier::Classifier;
use specgloss_shared::{RATIONALE_MARKER, is_section_boundary};

pub use blocks::RequirementHeader;

/// Default number of lines after a header searched for an existing rationale.
pub const DEFAULT_LOOKAHEAD_LINES: usize = 10;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Options for a single annotation pass.
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    /// Lines after a header searched for an existing rationale.
    pub lookahead_lines: usize,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
        }
    }
}

/// One inserted rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    /// Requirement the rationale was written for.
    pub requirement_id: String,
    /// Zero-based index of the rationale line in the output.
    pub line: usize,
    /// Catalog group that supplied the text (`None` for the global fallback).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Result of annotating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// The full output line sequence.
    pub lines: Vec<String>,
    /// Rationales inserted, in document order.
    pub insertions: Vec<Insertion>,
    /// Requirements left untouched because their block has no `SHALL` line.
    pub missing_normative: Vec<String>,
}

impl Annotation {
    pub fn insertion_count(&self) -> usize {
        self.insertions.len()
    }

    /// Whether the output differs from the input.
    pub fn is_changed(&self) -> bool {
        !self.insertions.is_empty()
    }

    /// Re-join the lines with `\n`, the inverse of [`annotate_text`]'s split.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Per-block progress while copying lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    ScanningForShall,
    Done,
}

// ---------------------------------------------------------------------------
// Annotator
// ---------------------------------------------------------------------------

/// Annotate a document given as lines.
#[instrument(skip_all, fields(lines = lines.len(), lookahead = options.lookahead_lines))]
pub fn annotate<S: AsRef<str>>(
    lines: &[S],
    classifier: &Classifier,
    options: &AnnotateOptions,
) -> Annotation {
    let mut result = Annotation {
        lines: Vec::with_capacity(lines.len()),
        ..Annotation::default()
    };
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_ref();
        result.lines.push(line.to_string());
        cursor += 1;

        let Some(header) = RequirementHeader::parse(line) else {
            continue;
        };

        let mut state = if blocks::has_rationale(&lines[cursor..], options.lookahead_lines) {
            BlockState::Done
        } else {
            BlockState::ScanningForShall
        };

        while state == BlockState::ScanningForShall {
            match lines.get(cursor).map(|line| line.as_ref()) {
                Some(next) if !is_section_boundary(next) => {
                    result.lines.push(next.to_string());
                    cursor += 1;

                    if blocks::is_normative(next) {
                        let classification = classifier.explain_id(&header.id, header.title);
                        // Inserted lines follow the normative line's ending.
                        let eol = if next.ends_with('\r') { "\r" } else { "" };
                        result.lines.push(eol.to_string());
                        result.lines.push(format!(
                            "{RATIONALE_MARKER} {}{eol}",
                            classification.rationale
                        ));

                        debug!(
                            id = %header.id,
                            group = classification.group.unwrap_or("global"),
                            rule = ?classification.rule,
                            "inserted rationale"
                        );

                        result.insertions.push(Insertion {
                            requirement_id: header.id.to_string(),
                            line: result.lines.len() - 1,
                            group: classification.group.map(str::to_string),
                        });
                        state = BlockState::Done;
                    }
                }
                _ => {
                    debug!(id = %header.id, "no normative statement, block left unchanged");
                    result.missing_normative.push(header.id.to_string());
                    state = BlockState::Done;
                }
            }
        }
    }

    result
}

/// Annotate a whole document. Splits on `\n` only, so `\r`, trailing
/// newlines and every other byte survive [`Annotation::to_text`].
pub fn annotate_text(text: &str, classifier: &Classifier, options: &AnnotateOptions) -> Annotation {
    let lines: Vec<&str> = text.split('\n').collect();
    annotate(&lines, classifier, options)
}

/// Annotate a document given as raw bytes, returning the new content.
///
/// Lines are decoded lossily for matching only. Every input line is copied
/// to the output byte for byte, so content that is not valid UTF-8 survives.
/// The returned [`Annotation`] carries the decoded lines.
pub fn annotate_bytes(
    content: &[u8],
    classifier: &Classifier,
    options: &AnnotateOptions,
) -> (Vec<u8>, Annotation) {
    let raw: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    let decoded: Vec<Cow<'_, str>> = raw.iter().map(|line| String::from_utf8_lossy(line)).collect();
    let annotation = annotate(&decoded, classifier, options);

    let mut inserted = annotation
        .insertions
        .iter()
        .flat_map(|insertion| [insertion.line - 1, insertion.line])
        .peekable();
    let mut source = raw.iter();
    let mut output = Vec::with_capacity(content.len());

    for (index, line) in annotation.lines.iter().enumerate() {
        if index > 0 {
            output.push(b'\n');
        }
        if inserted.peek() == Some(&index) {
            inserted.next();
            output.extend_from_slice(line.as_bytes());
        } else if let Some(original) = source.next() {
            output.extend_from_slice(original);
        }
    }

    (output, annotation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
