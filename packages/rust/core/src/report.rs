//! Per-document and per-run reports.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use specgloss_markdown::Insertion;
use specgloss_shared::{Result, SpecglossError};

/// Outcome of annotating one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Rationales inserted (or that would be, on a dry run).
    pub insertions: Vec<Insertion>,
    /// Requirements whose block has no normative line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_normative: Vec<String>,
    /// Whether the file on disk was replaced.
    pub written: bool,
    pub sha256_before: String,
    pub sha256_after: String,
}

impl DocumentReport {
    pub fn insertion_count(&self) -> usize {
        self.insertions.len()
    }

    /// One-line human summary of the document.
    pub fn summary(&self) -> String {
        match self.insertion_count() {
            0 => "No changes needed".to_string(),
            1 => "Added 1 rationale".to_string(),
            n => format!("Added {n} rationales"),
        }
    }
}

/// A document either annotated or failed; failures never abort a run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Annotated(DocumentReport),
    Failed { path: PathBuf, error: String },
}

impl DocumentOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Annotated(report) => &report.path,
            Self::Failed { path, .. } => path,
        }
    }
}

/// Aggregate counts over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub documents: usize,
    pub written: usize,
    pub insertions: usize,
    pub missing_normative: usize,
    pub failed: usize,
}

impl RunTotals {
    pub fn from_outcomes(outcomes: &[DocumentOutcome]) -> Self {
        let mut totals = Self {
            documents: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                DocumentOutcome::Annotated(report) => {
                    totals.insertions += report.insertion_count();
                    totals.missing_normative += report.missing_normative.len();
                    if report.written {
                        totals.written += 1;
                    }
                }
                DocumentOutcome::Failed { .. } => totals.failed += 1,
            }
        }
        totals
    }
}

/// Result of a full annotation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub dry_run: bool,
    pub documents: Vec<DocumentOutcome>,
    pub totals: RunTotals,
    pub elapsed_ms: u64,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.totals.failed > 0
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SpecglossError::validation(format!("report serialization: {e}")))
    }
}

/// Lowercase hex SHA-256 of `content`.
pub fn sha256_hex(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(path: &str, insertions: usize, written: bool) -> DocumentReport {
        DocumentReport {
            path: PathBuf::from(path),
            insertions: (0..insertions)
                .map(|i| Insertion {
                    requirement_id: format!("REQ-TIME-{i:03}"),
                    line: i * 4 + 2,
                    group: Some("time-banking".into()),
                })
                .collect(),
            missing_normative: vec![],
            written,
            sha256_before: sha256_hex("before"),
            sha256_after: sha256_hex("after"),
        }
    }

    #[test]
    fn summary_wording() {
        assert_eq!(report("a.md", 0, false).summary(), "No changes needed");
        assert_eq!(report("a.md", 1, true).summary(), "Added 1 rationale");
        assert_eq!(report("a.md", 3, true).summary(), "Added 3 rationales");
    }

    #[test]
    fn totals_count_every_outcome() {
        let outcomes = vec![
            DocumentOutcome::Annotated(report("a.md", 2, true)),
            DocumentOutcome::Annotated(report("b.md", 0, false)),
            DocumentOutcome::Failed {
                path: PathBuf::from("c.md"),
                error: "boom".into(),
            },
        ];
        let totals = RunTotals::from_outcomes(&outcomes);
        assert_eq!(
            totals,
            RunTotals {
                documents: 3,
                written: 1,
                insertions: 2,
                missing_normative: 0,
                failed: 1,
            }
        );
    }

    #[test]
    fn json_is_tagged_by_status() {
        let documents = vec![
            DocumentOutcome::Annotated(report("a.md", 1, true)),
            DocumentOutcome::Failed {
                path: PathBuf::from("c.md"),
                error: "boom".into(),
            },
        ];
        let run = RunReport {
            started_at: Utc::now(),
            dry_run: false,
            totals: RunTotals::from_outcomes(&documents),
            documents,
            elapsed_ms: 5,
        };
        let value: serde_json::Value = serde_json::from_str(&run.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["documents"][0]["status"], "annotated");
        assert_eq!(value["documents"][0]["insertions"][0]["requirement_id"], "REQ-TIME-000");
        assert_eq!(value["documents"][1]["status"], "failed");
        assert_eq!(value["documents"][1]["error"], "boom");
        assert_eq!(value["totals"]["failed"], 1);
        assert!(run.has_failures());
    }

    #[test]
    fn digest_is_hex_sha256() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sha256_hex(b"abc"), sha256_hex("abc"));
    }
}
