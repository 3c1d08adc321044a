//! Document pipeline for specgloss.
//!
//! This crate ties together discovery, the classifier and the rationale
//! annotator into end-to-end workflows (e.g., `annotate_documents`).

pub mod discover;
pub mod pipeline;
pub mod report;

pub use discover::discover_documents;
pub use pipeline::{
    ProgressReporter, RunConfig, SilentProgress, annotate_document, annotate_documents,
    load_classifier,
};
pub use report::{DocumentOutcome, DocumentReport, RunReport, RunTotals, sha256_hex};
