//! End-to-end `annotate` pipeline: paths → discovery → annotate → write → report.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use specgloss_classifier::{Classifier, load_catalog};
use specgloss_markdown::{AnnotateOptions, annotate_bytes};
use specgloss_shared::{AnnotateConfig, Result, SpecglossError};

use crate::discover::discover_documents;
use crate::report::{DocumentOutcome, DocumentReport, RunReport, RunTotals, sha256_hex};

/// Configuration for the `annotate_documents` pipeline.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Files and directories to annotate.
    pub paths: Vec<PathBuf>,
    /// Merged config file + CLI settings.
    pub settings: AnnotateConfig,
    /// Compute insertions without touching any file.
    pub dry_run: bool,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when a document finishes, in discovery order.
    fn document_done(&self, outcome: &DocumentOutcome, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, report: &RunReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn document_done(&self, _outcome: &DocumentOutcome, _current: usize, _total: usize) {}
    fn done(&self, _report: &RunReport) {}
}

/// Build the classifier named by the settings: the catalog file when one is
/// configured, the built-in catalog otherwise.
pub fn load_classifier(settings: &AnnotateConfig) -> Result<Classifier> {
    match &settings.catalog_path {
        Some(path) => Ok(Classifier::new(Arc::new(load_catalog(path)?))),
        None => Ok(Classifier::builtin()),
    }
}

/// Annotate one document, replacing it on disk when rationales were added.
#[instrument(skip_all, fields(path = %path.display(), dry_run = dry_run))]
pub async fn annotate_document(
    path: &Path,
    classifier: &Classifier,
    options: &AnnotateOptions,
    dry_run: bool,
) -> Result<DocumentReport> {
    let original = tokio::fs::read(path)
        .await
        .map_err(|e| SpecglossError::io(path, e))?;

    let (updated, annotation) = annotate_bytes(&original, classifier, options);
    let sha256_before = sha256_hex(&original);

    let (sha256_after, written) = if annotation.is_changed() {
        if !dry_run {
            write_atomic(path, &updated).await?;
        }
        (sha256_hex(&updated), !dry_run)
    } else {
        (sha256_before.clone(), false)
    };

    debug!(
        insertions = annotation.insertion_count(),
        missing_normative = annotation.missing_normative.len(),
        written,
        "document annotated"
    );

    Ok(DocumentReport {
        path: path.to_path_buf(),
        insertions: annotation.insertions,
        missing_normative: annotation.missing_normative,
        written,
        sha256_before,
        sha256_after,
    })
}

/// Run the full `annotate` pipeline.
///
/// 1. Load the catalog
/// 2. Discover documents
/// 3. Annotate them concurrently, bounded by `concurrency`
/// 4. Collect outcomes in discovery order
#[instrument(skip_all, fields(paths = config.paths.len(), dry_run = config.dry_run))]
pub async fn annotate_documents(
    config: &RunConfig,
    progress: &dyn ProgressReporter,
) -> Result<RunReport> {
    config.settings.validate()?;

    let started_at = chrono::Utc::now();
    let start = Instant::now();

    // --- Phase 1: Catalog ---
    progress.phase("Loading catalog");
    let classifier = load_classifier(&config.settings)?;

    // --- Phase 2: Discovery ---
    progress.phase("Discovering documents");
    let documents = discover_documents(
        &config.paths,
        &config.settings.extension,
        config.settings.recursive,
    )?;

    info!(
        documents = documents.len(),
        concurrency = config.settings.concurrency,
        "starting annotation"
    );

    // --- Phase 3: Annotate ---
    progress.phase("Annotating documents");
    let options = AnnotateOptions {
        lookahead_lines: config.settings.lookahead_lines,
    };
    let semaphore = Arc::new(Semaphore::new(config.settings.concurrency as usize));
    let mut handles = Vec::with_capacity(documents.len());

    for path in documents {
        let sem = semaphore.clone();
        let classifier = classifier.clone();
        let options = options.clone();
        let dry_run = config.dry_run;
        let task_path = path.clone();

        let handle = tokio::spawn(async move {
            let _permit = sem
                .acquire()
                .await
                .map_err(|e| SpecglossError::Task(e.to_string()))?;
            annotate_document(&task_path, &classifier, &options, dry_run).await
        });
        handles.push((path, handle));
    }

    // --- Phase 4: Collect ---
    let total = handles.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, (path, handle)) in handles.into_iter().enumerate() {
        let outcome = match handle.await {
            Ok(Ok(report)) => DocumentOutcome::Annotated(report),
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "annotation failed");
                DocumentOutcome::Failed {
                    path,
                    error: e.to_string(),
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "annotation task failed");
                DocumentOutcome::Failed {
                    path,
                    error: SpecglossError::Task(e.to_string()).to_string(),
                }
            }
        };
        progress.document_done(&outcome, i + 1, total);
        outcomes.push(outcome);
    }

    let report = RunReport {
        started_at,
        dry_run: config.dry_run,
        totals: RunTotals::from_outcomes(&outcomes),
        documents: outcomes,
        elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    };

    progress.done(&report);

    info!(
        documents = report.totals.documents,
        insertions = report.totals.insertions,
        written = report.totals.written,
        failed = report.totals.failed,
        elapsed_ms = report.elapsed_ms,
        "annotation complete"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Atomic write
// ---------------------------------------------------------------------------

/// Write to `.{filename}.tmp` beside the target, then rename over it.
async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let filename = path
        .file_name()
        .ok_or_else(|| SpecglossError::validation(format!("{} has no file name", path.display())))?
        .to_string_lossy();
    let temp = path.with_file_name(format!(".{filename}.tmp"));

    tokio::fs::write(&temp, content)
        .await
        .map_err(|e| SpecglossError::io(&temp, e))?;

    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(SpecglossError::io(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    const UNANNOTATED: &str = "\
## Requirements

### REQ-TIME-001: Skill-Based Matching
The system SHALL support flexible skill taxonomies.

### REQ-GOV-002: Exit Rights
The system SHALL let members leave.
";

    const ANNOTATED: &str = "\
### REQ-TIME-001: Skill-Based Matching
The system SHALL support flexible skill taxonomies.

**Rationale**: Written by hand.
";

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sg-pipeline-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn settings() -> AnnotateConfig {
        AnnotateConfig::from(&specgloss_shared::AppConfig::default())
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn phase(&self, name: &str) {
            self.events.lock().unwrap().push(format!("phase:{name}"));
        }
        fn document_done(&self, outcome: &DocumentOutcome, current: usize, total: usize) {
            let name = outcome.path().file_name().unwrap().to_string_lossy().to_string();
            self.events
                .lock()
                .unwrap()
                .push(format!("doc:{name}:{current}/{total}"));
        }
        fn done(&self, report: &RunReport) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}", report.totals.documents));
        }
    }

    #[tokio::test]
    async fn annotate_document_writes_then_reaches_fixed_point() {
        let tmp = temp_dir();
        let path = tmp.join("time.md");
        std::fs::write(&path, UNANNOTATED).unwrap();
        let classifier = Classifier::builtin();
        let options = AnnotateOptions::default();

        let first = annotate_document(&path, &classifier, &options, false).await.unwrap();
        assert_eq!(first.insertion_count(), 2);
        assert!(first.written);
        assert_ne!(first.sha256_before, first.sha256_after);

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(sha256_hex(&on_disk), first.sha256_after);
        assert!(on_disk.contains("**Rationale**: Freedom includes the right to leave"));
        assert!(on_disk.ends_with('\n'));
        assert!(!tmp.join(".time.md.tmp").exists());

        let second = annotate_document(&path, &classifier, &options, false).await.unwrap();
        assert_eq!(second.insertion_count(), 0);
        assert!(!second.written);
        assert_eq!(second.sha256_before, second.sha256_after);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn dry_run_leaves_file_untouched() {
        let tmp = temp_dir();
        let path = tmp.join("time.md");
        std::fs::write(&path, UNANNOTATED).unwrap();

        let report = annotate_document(&path, &Classifier::builtin(), &AnnotateOptions::default(), true)
            .await
            .unwrap();
        assert_eq!(report.insertion_count(), 2);
        assert!(!report.written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), UNANNOTATED);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn non_utf8_document_is_annotated_in_place() {
        let tmp = temp_dir();
        let path = tmp.join("latin1.md");
        let original: &[u8] = b"### REQ-TIME-001: Skill-Based Matching\nCaf\xe9 members SHALL list skills.\n";
        std::fs::write(&path, original).unwrap();

        let report = annotate_document(&path, &Classifier::builtin(), &AnnotateOptions::default(), false)
            .await
            .unwrap();
        assert_eq!(report.insertion_count(), 1);
        assert!(report.written);
        assert_eq!(report.sha256_before, sha256_hex(original));

        let on_disk = std::fs::read(&path).unwrap();
        assert!(on_disk.starts_with(original));
        assert!(on_disk[original.len()..].starts_with(b"\n**Rationale**: Diverse skills"));
        assert_eq!(sha256_hex(&on_disk), report.sha256_after);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_collects_outcomes_in_order_and_isolates_failures() {
        let tmp = temp_dir();
        std::fs::write(tmp.join("a.md"), UNANNOTATED).unwrap();
        std::os::unix::fs::symlink(tmp.join("gone.md"), tmp.join("b.md")).unwrap();
        std::fs::write(tmp.join("c.md"), ANNOTATED).unwrap();

        let config = RunConfig {
            paths: vec![tmp.clone()],
            settings: AnnotateConfig {
                concurrency: 2,
                ..settings()
            },
            dry_run: false,
        };
        let progress = RecordingProgress::default();
        let report = annotate_documents(&config, &progress).await.unwrap();

        let names: Vec<_> = report
            .documents
            .iter()
            .map(|d| d.path().file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.md", "b.md", "c.md"]);
        assert!(matches!(report.documents[1], DocumentOutcome::Failed { .. }));
        assert_eq!(report.totals.insertions, 2);
        assert_eq!(report.totals.written, 1);
        assert_eq!(report.totals.failed, 1);
        assert!(report.has_failures());
        assert_eq!(std::fs::read_to_string(tmp.join("c.md")).unwrap(), ANNOTATED);

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events[0], "phase:Loading catalog");
        assert!(events.contains(&"doc:b.md:2/3".to_string()));
        assert_eq!(events.last().unwrap(), "done:3");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn custom_catalog_is_loaded() {
        let tmp = temp_dir();
        let catalog = tmp.join("catalog.toml");
        std::fs::write(
            &catalog,
            r#"
global_fallback = "Custom global."

[[group]]
name = "time"
families = ["TIME"]
fallback = "Custom time."
"#,
        )
        .unwrap();
        let doc = tmp.join("doc.md");
        std::fs::write(&doc, UNANNOTATED).unwrap();

        let config = RunConfig {
            paths: vec![doc.clone()],
            settings: AnnotateConfig {
                catalog_path: Some(catalog),
                ..settings()
            },
            dry_run: false,
        };
        annotate_documents(&config, &SilentProgress).await.unwrap();

        let text = std::fs::read_to_string(&doc).unwrap();
        assert!(text.contains("**Rationale**: Custom time."));
        assert!(text.contains("**Rationale**: Custom global."));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn invalid_settings_are_rejected() {
        let config = RunConfig {
            paths: vec![],
            settings: AnnotateConfig {
                concurrency: 0,
                ..settings()
            },
            dry_run: true,
        };
        let err = annotate_documents(&config, &SilentProgress).await.unwrap_err();
        assert!(matches!(err, SpecglossError::Config { .. }));
    }

    #[tokio::test]
    async fn missing_path_fails_the_run() {
        let tmp = temp_dir();
        let config = RunConfig {
            paths: vec![tmp.join("nope")],
            settings: settings(),
            dry_run: true,
        };
        let err = annotate_documents(&config, &SilentProgress).await.unwrap_err();
        assert!(matches!(err, SpecglossError::Io { .. }));
        let _ = std::fs::remove_dir_all(&tmp);
    }
}
