//! Document discovery: expand the paths given on the command line into the
//! ordered list of documents to annotate.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use specgloss_shared::{Result, SpecglossError};

/// Expand `paths` into a sorted, de-duplicated list of documents.
///
/// Files are taken as-is regardless of extension. Directories contribute
/// their files ending in `.{extension}`, descending into subdirectories only
/// when `recursive` is set. A path that does not exist is an error.
#[instrument(skip_all, fields(paths = paths.len(), extension = %extension, recursive = recursive))]
pub fn discover_documents(
    paths: &[PathBuf],
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();

    for path in paths {
        let meta = std::fs::metadata(path).map_err(|e| SpecglossError::io(path, e))?;
        if meta.is_dir() {
            collect_dir(path, extension, recursive, &mut found)?;
        } else {
            found.insert(path.clone());
        }
    }

    debug!(documents = found.len(), "discovery complete");
    Ok(found.into_iter().collect())
}

fn collect_dir(
    dir: &Path,
    extension: &str,
    recursive: bool,
    found: &mut BTreeSet<PathBuf>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| SpecglossError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SpecglossError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| SpecglossError::io(&path, e))?;

        if file_type.is_dir() {
            if recursive {
                collect_dir(&path, extension, recursive, found)?;
            }
        } else if has_extension(&path, extension) {
            found.insert(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sg-discover-test-{}",
            uuid::Uuid::now_v7()
        ));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("b.md"), "b").unwrap();
        std::fs::write(dir.join("a.md"), "a").unwrap();
        std::fs::write(dir.join("notes.txt"), "txt").unwrap();
        std::fs::write(dir.join("nested").join("c.md"), "c").unwrap();
        dir
    }

    #[test]
    fn directory_is_flat_and_sorted_by_default() {
        let tmp = temp_dir();
        let docs = discover_documents(&[tmp.clone()], "md", false).unwrap();
        assert_eq!(docs, vec![tmp.join("a.md"), tmp.join("b.md")]);
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn recursive_includes_subdirectories() {
        let tmp = temp_dir();
        let docs = discover_documents(&[tmp.clone()], "md", true).unwrap();
        assert_eq!(
            docs,
            vec![tmp.join("a.md"), tmp.join("b.md"), tmp.join("nested").join("c.md")]
        );
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn explicit_files_are_kept_and_deduplicated() {
        let tmp = temp_dir();
        let paths = vec![tmp.join("notes.txt"), tmp.clone(), tmp.join("a.md")];
        let docs = discover_documents(&paths, "md", false).unwrap();
        assert_eq!(
            docs,
            vec![tmp.join("a.md"), tmp.join("b.md"), tmp.join("notes.txt")]
        );
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn other_extension() {
        let tmp = temp_dir();
        let docs = discover_documents(&[tmp.clone()], "txt", true).unwrap();
        assert_eq!(docs, vec![tmp.join("notes.txt")]);
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let tmp = temp_dir();
        let err = discover_documents(&[tmp.join("missing.md")], "md", false).unwrap_err();
        assert!(matches!(err, SpecglossError::Io { .. }));
        let _ = std::fs::remove_dir_all(&tmp);
    }
}
