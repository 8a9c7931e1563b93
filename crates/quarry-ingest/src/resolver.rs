//! Expands input paths into a deduplicated, sorted list of document paths.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

const EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Expands files and directory trees into the list of documents to process.
///
/// Directories recurse and keep only `.html`/`.htm` files, matched
/// case-insensitively; everything else inside them is silently skipped.
/// Literal file arguments are taken as-is. The result is deduplicated and
/// sorted so output order is reproducible across runs.
///
/// # Errors
///
/// Returns [`IngestError::InputNotFound`] when a literal path argument does
/// not exist.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for input in inputs {
        if input.is_dir() {
            // A corpus tree is not a source tree: walk everything, including
            // hidden and git-ignored entries.
            for entry in ignore::WalkBuilder::new(input)
                .standard_filters(false)
                .build()
                .flatten()
            {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && has_html_extension(entry.path())
                {
                    files.insert(entry.path().to_path_buf());
                }
            }
        } else if input.is_file() {
            files.insert(input.clone());
        } else {
            return Err(IngestError::InputNotFound(input.clone()));
        }
    }

    Ok(files.into_iter().collect())
}

fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_recursion_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "<p>a</p>").unwrap();
        std::fs::write(dir.path().join("b.txt"), "not html").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.htm"), "<p>c</p>").unwrap();

        let files = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|path| has_html_extension(path)));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("UPPER.HTML"), "<p>a</p>").unwrap();
        std::fs::write(dir.path().join("mixed.Htm"), "<p>b</p>").unwrap();

        let files = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn literal_file_is_accepted_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.txt");
        std::fs::write(&file, "<p>still processed</p>").unwrap();

        let files = resolve_inputs(&[file.clone()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn missing_literal_path_is_an_error() {
        let result = resolve_inputs(&[PathBuf::from("/nonexistent/page.html")]);
        assert!(matches!(result, Err(IngestError::InputNotFound(_))));
    }

    #[test]
    fn results_are_deduplicated_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.html");
        let a = dir.path().join("a.html");
        std::fs::write(&b, "<p>b</p>").unwrap();
        std::fs::write(&a, "<p>a</p>").unwrap();

        // Same directory twice plus one member as a literal argument.
        let files =
            resolve_inputs(&[dir.path().to_path_buf(), dir.path().to_path_buf(), a.clone()])
                .unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn hidden_files_are_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".hidden.html"), "<p>h</p>").unwrap();

        let files = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
