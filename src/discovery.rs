//! Discovery and loading of engine result dumps.
//!
//! A grading run may leave a single dump behind, or one dump per tutorial
//! step in a results directory. Both shapes load through here. Individual
//! dumps that fail to read or parse inside a directory are reported and
//! skipped; the rest of the run still gets summarized.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::adapter::{normalize_files, RawFile};
use crate::diagnostics::TallyError;
use crate::tree::SuiteFile;

/// Discovers all result dump files recursively under the given root.
///
/// Returns only `.json`, `.yaml`, and `.yml` files. The list is sorted so
/// suites always concatenate in a deterministic order.
pub fn discover_dump_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "json" || ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Load and normalize the suites from a single dump file.
pub fn load_suite_files(path: &Path) -> Result<Vec<SuiteFile>, TallyError> {
    let content = fs::read_to_string(path).map_err(|e| TallyError::read(path, e))?;
    let raw: Vec<RawFile> = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| TallyError::parse(path, e))?
    } else {
        serde_json::from_str(&content).map_err(|e| TallyError::parse(path, e))?
    };
    Ok(normalize_files(raw))
}

/// Load every dump reachable from `path`, which may be a single file or a
/// directory of per-suite dumps.
///
/// A direct file path that fails to load is an error. Inside a directory,
/// a broken dump is reported to stderr and skipped so the remaining dumps
/// still produce a report.
pub fn load_path(path: &Path) -> Result<Vec<SuiteFile>, TallyError> {
    if !path.is_dir() {
        return load_suite_files(path);
    }

    let mut files = Vec::new();
    for dump in discover_dump_files(path) {
        match load_suite_files(&dump) {
            Ok(mut suites) => files.append(&mut suites),
            Err(e) => eprintln!("Failed to load {}: {}", dump.display(), e),
        }
    }
    Ok(files)
}

fn is_yaml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml")
}
