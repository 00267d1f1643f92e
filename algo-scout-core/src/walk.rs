// file selection - decides which paths reach the engine at all

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

lazy_static! {
    // build output, generated artefacts and test trees are never analysed
    static ref SKIPPED_DIRS: Regex = Regex::new(r"/(build|target|\.git|test)/").unwrap();
}

/// should this path be classified at the method level?
///
/// only java sources qualify, generated test files are excluded, and
/// anything under a build/VCS/test directory is skipped.
pub fn is_analysis_candidate(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    if SKIPPED_DIRS.is_match(&path_str) {
        return false;
    }
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            name.ends_with(".java") && !name.ends_with("Test.java")
        }
        None => false,
    }
}

/// collect analysable sources under root, in deterministic walk order
pub fn collect_analysis_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_analysis_candidate(path))
        .collect()
}

/// every java source under a project directory; the census applies no skip rules
pub fn collect_project_files(project_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(project_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().ends_with(".java"))
                .unwrap_or(false)
        })
        .collect()
}

/// immediate subdirectories of a scan root, sorted by name
///
/// a missing or unreadable root yields an empty list; the caller decides
/// whether that deserves a warning.
pub fn project_roots(root: &Path) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = match std::fs::read_dir(root) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(_) => Vec::new(),
    };
    roots.sort();
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}\n").unwrap();
    }

    #[test]
    fn candidate_rules() {
        assert!(is_analysis_candidate(Path::new("src/main/Billing.java")));
        assert!(!is_analysis_candidate(Path::new("src/main/BillingTest.java")));
        assert!(!is_analysis_candidate(Path::new("src/build/Billing.java")));
        assert!(!is_analysis_candidate(Path::new("a/target/Billing.java")));
        assert!(!is_analysis_candidate(Path::new("a/.git/Billing.java")));
        assert!(!is_analysis_candidate(Path::new("a/test/Billing.java")));
        assert!(!is_analysis_candidate(Path::new("src/main/Billing.py")));
    }

    #[test]
    fn analysis_walk_applies_filters() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/Payment.java");
        touch(tmp.path(), "src/PaymentTest.java");
        touch(tmp.path(), "build/Generated.java");
        touch(tmp.path(), "src/notes.txt");

        let files = collect_analysis_files(tmp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/Payment.java"));
    }

    #[test]
    fn project_walk_keeps_test_sources() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/Payment.java");
        touch(tmp.path(), "test/PaymentTest.java");

        let files = collect_project_files(tmp.path());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn project_roots_are_sorted_and_tolerate_missing_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::write(tmp.path().join("stray.txt"), "").unwrap();

        let roots = project_roots(tmp.path());
        assert_eq!(roots.len(), 2);
        assert!(roots[0].ends_with("alpha"));
        assert!(roots[1].ends_with("beta"));

        assert!(project_roots(&tmp.path().join("missing")).is_empty());
    }
}
