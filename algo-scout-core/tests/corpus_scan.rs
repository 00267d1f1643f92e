// end-to-end scans over a synthesized corpus

use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use tempfile::TempDir;

use algo_scout_core::engine::{Aggregator, FileOutcome};
use algo_scout_core::{analyse_corpus, analyse_file, scan_projects};

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

const BALANCE_SOURCE: &str = indoc! {r#"
    public class AccountBalanceService {
        public int lookup(String id) {
            Map<String, Integer> balances = new HashMap<>();
            balances.put(id, 100);
            return balances.get(id);
        }

        private static void sortLedger(List<Entry> entries) {
            Collections.sort(entries);
            Arrays.sort(supporting);
            validateLedger(entries);
        }
    }
"#};

const PLAIN_SOURCE: &str = indoc! {r#"
    public class Plain {
        public int answer() {
            int a = 40; int b = 2; return a + b;
        }
    }
"#};

#[test]
fn corpus_scan_classifies_and_tags() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "bank/AccountBalanceService.java", BALANCE_SOURCE);
    write(tmp.path(), "misc/Plain.java", PLAIN_SOURCE);

    let aggregator = analyse_corpus(tmp.path());
    let summary = aggregator.summary();

    assert_eq!(summary.files_processed, 2);
    assert!(summary.total_patterns >= 2);

    let hash = aggregator
        .records()
        .iter()
        .find(|r| r.pattern_type == "hash_map_operations")
        .unwrap();
    assert_eq!(hash.method, "lookup");
    assert_eq!(hash.business_context, "balance, account");
    assert_eq!(hash.matches, 3);
    assert!((hash.confidence - 0.9).abs() < 1e-9);

    let sorting = aggregator
        .records()
        .iter()
        .find(|r| r.pattern_type == "sorting_searching")
        .unwrap();
    assert_eq!(sorting.method, "sortLedger");
    assert_eq!(sorting.matches, 2);

    // the pattern-free file contributed to totals but emitted no records
    assert!(summary.pattern_distribution.contains_key("hash_map_operations"));
    assert!(!aggregator.records().iter().any(|r| r.file.ends_with("Plain.java")));
}

#[test]
fn split_corpus_merge_equals_single_pass() {
    let tmp = TempDir::new().unwrap();
    let first = write(tmp.path(), "a/AccountBalanceService.java", BALANCE_SOURCE);
    let second = write(tmp.path(), "b/Plain.java", PLAIN_SOURCE);

    let mut single = Aggregator::new();
    single.ingest(analyse_file(&first));
    single.ingest(analyse_file(&second));

    let mut left = Aggregator::new();
    left.ingest(analyse_file(&first));
    let mut right = Aggregator::new();
    right.ingest(analyse_file(&second));
    left.merge(right);

    assert_eq!(single.summary(), left.summary());
}

#[test]
fn unreadable_file_contributes_nothing_but_counts() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone/Nope.java");

    let mut aggregator = Aggregator::new();
    aggregator.ingest(analyse_file(&missing));
    let summary = aggregator.summary();
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.total_patterns, 0);
    assert_eq!(aggregator.failures().len(), 1);
}

#[test]
fn non_utf8_content_is_decoded_lossily() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Odd.java");
    let mut bytes = BALANCE_SOURCE.as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
    fs::write(&path, bytes).unwrap();

    match analyse_file(&path) {
        FileOutcome::Analysed { records, .. } => assert!(!records.is_empty()),
        FileOutcome::Unreadable { reason, .. } => panic!("unexpected failure: {reason}"),
    }
}

#[test]
fn project_scan_rolls_up_two_projects() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "proj-a/src/Cache.java", "store.put(k, v);\n");
    write(
        tmp.path(),
        "proj-b/src/Sorter.java",
        "Collections.sort(items);\nComparator.naturalOrder();\n",
    );
    write(tmp.path(), "proj-b/src/Readme.md", "no java here\n");

    let summary = scan_projects(tmp.path());
    assert_eq!(summary.total_projects, 2);
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.projects[0].project_id, "Project 1");
    assert_eq!(summary.projects[0].patterns["hash_map"], 1);
    assert_eq!(summary.projects[1].patterns["sorting"], 2);
    assert_eq!(summary.total_pattern_loc, 3);
}
