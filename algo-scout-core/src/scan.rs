// scan drivers - feed files through the engine and accumulate results

use std::fs;
use std::path::Path;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::engine::{
    classify, count_lines, extract_methods, Aggregator, FileOutcome, IndustrySummary, ProjectTally,
};
use crate::walk;

/// classify every method of one source file
///
/// read failures become an explicit outcome rather than an error; arbitrary
/// byte content is decoded lossily so encoding damage never aborts a scan.
pub fn analyse_file(path: &Path) -> FileOutcome {
    let display = path.to_string_lossy().into_owned();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return FileOutcome::Unreadable {
                path: display,
                reason: err.to_string(),
            }
        }
    };
    let content = String::from_utf8_lossy(&bytes);

    let mut records = Vec::new();
    for method in extract_methods(&content) {
        records.extend(classify(&method.name, &method.body, &display));
    }
    FileOutcome::Analysed {
        path: display,
        records,
    }
}

/// analyse a batch of files in parallel and fold the outcomes in walk order
///
/// files are independent, so classification fans out across the rayon pool;
/// the fold into the aggregator stays single-threaded, which keeps the
/// top-pattern tie-break deterministic for a fixed file list.
pub fn analyse_files(files: &[std::path::PathBuf], progress: Option<&ProgressBar>) -> Aggregator {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let outcome = analyse_file(path);
            if let Some(bar) = progress {
                bar.inc(1);
            }
            outcome
        })
        .collect();

    let mut aggregator = Aggregator::new();
    for outcome in outcomes {
        aggregator.ingest(outcome);
    }
    aggregator
}

/// walk a corpus root and classify everything under it
pub fn analyse_corpus(root: &Path) -> Aggregator {
    let files = walk::collect_analysis_files(root);
    analyse_files(&files, None)
}

/// line-level census over each immediate subdirectory of root
///
/// subdirectories become "Project 1", "Project 2", ... in sorted name order.
/// a missing root yields the all-zero summary.
pub fn scan_projects(root: &Path) -> IndustrySummary {
    let mut summary = IndustrySummary::new();

    for (index, project_dir) in walk::project_roots(root).iter().enumerate() {
        let mut tally = ProjectTally::new(format!("Project {}", index + 1));
        for file in walk::collect_project_files(project_dir) {
            tally.total_files += 1;
            if let Ok(bytes) = fs::read(&file) {
                let content = String::from_utf8_lossy(&bytes);
                tally.absorb(&count_lines(&content));
            }
        }
        summary.absorb_project(tally);
    }

    summary
}
