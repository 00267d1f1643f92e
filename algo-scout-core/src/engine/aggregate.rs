// corpus-wide aggregation of classification results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::classify::ClassificationRecord;

const HIGH_CONFIDENCE: f64 = 0.7;
const MEDIUM_CONFIDENCE: f64 = 0.5;
const TOP_PATTERNS: usize = 10;

/// outcome of analysing one file: an explicit value, never an exception path
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// file was read and classified; zero records is a valid result
    Analysed {
        path: String,
        records: Vec<ClassificationRecord>,
    },
    /// file could not be read; it still counts as processed
    Unreadable { path: String, reason: String },
}

/// counts per confidence band
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// totals derived from a complete scan, rebuilt from scratch every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub total_patterns: usize,
    pub files_processed: usize,
    pub pattern_distribution: BTreeMap<String, usize>,
    pub business_context_distribution: BTreeMap<String, usize>,
    pub confidence_distribution: ConfidenceBands,
    pub top_patterns_by_confidence: Vec<ClassificationRecord>,
}

/// order-independent accumulator for file outcomes
///
/// the only input-order-sensitive output is the top-pattern tie-break,
/// which is first-seen-wins for a fixed ingest order.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<ClassificationRecord>,
    files_processed: usize,
    failures: Vec<(String, String)>,
}

impl Aggregator {
    pub fn new() -> Aggregator {
        Aggregator::default()
    }

    /// fold one file outcome into the running totals
    pub fn ingest(&mut self, outcome: FileOutcome) {
        self.files_processed += 1;
        match outcome {
            FileOutcome::Analysed { records, .. } => self.records.extend(records),
            FileOutcome::Unreadable { path, reason } => self.failures.push((path, reason)),
        }
    }

    /// combine a partial aggregator produced elsewhere into this one
    pub fn merge(&mut self, other: Aggregator) {
        self.files_processed += other.files_processed;
        self.records.extend(other.records);
        self.failures.extend(other.failures);
    }

    /// every classification record ingested so far, in arrival order
    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    /// files that could not be read, with the recorded reason
    pub fn failures(&self) -> &[(String, String)] {
        &self.failures
    }

    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    /// finalize the corpus summary from everything ingested so far
    pub fn summary(&self) -> CorpusSummary {
        let mut pattern_distribution = BTreeMap::new();
        let mut business_context_distribution = BTreeMap::new();
        let mut confidence_distribution = ConfidenceBands::default();

        for record in &self.records {
            *pattern_distribution
                .entry(record.pattern_type.clone())
                .or_insert(0) += 1;
            *business_context_distribution
                .entry(record.business_context.clone())
                .or_insert(0) += 1;
            if record.confidence > HIGH_CONFIDENCE {
                confidence_distribution.high += 1;
            } else if record.confidence >= MEDIUM_CONFIDENCE {
                confidence_distribution.medium += 1;
            } else {
                confidence_distribution.low += 1;
            }
        }

        // stable sort: equal confidences keep arrival order, first seen wins
        let mut top = self.records.clone();
        top.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top.truncate(TOP_PATTERNS);

        CorpusSummary {
            total_patterns: self.records.len(),
            files_processed: self.files_processed,
            pattern_distribution,
            business_context_distribution,
            confidence_distribution,
            top_patterns_by_confidence: top,
        }
    }
}
