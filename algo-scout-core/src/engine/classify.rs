// method-level classification against the signature catalog

use serde::{Deserialize, Serialize};

use super::catalog::{reference_problems, METHOD_CATALOG};
use super::context::tag_context;

// saturating linear confidence: one signature -> 0.5, two -> 0.7, three+ -> 1.0.
// these constants are load-bearing: confidence bands assume them.
const CONFIDENCE_BASE: f64 = 0.3;
const CONFIDENCE_STEP: f64 = 0.2;
const CONFIDENCE_CEILING: f64 = 1.0;

const SNIPPET_LIMIT: usize = 200;
const MAX_REFERENCES: usize = 3;

/// one classified (method, category) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub file: String,
    pub method: String,
    pub pattern_type: String,
    pub confidence: f64,
    pub matches: usize,
    pub business_context: String,
    pub external_references: Vec<String>,
    pub code_snippet: String,
}

/// classify one method body, emitting a record per matching category
///
/// categories are evaluated in catalog order; a category with no matching
/// signature emits nothing. pure over the body, path and static catalog.
pub fn classify(method_name: &str, body: &str, path: &str) -> Vec<ClassificationRecord> {
    let mut records = Vec::new();

    for category in METHOD_CATALOG.categories() {
        let matches = category
            .signatures
            .iter()
            .filter(|signature| signature.is_match(body))
            .count();
        if matches == 0 {
            continue;
        }

        let confidence =
            (CONFIDENCE_BASE + matches as f64 * CONFIDENCE_STEP).min(CONFIDENCE_CEILING);

        records.push(ClassificationRecord {
            file: path.to_string(),
            method: method_name.to_string(),
            pattern_type: category.name.to_string(),
            confidence,
            matches,
            business_context: tag_context(path),
            external_references: reference_problems(category.name)
                .iter()
                .take(MAX_REFERENCES)
                .map(|s| s.to_string())
                .collect(),
            code_snippet: snippet(body),
        });
    }

    records
}

// truncate at the snippet limit with an ellipsis marker, char-boundary safe
fn snippet(body: &str) -> String {
    if body.chars().count() > SNIPPET_LIMIT {
        let truncated: String = body.chars().take(SNIPPET_LIMIT).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}
