// line-level pattern census over whole files

use std::collections::BTreeMap;

use super::catalog::SCANNER_CATALOG;

/// per-file census result: raw match totals and pattern-bearing line count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTally {
    /// total non-overlapping signature matches per category, over the whole text
    pub matches: BTreeMap<String, usize>,
    /// lines matching at least one signature of any category, counted once each
    pub pattern_loc: usize,
}

/// run both census measurements over one file's content
pub fn count_lines(content: &str) -> LineTally {
    let mut matches = BTreeMap::new();
    for category in SCANNER_CATALOG.categories() {
        let total: usize = category
            .signatures
            .iter()
            .map(|signature| signature.find_iter(content).count())
            .sum();
        matches.insert(category.name.to_string(), total);
    }

    // a line counts once no matter how many categories or signatures hit it
    let pattern_loc = content
        .lines()
        .filter(|line| {
            SCANNER_CATALOG
                .categories()
                .iter()
                .any(|category| category.signatures.iter().any(|s| s.is_match(line)))
        })
        .count();

    LineTally {
        matches,
        pattern_loc,
    }
}
