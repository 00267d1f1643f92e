// signature catalog - data-driven registry of pattern categories

use lazy_static::lazy_static;
use regex::Regex;

/// one pattern category: a stable identifier plus its compiled signatures
pub struct Category {
    pub name: &'static str,
    pub signatures: Vec<Regex>,
}

/// an ordered, immutable set of categories compiled once per run
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    fn compile(entries: &[(&'static str, &[&str])], case_insensitive: bool) -> Catalog {
        let categories = entries
            .iter()
            .map(|&(name, patterns)| Category {
                name,
                signatures: patterns
                    .iter()
                    .map(|p| {
                        let source = if case_insensitive {
                            format!("(?i){p}")
                        } else {
                            (*p).to_string()
                        };
                        Regex::new(&source).unwrap()
                    })
                    .collect(),
            })
            .collect();
        Catalog { categories }
    }

    /// categories in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

// signatures for method-level classification, matched case-insensitively
const METHOD_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "array_manipulation",
        &[
            r"for\s*\([^)]*\s*:\s*\w+\[\]",
            r"\w+\[\s*\w+\s*\]\s*=",
            r"Arrays\.(sort|binarySearch|copyOf)",
            r"new\s+\w+\[\s*\w*\s*\]",
        ],
    ),
    (
        "string_processing",
        &[
            r"String\w*\.(substring|indexOf|replace|split|matches)",
            r"StringBuilder\s*\w+\s*=\s*new\s*StringBuilder",
            r"Pattern\.(compile|matches)",
            r"\.toString\(\)",
        ],
    ),
    (
        "hash_map_operations",
        &[
            r"HashMap<[^>]+>\s*\w+\s*=\s*new\s*HashMap",
            r"Map<[^>]+>\s*\w+",
            r"\w+\.put\s*\(",
            r"\w+\.get\s*\(",
            r"\w+\.containsKey\s*\(",
        ],
    ),
    (
        "mathematical_computation",
        &[
            r"Math\.(max|min|abs|pow|sqrt)",
            r"BigDecimal\s+\w+",
            r"Random\s+\w+\s*=\s*new",
            r"calculate\w*\s*\(",
            r"compute\w*\s*\(",
        ],
    ),
    (
        "sorting_searching",
        &[
            r"Collections\.sort\s*\(",
            r"Arrays\.sort\s*\(",
            r"Comparator<[^>]+>",
            r"\.stream\(\).*\.sorted\(",
            r"binarySearch",
        ],
    ),
    (
        "validation_logic",
        &[
            r"validate\w*\s*\(",
            r"if\s*\([^)]*null[^)]*\)",
            r"throw\s+new\s+\w*Exception",
            r"assert\w*\s*\(",
        ],
    ),
];

// coarser signatures for the line-level census, matched case-sensitively
const SCANNER_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "hash_map",
        &[
            r"HashMap<[^>]+>\s*\w+\s*=\s*new\s*HashMap",
            r"Map<[^>]+>\s*\w+",
            r"\w+\.put\s*\(",
            r"\w+\.get\s*\(",
            r"\w+\.containsKey\s*\(",
        ],
    ),
    (
        "sorting",
        &[
            r"Collections\.sort\s*\(",
            r"Arrays\.sort\s*\(",
            r"\.stream\(\).*\.sorted\(",
            r"Comparator\.",
        ],
    ),
    (
        "string_ops",
        &[
            r"String\w*\.(substring|indexOf|replace|split|matches)",
            r"StringBuilder",
            r"Pattern\.compile",
        ],
    ),
    (
        "tree_graph",
        &[r"class\s+\w*Node", r"class\s+\w*Tree", r"traverse\w*\("],
    ),
];

// illustrative reference problems per category, reporting only
const REFERENCE_PROBLEMS: &[(&str, &[&str])] = &[
    (
        "array_manipulation",
        &["Two Sum", "Best Time to Buy and Sell Stock", "Rotate Array"],
    ),
    (
        "string_processing",
        &[
            "Valid Anagram",
            "Longest Substring Without Repeating Characters",
            "Valid Parentheses",
        ],
    ),
    (
        "hash_map_operations",
        &["Two Sum", "Group Anagrams", "Top K Frequent Elements"],
    ),
    (
        "mathematical_computation",
        &["Pow(x, n)", "Sqrt(x)", "Happy Number"],
    ),
    (
        "sorting_searching",
        &[
            "Merge Intervals",
            "Search in Rotated Sorted Array",
            "Kth Largest Element",
        ],
    ),
    (
        "validation_logic",
        &["Valid Parentheses", "Valid Sudoku", "Valid Binary Search Tree"],
    ),
];

lazy_static! {
    /// catalog used by the method-level classifier
    pub static ref METHOD_CATALOG: Catalog = Catalog::compile(METHOD_SIGNATURES, true);

    /// catalog used by the line-level census
    pub static ref SCANNER_CATALOG: Catalog = Catalog::compile(SCANNER_SIGNATURES, false);
}

/// reference problems illustrating a category, empty for unknown names
pub fn reference_problems(category: &str) -> &'static [&'static str] {
    REFERENCE_PROBLEMS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, problems)| *problems)
        .unwrap_or(&[])
}
