// business context tagging from file paths

// fixed vocabulary, in reporting order
const BUSINESS_VOCABULARY: &[&str] = &[
    "invoice",
    "payment",
    "balance",
    "account",
    "transaction",
    "settlement",
    "card",
    "loan",
    "savings",
    "transfer",
    "financial",
];

/// label a file path with the business vocabulary terms it contains
///
/// terms are matched case-insensitively as substrings and joined in
/// vocabulary order; a path matching none is labelled "general".
pub fn tag_context(path: &str) -> String {
    let path_lower = path.to_lowercase();
    let contexts: Vec<&str> = BUSINESS_VOCABULARY
        .iter()
        .copied()
        .filter(|term| path_lower.contains(term))
        .collect();

    if contexts.is_empty() {
        "general".to_string()
    } else {
        contexts.join(", ")
    }
}
