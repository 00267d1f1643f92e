// method extraction - recovers method bodies from free-form source text

use lazy_static::lazy_static;
use regex::Regex;

// bodies at or below this trimmed length are getters/forwarders, not algorithms
const TRIVIAL_BODY_LEN: usize = 20;

lazy_static! {
    // optional visibility, optional static, return type, name, params, then a
    // brace-delimited body tolerating exactly one level of nested brace pairs.
    // deeper nesting mis-bounds or drops the method; that limitation is kept
    // deliberately so results stay comparable across runs.
    static ref METHOD_DECL: Regex = Regex::new(
        r"(public|private|protected)?\s*(static)?\s*\w+\s+(\w+)\s*\([^)]*\)\s*\{([^{}]*(?:\{[^{}]*\}[^{}]*)*)\}"
    )
    .unwrap();
}

/// a method name paired with its extracted body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub name: String,
    pub body: String,
}

/// extract non-trivial method bodies from source text, in declaration order
///
/// malformed or non-source input simply yields no records. a method name seen
/// twice keeps its first position but takes the later body.
pub fn extract_methods(source: &str) -> Vec<MethodRecord> {
    let mut methods: Vec<MethodRecord> = Vec::new();

    for caps in METHOD_DECL.captures_iter(source) {
        let name = &caps[3];
        let body = &caps[4];
        if body.trim().chars().count() <= TRIVIAL_BODY_LEN {
            continue;
        }
        match methods.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.body = body.to_string(),
            None => methods.push(MethodRecord {
                name: name.to_string(),
                body: body.to_string(),
            }),
        }
    }

    methods
}
