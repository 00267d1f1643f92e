// engine module - organises the classification core into submodules

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod context;
pub mod extract;
pub mod lines;
pub mod projects;

// re-export key public items for convenient access
pub use aggregate::{Aggregator, ConfidenceBands, CorpusSummary, FileOutcome};
pub use catalog::{reference_problems, Catalog, Category, METHOD_CATALOG, SCANNER_CATALOG};
pub use classify::{classify, ClassificationRecord};
pub use context::tag_context;
pub use extract::{extract_methods, MethodRecord};
pub use lines::{count_lines, LineTally};
pub use projects::{IndustrySummary, ProjectTally};
