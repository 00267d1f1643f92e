// result persistence and console reporting

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::engine::{ClassificationRecord, CorpusSummary, IndustrySummary};

const TOP_CONTEXTS: usize = 5;
const TOP_REFERENCES: usize = 10;

/// write detailed records and the corpus summary under the output directory
pub fn write_analysis_results(
    out_dir: &Path,
    records: &[ClassificationRecord],
    summary: &CorpusSummary,
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let patterns = serde_json::to_string_pretty(records)?;
    fs::write(out_dir.join("patterns.json"), patterns)
        .with_context(|| format!("failed to write {}", out_dir.join("patterns.json").display()))?;

    let summary_json = serde_json::to_string_pretty(summary)?;
    fs::write(out_dir.join("summary.json"), summary_json)
        .with_context(|| format!("failed to write {}", out_dir.join("summary.json").display()))?;

    Ok(())
}

/// write the project census roll-up under `<out_dir>/industry_scan`
pub fn write_project_results(out_dir: &Path, summary: &IndustrySummary) -> Result<()> {
    let scan_dir = out_dir.join("industry_scan");
    fs::create_dir_all(&scan_dir)
        .with_context(|| format!("failed to create {}", scan_dir.display()))?;

    let summary_json = serde_json::to_string_pretty(summary)?;
    fs::write(scan_dir.join("summary.json"), summary_json)
        .with_context(|| format!("failed to write {}", scan_dir.join("summary.json").display()))?;

    Ok(())
}

/// print the corpus summary the way the scan reports always have
pub fn print_analysis_report(summary: &CorpusSummary, records: &[ClassificationRecord]) {
    println!("\n{}", style("📈 pattern distribution:").cyan().bold());
    for (category, count) in sorted_by_count(&summary.pattern_distribution) {
        println!("   {category}: {count}");
    }

    println!("\n{}", style("🏢 business context distribution:").cyan().bold());
    for (context, count) in sorted_by_count(&summary.business_context_distribution)
        .into_iter()
        .take(TOP_CONTEXTS)
    {
        println!("   {context}: {count}");
    }

    println!("\n{}", style("🎯 confidence distribution:").cyan().bold());
    let bands = &summary.confidence_distribution;
    println!("   high: {}", bands.high);
    println!("   medium: {}", bands.medium);
    println!("   low: {}", bands.low);

    let references = collect_references(records);
    if !references.is_empty() {
        println!("\n{}", style("🔗 reference problems encountered:").cyan().bold());
        for problem in references {
            println!("   - {problem}");
        }
    }
}

/// print the project census totals
pub fn print_project_report(summary: &IndustrySummary) {
    println!("\n{}", style("📊 project census:").cyan().bold());
    for project in &summary.projects {
        println!(
            "   {}: {} files, {} pattern-bearing lines",
            project.project_id, project.total_files, project.pattern_loc
        );
    }
    println!("\n{}", style("totals by category:").cyan().bold());
    for (category, count) in &summary.total_patterns {
        println!("   {category}: {count}");
    }
}

// descending by count; equal counts keep map (alphabetical) order
fn sorted_by_count(distribution: &std::collections::BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = distribution
        .iter()
        .map(|(name, &count)| (name.as_str(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

// distinct reference problems in first-seen order, capped for readability
fn collect_references(records: &[ClassificationRecord]) -> Vec<&str> {
    let mut seen = Vec::new();
    for record in records {
        for reference in &record.external_references {
            if !seen.contains(&reference.as_str()) {
                seen.push(reference.as_str());
                if seen.len() == TOP_REFERENCES {
                    return seen;
                }
            }
        }
    }
    seen
}
