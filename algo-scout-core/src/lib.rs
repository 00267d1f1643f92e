// algo-scout-core/src/lib.rs

// declare modules
pub mod engine;
pub mod report;
pub mod scan;
pub mod walk;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result};
pub use clap::Parser;
pub use console::style;
pub use indicatif::{ProgressBar, ProgressStyle};

pub use crate::engine::{
    classify, count_lines, extract_methods, tag_context, Aggregator, ClassificationRecord,
    CorpusSummary, FileOutcome, IndustrySummary, ProjectTally,
};
pub use crate::scan::{analyse_corpus, analyse_file, scan_projects};

use clap::Subcommand;
use std::path::Path;

// argument parsing structs - shared by any front end that drives the core
#[derive(Parser, Debug, Clone)]
#[command(name = "algo-scout")]
#[command(about = "regex-signature classifier for algorithmic idioms in source corpora")]
pub struct CoreCliArgs {
    #[command(subcommand)]
    pub command: ScanCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScanCommand {
    /// classify method-level algorithmic patterns across a source tree
    Analyse {
        /// root directory to scan
        path: String,

        /// directory for json results
        #[arg(short, long, default_value = "results")]
        output: String,

        /// show per-file detail and read failures
        #[arg(short, long)]
        verbose: bool,
    },
    /// line-level pattern census across the project subdirectories of a root
    Projects {
        /// root directory whose immediate subdirectories are treated as projects
        path: String,

        /// directory for json results
        #[arg(short, long, default_value = "results")]
        output: String,

        /// show per-project detail
        #[arg(short, long)]
        verbose: bool,
    },
}

// the core scan-and-report logic, shared by the CLI front end
pub fn execute_scan_flow(args: CoreCliArgs) -> Result<()> {
    println!("{}", style("\nalgo-scout 🔍").cyan().bold());
    println!(
        "{}\n",
        style("regex-signature classifier for algorithmic idioms").dim()
    );

    match args.command {
        ScanCommand::Analyse {
            path,
            output,
            verbose,
        } => run_analysis(&path, &output, verbose),
        ScanCommand::Projects {
            path,
            output,
            verbose,
        } => run_project_scan(&path, &output, verbose),
    }
}

fn run_analysis(path: &str, output: &str, verbose: bool) -> Result<()> {
    let root = Path::new(path);
    if !root.is_dir() {
        println!(
            "{}\n",
            style(format!(
                "⚠️  directory not found: {path}, reporting an empty scan"
            ))
            .yellow()
            .bold()
        );
    }

    let files = walk::collect_analysis_files(root);
    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} files")
            .unwrap(),
    );

    let aggregator = scan::analyse_files(&files, Some(&progress));
    progress.finish_and_clear();

    if verbose {
        for (file, reason) in aggregator.failures() {
            println!("{}", style(format!("  skipped {file}: {reason}")).yellow());
        }
    }

    let summary = aggregator.summary();
    println!(
        "{}",
        style(format!(
            "✅ analysis complete: {} files processed, {} patterns found",
            summary.files_processed, summary.total_patterns
        ))
        .green()
        .bold()
    );

    let out_dir = Path::new(output);
    report::write_analysis_results(out_dir, aggregator.records(), &summary)
        .context("failed to persist analysis results")?;
    report::print_analysis_report(&summary, aggregator.records());

    println!(
        "\n{}",
        style(format!("✨ results saved to '{output}'")).green()
    );
    println!("   - patterns.json (detailed patterns)");
    println!("   - summary.json (statistics)");
    Ok(())
}

fn run_project_scan(path: &str, output: &str, verbose: bool) -> Result<()> {
    let root = Path::new(path);
    if !root.is_dir() {
        println!(
            "{}\n",
            style(format!(
                "⚠️  directory not found: {path}, reporting an empty scan"
            ))
            .yellow()
            .bold()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} scanning projects...")
            .unwrap(),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let summary = scan::scan_projects(root);
    spinner.finish_and_clear();

    println!(
        "{}",
        style(format!(
            "✅ scan complete: {} java files in {} projects",
            summary.total_files, summary.total_projects
        ))
        .green()
        .bold()
    );

    if verbose {
        for project in &summary.projects {
            println!(
                "   {}: {} files",
                project.project_id, project.total_files
            );
        }
    }

    let out_dir = Path::new(output);
    report::write_project_results(out_dir, &summary)
        .context("failed to persist project scan results")?;
    report::print_project_report(&summary);

    println!(
        "\n{}",
        style(format!("✨ results saved to '{output}/industry_scan'")).green()
    );
    Ok(())
}
