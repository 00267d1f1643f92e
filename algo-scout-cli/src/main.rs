use algo_scout_core::{execute_scan_flow, style, CoreCliArgs, Parser};

fn main() {
    let args = CoreCliArgs::parse();
    if let Err(e) = execute_scan_flow(args) {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("algo-scout failed:").red().bold(),
            style(&e).red()
        );
        std::process::exit(1);
    }
}
