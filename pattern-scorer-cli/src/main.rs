use clap::Parser;
use pattern_scorer_core::{execute_scorer_flow, style, CoreCliArgs};

fn main() {
    let cli_args = CoreCliArgs::parse();
    if let Err(e) = execute_scorer_flow(cli_args) {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("pattern-scorer failed:").red().bold(),
            style(&e).red()
        );
        std::process::exit(1);
    }
}
