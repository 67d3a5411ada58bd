use anyhow::Context;
use clap::Parser;
use pd_service_sync::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(&cli) {
        log::error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = pd_service_sync::run_sync(cli).context("Service sync aborted")?;

    if report.dry_run && !report.candidates.is_empty() {
        log::info!(
            "Dry run: {} services left in place, re-run without --dry-run to delete them",
            report.candidates.len()
        );
    }
    Ok(())
}
