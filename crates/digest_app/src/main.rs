mod cli;
mod logging;
mod progress;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use digest_engine::{DigestRunner, RunSummary};
use digest_logging::{engine_error, level_for_verbosity};

use cli::Cli;
use logging::LogDestination;
use progress::ConsoleProgress;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(
        LogDestination::from_log_file(cli.log_file.clone()),
        level_for_verbosity(cli.verbose),
    );

    match run(&cli) {
        Ok(summary) => {
            println!(
                "Wrote {} questions ({} skipped) to {}",
                summary.written,
                summary.skipped,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let file_settings = match &cli.config {
        Some(path) => settings::load(path)?,
        None => settings::FileSettings::default(),
    };
    let config = settings::resolve(cli, file_settings);
    let runner = DigestRunner::new(config).context("invalid configuration")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let summary = runtime
        .block_on(runner.run(&ConsoleProgress))
        .context("digest run failed")?;
    Ok(summary)
}
