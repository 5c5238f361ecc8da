mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use hexsticker::{HexstickerResult, StickerOptions, TracingDiagnostics, create_hexsticker};
use tracing::Level;

use crate::cli::Cli;
use crate::report::report_error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber the diagnostics sink writes to.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> HexstickerResult<()> {
    // Guaranteed by clap unless --version was given, which returns earlier.
    let Some(image) = &cli.image else {
        return Ok(());
    };
    let options = StickerOptions::from(cli);
    let output = create_hexsticker(image, &options, &TracingDiagnostics)?;
    tracing::debug!("Sticker written to {}", output.display());
    Ok(())
}
