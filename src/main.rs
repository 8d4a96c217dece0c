use anyhow::Context;
use clap::Parser;
use site_image_optimizer::cli::Args;
use site_image_optimizer::{error, logger, run_batch, BatchConfig, OptimizeOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = OptimizeOptions::new(
        Some(args.width),
        args.height,
        Some(args.quality),
        Some(args.format),
    )
    .context("Invalid optimization preset")?;

    let config = BatchConfig::new(&args.input, &args.output, options)
        .with_public_prefix(args.public_prefix)
        .with_recursive(args.recursive);

    run_batch(&config)
        .with_context(|| format!("Batch aborted for {}", args.input.display()))?;

    Ok(())
}
