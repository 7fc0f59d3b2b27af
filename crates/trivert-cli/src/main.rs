use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivert::{convert_file, ConvertOptions};

#[derive(Debug, Parser)]
#[command(
    name = "trivert",
    version,
    about = "Convert data files between JSON, YAML and XML",
    long_about = "Convert data files between JSON, YAML and XML.\n\n\
                  Formats are chosen by file suffix: .json, .yaml/.yml, .xml. \
                  XML is read and written with one element per key under a <root> element; \
                  attributes are ignored and repeated sibling tags keep only the last one."
)]
struct Args {
    /// File to read
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,
    /// File to write
    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::debug!(input = %args.input.display(), output = %args.output.display(), "starting conversion");
    convert_file(&args.input, &args.output, &ConvertOptions::default())?;
    Ok(())
}
