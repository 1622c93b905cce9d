use anyhow::Result;
use clap::Parser;
use resume_parser::{ParserConfig, run};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse a resume from a PDF file and save the data in JSON format.",
    long_about = None
)]
struct Args {
    /// Path to the resume PDF file.
    file_path: PathBuf,

    /// Path to save the JSON output.
    output_file: PathBuf,

    /// Do not print the summary to the terminal
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Read settings from this TOML file instead of resume-parser.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = match args.config {
        Some(ref path) => ParserConfig::load_from_file(path)?,
        None => ParserConfig::load_default()?.unwrap_or_default(),
    };

    // 2. Override with CLI args
    config.input = args.file_path;
    config.output = args.output_file;
    if args.quiet {
        config.print_summary = false;
    }
    if args.verbose {
        config.verbose = true;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // A missing input is already logged and exits cleanly
    run(&config)?;
    Ok(())
}
