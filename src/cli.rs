// Watermark CLI binary

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use watermark_lib::constants::{DEFAULT_FONT_PATH, DEFAULT_LOG_FILTER, EXIT_FAILURE};
use watermark_lib::{apply_watermark, exit_code, WatermarkError, WatermarkJob};

#[derive(Parser, Debug)]
#[command(name = "watermark")]
#[command(about = "Burn a fixed text watermark into the bottom-right corner of a video", long_about = None)]
#[command(version)]
struct Cli {
    /// Source video
    #[arg(value_name = "INPUT_VIDEO")]
    input: PathBuf,

    /// Destination video (overwritten if present)
    #[arg(value_name = "OUTPUT_VIDEO")]
    output: PathBuf,

    /// Font file for the overlay text
    #[arg(value_name = "FONT_FILE", long_help = format!("Font file for the overlay text [default: {}]", DEFAULT_FONT_PATH))]
    font: Option<PathBuf>,
}

fn main() {
    init_logging();

    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<WatermarkError>() {
                // clap already rendered the message and usage line
                Some(WatermarkError::Usage(msg)) => eprint!("{}", msg),
                _ => eprintln!("Error: {:#}", err),
            }
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(0);
        }
        Err(e) => return Err(WatermarkError::from(e).into()),
    };

    let job = WatermarkJob {
        input: cli.input,
        output: cli.output,
        font: cli.font,
    };

    let status = apply_watermark(&job)?;

    Ok(exit_code(status))
}
