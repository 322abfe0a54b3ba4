use anyhow::{Context, Result};
use clap::Parser;
use ics2dates_core::convert_file;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Convert an .ics calendar into a sorted list of event start dates
#[derive(Parser, Default)]
#[command(name = "ics2dates")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// The .ics file to read, then the file to write the dates to.
    /// Every argument counts, anything but exactly two prints the usage line.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    init_logging()?;

    // Malformed arguments get the same treatment as a wrong count
    let cli = Cli::try_parse().unwrap_or_default();

    let [ics_file, output_file] = match <[PathBuf; 2]>::try_from(cli.paths) {
        Ok(paths) => paths,
        Err(_) => {
            println!("{}", usage(&program_name()));
            return Ok(());
        }
    };

    let report = convert_file(&ics_file, &output_file).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            ics_file.display(),
            output_file.display()
        )
    })?;

    match (report.first, report.last) {
        (Some(first), Some(last)) => info!(
            dates = report.dates,
            %first,
            %last,
            "wrote {}",
            output_file.display()
        ),
        _ => info!("no events found, wrote empty {}", output_file.display()),
    }

    Ok(())
}

/// Logs go to stderr, stdout is reserved for the usage line.
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    Ok(())
}

/// argv[0] as invoked
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ics2dates".to_string())
}

fn usage(program: &str) -> String {
    format!("USAGE: {} ics_file output_file", program)
}
