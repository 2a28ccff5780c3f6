//! Writes process-tagged lines to the system console from the command line.

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tvinject_console::ConsoleWriter;
use tvinject_console::device::CONSOLE_PATH;

/// Writes one line, tagged with this executable's name, to the system console.
///
/// Like the library, failures are silent unless `--strict` is passed.
#[derive(Parser, Debug)]
#[command(version)]
struct Arguments {
    /// The console device node to write to.
    #[arg(long, env = "TVINJECT_CONSOLE_DEVICE", default_value = CONSOLE_PATH)]
    device: PathBuf,

    /// Fail when the line could not be written instead of dropping it.
    #[arg(long)]
    strict: bool,

    /// The message, words are joined with single spaces.
    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> eyre::Result<()> {
    let arguments = Arguments::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .with_env_var("TVCONSOLE_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish(),
    )?;

    run(arguments)
}

fn run(arguments: Arguments) -> eyre::Result<()> {
    let console = ConsoleWriter::system().with_device(arguments.device);
    let message = arguments.message.join(" ");

    tracing::debug!(device = %console.device().display(), "writing console line");
    match console.try_println(format_args!("{message}")) {
        Ok(()) => Ok(()),
        Err(error) if arguments.strict => {
            Err(error).wrap_err_with(|| format!("writing to {}", console.device().display()))
        }
        Err(error) => {
            tracing::debug!(%error, "console line dropped");
            Ok(())
        }
    }
}
