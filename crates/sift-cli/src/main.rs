use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod cli;
mod error;
mod output;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

/// The line printed on failure. Each error message already carries its
/// cause, so only the outermost message is shown.
fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {}", err)
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rendered = cli::execute(&cli)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end_matches('\n'));
    }
    Ok(())
}

/// Initialize tracing with output to stderr so stdout only carries results.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sift=debug,sift_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
