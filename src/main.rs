//! Quboo score reporter CLI.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quboo::cli::Cli;
use quboo::client::HttpTransport;
use quboo::config::Config;
use quboo::error::QubooError;
use quboo::output;
use quboo::scm::GitScm;
use quboo::score::ScoreEvent;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not usage errors.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let filter =
        EnvFilter::try_from_env("QUBOO_LOG").unwrap_or_else(|_| EnvFilter::new("quboo=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> quboo::error::Result<()> {
    let config = Config::from_env()?;
    let event = ScoreEvent::new(&cli.type_or_score, &cli.description);
    let transport = HttpTransport::new()?;

    let receipt = quboo::run(&config, &event, &GitScm, &transport)?;
    output::success(&format!("score added, response: {}", receipt.body));
    Ok(())
}

fn suggestion(e: &QubooError) -> Option<&'static str> {
    match e {
        QubooError::MissingCredentials => {
            Some("find your keys in the Quboo admin page, under Settings")
        }
        QubooError::Transport(_) => Some("check your connectivity and the server address"),
        _ => None,
    }
}
