use crate::commands::{run_fields, run_services, run_submit, SubmitArgs};
use clap::{Parser, Subcommand};
use doc_intake::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "doc-intake",
    about = "Attach documents to a service's slots and submit them for validation",
    version
)]
struct Cli {
    /// Load services from a JSON catalog instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the services a client can pick
    Services,
    /// Show the document and extra fields of one service
    Fields {
        /// Service identifier, e.g. trabalhista
        service: String,
    },
    /// Attach files and submit them to the validator once
    Submit(SubmitArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Services => run_services(cli.catalog),
        Command::Fields { service } => run_fields(cli.catalog, &service),
        Command::Submit(args) => run_submit(cli.catalog, args).await,
    }
}

/// Parse `KEY=VALUE` pairs such as `trab-identidade=./rg.jpg`.
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field id in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
