use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paypal_confirm::application::confirmer::Confirmer;
use paypal_confirm::config::ClientConfig;
use paypal_confirm::domain::request::Payload;
use paypal_confirm::interfaces::csv::details_writer::DetailsWriter;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Use the PayPal sandbox endpoint
    #[arg(long, global = true)]
    sandbox: bool,

    /// Print the result as JSON instead of CSV
    #[arg(long, global = true)]
    json: bool,

    /// Override the live endpoint URL
    #[arg(long, global = true)]
    live_url: Option<String>,

    /// Override the sandbox endpoint URL
    #[arg(long, global = true)]
    sandbox_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Confirm a transaction via Payment Data Transfer
    Pdt {
        /// PayPal transaction id
        transaction_id: String,

        /// Merchant identity token
        #[arg(long, env = "PAYPAL_IDENTITY_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Verify an Instant Payment Notification
    Ipn {
        /// File holding the raw query string or a JSON object. Reads stdin if omitted.
        payload_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.live_url {
        config = config.with_live_url(url);
    }
    if let Some(url) = cli.sandbox_url {
        config = config.with_sandbox_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    let confirmer = Confirmer::from_config(config).into_diagnostic()?;

    let result = match cli.command {
        Command::Pdt {
            transaction_id,
            token,
        } => confirmer
            .confirm_via_lookup(&transaction_id, &token, cli.sandbox)
            .await
            .into_diagnostic()?,
        Command::Ipn { payload_file } => {
            let payload = read_payload(payload_file)?;
            confirmer
                .confirm_via_notification(payload, cli.sandbox)
                .await
                .into_diagnostic()?
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
        println!("{json}");
    } else {
        let stdout = io::stdout();
        let mut writer = DetailsWriter::new(stdout.lock());
        writer.write_result(&result).into_diagnostic()?;
    }

    Ok(())
}

/// Loads an IPN payload. A body starting with `{` is a JSON object; anything
/// else is the raw query string.
fn read_payload(path: Option<PathBuf>) -> Result<Payload> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).into_diagnostic()?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).into_diagnostic()?;
            raw
        }
    };

    let raw = raw.trim_end_matches(['\r', '\n']);
    if raw.trim_start().starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(raw).into_diagnostic()?;
        Payload::try_from(value).into_diagnostic()
    } else {
        Ok(Payload::from(raw))
    }
}
