//! # checkout
//!
//! Command-line front end for the checkout pricing rules.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin (JSON) ──► checkout_core::request ──► calculator ──► stdout      │
//! │                          │                                              │
//! │                          └── ValidationError ──► stdout, exit 2        │
//! │                                                                         │
//! │  malformed JSON / bad config ──► stderr, exit 1                        │
//! │  logs (tracing) ──► stderr                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//! ```text
//! echo '{"items":[{"price":50,"quantity":2}]}' | checkout cart
//! echo '{"items":[{"price":1000,"quantity":1}],"options":{"discountCode":"WELCOME10"}}' \
//!     | checkout --format text order-total
//! checkout display-name --first "  John " --last Doe
//! echo '{"operation":"display_name","firstName":"Ada"}' | checkout run
//! ```

mod config;
mod output;

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use checkout_core::{
    CartRequest, CheckoutRequest, CheckoutResponse, DisplayNameRequest, OrderRequest,
    ValidationError,
};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::output::OutputFormat;

/// Exit status for input the calculators rejected.
const EXIT_VALIDATION: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "checkout", version, about = "Checkout pricing rules")]
struct Cli {
    #[arg(long, global = true, value_enum, help = "Output format (default: CHECKOUT_OUTPUT or json)")]
    format: Option<OutputFormat>,
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Order subtotal, discount, tax and total (rounded). Reads {"items", "options"} from stdin.
    OrderTotal,
    /// Cart totals with coupon and shipping (unrounded). Reads {"items", "options"} from stdin.
    Cart,
    /// Format a display name from first and last name.
    DisplayName {
        #[arg(long)]
        first: Option<String>,
        #[arg(long)]
        last: Option<String>,
    },
    /// Evaluate a request document tagged with "operation", read from stdin.
    Run,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);

    let format = cli.format.unwrap_or(config.output);
    let pretty = cli.pretty || config.pretty;
    debug!(?format, pretty, "Configuration loaded");

    let outcome = match cli.command {
        Commands::OrderTotal => {
            let document = read_document()?;
            let (items, options) = items_and_options(&document);
            OrderRequest::from_json(items, options)
                .and_then(|request| request.evaluate())
                .map(CheckoutResponse::OrderTotal)
        }
        Commands::Cart => {
            let document = read_document()?;
            let (items, options) = items_and_options(&document);
            CartRequest::from_json(items, options)
                .and_then(|request| request.evaluate())
                .map(CheckoutResponse::Cart)
        }
        Commands::DisplayName { first, last } => {
            let request = DisplayNameRequest {
                first_name: first,
                last_name: last,
            };
            Ok(CheckoutResponse::DisplayName {
                display_name: request.evaluate(),
            })
        }
        Commands::Run => {
            let input = read_stdin()?;
            match CheckoutRequest::parse(&input) {
                Ok(request) => request.evaluate(),
                Err(checkout_core::CheckoutError::Validation(err)) => Err(err),
                Err(err) => return Err(err).context("decoding request document"),
            }
        }
    };

    report(outcome, format, pretty)
}

/// Writes the outcome to stdout and picks the exit status.
fn report(
    outcome: Result<CheckoutResponse, ValidationError>,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<ExitCode> {
    match outcome {
        Ok(response) => {
            println!("{}", output::render(&response, format, pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            info!(kind = err.kind(), "Input rejected");
            println!("{}", output::render_error(&err, format, pretty)?);
            Ok(ExitCode::from(EXIT_VALIDATION))
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading request from stdin")?;
    Ok(input)
}

fn read_document() -> anyhow::Result<Value> {
    let input = read_stdin()?;
    serde_json::from_str(&input).context("parsing request JSON")
}

/// Splits `{"items": ..., "options": ...}`; a missing `items` reads as null.
fn items_and_options(document: &Value) -> (&Value, Option<&Value>) {
    (
        document.get("items").unwrap_or(&Value::Null),
        document.get("options"),
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout_core=debug` - Show computed figures only
/// - Default: `CHECKOUT_LOG`, else `warn`
///
/// Logs go to stderr; stdout carries only results.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
