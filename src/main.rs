//! # Bonnetje CLI
//!
//! Command-line interface for assembling and printing receipt documents.
//!
//! ## Usage
//!
//! ```bash
//! # Print a receipt from an order snapshot to stdout
//! bonnetje print --order order.json
//!
//! # Customer copy, with a store profile
//! bonnetje print --order order.json --profile store.json --copy
//!
//! # Payment request slip with a QR payload
//! bonnetje request --order order.json --amount 12.50 --tid TX-1 --qr pay:now
//!
//! # Built-in demo, no files needed
//! bonnetje sample
//! ```

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bonnetje::lookup::{NoTranslations, StaticSettings};
use bonnetje::order::Order;
use bonnetje::{Connector, DocumentContext, PrintError, PrinterSession, StoreProfile, demo};

/// Bonnetje - receipt layout and printing utility
#[derive(Parser, Debug)]
#[command(name = "bonnetje")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a sales receipt from an order snapshot
    Print {
        /// Order snapshot file (JSON)
        #[arg(long)]
        order: PathBuf,

        /// Store profile file (JSON); built-in demo profile if omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the customer-copy variant
        #[arg(long)]
        copy: bool,

        /// Output device: "stdout", "-" or a file path
        #[arg(long, default_value = "stdout")]
        device: String,
    },

    /// Print a payment-request slip
    Request {
        /// Order snapshot file (JSON, supplies the footer timestamp)
        #[arg(long)]
        order: PathBuf,

        /// Store profile file (JSON); built-in demo profile if omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Requested amount
        #[arg(long)]
        amount: f64,

        /// Transaction id shown in the slip header
        #[arg(long)]
        tid: String,

        /// QR payload; omit to print without a code
        #[arg(long)]
        qr: Option<String>,

        /// Output device: "stdout", "-" or a file path
        #[arg(long, default_value = "stdout")]
        device: String,
    },

    /// Print the built-in demo receipt
    Sample {
        /// Print the customer-copy variant
        #[arg(long)]
        copy: bool,

        /// Output device: "stdout", "-" or a file path
        #[arg(long, default_value = "stdout")]
        device: String,
    },
}

/// Store profile file: identity, currency, optional logo and the settings
/// the receipt footer reads.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    store: StoreProfile,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    settings: HashMap<String, String>,
}

fn default_currency() -> String {
    "€".to_string()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrintError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            order,
            profile,
            copy,
            device,
        } => {
            let order = load_order(&order)?;
            let (ctx, settings) = build_context(profile.as_deref())?;
            let ctx = ctx.order(order);
            let mut session = PrinterSession::open(Connector::from_descriptor(&device)?)?;
            session.print_receipt(&ctx, &NoTranslations, &settings, copy)?;
        }

        Commands::Request {
            order,
            profile,
            amount,
            tid,
            qr,
            device,
        } => {
            let order = load_order(&order)?;
            let (ctx, _settings) = build_context(profile.as_deref())?;
            let mut ctx = ctx.order(order).request_amount(amount).transaction_id(tid);
            if let Some(payload) = qr {
                ctx = ctx.code_payload(payload);
            }
            let mut session = PrinterSession::open(Connector::from_descriptor(&device)?)?;
            session.print_request(&ctx)?;
        }

        Commands::Sample { copy, device } => {
            let ctx = demo::demo_context()
                .code_payload(demo::demo_order().invoice_id)
                .order(demo::demo_order());
            let mut session = PrinterSession::open(Connector::from_descriptor(&device)?)?;
            session.print_receipt(&ctx, &NoTranslations, &demo::demo_settings(), copy)?;
        }
    }

    Ok(())
}

/// Load an order snapshot from a JSON file.
fn load_order(path: &Path) -> Result<Order, PrintError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|e| PrintError::InvalidData(format!("{}: {}", path.display(), e)))
}

/// Build a document context (and settings store) from a profile file, or
/// from the built-in demo profile when none is given.
fn build_context(profile: Option<&Path>) -> Result<(DocumentContext, StaticSettings), PrintError> {
    let Some(path) = profile else {
        return Ok((demo::demo_context(), demo::demo_settings()));
    };

    let data = fs::read_to_string(path)?;
    let profile: ProfileFile = serde_json::from_str(&data)
        .map_err(|e| PrintError::InvalidData(format!("{}: {}", path.display(), e)))?;

    let mut ctx = DocumentContext::new(profile.store).currency(profile.currency);
    if let Some(logo) = profile.logo {
        ctx = ctx.logo(logo);
    }
    Ok((ctx, StaticSettings::from(profile.settings)))
}
