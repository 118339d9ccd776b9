//! keyedfield CLI
//!
//! Command-line tools for keyed field tokens and queries.
//!
//! # Commands
//!
//! - `encode` - Encode a key/value pair into a composite token
//! - `decode` - Split a hex-encoded token into key and value
//! - `translate` - Translate a predicate into a term-level query

mod commands;

use clap::{Parser, Subcommand};
use commands::translate::{FieldSettings, PredicateCommand};
use commands::ValueType;
use tracing_subscriber::EnvFilter;

/// Keyed field token and query tools.
#[derive(Parser)]
#[command(name = "keyedfield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(global = true, short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a key/value pair into a composite token
    Encode {
        /// Key to encode under
        #[arg(short, long)]
        key: String,

        /// Value to encode
        value: String,

        /// How to read the value
        #[arg(short = 't', long = "type", value_enum, default_value = "text")]
        value_type: ValueType,
    },

    /// Split a hex-encoded token into key and value
    Decode {
        /// Token bytes in hexadecimal
        hex: String,
    },

    /// Translate a predicate into a term-level query
    Translate {
        /// Physical field name
        #[arg(long, default_value = "field")]
        field: String,

        /// Key bound to the field
        #[arg(short, long)]
        key: String,

        /// Treat the field as not indexed
        #[arg(long)]
        not_indexed: bool,

        /// Split free-text queries on whitespace
        #[arg(long)]
        split_on_whitespace: bool,

        /// How to read predicate values
        #[arg(short = 't', long = "type", value_enum, default_value = "text")]
        value_type: ValueType,

        #[command(subcommand)]
        predicate: PredicateCommand,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode {
            key,
            value,
            value_type,
        } => {
            commands::encode::run(&key, &value, value_type, &cli.format)?;
        }
        Commands::Decode { hex } => {
            commands::decode::run(&hex, &cli.format)?;
        }
        Commands::Translate {
            field,
            key,
            not_indexed,
            split_on_whitespace,
            value_type,
            predicate,
        } => {
            let settings = FieldSettings {
                field,
                key,
                indexed: !not_indexed,
                split_on_whitespace,
            };
            commands::translate::run(settings, predicate, value_type, &cli.format)?;
        }
        Commands::Version => {
            println!("keyedfield CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("keyedfield core v{}", keyedfield_core::VERSION);
        }
    }

    Ok(())
}
