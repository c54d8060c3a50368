//! ethkit CLI - canonical value conversion and RLP encoding.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod json;
mod output;

use commands::{convert, decode, encode, hash, infer, random, KindArg, SedesArg};

#[derive(Parser)]
#[command(name = "ethkit")]
#[command(about = "Canonical value conversion and RLP encoding CLI")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every view of a value given as hex or decimal text
    Convert {
        /// Value to convert (hex with 0x prefix, or decimal digits)
        value: String,
        /// Force the input variant instead of detecting it
        #[arg(long = "as", value_enum)]
        kind: Option<KindArg>,
        /// Width in bytes of the padded views (at most 1024)
        #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(..=1024))]
        pad: u16,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a random 32-byte value
    Random {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// RLP-encode a JSON value
    Encode {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Codec for the top-level value (default: inferred)
        #[arg(long, value_enum)]
        sedes: Option<SedesArg>,
    },
    /// Decode RLP hex into JSON
    Decode {
        /// RLP bytes as hex
        data: String,
        /// Codec for the top-level value (default: structural)
        #[arg(long, value_enum)]
        sedes: Option<SedesArg>,
        /// Ignore bytes after the first item
        #[arg(long)]
        permissive: bool,
    },
    /// Show the codec inferred for a JSON value
    Infer {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// SHA-256 digest of the RLP encoding of a JSON value
    Hash {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Convert {
            value,
            kind,
            pad,
            json,
        } => convert::run(value, kind, usize::from(pad), json),
        Commands::Random { json } => random::run(json),
        Commands::Encode { input, sedes } => encode::run(input, sedes),
        Commands::Decode {
            data,
            sedes,
            permissive,
        } => decode::run(data, sedes, permissive),
        Commands::Infer { input } => infer::run(input),
        Commands::Hash { input } => hash::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
