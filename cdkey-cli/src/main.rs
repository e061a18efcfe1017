//! cdkey: issue pairing-signed license keys.
//!
//! Usage:
//!   cdkey --dir keys/ generate --count 10 --features 10100000
//!   cdkey --dir keys/ inspect 4K0ZQM-7R2D9V-...
//!
//! The directory must already contain `pairing.param`, `g.bin`,
//! `secret_key.bin` and `serial`.

use anyhow::{Context, Result};
use cdkey_cli::{format_features, parse_features, GeneratorDir};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "cdkey")]
#[command(about = "Issue pairing-signed license keys from a generator directory")]
struct Args {
    /// Generator directory
    #[arg(short, long)]
    dir: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue new license keys under the next serials
    Generate {
        /// How many keys to issue
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Feature flags as binary digits, e.g. 10100000
        #[arg(short, long, default_value = "0", value_parser = parse_features)]
        features: u8,

        /// Print one JSON object per key instead of the bare key
        #[arg(long)]
        json: bool,
    },

    /// Show the serial and features a key carries (no signature check)
    Inspect {
        /// The license key
        key: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let dir = GeneratorDir::open(&args.dir)
        .with_context(|| format!("opening {}", args.dir.display()))?;

    match args.command {
        Command::Generate {
            count,
            features,
            json,
        } => {
            let issued = dir
                .issue(count, features)
                .with_context(|| format!("issuing {count} keys"))?;
            for key in &issued {
                if json {
                    println!("{}", serde_json::to_string(key)?);
                } else {
                    println!("{}", key.key);
                }
            }
            info!("appended {} keys to the issued-key log", issued.len());
        }
        Command::Inspect { key } => {
            let message = dir.inspect(&key).context("reading license key")?;
            println!("serial:   {}", message.serial);
            println!("features: {}", format_features(message.features));
        }
    }

    Ok(())
}
