//! Diceware Wordlist CLI
//!
//! Turns a lemma dictionary into a numbered Diceware wordlist.

use std::path::PathBuf;

use clap::Parser;
use diceware_wordlist::{generate, WordlistConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "diceware-wordlist", version, about)]
struct Args {
    /// Lemma dictionary (JSON array of arrays)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Destination for the numbered wordlist
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diceware_wordlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = WordlistConfig::default();
    match generate(&config, &args.input, &args.output) {
        Ok(count) => {
            println!(
                "{} words extracted and written to '{}'",
                count,
                args.output.display()
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
