use clap::{command, Parser};
use delimsum::{sum, SumError};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a file holding the number list; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<i64, SumError> {
    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| SumError::internal(format!("Failed to read input file: {}", e)))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| SumError::internal(format!("Failed to read stdin: {}", e)))?;
            buffer
        }
    };

    debug!("input: {:?}", text);

    sum(&text)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cli) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
