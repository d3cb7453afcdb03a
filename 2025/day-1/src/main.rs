use clap::Parser;
use miette::*;
use tracing_subscriber::EnvFilter;

use secret_entrance::{cli::Cli, process_file};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dial = cli.dial()?;
    let state = process_file(&cli.input, dial, cli.strategy)?;

    println!("Final position: {}", state.position);
    println!("Zero-crossings count: {}", state.count);
    Ok(())
}
