//! Command line arguments for the `secret-entrance` binary

use std::path::PathBuf;

use clap::Parser;

use crate::{Dial, DialError, Strategy, CYCLE, START_POSITION};

#[derive(Parser, Debug)]
#[command(name = "secret-entrance")]
#[command(
    author,
    version,
    about = "Track a rotating dial and count how often it stops at zero",
    long_about = None
)]
pub struct Cli {
    /// File with one rotation per line, e.g. `L68`
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// What to count on each rotation
    #[arg(short, long, value_enum, default_value_t = Strategy::ExactZero)]
    pub strategy: Strategy,

    /// Number of positions on the dial
    #[arg(long, default_value_t = CYCLE, allow_negative_numbers = true)]
    pub cycle: i64,

    /// Position the dial points at before the first rotation
    #[arg(long, default_value_t = START_POSITION, allow_negative_numbers = true)]
    pub start: i64,
}

impl Cli {
    pub fn dial(&self) -> Result<Dial, DialError> {
        Dial::new(self.cycle, self.start)
    }
}
