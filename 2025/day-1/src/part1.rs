use miette::*;

use crate::{process_input, Dial, Strategy};

/// Counts the rotations that leave the dial pointing exactly at zero.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let state = process_input(input, Dial::default(), Strategy::ExactZero)?;
    Ok(state.count.to_string())
}
