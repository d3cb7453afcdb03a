use miette::*;

use crate::{process_input, Dial, Strategy};

/// Counts every click that points the dial at zero, including the ones passed
/// in the middle of a rotation.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let state = process_input(input, Dial::default(), Strategy::Clicks)?;
    Ok(state.count.to_string())
}
