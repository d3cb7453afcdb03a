use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};

pub mod cli;
pub mod dial;
pub mod instruction;
pub mod part1;
pub mod part2;

#[cfg(test)]
mod proptests;

pub use dial::{reduce, Dial, DialError, State, Strategy};
pub use instruction::{parse_instruction, Direction, Instruction, InvalidInstruction};

/// Number of positions on the dial.
pub const CYCLE: i64 = 100;
/// Where the dial points before the first rotation.
pub const START_POSITION: i64 = 50;

/// Line boundaries other than `\n`, which is split on first so `\r\n` stays one break.
const LINE_BREAKS: [char; 9] = [
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Non-blank lines with their 1-based line numbers.
///
/// Besides `\n` and `\r\n`, every Unicode line boundary ends a line: `\r`, vertical tab,
/// form feed, the file/group/record separators, NEL and the line/paragraph separators.
pub fn lines<'a>(input: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    input
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split(LINE_BREAKS))
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn deltas<'a>(input: &'a str) -> impl Iterator<Item = Result<i64, InvalidInstruction>> + 'a {
    lines(input).map(|(number, line)| {
        parse_instruction(line).inspect_err(|error| {
            tracing::warn!(line = number, token = error.token(), "rejected instruction");
        })
    })
}

/// Parses every non-blank line, stopping at the first invalid one.
pub fn parse_lines(input: &str) -> Result<Vec<i64>, InvalidInstruction> {
    deltas(input).collect()
}

/// Folds the instructions in `input` on `dial`.
///
/// The first invalid line aborts the whole run and its error is returned as is.
#[tracing::instrument(skip(input))]
pub fn process_input(
    input: &str,
    dial: Dial,
    strategy: Strategy,
) -> Result<State, InvalidInstruction> {
    itertools::process_results(deltas(input), |deltas| dial.reduce(deltas, strategy))
}

#[tracing::instrument]
pub fn process_file(path: &Path, dial: Dial, strategy: Strategy) -> miette::Result<State> {
    let input = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read instructions from {}", path.display()))?;

    let state = process_input(&input, dial, strategy)?;
    tracing::debug!(
        position = state.position,
        count = state.count,
        "processed instructions"
    );
    Ok(state)
}
