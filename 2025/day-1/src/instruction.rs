use std::str::FromStr;

use chumsky::prelude::*;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Which way the dial turns; left counts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A single rotation of the dial, e.g. `L68` or `R10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub magnitude: i64,
}

impl Instruction {
    /// Signed distance: negative when turning left.
    pub fn delta(self) -> i64 {
        match self.direction {
            Direction::Left => -self.magnitude,
            Direction::Right => self.magnitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum InvalidInstruction {
    #[error("empty instruction")]
    #[diagnostic(
        code(secret_entrance::empty_instruction),
        help("an instruction is a direction (`L` or `R`) followed by a distance, e.g. `L68`")
    )]
    Empty { raw: String },

    #[error("invalid instruction prefix: {token}")]
    #[diagnostic(
        code(secret_entrance::invalid_prefix),
        help("instructions must start with `L` or `R`")
    )]
    Prefix {
        #[source_code]
        token: String,
        #[label("expected `L` or `R`")]
        span: SourceSpan,
    },

    #[error("invalid numeric value in instruction: {token}")]
    #[diagnostic(
        code(secret_entrance::invalid_magnitude),
        help("the distance must be an unsigned base-10 integer")
    )]
    Magnitude {
        #[source_code]
        token: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl InvalidInstruction {
    /// The text that was rejected.
    pub fn token(&self) -> &str {
        match self {
            InvalidInstruction::Empty { raw } => raw,
            InvalidInstruction::Prefix { token, .. }
            | InvalidInstruction::Magnitude { token, .. } => token,
        }
    }

    fn from_rich(token: &str, error: Option<&Rich<'_, char>>) -> Self {
        let offset = error.map_or(0, |e| e.span().start);
        let direction_len = token.chars().next().map_or(0, char::len_utf8);

        if offset == 0 {
            return InvalidInstruction::Prefix {
                token: token.to_string(),
                span: (0, direction_len).into(),
            };
        }

        let rest = &token[direction_len..];
        let reason = if rest.is_empty() {
            "missing distance"
        } else if rest.bytes().all(|b| b.is_ascii_digit()) {
            "distance does not fit in a 64-bit integer"
        } else {
            "expected only digits"
        };

        InvalidInstruction::Magnitude {
            token: token.to_string(),
            span: (direction_len, rest.len()).into(),
            reason: reason.to_string(),
        }
    }
}

/// Parses a whole, already trimmed token.
///
/// The direction is case-insensitive. The distance is a run of ASCII digits with no
/// sign of its own, so `R+5` and `L-5` are rejected rather than folded into the delta.
fn parser<'a>() -> impl Parser<'a, &'a str, Instruction, extra::Err<Rich<'a, char>>> {
    let direction = one_of("LRlr").map(|c: char| {
        if c.eq_ignore_ascii_case(&'L') {
            Direction::Left
        } else {
            Direction::Right
        }
    });

    let magnitude = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| digits.parse::<i64>().map_err(|e| Rich::custom(span, e)));

    direction
        .then(magnitude)
        .then_ignore(end())
        .map(|(direction, magnitude)| Instruction {
            direction,
            magnitude,
        })
}

impl FromStr for Instruction {
    type Err = InvalidInstruction;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(InvalidInstruction::Empty {
                raw: raw.to_string(),
            });
        }

        parser()
            .parse(token)
            .into_result()
            .map_err(|errors| InvalidInstruction::from_rich(token, errors.first()))
    }
}

/// Converts a raw line such as `L68` into a signed delta (`-68`).
pub fn parse_instruction(raw: &str) -> Result<i64, InvalidInstruction> {
    raw.parse::<Instruction>().map(Instruction::delta)
}
