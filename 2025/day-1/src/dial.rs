use miette::Diagnostic;
use thiserror::Error;

use crate::{CYCLE, START_POSITION};

/// Running `(position, count)` pair threaded through the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub position: i64,
    pub count: i64,
}

/// How a single rotation updates the count.
///
/// Every strategy moves the dial the same way; they only disagree on what is
/// counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Count rotations that leave the dial exactly on zero.
    #[default]
    ExactZero,
    /// Like `exact-zero`, plus `delta / cycle` (truncated toward zero) on every rotation.
    CycleBonus,
    /// Count every click that lands on zero, including those passed mid-rotation.
    Clicks,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DialError {
    #[error("dial cycle must be positive, got {0}")]
    #[diagnostic(code(secret_entrance::cycle))]
    NonPositiveCycle(i64),
}

/// A circular track of `cycle` positions with a starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    cycle: i64,
    start: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            cycle: CYCLE,
            start: START_POSITION,
        }
    }
}

impl Dial {
    /// Fails with [`DialError::NonPositiveCycle`] when `cycle <= 0`.
    pub fn new(cycle: i64, start: i64) -> Result<Self, DialError> {
        if cycle <= 0 {
            return Err(DialError::NonPositiveCycle(cycle));
        }
        Ok(Self { cycle, start })
    }

    /// `start` wrapped onto the dial, with nothing counted yet.
    pub fn initial(&self) -> State {
        State {
            position: self.start.rem_euclid(self.cycle),
            count: 0,
        }
    }

    /// Applies one delta. Arithmetic is widened so any `i64` delta is safe; the
    /// count saturates at the `i64` bounds.
    pub fn step(&self, state: State, delta: i64, strategy: Strategy) -> State {
        let cycle = i128::from(self.cycle);
        let position = i128::from(state.position);
        let delta = i128::from(delta);

        // rem_euclid keeps the result in [0, cycle) for negative sums too
        let next = (position + delta).rem_euclid(cycle);

        let landed = i128::from(next == 0);
        let gained = match strategy {
            Strategy::ExactZero => landed,
            Strategy::CycleBonus => landed + delta / cycle,
            Strategy::Clicks if delta >= 0 => (position + delta).div_euclid(cycle),
            // Turning left covers [position + delta, position - 1]; count the
            // multiples of `cycle` in that interval.
            Strategy::Clicks => {
                (position - 1).div_euclid(cycle) - (position + delta - 1).div_euclid(cycle)
            }
        };

        let count = (i128::from(state.count) + gained).clamp(i64::MIN.into(), i64::MAX.into());

        State {
            position: next as i64,
            count: count as i64,
        }
    }

    pub fn reduce_from<I>(&self, state: State, deltas: I, strategy: Strategy) -> State
    where
        I: IntoIterator<Item = i64>,
    {
        deltas.into_iter().fold(state, |state, delta| {
            let next = self.step(state, delta, strategy);
            tracing::trace!(delta, position = next.position, count = next.count, "rotated");
            next
        })
    }

    /// Folds `deltas` from [`Dial::initial`].
    pub fn reduce<I>(&self, deltas: I, strategy: Strategy) -> State
    where
        I: IntoIterator<Item = i64>,
    {
        self.reduce_from(self.initial(), deltas, strategy)
    }
}

/// Folds deltas on the default dial, counting exact stops at zero.
pub fn reduce<I>(deltas: I) -> State
where
    I: IntoIterator<Item = i64>,
{
    Dial::default().reduce(deltas, Strategy::ExactZero)
}
