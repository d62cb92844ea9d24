use std::{iter::FusedIterator, num::NonZeroU32};

use super::RangeError;

/// Inclusive engine speed window swept at a fixed step.
///
/// The sweep visits `low, low + step, ...` up to the largest value that does
/// not exceed `high`. When `high - low` is not a multiple of `step`, `high`
/// itself is never visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpmRange {
    /// First engine speed visited.
    pub low: u32,

    /// Upper bound, visited only when it falls on a step boundary.
    pub high: u32,

    /// Spacing between visited speeds.
    pub step: u32,
}

impl Default for RpmRange {
    fn default() -> Self {
        Self {
            low: 1000,
            high: 8000,
            step: Self::DEFAULT_STEP,
        }
    }
}

impl RpmRange {
    /// Step used when only the bounds are given.
    pub const DEFAULT_STEP: u32 = 100;

    /// Creates a range between `low` and `high` at the default step.
    #[must_use]
    pub fn new(low: u32, high: u32) -> Self {
        Self {
            low,
            high,
            step: Self::DEFAULT_STEP,
        }
    }

    /// Returns this range with a different step.
    #[must_use]
    pub fn with_step(self, step: u32) -> Self {
        Self { step, ..self }
    }

    /// Validates the range and returns a lazy iterator over its engine speeds.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the step is zero, the range starts at
    /// zero, or `low > high`.
    pub fn steps(&self) -> Result<RpmSteps, RangeError> {
        if self.step == 0 {
            return Err(RangeError::ZeroStep);
        }
        let low = NonZeroU32::new(self.low).ok_or(RangeError::ZeroLow)?;
        if self.low > self.high {
            return Err(RangeError::Inverted {
                low: self.low,
                high: self.high,
            });
        }

        Ok(RpmSteps {
            next: Some(low),
            high: self.high,
            step: self.step,
        })
    }
}

/// Iterator over the engine speeds of a validated [`RpmRange`].
///
/// Clone it to restart from the current position.
#[derive(Debug, Clone)]
pub struct RpmSteps {
    next: Option<NonZeroU32>,
    high: u32,
    step: u32,
}

impl Iterator for RpmSteps {
    type Item = NonZeroU32;

    fn next(&mut self) -> Option<Self::Item> {
        let rpm = self.next?;
        self.next = rpm
            .checked_add(self.step)
            .filter(|next| next.get() <= self.high);
        Some(rpm)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |rpm| {
            usize::try_from((self.high - rpm.get()) / self.step + 1).unwrap_or(usize::MAX)
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RpmSteps {}

impl FusedIterator for RpmSteps {}
