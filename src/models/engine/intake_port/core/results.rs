//! Results types for intake port evaluation.

use uom::si::{f64::Velocity, velocity::meter_per_second};

/// Channel velocity at one engine speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Engine speed in revolutions per minute.
    pub rpm: u32,

    /// Air velocity through the channel.
    pub velocity: Velocity,
}

/// Samples of a sweep, ordered by ascending engine speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Series(Vec<Sample>);

impl Series {
    /// Returns the samples in ascending RPM order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.0.iter()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the series into paired chart axes: RPM on X, velocity on Y.
    #[must_use]
    pub fn axes(&self) -> (Vec<u32>, Vec<Velocity>) {
        self.0.iter().map(|s| (s.rpm, s.velocity)).unzip()
    }

    /// Returns the sample with the highest channel velocity.
    #[must_use]
    pub fn peak(&self) -> Option<&Sample> {
        self.0.iter().max_by(|a, b| {
            a.velocity
                .get::<meter_per_second>()
                .total_cmp(&b.velocity.get::<meter_per_second>())
        })
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of an evaluation: one velocity or a swept series.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// Velocity at a fixed engine speed.
    Scalar(Velocity),

    /// Velocities across an engine speed range.
    Series(Series),
}

impl EvaluationResult {
    /// Returns the velocity if this is a fixed-speed result.
    #[must_use]
    pub fn as_scalar(&self) -> Option<Velocity> {
        match self {
            Self::Scalar(velocity) => Some(*velocity),
            Self::Series(_) => None,
        }
    }

    /// Returns the series if this is a swept result.
    #[must_use]
    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Self::Scalar(_) => None,
            Self::Series(series) => Some(series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rpm: u32, mps: f64) -> Sample {
        Sample {
            rpm,
            velocity: Velocity::new::<meter_per_second>(mps),
        }
    }

    #[test]
    fn axes_keep_pairs_aligned() {
        let series: Series = [sample(1000, 12.0), sample(1100, 13.5)]
            .into_iter()
            .collect();

        let (x, y) = series.axes();
        assert_eq!(x, vec![1000, 1100]);
        assert_eq!(y[1].get::<meter_per_second>(), 13.5);
    }

    #[test]
    fn peak_picks_fastest_sample() {
        let series: Series = [sample(1000, 12.0), sample(1100, 30.0), sample(1200, 20.0)]
            .into_iter()
            .collect();
        assert_eq!(series.peak().map(|s| s.rpm), Some(1100));
        assert_eq!(std::iter::empty().collect::<Series>().peak(), None);
    }

    #[test]
    fn accessors_match_variant() {
        let scalar = EvaluationResult::Scalar(Velocity::new::<meter_per_second>(49.8));
        assert!(scalar.as_scalar().is_some());
        assert!(scalar.as_series().is_none());

        let series = EvaluationResult::Series([sample(1000, 12.0)].into_iter().collect());
        assert!(series.as_scalar().is_none());
        assert_eq!(series.as_series().map(Series::len), Some(1));
    }
}
