//! Cylinder filling bands for channel velocity.
//!
//! Tuners read channel velocity against rule-of-thumb bands: roughly
//! 70 to 90 m/s fills the cylinder well, up to 140 m/s is still acceptable,
//! and beyond that the channel is choking the engine.

use uom::si::{f64::Velocity, velocity::meter_per_second};

/// How well a channel velocity fills the cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FillingBand {
    /// Below the good band; the channel is oversized at this speed.
    Low,
    /// Inside the good band.
    Good,
    /// Above the good band but still acceptable.
    Acceptable,
    /// Above the acceptable limit; the channel is undersized at this speed.
    Excessive,
}

/// Velocity limits separating the [`FillingBand`]s.
///
/// Each limit is inclusive on the band below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillingThresholds {
    /// Lowest velocity of the good band.
    pub good_low: Velocity,

    /// Highest velocity of the good band.
    pub good_high: Velocity,

    /// Highest acceptable velocity.
    pub acceptable_high: Velocity,
}

impl Default for FillingThresholds {
    fn default() -> Self {
        Self {
            good_low: Velocity::new::<meter_per_second>(70.0),
            good_high: Velocity::new::<meter_per_second>(90.0),
            acceptable_high: Velocity::new::<meter_per_second>(140.0),
        }
    }
}

impl FillingThresholds {
    /// Returns the band that `velocity` falls into.
    #[must_use]
    pub fn classify(&self, velocity: Velocity) -> FillingBand {
        if velocity < self.good_low {
            FillingBand::Low
        } else if velocity <= self.good_high {
            FillingBand::Good
        } else if velocity <= self.acceptable_high {
            FillingBand::Acceptable
        } else {
            FillingBand::Excessive
        }
    }
}
