use std::iter::FusedIterator;

use tracing::trace;
use uom::si::velocity::meter_per_second;

use super::{DerivedGeometry, RpmSteps, Sample, velocity::intake_velocity};

/// Lazy sweep of channel velocity over a validated RPM range.
///
/// Produced by [`sweep`](super::sweep). Samples are computed on demand in
/// ascending RPM order. Clone it to restart from the current position.
#[derive(Debug, Clone)]
pub struct Sweep {
    steps: RpmSteps,
    derived: DerivedGeometry,
    valve_count: u32,
}

impl Sweep {
    pub(super) fn new(steps: RpmSteps, derived: DerivedGeometry, valve_count: u32) -> Self {
        Self {
            steps,
            derived,
            valve_count,
        }
    }
}

impl Iterator for Sweep {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let rpm = self.steps.next()?;
        let velocity = intake_velocity(
            rpm,
            self.derived.cylinder_volume,
            self.derived.channel_area,
            self.valve_count,
        );
        trace!(
            rpm = rpm.get(),
            velocity_mps = velocity.get::<meter_per_second>(),
            "sweep sample"
        );
        Some(Sample {
            rpm: rpm.get(),
            velocity,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Sweep {}

impl FusedIterator for Sweep {}
