//! Intake port velocity: kernel and evaluator.
//!
//! The [`compute_velocity`] kernel is pure arithmetic on validated input.
//! The evaluator ([`evaluate`], [`sweep`]) is the validation boundary: it
//! rejects non-physical geometry and unusable ranges, derives the swept
//! volume and channel area once, and then runs the kernel at one engine
//! speed or across a range.

mod error;
mod filling;
mod geometry;
mod request;
mod results;
mod rpm_range;
mod sweep;
mod velocity;

#[cfg(test)]
mod test_support;

pub use error::{DomainError, EvaluateError, GeometryError, RangeError};
pub use filling::{FillingBand, FillingThresholds};
pub use geometry::{DerivedGeometry, EngineGeometry};
pub use request::EvaluationRequest;
pub use results::{EvaluationResult, Sample, Series};
pub use rpm_range::{RpmRange, RpmSteps};
pub use sweep::Sweep;
pub use velocity::compute_velocity;

use tracing::{debug, warn};
use uom::si::{area::square_millimeter, velocity::meter_per_second, volume::cubic_centimeter};

/// Evaluates channel velocity for a fixed engine speed or a sweep.
///
/// A [`EvaluationRequest::Fixed`] request yields [`EvaluationResult::Scalar`];
/// a [`EvaluationRequest::Swept`] request yields a fully materialized
/// [`EvaluationResult::Series`]. Use [`sweep`] for a lazy sweep.
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the geometry or range is invalid, or if a
/// fixed speed of 0 RPM is requested. No partial result is ever returned.
pub fn evaluate(
    geometry: &EngineGeometry,
    request: EvaluationRequest,
) -> Result<EvaluationResult, EvaluateError> {
    let derived = derive(geometry)?;
    debug!(
        ?request,
        cylinder_volume_cc = derived.cylinder_volume.get::<cubic_centimeter>(),
        channel_area_mm2 = derived.channel_area.get::<square_millimeter>(),
        valve_count = geometry.valve_count,
        "evaluating intake port velocity"
    );

    match request {
        EvaluationRequest::Fixed(rpm) => {
            let velocity = compute_velocity(
                rpm,
                derived.cylinder_volume,
                derived.channel_area,
                geometry.valve_count,
            )
            .map_err(rejected)?;
            debug!(
                rpm,
                velocity_mps = velocity.get::<meter_per_second>(),
                "fixed speed evaluated"
            );
            Ok(EvaluationResult::Scalar(velocity))
        }
        EvaluationRequest::Swept(range) => {
            let steps = range.unwrap_or_default().steps().map_err(rejected)?;
            let series: Series = Sweep::new(steps, derived, geometry.valve_count).collect();
            debug!(samples = series.len(), "sweep evaluated");
            Ok(EvaluationResult::Series(series))
        }
    }
}

/// Evaluates with the optional-argument call shape.
///
/// `fixed_rpm` takes precedence; otherwise `range` is swept, falling back to
/// [`RpmRange::default`].
///
/// # Errors
///
/// See [`evaluate`].
pub fn evaluate_with(
    geometry: &EngineGeometry,
    fixed_rpm: Option<u32>,
    range: Option<RpmRange>,
) -> Result<EvaluationResult, EvaluateError> {
    evaluate(geometry, EvaluationRequest::from_parts(fixed_rpm, range))
}

/// Validates the inputs and returns a lazy sweep over `range`.
///
/// A `None` range sweeps [`RpmRange::default`].
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the geometry or range is invalid.
pub fn sweep(geometry: &EngineGeometry, range: Option<RpmRange>) -> Result<Sweep, EvaluateError> {
    let derived = derive(geometry)?;
    let steps = range.unwrap_or_default().steps().map_err(rejected)?;
    Ok(Sweep::new(steps, derived, geometry.valve_count))
}

fn derive(geometry: &EngineGeometry) -> Result<DerivedGeometry, EvaluateError> {
    geometry.derive().map_err(rejected)
}

/// Logs a rejected request and lifts its error into [`EvaluateError`].
fn rejected(err: impl Into<EvaluateError>) -> EvaluateError {
    let err = err.into();
    warn!(error = ?err, "intake port evaluation rejected");
    err
}
