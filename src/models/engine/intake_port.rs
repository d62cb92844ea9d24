//! Intake port air velocity model.
//!
//! [`IntakePort`] is the [`twine_core::Model`] adapter. The computation lives
//! in the internal `core` module, whose API is re-exported here so it can
//! also be called directly.

mod core;

pub use self::core::{
    DerivedGeometry, DomainError, EngineGeometry, EvaluateError, EvaluationRequest,
    EvaluationResult, FillingBand, FillingThresholds, GeometryError, RangeError, RpmRange,
    RpmSteps, Sample, Series, Sweep, compute_velocity, evaluate, evaluate_with, sweep,
};

use twine_core::Model;

/// Intake port of one engine, evaluated per [`EvaluationRequest`].
///
/// # Example
///
/// ```
/// use intake_port_models::models::engine::intake_port::{
///     EngineGeometry, EvaluationRequest, IntakePort,
/// };
/// use twine_core::Model;
/// use uom::si::{f64::Length, length::millimeter};
///
/// let port = IntakePort::new(EngineGeometry {
///     piston_diameter: Length::new::<millimeter>(79.8),
///     piston_stroke: Length::new::<millimeter>(80.0),
///     channel_diameter: Length::new::<millimeter>(33.0),
///     valve_count: 2,
/// });
///
/// let series = port.call(&EvaluationRequest::Swept(None)).unwrap();
/// assert_eq!(series.as_series().unwrap().len(), 71);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakePort {
    /// Cylinder and channel dimensions.
    pub geometry: EngineGeometry,
}

impl IntakePort {
    /// Creates a model for the given geometry.
    #[must_use]
    pub fn new(geometry: EngineGeometry) -> Self {
        Self { geometry }
    }
}

impl Model for IntakePort {
    type Input = EvaluationRequest;
    type Output = EvaluationResult;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&self.geometry, *input)
    }
}
