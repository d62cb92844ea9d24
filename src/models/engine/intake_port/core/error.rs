use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when an [`EngineGeometry`](super::EngineGeometry) is not physical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The piston diameter (bore) is zero, negative, infinite, or `NaN`.
    #[error("invalid piston diameter")]
    PistonDiameter(#[source] ConstraintError),

    /// The piston stroke is zero, negative, infinite, or `NaN`.
    #[error("invalid piston stroke")]
    PistonStroke(#[source] ConstraintError),

    /// The channel diameter is zero, negative, infinite, or `NaN`.
    #[error("invalid channel diameter")]
    ChannelDiameter(#[source] ConstraintError),

    /// The cylinder has no valves to split the flow across.
    #[error("valve count must be at least 1")]
    InvalidValveCount,

    /// The swept volume underflowed to zero or overflowed to infinity.
    #[error("cylinder volume is not a finite positive value")]
    DegenerateVolume,

    /// The channel area underflowed to zero or overflowed to infinity.
    #[error("channel area is not a finite positive value")]
    DegenerateArea,

    /// The volume to area ratio is too large for a finite velocity at every engine speed.
    #[error("channel velocity would overflow")]
    VelocityOverflow,
}

/// Errors raised when an [`RpmRange`](super::RpmRange) cannot drive a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The sweep would start at 0 RPM.
    #[error("sweep must start above 0 rpm")]
    ZeroLow,

    /// The sweep would never advance.
    #[error("sweep step must be greater than 0 rpm")]
    ZeroStep,

    /// The lower bound lies above the upper bound.
    #[error("sweep bounds are inverted: low={low} > high={high}")]
    Inverted {
        /// Requested lower bound.
        low: u32,

        /// Requested upper bound.
        high: u32,
    },
}

/// Errors raised by the velocity kernel for inputs outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// At 0 RPM the intake stroke never ends and the velocity is undefined.
    #[error("engine speed must be greater than 0 rpm")]
    ZeroRpm,
}

/// Errors that can occur while evaluating intake port velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// The engine geometry was rejected before any computation.
    #[error("invalid engine geometry")]
    InvalidGeometry(#[from] GeometryError),

    /// The requested sweep range was rejected before any computation.
    #[error("invalid rpm range")]
    InvalidRange(#[from] RangeError),

    /// The velocity kernel was asked to evaluate outside its domain.
    #[error("velocity undefined")]
    Domain(#[from] DomainError),
}
