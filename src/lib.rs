//! # Intake Port Models
//!
//! Air velocity through the intake channel (port) of a reciprocating-piston
//! engine, built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given piston bore, piston stroke, channel diameter, and valve count, the
//! model answers one question: how fast does the intake charge move through
//! the channel at a given engine speed? That is the number a tuner checks
//! when deciding whether a proposed channel diameter is sized well across
//! the RPM band.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use intake_port_models::models::engine::intake_port::{
//!     EngineGeometry, EvaluationRequest, evaluate,
//! };
//! use uom::si::{f64::Length, length::millimeter, velocity::meter_per_second};
//!
//! let geometry = EngineGeometry {
//!     piston_diameter: Length::new::<millimeter>(82.0),
//!     piston_stroke: Length::new::<millimeter>(84.0),
//!     channel_diameter: Length::new::<millimeter>(27.5),
//!     valve_count: 4,
//! };
//!
//! let result = evaluate(&geometry, EvaluationRequest::Fixed(4000)).unwrap();
//! let velocity = result.as_scalar().unwrap();
//! assert!((velocity.get::<meter_per_second>() - 49.79).abs() < 0.01);
//! ```

pub mod models;
pub mod support;
