//! Engine breathing models.
//!
//! This module contains models of how a piston engine moves its charge,
//! starting with the air velocity through an intake port.

pub mod intake_port;
