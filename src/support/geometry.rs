//! Cylinder and channel geometry.
//!
//! Small closed-form helpers that turn engine dimensions into the areas and
//! volumes the breathing models work with.
//!
//! ```
//! use intake_port_models::support::geometry::{circle_area, swept_volume};
//! use uom::si::{area::square_millimeter, f64::Length, length::millimeter, volume::cubic_centimeter};
//!
//! let bore = Length::new::<millimeter>(82.0);
//! let stroke = Length::new::<millimeter>(84.0);
//!
//! assert!((swept_volume(bore, stroke).get::<cubic_centimeter>() - 443.6).abs() < 0.1);
//! assert!((circle_area(Length::new::<millimeter>(27.5)).get::<square_millimeter>() - 593.96).abs() < 0.01);
//! ```

use std::f64::consts::PI;

use uom::si::f64::{Area, Length, Volume};

/// Returns the area of a circle with the given diameter, `π·d²/4`.
#[must_use]
pub fn circle_area(diameter: Length) -> Area {
    diameter * diameter * (PI / 4.0)
}

/// Returns the volume swept by a piston over one stroke, `π·bore²/4·stroke`.
#[must_use]
pub fn swept_volume(bore: Length, stroke: Length) -> Volume {
    circle_area(bore) * stroke
}
