use std::num::NonZeroU32;

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    geometry::{circle_area, swept_volume},
};
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Volume},
    length::meter,
    velocity::meter_per_second,
    volume::cubic_meter,
};

use super::{GeometryError, velocity::intake_velocity};

/// Cylinder and intake channel dimensions of one engine.
///
/// This is a plain record: nothing is checked until it is evaluated.
/// [`EngineGeometry::derive`] is where invalid dimensions are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineGeometry {
    /// Piston diameter (bore).
    pub piston_diameter: Length,

    /// Piston stroke.
    pub piston_stroke: Length,

    /// Diameter of the channel where velocity is measured, such as the valve seat.
    pub channel_diameter: Length,

    /// Valves per cylinder, conventionally 2 or 4.
    ///
    /// The flow is split evenly over `valve_count / 2` effective ports, so
    /// an even count is the physical case. Odd counts are accepted.
    pub valve_count: u32,
}

/// Quantities derived once from an [`EngineGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    /// Volume swept by the piston over one stroke.
    pub cylinder_volume: Volume,

    /// Cross-sectional area of the channel.
    pub channel_area: Area,
}

impl EngineGeometry {
    /// Validates the dimensions and derives the swept volume and channel area.
    ///
    /// Every dimension must be finite and strictly positive, and so must the
    /// derived volume and area. The volume to area ratio must also keep the
    /// channel velocity finite up to `u32::MAX` rpm, so any later evaluation
    /// of a derived geometry yields a finite velocity.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] naming the first dimension that fails,
    /// [`GeometryError::InvalidValveCount`] when there are no valves, or a
    /// degenerate-geometry variant when the derived quantities underflow or
    /// overflow.
    pub fn derive(&self) -> Result<DerivedGeometry, GeometryError> {
        let bore = dimension(self.piston_diameter).map_err(GeometryError::PistonDiameter)?;
        let stroke = dimension(self.piston_stroke).map_err(GeometryError::PistonStroke)?;
        let channel = dimension(self.channel_diameter).map_err(GeometryError::ChannelDiameter)?;

        if self.valve_count == 0 {
            return Err(GeometryError::InvalidValveCount);
        }

        let cylinder_volume = swept_volume(bore, stroke);
        if !finite_positive(cylinder_volume.get::<cubic_meter>()) {
            return Err(GeometryError::DegenerateVolume);
        }

        let channel_area = circle_area(channel);
        if !finite_positive(channel_area.get::<square_meter>()) {
            return Err(GeometryError::DegenerateArea);
        }

        // Velocity is linear in rpm, so the fastest speed bounds every sweep.
        let fastest = intake_velocity(
            NonZeroU32::MAX,
            cylinder_volume,
            channel_area,
            self.valve_count,
        );
        if !fastest.get::<meter_per_second>().is_finite() {
            return Err(GeometryError::VelocityOverflow);
        }

        Ok(DerivedGeometry {
            cylinder_volume,
            channel_area,
        })
    }
}

fn dimension(value: Length) -> Result<Length, ConstraintError> {
    let value = StrictlyPositive::new(value)?.into_inner();
    if value.get::<meter>().is_infinite() {
        return Err(ConstraintError::Infinite);
    }
    Ok(value)
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, length::millimeter, volume::cubic_millimeter};

    use crate::models::engine::intake_port::core::test_support::{mm, reference_geometry};

    #[test]
    fn derives_reference_quantities() {
        let derived = reference_geometry().derive().unwrap();

        assert_relative_eq!(
            derived.cylinder_volume.get::<cubic_millimeter>(),
            443_605.449,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            derived.channel_area.get::<square_millimeter>(),
            593.957,
            epsilon = 1e-3
        );
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let geometry = EngineGeometry {
            channel_diameter: Length::new::<millimeter>(0.0),
            ..reference_geometry()
        };
        assert_eq!(
            geometry.derive(),
            Err(GeometryError::ChannelDiameter(ConstraintError::Zero))
        );

        let geometry = EngineGeometry {
            piston_diameter: Length::new::<millimeter>(-82.0),
            ..reference_geometry()
        };
        assert_eq!(
            geometry.derive(),
            Err(GeometryError::PistonDiameter(ConstraintError::Negative))
        );

        let geometry = EngineGeometry {
            piston_stroke: Length::new::<millimeter>(f64::NAN),
            ..reference_geometry()
        };
        assert_eq!(
            geometry.derive(),
            Err(GeometryError::PistonStroke(ConstraintError::NotANumber))
        );
    }

    #[test]
    fn rejects_infinite_dimensions() {
        let geometry = EngineGeometry {
            piston_diameter: mm(f64::INFINITY),
            ..reference_geometry()
        };
        assert_eq!(
            geometry.derive(),
            Err(GeometryError::PistonDiameter(ConstraintError::Infinite))
        );

        let geometry = EngineGeometry {
            channel_diameter: mm(f64::INFINITY),
            ..reference_geometry()
        };
        assert_eq!(
            geometry.derive(),
            Err(GeometryError::ChannelDiameter(ConstraintError::Infinite))
        );
    }

    #[test]
    fn rejects_channel_area_underflow() {
        let geometry = EngineGeometry {
            channel_diameter: mm(1e-160),
            ..reference_geometry()
        };
        assert_eq!(geometry.derive(), Err(GeometryError::DegenerateArea));
    }

    #[test]
    fn rejects_cylinder_volume_overflow() {
        let geometry = EngineGeometry {
            piston_diameter: mm(1e200),
            ..reference_geometry()
        };
        assert_eq!(geometry.derive(), Err(GeometryError::DegenerateVolume));
    }

    #[test]
    fn rejects_geometry_with_unbounded_velocity() {
        let geometry = EngineGeometry {
            piston_diameter: mm(1e100),
            channel_diameter: mm(1e-100),
            ..reference_geometry()
        };
        assert_eq!(geometry.derive(), Err(GeometryError::VelocityOverflow));
    }

    #[test]
    fn small_but_representable_channel_is_accepted() {
        let geometry = EngineGeometry {
            channel_diameter: mm(1e-100),
            ..reference_geometry()
        };
        assert!(geometry.derive().is_ok());
    }

    #[test]
    fn rejects_zero_valves() {
        let geometry = EngineGeometry {
            valve_count: 0,
            ..reference_geometry()
        };
        assert_eq!(geometry.derive(), Err(GeometryError::InvalidValveCount));
    }

    #[test]
    fn odd_valve_count_is_accepted() {
        let geometry = EngineGeometry {
            valve_count: 3,
            ..reference_geometry()
        };
        assert!(geometry.derive().is_ok());
    }
}
