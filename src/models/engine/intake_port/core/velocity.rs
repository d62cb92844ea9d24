//! Channel velocity kernel.
//!
//! The intake stroke is taken to last half a crankshaft revolution, during
//! which the full cylinder volume is drawn through the channel. The flow is
//! split evenly over `valve_count / 2` effective ports.

use std::num::NonZeroU32;

use uom::si::{
    f64::{Area, Frequency, Time, Velocity, Volume, VolumeRate},
    frequency::hertz,
};

use super::DomainError;

/// Computes the channel air velocity for one intake stroke.
///
/// Inputs other than `rpm` are assumed to be validated by the caller.
///
/// # Errors
///
/// Returns [`DomainError::ZeroRpm`] if `rpm` is zero.
pub fn compute_velocity(
    rpm: u32,
    cylinder_volume: Volume,
    channel_area: Area,
    valve_count: u32,
) -> Result<Velocity, DomainError> {
    let rpm = NonZeroU32::new(rpm).ok_or(DomainError::ZeroRpm)?;
    Ok(intake_velocity(rpm, cylinder_volume, channel_area, valve_count))
}

/// Computes the channel air velocity at an engine speed known to be nonzero.
pub(super) fn intake_velocity(
    rpm: NonZeroU32,
    cylinder_volume: Volume,
    channel_area: Area,
    valve_count: u32,
) -> Velocity {
    let revolutions_per_second = Frequency::new::<hertz>(f64::from(rpm.get()) / 60.0);
    let intake_stroke_duration: Time = (revolutions_per_second * 2.0).recip();
    let volumetric_rate: VolumeRate = cylinder_volume / intake_stroke_duration;
    let effective_ports = f64::from(valve_count) / 2.0;

    volumetric_rate / (channel_area * effective_ports)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, velocity::meter_per_second, volume::cubic_millimeter};

    use crate::models::engine::intake_port::core::test_support::reference_geometry;

    fn velocity_mps(rpm: u32, volume_mm3: f64, area_mm2: f64, valve_count: u32) -> f64 {
        compute_velocity(
            rpm,
            Volume::new::<cubic_millimeter>(volume_mm3),
            Area::new::<square_millimeter>(area_mm2),
            valve_count,
        )
        .unwrap()
        .get::<meter_per_second>()
    }

    #[test]
    fn reference_scenario() {
        let derived = reference_geometry().derive().unwrap();
        let velocity =
            compute_velocity(4000, derived.cylinder_volume, derived.channel_area, 4).unwrap();

        assert_relative_eq!(velocity.get::<meter_per_second>(), 49.791, epsilon = 1e-3);
    }

    #[test]
    fn matches_closed_form() {
        // rate / (1000 · area · valves / 2) with rate = volume · 2 · rpm / 60
        let expected = 443_605.449 * 2.0 * (4000.0 / 60.0) / (1000.0 * 593.957 * 2.0);
        assert_relative_eq!(
            velocity_mps(4000, 443_605.449, 593.957, 4),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn positive_and_finite() {
        for rpm in [1, 600, 4000, 12_000, u32::MAX] {
            let v = velocity_mps(rpm, 443_605.449, 593.957, 4);
            assert!(v > 0.0 && v.is_finite(), "rpm={rpm} v={v}");
        }
    }

    #[test]
    fn linear_in_rpm() {
        let single = velocity_mps(3000, 500_000.0, 600.0, 4);
        let double = velocity_mps(6000, 500_000.0, 600.0, 4);
        assert_relative_eq!(double, 2.0 * single, max_relative = 1e-12);
    }

    #[test]
    fn scales_with_volume_and_inversely_with_area() {
        let base = velocity_mps(5000, 400_000.0, 500.0, 4);

        let bigger_cylinder = velocity_mps(5000, 800_000.0, 500.0, 4);
        assert_relative_eq!(bigger_cylinder, 2.0 * base, max_relative = 1e-12);

        let bigger_channel = velocity_mps(5000, 400_000.0, 1000.0, 4);
        assert_relative_eq!(bigger_channel, base / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn four_valves_halve_two_valve_velocity() {
        let two = velocity_mps(4000, 443_605.449, 593.957, 2);
        let four = velocity_mps(4000, 443_605.449, 593.957, 4);
        assert_relative_eq!(four, two / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_rpm_fails_fast() {
        let result = compute_velocity(
            0,
            Volume::new::<cubic_millimeter>(443_605.449),
            Area::new::<square_millimeter>(593.957),
            4,
        );
        assert_eq!(result, Err(DomainError::ZeroRpm));
    }
}
