use uom::si::{f64::Length, length::millimeter};

use super::EngineGeometry;

/// 82 mm bore, 84 mm stroke, 27.5 mm seat, four valves per cylinder.
pub(super) fn reference_geometry() -> EngineGeometry {
    EngineGeometry {
        piston_diameter: mm(82.0),
        piston_stroke: mm(84.0),
        channel_diameter: mm(27.5),
        valve_count: 4,
    }
}

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}
