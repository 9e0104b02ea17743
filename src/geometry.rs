//! Geometric relations for shell-and-tube heat exchangers.
//!
//! Pure functions mapping exchanger dimensions to flow areas, surface areas,
//! hydraulic diameter, stream velocities, and tube-layout heuristics.

use std::f64::consts::PI;

use uom::si::f64::{Area, Length, MassDensity, MassRate, ThermalConductivity, Velocity};

/// Shell-and-tube exchanger dimensions.
///
/// Immutable input owned by the caller. `tube_count` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Exchanger length.
    pub length: Length,
    /// Shell inner diameter.
    pub shell_diameter: Length,
    /// Tube inner diameter.
    pub tube_inner_diameter: Length,
    /// Tube wall thickness.
    pub tube_wall_thickness: Length,
    /// Number of tubes in the bundle.
    pub tube_count: usize,
    /// Thermal conductivity of the tube wall material.
    pub wall_thermal_conductivity: ThermalConductivity,
}

impl Geometry {
    /// Tube outer diameter: inner diameter plus twice the wall thickness.
    #[must_use]
    pub fn tube_outer_diameter(&self) -> Length {
        self.tube_inner_diameter + 2.0 * self.tube_wall_thickness
    }
}

/// Cross-sectional area of a single tube bore.
#[must_use]
pub fn tube_cross_section_area(diameter: Length) -> Area {
    let radius = diameter / 2.0;
    PI * radius * radius
}

/// Shell-side flow area: shell cross-section minus the tube bundle's
/// outer cross-sections.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shell_flow_area(
    shell_diameter: Length,
    tube_outer_diameter: Length,
    tube_count: usize,
) -> Area {
    tube_cross_section_area(shell_diameter)
        - tube_count as f64 * tube_cross_section_area(tube_outer_diameter)
}

/// Total inner heat-transfer surface area of the tube bundle,
/// `π·d·L·N_tubes`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn total_tube_surface_area(tube_diameter: Length, length: Length, tube_count: usize) -> Area {
    PI * tube_diameter * length * tube_count as f64
}

/// Hydraulic diameter of the shell-side flow passage,
/// `4·A_flow / P_wetted`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shell_hydraulic_diameter(
    shell_diameter: Length,
    tube_outer_diameter: Length,
    tube_count: usize,
) -> Length {
    let flow_area = shell_flow_area(shell_diameter, tube_outer_diameter, tube_count);
    let wetted_perimeter = PI * shell_diameter + tube_count as f64 * PI * tube_outer_diameter;
    4.0 * flow_area / wetted_perimeter
}

/// Mean tube-side velocity for a mass flow split across the bundle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tube_velocity(
    mass_flow: MassRate,
    density: MassDensity,
    tube_diameter: Length,
    tube_count: usize,
) -> Velocity {
    let total_area = tube_count as f64 * tube_cross_section_area(tube_diameter);
    mass_flow / (density * total_area)
}

/// Mean shell-side velocity through the bundle gap area.
#[must_use]
pub fn shell_velocity(
    mass_flow: MassRate,
    density: MassDensity,
    shell_diameter: Length,
    tube_outer_diameter: Length,
    tube_count: usize,
) -> Velocity {
    let flow_area = shell_flow_area(shell_diameter, tube_outer_diameter, tube_count);
    mass_flow / (density * flow_area)
}

/// Recommended segmental baffle spacing, taken as half the shell diameter.
///
/// Practice ranges from 0.2 to 1.0 shell diameters; this returns the
/// conservative middle value.
#[must_use]
pub fn recommended_baffle_spacing(shell_diameter: Length) -> Length {
    0.5 * shell_diameter
}

/// Tube pitch for a triangular layout. A pitch ratio of 1.25 is typical.
#[must_use]
pub fn tube_pitch(tube_outer_diameter: Length, pitch_ratio: f64) -> Length {
    pitch_ratio * tube_outer_diameter
}

/// Estimates the maximum tube count a shell can hold with a triangular
/// layout, leaving one tube diameter of clearance at the shell wall and
/// assuming 80% packing efficiency.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_max_tubes(
    shell_diameter: Length,
    tube_outer_diameter: Length,
    pitch_ratio: f64,
) -> usize {
    use uom::si::ratio::ratio;

    let pitch = tube_pitch(tube_outer_diameter, pitch_ratio);
    let bundle_diameter = shell_diameter - 2.0 * tube_outer_diameter;

    let tubes_per_row = (bundle_diameter / pitch).get::<ratio>();
    // 0.866 is the row spacing factor for a triangular pitch.
    let rows = (bundle_diameter / (0.866 * pitch)).get::<ratio>().floor();

    (tubes_per_row * rows * 0.8).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, length::meter, mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second, velocity::meter_per_second,
    };

    #[test]
    fn tube_cross_section() {
        let area = tube_cross_section_area(Length::new::<meter>(0.02));
        assert_relative_eq!(area.get::<square_meter>(), PI * 0.0001, max_relative = 1e-12);
    }

    #[test]
    fn shell_flow_area_subtracts_bundle() {
        let area = shell_flow_area(
            Length::new::<meter>(0.2),
            Length::new::<meter>(0.024),
            10,
        );
        let expected = PI * 0.01 - 10.0 * PI * 0.012f64.powi(2);
        assert_relative_eq!(area.get::<square_meter>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn total_surface_area() {
        let area =
            total_tube_surface_area(Length::new::<meter>(0.02), Length::new::<meter>(2.0), 10);
        assert_relative_eq!(area.get::<square_meter>(), PI * 0.02 * 2.0 * 10.0);
    }

    #[test]
    fn hydraulic_diameter_of_empty_shell_is_shell_diameter() {
        // Zero tubes degenerates to a plain circular duct.
        let d_h = shell_hydraulic_diameter(Length::new::<meter>(0.2), Length::new::<meter>(0.02), 0);
        assert_relative_eq!(d_h.get::<meter>(), 0.2, max_relative = 1e-12);
    }

    #[test]
    fn velocities_scale_inversely_with_area() {
        let mass_flow = MassRate::new::<kilogram_per_second>(1.0);
        let density = MassDensity::new::<kilogram_per_cubic_meter>(1000.0);
        let d = Length::new::<meter>(0.02);

        let one_tube = tube_velocity(mass_flow, density, d, 1);
        let ten_tubes = tube_velocity(mass_flow, density, d, 10);

        assert_relative_eq!(
            one_tube.get::<meter_per_second>(),
            10.0 * ten_tubes.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn layout_heuristics() {
        let shell = Length::new::<meter>(0.3);
        let tube = Length::new::<meter>(0.025);

        assert_relative_eq!(recommended_baffle_spacing(shell).get::<meter>(), 0.15);
        assert_relative_eq!(tube_pitch(tube, 1.25).get::<meter>(), 0.03125);

        let max_tubes = estimate_max_tubes(shell, tube, 1.25);
        assert!(max_tubes > 0);
        // The estimate must at least bound a modest real bundle.
        assert!(max_tubes < 200);
    }
}
