//! Plain-text renderings of solver results.
//!
//! The solver returns pure data; everything here formats that data into
//! strings the caller can print or persist. No I/O happens in this
//! module, which keeps the renderers testable and the solve free of side
//! effects.

use uom::si::{
    f64::ThermodynamicTemperature,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::{
    geometry::Geometry,
    solver::{ConvergencePoint, TemperatureProfile},
    stream::FluidStream,
};

/// Renders the axial temperature profile as CSV.
///
/// The cold column is reported against the same axial position as the hot
/// column, so the cold sequence is read back-to-front (its inlet is at
/// the far end).
#[must_use]
pub fn temperature_profile_csv(profile: &TemperatureProfile) -> String {
    let mut out = String::from("Position_m,Hot_Temp_K,Hot_Temp_C,Cold_Temp_K,Cold_Temp_C\n");
    let n = profile.segments();

    for i in 0..=n {
        let hot = profile.hot_temperatures[i];
        let cold = profile.cold_temperatures[n - i];
        out.push_str(&format!(
            "{:.4},{:.4},{:.4},{:.4},{:.4}\n",
            profile.positions[i].get::<meter>(),
            hot.get::<kelvin>(),
            hot.get::<degree_celsius>(),
            cold.get::<kelvin>(),
            cold.get::<degree_celsius>(),
        ));
    }

    out
}

/// Renders a convergence study as CSV.
#[must_use]
pub fn convergence_csv(points: &[ConvergencePoint]) -> String {
    let mut out = String::from("Segments,Hot_Outlet_K,Cold_Outlet_K,Overall_HTC\n");

    for point in points {
        out.push_str(&format!(
            "{},{:.4},{:.4},{:.4}\n",
            point.segments,
            point.hot_outlet.get::<kelvin>(),
            point.cold_outlet.get::<kelvin>(),
            point.overall_htc.get::<watt_per_square_meter_kelvin>(),
        ));
    }

    out
}

/// Renders a human-readable analysis summary.
#[must_use]
pub fn summary(
    geometry: &Geometry,
    hot: &FluidStream,
    cold: &FluidStream,
    profile: &TemperatureProfile,
) -> String {
    fn temperature_line(label: &str, t: ThermodynamicTemperature) -> String {
        format!(
            "  {label}: {:.2} K ({:.2} °C)\n",
            t.get::<kelvin>(),
            t.get::<degree_celsius>()
        )
    }

    let mut out = String::from("=== HEAT EXCHANGER ANALYSIS SUMMARY ===\n\n");

    out.push_str("Geometry:\n");
    out.push_str(&format!(
        "  Length: {:.3} m\n",
        geometry.length.get::<meter>()
    ));
    out.push_str(&format!(
        "  Shell diameter: {:.3} m\n",
        geometry.shell_diameter.get::<meter>()
    ));
    out.push_str(&format!(
        "  Tube inner diameter: {:.3} m\n",
        geometry.tube_inner_diameter.get::<meter>()
    ));
    out.push_str(&format!("  Number of tubes: {}\n", geometry.tube_count));
    out.push_str(&format!(
        "  Wall thermal conductivity: {:.1} W/m·K\n\n",
        geometry
            .wall_thermal_conductivity
            .get::<watt_per_meter_kelvin>()
    ));

    out.push_str("Streams:\n");
    out.push_str(&format!(
        "  Hot mass flow: {:.3} kg/s (shell side)\n",
        hot.mass_flow.get::<kilogram_per_second>()
    ));
    out.push_str(&format!(
        "  Cold mass flow: {:.3} kg/s (tube side)\n\n",
        cold.mass_flow.get::<kilogram_per_second>()
    ));

    out.push_str("Calculated Parameters:\n");
    out.push_str(&format!("  Hot fluid Reynolds: {:.1}\n", profile.hot_reynolds));
    out.push_str(&format!(
        "  Cold fluid Reynolds: {:.1}\n",
        profile.cold_reynolds
    ));
    out.push_str(&format!("  Hot fluid Nusselt: {:.2}\n", profile.hot_nusselt));
    out.push_str(&format!(
        "  Cold fluid Nusselt: {:.2}\n",
        profile.cold_nusselt
    ));
    out.push_str(&format!(
        "  Hot fluid HTC: {:.1} W/m²·K\n",
        profile.hot_htc.get::<watt_per_square_meter_kelvin>()
    ));
    out.push_str(&format!(
        "  Cold fluid HTC: {:.1} W/m²·K\n",
        profile.cold_htc.get::<watt_per_square_meter_kelvin>()
    ));
    out.push_str(&format!(
        "  Overall HTC: {:.1} W/m²·K\n\n",
        profile.overall_htc.get::<watt_per_square_meter_kelvin>()
    ));

    out.push_str("Temperature Results:\n");
    out.push_str(&temperature_line("Hot inlet", hot.inlet_temperature));
    out.push_str(&temperature_line("Hot outlet", profile.hot_outlet()));
    out.push_str(&temperature_line("Cold inlet", cold.inlet_temperature));
    out.push_str(&temperature_line("Cold outlet", profile.cold_outlet()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::f64::{HeatTransfer, Length};
    use uom::si::thermodynamic_temperature::kelvin;

    use crate::solver::ConvergenceStatus;

    fn t(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn sample_profile() -> TemperatureProfile {
        TemperatureProfile {
            hot_temperatures: vec![t(350.0), t(340.0), t(330.0)],
            cold_temperatures: vec![t(310.0), t(305.0), t(300.0)],
            positions: vec![
                Length::new::<meter>(0.0),
                Length::new::<meter>(0.5),
                Length::new::<meter>(1.0),
            ],
            hot_reynolds: 40_000.0,
            cold_reynolds: 12_000.0,
            hot_nusselt: 160.0,
            cold_nusselt: 85.0,
            hot_htc: HeatTransfer::new::<watt_per_square_meter_kelvin>(550.0),
            cold_htc: HeatTransfer::new::<watt_per_square_meter_kelvin>(2600.0),
            overall_htc: HeatTransfer::new::<watt_per_square_meter_kelvin>(520.0),
            status: ConvergenceStatus::Converged { iterations: 42 },
        }
    }

    #[test]
    fn profile_csv_aligns_cold_stream_spatially() {
        let csv = temperature_profile_csv(&sample_profile());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Position_m,Hot_Temp_K,Hot_Temp_C,Cold_Temp_K,Cold_Temp_C");
        // First data row pairs hot node 0 with cold node N.
        assert_eq!(lines[1], "0.0000,350.0000,76.8500,300.0000,26.8500");
        assert_eq!(lines[3], "1.0000,330.0000,56.8500,310.0000,36.8500");
    }

    #[test]
    fn convergence_csv_has_one_row_per_point() {
        let points = vec![
            ConvergencePoint {
                segments: 10,
                hot_outlet: t(330.0),
                cold_outlet: t(310.0),
                overall_htc: HeatTransfer::new::<watt_per_square_meter_kelvin>(520.0),
            },
            ConvergencePoint {
                segments: 20,
                hot_outlet: t(329.5),
                cold_outlet: t(310.4),
                overall_htc: HeatTransfer::new::<watt_per_square_meter_kelvin>(520.0),
            },
        ];

        let csv = convergence_csv(&points);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Segments,Hot_Outlet_K,Cold_Outlet_K,Overall_HTC");
        assert!(lines[1].starts_with("10,330.0000,310.0000,"));
        assert!(lines[2].starts_with("20,329.5000,310.4000,"));
    }
}
