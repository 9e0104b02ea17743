//! Segment-wise finite-difference solver for a counter-current
//! shell-and-tube exchanger.
//!
//! A solve runs in two phases. Setup evaluates the exchanger once: flow
//! areas and velocities, Reynolds numbers, correlation-selected Nusselt
//! numbers, film coefficients, and the overall coefficient, yielding a
//! per-segment conductance. The iterative phase then marches the two
//! temperature sequences to a self-consistent profile with a relaxed
//! Gauss-Seidel sweep.
//!
//! A solve is synchronous and owns all of its state, so independent
//! solves (for example the convergence study, or concurrent requests for
//! different geometries) can run in parallel without locking.

mod convergence;
mod error;
mod profile;
mod sweep;

pub use convergence::ConvergencePoint;
pub use error::SolverError;
pub use profile::{ConvergenceStatus, TemperatureProfile};

use uom::si::{
    f64::{ThermalConductance, ThermodynamicTemperature, Velocity},
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    correlations::{self, TubeArrangement},
    dimensionless,
    geometry::{self, Geometry},
    stream::FluidStream,
    thermal,
};

/// Solves the temperature distribution for one discretization.
///
/// Convenience wrapper around [`Solver::new`] + [`Solver::solve`].
///
/// # Errors
///
/// Returns a [`SolverError`] for a segment count below 1 or a
/// non-positive heat-capacity rate on either stream.
pub fn solve(
    segments: usize,
    geometry: &Geometry,
    hot: &FluidStream,
    cold: &FluidStream,
) -> Result<TemperatureProfile, SolverError> {
    Solver::new(segments, geometry, hot, cold)?.solve()
}

/// Exchanger solver bound to one geometry and one pair of streams.
///
/// The hot stream is on the shell side and the cold stream on the tube
/// side. Inputs are borrowed read-only; each [`solve`](Solver::solve)
/// call owns its working state.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    segments: usize,
    geometry: &'a Geometry,
    hot: &'a FluidStream,
    cold: &'a FluidStream,
}

impl<'a> Solver<'a> {
    /// Creates a solver for `segments` equal segments.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidSegmentCount`] if `segments` is 0.
    pub fn new(
        segments: usize,
        geometry: &'a Geometry,
        hot: &'a FluidStream,
        cold: &'a FluidStream,
    ) -> Result<Self, SolverError> {
        if segments < 1 {
            return Err(SolverError::InvalidSegmentCount { segments });
        }

        Ok(Self {
            segments,
            geometry,
            hot,
            cold,
        })
    }

    /// Runs the solve to completion and returns the temperature profile.
    ///
    /// Iteration exhaustion is not an error: the returned profile carries
    /// [`ConvergenceStatus::MaxIterationsReached`] and remains usable as a
    /// best-effort estimate.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCapacityRate`] if either stream's
    /// `ṁ·cp` is zero, negative, or NaN.
    #[allow(clippy::cast_precision_loss)]
    pub fn solve(&self) -> Result<TemperatureProfile, SolverError> {
        let c_hot = self
            .hot
            .capacity_rate()
            .map_err(|source| SolverError::InvalidCapacityRate { side: "hot", source })?;
        let c_cold = self
            .cold
            .capacity_rate()
            .map_err(|source| SolverError::InvalidCapacityRate {
                side: "cold",
                source,
            })?;

        let geometry = self.geometry;
        let n = self.segments;
        let tube_outer_diameter = geometry.tube_outer_diameter();

        // Flow areas and velocities. The cold stream splits across the
        // tube bores; the hot stream fills the shell around the bundle.
        let tube_flow_area = geometry.tube_count as f64
            * geometry::tube_cross_section_area(geometry.tube_inner_diameter);
        let shell_flow_area = geometry::shell_flow_area(
            geometry.shell_diameter,
            tube_outer_diameter,
            geometry.tube_count,
        );

        let cold_velocity: Velocity = self.cold.mass_flow / (self.cold.density * tube_flow_area);
        let hot_velocity: Velocity = self.hot.mass_flow / (self.hot.density * shell_flow_area);

        let cold_reynolds = dimensionless::reynolds(
            cold_velocity,
            geometry.tube_inner_diameter,
            self.cold.density,
            self.cold.viscosity,
        );
        let hot_reynolds = dimensionless::reynolds(
            hot_velocity,
            geometry.shell_diameter,
            self.hot.density,
            self.hot.viscosity,
        );

        // Tube-side correlation is always evaluated in heating mode, since
        // the cold stream gains heat in this configuration.
        let cold_nusselt = correlations::tube_side_nusselt(cold_reynolds, self.cold.prandtl, true);
        let hot_nusselt = correlations::shell_side_nusselt(
            hot_reynolds,
            self.hot.prandtl,
            TubeArrangement::Staggered,
        );

        let cold_htc = thermal::convective_htc(
            cold_nusselt,
            self.cold.thermal_conductivity,
            geometry.tube_inner_diameter,
        );
        let hot_htc = thermal::convective_htc(
            hot_nusselt,
            self.hot.thermal_conductivity,
            geometry.shell_diameter,
        );

        // Overall coefficient on the inner-area basis.
        let inner_radius = geometry.tube_inner_diameter / 2.0;
        let outer_radius = inner_radius + geometry.tube_wall_thickness;
        let overall_htc = thermal::overall_htc(
            cold_htc,
            hot_htc,
            inner_radius,
            outer_radius,
            geometry.wall_thermal_conductivity,
        );

        let inner_surface_area = geometry::total_tube_surface_area(
            geometry.tube_inner_diameter,
            geometry.length,
            geometry.tube_count,
        );
        let ua_segment: ThermalConductance = overall_htc * inner_surface_area / n as f64;

        // Seed both sequences by linear interpolation between each side's
        // inlet and outlet guess. The cold sequence is laid out spatially:
        // its inlet sits at node N, its outlet guess at node 0.
        let hot_inlet = self.hot.inlet_temperature.get::<kelvin>();
        let hot_outlet_guess = self.hot.outlet_temperature_guess.get::<kelvin>();
        let cold_inlet = self.cold.inlet_temperature.get::<kelvin>();
        let cold_outlet_guess = self.cold.outlet_temperature_guess.get::<kelvin>();

        let mut hot_temperatures: Vec<f64> = (0..=n)
            .map(|i| {
                let ratio = i as f64 / n as f64;
                hot_inlet - ratio * (hot_inlet - hot_outlet_guess)
            })
            .collect();
        let mut cold_temperatures: Vec<f64> = (0..=n)
            .map(|i| {
                let ratio = i as f64 / n as f64;
                cold_outlet_guess + ratio * (cold_inlet - cold_outlet_guess)
            })
            .collect();

        let status = sweep::run(
            &mut hot_temperatures,
            &mut cold_temperatures,
            hot_inlet,
            cold_inlet,
            ua_segment.get::<watt_per_kelvin>(),
            c_hot.get::<watt_per_kelvin>(),
            c_cold.get::<watt_per_kelvin>(),
        );

        let dx = geometry.length / n as f64;
        Ok(TemperatureProfile {
            hot_temperatures: hot_temperatures
                .into_iter()
                .map(ThermodynamicTemperature::new::<kelvin>)
                .collect(),
            cold_temperatures: cold_temperatures
                .into_iter()
                .map(ThermodynamicTemperature::new::<kelvin>)
                .collect(),
            positions: (0..=n).map(|i| dx * i as f64).collect(),
            hot_reynolds,
            cold_reynolds,
            hot_nusselt,
            cold_nusselt,
            hot_htc,
            cold_htc,
            overall_htc,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassRate, ThermalConductivity, ThermodynamicTemperature},
        length::meter,
        mass_rate::kilogram_per_second,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::fluid::Fluid;

    fn water_case() -> (Geometry, FluidStream, FluidStream) {
        let geometry = Geometry {
            length: Length::new::<meter>(2.0),
            shell_diameter: Length::new::<meter>(0.2),
            tube_inner_diameter: Length::new::<meter>(0.02),
            tube_wall_thickness: Length::new::<meter>(0.002),
            tube_count: 10,
            wall_thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
        };
        let hot = FluidStream::from_fluid(
            Fluid::Water,
            ThermodynamicTemperature::new::<kelvin>(353.0),
            ThermodynamicTemperature::new::<kelvin>(323.0),
            MassRate::new::<kilogram_per_second>(2.0),
        );
        let cold = FluidStream::from_fluid(
            Fluid::Water,
            ThermodynamicTemperature::new::<kelvin>(293.0),
            ThermodynamicTemperature::new::<kelvin>(313.0),
            MassRate::new::<kilogram_per_second>(1.5),
        );
        (geometry, hot, cold)
    }

    #[test]
    fn rejects_zero_segments() {
        let (geometry, hot, cold) = water_case();
        assert!(matches!(
            Solver::new(0, &geometry, &hot, &cold),
            Err(SolverError::InvalidSegmentCount { segments: 0 })
        ));
    }

    #[test]
    fn rejects_zero_capacity_rate() {
        let (geometry, hot, mut cold) = water_case();
        cold.mass_flow = MassRate::new::<kilogram_per_second>(0.0);

        let result = solve(10, &geometry, &hot, &cold);
        assert!(matches!(
            result,
            Err(SolverError::InvalidCapacityRate { side: "cold", .. })
        ));
    }

    #[test]
    fn boundary_conditions_hold_for_any_segment_count() {
        let (geometry, hot, cold) = water_case();

        for n in [1, 2, 7, 50] {
            let profile = solve(n, &geometry, &hot, &cold).unwrap();
            assert_eq!(profile.segments(), n);
            assert_relative_eq!(profile.hot_temperatures[0].get::<kelvin>(), 353.0);
            assert_relative_eq!(profile.cold_temperatures[n].get::<kelvin>(), 293.0);
        }
    }

    #[test]
    fn setup_quantities_are_physical() {
        let (geometry, hot, cold) = water_case();
        let profile = solve(50, &geometry, &hot, &cold).unwrap();

        assert!(profile.cold_reynolds > 2300.0, "tube side should be turbulent");
        assert!(profile.hot_reynolds > 2000.0, "shell side should be turbulent");
        assert!(profile.cold_nusselt > 3.66);
        assert!(profile.hot_nusselt > 0.0);

        // The overall coefficient cannot exceed either film coefficient.
        assert!(profile.overall_htc < profile.hot_htc.max(profile.cold_htc));
    }
}
