//! # Shelltube
//!
//! Thermal analysis of counter-current shell-and-tube heat exchangers.
//!
//! The exchanger is discretized into axial segments and the two stream
//! temperature profiles are iterated to self-consistency with a relaxed
//! Gauss-Seidel sweep. Film coefficients come from standard Nusselt
//! correlations selected by flow regime.
//!
//! ## Crate layout
//!
//! - [`solver`]: The segment-wise finite-difference solver and its
//!   convergence study.
//! - [`stream`]: Stream state and heat-capacity rates.
//! - [`fluid`]: Temperature-dependent property estimates for common
//!   working fluids.
//! - [`geometry`]: Exchanger geometry and derived flow areas.
//! - [`dimensionless`]: Reynolds, Prandtl, and related groups.
//! - [`correlations`]: Nusselt correlations and regime selection.
//! - [`thermal`]: Heat-transfer relations (overall coefficients, LMTD,
//!   effectiveness-NTU).
//! - [`report`]: Plain-text renderings of solver results.
//! - [`support`]: Supporting utilities used across the crate.
//!
//! ## Example
//!
//! ```
//! use shelltube::{solve, Fluid, FluidStream, Geometry};
//! use uom::si::{
//!     f64::{Length, MassRate, ThermalConductivity, ThermodynamicTemperature},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let geometry = Geometry {
//!     length: Length::new::<meter>(2.0),
//!     shell_diameter: Length::new::<meter>(0.2),
//!     tube_inner_diameter: Length::new::<meter>(0.02),
//!     tube_wall_thickness: Length::new::<meter>(0.002),
//!     tube_count: 10,
//!     wall_thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
//! };
//!
//! let hot = FluidStream::from_fluid(
//!     Fluid::Water,
//!     ThermodynamicTemperature::new::<kelvin>(353.0),
//!     ThermodynamicTemperature::new::<kelvin>(323.0),
//!     MassRate::new::<kilogram_per_second>(2.0),
//! );
//! let cold = FluidStream::from_fluid(
//!     Fluid::Water,
//!     ThermodynamicTemperature::new::<kelvin>(293.0),
//!     ThermodynamicTemperature::new::<kelvin>(313.0),
//!     MassRate::new::<kilogram_per_second>(1.5),
//! );
//!
//! let profile = solve(50, &geometry, &hot, &cold)?;
//!
//! assert!(profile.is_converged());
//! assert!(profile.hot_outlet() < hot.inlet_temperature);
//! assert!(profile.cold_outlet() > cold.inlet_temperature);
//! # Ok::<(), shelltube::SolverError>(())
//! ```

pub mod correlations;
pub mod dimensionless;
pub mod fluid;
pub mod geometry;
pub mod report;
pub mod solver;
pub mod stream;
pub mod support;
pub mod thermal;

pub use fluid::Fluid;
pub use geometry::Geometry;
pub use solver::{
    ConvergencePoint, ConvergenceStatus, Solver, SolverError, TemperatureProfile, solve,
};
pub use stream::{CapacityRate, FluidStream};
