//! Dimensionless groups used in convection analysis.
//!
//! All functions are pure and total over physically meaningful inputs.
//! Dimensionless values are plain `f64`, extracted from typed quantities
//! at this boundary.

use uom::si::{
    f64::{
        DynamicViscosity, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity, Velocity,
    },
    ratio::ratio,
};

/// Reynolds number `ρ·v·D/μ` for a flow with characteristic diameter `D`.
#[must_use]
pub fn reynolds(
    velocity: Velocity,
    diameter: Length,
    density: MassDensity,
    viscosity: DynamicViscosity,
) -> f64 {
    (density * velocity * diameter / viscosity).get::<ratio>()
}

/// Prandtl number `cp·μ/k`, the ratio of momentum to thermal diffusivity.
#[must_use]
pub fn prandtl(
    specific_heat: SpecificHeatCapacity,
    viscosity: DynamicViscosity,
    thermal_conductivity: ThermalConductivity,
) -> f64 {
    (specific_heat * viscosity / thermal_conductivity).get::<ratio>()
}

/// Peclet number `Re·Pr`.
#[must_use]
pub fn peclet(reynolds: f64, prandtl: f64) -> f64 {
    reynolds * prandtl
}

/// Graetz number `Re·Pr·D/L`, used to judge thermal entrance effects.
#[must_use]
pub fn graetz(reynolds: f64, prandtl: f64, diameter: Length, length: Length) -> f64 {
    reynolds * prandtl * (diameter / length).get::<ratio>()
}
