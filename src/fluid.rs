//! Closed-form thermophysical property estimates for a few common fluids.
//!
//! These are engineering approximations suitable for preliminary sizing,
//! not equation-of-state evaluations. Each estimate is a pure function of
//! temperature and is valid over ordinary liquid/gas operating ranges.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::dimensionless;

/// Thermophysical property bundle at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    /// Prandtl number derived from the other properties.
    pub prandtl: f64,
}

/// Canonical identifiers for the fluids with built-in property estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fluid {
    #[default]
    Water,
    Air,
    /// A generic light mineral oil.
    Oil,
}

impl Fluid {
    /// Estimates the fluid's properties at the given temperature.
    #[must_use]
    pub fn properties(self, temperature: ThermodynamicTemperature) -> FluidProperties {
        let t_c = temperature.get::<degree_celsius>();
        let t_k = temperature.get::<kelvin>();

        let (cp, rho, k, mu) = match self {
            Fluid::Water => (
                4180.0,
                1000.0 - 0.2 * t_c,
                0.6 + 0.002 * t_c,
                0.001 * (1.0 - 0.02 * t_c / 20.0),
            ),
            Fluid::Air => (
                1005.0,
                // Ideal-gas density referenced to 1.225 kg/m³ at 0 °C.
                1.225 * (273.15 / t_k),
                0.024 + 0.000_07 * t_c,
                1.81e-5 * (1.0 + 0.0035 * t_c / 20.0),
            ),
            Fluid::Oil => (2100.0, 850.0, 0.14, 0.01 * (-0.05 * t_c).exp()),
        };

        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp);
        let viscosity = DynamicViscosity::new::<pascal_second>(mu);
        let thermal_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(k);

        FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            specific_heat,
            thermal_conductivity,
            viscosity,
            prandtl: dimensionless::prandtl(specific_heat, viscosity, thermal_conductivity),
        }
    }
}
