//! Fluid stream inputs for the exchanger solver.

use std::ops::Deref;

use uom::si::f64::{
    DynamicViscosity, MassDensity, MassRate, SpecificHeatCapacity, ThermalConductance,
    ThermalConductivity, ThermodynamicTemperature,
};

use crate::{
    fluid::Fluid,
    support::constraint::{Constrained, ConstraintResult, StrictlyPositive},
};

/// One side of the exchanger: a fluid stream with its transport properties.
///
/// Immutable once constructed; the solver borrows it read-only. The outlet
/// temperature is only a guess that seeds the iteration and is not trusted
/// as a final value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidStream {
    /// Inlet temperature (a fixed boundary condition).
    pub inlet_temperature: ThermodynamicTemperature,
    /// Outlet temperature guess used to seed the iteration.
    pub outlet_temperature_guess: ThermodynamicTemperature,
    pub mass_flow: MassRate,
    pub specific_heat: SpecificHeatCapacity,
    pub density: MassDensity,
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    /// Prandtl number at the stream's representative temperature.
    pub prandtl: f64,
}

impl FluidStream {
    /// Builds a stream using a named fluid's estimated properties at the
    /// inlet temperature.
    #[must_use]
    pub fn from_fluid(
        fluid: Fluid,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature_guess: ThermodynamicTemperature,
        mass_flow: MassRate,
    ) -> Self {
        let props = fluid.properties(inlet_temperature);

        Self {
            inlet_temperature,
            outlet_temperature_guess,
            mass_flow,
            specific_heat: props.specific_heat,
            density: props.density,
            thermal_conductivity: props.thermal_conductivity,
            viscosity: props.viscosity,
            prandtl: props.prandtl,
        }
    }

    /// The stream's heat-capacity rate `ṁ·cp`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is zero, negative, or not a number.
    pub fn capacity_rate(&self) -> ConstraintResult<CapacityRate> {
        CapacityRate::from_mass_flow_and_specific_heat(self.mass_flow, self.specific_heat)
    }
}

/// Heat-capacity rate (`ṁ·cp`) of a stream, constrained to be strictly
/// positive so downstream divisions are always defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacityRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacityRate {
    /// Creates a [`CapacityRate`] from a quantity with thermal-conductance
    /// units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Creates a [`CapacityRate`] from a mass flow and specific heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_flow_and_specific_heat(
        mass_flow: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_flow * specific_heat)
    }
}

impl Deref for CapacityRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin, thermodynamic_temperature::kelvin,
    };

    #[test]
    fn capacity_rate_from_flow_and_cp() -> ConstraintResult<()> {
        let rate = CapacityRate::from_mass_flow_and_specific_heat(
            MassRate::new::<kilogram_per_second>(2.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
        )?;

        assert_relative_eq!(rate.get::<watt_per_kelvin>(), 8360.0);
        Ok(())
    }

    #[test]
    fn zero_mass_flow_is_rejected() {
        let result = CapacityRate::from_mass_flow_and_specific_heat(
            MassRate::new::<kilogram_per_second>(0.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn stream_from_named_fluid_carries_derived_prandtl() {
        let stream = FluidStream::from_fluid(
            Fluid::Water,
            ThermodynamicTemperature::new::<kelvin>(293.15),
            ThermodynamicTemperature::new::<kelvin>(313.15),
            MassRate::new::<kilogram_per_second>(1.5),
        );

        let props = Fluid::Water.properties(stream.inlet_temperature);
        assert_relative_eq!(stream.prandtl, props.prandtl);
        assert!(stream.capacity_rate().is_ok());
    }
}
