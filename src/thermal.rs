//! Closed-form thermal relations: convective and overall heat-transfer
//! coefficients, log-mean temperature difference, and the
//! effectiveness-NTU performance method.

use uom::si::{
    f64::{
        HeatTransfer, Length, Power, TemperatureInterval, ThermalConductance, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureDifference;

/// Flow arrangement for the effectiveness-NTU relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowArrangement {
    #[default]
    CounterCurrent,
    ParallelFlow,
    /// Cross-flow with both fluids unmixed (approximate relation).
    CrossFlow,
}

/// Convective heat-transfer coefficient `Nu·k/D`.
#[must_use]
pub fn convective_htc(
    nusselt: f64,
    thermal_conductivity: ThermalConductivity,
    diameter: Length,
) -> HeatTransfer {
    nusselt * thermal_conductivity / diameter
}

/// Overall heat-transfer coefficient on the inner-area basis.
///
/// Series resistances: inner convection, conduction through the
/// cylindrical tube wall, and outer convection referred to the inner
/// radius.
#[must_use]
pub fn overall_htc(
    h_inner: HeatTransfer,
    h_outer: HeatTransfer,
    r_inner: Length,
    r_outer: Length,
    wall_thermal_conductivity: ThermalConductivity,
) -> HeatTransfer {
    let wall_log = (r_outer / r_inner).get::<ratio>().ln();
    let resistance = 1.0 / h_inner
        + r_inner * wall_log / wall_thermal_conductivity
        + r_inner / (h_outer * r_outer);

    1.0 / resistance
}

/// Log-mean temperature difference for counter-current flow.
///
/// Degenerate inputs never fail: a non-positive end difference
/// (temperature crossover) falls back to the arithmetic mean of the two
/// end differences, and nearly equal end differences return that
/// difference directly to avoid the logarithm singularity.
#[must_use]
pub fn lmtd_counter_current(
    hot_inlet: ThermodynamicTemperature,
    hot_outlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
    cold_outlet: ThermodynamicTemperature,
) -> TemperatureInterval {
    let dt1 = hot_inlet.minus(cold_outlet).get::<delta_kelvin>();
    let dt2 = hot_outlet.minus(cold_inlet).get::<delta_kelvin>();

    TemperatureInterval::new::<delta_kelvin>(lmtd_raw(dt1, dt2))
}

/// Log-mean temperature difference for parallel flow.
///
/// Shares the degenerate-input handling of [`lmtd_counter_current`].
#[must_use]
pub fn lmtd_parallel_flow(
    hot_inlet: ThermodynamicTemperature,
    hot_outlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
    cold_outlet: ThermodynamicTemperature,
) -> TemperatureInterval {
    let dt1 = hot_inlet.minus(cold_inlet).get::<delta_kelvin>();
    let dt2 = hot_outlet.minus(cold_outlet).get::<delta_kelvin>();

    TemperatureInterval::new::<delta_kelvin>(lmtd_raw(dt1, dt2))
}

fn lmtd_raw(dt1: f64, dt2: f64) -> f64 {
    if dt1 <= 0.0 || dt2 <= 0.0 {
        // Non-physical temperature ordering; report the arithmetic mean
        // rather than taking the logarithm of a non-positive number.
        return ((dt1 + dt2) / 2.0).abs();
    }

    if (dt1 - dt2).abs() < 1e-6 {
        return dt1;
    }

    (dt1 - dt2) / (dt1 / dt2).ln()
}

/// Number of transfer units `UA / C_min`.
#[must_use]
pub fn ntu(ua: ThermalConductance, c_min: ThermalConductance) -> f64 {
    (ua / c_min).get::<ratio>()
}

/// Effectiveness from NTU and capacity ratio for a given arrangement.
///
/// A capacity ratio below 1e-6 is treated as one stream having infinite
/// heat capacity (phase change), for which all arrangements share
/// `ε = 1 − e^(−NTU)`.
#[must_use]
pub fn effectiveness_ntu(ntu: f64, capacity_ratio: f64, arrangement: FlowArrangement) -> f64 {
    if capacity_ratio < 1e-6 {
        return 1.0 - (-ntu).exp();
    }

    match arrangement {
        FlowArrangement::CounterCurrent => {
            if (capacity_ratio - 1.0).abs() < 1e-6 {
                ntu / (1.0 + ntu)
            } else {
                let exp_term = (-ntu * (1.0 - capacity_ratio)).exp();
                (1.0 - exp_term) / (1.0 - capacity_ratio * exp_term)
            }
        }
        FlowArrangement::ParallelFlow => {
            (1.0 - (-ntu * (1.0 + capacity_ratio)).exp()) / (1.0 + capacity_ratio)
        }
        FlowArrangement::CrossFlow => {
            1.0 - ((1.0 / capacity_ratio)
                * ntu.powf(0.22)
                * ((-capacity_ratio * ntu.powf(0.78)).exp() - 1.0))
                .exp()
        }
    }
}

/// Heat transferred by a stream between its inlet and outlet,
/// `ṁ·cp·|T_in − T_out|`.
#[must_use]
pub fn actual_heat_transfer(
    capacity_rate: ThermalConductance,
    inlet: ThermodynamicTemperature,
    outlet: ThermodynamicTemperature,
) -> Power {
    capacity_rate * inlet.minus(outlet).abs()
}

/// Thermodynamic maximum heat transfer, `C_min·(T_hot,in − T_cold,in)`.
#[must_use]
pub fn maximum_heat_transfer(
    c_min: ThermalConductance,
    hot_inlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
) -> Power {
    c_min * hot_inlet.minus(cold_inlet)
}

/// Effectiveness as the ratio of actual to maximum heat transfer.
///
/// Returns `0.0` when the maximum is vanishingly small (equal inlet
/// temperatures) to avoid dividing by zero.
#[must_use]
pub fn effectiveness_from_heat(q_actual: Power, q_max: Power) -> f64 {
    if q_max < Power::new::<watt>(1e-6) {
        return 0.0;
    }

    (q_actual / q_max).get::<ratio>()
}

/// Fouling factor from clean and fouled overall coefficients,
/// `1/U_dirty − 1/U_clean`, in m²·K/W.
#[must_use]
pub fn fouling_factor(u_clean: HeatTransfer, u_dirty: HeatTransfer) -> f64 {
    let u_clean = u_clean.get::<watt_per_square_meter_kelvin>();
    let u_dirty = u_dirty.get::<watt_per_square_meter_kelvin>();

    1.0 / u_dirty - 1.0 / u_clean
}
