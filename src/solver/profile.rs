//! Solver output types.

use uom::si::f64::{HeatTransfer, Length, ThermodynamicTemperature};

/// Outcome of the iterative sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// The maximum node-temperature change dropped below the tolerance.
    Converged {
        /// Number of iterations taken.
        iterations: usize,
    },
    /// The iteration cap was reached first. The profile is still a usable
    /// best-effort estimate, but should not be trusted for design work.
    MaxIterationsReached,
}

/// Node temperatures and derived performance numbers for a solved
/// exchanger.
///
/// Both temperature sequences hold `N + 1` nodes for `N` segments.
/// Hot-side nodes are indexed along the hot flow direction, so
/// `hot_temperatures[0]` is the hot inlet. Cold-side indexing is spatial,
/// not directional: the cold fluid flows opposite to the hot fluid, so
/// `cold_temperatures[N]` is the cold inlet and `cold_temperatures[0]`
/// the cold outlet. Index `i` of either sequence refers to the same axial
/// position, `positions[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    pub hot_temperatures: Vec<ThermodynamicTemperature>,
    pub cold_temperatures: Vec<ThermodynamicTemperature>,
    /// Axial node positions measured from the hot-inlet end.
    pub positions: Vec<Length>,
    pub hot_reynolds: f64,
    pub cold_reynolds: f64,
    pub hot_nusselt: f64,
    pub cold_nusselt: f64,
    /// Shell-side convective coefficient.
    pub hot_htc: HeatTransfer,
    /// Tube-side convective coefficient.
    pub cold_htc: HeatTransfer,
    /// Overall coefficient on the inner-area basis.
    pub overall_htc: HeatTransfer,
    pub status: ConvergenceStatus,
}

impl TemperatureProfile {
    /// Number of segments the exchanger was discretized into.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.hot_temperatures.len() - 1
    }

    /// Hot stream outlet temperature (the far end, node `N`).
    #[must_use]
    pub fn hot_outlet(&self) -> ThermodynamicTemperature {
        self.hot_temperatures[self.segments()]
    }

    /// Cold stream outlet temperature (the hot-inlet end, node 0).
    #[must_use]
    pub fn cold_outlet(&self) -> ThermodynamicTemperature {
        self.cold_temperatures[0]
    }

    /// Whether the sweep converged within the iteration cap.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, ConvergenceStatus::Converged { .. })
    }
}
