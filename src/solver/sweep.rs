//! Relaxed Gauss-Seidel sweep over the two node-temperature buffers.
//!
//! The staggered forward/backward sweep encodes counter-current coupling
//! directly: the hot stream marches node 0 → N while the cold stream
//! marches node N → 0, each reading the other's latest values. The fixed
//! 0.5 relaxation damps the oscillation that two mutually dependent
//! sequences would otherwise exhibit when updated in lockstep.
//!
//! The kernel works on plain kelvin buffers; typed quantities stop at the
//! solver boundary.

use super::ConvergenceStatus;

pub(super) const MAX_ITERATIONS: usize = 1000;
pub(super) const TOLERANCE_KELVIN: f64 = 1e-6;
pub(super) const RELAXATION_FACTOR: f64 = 0.5;

/// Iterates both temperature buffers to a self-consistent profile.
///
/// `hot` and `cold` hold `N + 1` nodes and arrive seeded with an initial
/// guess; `hot[0]` and `cold[N]` are fixed boundary conditions re-imposed
/// around the relaxation step every iteration. All rates are in SI units
/// (W/K).
pub(super) fn run(
    hot: &mut [f64],
    cold: &mut [f64],
    hot_inlet: f64,
    cold_inlet: f64,
    ua_segment: f64,
    c_hot: f64,
    c_cold: f64,
) -> ConvergenceStatus {
    let n = hot.len() - 1;

    for iteration in 0..MAX_ITERATIONS {
        let hot_old = hot.to_vec();
        let cold_old = cold.to_vec();

        // Hot sweep, following the hot flow (node 0 → N). Each segment's
        // driving difference uses the average of the two cold nodes that
        // straddle it spatially.
        for i in 1..=n {
            let cold_index = n - i;
            let cold_local = (cold[cold_index] + cold[cold_index + 1]) / 2.0;
            let heat_transfer = ua_segment * (hot[i - 1] - cold_local);
            hot[i] = hot[i - 1] - heat_transfer / c_hot;
        }

        // Cold sweep, following the cold flow (node N → 0).
        for i in (0..n).rev() {
            let hot_index = n - i;
            let hot_local = (hot[hot_index - 1] + hot[hot_index]) / 2.0;
            let heat_transfer = ua_segment * (hot_local - cold[i + 1]);
            cold[i] = cold[i + 1] + heat_transfer / c_cold;
        }

        hot[0] = hot_inlet;
        cold[n] = cold_inlet;

        for i in 0..=n {
            hot[i] = RELAXATION_FACTOR * hot[i] + (1.0 - RELAXATION_FACTOR) * hot_old[i];
            cold[i] = RELAXATION_FACTOR * cold[i] + (1.0 - RELAXATION_FACTOR) * cold_old[i];
        }

        // Relaxation blends the boundary nodes toward their old values,
        // so the boundary conditions must be re-imposed a second time.
        hot[0] = hot_inlet;
        cold[n] = cold_inlet;

        let max_change = hot
            .iter()
            .zip(&hot_old)
            .chain(cold.iter().zip(&cold_old))
            .map(|(new, old)| (new - old).abs())
            .fold(0.0_f64, f64::max);

        if max_change < TOLERANCE_KELVIN {
            return ConvergenceStatus::Converged {
                iterations: iteration + 1,
            };
        }
    }

    ConvergenceStatus::MaxIterationsReached
}
