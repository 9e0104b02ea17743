//! Discretization-refinement study.

use uom::si::f64::{HeatTransfer, ThermodynamicTemperature};

use super::{Solver, SolverError};

/// One row of a convergence study: outlet conditions and the overall
/// coefficient at a given segment count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub segments: usize,
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
    pub overall_htc: HeatTransfer,
}

impl Solver<'_> {
    /// Re-runs the full solve for each segment count in
    /// `min_segments..=max_segments`, advancing by `step`.
    ///
    /// Each run is fully independent; nothing is shared between them, so
    /// the study gives a clean picture of how outlet temperatures settle
    /// as the discretization is refined. A `step` of 0 is treated as 1.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if any individual solve rejects its
    /// inputs (for example `min_segments` of 0).
    pub fn convergence_study(
        &self,
        min_segments: usize,
        max_segments: usize,
        step: usize,
    ) -> Result<Vec<ConvergencePoint>, SolverError> {
        let step = step.max(1);
        let mut points = Vec::new();

        let mut segments = min_segments;
        while segments <= max_segments {
            let solver = Solver::new(segments, self.geometry, self.hot, self.cold)?;
            let profile = solver.solve()?;

            points.push(ConvergencePoint {
                segments,
                hot_outlet: profile.hot_outlet(),
                cold_outlet: profile.cold_outlet(),
                overall_htc: profile.overall_htc,
            });

            segments += step;
        }

        Ok(points)
    }
}
