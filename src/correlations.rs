//! Nusselt-number correlations and regime-based selection.
//!
//! Individual correlations are total over all inputs: outside their
//! documented validity range they return the sentinel `0.0` instead of
//! failing, and the selector functions ([`tube_side_nusselt`],
//! [`shell_side_nusselt`]) route around sentinel results to a correlation
//! that is valid for the regime.

/// Tube layout within the shell, as seen by the cross-flow stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TubeArrangement {
    /// Tubes aligned in rows.
    Inline,
    /// Tubes offset between rows.
    #[default]
    Staggered,
}

/// Dittus-Boelter correlation for turbulent tube flow,
/// `Nu = 0.023·Re^0.8·Pr^n`.
///
/// The Prandtl exponent `n` is 0.4 when the fluid is being heated and 0.3
/// when cooled. Returns `0.0` below Re = 2300 (laminar flow).
#[must_use]
pub fn dittus_boelter(reynolds: f64, prandtl: f64, heating: bool) -> f64 {
    if reynolds < 2300.0 {
        return 0.0;
    }

    let n = if heating { 0.4 } else { 0.3 };
    0.023 * reynolds.powf(0.8) * prandtl.powf(n)
}

/// Sieder-Tate correlation for turbulent tube flow with a wall-to-bulk
/// viscosity correction, `Nu = 0.027·Re^0.8·Pr^⅓·(μ/μ_w)^0.14`.
///
/// Returns `0.0` below Re = 2300.
#[must_use]
pub fn sieder_tate(reynolds: f64, prandtl: f64, viscosity_ratio: f64) -> f64 {
    if reynolds < 2300.0 {
        return 0.0;
    }

    0.027 * reynolds.powf(0.8) * prandtl.powf(1.0 / 3.0) * viscosity_ratio.powf(0.14)
}

/// Gnielinski correlation for transitional and turbulent tube flow,
/// using the Petukhov friction factor.
///
/// Returns `0.0` outside its validity range of 2300 < Re < 5·10⁶.
#[must_use]
pub fn gnielinski(reynolds: f64, prandtl: f64) -> f64 {
    if reynolds < 2300.0 || reynolds > 5e6 {
        return 0.0;
    }

    let f = (0.79 * reynolds.ln() - 1.64).powi(-2);
    let numerator = (f / 8.0) * (reynolds - 1000.0) * prandtl;
    let denominator = 1.0 + 12.7 * (f / 8.0).sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0);

    numerator / denominator
}

/// Laminar tube flow at constant wall temperature.
///
/// Uses the developing-flow relation `Nu = 1.86·Gz^⅓` when the Graetz
/// number exceeds 100, and the fully developed constant 3.66 otherwise.
#[must_use]
pub fn laminar_constant_wall_temp(graetz: f64) -> f64 {
    if graetz > 100.0 {
        1.86 * graetz.powf(1.0 / 3.0)
    } else {
        3.66
    }
}

/// Fully developed laminar tube flow at constant heat flux.
#[must_use]
pub fn laminar_constant_heat_flux() -> f64 {
    4.36
}

/// Cross-flow over a tube bundle.
///
/// Below Re = 2000 a laminar flat-plate-like relation applies; above it,
/// the Grimison-style turbulent coefficients depend on the arrangement.
#[must_use]
pub fn shell_side_tube_bundles(reynolds: f64, prandtl: f64, arrangement: TubeArrangement) -> f64 {
    if reynolds < 2000.0 {
        return 0.664 * reynolds.sqrt() * prandtl.powf(1.0 / 3.0);
    }

    match arrangement {
        TubeArrangement::Inline => 0.27 * reynolds.powf(0.63) * prandtl.powf(0.36),
        TubeArrangement::Staggered => 0.36 * reynolds.powf(0.55) * prandtl.powf(0.36),
    }
}

/// Selects a tube-side Nusselt number for the flow regime.
///
/// Prefers Gnielinski above Re = 10⁴ when it yields a positive value,
/// falls back to Dittus-Boelter above Re = 2300, and uses the fully
/// developed laminar constant 3.66 otherwise.
#[must_use]
pub fn tube_side_nusselt(reynolds: f64, prandtl: f64, heating: bool) -> f64 {
    if reynolds > 10_000.0 {
        let nu = gnielinski(reynolds, prandtl);
        if nu > 0.0 {
            return nu;
        }
    }

    if reynolds > 2300.0 {
        dittus_boelter(reynolds, prandtl, heating)
    } else {
        3.66
    }
}

/// Selects a shell-side Nusselt number for cross-flow over the bundle.
#[must_use]
pub fn shell_side_nusselt(reynolds: f64, prandtl: f64, arrangement: TubeArrangement) -> f64 {
    shell_side_tube_bundles(reynolds, prandtl, arrangement)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dittus_boelter_regimes() {
        assert_relative_eq!(dittus_boelter(1000.0, 5.0, true), 0.0);

        let heated = dittus_boelter(20_000.0, 5.0, true);
        let cooled = dittus_boelter(20_000.0, 5.0, false);
        assert_relative_eq!(heated, 0.023 * 20_000f64.powf(0.8) * 5f64.powf(0.4));
        assert!(heated > cooled);
    }

    #[test]
    fn sieder_tate_reduces_to_plain_form_at_unity_ratio() {
        assert_relative_eq!(sieder_tate(1000.0, 5.0, 1.0), 0.0);
        assert_relative_eq!(
            sieder_tate(20_000.0, 5.0, 1.0),
            0.027 * 20_000f64.powf(0.8) * 5f64.powf(1.0 / 3.0)
        );
    }

    #[test]
    fn gnielinski_sentinel_outside_range() {
        assert_relative_eq!(gnielinski(2000.0, 5.0), 0.0);
        assert_relative_eq!(gnielinski(6e6, 5.0), 0.0);
        assert!(gnielinski(50_000.0, 5.0) > 0.0);
    }

    #[test]
    fn laminar_relations() {
        assert_relative_eq!(laminar_constant_wall_temp(10.0), 3.66);
        assert_relative_eq!(
            laminar_constant_wall_temp(1000.0),
            1.86 * 1000f64.powf(1.0 / 3.0)
        );
        assert_relative_eq!(laminar_constant_heat_flux(), 4.36);
    }

    #[test]
    fn bundle_arrangement_changes_turbulent_coefficients() {
        let inline = shell_side_tube_bundles(10_000.0, 5.0, TubeArrangement::Inline);
        let staggered = shell_side_tube_bundles(10_000.0, 5.0, TubeArrangement::Staggered);
        assert_relative_eq!(inline, 0.27 * 10_000f64.powf(0.63) * 5f64.powf(0.36));
        assert_relative_eq!(staggered, 0.36 * 10_000f64.powf(0.55) * 5f64.powf(0.36));

        // Laminar branch is arrangement independent.
        assert_relative_eq!(
            shell_side_tube_bundles(500.0, 5.0, TubeArrangement::Inline),
            shell_side_tube_bundles(500.0, 5.0, TubeArrangement::Staggered),
        );
    }

    #[test]
    fn tube_side_selector_routes_around_sentinels() {
        // Laminar: constant Nusselt fallback.
        assert_relative_eq!(tube_side_nusselt(1000.0, 5.0, true), 3.66);

        // Transitional: Dittus-Boelter, since Gnielinski is not preferred yet.
        assert_relative_eq!(
            tube_side_nusselt(5000.0, 5.0, true),
            dittus_boelter(5000.0, 5.0, true)
        );

        // Fully turbulent: Gnielinski wins.
        assert_relative_eq!(
            tube_side_nusselt(50_000.0, 5.0, true),
            gnielinski(50_000.0, 5.0)
        );

        // Beyond Gnielinski's range the selector must not return the sentinel.
        let nu = tube_side_nusselt(6e6, 5.0, true);
        assert_relative_eq!(nu, dittus_boelter(6e6, 5.0, true));
        assert!(nu > 0.0);
    }
}
