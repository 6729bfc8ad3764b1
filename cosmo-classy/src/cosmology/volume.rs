use std::f64::consts::PI;

use cosmo_api::CosmologyError;
use tracing::trace;

use crate::{Cosmology, Curvature, Quadrature, Solver, vectorize::Query};

/// Volume of a sphere of comoving radius `d_c`.
pub(crate) fn flat_volume(d_c: f64) -> f64 {
    4.0 / 3.0 * PI * d_c.powi(3)
}

/// Below this `|Ω_k0| x²` the curved volumes are evaluated from their series.
const SERIES_THRESHOLD: f64 = 1e-3;

/// Comoving volume for a curved branch from the expansion of
/// `4π d_H³ ∫₀ˣ t² / sqrt(1 + Ω_k t²) dt` in `u = Ω_k x²`.
///
/// The closed forms cancel to about `(2/3) Ω_k x³` before being divided by
/// `Ω_k`, so they lose all precision as `Ω_k → 0`.
pub(crate) fn volume_series(x: f64, d_h: f64, omega_k: f64) -> f64 {
    let u = omega_k * x * x;
    let terms =
        1.0 + u * (-3.0 / 10.0 + u * (9.0 / 56.0 + u * (-5.0 / 48.0 + u * 105.0 / 1408.0)));
    flat_volume(x * d_h) * terms
}

/// Comoving volume for `Ω_k0 > 0`, with `x = d_M / d_H`.
pub(crate) fn open_volume(x: f64, d_h: f64, omega_k: f64) -> f64 {
    if (omega_k * x * x).abs() < SERIES_THRESHOLD {
        return volume_series(x, d_h, omega_k);
    }
    let sqrt_ok = omega_k.abs().sqrt();
    let prefactor = 4.0 * PI * d_h.powi(3) / (2.0 * omega_k);
    prefactor * (x * (1.0 + omega_k * x * x).sqrt() - (sqrt_ok * x).asinh() / sqrt_ok)
}

/// Comoving volume for `Ω_k0 < 0`, with `x = d_M / d_H`.
pub(crate) fn closed_volume(x: f64, d_h: f64, omega_k: f64) -> f64 {
    if (omega_k * x * x).abs() < SERIES_THRESHOLD {
        return volume_series(x, d_h, omega_k);
    }
    let sqrt_ok = omega_k.abs().sqrt();
    let prefactor = 4.0 * PI * d_h.powi(3) / (2.0 * omega_k);
    prefactor * (x * (1.0 + omega_k * x * x).sqrt() - (sqrt_ok * x).asin() / sqrt_ok)
}

impl<S: Solver> Cosmology<S> {
    /// Returns the comoving volume within `z` for an already selected branch.
    pub(super) fn comoving_volume_at(
        &self,
        quadrature: &Quadrature,
        curvature: Curvature,
        z: f64,
    ) -> Result<f64, CosmologyError> {
        match curvature {
            Curvature::Flat => Ok(flat_volume(self.comoving_distance_at(quadrature, z)?)),
            Curvature::Open { omega_k } => {
                let d_h = 1.0 / self.hubble_rate0();
                let x = self.transverse_distance_at(quadrature, z)? / d_h;
                Ok(open_volume(x, d_h, omega_k))
            }
            Curvature::Closed { omega_k } => {
                let d_h = 1.0 / self.hubble_rate0();
                let x = self.transverse_distance_at(quadrature, z)? / d_h;
                Ok(closed_volume(x, d_h, omega_k))
            }
        }
    }

    /// Returns `(d_M / d_H)² / E(z)`.
    pub(super) fn differential_comoving_volume_at(
        &self,
        quadrature: &Quadrature,
        z: f64,
    ) -> Result<f64, CosmologyError> {
        let rate0 = self.hubble_rate0();
        let x = self.transverse_distance_at(quadrature, z)? * rate0;
        let e = self.queries.get(Query::Hubble).eval(z) / rate0;
        Ok(x * x / e)
    }

    /// Selects the volume branch for one call.
    pub(super) fn volume_branch(&self) -> Curvature {
        let curvature = self.curvature();
        trace!(?curvature, "selected comoving volume branch");
        curvature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn curved_branches_approach_flat_volume() {
        let d_h = 4282.7;
        for x in [0.05, 0.3, 1.0] {
            let flat = flat_volume(x * d_h);
            for omega_k in [1e-6_f64, -1e-6, 1e-10, -1e-10, 1e-15, -1e-15, 1e-17, -1e-17] {
                let curved = if omega_k > 0.0 {
                    open_volume(x, d_h, omega_k)
                } else {
                    closed_volume(x, d_h, omega_k)
                };
                // Leading correction is -(3/10) Ω_k x².
                assert_relative_eq!(curved, flat, max_relative = omega_k.abs() + 1e-14);
            }
        }
    }

    #[test]
    fn series_matches_closed_forms_near_threshold() {
        let d_h: f64 = 4282.7;
        let x = 1.0;
        for omega_k in [5e-4_f64, 2e-3, -5e-4, -2e-3] {
            let sqrt_ok = omega_k.abs().sqrt();
            let prefactor = 4.0 * PI * d_h.powi(3) / (2.0 * omega_k);
            let root = x * (1.0 + omega_k * x * x).sqrt();
            let closed_form = if omega_k > 0.0 {
                prefactor * (root - (sqrt_ok * x).asinh() / sqrt_ok)
            } else {
                prefactor * (root - (sqrt_ok * x).asin() / sqrt_ok)
            };
            assert_relative_eq!(
                volume_series(x, d_h, omega_k),
                closed_form,
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn closed_volume_exceeds_open_volume_at_fixed_x() {
        let d_h = 4282.7;
        let x = 0.8;
        let open = open_volume(x, d_h, 0.1);
        let closed = closed_volume(x, d_h, -0.1);
        assert!(open < flat_volume(x * d_h));
        assert!(closed > flat_volume(x * d_h));
        assert!(closed > open);
    }

    #[test]
    fn closed_volume_of_whole_hypersphere() {
        // At x = 1/sqrt(|Ω_k|) the transverse distance reaches its maximum,
        // enclosing half of the 3-sphere: V = π² R³ with R = d_H / sqrt(|Ω_k|).
        let d_h = 1.0;
        let omega_k: f64 = -0.25;
        let r = d_h / omega_k.abs().sqrt();
        let volume = closed_volume(r / d_h, d_h, omega_k);
        assert_relative_eq!(volume, PI * PI * r.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn empty_volume_at_origin() {
        assert_eq!(flat_volume(0.0), 0.0);
        assert_eq!(open_volume(0.0, 1000.0, 0.3), 0.0);
        assert_eq!(closed_volume(0.0, 1000.0, -0.3), 0.0);
    }
}
