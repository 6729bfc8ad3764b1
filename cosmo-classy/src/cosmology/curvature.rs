/// Spatial curvature class, selected by the sign of `Ω_k0`.
///
/// Curvature-dependent formulas branch on this before dividing by `Ω_k0`,
/// so the flat case never evaluates `1 / Ω_k0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curvature {
    /// `Ω_k0 = 0`.
    Flat,
    /// `Ω_k0 > 0`, an open universe.
    Open { omega_k: f64 },
    /// `Ω_k0 < 0`, a closed universe.
    Closed { omega_k: f64 },
}

impl Curvature {
    /// Classifies `omega_k` by its sign.
    ///
    /// Only an exact zero is flat.
    #[must_use]
    pub fn from_omega_k(omega_k: f64) -> Self {
        if omega_k > 0.0 {
            Self::Open { omega_k }
        } else if omega_k < 0.0 {
            Self::Closed { omega_k }
        } else {
            Self::Flat
        }
    }
}

/// Returns the transverse comoving distance `d_M` for a line-of-sight
/// comoving distance `d_c`, given the Hubble distance `d_h`.
pub(crate) fn transverse_distance(d_c: f64, d_h: f64, omega_k: f64) -> f64 {
    match Curvature::from_omega_k(omega_k) {
        Curvature::Flat => d_c,
        Curvature::Open { omega_k } => {
            let sqrt_ok = omega_k.sqrt();
            d_h / sqrt_ok * (sqrt_ok * d_c / d_h).sinh()
        }
        Curvature::Closed { omega_k } => {
            let sqrt_ok = omega_k.abs().sqrt();
            d_h / sqrt_ok * (sqrt_ok * d_c / d_h).sin()
        }
    }
}
