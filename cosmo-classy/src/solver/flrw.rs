use cosmo_api::CosmologyError;

use crate::{Quadrature, Solver, constants::SPEED_OF_LIGHT, cosmology::transverse_distance};

/// Parameters of an FLRW background with matter, radiation, curvature, and
/// a cosmological constant.
///
/// The dark energy density is not a parameter; it closes the budget so that
/// `Ω_Λ = 1 − Ω_m − Ω_r − Ω_k`. This keeps `Ω_k` exactly as given, so a
/// flat model selects the flat branch of curvature-dependent formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlrwParameters {
    /// Hubble constant in km s⁻¹ Mpc⁻¹.
    pub h0: f64,
    /// Non-relativistic matter density parameter.
    pub omega_m: f64,
    /// Baryon density parameter, if known.
    pub omega_b: Option<f64>,
    /// Radiation density parameter, photons and relativistic neutrinos.
    pub omega_r: f64,
    /// Curvature density parameter.
    pub omega_k: f64,
    /// Photon density parameter.
    pub omega_gamma: f64,
    /// Effective number of neutrino species.
    pub n_eff: f64,
    /// CMB temperature at z = 0 in kelvin.
    pub t_cmb: f64,
}

impl Default for FlrwParameters {
    fn default() -> Self {
        Self {
            h0: 67.66,
            omega_m: 0.3111,
            omega_b: Some(0.0490),
            omega_r: 9.15e-5,
            omega_k: 0.0,
            omega_gamma: 5.4e-5,
            n_eff: 3.046,
            t_cmb: 2.7255,
        }
    }
}

impl FlrwParameters {
    /// Returns the dark energy density that closes the budget.
    #[must_use]
    pub fn omega_lambda(&self) -> f64 {
        1.0 - self.omega_m - self.omega_r - self.omega_k
    }

    /// Returns `E(z)² = Ω_r(1+z)⁴ + Ω_m(1+z)³ + Ω_k(1+z)² + Ω_Λ`.
    fn e_squared(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        ((self.omega_r * zp1 + self.omega_m) * zp1 + self.omega_k) * zp1 * zp1
            + self.omega_lambda()
    }

    /// Returns the smallest `E(z)²` over `z ≥ 0`, or negative infinity if it
    /// is unbounded below.
    ///
    /// With `s = 1 + z`, the interior extrema are the positive roots of
    /// `4 Ω_r s² + 3 Ω_m s + 2 Ω_k = 0`.
    fn min_e_squared(&self) -> f64 {
        let (r, m, k) = (self.omega_r, self.omega_m, self.omega_k);

        let stationary = if r > 0.0 {
            let discriminant = 9.0 * m * m - 32.0 * r * k;
            if discriminant < 0.0 {
                [None, None]
            } else {
                let root = discriminant.sqrt();
                [
                    Some((-3.0 * m + root) / (8.0 * r)),
                    Some((-3.0 * m - root) / (8.0 * r)),
                ]
            }
        } else if m > 0.0 {
            [Some(-2.0 * k / (3.0 * m)), None]
        } else if k < 0.0 {
            return f64::NEG_INFINITY;
        } else {
            [None, None]
        };

        stationary
            .into_iter()
            .flatten()
            .filter(|&s| s > 1.0)
            .map(|s| self.e_squared(s - 1.0))
            .fold(self.e_squared(0.0), f64::min)
    }

    /// Validates that the parameters describe a physical background.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::InvalidParameter`] naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), CosmologyError> {
        let fields = [
            ("h0", self.h0),
            ("omega_m", self.omega_m),
            ("omega_r", self.omega_r),
            ("omega_k", self.omega_k),
            ("omega_gamma", self.omega_gamma),
            ("n_eff", self.n_eff),
            ("t_cmb", self.t_cmb),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(CosmologyError::invalid(
                *name,
                format!("must be finite, got {value}"),
            ));
        }

        if self.h0 <= 0.0 {
            return Err(CosmologyError::invalid("h0", "must be positive"));
        }
        if self.t_cmb <= 0.0 {
            return Err(CosmologyError::invalid("t_cmb", "must be positive"));
        }
        if self.omega_m < 0.0 {
            return Err(CosmologyError::invalid("omega_m", "must be non-negative"));
        }
        if self.omega_r < 0.0 {
            return Err(CosmologyError::invalid("omega_r", "must be non-negative"));
        }
        if self.n_eff < 0.0 {
            return Err(CosmologyError::invalid("n_eff", "must be non-negative"));
        }
        if !(0.0..=self.omega_r).contains(&self.omega_gamma) {
            return Err(CosmologyError::invalid(
                "omega_gamma",
                "must be non-negative and no larger than omega_r",
            ));
        }
        if let Some(omega_b) = self.omega_b {
            if !omega_b.is_finite() || !(0.0..=self.omega_m).contains(&omega_b) {
                return Err(CosmologyError::invalid(
                    "omega_b",
                    format!("must lie within [0, omega_m], got {omega_b}"),
                ));
            }
        }

        let min_e_squared = self.min_e_squared();
        if min_e_squared <= 0.0 {
            return Err(CosmologyError::invalid(
                "omega_k",
                format!("E(z)² must stay positive for z ≥ 0, reaches {min_e_squared}"),
            ));
        }
        Ok(())
    }
}

/// An analytic FLRW background solver.
///
/// Answers every [`Solver`] query from closed-form expansion history, with
/// line-of-sight distances integrated by its own [`Quadrature`].
#[derive(Debug, Clone, PartialEq)]
pub struct Flrw {
    params: FlrwParameters,
    quadrature: Quadrature,
}

impl Flrw {
    /// Creates a solver with the default quadrature.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn new(params: FlrwParameters) -> Result<Self, CosmologyError> {
        Self::with_quadrature(params, Quadrature::default())
    }

    /// Creates a solver that integrates distances with `quadrature`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or the quadrature are invalid.
    pub fn with_quadrature(
        params: FlrwParameters,
        quadrature: Quadrature,
    ) -> Result<Self, CosmologyError> {
        params.validate()?;
        quadrature.validate()?;
        Ok(Self { params, quadrature })
    }

    /// Returns the parameters the solver was built from.
    #[must_use]
    pub fn params(&self) -> &FlrwParameters {
        &self.params
    }

    fn comoving_distance(&self, z: f64) -> f64 {
        self.quadrature.integrate(|z| 1.0 / self.hubble(z), 0.0, z)
    }

    fn transverse_distance(&self, z: f64) -> f64 {
        let hubble_distance = SPEED_OF_LIGHT / self.params.h0;
        transverse_distance(
            self.comoving_distance(z),
            hubble_distance,
            self.params.omega_k,
        )
    }
}

impl Solver for Flrw {
    fn om_m(&self, z: f64) -> f64 {
        self.params.omega_m * (1.0 + z).powi(3) / self.params.e_squared(z)
    }

    fn hubble(&self, z: f64) -> f64 {
        self.params.h0 / SPEED_OF_LIGHT * self.params.e_squared(z).sqrt()
    }

    fn angular_distance(&self, z: f64) -> f64 {
        self.transverse_distance(z) / (1.0 + z)
    }

    fn luminosity_distance(&self, z: f64) -> f64 {
        self.transverse_distance(z) * (1.0 + z)
    }

    fn omega_lambda(&self) -> f64 {
        self.params.omega_lambda()
    }

    fn omega_m(&self) -> f64 {
        self.params.omega_m
    }

    fn omega0_k(&self) -> f64 {
        self.params.omega_k
    }

    fn omega_r(&self) -> f64 {
        self.params.omega_r
    }

    fn omega_b(&self) -> Option<f64> {
        self.params.omega_b
    }

    fn omega0_cdm(&self) -> f64 {
        self.params.omega_m - self.params.omega_b.unwrap_or(0.0)
    }

    fn omega_g(&self) -> f64 {
        self.params.omega_gamma
    }

    fn n_eff(&self) -> f64 {
        self.params.n_eff
    }

    fn t_cmb(&self) -> f64 {
        self.params.t_cmb
    }
}
