use cosmo_api::{Capability, CosmologyError, DensityParameters, Redshift};

use crate::{Cosmology, Solver, vectorize::Query};

impl<S: Solver> Cosmology<S> {
    /// Returns the solver's baryon density, or an error if it is undefined.
    fn defined_omega_b(&self) -> Result<f64, CosmologyError> {
        self.solver.omega_b().ok_or_else(|| {
            CosmologyError::invalid("Omega_b", "baryon density is undefined for this solver")
        })
    }
}

/// Density parameters read from the solver's totals.
///
/// Only `Ω_m(z)` is redshift-dependent; the other redshift-dependent
/// parameters, `Ω_nu0`, and the neutrino masses are not derivable from the
/// solver and keep their unsupported defaults.
impl<S: Solver> DensityParameters for Cosmology<S> {
    /// Sums `Ω_Λ + Ω_m + Ω_k + Ω_r`.
    fn omega_tot0(&self) -> Result<f64, CosmologyError> {
        let s = &self.solver;
        Ok(s.omega_lambda() + s.omega_m() + s.omega0_k() + s.omega_r())
    }

    fn omega_k0(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.omega0_k())
    }

    fn omega_m0(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.omega_m())
    }

    fn omega_m<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Ok(self.queries.get(Query::MatterDensity).apply(z))
    }

    fn omega_b0(&self) -> Result<f64, CosmologyError> {
        self.defined_omega_b()
    }

    /// An undefined baryon density takes precedence over the missing
    /// redshift dependence.
    fn omega_b<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        self.defined_omega_b()?;
        Err(CosmologyError::unsupported(Capability::OmegaB))
    }

    fn neff(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.n_eff())
    }

    fn omega_de0(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.omega_lambda())
    }

    fn omega_dm0(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.omega0_cdm())
    }

    fn omega_gamma0(&self) -> Result<f64, CosmologyError> {
        Ok(self.solver.omega_g())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::cosmology::test_utils::Toy;

    #[test]
    fn total_density_sums_components() {
        let cosmo = Cosmology::new(Toy {
            omega_m: 0.3,
            omega_lambda: 0.7,
            omega_k: 0.0,
            omega_r: 0.0,
            ..Toy::default()
        });

        assert_relative_eq!(cosmo.omega_tot0().unwrap(), 1.0);
        assert_eq!(cosmo.omega_m0(), Ok(0.3));
        assert_eq!(cosmo.omega_de0(), Ok(0.7));
        assert_eq!(cosmo.omega_k0(), Ok(0.0));
    }

    #[test]
    fn z0_reads_come_from_solver() {
        let cosmo = Cosmology::new(Toy {
            omega_r: 1e-4,
            ..Toy::default()
        });

        assert_eq!(cosmo.omega_b0(), Ok(0.05));
        assert_relative_eq!(cosmo.omega_dm0().unwrap(), 0.25);
        assert_eq!(cosmo.omega_gamma0(), Ok(5e-5));
        assert_eq!(cosmo.neff(), Ok(3.046));
    }

    #[test]
    fn matter_density_is_vectorized() {
        let cosmo = Cosmology::new(Toy::default());

        assert_relative_eq!(cosmo.omega_m(1.0_f64).unwrap(), 0.6);
        let values = cosmo.omega_m([0.0_f64, 1.0, 3.0]).unwrap();
        assert_relative_eq!(values[0], 0.3);
        assert_relative_eq!(values[1], 0.6);
        assert_relative_eq!(values[2], 1.2);
    }

    #[test]
    fn unsupported_density_functions() {
        let cosmo = Cosmology::new(Toy::default());

        let errors = [
            (cosmo.omega_tot(0.5_f64).unwrap_err(), Capability::OmegaTot),
            (cosmo.omega_k(0.5_f64).unwrap_err(), Capability::OmegaK),
            (cosmo.omega_b(0.5_f64).unwrap_err(), Capability::OmegaB),
            (cosmo.omega_nu(0.5_f64).unwrap_err(), Capability::OmegaNu),
            (cosmo.omega_de(0.5_f64).unwrap_err(), Capability::OmegaDe),
            (cosmo.omega_dm(0.5_f64).unwrap_err(), Capability::OmegaDm),
            (cosmo.omega_gamma(0.5_f64).unwrap_err(), Capability::OmegaGamma),
            (cosmo.omega_nu0().unwrap_err(), Capability::OmegaNu0),
            (cosmo.m_nu().unwrap_err(), Capability::NeutrinoMass),
        ];

        for (error, capability) in errors {
            assert_eq!(error, CosmologyError::unsupported(capability));
        }
    }

    #[test]
    fn undefined_baryon_density_is_invalid() {
        let cosmo = Cosmology::new(Toy {
            omega_b: None,
            ..Toy::default()
        });

        for err in [
            cosmo.omega_b0().unwrap_err(),
            cosmo.omega_b(vec![0.0_f64, 1.0]).unwrap_err(),
        ] {
            assert!(matches!(
                err,
                CosmologyError::InvalidParameter {
                    parameter: "Omega_b",
                    ..
                }
            ));
        }
    }
}
