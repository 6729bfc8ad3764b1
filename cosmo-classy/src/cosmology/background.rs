use cosmo_api::{Background, Capability, CosmologyError, Redshift, units::gigayears};
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
};

use crate::{
    Cosmology, Quadrature, Solver,
    constants::{MPC_S_PER_KM_IN_GYR, SPEED_OF_LIGHT},
    quadrature::check_redshift,
    vectorize::{Elementwise, Query},
};

/// Smallest scale factor at which the age integrand is evaluated.
const SCALE_FACTOR_FLOOR: f64 = 1e-10;

/// Scale factor compared against the floor to detect a divergent age.
const EARLY_SCALE_FACTOR: f64 = 1e-5;

/// Returns `1 / (a H(a))` in s km⁻¹ Mpc, the integrand of the age in `a`.
fn age_integrand(hubble: &Elementwise, a: f64) -> f64 {
    let a = a.max(SCALE_FACTOR_FLOOR);
    1.0 / (a * SPEED_OF_LIGHT * hubble.eval(1.0 / a - 1.0))
}

impl<S: Solver> Cosmology<S> {
    /// Checks that the age integral converges at `a → 0`.
    ///
    /// An integrand that still grows toward the floor means the expansion
    /// history has no big bang, such as a universe of dark energy alone.
    fn check_finite_age(&self) -> Result<(), CosmologyError> {
        let hubble = self.queries.get(Query::Hubble);
        let at_floor = age_integrand(hubble, SCALE_FACTOR_FLOOR);
        let early = age_integrand(hubble, EARLY_SCALE_FACTOR);

        if at_floor.is_finite() && at_floor <= early * (1.0 + 1e-9) {
            Ok(())
        } else {
            Err(CosmologyError::invalid(
                "hubble",
                "age diverges as a → 0; the expansion history has no big bang",
            ))
        }
    }

    /// Returns the age at `z` in Gyr, integrating over the scale factor.
    fn age_at(&self, quadrature: &Quadrature, z: f64) -> Result<f64, CosmologyError> {
        let z = check_redshift(z)?;
        let hubble = self.queries.get(Query::Hubble);
        let integral = quadrature.integrate(|a| age_integrand(hubble, a), 0.0, 1.0 / (1.0 + z));
        Ok(MPC_S_PER_KM_IN_GYR * integral)
    }

    /// Returns the lookback time to `z` in Gyr.
    fn lookback_at(&self, quadrature: &Quadrature, z: f64) -> Result<f64, CosmologyError> {
        let z = check_redshift(z)?;
        let hubble = self.queries.get(Query::Hubble);
        let integrand = |z: f64| 1.0 / ((1.0 + z) * SPEED_OF_LIGHT * hubble.eval(z));
        Ok(MPC_S_PER_KM_IN_GYR * quadrature.integrate(integrand, 0.0, z))
    }
}

impl<S: Solver> Background for Cosmology<S> {
    fn scale_factor0(&self) -> Result<f64, CosmologyError> {
        Ok(1.0)
    }

    fn scale_factor<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Ok(z.map_each(|z| 1.0 / (1.0 + z)))
    }

    fn t_cmb0(&self) -> Result<ThermodynamicTemperature, CosmologyError> {
        Ok(ThermodynamicTemperature::new::<kelvin>(self.solver.t_cmb()))
    }

    /// Scales the present temperature as `T0 (1 + z)`.
    fn t_cmb<Z: Redshift>(
        &self,
        z: Z,
    ) -> Result<Z::Output<ThermodynamicTemperature>, CosmologyError> {
        let t0 = self.solver.t_cmb();
        Ok(z.map_each(|z| ThermodynamicTemperature::new::<kelvin>(t0 * (1.0 + z))))
    }

    fn age<Z: Redshift>(&self, z: Z) -> Result<Z::Output<Time>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::Age)?;
        self.check_finite_age()?;
        let gyr = z.try_map_each(|z| self.age_at(quadrature, z))?;
        Ok(Z::map_output::<f64, Time>(gyr, gigayears))
    }

    fn lookback_time<Z: Redshift>(&self, z: Z) -> Result<Z::Output<Time>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::LookbackTime)?;
        let gyr = z.try_map_each(|z| self.lookback_at(quadrature, z))?;
        Ok(Z::map_output::<f64, Time>(gyr, gigayears))
    }
}
