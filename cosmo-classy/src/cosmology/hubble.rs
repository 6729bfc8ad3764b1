use std::f64::consts::PI;

use cosmo_api::{CosmologyError, HubbleParameter, Redshift, units::gigayears};
use uom::si::f64::Time;

use crate::{
    Cosmology, Solver,
    constants::{GRAVITATIONAL_CONSTANT, MPC_S_PER_KM_IN_GYR, SPEED_OF_LIGHT},
    vectorize::Query,
};

/// Returns the critical density in M☉ Mpc⁻³ for a Hubble rate in km s⁻¹ Mpc⁻¹.
fn critical_density(h: f64) -> f64 {
    3e6 * h * h / (8.0 * PI * GRAVITATIONAL_CONSTANT)
}

/// Hubble rates scaled from the solver's Mpc⁻¹ to km s⁻¹ Mpc⁻¹.
///
/// The Hubble distance is `1 / hubble(0)` without the speed of light, as the
/// solver reports it; it is not the reciprocal of `H0` in matching units.
impl<S: Solver> HubbleParameter for Cosmology<S> {
    fn h0(&self) -> Result<f64, CosmologyError> {
        Ok(SPEED_OF_LIGHT * self.hubble_rate0())
    }

    fn hubble_distance(&self) -> Result<f64, CosmologyError> {
        Ok(1.0 / self.hubble_rate0())
    }

    fn hubble_time(&self) -> Result<Time, CosmologyError> {
        Ok(gigayears(MPC_S_PER_KM_IN_GYR / self.h0()?))
    }

    fn h<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        let hubble = self.queries.get(Query::Hubble);
        Ok(z.map_each(|z| SPEED_OF_LIGHT * hubble.eval(z)))
    }

    /// Divides the raw solver rates, so the speed of light cancels.
    fn h_over_h0<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        let hubble = self.queries.get(Query::Hubble);
        let rate0 = self.hubble_rate0();
        Ok(z.map_each(|z| hubble.eval(z) / rate0))
    }

    fn critical_density0(&self) -> Result<f64, CosmologyError> {
        Ok(critical_density(self.h0()?))
    }

    fn critical_density<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        let hubble = self.queries.get(Query::Hubble);
        Ok(z.map_each(|z| critical_density(SPEED_OF_LIGHT * hubble.eval(z))))
    }
}
