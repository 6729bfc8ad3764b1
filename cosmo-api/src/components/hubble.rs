use uom::si::f64::Time;

use crate::{Capability, CosmologyError, Redshift};

/// Trait for the expansion rate and the critical density derived from it.
///
/// Rates are in km s⁻¹ Mpc⁻¹, distances in Mpc, and densities in M☉ Mpc⁻³.
pub trait HubbleParameter {
    /// Returns the Hubble constant `H0` in km s⁻¹ Mpc⁻¹.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn h0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::H0))
    }

    /// Returns the Hubble distance in Mpc.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn hubble_distance(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::HubbleDistance))
    }

    /// Returns the Hubble time.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn hubble_time(&self) -> Result<Time, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::HubbleTime))
    }

    /// Returns the Hubble function `H(z)` in km s⁻¹ Mpc⁻¹.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn h<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::H))
    }

    /// Returns the standardised Hubble function `E(z) = H(z) / H0`.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn h_over_h0<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::HOverH0))
    }

    /// Returns the critical density at z = 0 in M☉ Mpc⁻³.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn critical_density0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::CriticalDensity0))
    }

    /// Returns the critical density at each redshift in M☉ Mpc⁻³.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn critical_density<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::CriticalDensity))
    }
}
