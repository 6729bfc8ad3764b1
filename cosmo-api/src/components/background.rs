use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::{Capability, CosmologyError, Redshift};

/// Trait for the scale factor, the CMB temperature, and cosmic time.
pub trait Background {
    /// Returns the scale factor at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn scale_factor0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::ScaleFactor0))
    }

    /// Returns the scale factor `a = a0 / (1 + z)` at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn scale_factor<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::ScaleFactor))
    }

    /// Returns the CMB temperature at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn t_cmb0(&self) -> Result<ThermodynamicTemperature, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::Tcmb0))
    }

    /// Returns the CMB temperature at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn t_cmb<Z: Redshift>(
        &self,
        _z: Z,
    ) -> Result<Z::Output<ThermodynamicTemperature>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::Tcmb))
    }

    /// Returns the age of the universe at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn age<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<Time>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::Age))
    }

    /// Returns the lookback time to each redshift.
    ///
    /// This is the difference between the age of the universe now and its
    /// age at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn lookback_time<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<Time>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::LookbackTime))
    }
}
