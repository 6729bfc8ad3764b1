use crate::{Capability, CosmologyError, Redshift};

/// Trait for distance measures and comoving volumes.
///
/// Distances are in Mpc, volumes in Mpc³, and differential volumes in
/// Mpc³ sr⁻¹.
pub trait Distances {
    /// Returns the comoving line-of-sight distance `d_C(z)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn comoving_distance<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::ComovingDistance))
    }

    /// Returns the transverse comoving distance `d_M(z)`.
    ///
    /// This is the comoving separation corresponding to an angle of one
    /// radian, and equals `d_C(z)` when the curvature is zero.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn comoving_transverse_distance<Z: Redshift>(
        &self,
        _z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(
            Capability::ComovingTransverseDistance,
        ))
    }

    /// Returns the comoving volume enclosed within each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn comoving_volume<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::ComovingVolume))
    }

    /// Returns the differential comoving volume per unit redshift and solid angle.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn differential_comoving_volume<Z: Redshift>(
        &self,
        _z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(
            Capability::DifferentialComovingVolume,
        ))
    }

    /// Returns the angular diameter distance `d_A(z)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn angular_diameter_distance<Z: Redshift>(
        &self,
        _z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(
            Capability::AngularDiameterDistance,
        ))
    }

    /// Returns the luminosity distance `d_L(z)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn luminosity_distance<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::LuminosityDistance))
    }
}
