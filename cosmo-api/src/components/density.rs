use crate::{Capability, CosmologyError, Redshift};

/// Trait for density parameters, the ratio of a component's density to the
/// critical density.
///
/// Every method defaults to [`CosmologyError::Unsupported`], so a backend
/// overrides only the quantities it can actually derive. Redshift-dependent
/// methods preserve the shape of their [`Redshift`] input.
pub trait DensityParameters {
    /// Returns the total density parameter at z = 0.
    ///
    /// `Ω_tot0 = Ω_m0 + Ω_r0 + Ω_de0 + Ω_k0`, which should always be one.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_tot0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaTot0))
    }

    /// Returns the total density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_tot<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaTot))
    }

    /// Returns the effective curvature density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_k0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaK0))
    }

    /// Returns the curvature density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_k<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaK))
    }

    /// Returns the non-relativistic matter density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_m0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaM0))
    }

    /// Returns the non-relativistic matter density parameter at each redshift.
    ///
    /// Neutrinos are excluded, even when non-relativistic.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_m<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaM))
    }

    /// Returns the baryon density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed,
    /// or [`CosmologyError::InvalidParameter`] if the baryon density is undefined.
    fn omega_b0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaB0))
    }

    /// Returns the baryon density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed,
    /// or [`CosmologyError::InvalidParameter`] if the baryon density is undefined.
    fn omega_b<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaB))
    }

    /// Returns the neutrino density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_nu0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaNu0))
    }

    /// Returns the neutrino density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_nu<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaNu))
    }

    /// Returns the effective number of neutrino species.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn neff(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::Neff))
    }

    /// Returns the neutrino masses in eV.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn m_nu(&self) -> Result<Vec<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::NeutrinoMass))
    }

    /// Returns the dark energy density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_de0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaDe0))
    }

    /// Returns the dark energy density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_de<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaDe))
    }

    /// Returns the dark matter density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_dm0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaDm0))
    }

    /// Returns the dark matter density parameter at each redshift.
    ///
    /// Neutrinos are excluded, even when non-relativistic.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_dm<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaDm))
    }

    /// Returns the photon density parameter at z = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_gamma0(&self) -> Result<f64, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaGamma0))
    }

    /// Returns the photon density parameter at each redshift.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if the quantity cannot be computed.
    fn omega_gamma<Z: Redshift>(&self, _z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Err(CosmologyError::unsupported(Capability::OmegaGamma))
    }
}
