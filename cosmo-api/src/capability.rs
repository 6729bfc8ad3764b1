use std::fmt;

/// Every quantity exposed by the standard cosmology interface.
///
/// A backend advertises which of these it can compute through
/// [`Capabilities::supports`]. Calling a quantity the backend does not
/// support yields [`CosmologyError::Unsupported`] carrying the same variant.
///
/// [`CosmologyError::Unsupported`]: crate::CosmologyError::Unsupported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    // Density parameters.
    OmegaTot0,
    OmegaTot,
    OmegaK0,
    OmegaK,
    OmegaM0,
    OmegaM,
    OmegaB0,
    OmegaB,
    OmegaNu0,
    OmegaNu,
    Neff,
    NeutrinoMass,
    OmegaDe0,
    OmegaDe,
    OmegaDm0,
    OmegaDm,
    OmegaGamma0,
    OmegaGamma,

    // Hubble parameter and critical density.
    H0,
    HubbleDistance,
    HubbleTime,
    H,
    HOverH0,
    CriticalDensity0,
    CriticalDensity,

    // Distances and volumes.
    ComovingDistance,
    ComovingTransverseDistance,
    ComovingVolume,
    DifferentialComovingVolume,
    AngularDiameterDistance,
    LuminosityDistance,

    // Scale factor, temperature, and time.
    ScaleFactor0,
    ScaleFactor,
    Tcmb0,
    Tcmb,
    Age,
    LookbackTime,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Capability; 37] = [
        Self::OmegaTot0,
        Self::OmegaTot,
        Self::OmegaK0,
        Self::OmegaK,
        Self::OmegaM0,
        Self::OmegaM,
        Self::OmegaB0,
        Self::OmegaB,
        Self::OmegaNu0,
        Self::OmegaNu,
        Self::Neff,
        Self::NeutrinoMass,
        Self::OmegaDe0,
        Self::OmegaDe,
        Self::OmegaDm0,
        Self::OmegaDm,
        Self::OmegaGamma0,
        Self::OmegaGamma,
        Self::H0,
        Self::HubbleDistance,
        Self::HubbleTime,
        Self::H,
        Self::HOverH0,
        Self::CriticalDensity0,
        Self::CriticalDensity,
        Self::ComovingDistance,
        Self::ComovingTransverseDistance,
        Self::ComovingVolume,
        Self::DifferentialComovingVolume,
        Self::AngularDiameterDistance,
        Self::LuminosityDistance,
        Self::ScaleFactor0,
        Self::ScaleFactor,
        Self::Tcmb0,
        Self::Tcmb,
        Self::Age,
        Self::LookbackTime,
    ];

    /// Returns the quantity's name in the standard interface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OmegaTot0 => "Omega_tot0",
            Self::OmegaTot => "Omega_tot",
            Self::OmegaK0 => "Omega_k0",
            Self::OmegaK => "Omega_k",
            Self::OmegaM0 => "Omega_m0",
            Self::OmegaM => "Omega_m",
            Self::OmegaB0 => "Omega_b0",
            Self::OmegaB => "Omega_b",
            Self::OmegaNu0 => "Omega_nu0",
            Self::OmegaNu => "Omega_nu",
            Self::Neff => "Neff",
            Self::NeutrinoMass => "m_nu",
            Self::OmegaDe0 => "Omega_de0",
            Self::OmegaDe => "Omega_de",
            Self::OmegaDm0 => "Omega_dm0",
            Self::OmegaDm => "Omega_dm",
            Self::OmegaGamma0 => "Omega_gamma0",
            Self::OmegaGamma => "Omega_gamma",
            Self::H0 => "H0",
            Self::HubbleDistance => "hubble_distance",
            Self::HubbleTime => "hubble_time",
            Self::H => "H",
            Self::HOverH0 => "h_over_h0",
            Self::CriticalDensity0 => "critical_density0",
            Self::CriticalDensity => "critical_density",
            Self::ComovingDistance => "comoving_distance",
            Self::ComovingTransverseDistance => "comoving_transverse_distance",
            Self::ComovingVolume => "comoving_volume",
            Self::DifferentialComovingVolume => "differential_comoving_volume",
            Self::AngularDiameterDistance => "angular_diameter_distance",
            Self::LuminosityDistance => "luminosity_distance",
            Self::ScaleFactor0 => "scale_factor0",
            Self::ScaleFactor => "scale_factor",
            Self::Tcmb0 => "Tcmb0",
            Self::Tcmb => "Tcmb",
            Self::Age => "age",
            Self::LookbackTime => "lookback_time",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for querying which quantities a cosmology can compute.
///
/// Lets callers check before invoking, rather than relying on every call
/// to an unsupported quantity returning an error.
pub trait Capabilities {
    /// Returns `true` if the cosmology computes `capability`.
    fn supports(&self, capability: Capability) -> bool;

    /// Returns every supported capability, in declaration order.
    fn supported(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|&capability| self.supports(capability))
            .collect()
    }
}
