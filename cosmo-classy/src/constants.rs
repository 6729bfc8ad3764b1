//! Physical constants in the units the derived quantities are quoted in.

/// Speed of light in vacuum, in km s⁻¹.
pub const SPEED_OF_LIGHT: f64 = 299_792.458;

/// Newtonian constant of gravitation, in pc (km s⁻¹)² M☉⁻¹.
///
/// Combined with the `1e6` pc-to-Mpc factor in the critical density this
/// yields densities in M☉ Mpc⁻³.
pub const GRAVITATIONAL_CONSTANT: f64 = 4.300_917_270e-3;

/// Conversion from Mpc s km⁻¹ to Gyr, using 365-day years.
pub const MPC_S_PER_KM_IN_GYR: f64 = 978.5;
