mod flrw;

pub use flrw::{Flrw, FlrwParameters};

/// Trait for the background solver a [`Cosmology`] derives its observables from.
///
/// The solver is treated as an opaque, fully parametrized black box. Every
/// query is scalar: one redshift in, one value out. Implementations must be
/// deterministic, and safe to call concurrently if the wrapping cosmology is
/// shared across threads.
///
/// Units follow the CLASS conventions:
/// - [`hubble`](Solver::hubble) returns `H(z) / c` in Mpc⁻¹.
/// - Distances are in Mpc.
/// - [`t_cmb`](Solver::t_cmb) is in kelvin.
///
/// [`Cosmology`]: crate::Cosmology
pub trait Solver {
    /// Returns the non-relativistic matter density parameter at `z`.
    fn om_m(&self, z: f64) -> f64;

    /// Returns the Hubble rate at `z` in Mpc⁻¹.
    fn hubble(&self, z: f64) -> f64;

    /// Returns the angular diameter distance to `z` in Mpc.
    fn angular_distance(&self, z: f64) -> f64;

    /// Returns the luminosity distance to `z` in Mpc.
    fn luminosity_distance(&self, z: f64) -> f64;

    /// Returns the dark energy density parameter at z = 0.
    fn omega_lambda(&self) -> f64;

    /// Returns the matter density parameter at z = 0.
    fn omega_m(&self) -> f64;

    /// Returns the curvature density parameter at z = 0.
    fn omega0_k(&self) -> f64;

    /// Returns the radiation density parameter at z = 0.
    fn omega_r(&self) -> f64;

    /// Returns the baryon density parameter at z = 0, if it is defined.
    fn omega_b(&self) -> Option<f64>;

    /// Returns the cold dark matter density parameter at z = 0.
    fn omega0_cdm(&self) -> f64;

    /// Returns the photon density parameter at z = 0.
    fn omega_g(&self) -> f64;

    /// Returns the effective number of neutrino species.
    fn n_eff(&self) -> f64;

    /// Returns the CMB temperature at z = 0 in kelvin.
    fn t_cmb(&self) -> f64;
}
