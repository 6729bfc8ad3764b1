mod background;
mod curvature;
mod density;
mod distance;
mod hubble;
mod volume;

use std::sync::Arc;

use cosmo_api::{Capabilities, Capability, CosmologyError};
use tracing::debug;

use crate::{Quadrature, Solver, vectorize::QueryTable};

pub use curvature::Curvature;
pub(crate) use curvature::transverse_distance;

/// A cosmology whose observables are derived from an opaque [`Solver`].
///
/// The model is immutable: the solver is shared, never re-parametrized, and
/// the elementwise query table is built inside the constructor. Every query
/// is a pure function of its redshift input and the solver's fixed state,
/// so a `Cosmology` can be read from several threads at once.
///
/// Quantities are exposed through the component traits of [`cosmo_api`].
/// Comoving distances, volumes, and cosmic times need a line-of-sight
/// [`Quadrature`]; without one they report [`CosmologyError::Unsupported`].
///
/// # Example
///
/// ```
/// use cosmo_api::{Background, HubbleParameter};
/// use cosmo_classy::{Cosmology, Flrw, FlrwParameters};
///
/// let solver = Flrw::new(FlrwParameters::default()).unwrap();
/// let cosmo = Cosmology::new(solver);
///
/// let h = cosmo.h(vec![0.0_f64, 1.0, 2.0]).unwrap();
/// assert_eq!(h.len(), 3);
/// assert!((h[0] - cosmo.h0().unwrap()).abs() < 1e-9);
/// assert!(cosmo.age(1.0_f64).is_err());
/// ```
#[derive(Debug)]
pub struct Cosmology<S> {
    solver: Arc<S>,
    queries: QueryTable,
    line_of_sight: Option<Quadrature>,
}

impl<S> Cosmology<S>
where
    S: Solver + Send + Sync + 'static,
{
    /// Creates a cosmology without line-of-sight integration.
    pub fn new(solver: S) -> Self {
        Self::from_shared(Arc::new(solver))
    }

    /// Creates a cosmology from a solver shared with other owners.
    pub fn from_shared(solver: Arc<S>) -> Self {
        Self::build(solver, None)
    }

    /// Creates a cosmology that integrates comoving distances and cosmic
    /// times along the line of sight with `quadrature`.
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrature configuration is invalid.
    pub fn with_line_of_sight(solver: S, quadrature: Quadrature) -> Result<Self, CosmologyError> {
        quadrature.validate()?;
        Ok(Self::build(Arc::new(solver), Some(quadrature)))
    }

    fn build(solver: Arc<S>, line_of_sight: Option<Quadrature>) -> Self {
        let queries = QueryTable::new(&solver);

        debug!(
            omega_k0 = solver.omega0_k(),
            hubble0 = solver.hubble(0.0),
            line_of_sight = ?line_of_sight,
            "built cosmology"
        );

        Self {
            solver,
            queries,
            line_of_sight,
        }
    }
}

impl<S: Solver> Cosmology<S> {
    /// Returns the wrapped solver.
    #[must_use]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Returns the line-of-sight quadrature, if enabled.
    #[must_use]
    pub fn quadrature(&self) -> Option<&Quadrature> {
        self.line_of_sight.as_ref()
    }

    /// Returns the curvature class selected by the sign of `Ω_k0`.
    #[must_use]
    pub fn curvature(&self) -> Curvature {
        Curvature::from_omega_k(self.solver.omega0_k())
    }

    /// Returns the raw solver Hubble rate at z = 0, in Mpc⁻¹.
    fn hubble_rate0(&self) -> f64 {
        self.solver.hubble(0.0)
    }

    /// Returns the line-of-sight quadrature required by `capability`.
    fn line_of_sight(&self, capability: Capability) -> Result<&Quadrature, CosmologyError> {
        self.line_of_sight
            .as_ref()
            .ok_or(CosmologyError::unsupported(capability))
    }
}

/// Reports what this cosmology computes for its solver; `Omega_b0` is
/// unsupported when the solver leaves the baryon density undefined.
impl<S: Solver> Capabilities for Cosmology<S> {
    fn supports(&self, capability: Capability) -> bool {
        use Capability::{
            Age, ComovingDistance, ComovingTransverseDistance, ComovingVolume,
            DifferentialComovingVolume, LookbackTime, NeutrinoMass, OmegaB, OmegaB0, OmegaDe,
            OmegaDm, OmegaGamma, OmegaK, OmegaNu, OmegaNu0, OmegaTot,
        };

        match capability {
            OmegaTot | OmegaK | OmegaB | OmegaNu | OmegaNu0 | NeutrinoMass | OmegaDe | OmegaDm
            | OmegaGamma => false,
            OmegaB0 => self.solver.omega_b().is_some(),
            ComovingDistance
            | ComovingTransverseDistance
            | ComovingVolume
            | DifferentialComovingVolume
            | Age
            | LookbackTime => self.line_of_sight.is_some(),
            _ => true,
        }
    }
}
