//! Derived cosmological observables on top of an opaque background solver.
//!
//! A [`Cosmology`] wraps any [`Solver`] and implements the component traits
//! of [`cosmo_api`], deriving Hubble rates, density parameters, distances,
//! volumes, and cosmic times from the solver's scalar queries. [`Flrw`] is an
//! analytic reference solver.

mod cosmology;
mod quadrature;
mod solver;

pub mod constants;
pub mod vectorize;

pub use cosmology::{Cosmology, Curvature};
pub use quadrature::Quadrature;
pub use solver::{Flrw, FlrwParameters, Solver};
