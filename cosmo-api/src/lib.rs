//! A backend-independent query surface for cosmological observables.
//!
//! The interface is split into component traits ([`DensityParameters`],
//! [`HubbleParameter`], [`Distances`], and [`Background`]) whose methods
//! default to [`CosmologyError::Unsupported`]. A backend implements the
//! traits, overrides what it can derive, and advertises the result through
//! [`Capabilities`]. Redshift-dependent methods accept any [`Redshift`]
//! input and return an output of the same shape.

mod capability;
mod components;
mod error;
mod redshift;

pub mod units;

pub use capability::{Capabilities, Capability};
pub use components::{Background, DensityParameters, Distances, HubbleParameter};
pub use error::CosmologyError;
pub use redshift::Redshift;
