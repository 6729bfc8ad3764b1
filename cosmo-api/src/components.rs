mod background;
mod density;
mod distance;
mod hubble;

pub use background::Background;
pub use density::DensityParameters;
pub use distance::Distances;
pub use hubble::HubbleParameter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capability, CosmologyError};

    /// A backend that overrides nothing.
    struct Empty;

    impl DensityParameters for Empty {}
    impl HubbleParameter for Empty {}
    impl Distances for Empty {}
    impl Background for Empty {}

    fn unsupported(capability: Capability) -> CosmologyError {
        CosmologyError::unsupported(capability)
    }

    #[test]
    fn defaults_report_unsupported() {
        assert_eq!(Empty.omega_tot0(), Err(unsupported(Capability::OmegaTot0)));
        assert_eq!(Empty.omega_m(1.0_f64), Err(unsupported(Capability::OmegaM)));
        assert_eq!(Empty.m_nu(), Err(unsupported(Capability::NeutrinoMass)));
        assert_eq!(Empty.h(vec![0.0_f64, 1.0]), Err(unsupported(Capability::H)));
        assert_eq!(
            Empty.comoving_volume([0.5_f64]),
            Err(unsupported(Capability::ComovingVolume))
        );
        assert_eq!(
            Empty.age(2.0_f64).unwrap_err(),
            unsupported(Capability::Age)
        );
    }

    #[test]
    fn overrides_replace_defaults() {
        struct Flat;

        impl DensityParameters for Flat {
            fn omega_k0(&self) -> Result<f64, CosmologyError> {
                Ok(0.0)
            }
        }

        assert_eq!(Flat.omega_k0(), Ok(0.0));
        assert!(Flat.omega_k(0.0_f64).unwrap_err().is_unsupported());
    }
}
