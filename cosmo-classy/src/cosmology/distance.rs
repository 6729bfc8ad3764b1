use cosmo_api::{Capability, CosmologyError, Distances, Redshift};

use crate::{
    Cosmology, Quadrature, Solver,
    cosmology::transverse_distance,
    quadrature::check_redshift,
    vectorize::Query,
};

impl<S: Solver> Cosmology<S> {
    /// Integrates `1 / hubble(z')` from zero to `z`.
    pub(super) fn comoving_distance_at(
        &self,
        quadrature: &Quadrature,
        z: f64,
    ) -> Result<f64, CosmologyError> {
        let z = check_redshift(z)?;
        let hubble = self.queries.get(Query::Hubble);
        Ok(quadrature.integrate(|z| 1.0 / hubble.eval(z), 0.0, z))
    }

    pub(super) fn transverse_distance_at(
        &self,
        quadrature: &Quadrature,
        z: f64,
    ) -> Result<f64, CosmologyError> {
        let d_c = self.comoving_distance_at(quadrature, z)?;
        Ok(transverse_distance(
            d_c,
            1.0 / self.hubble_rate0(),
            self.solver.omega0_k(),
        ))
    }
}

/// Distances in the solver's length unit.
///
/// Angular diameter and luminosity distances come straight from the solver.
/// Everything else integrates the solver's Hubble rate and so needs a
/// line-of-sight quadrature.
impl<S: Solver> Distances for Cosmology<S> {
    fn comoving_distance<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::ComovingDistance)?;
        z.try_map_each(|z| self.comoving_distance_at(quadrature, z))
    }

    fn comoving_transverse_distance<Z: Redshift>(
        &self,
        z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::ComovingTransverseDistance)?;
        z.try_map_each(|z| self.transverse_distance_at(quadrature, z))
    }

    /// The curvature branch is chosen once per call from the sign of `Ω_k0`.
    fn comoving_volume<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::ComovingVolume)?;
        let curvature = self.volume_branch();
        z.try_map_each(|z| self.comoving_volume_at(quadrature, curvature, z))
    }

    fn differential_comoving_volume<Z: Redshift>(
        &self,
        z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        let quadrature = self.line_of_sight(Capability::DifferentialComovingVolume)?;
        z.try_map_each(|z| self.differential_comoving_volume_at(quadrature, z))
    }

    fn angular_diameter_distance<Z: Redshift>(
        &self,
        z: Z,
    ) -> Result<Z::Output<f64>, CosmologyError> {
        Ok(self.queries.get(Query::AngularDistance).apply(z))
    }

    fn luminosity_distance<Z: Redshift>(&self, z: Z) -> Result<Z::Output<f64>, CosmologyError> {
        Ok(self.queries.get(Query::LuminosityDistance).apply(z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use cosmo_api::HubbleParameter;

    use crate::cosmology::test_utils::Toy;

    fn integrated(toy: Toy) -> Cosmology<Toy> {
        Cosmology::with_line_of_sight(toy, Quadrature::default()).unwrap()
    }

    #[test]
    fn solver_distances_pass_through() {
        let cosmo = Cosmology::new(Toy::default());

        assert_eq!(cosmo.angular_diameter_distance(2.0_f64), Ok(200.0));
        assert_eq!(
            cosmo.luminosity_distance(vec![0.0_f64, 1.0]),
            Ok(vec![0.0, 400.0])
        );
    }

    #[test]
    fn integrated_distances_need_line_of_sight() {
        let cosmo = Cosmology::new(Toy::default());

        let errors = [
            (
                cosmo.comoving_distance(1.0_f64).unwrap_err(),
                Capability::ComovingDistance,
            ),
            (
                cosmo.comoving_transverse_distance(1.0_f64).unwrap_err(),
                Capability::ComovingTransverseDistance,
            ),
            (
                cosmo.comoving_volume(1.0_f64).unwrap_err(),
                Capability::ComovingVolume,
            ),
            (
                cosmo.differential_comoving_volume(1.0_f64).unwrap_err(),
                Capability::DifferentialComovingVolume,
            ),
        ];

        for (error, capability) in errors {
            assert_eq!(error, CosmologyError::unsupported(capability));
        }
    }

    #[test]
    fn comoving_distance_of_linear_expansion() {
        let cosmo = integrated(Toy::default());
        let d_h = cosmo.hubble_distance().unwrap();

        let zs = [0.0_f64, 0.5, 2.0];
        let d_c = cosmo.comoving_distance(zs).unwrap();
        for (d, z) in d_c.iter().zip(zs) {
            // E(z) = 1 + z integrates to ln(1 + z).
            assert_relative_eq!(*d, d_h * (1.0 + z).ln(), max_relative = 1e-8);
        }
        assert_eq!(d_c[0], 0.0);
    }

    #[test]
    fn flat_transverse_distance_equals_comoving_distance() {
        let cosmo = integrated(Toy::default());
        assert_eq!(
            cosmo.comoving_transverse_distance(1.5_f64),
            cosmo.comoving_distance(1.5_f64)
        );
    }

    #[test]
    fn flat_volume_is_a_euclidean_sphere() {
        let cosmo = integrated(Toy::default());
        let z = 1.0_f64;

        let d_c = cosmo.comoving_distance(z).unwrap();
        let volume = cosmo.comoving_volume(z).unwrap();
        assert_relative_eq!(volume, 4.0 / 3.0 * PI * d_c.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn nearly_flat_volumes_are_continuous() {
        let flat = integrated(Toy::default());
        let zs = vec![0.1_f64, 1.0, 3.0];
        let reference = flat.comoving_volume(&zs).unwrap();

        for omega_k in [1e-6, -1e-6] {
            let curved = integrated(Toy {
                omega_k,
                ..Toy::default()
            });
            let volumes = curved.comoving_volume(&zs).unwrap();
            for (v, v_flat) in volumes.iter().zip(&reference) {
                assert_relative_eq!(*v, *v_flat, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn differential_volume_of_linear_expansion() {
        let cosmo = integrated(Toy::default());
        let z = 1.0_f64;

        // (d_M / d_H)² / E(z) with d_M / d_H = ln 2 and E(1) = 2.
        let expected = 2.0_f64.ln().powi(2) / 2.0;
        assert_relative_eq!(
            cosmo.differential_comoving_volume(z).unwrap(),
            expected,
            max_relative = 1e-8
        );
    }

    #[test]
    fn negative_redshift_is_rejected() {
        let cosmo = integrated(Toy::default());

        let err = cosmo.comoving_volume(vec![0.5_f64, -0.5]).unwrap_err();
        assert!(matches!(
            err,
            CosmologyError::InvalidParameter { parameter: "z", .. }
        ));
    }
}
