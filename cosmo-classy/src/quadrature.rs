use cosmo_api::CosmologyError;

/// Configuration for composite Simpson integration along the line of sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Quadrature {
    /// Number of subintervals; must be even and at least two.
    pub intervals: usize,
}

impl Default for Quadrature {
    fn default() -> Self {
        Self { intervals: 512 }
    }
}

impl Quadrature {
    /// Creates a quadrature with the given number of subintervals.
    ///
    /// # Errors
    ///
    /// Returns an error if `intervals` is odd or less than two.
    pub fn new(intervals: usize) -> Result<Self, CosmologyError> {
        let quadrature = Self { intervals };
        quadrature.validate()?;
        Ok(quadrature)
    }

    /// Validates that the interval count is even and at least two.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::InvalidParameter`] if the count is invalid.
    pub fn validate(&self) -> Result<(), CosmologyError> {
        if self.intervals < 2 {
            return Err(CosmologyError::invalid(
                "intervals",
                format!("must be at least 2, got {}", self.intervals),
            ));
        }
        if self.intervals % 2 != 0 {
            return Err(CosmologyError::invalid(
                "intervals",
                format!("must be even, got {}", self.intervals),
            ));
        }
        Ok(())
    }

    /// Integrates `f` over `[lower, upper]` with composite Simpson's rule.
    ///
    /// Returns zero for an empty interval.
    #[allow(clippy::cast_precision_loss)]
    pub fn integrate(&self, f: impl Fn(f64) -> f64, lower: f64, upper: f64) -> f64 {
        if lower == upper {
            return 0.0;
        }

        let n = self.intervals;
        let step = (upper - lower) / n as f64;

        let interior: f64 = (1..n)
            .map(|i| {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                weight * f(lower + i as f64 * step)
            })
            .sum();

        step / 3.0 * (f(lower) + interior + f(upper))
    }
}

/// Checks that `z` is a finite, non-negative redshift.
pub(crate) fn check_redshift(z: f64) -> Result<f64, CosmologyError> {
    if z.is_finite() && z >= 0.0 {
        Ok(z)
    } else {
        Err(CosmologyError::invalid(
            "z",
            format!("redshift must be finite and non-negative, got {z}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_is_valid() {
        assert!(Quadrature::default().validate().is_ok());
    }

    #[test]
    fn rejects_odd_or_tiny_interval_counts() {
        assert!(Quadrature::new(0).is_err());
        assert!(Quadrature::new(1).is_err());
        assert!(Quadrature::new(7).is_err());
        assert_eq!(Quadrature::new(2), Ok(Quadrature { intervals: 2 }));
    }

    #[test]
    fn exact_for_cubics() {
        let quadrature = Quadrature::new(2).unwrap();
        let integral = quadrature.integrate(|x| x.powi(3) - 2.0 * x + 1.0, 0.0, 2.0);
        // x^4/4 - x^2 + x from 0 to 2 = 4 - 4 + 2
        assert_relative_eq!(integral, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn converges_for_smooth_integrands() {
        let integral = Quadrature::default().integrate(f64::exp, 0.0, 1.0);
        assert_relative_eq!(integral, std::f64::consts::E - 1.0, max_relative = 1e-12);
    }

    #[test]
    fn empty_and_reversed_intervals() {
        let quadrature = Quadrature::default();
        assert_eq!(quadrature.integrate(|x| x, 3.0, 3.0), 0.0);
        assert_relative_eq!(
            quadrature.integrate(|x| x, 1.0, 0.0),
            -0.5,
            epsilon = 1e-14
        );
    }

    #[test]
    fn redshift_checks() {
        assert_eq!(check_redshift(0.0), Ok(0.0));
        assert!(check_redshift(-0.1).is_err());
        assert!(check_redshift(f64::NAN).is_err());
        assert!(check_redshift(f64::INFINITY).is_err());
    }
}
