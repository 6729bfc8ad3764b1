//! Conversions for quantities quoted in astronomical units.

use uom::si::{f64::Time, time::year};

/// Years per gigayear.
const YEARS_PER_GYR: f64 = 1e9;

/// Creates a [`Time`] from a value in gigayears.
///
/// A year here is 365 days, matching the Mpc s km⁻¹ to Gyr factor used for
/// Hubble times.
#[must_use]
pub fn gigayears(value: f64) -> Time {
    Time::new::<year>(value * YEARS_PER_GYR)
}

/// Returns the value of `time` in gigayears.
#[must_use]
pub fn in_gigayears(time: Time) -> f64 {
    time.get::<year>() / YEARS_PER_GYR
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::time::second;

    use super::*;

    #[test]
    fn gigayear_round_trip() {
        let t = gigayears(13.8);
        assert_relative_eq!(in_gigayears(t), 13.8, epsilon = 1e-12);
        assert_relative_eq!(t.get::<second>(), 13.8e9 * 365.0 * 86_400.0, max_relative = 1e-12);
    }
}
