use std::{fmt, sync::Arc};

use cosmo_api::Redshift;

use crate::Solver;

/// The scalar solver queries that are cached as elementwise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// [`Solver::om_m`], the matter density fraction.
    MatterDensity = 0,
    /// [`Solver::hubble`], the Hubble rate.
    Hubble = 1,
    /// [`Solver::angular_distance`].
    AngularDistance = 2,
    /// [`Solver::luminosity_distance`].
    LuminosityDistance = 3,
}

impl Query {
    /// All cached queries, in table order.
    pub const ALL: [Query; 4] = [
        Self::MatterDensity,
        Self::Hubble,
        Self::AngularDistance,
        Self::LuminosityDistance,
    ];

    /// Returns the solver's name for the query.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MatterDensity => "Om_m",
            Self::Hubble => "Hubble",
            Self::AngularDistance => "angular_distance",
            Self::LuminosityDistance => "luminosity_distance",
        }
    }
}

/// A scalar function lifted to operate elementwise on [`Redshift`] inputs.
pub struct Elementwise {
    function: Box<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl Elementwise {
    /// Wraps a scalar function.
    pub fn new(function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            function: Box::new(function),
        }
    }

    /// Evaluates the scalar function at a single redshift.
    #[must_use]
    pub fn eval(&self, z: f64) -> f64 {
        (self.function)(z)
    }

    /// Applies the scalar function to each redshift, preserving shape.
    pub fn apply<Z: Redshift>(&self, z: Z) -> Z::Output<f64> {
        z.map_each(|z| self.eval(z))
    }
}

impl fmt::Debug for Elementwise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elementwise").finish_non_exhaustive()
    }
}

/// The elementwise solver queries, built once and keyed by [`Query`].
///
/// Never mutated after construction, so concurrent reads need no locking.
pub struct QueryTable {
    functions: [Elementwise; 4],
}

impl QueryTable {
    /// Lifts each cached query of `solver` into an [`Elementwise`] operation.
    pub fn new<S>(solver: &Arc<S>) -> Self
    where
        S: Solver + Send + Sync + 'static,
    {
        let functions = Query::ALL.map(|query| {
            let solver = Arc::clone(solver);
            match query {
                Query::MatterDensity => Elementwise::new(move |z| solver.om_m(z)),
                Query::Hubble => Elementwise::new(move |z| solver.hubble(z)),
                Query::AngularDistance => Elementwise::new(move |z| solver.angular_distance(z)),
                Query::LuminosityDistance => {
                    Elementwise::new(move |z| solver.luminosity_distance(z))
                }
            }
        });

        Self { functions }
    }

    /// Returns the elementwise operation for `query`.
    #[must_use]
    pub fn get(&self, query: Query) -> &Elementwise {
        &self.functions[query as usize]
    }
}

impl fmt::Debug for QueryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Query::ALL.iter().map(|query| query.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Solver whose queries are simple, distinguishable functions of `z`.
    #[derive(Default)]
    struct Linear {
        calls: AtomicUsize,
    }

    impl Solver for Linear {
        fn om_m(&self, z: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            z + 0.125
        }
        fn hubble(&self, z: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            z + 0.25
        }
        fn angular_distance(&self, z: f64) -> f64 {
            z + 0.5
        }
        fn luminosity_distance(&self, z: f64) -> f64 {
            z + 0.75
        }
        fn omega_lambda(&self) -> f64 {
            0.0
        }
        fn omega_m(&self) -> f64 {
            1.0
        }
        fn omega0_k(&self) -> f64 {
            0.0
        }
        fn omega_r(&self) -> f64 {
            0.0
        }
        fn omega_b(&self) -> Option<f64> {
            None
        }
        fn omega0_cdm(&self) -> f64 {
            1.0
        }
        fn omega_g(&self) -> f64 {
            0.0
        }
        fn n_eff(&self) -> f64 {
            3.046
        }
        fn t_cmb(&self) -> f64 {
            2.7255
        }
    }

    #[test]
    fn table_dispatches_to_matching_query() {
        let table = QueryTable::new(&Arc::new(Linear::default()));

        assert_eq!(table.get(Query::MatterDensity).eval(1.0), 1.125);
        assert_eq!(table.get(Query::Hubble).eval(1.0), 1.25);
        assert_eq!(table.get(Query::AngularDistance).eval(1.0), 1.5);
        assert_eq!(table.get(Query::LuminosityDistance).eval(1.0), 1.75);
    }

    #[test]
    fn apply_calls_solver_once_per_element() {
        let solver = Arc::new(Linear::default());
        let table = QueryTable::new(&solver);

        let out = table.get(Query::Hubble).apply(vec![2.0_f64, 0.0, 1.0]);
        assert_eq!(out, vec![2.25, 0.25, 1.25]);
        assert_eq!(solver.calls.load(Ordering::Relaxed), 3);

        let out = table.get(Query::MatterDensity).apply(0.5_f64);
        assert_eq!(out, 0.625);
        assert_eq!(solver.calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn debug_lists_query_names() {
        let table = QueryTable::new(&Arc::new(Linear::default()));
        assert_eq!(
            format!("{table:?}"),
            r#"["Om_m", "Hubble", "angular_distance", "luminosity_distance"]"#
        );
    }
}
