use ndarray::{Array, ArrayBase, Data, Dimension};

/// Trait for redshift inputs that preserve their shape through a query.
///
/// A scalar `f64` maps to a scalar output, while sequences (`Vec<f64>`,
/// slices, fixed-size arrays, and `ndarray` arrays) map to a sequence of the
/// same shape. Each element is mapped independently and in order, so element
/// `i` of the output depends only on element `i` of the input.
///
/// # Example
///
/// ```
/// use cosmo_api::Redshift;
///
/// let a = 1.0_f64.map_each(|z| 1.0 / (1.0 + z));
/// assert_eq!(a, 0.5);
///
/// let a = vec![0.0_f64, 1.0, 3.0].map_each(|z| 1.0 / (1.0 + z));
/// assert_eq!(a, vec![1.0, 0.5, 0.25]);
/// ```
pub trait Redshift: Sized {
    /// The output shape holding one `T` per input redshift.
    type Output<T>;

    /// Applies `f` to each redshift, preserving the input shape.
    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> Self::Output<T>;

    /// Applies `f` to each element of a previously mapped output.
    fn map_output<T: Copy, U>(output: Self::Output<T>, f: impl FnMut(T) -> U)
    -> Self::Output<U>;

    /// Applies a fallible `f` to each redshift, preserving the input shape.
    ///
    /// Elements after the first failure are still visited but their results
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`, in input order.
    fn try_map_each<T: Default, E>(
        self,
        mut f: impl FnMut(f64) -> Result<T, E>,
    ) -> Result<Self::Output<T>, E> {
        let mut first_error = None;
        let output = self.map_each(|z| match f(z) {
            Ok(value) => value,
            Err(error) => {
                first_error.get_or_insert(error);
                T::default()
            }
        });

        match first_error {
            Some(error) => Err(error),
            None => Ok(output),
        }
    }
}

impl Redshift for f64 {
    type Output<T> = T;

    fn map_each<T>(self, mut f: impl FnMut(f64) -> T) -> T {
        f(self)
    }

    fn map_output<T: Copy, U>(output: T, mut f: impl FnMut(T) -> U) -> U {
        f(output)
    }
}

impl Redshift for Vec<f64> {
    type Output<T> = Vec<T>;

    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> Vec<T> {
        self.into_iter().map(f).collect()
    }

    fn map_output<T: Copy, U>(output: Vec<T>, f: impl FnMut(T) -> U) -> Vec<U> {
        output.into_iter().map(f).collect()
    }
}

impl Redshift for &Vec<f64> {
    type Output<T> = Vec<T>;

    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> Vec<T> {
        self.as_slice().map_each(f)
    }

    fn map_output<T: Copy, U>(output: Vec<T>, f: impl FnMut(T) -> U) -> Vec<U> {
        output.into_iter().map(f).collect()
    }
}

impl Redshift for &[f64] {
    type Output<T> = Vec<T>;

    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> Vec<T> {
        self.iter().copied().map(f).collect()
    }

    fn map_output<T: Copy, U>(output: Vec<T>, f: impl FnMut(T) -> U) -> Vec<U> {
        output.into_iter().map(f).collect()
    }
}

impl<const N: usize> Redshift for [f64; N] {
    type Output<T> = [T; N];

    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> [T; N] {
        self.map(f)
    }

    fn map_output<T: Copy, U>(output: [T; N], f: impl FnMut(T) -> U) -> [U; N] {
        output.map(f)
    }
}

impl<D: Dimension> Redshift for Array<f64, D> {
    type Output<T> = Array<T, D>;

    fn map_each<T>(self, f: impl FnMut(f64) -> T) -> Array<T, D> {
        self.mapv(f)
    }

    fn map_output<T: Copy, U>(output: Array<T, D>, f: impl FnMut(T) -> U) -> Array<U, D> {
        output.mapv(f)
    }
}

impl<S, D> Redshift for &ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output<T> = Array<T, D>;

    fn map_each<T>(self, mut f: impl FnMut(f64) -> T) -> Array<T, D> {
        self.map(|&z| f(z))
    }

    fn map_output<T: Copy, U>(output: Array<T, D>, f: impl FnMut(T) -> U) -> Array<U, D> {
        output.mapv(f)
    }
}
