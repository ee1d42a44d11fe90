use std::path::Path;

use num_traits::Float;

use crate::{dataset, Error};

/// Name of the total kinetic energy variable in the diagnostics file.
pub const KE_VARIABLE: &str = "ke_tot";

/// Kinetic energy above which the run is considered unstable.
pub const KE_LIMIT: f64 = 1500.0;

/// Result of one check, carrying the unrounded maximum
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    WithinLimit(f64),
    ExceedsLimit(f64),
}
impl Outcome {
    pub fn kmax(&self) -> f64 {
        match self {
            Outcome::WithinLimit(kmax) | Outcome::ExceedsLimit(kmax) => *kmax,
        }
    }
}

/// Maximum over a series of floats, `None` if the series is empty
pub fn series_max<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::max)
}

/// Reads `ke_tot` from the file at `path` and compares its maximum
/// against [`KE_LIMIT`]. The comparison is a strict greater-than on
/// the unrounded value.
pub fn check_file(path: &Path) -> Result<Outcome, Error> {
    let ke = dataset::read_series(path, KE_VARIABLE)?;
    let kmax =
        series_max(&ke).ok_or_else(|| Error::EmptySeries(KE_VARIABLE.to_string()))?;
    if kmax > KE_LIMIT {
        Ok(Outcome::ExceedsLimit(kmax))
    } else {
        Ok(Outcome::WithinLimit(kmax))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_of_series() {
        assert_eq!(series_max(&[100.0, 200.0, 1499.9]), Some(1499.9));
        assert_eq!(series_max(&[1600.0]), Some(1600.0));
        assert_eq!(series_max(&[-5.0, -2.0, -8.0]), Some(-2.0));
    }

    #[test]
    fn max_of_empty_series() {
        assert_eq!(series_max::<f64>(&[]), None);
    }

    #[test]
    fn max_ignores_nan() {
        let m = series_max(&[100.0, f64::NAN, 50.0]).unwrap();
        assert_eq!(m, 100.0);
    }

    #[test]
    fn max_of_f32_series() {
        assert_eq!(series_max(&[1.0f32, 3.0, 2.0]), Some(3.0));
    }

    #[test]
    fn outcome_carries_unrounded_max() {
        assert_eq!(Outcome::ExceedsLimit(1500.4).kmax(), 1500.4);
    }
}
