//! Discrete degree distributions and the empirical estimator.
//!
//! [`Pmf`] holds normalised probability masses keyed by degree value and
//! [`Cdf`] holds the matching right-continuous step function. Both serialise
//! as plain value/probability sequences so plotting tools can consume them
//! without depending on this crate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ParadoxError, Result};

/// Tolerance used when checking that masses sum to one.
pub const MASS_TOLERANCE: f64 = 1e-9;

/// Probability mass function over non-negative integer values.
///
/// # Examples
/// ```
/// use paradox_core::Pmf;
///
/// let pmf = Pmf::from_sample(&[1, 1, 1, 3])?;
/// assert_eq!(pmf.mass(1), 0.75);
/// assert_eq!(pmf.mass(3), 0.25);
/// assert_eq!(pmf.mass(2), 0.0);
/// assert!((pmf.mean() - 1.5).abs() < 1e-12);
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Pmf {
    masses: BTreeMap<usize, f64>,
}

impl Pmf {
    /// Builds a normalised PMF from the observed values in `sample`.
    ///
    /// # Errors
    /// Returns [`ParadoxError::EmptySample`] when `sample` is empty.
    pub fn from_sample(sample: &[usize]) -> Result<Self> {
        Self::from_weights(sample.iter().map(|&value| (value, 1.0)))
    }

    /// Accumulates `(value, weight)` pairs and normalises the result.
    ///
    /// Repeated values have their weights summed. Zero-weight entries are
    /// dropped.
    ///
    /// # Errors
    /// Returns [`ParadoxError::EmptySample`] when the total weight is not
    /// strictly positive and finite.
    pub fn from_weights(weights: impl IntoIterator<Item = (usize, f64)>) -> Result<Self> {
        let mut masses = BTreeMap::new();
        for (value, weight) in weights {
            if weight > 0.0 {
                *masses.entry(value).or_insert(0.0) += weight;
            }
        }
        Self { masses }.normalised()
    }

    fn normalised(mut self) -> Result<Self> {
        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return Err(ParadoxError::EmptySample);
        }
        for mass in self.masses.values_mut() {
            *mass /= total;
        }
        Ok(self)
    }

    /// Returns the mass at `value`, zero when absent.
    #[must_use]
    pub fn mass(&self, value: usize) -> f64 {
        self.masses.get(&value).copied().unwrap_or(0.0)
    }

    /// Iterates `(value, mass)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.masses.iter().map(|(&value, &mass)| (value, mass))
    }

    /// Returns the number of values carrying mass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Returns whether the PMF carries no mass at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Returns the sum of all masses; one up to rounding for a normalised PMF.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Returns the expected value.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.iter().map(|(value, mass)| value as f64 * mass).sum()
    }

    /// Multiplies each mass by its value and renormalises.
    ///
    /// This is the size-biased transform: a PMF over node degrees becomes the
    /// distribution of the degree seen from a uniformly chosen edge end.
    ///
    /// # Errors
    /// Returns [`ParadoxError::EmptySample`] when every value is zero.
    pub fn size_biased(&self) -> Result<Self> {
        Self::from_weights(self.iter().map(|(value, mass)| (value, value as f64 * mass)))
    }

    /// Returns the cumulative distribution of this PMF.
    ///
    /// The final step is pinned to exactly 1 so rounding in the running sum
    /// never leaves the tail short of certainty.
    #[must_use]
    pub fn to_cdf(&self) -> Cdf {
        let mut running = 0.0;
        let mut points: Vec<CdfPoint> = self
            .iter()
            .map(|(value, mass)| {
                running += mass;
                CdfPoint {
                    value,
                    probability: running.min(1.0),
                }
            })
            .collect();
        if let Some(last) = points.last_mut() {
            last.probability = 1.0;
        }
        Cdf { points }
    }
}

/// One step of a [`Cdf`]: `P(X <= value) = probability`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CdfPoint {
    /// Degree value at which the step occurs.
    pub value: usize,
    /// Cumulative probability up to and including `value`.
    pub probability: f64,
}

/// Cumulative distribution function stored as ascending step points.
///
/// # Examples
/// ```
/// use paradox_core::Cdf;
///
/// let cdf = Cdf::from_sample(&[3, 1, 1, 1])?;
/// assert_eq!(cdf.probability_at(0), 0.0);
/// assert_eq!(cdf.probability_at(1), 0.75);
/// assert_eq!(cdf.probability_at(2), 0.75);
/// assert_eq!(cdf.probability_at(3), 1.0);
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cdf {
    points: Vec<CdfPoint>,
}

impl Cdf {
    /// Estimates the empirical CDF of `sample`.
    ///
    /// Values are tallied, sorted ascending and accumulated; the result is
    /// deterministic for a given multiset of observations.
    ///
    /// # Errors
    /// Returns [`ParadoxError::EmptySample`] when `sample` is empty.
    pub fn from_sample(sample: &[usize]) -> Result<Self> {
        if sample.is_empty() {
            return Err(ParadoxError::EmptySample);
        }
        let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
        for &value in sample {
            *tally.entry(value).or_insert(0) += 1;
        }
        let total = sample.len() as f64;
        let mut cumulative = 0_usize;
        let points = tally
            .into_iter()
            .map(|(value, count)| {
                cumulative += count;
                CdfPoint {
                    value,
                    probability: cumulative as f64 / total,
                }
            })
            .collect();
        Ok(Self { points })
    }

    /// Returns the step points in ascending value order.
    #[must_use]
    pub fn points(&self) -> &[CdfPoint] {
        &self.points
    }

    /// Iterates the distinct values at which the CDF steps.
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter().map(|point| point.value)
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the CDF has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluates `P(X <= value)`.
    #[must_use]
    pub fn probability_at(&self, value: usize) -> f64 {
        let index = self.points.partition_point(|point| point.value <= value);
        index
            .checked_sub(1)
            .and_then(|last| self.points.get(last))
            .map_or(0.0, |point| point.probability)
    }

    /// Returns the Kolmogorov–Smirnov distance to `other`.
    ///
    /// Both CDFs are step functions, so the supremum is attained at one of
    /// the values present in either.
    #[must_use]
    pub fn ks_distance(&self, other: &Self) -> f64 {
        let mut values: Vec<usize> = self.values().chain(other.values()).collect();
        values.sort_unstable();
        values.dedup();
        values
            .into_iter()
            .map(|value| (self.probability_at(value) - other.probability_at(value)).abs())
            .fold(0.0, f64::max)
    }

    /// Recovers the PMF by differencing consecutive steps.
    #[must_use]
    pub fn to_pmf(&self) -> Pmf {
        let mut previous = 0.0;
        let masses = self
            .points
            .iter()
            .map(|point| {
                let mass = point.probability - previous;
                previous = point.probability;
                (point.value, mass)
            })
            .collect();
        Pmf { masses }
    }

    /// Returns the expected value.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.to_pmf().mean()
    }
}

/// Estimates the empirical CDF of a degree sample.
///
/// # Errors
/// Returns [`ParadoxError::EmptySample`] when `sample` is empty.
pub fn estimate_cdf(sample: &[usize]) -> Result<Cdf> {
    Cdf::from_sample(sample)
}
