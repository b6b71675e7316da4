//! Price range specification

use tracing::{trace, warn};

use super::Specification;
use crate::candidate::Priced;
use crate::config::{FilterConfig, MINOR_UNITS_PER_MAJOR_UNIT};
use crate::errors::{DomainError, DomainResult};

/// Matches candidates whose normalized price lies in `[min, max]`.
///
/// The candidate's raw price (minor units) is divided by the scale factor
/// before comparison, so bounds are expressed in major units. Both ends are
/// inclusive. A candidate without a usable price never matches.
///
/// # Example
///
/// ```
/// use megafilter_domain::entities::Product;
/// use megafilter_domain::specification::{RangeSpecification, Specification};
///
/// let spec = RangeSpecification::new(1.0, 2.0);
///
/// assert!(!spec.is_satisfied(&Product::new("a", "Gum", 50)));
/// assert!(spec.is_satisfied(&Product::new("b", "Soda", 150)));
/// assert!(spec.is_satisfied(&Product::new("c", "Chips", 200)));
/// assert!(!spec.is_satisfied(&Product::new("d", "Juice", 250)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpecification {
    min: f64,
    max: f64,
    scale: f64,
}

impl RangeSpecification {
    /// Create a range in major units using the default scale.
    ///
    /// `min <= max` is expected but not enforced; an inverted range simply
    /// matches nothing. Use [`RangeSpecification::try_new`] to reject it.
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            warn!(min, max, "price range is inverted and will match nothing");
        }
        Self {
            min,
            max,
            scale: MINOR_UNITS_PER_MAJOR_UNIT,
        }
    }

    /// Create a range, rejecting inverted or NaN bounds
    pub fn try_new(min: f64, max: f64) -> DomainResult<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(DomainError::InvalidRange { min, max });
        }
        Ok(Self::new(min, max))
    }

    /// Range with no upper bound
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Range with no lower bound
    pub fn at_most(max: f64) -> Self {
        Self::new(f64::NEG_INFINITY, max)
    }

    /// Create a range whose scale comes from `config`
    pub fn from_config(min: f64, max: f64, config: &FilterConfig) -> DomainResult<Self> {
        Self::new(min, max).with_scale(config.price_scale)
    }

    /// Replace the minor-to-major unit divisor
    pub fn with_scale(mut self, scale: f64) -> DomainResult<Self> {
        FilterConfig::with_price_scale(scale).validate()?;
        self.scale = scale;
        Ok(self)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Check a price that has already been normalized to major units
    pub fn contains(&self, normalized: f64) -> bool {
        normalized >= self.min && normalized <= self.max
    }
}

impl<T: Priced + ?Sized> Specification<T> for RangeSpecification {
    fn is_satisfied(&self, candidate: &T) -> bool {
        match candidate.price() {
            Some(price) => self.contains(price / self.scale),
            None => {
                trace!("candidate has no price; range not satisfied");
                false
            }
        }
    }

    fn description(&self) -> String {
        format!("price in [{}, {}]", self.min, self.max)
    }
}
