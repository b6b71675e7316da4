//! Filter configuration

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Minor currency units per major unit (cents per dollar).
///
/// Prices are stored in minor units; range bounds are expressed in major units.
pub const MINOR_UNITS_PER_MAJOR_UNIT: f64 = 100.0;

/// Tunables shared by the leaf specifications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Divisor applied to a candidate's raw price before range comparison
    pub price_scale: f64,
}

impl FilterConfig {
    /// Create a config with a custom price scale
    pub fn with_price_scale(price_scale: f64) -> Self {
        Self { price_scale }
    }

    /// Check that the price scale can be divided by
    pub fn validate(&self) -> DomainResult<()> {
        if !self.price_scale.is_finite() {
            return Err(DomainError::InvalidScale {
                reason: format!("price scale must be finite, got {}", self.price_scale),
            });
        }
        if self.price_scale <= 0.0 {
            return Err(DomainError::InvalidScale {
                reason: format!("price scale must be positive, got {}", self.price_scale),
            });
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_scale: MINOR_UNITS_PER_MAJOR_UNIT,
        }
    }
}
