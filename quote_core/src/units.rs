//! # Unit Types
//!
//! Type-safe wrappers for the quoting units. Simple f64 newtypes rather
//! than a full units library: the domain uses exactly four quantities,
//! JSON serialization should stay plain numbers, and overhead should be
//! nil.
//!
//! - Length: meters (m)
//! - Area: square meters (m²)
//! - Unit price: currency per square meter (R$/m²)
//! - Money: Brazilian reais (R$)
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Meters, PricePerSquareMeter};
//!
//! let area = Meters(2.0) * Meters(3.0);
//! assert_eq!(area.0, 6.0);
//!
//! let cost = area * PricePerSquareMeter(1050.0);
//! assert_eq!(cost.0, 6300.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Component-wise maximum, used for the billing height floor
    pub fn max(self, other: Meters) -> Meters {
        Meters(self.0.max(other.0))
    }
}

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Unit price in reais per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricePerSquareMeter(pub f64);

/// Money amount in reais
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Mul for Meters {
    type Output = SquareMeters;

    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<PricePerSquareMeter> for SquareMeters {
    type Output = Money;

    fn mul(self, rhs: PricePerSquareMeter) -> Money {
        Money(self.0 * rhs.0)
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, rhs: f64) -> Money {
        Money(self.0 * rhs)
    }
}

impl std::fmt::Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

impl std::fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m²", self.0)
    }
}

impl std::fmt::Display for PricePerSquareMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}/m²", self.0)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}
