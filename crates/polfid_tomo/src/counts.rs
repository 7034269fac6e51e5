//! Photon count record
//!
//! Gantree: L3_Tomo → PhotonCounts
//!
//! Six projective readings plus the normalization power. The values may be
//! raw coincidence counts or optical powers; only their ratios to `total`
//! matter.

use polfid_core::{PauliAxis, PolarizationBasis, PolfidError, PolfidResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Readings in the D, A, R, L, H, V projections and total power T
/// Gantree: PhotonCounts // T + D,A,R,L,H,V
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotonCounts {
    total: f64,
    d: f64,
    a: f64,
    r: f64,
    l: f64,
    h: f64,
    v: f64,
}

impl PhotonCounts {
    /// Create with validation
    /// Gantree: new(T,D,A,R,L,H,V) -> Result<Self> // 생성+검증
    ///
    /// Fails with `InvalidInput` when `total <= 0`, any reading is negative,
    /// any value is not finite, or `total` is too small for the axis
    /// contrasts `(plus − minus) / total` to stay finite.
    pub fn new(total: f64, d: f64, a: f64, r: f64, l: f64, h: f64, v: f64) -> PolfidResult<Self> {
        if !total.is_finite() {
            return Err(PolfidError::invalid_input("total_power", total, "must be finite"));
        }
        if total <= 0.0 {
            return Err(PolfidError::invalid_input("total_power", total, "must be > 0"));
        }

        let counts = Self {
            total,
            d,
            a,
            r,
            l,
            h,
            v,
        };

        for basis in PolarizationBasis::ALL {
            let value = counts.get(basis);
            if !value.is_finite() {
                return Err(PolfidError::invalid_input(basis.field_name(), value, "must be finite"));
            }
            if value < 0.0 {
                return Err(PolfidError::invalid_input(basis.field_name(), value, "must be >= 0"));
            }
        }

        for axis in PauliAxis::ALL {
            let (plus, minus) = counts.pair(axis);
            if !((plus - minus) / total).is_finite() {
                return Err(PolfidError::invalid_input(
                    "total_power",
                    total,
                    format!("too small to normalize the {} axis", axis),
                ));
            }
        }

        Ok(counts)
    }

    /// Total power / normalization T
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Reading for one projection
    pub fn get(&self, basis: PolarizationBasis) -> f64 {
        match basis {
            PolarizationBasis::D => self.d,
            PolarizationBasis::A => self.a,
            PolarizationBasis::R => self.r,
            PolarizationBasis::L => self.l,
            PolarizationBasis::H => self.h,
            PolarizationBasis::V => self.v,
        }
    }

    /// `(+1 reading, -1 reading)` for an axis
    pub fn pair(&self, axis: PauliAxis) -> (f64, f64) {
        let (plus, minus) = axis.bases();
        (self.get(plus), self.get(minus))
    }

    /// Sum of the two readings on an axis
    ///
    /// Ideally equal to `total` for every axis; a mismatch points at drift
    /// or detector imbalance between measurement settings.
    pub fn axis_sum(&self, axis: PauliAxis) -> f64 {
        let (plus, minus) = self.pair(axis);
        plus + minus
    }

    /// Largest relative deviation of an axis sum from `total`
    pub fn max_normalization_drift(&self) -> f64 {
        PauliAxis::ALL
            .iter()
            .map(|&axis| ((self.axis_sum(axis) - self.total) / self.total).abs())
            .fold(0.0, f64::max)
    }

    /// Every axis sum lies within `tol` (relative) of `total`
    pub fn is_balanced(&self, tol: f64) -> bool {
        self.max_normalization_drift() <= tol
    }
}

impl fmt::Display for PhotonCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={} D={} A={} R={} L={} H={} V={}",
            self.total, self.d, self.a, self.r, self.l, self.h, self.v
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
