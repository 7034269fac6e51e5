//! Core types for POLFID
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Validated angle wrapper and the polarization measurement bases.

use crate::constants::optics;
use crate::error::{PolfidError, PolfidResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Angle (Validated Wrapper)
// ============================================================================

/// Finite rotation angle, stored in radians
/// Gantree: Angle // 각도 (내부 라디안)
///
/// Degrees are only used at the boundary; every computation reads
/// [`Angle::radians`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    /// Create from radians with validation
    /// Gantree: from_radians(f64) -> Result<Self> // 생성+검증
    pub fn from_radians(radians: f64) -> PolfidResult<Self> {
        if !radians.is_finite() {
            return Err(PolfidError::invalid_input("angle", radians, "must be finite"));
        }
        Ok(Self(radians))
    }

    /// Create from degrees with validation
    /// Gantree: from_degrees(f64) -> Result<Self> // 도 → 라디안
    pub fn from_degrees(degrees: f64) -> PolfidResult<Self> {
        if !degrees.is_finite() {
            return Err(PolfidError::invalid_input("angle", degrees, "must be finite"));
        }
        Ok(Self(optics::deg_to_rad(degrees)))
    }

    /// Value in radians
    #[inline]
    pub fn radians(&self) -> f64 {
        self.0
    }

    /// Value in degrees
    #[inline]
    pub fn degrees(&self) -> f64 {
        optics::rad_to_deg(self.0)
    }

    /// Twice the angle (radians), the argument of the half-wave plate terms
    #[inline]
    pub fn doubled(&self) -> f64 {
        2.0 * self.0
    }

    /// Zero angle
    pub const ZERO: Self = Self(0.0);
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°", self.degrees())
    }
}

impl TryFrom<f64> for Angle {
    type Error = PolfidError;

    /// Interprets the value as radians
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_radians(value)
    }
}

// ============================================================================
// Pauli Axis
// ============================================================================

/// Pauli measurement axis
/// Gantree: PauliAxis // X/Y/Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliAxis {
    /// Diagonal / anti-diagonal
    X,
    /// Right / left circular
    Y,
    /// Horizontal / vertical
    Z,
}

impl PauliAxis {
    /// All axes in tomography order
    pub const ALL: [PauliAxis; 3] = [PauliAxis::X, PauliAxis::Y, PauliAxis::Z];

    /// Pair of bases `(+1 eigenstate, -1 eigenstate)` measured for this axis
    pub fn bases(&self) -> (PolarizationBasis, PolarizationBasis) {
        match self {
            PauliAxis::X => (PolarizationBasis::D, PolarizationBasis::A),
            PauliAxis::Y => (PolarizationBasis::R, PolarizationBasis::L),
            PauliAxis::Z => (PolarizationBasis::H, PolarizationBasis::V),
        }
    }
}

impl fmt::Display for PauliAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PauliAxis::X => write!(f, "X"),
            PauliAxis::Y => write!(f, "Y"),
            PauliAxis::Z => write!(f, "Z"),
        }
    }
}

// ============================================================================
// Polarization Basis
// ============================================================================

/// One of the six polarization projections recorded during tomography
/// Gantree: PolarizationBasis // D/A/R/L/H/V
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarizationBasis {
    /// Diagonal (+45°)
    D,
    /// Anti-diagonal (-45°)
    A,
    /// Right circular
    R,
    /// Left circular
    L,
    /// Horizontal
    H,
    /// Vertical
    V,
}

impl PolarizationBasis {
    /// All bases in the order counts are passed around
    pub const ALL: [PolarizationBasis; 6] = [
        PolarizationBasis::D,
        PolarizationBasis::A,
        PolarizationBasis::R,
        PolarizationBasis::L,
        PolarizationBasis::H,
        PolarizationBasis::V,
    ];

    /// Field name used in error messages
    pub fn field_name(&self) -> &'static str {
        match self {
            PolarizationBasis::D => "D",
            PolarizationBasis::A => "A",
            PolarizationBasis::R => "R",
            PolarizationBasis::L => "L",
            PolarizationBasis::H => "H",
            PolarizationBasis::V => "V",
        }
    }
}

impl fmt::Display for PolarizationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_from_degrees() {
        let a = Angle::from_degrees(90.0).unwrap();
        assert_abs_diff_eq!(a.radians(), PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(a.degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.doubled(), PI, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_rejects_non_finite() {
        assert!(Angle::from_degrees(f64::NAN).is_err());
        assert!(Angle::from_degrees(f64::INFINITY).is_err());
        assert!(Angle::from_radians(f64::NEG_INFINITY).is_err());

        let err = Angle::from_degrees(f64::NAN).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_angle_accepts_any_finite() {
        assert!(Angle::from_degrees(-720.0).is_ok());
        assert!(Angle::try_from(1e6).is_ok());
        assert_eq!(Angle::default(), Angle::ZERO);
    }

    #[test]
    fn test_axis_bases() {
        assert_eq!(PauliAxis::X.bases(), (PolarizationBasis::D, PolarizationBasis::A));
        assert_eq!(PauliAxis::Y.bases(), (PolarizationBasis::R, PolarizationBasis::L));
        assert_eq!(PauliAxis::Z.bases(), (PolarizationBasis::H, PolarizationBasis::V));
    }
}
