//! Constants for POLFID
//!
//! Gantree: L0_Foundation → Constants
//!
//! Numerical tolerances and presentation defaults shared by every crate.

// ============================================================================
// Numerical Tolerances
// Gantree: tolerance // 수치 허용오차
// ============================================================================

pub mod tolerance {
    //! Numerical tolerances for 2x2 complex algebra

    /// Largest imaginary remainder accepted on a quantity that must be real
    /// Gantree: IMAGINARY: f64 = 1e-9
    pub const IMAGINARY: f64 = 1e-9;

    /// Element-wise tolerance for `M == M†`
    /// Gantree: HERMITIAN: f64 = 1e-9
    pub const HERMITIAN: f64 = 1e-9;

    /// Allowed deviation of a density matrix trace from 1
    pub const TRACE: f64 = 1e-6;

    /// Magnitude below which a matrix or scalar is treated as zero
    pub const ZERO: f64 = 1e-12;

    /// Relative mismatch between an axis sum and the total power that is
    /// still treated as ordinary source drift
    pub const NORMALIZATION_DRIFT: f64 = 0.05;

    /// Loosened imaginary tolerance for noisy laboratory data
    pub const LENIENT_IMAGINARY: f64 = 1e-6;

    /// Tightened imaginary tolerance
    pub const STRICT_IMAGINARY: f64 = 1e-12;
}

// ============================================================================
// Presentation Constants
// Gantree: format // 출력 형식
// ============================================================================

pub mod format {
    //! Defaults for rendering results at the boundary

    /// Decimal places in every formatted result field
    /// Gantree: DEFAULT_DECIMALS: usize = 3
    pub const DEFAULT_DECIMALS: usize = 3;

    /// Upper bound accepted by config validation
    pub const MAX_DECIMALS: usize = 15;
}

// ============================================================================
// Optics Constants
// Gantree: optics // 광학 상수
// ============================================================================

pub mod optics {
    //! Waveplate retardances

    use std::f64::consts::PI;

    /// Half-wave plate phase retardance (radians)
    pub const HALF_WAVE_RETARDANCE: f64 = PI;

    /// Quarter-wave plate phase retardance (radians)
    pub const QUARTER_WAVE_RETARDANCE: f64 = PI / 2.0;

    /// Convert degrees to radians
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }

    /// Convert radians to degrees
    #[inline]
    pub fn rad_to_deg(rad: f64) -> f64 {
        rad.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_ordering() {
        assert!(tolerance::STRICT_IMAGINARY < tolerance::IMAGINARY);
        assert!(tolerance::IMAGINARY < tolerance::LENIENT_IMAGINARY);
        assert!(tolerance::ZERO < tolerance::HERMITIAN);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((optics::deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((optics::rad_to_deg(optics::QUARTER_WAVE_RETARDANCE) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_decimals() {
        assert_eq!(format::DEFAULT_DECIMALS, 3);
        assert!(format::DEFAULT_DECIMALS <= format::MAX_DECIMALS);
    }
}
