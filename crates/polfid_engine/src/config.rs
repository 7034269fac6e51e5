//! Engine configuration
//!
//! Gantree: L5_Engine → PolfidConfig
//!
//! Tolerances and presentation settings for a comparison run.

use polfid_core::{format, tolerance, PolfidError, PolfidResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order in which the two eigenvalues are reported
/// Gantree: EigenOrder // 고윳값 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EigenOrder {
    /// Largest real part first
    #[default]
    Descending,

    /// Whatever order the decomposition produced
    AsComputed,
}

/// Comparison configuration
/// Gantree: PolfidConfig // 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolfidConfig {
    /// Decimal places in formatted results
    /// Gantree: decimals: usize // 소수 자리 (3)
    pub decimals: usize,

    /// Largest imaginary remainder accepted on fidelity and trace distance
    /// Gantree: imaginary_tolerance: f64 // 허수부 허용 (1e-9)
    pub imaginary_tolerance: f64,

    /// Tolerance for the Hermiticity / positivity check on measured states
    pub hermitian_tolerance: f64,

    /// Eigenvalue reporting order
    /// Gantree: eigen_order: EigenOrder // descending/as-computed
    pub eigen_order: EigenOrder,

    /// Emit a log warning for unphysical reconstructions
    pub warn_unphysical: bool,
}

impl PolfidConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Standard settings: 3 decimals, 1e-9 tolerances, descending eigenvalues
    pub fn standard() -> Self {
        Self {
            decimals: format::DEFAULT_DECIMALS,
            imaginary_tolerance: tolerance::IMAGINARY,
            hermitian_tolerance: tolerance::HERMITIAN,
            eigen_order: EigenOrder::Descending,
            warn_unphysical: true,
        }
    }

    /// Tight tolerances
    pub fn strict() -> Self {
        Self {
            imaginary_tolerance: tolerance::STRICT_IMAGINARY,
            hermitian_tolerance: tolerance::STRICT_IMAGINARY,
            ..Self::standard()
        }
    }

    /// Loose tolerances, no unphysical warnings
    pub fn lenient() -> Self {
        Self {
            imaginary_tolerance: tolerance::LENIENT_IMAGINARY,
            hermitian_tolerance: tolerance::LENIENT_IMAGINARY,
            warn_unphysical: false,
            ..Self::standard()
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set decimal places
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set imaginary-part tolerance
    pub fn with_imaginary_tolerance(mut self, tol: f64) -> Self {
        self.imaginary_tolerance = tol;
        self
    }

    /// Set Hermiticity tolerance
    pub fn with_hermitian_tolerance(mut self, tol: f64) -> Self {
        self.hermitian_tolerance = tol;
        self
    }

    /// Set eigenvalue order
    pub fn with_eigen_order(mut self, order: EigenOrder) -> Self {
        self.eigen_order = order;
        self
    }

    /// Enable or disable unphysical-state warnings
    pub fn with_warn_unphysical(mut self, enabled: bool) -> Self {
        self.warn_unphysical = enabled;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> PolfidResult<()> {
        if self.decimals > format::MAX_DECIMALS {
            return Err(PolfidError::InvalidConfig(format!(
                "decimals must be <= {}, got {}",
                format::MAX_DECIMALS,
                self.decimals
            )));
        }

        if !(self.imaginary_tolerance.is_finite() && self.imaginary_tolerance >= 0.0) {
            return Err(PolfidError::InvalidConfig(format!(
                "imaginary_tolerance must be finite and >= 0, got {}",
                self.imaginary_tolerance
            )));
        }

        if !(self.hermitian_tolerance.is_finite() && self.hermitian_tolerance >= 0.0) {
            return Err(PolfidError::InvalidConfig(format!(
                "hermitian_tolerance must be finite and >= 0, got {}",
                self.hermitian_tolerance
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to JSON
    pub fn to_json(&self) -> PolfidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate from JSON
    pub fn from_json(json: &str) -> PolfidResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PolfidConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for PolfidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolfidConfig(decimals={}, imag_tol={:.0e}, herm_tol={:.0e}, {:?})",
            self.decimals, self.imaginary_tolerance, self.hermitian_tolerance, self.eigen_order
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
