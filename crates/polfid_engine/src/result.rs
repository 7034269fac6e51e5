//! Comparison results
//!
//! Gantree: L5_Engine → Results
//!
//! [`ComparisonResult`] keeps full precision for programmatic use;
//! [`FormattedResult`] is the four-string summary reported to users.

use crate::format::{format_complex, format_real};
use polfid_core::{Complex64, PolfidResult};
use polfid_optics::PreparationSetup;
use polfid_tomo::{PauliExpectations, PhysicalityReport};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ComparisonResult
// ============================================================================

/// Full-precision outcome of one theory/experiment comparison
/// Gantree: ComparisonResult // 전체 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Waveplate settings the target state was prepared with
    pub setup: PreparationSetup,

    /// ⟨ψ|ρ_exp|ψ⟩
    pub fidelity: f64,

    /// 1 − fidelity
    pub error: f64,

    /// ½ Tr |ρ_exp − ρ_theo|
    pub trace_distance: f64,

    /// Eigenvalues of ρ_theo in reporting order
    pub eigenvalues: [Complex64; 2],

    /// Tr ρ_theo²
    pub theoretical_purity: f64,

    /// Tr ρ_exp²
    pub experimental_purity: f64,

    /// Bloch vector of ρ_exp
    pub expectations: PauliExpectations,

    /// Physicality diagnostics of ρ_exp
    pub physicality: PhysicalityReport,
}

impl ComparisonResult {
    /// Whether the measured state passed every physicality check
    pub fn is_physical(&self) -> bool {
        self.physicality.is_physical()
    }

    /// Format with the given number of decimals
    pub fn format(&self, decimals: usize) -> FormattedResult {
        FormattedResult::from_result(self, decimals)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> PolfidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: F={:.6}, error={:.6}, TD={:.6}, λ=[{}, {}]",
            self.setup,
            self.fidelity,
            self.error,
            self.trace_distance,
            format_complex(self.eigenvalues[0], 6),
            format_complex(self.eigenvalues[1], 6)
        )
    }
}

// ============================================================================
// FormattedResult
// ============================================================================

/// The four reported quantities as fixed-precision strings
/// Gantree: FormattedResult // (λ0, λ1, error, TD)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// First eigenvalue of ρ_theo
    pub eigenvalue_0: String,
    /// Second eigenvalue of ρ_theo
    pub eigenvalue_1: String,
    /// 1 − fidelity
    pub error: String,
    /// Trace distance
    pub trace_distance: String,
}

impl FormattedResult {
    /// Format a full-precision result
    /// Gantree: from_result(r,n) -> Self // 문자열 변환
    pub fn from_result(result: &ComparisonResult, decimals: usize) -> Self {
        Self {
            eigenvalue_0: format_complex(result.eigenvalues[0], decimals),
            eigenvalue_1: format_complex(result.eigenvalues[1], decimals),
            error: format_real(result.error, decimals),
            trace_distance: format_real(result.trace_distance, decimals),
        }
    }

    /// `(eigenvalue_0, eigenvalue_1, error, trace_distance)`
    pub fn to_tuple(&self) -> (String, String, String, String) {
        (
            self.eigenvalue_0.clone(),
            self.eigenvalue_1.clone(),
            self.error.clone(),
            self.trace_distance.clone(),
        )
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> PolfidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> PolfidResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eigenvalues = [{}, {}], error = {}, trace distance = {}",
            self.eigenvalue_0, self.eigenvalue_1, self.error, self.trace_distance
        )
    }
}
