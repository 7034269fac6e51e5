//! Physicality checks for reconstructed states
//!
//! Gantree: L3_Tomo → PhysicalityReport
//!
//! Linear inversion does not guarantee a valid density matrix. The report
//! records how far a matrix is from one; callers decide whether to warn.

use polfid_core::{tolerance, DensityMatrix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hermiticity, trace and positivity of a density matrix
/// Gantree: PhysicalityReport // 물리성 진단
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalityReport {
    /// ρ == ρ† within tolerance
    pub hermitian: bool,
    /// |Tr ρ − 1|
    pub trace_deviation: f64,
    /// Smallest eigenvalue of the Hermitian part (ρ + ρ†)/2
    pub min_eigenvalue: f64,
    /// Tr ρ²
    pub purity: f64,
    /// Tolerance the report was built with
    pub tolerance: f64,
}

impl PhysicalityReport {
    /// Inspect a density matrix
    /// Gantree: inspect(ρ,tol) -> Self // 진단
    pub fn inspect(rho: &DensityMatrix, tol: f64) -> Self {
        let m = rho.matrix();
        let h = (*m + m.dagger()) * 0.5;

        // Eigenvalues of a Hermitian 2x2: mean ± sqrt(((a − d)/2)² + |b|²)
        let a = h.get(0, 0).re;
        let d = h.get(1, 1).re;
        let b = h.get(0, 1);
        let mean = 0.5 * (a + d);
        let radius = (0.25 * (a - d) * (a - d) + b.norm_sqr()).sqrt();

        Self {
            hermitian: rho.is_hermitian(tol),
            trace_deviation: (rho.trace() - 1.0).norm(),
            min_eigenvalue: mean - radius,
            purity: rho.purity(),
            tolerance: tol,
        }
    }

    /// Inspect with the default Hermitian tolerance
    pub fn inspect_default(rho: &DensityMatrix) -> Self {
        Self::inspect(rho, tolerance::HERMITIAN)
    }

    /// Hermitian, unit trace and positive semi-definite
    pub fn is_physical(&self) -> bool {
        self.hermitian
            && self.trace_deviation <= tolerance::TRACE.max(self.tolerance)
            && self.min_eigenvalue >= -self.tolerance
    }

    /// Human-readable list of violated conditions
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.hermitian {
            out.push("not Hermitian".to_string());
        }
        if self.trace_deviation > tolerance::TRACE.max(self.tolerance) {
            out.push(format!("trace deviates from 1 by {:.3e}", self.trace_deviation));
        }
        if self.min_eigenvalue < -self.tolerance {
            out.push(format!("negative eigenvalue {:.4}", self.min_eigenvalue));
        }
        out
    }
}

impl fmt::Display for PhysicalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_physical() {
            write!(f, "physical (purity {:.4})", self.purity)
        } else {
            write!(f, "unphysical: {}", self.violations().join(", "))
        }
    }
}
