//! Density matrices
//!
//! Gantree: L1_Algebra → DensityMatrix
//!
//! A [`Mat2`] tagged with where it came from. Hermiticity, unit trace and
//! positivity are assumed for theoretical matrices and only approximately
//! true for experimental ones; nothing here enforces them.

use crate::matrix::Mat2;
use crate::pauli;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a density matrix
/// Gantree: DensityKind // 이론/실험
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityKind {
    /// Outer product of a prepared pure state
    Theoretical,
    /// Reconstructed from tomography counts
    Experimental,
}

impl fmt::Display for DensityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensityKind::Theoretical => write!(f, "theoretical"),
            DensityKind::Experimental => write!(f, "experimental"),
        }
    }
}

/// Single-qubit density matrix
/// Gantree: DensityMatrix // Mat2 + kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityMatrix {
    matrix: Mat2,
    kind: DensityKind,
}

impl DensityMatrix {
    /// Wrap a matrix
    pub fn new(matrix: Mat2, kind: DensityKind) -> Self {
        Self { matrix, kind }
    }

    /// Wrap a matrix as theoretical
    pub fn theoretical(matrix: Mat2) -> Self {
        Self::new(matrix, DensityKind::Theoretical)
    }

    /// Wrap a matrix as experimental
    pub fn experimental(matrix: Mat2) -> Self {
        Self::new(matrix, DensityKind::Experimental)
    }

    /// Same matrix, different tag
    pub fn with_kind(self, kind: DensityKind) -> Self {
        Self { kind, ..self }
    }

    /// Underlying matrix
    #[inline]
    pub fn matrix(&self) -> &Mat2 {
        &self.matrix
    }

    /// Origin tag
    #[inline]
    pub fn kind(&self) -> DensityKind {
        self.kind
    }

    /// Tr ρ
    pub fn trace(&self) -> Complex64 {
        self.matrix.trace()
    }

    /// Purity Tr ρ² (real part)
    /// Gantree: purity() -> f64 // 순도
    pub fn purity(&self) -> f64 {
        (self.matrix * self.matrix).trace().re
    }

    /// Bloch vector `(Tr ρX, Tr ρY, Tr ρZ)`, real parts
    pub fn bloch_vector(&self) -> [f64; 3] {
        [
            (self.matrix * pauli::X).trace().re,
            (self.matrix * pauli::Y).trace().re,
            (self.matrix * pauli::Z).trace().re,
        ]
    }

    /// Check ρ == ρ† within `tol`
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.matrix.is_hermitian(tol)
    }

    /// Check |Tr ρ - 1| <= tol
    pub fn has_unit_trace(&self, tol: f64) -> bool {
        (self.trace() - Complex64::new(1.0, 0.0)).norm() <= tol
    }
}

impl From<DensityMatrix> for Mat2 {
    fn from(rho: DensityMatrix) -> Self {
        rho.matrix
    }
}

impl fmt::Display for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ρ_{} = {}", self.kind, self.matrix)
    }
}

// ============================================================================
// Tests
// ============================================================================
