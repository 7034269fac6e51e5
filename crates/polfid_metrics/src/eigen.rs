//! Eigen-decomposition of 2x2 matrices
//!
//! Gantree: L4_Metrics → EigenDecomposition
//!
//! Closed form λ± = tr/2 ± √((tr/2)² − det). Values are returned in the
//! order the formula produces them (`+` root first); sorting is left to the
//! caller. A defective (non-diagonalizable) input yields a repeated
//! eigenvector.

use polfid_core::{tolerance, Complex64, DensityMatrix, Ket2, Mat2};
use serde::{Deserialize, Serialize};

/// Eigenvalues and unit eigenvectors
/// Gantree: EigenDecomposition // 고윳값 분해
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenDecomposition {
    /// Eigenvalues
    pub values: [Complex64; 2],
    /// Eigenvectors, `vectors[i]` belongs to `values[i]`
    pub vectors: [Ket2; 2],
}

impl EigenDecomposition {
    /// Decompose a 2x2 matrix
    /// Gantree: of(M) -> Self // 닫힌 형식
    pub fn of(m: &Mat2) -> Self {
        let [[a, b], [c, d]] = m.rows();
        let scale = m.frobenius_norm().max(1.0);

        // Already diagonal: read the entries off directly
        if b.norm() <= tolerance::ZERO * scale && c.norm() <= tolerance::ZERO * scale {
            return Self {
                values: [a, d],
                vectors: [Ket2::horizontal(), Ket2::vertical()],
            };
        }

        let half_tr = (a + d) / 2.0;
        let disc = (half_tr * half_tr - m.determinant()).sqrt();
        let values = [half_tr + disc, half_tr - disc];
        let vectors = values.map(|lambda| eigenvector(a, b, c, d, lambda));

        Self { values, vectors }
    }

    /// Eigenvalues only
    pub fn eigenvalues(&self) -> [Complex64; 2] {
        self.values
    }

    /// Same decomposition ordered by descending real part
    pub fn sorted_descending(&self) -> Self {
        if self.values[0].re >= self.values[1].re {
            *self
        } else {
            Self {
                values: [self.values[1], self.values[0]],
                vectors: [self.vectors[1], self.vectors[0]],
            }
        }
    }

    /// Largest ‖M v − λ v‖ over both pairs
    pub fn residual(&self, m: &Mat2) -> f64 {
        self.values
            .iter()
            .zip(self.vectors.iter())
            .map(|(&lambda, v)| (m.apply(v) - *v * lambda).norm())
            .fold(0.0, f64::max)
    }
}

/// Decompose a density matrix
/// Gantree: eigen_decomposition(ρ) -> EigenDecomposition // 순도 점검
pub fn eigen_decomposition(rho: &DensityMatrix) -> EigenDecomposition {
    EigenDecomposition::of(rho.matrix())
}

/// Unit eigenvector for `lambda`, picking the better-conditioned row
fn eigenvector(a: Complex64, b: Complex64, c: Complex64, d: Complex64, lambda: Complex64) -> Ket2 {
    // (a − λ) x + b y = 0  →  v = [b, λ − a]
    // c x + (d − λ) y = 0  →  v = [λ − d, c]
    let from_top = Ket2::new(b, lambda - a);
    let from_bottom = Ket2::new(lambda - d, c);
    let v = if from_top.norm() >= from_bottom.norm() {
        from_top
    } else {
        from_bottom
    };
    v.normalized().unwrap_or_else(Ket2::horizontal)
}
