//! Density matrix reconstruction
//!
//! Gantree: L3_Tomo → Reconstructor
//!
//! Linear-inversion tomography: ρ = ½(I + ⟨X⟩X + ⟨Y⟩Y + ⟨Z⟩Z). The result is
//! not projected onto the physical states; noisy counts may give a matrix
//! with a negative eigenvalue.

use crate::counts::PhotonCounts;
use crate::expectation::PauliExpectations;
use polfid_core::{pauli, DensityMatrix, PolfidResult};

/// Experimental density matrix from Pauli expectations
/// Gantree: from_expectations(e) -> DensityMatrix // 파울리 전개
pub fn from_expectations(e: &PauliExpectations) -> DensityMatrix {
    DensityMatrix::experimental(pauli::bloch_operator(e.x, e.y, e.z))
}

/// Experimental density matrix from validated counts
/// Gantree: experimental_density_matrix(counts) -> DensityMatrix // 실험 밀도 행렬
pub fn experimental_density_matrix(counts: &PhotonCounts) -> DensityMatrix {
    from_expectations(&PauliExpectations::from_counts(counts))
}

/// Validate raw readings, then reconstruct
///
/// Fails with `InvalidInput` when `total <= 0` instead of dividing by zero.
pub fn experimental(
    total: f64,
    d: f64,
    a: f64,
    r: f64,
    l: f64,
    h: f64,
    v: f64,
) -> PolfidResult<DensityMatrix> {
    let counts = PhotonCounts::new(total, d, a, r, l, h, v)?;
    Ok(experimental_density_matrix(&counts))
}
