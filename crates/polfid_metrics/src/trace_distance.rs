//! Trace distance
//!
//! Gantree: L4_Metrics → TraceDistance
//!
//! T(ρ, σ) = ½ Tr √((ρ − σ)(ρ − σ)†). The square root is the analytic matrix
//! root from [`crate::sqrtm`], so the trace equals the sum of the singular
//! values of ρ − σ.

use crate::fidelity::ensure_real;
use crate::sqrtm::matrix_sqrt;
use polfid_core::{Complex64, DensityMatrix, PolfidResult};

/// Raw trace distance, complex-valued
/// Gantree: trace_distance(ρ,σ) -> Result<c64> // 대각합 거리
///
/// Symmetric in its arguments: the sign of ρ − σ cancels in the product.
pub fn trace_distance(a: &DensityMatrix, b: &DensityMatrix) -> PolfidResult<Complex64> {
    let diff = *a.matrix() - *b.matrix();
    let square = diff * diff.dagger();
    let root = matrix_sqrt(&square)?;
    let [d0, d1] = root.diagonal();
    Ok((d0 + d1) / 2.0)
}

/// Trace distance as a real number
/// Gantree: real_trace_distance(ρ,σ,tol) -> Result<f64> // 허수부 검사
///
/// The tolerance is relative to `‖ρ‖_F + ‖σ‖_F` when that exceeds 1.
pub fn real_trace_distance(a: &DensityMatrix, b: &DensityMatrix, tol: f64) -> PolfidResult<f64> {
    let td = trace_distance(a, b)?;
    let scale = a.matrix().frobenius_norm() + b.matrix().frobenius_norm();
    ensure_real("trace distance", td, tol, scale)
}
