//! State fidelity
//!
//! Gantree: L4_Metrics → Fidelity
//!
//! F = ⟨ψ|ρ|ψ⟩ for a pure target |ψ⟩ and a measured ρ. For a Hermitian ρ the
//! value is real; [`real_fidelity`] refuses to drop an imaginary remainder
//! larger than the tolerance. Tolerances are relative to the size of the
//! matrix entries once those exceed 1, since rounding grows with them.

use polfid_core::{Complex64, DensityMatrix, Ket2, PolfidError, PolfidResult};

/// Raw fidelity ⟨ψ|ρ|ψ⟩ = ψ†·ρ·ψ
/// Gantree: fidelity(ψ,ρ) -> c64 // 충실도
///
/// Neither realness nor the [0, 1] range is enforced.
pub fn fidelity(state: &Ket2, rho: &DensityMatrix) -> Complex64 {
    state.expectation(rho.matrix())
}

/// Fidelity as a real number
/// Gantree: real_fidelity(ψ,ρ,tol) -> Result<f64> // 허수부 검사
///
/// Fails with `NumericalInconsistency` when `|Im F| > tol · max(1, ‖ρ‖_F)`.
/// The real part is returned unclamped.
pub fn real_fidelity(state: &Ket2, rho: &DensityMatrix, tol: f64) -> PolfidResult<f64> {
    let f = fidelity(state, rho);
    ensure_real("fidelity", f, tol, rho.matrix().frobenius_norm())
}

/// Infidelity 1 − F
/// Gantree: error(F) -> f64 // 1-F
pub fn error(fidelity: f64) -> f64 {
    1.0 - fidelity
}

/// Real part of `z` when its imaginary part is within `tol · max(1, scale)`
pub(crate) fn ensure_real(quantity: &str, z: Complex64, tol: f64, scale: f64) -> PolfidResult<f64> {
    let tol = tol * scale.max(1.0);
    if !z.is_finite() {
        return Err(PolfidError::inconsistent(quantity, z.im, tol));
    }
    if z.im.abs() > tol {
        return Err(PolfidError::inconsistent(quantity, z.im, tol));
    }
    Ok(z.re)
}
