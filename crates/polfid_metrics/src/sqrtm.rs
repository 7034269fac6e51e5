//! Principal matrix square root
//!
//! Gantree: L4_Metrics → MatrixSqrt
//!
//! Closed form for 2x2 matrices: with s = √det M and t = √(tr M + 2s),
//! √M = (M + sI)/t. Principal branches are tried first; if t vanishes the
//! other sign of s is tried. A nonzero nilpotent matrix has no square root.
//!
//! For a positive semi-definite input the principal root is the unique PSD
//! root. Other inputs may have several roots; the one returned is whichever
//! branch succeeds first.

use polfid_core::{tolerance, Complex64, Mat2, PolfidError, PolfidResult};

/// Principal square root of a 2x2 complex matrix
/// Gantree: matrix_sqrt(M) -> Result<Mat2> // 행렬 제곱근
pub fn matrix_sqrt(m: &Mat2) -> PolfidResult<Mat2> {
    if !m.is_finite() {
        return Err(PolfidError::MatrixSqrtUndefined(format!(
            "non-finite entries in {}",
            m
        )));
    }

    let scale = m.frobenius_norm();
    if scale == 0.0 {
        return Ok(Mat2::ZERO);
    }

    let tr = m.trace();
    let s = m.determinant().sqrt();

    for (branch, s) in [s, -s].into_iter().enumerate() {
        let t2 = tr + s * 2.0;
        if t2.norm() <= tolerance::ZERO * scale {
            log::trace!("matrix_sqrt: branch {} has vanishing tr + 2s", branch);
            continue;
        }
        let t = t2.sqrt();
        return Ok((*m + Mat2::IDENTITY * s) * (Complex64::new(1.0, 0.0) / t));
    }

    Err(PolfidError::MatrixSqrtUndefined(format!(
        "no square root exists for nilpotent matrix {}",
        m
    )))
}
