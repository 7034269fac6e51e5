//! # POLFID Core
//!
//! Foundation types and 2x2 complex algebra for comparing a prepared
//! polarization qubit against its tomographic reconstruction.
//!
//! ## Gantree Architecture
//!
//! ```text
//! polfid_core // L0+L1: Foundation + Algebra (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // Angle, PauliAxis, PolarizationBasis (완료)
//!         Constants // 허용오차/출력 상수 (완료)
//!         Errors // PolfidError (완료)
//!     L1_Algebra // 2x2 복소 대수 (완료)
//!         Mat2 // 2x2 복소 행렬 (완료)
//!         Ket2 // 상태 벡터 (완료)
//!         Pauli // I, X, Y, Z (완료)
//!         DensityMatrix // 밀도 행렬 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polfid_core::prelude::*;
//!
//! let h = Ket2::horizontal();
//! let rho = DensityMatrix::theoretical(h.outer(&h));
//!
//! assert!(rho.has_unit_trace(1e-12));
//! assert!((rho.purity() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Angles
//!
//! ```rust
//! use polfid_core::Angle;
//!
//! let theta = Angle::from_degrees(45.0).unwrap();
//! assert!((theta.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
//! assert!(Angle::from_degrees(f64::NAN).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// 2x2 complex matrix (Gantree: L1_Algebra → Mat2)
pub mod matrix;

/// State vector (Gantree: L1_Algebra → Ket2)
pub mod ket;

/// Pauli operators (Gantree: L1_Algebra → Pauli)
pub mod pauli;

/// Density matrices (Gantree: L1_Algebra → DensityMatrix)
pub mod density;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{format, optics, tolerance};
pub use density::{DensityKind, DensityMatrix};
pub use error::{PolfidError, PolfidResult};
pub use ket::Ket2;
pub use matrix::Mat2;
pub use num_complex::Complex64;
pub use types::{Angle, PauliAxis, PolarizationBasis};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use polfid_core::prelude::*;
    //! ```

    pub use crate::constants::{format, optics, tolerance};
    pub use crate::density::{DensityKind, DensityMatrix};
    pub use crate::error::{PolfidError, PolfidResult};
    pub use crate::ket::Ket2;
    pub use crate::matrix::Mat2;
    pub use crate::pauli;
    pub use crate::types::{Angle, PauliAxis, PolarizationBasis};
    pub use num_complex::Complex64;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_projector_from_unitary_image() {
        // Hadamard-like rotation sends |H⟩ to |D⟩
        let s = 0.5_f64.sqrt();
        let u = Mat2::from_real(s, s, s, -s);
        assert!(u.is_unitary(1e-12));

        let d = u * Ket2::horizontal();
        let rho = DensityMatrix::theoretical(d.outer(&d));

        let [x, y, z] = rho.bloch_vector();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_expectation_matches_trace_formula() {
        // ⟨ψ|M|ψ⟩ == Tr(M |ψ⟩⟨ψ|)
        let psi = Ket2::new(Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8));
        for axis in PauliAxis::ALL {
            let m = pauli::for_axis(axis);
            let lhs = psi.expectation(&m);
            let rhs = (m * psi.outer(&psi)).trace();
            assert_abs_diff_eq!(lhs.re, rhs.re, epsilon = 1e-12);
            assert_abs_diff_eq!(lhs.im, rhs.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "polfid_core");
    }
}
