//! # POLFID Metrics
//!
//! Comparison of a prepared pure state against a reconstructed density
//! matrix.
//!
//! ## Gantree Architecture
//!
//! ```text
//! polfid_metrics // L4: Comparator (완료)
//!     Fidelity // F = ⟨ψ|ρ|ψ⟩ (완료)
//!         fidelity(), real_fidelity(), error() = 1 − F
//!     MatrixSqrt // 해석적 행렬 제곱근 (완료)
//!         matrix_sqrt() = (M + sI)/t
//!     TraceDistance // ½ Tr √(ΔΔ†) (완료)
//!         trace_distance(), real_trace_distance()
//!     EigenDecomposition // 고윳값/고유벡터 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polfid_core::prelude::*;
//! use polfid_metrics::prelude::*;
//!
//! let h = Ket2::horizontal();
//! let theo = DensityMatrix::theoretical(h.outer(&h));
//! let exp = DensityMatrix::experimental(pauli::bloch_operator(0.0, 0.0, 0.9));
//!
//! let f = real_fidelity(&h, &exp, tolerance::IMAGINARY).unwrap();
//! assert!((error(f) - 0.05).abs() < 1e-12);
//!
//! let td = real_trace_distance(&exp, &theo, tolerance::IMAGINARY).unwrap();
//! assert!((td - 0.05).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Fidelity and error (Gantree: L4_Metrics → Fidelity)
pub mod fidelity;

/// Matrix square root (Gantree: L4_Metrics → MatrixSqrt)
pub mod sqrtm;

/// Trace distance (Gantree: L4_Metrics → TraceDistance)
pub mod trace_distance;

/// Eigen-decomposition (Gantree: L4_Metrics → EigenDecomposition)
pub mod eigen;

pub use eigen::{eigen_decomposition, EigenDecomposition};
pub use fidelity::{error, fidelity, real_fidelity};
pub use sqrtm::matrix_sqrt;
pub use trace_distance::{real_trace_distance, trace_distance};

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::eigen::{eigen_decomposition, EigenDecomposition};
    pub use crate::fidelity::{error, fidelity, real_fidelity};
    pub use crate::sqrtm::matrix_sqrt;
    pub use crate::trace_distance::{real_trace_distance, trace_distance};
}

// ============================================================================
// Integration Tests
// ============================================================================
