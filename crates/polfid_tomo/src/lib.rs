//! # POLFID Tomo
//!
//! Single-qubit polarization tomography from six projective readings.
//!
//! ## Gantree Architecture
//!
//! ```text
//! polfid_tomo // L3: Reconstruction (완료)
//!     PhotonCounts // T + D,A,R,L,H,V, T>0 검증 (완료)
//!     PauliExpectations // ⟨X⟩,⟨Y⟩,⟨Z⟩ (완료)
//!         from_counts(), bloch_length(), purity()
//!     Reconstructor // ρ = ½(I + ⟨X⟩X + ⟨Y⟩Y + ⟨Z⟩Z) (완료)
//!         experimental_density_matrix(), experimental()
//!     PhysicalityReport // 물리성 진단 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polfid_tomo::prelude::*;
//!
//! let counts = PhotonCounts::new(10.0, 5.0, 5.0, 5.0, 5.0, 10.0, 0.0).unwrap();
//! let rho = experimental_density_matrix(&counts);
//!
//! assert!((rho.matrix().get(0, 0).re - 1.0).abs() < 1e-12);
//! assert!(PhysicalityReport::inspect_default(&rho).is_physical());
//!
//! // A zero normalization is rejected up front
//! assert!(PhotonCounts::new(0.0, 5.0, 5.0, 5.0, 5.0, 10.0, 0.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Photon count record (Gantree: L3_Tomo → PhotonCounts)
pub mod counts;

/// Pauli expectations (Gantree: L3_Tomo → PauliExpectations)
pub mod expectation;

/// Linear-inversion reconstruction (Gantree: L3_Tomo → Reconstructor)
pub mod reconstruct;

/// Physicality diagnostics (Gantree: L3_Tomo → PhysicalityReport)
pub mod diagnostics;

pub use counts::PhotonCounts;
pub use diagnostics::PhysicalityReport;
pub use expectation::PauliExpectations;
pub use reconstruct::{experimental, experimental_density_matrix, from_expectations};

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::counts::PhotonCounts;
    pub use crate::diagnostics::PhysicalityReport;
    pub use crate::expectation::PauliExpectations;
    pub use crate::reconstruct::{experimental, experimental_density_matrix, from_expectations};
    pub use polfid_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reconstruction_recovers_bloch_vector() {
        let counts = PhotonCounts::new(5.6, 0.654, 4.9, 1.0, 4.52, 3.2, 2.574).unwrap();
        let e = PauliExpectations::from_counts(&counts);
        let rho = experimental_density_matrix(&counts);

        let r = rho.bloch_vector();
        for (got, want) in r.iter().zip(e.as_array().iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(rho.purity(), e.purity(), epsilon = 1e-12);
    }

    #[test]
    fn test_each_basis_state() {
        // Fully polarized along each axis, T = 1
        let cases = [
            ([1.0, 0.0, 0.5, 0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
            ([0.0, 1.0, 0.5, 0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
            ([0.5, 0.5, 1.0, 0.0, 0.5, 0.5], [0.0, 1.0, 0.0]),
            ([0.5, 0.5, 0.0, 1.0, 0.5, 0.5], [0.0, -1.0, 0.0]),
            ([0.5, 0.5, 0.5, 0.5, 0.0, 1.0], [0.0, 0.0, -1.0]),
        ];
        for ([d, a, r, l, h, v], bloch) in cases {
            let rho = experimental(1.0, d, a, r, l, h, v).unwrap();
            assert_abs_diff_eq!(rho.purity(), 1.0, epsilon = 1e-12);
            let got = rho.bloch_vector();
            for i in 0..3 {
                assert_abs_diff_eq!(got[i], bloch[i], epsilon = 1e-12);
            }
        }
    }
}
