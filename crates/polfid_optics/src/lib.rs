//! # POLFID Optics
//!
//! Waveplate Jones matrices and the theoretical state they prepare.
//!
//! ## Gantree Architecture
//!
//! ```text
//! polfid_optics // L2: Preparation (완료)
//!     Waveplate // 파장판 (완료)
//!         half_wave_plate(θ), quarter_wave_plate(φ)
//!         HalfWave / QuarterWave enum, jones(), retardance()
//!     StateConstructor // 순수 상태 (완료)
//!         pure_state(θ, φ) = QWP(φ)·HWP(θ)·|H⟩
//!         outer_product(ψ) = ψψ†
//!         PreparationSetup // 파장판 쌍
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polfid_optics::prelude::*;
//!
//! let setup = PreparationSetup::from_degrees(22.5, 0.0).unwrap();
//! let rho = setup.density_matrix();
//!
//! assert!((rho.trace().re - 1.0).abs() < 1e-12);
//! assert!(rho.is_hermitian(1e-12));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Waveplate Jones matrices (Gantree: L2_Optics → Waveplate)
pub mod waveplate;

/// Pure state and its density matrix (Gantree: L2_Optics → StateConstructor)
pub mod state;

pub use state::{outer_product, pure_state, PreparationSetup};
pub use waveplate::{half_wave_plate, quarter_wave_plate, Waveplate};

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::state::{outer_product, pure_state, PreparationSetup};
    pub use crate::waveplate::{half_wave_plate, quarter_wave_plate, Waveplate};
    pub use polfid_core::prelude::*;
}
