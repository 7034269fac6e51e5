//! # POLFID Engine
//!
//! Theory versus experiment comparison for a single polarization qubit.
//!
//! ## Gantree Architecture
//!
//! ```text
//! polfid_engine // L5: Integration (완료)
//!     PolfidConfig // 정밀도, 허용오차, 고윳값 순서 (완료)
//!         standard(), strict(), lenient()
//!     Formatter // "a+bi" 고정 소수 (완료)
//!         format_real(), format_complex()
//!     StateComparator // 비교기 (완료)
//!         compute() - 각도 + 측정값 → 4개 문자열
//!         compare_counts() → compare_density()
//!     Results // 결과 (완료)
//!         ComparisonResult, FormattedResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polfid_engine::prelude::*;
//!
//! // HWP at 0°, QWP at 0°: target |H⟩, measured |H⟩
//! let out = compute(0.0, 0.0, 10.0, 5.0, 5.0, 5.0, 5.0, 10.0, 0.0).unwrap();
//! assert_eq!(
//!     out.to_tuple(),
//!     ("1.000".into(), "0.000".into(), "0.000".into(), "0.000".into())
//! );
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use polfid_engine::prelude::*;
//!
//! let config = PolfidConfig::strict()
//!     .with_decimals(6)
//!     .with_eigen_order(EigenOrder::AsComputed);
//!
//! let comparator = StateComparator::new(config).unwrap();
//! let out = comparator
//!     .compute(80.0, 50.0, 5.6, 0.654, 4.9, 1.0, 4.52, 3.2, 2.574)
//!     .unwrap();
//! assert_eq!(out.error.len(), "0.004545".len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Configuration (Gantree: L5_Engine → PolfidConfig)
pub mod config;

/// Result formatting (Gantree: L5_Engine → Formatter)
pub mod format;

/// Result types (Gantree: L5_Engine → Results)
pub mod result;

/// Comparison engine (Gantree: L5_Engine → StateComparator)
pub mod comparator;

pub use comparator::{compute, StateComparator};
pub use config::{EigenOrder, PolfidConfig};
pub use format::{format_complex, format_real};
pub use result::{ComparisonResult, FormattedResult};

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::comparator::{compute, StateComparator};
    pub use crate::config::{EigenOrder, PolfidConfig};
    pub use crate::format::{format_complex, format_real};
    pub use crate::result::{ComparisonResult, FormattedResult};
    pub use polfid_optics::PreparationSetup;
    pub use polfid_tomo::{PauliExpectations, PhotonCounts, PhysicalityReport};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
