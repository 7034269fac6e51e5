//! Pauli expectation values
//!
//! Gantree: L3_Tomo → PauliExpectations
//!
//! ⟨X⟩ = (D − A)/T, ⟨Y⟩ = (R − L)/T, ⟨Z⟩ = (H − V)/T.

use crate::counts::PhotonCounts;
use polfid_core::PauliAxis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expectation values of X, Y and Z (the Bloch vector)
/// Gantree: PauliExpectations // ⟨X⟩,⟨Y⟩,⟨Z⟩
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PauliExpectations {
    /// ⟨X⟩
    pub x: f64,
    /// ⟨Y⟩
    pub y: f64,
    /// ⟨Z⟩
    pub z: f64,
}

impl PauliExpectations {
    /// Create from explicit values
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Compute from validated counts
    /// Gantree: from_counts(counts) -> Self // 기댓값 계산
    pub fn from_counts(counts: &PhotonCounts) -> Self {
        let t = counts.total();
        let axis = |a: PauliAxis| {
            let (plus, minus) = counts.pair(a);
            (plus - minus) / t
        };
        Self {
            x: axis(PauliAxis::X),
            y: axis(PauliAxis::Y),
            z: axis(PauliAxis::Z),
        }
    }

    /// Value for one axis
    pub fn get(&self, axis: PauliAxis) -> f64 {
        match axis {
            PauliAxis::X => self.x,
            PauliAxis::Y => self.y,
            PauliAxis::Z => self.z,
        }
    }

    /// `[x, y, z]`
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Bloch vector length |r|
    pub fn bloch_length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Purity (1 + |r|²)/2 of the reconstructed state
    pub fn purity(&self) -> f64 {
        0.5 * (1.0 + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// |r| <= 1 within `tol`
    pub fn is_physical(&self, tol: f64) -> bool {
        self.bloch_length() <= 1.0 + tol
    }
}

impl fmt::Display for PauliExpectations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⟨X⟩={:+.4} ⟨Y⟩={:+.4} ⟨Z⟩={:+.4}",
            self.x, self.y, self.z
        )
    }
}
