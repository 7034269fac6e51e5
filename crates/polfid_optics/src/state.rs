//! Theoretical state preparation
//!
//! Gantree: L2_Optics → StateConstructor
//!
//! Horizontally polarized light passes the half-wave plate first and the
//! quarter-wave plate second: |ψ⟩ = QWP(φ) · HWP(θ) · |H⟩. The element order
//! is physical and fixed.

use crate::waveplate::{half_wave_plate, quarter_wave_plate, Waveplate};
use polfid_core::{Angle, DensityMatrix, Ket2, Mat2, PolfidError, PolfidResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prepared pure state for waveplate angles θ (HWP) and φ (QWP)
/// Gantree: pure_state(θ,φ) -> Ket2 // QWP·HWP·|H⟩
pub fn pure_state(theta: Angle, phi: Angle) -> Ket2 {
    quarter_wave_plate(phi) * (half_wave_plate(theta) * Ket2::horizontal())
}

/// Density matrix |ψ⟩⟨ψ| of a pure state, tagged theoretical
/// Gantree: outer_product(ψ) -> DensityMatrix // ψψ†
pub fn outer_product(state: &Ket2) -> DensityMatrix {
    DensityMatrix::theoretical(state.outer(state))
}

/// Waveplate pair in front of a horizontally polarized source
/// Gantree: PreparationSetup // hwp, qwp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreparationSetup {
    /// Half-wave plate angle θ
    pub hwp: Angle,
    /// Quarter-wave plate angle φ
    pub qwp: Angle,
}

impl PreparationSetup {
    /// Create from validated angles
    pub fn new(hwp: Angle, qwp: Angle) -> Self {
        Self { hwp, qwp }
    }

    /// Create from angles in degrees
    /// Gantree: from_degrees(θ°,φ°) -> Result<Self> // 도 입력
    pub fn from_degrees(theta_deg: f64, phi_deg: f64) -> PolfidResult<Self> {
        Ok(Self::new(
            Angle::from_degrees(theta_deg)
                .map_err(|_| PolfidError::invalid_input("theta", theta_deg, "must be finite"))?,
            Angle::from_degrees(phi_deg)
                .map_err(|_| PolfidError::invalid_input("phi", phi_deg, "must be finite"))?,
        ))
    }

    /// Elements in beam order
    pub fn elements(&self) -> [Waveplate; 2] {
        [Waveplate::HalfWave(self.hwp), Waveplate::QuarterWave(self.qwp)]
    }

    /// Combined operator QWP(φ) · HWP(θ)
    pub fn jones(&self) -> Mat2 {
        self.elements()
            .iter()
            .fold(Mat2::IDENTITY, |acc, element| element.jones() * acc)
    }

    /// Prepared pure state
    pub fn state(&self) -> Ket2 {
        pure_state(self.hwp, self.qwp)
    }

    /// Theoretical density matrix
    pub fn density_matrix(&self) -> DensityMatrix {
        outer_product(&self.state())
    }
}

impl fmt::Display for PreparationSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hwp, qwp] = self.elements();
        write!(f, "|H⟩ → {} → {}", hwp, qwp)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::PI;

    fn random_setup(rng: &mut ChaCha8Rng) -> PreparationSetup {
        PreparationSetup::new(
            Angle::from_radians(rng.gen_range(-PI..PI)).unwrap(),
            Angle::from_radians(rng.gen_range(-PI..PI)).unwrap(),
        )
    }

    #[test]
    fn test_zero_angles_give_horizontal() {
        let psi = pure_state(Angle::ZERO, Angle::ZERO);
        assert!(psi.approx_eq(&Ket2::horizontal(), 1e-15));

        let rho = outer_product(&psi);
        assert!(rho
            .matrix()
            .approx_eq(&Mat2::from_real(1.0, 0.0, 0.0, 0.0), 1e-15));
    }

    #[test]
    fn test_hwp_45_gives_vertical() {
        let setup = PreparationSetup::from_degrees(45.0, 0.0).unwrap();
        let psi = setup.state();
        // QWP(0) = diag(1, i) only rephases |V⟩
        assert_abs_diff_eq!(psi.alpha().norm(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(psi.beta().norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_element_order_matters() {
        let theta = Angle::from_degrees(22.5).unwrap();
        let phi = Angle::from_degrees(30.0).unwrap();
        let ordered = pure_state(theta, phi);
        let swapped = half_wave_plate(theta) * (quarter_wave_plate(phi) * Ket2::horizontal());
        assert!(!ordered.approx_eq(&swapped, 1e-6));
    }

    #[test]
    fn test_jones_matches_state() {
        let setup = PreparationSetup::from_degrees(80.0, 50.0).unwrap();
        let via_jones = setup.jones() * Ket2::horizontal();
        assert!(via_jones.approx_eq(&setup.state(), 1e-14));
    }

    #[test]
    fn test_pure_state_normalized_for_all_angles() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let setup = random_setup(&mut rng);
            assert_abs_diff_eq!(setup.state().norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_outer_product_trace_one_and_hermitian() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let rho = random_setup(&mut rng).density_matrix();
            assert_abs_diff_eq!(rho.trace().re, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(rho.trace().im, 0.0, epsilon = 1e-12);
            assert!(rho.is_hermitian(1e-12));
            assert_abs_diff_eq!(rho.purity(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_circular_preparation() {
        // HWP at 22.5° gives |D⟩; QWP at 0° turns it into a circular state
        let setup = PreparationSetup::from_degrees(22.5, 0.0).unwrap();
        let [_, y, z] = setup.density_matrix().bloch_vector();
        assert_abs_diff_eq!(y.abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_degrees_rejects_nan() {
        let err = PreparationSetup::from_degrees(f64::NAN, 0.0).unwrap_err();
        assert!(err.to_string().contains("theta"));
        let err = PreparationSetup::from_degrees(0.0, f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("phi"));
    }

    #[test]
    fn test_display() {
        let setup = PreparationSetup::from_degrees(10.0, 20.0).unwrap();
        let s = setup.to_string();
        assert!(s.contains("HWP"));
        assert!(s.contains("QWP"));
    }
}
