//! Waveplate Jones matrices
//!
//! Gantree: L2_Optics → Waveplate
//!
//! Jones matrices of a half-wave plate and a quarter-wave plate whose fast
//! axis sits at a given angle from horizontal. The matrices are taken as
//! written; unitarity is covered by the tests, not checked at runtime.

use polfid_core::{optics, Angle, Complex64, Mat2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-wave plate at angle θ
/// Gantree: half_wave_plate(θ) -> Mat2 // HWP
///
/// `[[cos2θ, sin2θ], [sin2θ, -cos2θ]]`
pub fn half_wave_plate(theta: Angle) -> Mat2 {
    let (s, c) = theta.doubled().sin_cos();
    Mat2::from_real(c, s, s, -c)
}

/// Quarter-wave plate at angle φ
/// Gantree: quarter_wave_plate(φ) -> Mat2 // QWP
///
/// `[[cos²φ + i·sin²φ, (1-i)·sinφ·cosφ], [(1-i)·sinφ·cosφ, sin²φ + i·cos²φ]]`
pub fn quarter_wave_plate(phi: Angle) -> Mat2 {
    let (s, c) = phi.radians().sin_cos();
    let off = Complex64::new(1.0, -1.0) * (s * c);
    Mat2::new(
        Complex64::new(c * c, s * s),
        off,
        off,
        Complex64::new(s * s, c * c),
    )
}

/// Optical element in the preparation path
/// Gantree: Waveplate // HWP/QWP enum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Waveplate {
    /// λ/2 plate
    HalfWave(Angle),
    /// λ/4 plate
    QuarterWave(Angle),
}

impl Waveplate {
    /// Jones matrix of the element
    pub fn jones(&self) -> Mat2 {
        match self {
            Waveplate::HalfWave(theta) => half_wave_plate(*theta),
            Waveplate::QuarterWave(phi) => quarter_wave_plate(*phi),
        }
    }

    /// Fast-axis angle
    pub fn angle(&self) -> Angle {
        match self {
            Waveplate::HalfWave(a) | Waveplate::QuarterWave(a) => *a,
        }
    }

    /// Phase retardance between fast and slow axes (radians)
    pub fn retardance(&self) -> f64 {
        match self {
            Waveplate::HalfWave(_) => optics::HALF_WAVE_RETARDANCE,
            Waveplate::QuarterWave(_) => optics::QUARTER_WAVE_RETARDANCE,
        }
    }

    /// Short name
    pub fn name(&self) -> &'static str {
        match self {
            Waveplate::HalfWave(_) => "HWP",
            Waveplate::QuarterWave(_) => "QWP",
        }
    }
}

impl fmt::Display for Waveplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.angle())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use polfid_core::Ket2;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::PI;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d).unwrap()
    }

    #[test]
    fn test_hwp_zero_is_z() {
        assert!(half_wave_plate(Angle::ZERO).approx_eq(&Mat2::from_real(1.0, 0.0, 0.0, -1.0), 0.0));
    }

    #[test]
    fn test_hwp_45_swaps_h_and_v() {
        let v = half_wave_plate(deg(45.0)) * Ket2::horizontal();
        assert!(v.approx_eq(&Ket2::vertical(), 1e-15));
    }

    #[test]
    fn test_hwp_22_5_gives_diagonal() {
        let d = half_wave_plate(deg(22.5)) * Ket2::horizontal();
        let s = 0.5_f64.sqrt();
        assert!(d.approx_eq(&Ket2::from_real(s, s), 1e-15));
    }

    #[test]
    fn test_qwp_zero_is_phase_only() {
        let q = quarter_wave_plate(Angle::ZERO);
        assert!(q.approx_eq(
            &Mat2::new(
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 1.0),
            ),
            1e-15
        ));
    }

    #[test]
    fn test_qwp_45_makes_circular() {
        // |H⟩ through a QWP at 45° has equal |H|,|V| weights and a ±π/2 relative phase
        let out = quarter_wave_plate(deg(45.0)) * Ket2::horizontal();
        let [a, b] = out.components();
        assert!((a.norm() - b.norm()).abs() < 1e-12);
        let rel = (b / a).arg();
        assert!((rel.abs() - PI / 2.0).abs() < 1e-12, "relative phase {}", rel);
    }

    #[test]
    fn test_waveplates_unitary_for_random_angles() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let a = Angle::from_radians(rng.gen_range(-2.0 * PI..2.0 * PI)).unwrap();
            assert!(half_wave_plate(a).is_unitary(1e-12), "HWP({}) not unitary", a);
            assert!(quarter_wave_plate(a).is_unitary(1e-12), "QWP({}) not unitary", a);
        }
    }

    #[test]
    fn test_waveplate_enum() {
        let hwp = Waveplate::HalfWave(deg(10.0));
        let qwp = Waveplate::QuarterWave(deg(20.0));
        assert_eq!(hwp.jones(), half_wave_plate(deg(10.0)));
        assert_eq!(qwp.jones(), quarter_wave_plate(deg(20.0)));
        assert_eq!(hwp.retardance(), PI);
        assert_eq!(qwp.retardance(), PI / 2.0);
        assert_eq!(hwp.name(), "HWP");
        assert!(qwp.to_string().starts_with("QWP("));
    }
}
