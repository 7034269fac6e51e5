//! Two-component state vector
//!
//! Gantree: L1_Algebra → Ket2
//!
//! Polarization state |ψ⟩ = α|H⟩ + β|V⟩ as a complex column vector.

use crate::matrix::Mat2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Complex column vector in the {H, V} basis
/// Gantree: Ket2 // [c64;2]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ket2 {
    data: [Complex64; 2],
}

impl Ket2 {
    /// Create from amplitudes `(α, β)`
    pub const fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self {
            data: [alpha, beta],
        }
    }

    /// Create from real amplitudes
    pub const fn from_real(alpha: f64, beta: f64) -> Self {
        Self::new(Complex64::new(alpha, 0.0), Complex64::new(beta, 0.0))
    }

    /// Horizontal polarization |H⟩ = [1, 0]ᵗ
    pub const fn horizontal() -> Self {
        Self::from_real(1.0, 0.0)
    }

    /// Vertical polarization |V⟩ = [0, 1]ᵗ
    pub const fn vertical() -> Self {
        Self::from_real(0.0, 1.0)
    }

    /// Amplitudes `[α, β]`
    #[inline]
    pub fn components(&self) -> [Complex64; 2] {
        self.data
    }

    /// Amplitude of |H⟩
    #[inline]
    pub fn alpha(&self) -> Complex64 {
        self.data[0]
    }

    /// Amplitude of |V⟩
    #[inline]
    pub fn beta(&self) -> Complex64 {
        self.data[1]
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Squared Euclidean norm ⟨ψ|ψ⟩
    pub fn norm_sqr(&self) -> f64 {
        self.data[0].norm_sqr() + self.data[1].norm_sqr()
    }

    /// Unit-normalized copy, or `None` for the zero vector
    pub fn normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            return None;
        }
        Some(*self * (1.0 / n))
    }

    /// Complex conjugate of every amplitude
    pub fn conj(&self) -> Self {
        Self::new(self.data[0].conj(), self.data[1].conj())
    }

    /// Inner product ⟨self|other⟩ (conjugate-linear in `self`)
    /// Gantree: inner(other) -> c64 // 내적
    pub fn inner(&self, other: &Ket2) -> Complex64 {
        self.data[0].conj() * other.data[0] + self.data[1].conj() * other.data[1]
    }

    /// Outer product |self⟩⟨other|
    /// Gantree: outer(other) -> Mat2 // 외적
    pub fn outer(&self, other: &Ket2) -> Mat2 {
        let [a, b] = self.data;
        let [c, d] = other.data;
        Mat2::new(a * c.conj(), a * d.conj(), b * c.conj(), b * d.conj())
    }

    /// Sandwich ⟨self| M |self⟩
    pub fn expectation(&self, m: &Mat2) -> Complex64 {
        self.inner(&m.apply(self))
    }

    /// Check every amplitude is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|z| z.is_finite())
    }

    /// Element-wise approximate equality
    pub fn approx_eq(&self, other: &Ket2, tol: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(x, y)| (x - y).norm() <= tol)
    }
}

impl Add for Ket2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.data[0] + other.data[0], self.data[1] + other.data[1])
    }
}

impl Sub for Ket2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.data[0] - other.data[0], self.data[1] - other.data[1])
    }
}

impl Mul<f64> for Ket2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }
}

impl Mul<Complex64> for Ket2 {
    type Output = Self;
    fn mul(self, scalar: Complex64) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }
}

impl fmt::Display for Ket2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.data;
        write!(
            f,
            "[{:.4}{:+.4}i, {:.4}{:+.4}i]ᵗ",
            a.re, a.im, b.re, b.im
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_basis_vectors() {
        let h = Ket2::horizontal();
        let v = Ket2::vertical();
        assert_abs_diff_eq!(h.norm(), 1.0);
        assert_eq!(h.inner(&v), Complex64::new(0.0, 0.0));
        assert_eq!(h.inner(&h), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_inner_is_conjugate_linear() {
        let r = Ket2::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)) * (0.5_f64.sqrt());
        let l = r.conj();
        // ⟨R|L⟩ = 0 for circular states
        assert_abs_diff_eq!(r.inner(&l).norm(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.inner(&r).re, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_outer_product_projector() {
        let d = Ket2::from_real(1.0, 1.0).normalized().unwrap();
        let p = d.outer(&d);
        assert!(p.is_hermitian(1e-15));
        assert_abs_diff_eq!(p.trace().re, 1.0, epsilon = 1e-15);
        assert!((p * p).approx_eq(&p, 1e-15));
    }

    #[test]
    fn test_expectation() {
        let z = Mat2::from_real(1.0, 0.0, 0.0, -1.0);
        assert_abs_diff_eq!(Ket2::horizontal().expectation(&z).re, 1.0);
        assert_abs_diff_eq!(Ket2::vertical().expectation(&z).re, -1.0);
    }

    #[test]
    fn test_normalized_zero() {
        assert!(Ket2::from_real(0.0, 0.0).normalized().is_none());
        let n = Ket2::from_real(3.0, 4.0).normalized().unwrap();
        assert!(n.approx_eq(&Ket2::from_real(0.6, 0.8), 1e-15));
    }
}
