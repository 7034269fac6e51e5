//! 2x2 complex matrix
//!
//! Gantree: L1_Algebra → Mat2
//!
//! Fixed-size operator type used for Jones matrices, density matrices and
//! Pauli operators. All algebra is written out in closed form.

use crate::ket::Ket2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 2x2 matrix of complex numbers, row-major
/// Gantree: Mat2 // [[c64;2];2]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat2 {
    data: [[Complex64; 2]; 2],
}

impl Mat2 {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from entries `[[a, b], [c, d]]`
    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self {
            data: [[a, b], [c, d]],
        }
    }

    /// Create from real entries `[[a, b], [c, d]]`
    pub const fn from_real(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(
            Complex64::new(a, 0.0),
            Complex64::new(b, 0.0),
            Complex64::new(c, 0.0),
            Complex64::new(d, 0.0),
        )
    }

    /// Zero matrix
    pub const ZERO: Self = Self::new(ZERO, ZERO, ZERO, ZERO);

    /// Identity matrix
    pub const IDENTITY: Self = Self::new(ONE, ZERO, ZERO, ONE);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Entry at `(row, col)`
    ///
    /// # Panics
    /// If `row` or `col` is not 0 or 1.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row][col]
    }

    /// Row-major entries
    #[inline]
    pub fn rows(&self) -> [[Complex64; 2]; 2] {
        self.data
    }

    /// Diagonal entries
    #[inline]
    pub fn diagonal(&self) -> [Complex64; 2] {
        [self.data[0][0], self.data[1][1]]
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// Conjugate transpose M†
    /// Gantree: dagger() -> Mat2 // 켤레 전치
    pub fn dagger(&self) -> Self {
        let [[a, b], [c, d]] = self.data;
        Self::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Sum of the diagonal entries
    /// Gantree: trace() -> c64 // 대각합
    #[inline]
    pub fn trace(&self) -> Complex64 {
        self.data[0][0] + self.data[1][1]
    }

    /// Determinant `ad - bc`
    #[inline]
    pub fn determinant(&self) -> Complex64 {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }

    /// Multiply every entry by a complex scalar
    pub fn scale(&self, s: Complex64) -> Self {
        let [[a, b], [c, d]] = self.data;
        Self::new(a * s, b * s, c * s, d * s)
    }

    /// Matrix-vector product `M · v`
    pub fn apply(&self, v: &Ket2) -> Ket2 {
        let [[a, b], [c, d]] = self.data;
        let [x, y] = v.components();
        Ket2::new(a * x + b * y, c * x + d * y)
    }

    // ========================================================================
    // Norms and Comparisons
    // ========================================================================

    /// Frobenius norm sqrt(sum |m_ij|^2)
    pub fn frobenius_norm(&self) -> f64 {
        self.data
            .iter()
            .flatten()
            .map(|z| z.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Largest element-wise distance to `other`
    pub fn max_abs_diff(&self, other: &Mat2) -> f64 {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max)
    }

    /// Element-wise approximate equality
    pub fn approx_eq(&self, other: &Mat2, tol: f64) -> bool {
        self.max_abs_diff(other) <= tol
    }

    /// Check `M == M†` element-wise within `tol`
    /// Gantree: is_hermitian(tol) -> bool // 에르미트 검사
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.approx_eq(&self.dagger(), tol)
    }

    /// Check `M† M == I` within `tol`
    pub fn is_unitary(&self, tol: f64) -> bool {
        (self.dagger() * *self).approx_eq(&Self::IDENTITY, tol)
    }

    /// Check every entry is within `tol` of zero
    pub fn is_zero(&self, tol: f64) -> bool {
        self.data.iter().flatten().all(|z| z.norm() <= tol)
    }

    /// Check every entry is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|z| z.is_finite())
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Mat2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let [[a, b], [c, d]] = self.data;
        let [[e, f], [g, h]] = other.data;
        Self::new(a + e, b + f, c + g, d + h)
    }
}

impl Sub for Mat2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let [[a, b], [c, d]] = self.data;
        let [[e, f], [g, h]] = other.data;
        Self::new(a - e, b - f, c - g, d - h)
    }
}

impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let [[a, b], [c, d]] = self.data;
        let [[e, f], [g, h]] = other.data;
        Self::new(
            a * e + b * g,
            a * f + b * h,
            c * e + d * g,
            c * f + d * h,
        )
    }
}

impl Mul<Ket2> for Mat2 {
    type Output = Ket2;
    fn mul(self, v: Ket2) -> Ket2 {
        self.apply(&v)
    }
}

impl Mul<f64> for Mat2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        self.scale(Complex64::new(scalar, 0.0))
    }
}

impl Mul<Complex64> for Mat2 {
    type Output = Self;
    fn mul(self, scalar: Complex64) -> Self {
        self.scale(scalar)
    }
}

impl Neg for Mat2 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.data;
        write!(
            f,
            "[[{:.4}{:+.4}i, {:.4}{:+.4}i], [{:.4}{:+.4}i, {:.4}{:+.4}i]]",
            a.re, a.im, b.re, b.im, c.re, c.im, d.re, d.im
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

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_identity_product() {
        let m = Mat2::new(c(1.0, 2.0), c(3.0, -1.0), c(0.5, 0.0), c(-2.0, 4.0));
        assert_eq!(Mat2::IDENTITY * m, m);
        assert_eq!(m * Mat2::IDENTITY, m);
    }

    #[test]
    fn test_product_order() {
        let a = Mat2::from_real(0.0, 1.0, 0.0, 0.0);
        let b = Mat2::from_real(0.0, 0.0, 1.0, 0.0);
        assert_eq!(a * b, Mat2::from_real(1.0, 0.0, 0.0, 0.0));
        assert_eq!(b * a, Mat2::from_real(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_dagger() {
        let m = Mat2::new(c(1.0, 1.0), c(2.0, -3.0), c(0.0, 5.0), c(4.0, 0.0));
        let d = m.dagger();
        assert_eq!(d.get(0, 0), c(1.0, -1.0));
        assert_eq!(d.get(0, 1), c(0.0, -5.0));
        assert_eq!(d.get(1, 0), c(2.0, 3.0));
        assert_eq!(d.get(1, 1), c(4.0, 0.0));
        assert_eq!(d.dagger(), m);
    }

    #[test]
    fn test_trace_and_determinant() {
        let m = Mat2::new(c(1.0, 1.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, -1.0));
        assert_eq!(m.trace(), c(5.0, 0.0));
        // (1+i)(4-i) - 6 = 4 - i + 4i + 1 - 6 = -1 + 3i
        assert_eq!(m.determinant(), c(-1.0, 3.0));
    }

    #[test]
    fn test_hermitian() {
        let h = Mat2::new(c(0.5, 0.0), c(0.2, -0.3), c(0.2, 0.3), c(0.5, 0.0));
        assert!(h.is_hermitian(1e-12));

        let not_h = Mat2::new(c(0.5, 0.0), c(0.2, 0.3), c(0.2, 0.3), c(0.5, 0.0));
        assert!(!not_h.is_hermitian(1e-12));
    }

    #[test]
    fn test_apply() {
        let m = Mat2::from_real(0.0, 1.0, 1.0, 0.0);
        let v = m * Ket2::horizontal();
        assert_eq!(v, Ket2::vertical());
    }

    #[test]
    fn test_norms() {
        let m = Mat2::from_real(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(m.frobenius_norm(), 2.0_f64.sqrt(), epsilon = 1e-15);
        assert!(Mat2::ZERO.is_zero(0.0));
        assert!(!m.is_zero(0.5));
        assert!(m.is_unitary(1e-12));
        assert!((m - m).is_zero(0.0));
        assert_eq!(-m + m, Mat2::ZERO);
    }

    #[test]
    fn test_finite() {
        assert!(Mat2::IDENTITY.is_finite());
        assert!(!(Mat2::IDENTITY * f64::NAN).is_finite());
    }
}
