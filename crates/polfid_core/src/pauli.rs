//! Pauli operators
//!
//! Gantree: L1_Algebra → Pauli
//!
//! X = [[0, 1], [1, 0]], Y = [[0, -i], [i, 0]], Z = [[1, 0], [0, -1]].

use crate::matrix::Mat2;
use crate::types::PauliAxis;
use num_complex::Complex64;

const O: Complex64 = Complex64::new(0.0, 0.0);

/// Identity
pub const I: Mat2 = Mat2::IDENTITY;

/// Pauli X
pub const X: Mat2 = Mat2::from_real(0.0, 1.0, 1.0, 0.0);

/// Pauli Y
pub const Y: Mat2 = Mat2::new(O, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), O);

/// Pauli Z
pub const Z: Mat2 = Mat2::from_real(1.0, 0.0, 0.0, -1.0);

/// Operator for a measurement axis
pub fn for_axis(axis: PauliAxis) -> Mat2 {
    match axis {
        PauliAxis::X => X,
        PauliAxis::Y => Y,
        PauliAxis::Z => Z,
    }
}

/// Bloch-vector expansion `0.5 * (I + x X + y Y + z Z)`
/// Gantree: bloch_operator(x,y,z) -> Mat2 // 블로흐 전개
pub fn bloch_operator(x: f64, y: f64, z: f64) -> Mat2 {
    (I + X * x + Y * y + Z * z) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paulis_are_hermitian_and_unitary() {
        for axis in PauliAxis::ALL {
            let p = for_axis(axis);
            assert!(p.is_hermitian(0.0), "{} not Hermitian", axis);
            assert!(p.is_unitary(0.0), "{} not unitary", axis);
            assert_eq!(p.trace(), O);
        }
    }

    #[test]
    fn test_algebra() {
        // XY = iZ
        assert_eq!(X * Y, Z * Complex64::new(0.0, 1.0));
        // YZ = iX
        assert_eq!(Y * Z, X * Complex64::new(0.0, 1.0));
        // ZX = iY
        assert_eq!(Z * X, Y * Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_bloch_operator_poles() {
        assert_eq!(bloch_operator(0.0, 0.0, 1.0), Mat2::from_real(1.0, 0.0, 0.0, 0.0));
        assert_eq!(bloch_operator(0.0, 0.0, -1.0), Mat2::from_real(0.0, 0.0, 0.0, 1.0));
        assert_eq!(bloch_operator(0.0, 0.0, 0.0), Mat2::from_real(0.5, 0.0, 0.0, 0.5));
    }
}
