//! Fixed-precision rendering of real and complex results
//!
//! Gantree: L5_Engine → Formatter
//!
//! Complex values render as `a+bi` / `a-bi`. A value whose imaginary part
//! rounds to zero at the requested precision renders as a plain real. A
//! negative zero never appears in the output.

use polfid_core::Complex64;

/// Render with `decimals` places, without `-0.000`
/// Gantree: format_real(x,n) -> String // 실수 포맷
pub fn format_real(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if is_zero_literal(rest) => rest.to_string(),
        _ => s,
    }
}

/// Render a complex number, collapsing to a real when Im rounds to zero
/// Gantree: format_complex(z,n) -> String // 복소수 포맷
pub fn format_complex(z: Complex64, decimals: usize) -> String {
    let re = format_real(z.re, decimals);
    let im = format_real(z.im.abs(), decimals);
    if is_zero_literal(&im) {
        return re;
    }
    let sign = if z.im < 0.0 { '-' } else { '+' };
    format!("{}{}{}i", re, sign, im)
}

fn is_zero_literal(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(0.0045454, 3), "0.005");
        assert_eq!(format_real(0.0129, 3), "0.013");
        assert_eq!(format_real(1.0, 3), "1.000");
        assert_eq!(format_real(2.75, 0), "3");
        assert_eq!(format_real(-0.25, 2), "-0.25");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(format_real(-0.0, 3), "0.000");
        assert_eq!(format_real(-1e-12, 3), "0.000");
        assert_eq!(format_real(-0.0004, 3), "0.000");
        assert_eq!(format_real(-0.0, 0), "0");
        assert_eq!(format_real(-0.0005001, 3), "-0.001");
    }

    #[test]
    fn test_format_complex_real_collapse() {
        assert_eq!(format_complex(Complex64::new(1.0, 1e-17), 3), "1.000");
        assert_eq!(format_complex(Complex64::new(-1e-16, -1e-16), 3), "0.000");
        assert_eq!(format_complex(Complex64::new(0.5, -0.0004), 3), "0.500");
    }

    #[test]
    fn test_format_complex_with_imaginary() {
        assert_eq!(format_complex(Complex64::new(0.5, 0.25), 3), "0.500+0.250i");
        assert_eq!(format_complex(Complex64::new(0.5, -0.25), 3), "0.500-0.250i");
        assert_eq!(format_complex(Complex64::new(-0.0, 1.0), 2), "0.00+1.00i");
        assert_eq!(format_complex(Complex64::new(0.0, -1.0), 1), "0.0-1.0i");
    }
}
