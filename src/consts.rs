//! This file provides the constants used for matrix multiplication and color space conversion. The
//! matrices are kept as real matrices rather than hand-expanded sums so that the coefficients can be
//! checked against each other (the forward and inverse pair should multiply to the identity, and the
//! forward rows should sum to the white point) and so that there is exactly one copy of each.

use coord::Coord;
use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

lazy_static! {
    /// Linear sRGB to CIE 1931 XYZ, D65 white point.
    pub static ref SRGB_TO_XYZ: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            0.412453, 0.357580, 0.180423,
            0.212671, 0.715160, 0.072169,
            0.019334, 0.119193, 0.950227,
        ],
    );
    /// CIE 1931 XYZ (D65) back to linear sRGB. Not clamped: that's the caller's job.
    pub static ref XYZ_TO_SRGB: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            03.240479, -1.537150, -0.498535,
            -0.969256, 01.875991, 00.041556,
            00.055648, -0.204043, 01.057311,
        ],
    );
}

/// The D65 white point, normalized so that Y is 1. These are the divisors used before the CIELAB
/// nonlinearity.
pub const D65_WHITE: [f64; 3] = [0.950455, 1.0, 1.088753];

/// The CIE 1976 UCS chromaticity (u', v') of the reference white.
pub const D65_UV_PRIME: (f64, f64) = (0.19793943, 0.46831096);

/// The CIE linearization breakpoint, (6/29)^3. Usually quoted as 0.008856.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// The slope of the linear part of CIE lightness, (29/3)^3. Usually quoted as 903.3.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// ITU-R BT.601 luma weights for R, G, and B.
pub const BT601_LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Multiplies a 3x3 matrix by a point treated as a column vector.
pub fn apply(mat: &Matrix<f64>, point: Coord) -> Coord {
    let v = mat * Vector::new(vec![point.x, point.y, point.z]);
    Coord {
        x: v[0],
        y: v[1],
        z: v[2],
    }
}
