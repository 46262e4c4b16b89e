//! The conversions as plain functions over slices of numbers. These are what a caller holding
//! untyped data (a parsed line of text, a row from somewhere else) wants: each one checks that it
//! was handed exactly three finite numbers, returns a [`ColorError`] if not, and otherwise does
//! exactly what the typed API does. Inputs of absurd magnitude (near `f64::MAX`) can still overflow
//! partway through; that comes back as `NonFiniteResult` rather than as a triple holding NaN.
//!
//! ```
//! use colorspaces::convert;
//! use colorspaces::color::ColorError;
//!
//! let hsv = convert::rgb_to_hsv(&[0.5, 0.5, 0.8]).unwrap();
//! assert!((hsv[0] - 240.).abs() <= 1e-10);
//! assert_eq!(
//!     convert::rgb_to_hsv(&[0.5, 0.5]),
//!     Err(ColorError::InvalidArity { expected: 3, found: 2 })
//! );
//! ```
//!
//! [`ColorError`]: ../color/enum.ColorError.html

use color::{Color, ColorError, RGBColor};
use colors::{CIELABColor, CIELUVColor, HLSColor, HSVColor};
use coord::{Coord, Triple};

/// Checks that `components` is a well-formed color triple: exactly three numbers, all finite.
pub fn check_triple(components: &[f64]) -> Result<Coord, ColorError> {
    if components.len() != 3 {
        return Err(ColorError::InvalidArity {
            expected: 3,
            found: components.len(),
        });
    }
    if let Some(index) = components.iter().position(|c| !c.is_finite()) {
        return Err(ColorError::InvalidType { index });
    }
    Ok(Coord {
        x: components[0],
        y: components[1],
        z: components[2],
    })
}

/// Turns a computed point back into a triple, refusing one that overflowed.
pub fn finish(output: Coord) -> Result<Triple, ColorError> {
    if output.is_finite() {
        Ok(output.into())
    } else {
        Err(ColorError::NonFiniteResult)
    }
}

// read a checked triple as one type, run a conversion, flatten back to a triple
fn map<F, T, U>(components: &[f64], f: F) -> Result<Triple, ColorError>
where
    F: Fn(T) -> U,
    T: From<Coord>,
    U: Into<Coord>,
{
    let input = T::from(check_triple(components)?);
    finish(f(input).into())
}

/// Linear RGB to XYZ through the forward sRGB matrix. Not clamped.
pub fn rgb_to_xyz(rgb: &[f64]) -> Result<Triple, ColorError> {
    map(rgb, |c: RGBColor| c.to_xyz())
}

/// XYZ to linear RGB through the inverse sRGB matrix, clipped into [0, 1].
pub fn xyz_to_rgb(xyz: &[f64]) -> Result<Triple, ColorError> {
    map(xyz, RGBColor::from_xyz)
}

/// The BT.601 luma of an RGB color, repeated in all three components.
pub fn rgb_to_grayscale(rgb: &[f64]) -> Result<Triple, ColorError> {
    map(rgb, |c: RGBColor| c.grayscale())
}

/// XYZ to CIELAB.
pub fn xyz_to_lab(xyz: &[f64]) -> Result<Triple, ColorError> {
    map(xyz, CIELABColor::from_xyz)
}

/// CIELAB to XYZ. There is no external reference for this direction: it's the exact inverse of
/// `xyz_to_lab` and nothing more.
pub fn lab_to_xyz(lab: &[f64]) -> Result<Triple, ColorError> {
    map(lab, |c: CIELABColor| c.to_xyz())
}

/// XYZ to CIELUV.
pub fn xyz_to_luv(xyz: &[f64]) -> Result<Triple, ColorError> {
    map(xyz, CIELUVColor::from_xyz)
}

/// CIELUV to XYZ. There is no external reference for this direction: it's the exact inverse of
/// `xyz_to_luv` and nothing more.
pub fn luv_to_xyz(luv: &[f64]) -> Result<Triple, ColorError> {
    map(luv, |c: CIELUVColor| c.to_xyz())
}

/// Linear RGB to `[h, s, v]`.
pub fn rgb_to_hsv(rgb: &[f64]) -> Result<Triple, ColorError> {
    map(rgb, |c: RGBColor| HSVColor::from_rgb(&c))
}

/// `[h, s, v]` back to linear RGB.
pub fn hsv_to_rgb(hsv: &[f64]) -> Result<Triple, ColorError> {
    map(hsv, |c: HSVColor| c.to_rgb())
}

/// Linear RGB to `[h, l, s]`.
pub fn rgb_to_hls(rgb: &[f64]) -> Result<Triple, ColorError> {
    map(rgb, |c: RGBColor| HLSColor::from_rgb(&c))
}

/// `[h, l, s]` back to linear RGB.
pub fn hls_to_rgb(hls: &[f64]) -> Result<Triple, ColorError> {
    map(hls, |c: HLSColor| c.to_rgb())
}

/// Componentwise `(1 - t) * start + t * end`. Any finite `t` is allowed; outside of [0, 1] it
/// extrapolates.
pub fn lerp(start: &[f64], end: &[f64], t: f64) -> Result<Triple, ColorError> {
    let start = check_triple(start)?;
    let end = check_triple(end)?;
    if !t.is_finite() {
        return Err(ColorError::InvalidWeight);
    }
    finish(start.lerp(&end, t))
}
