//! This file defines the [`Color`] trait, the two colors every other space is defined relative to
//! ([`XYZColor`] and [`RGBColor`]), and [`ColorError`], the one way anything in this crate reports
//! bad input.
//!
//! [`Color`]: trait.Color.html
//! [`XYZColor`]: struct.XYZColor.html
//! [`RGBColor`]: struct.RGBColor.html
//! [`ColorError`]: enum.ColorError.html

use std::error::Error;
use std::fmt;

use bound::Bound;
use consts;
use consts::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use coord::Coord;

/// A trait that includes any color representation that can be converted to and from the CIE 1931
/// XYZ color space. XYZ is the hub: any two `Color` types can be converted into each other by going
/// through it, which is what [`convert`](#method.convert) does.
pub trait Color: Sized {
    /// Converts from an XYZ color (D65, Y normalized to 1) into this color space.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts this color into XYZ (D65, Y normalized to 1).
    fn to_xyz(&self) -> XYZColor;

    /// Converts this color into any other `Color` by way of XYZ.
    /// # Example
    /// ```
    /// # use colorspaces::prelude::*;
    /// # use colorspaces::colors::CIELABColor;
    /// let gray = RGBColor{r: 0.5, g: 0.5, b: 0.5};
    /// let lab: CIELABColor = gray.convert();
    /// assert!((lab.l - 76.0693).abs() <= 1e-4);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with Y normalized so that
/// the white point has Y = 1. Components aren't bounded: XYZ can describe colors no display (and
/// no eye) can reproduce.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis: a mix of cone responses chosen to be nonnegative.
    pub x: f64,
    /// The Y axis: luminance. 1 is the luminance of the white point.
    pub y: f64,
    /// The Z axis: roughly the response of the short-wavelength cones.
    pub z: f64,
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl Into<Coord> for XYZColor {
    fn into(self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// A linear-light RGB color with the sRGB primaries and D65 white point. Each component is normally
/// between 0 and 1. No gamma encoding is involved anywhere: 0.5 here means half the light, not
/// half the code value.
/// # Example
/// ```
/// # use colorspaces::prelude::*;
/// let gray = RGBColor{r: 0.5, g: 0.5, b: 0.5};
/// let xyz = gray.to_xyz();
/// assert!((xyz.x - 0.4752).abs() <= 1e-4);
/// assert!((xyz.y - 0.5).abs() <= 1e-4);
/// assert!((xyz.z - 0.5444).abs() <= 1e-4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

impl Color for RGBColor {
    /// Converts through the inverse sRGB matrix. Anything outside of the sRGB gamut is clipped into
    /// [0, 1] per component rather than reported.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let linear = consts::apply(&XYZ_TO_SRGB, xyz.into());
        RGBColor::from(RGBColor::clamp_coord(linear))
    }
    /// Converts through the forward sRGB matrix. The output is not clamped.
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(consts::apply(&SRGB_TO_XYZ, (*self).into()))
    }
}

impl RGBColor {
    /// The BT.601 luma of this color as a gray: every component becomes
    /// `0.299 r + 0.587 g + 0.114 b`. Defined for any finite input, not just [0, 1].
    /// # Example
    /// ```
    /// # use colorspaces::prelude::*;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// assert_eq!(red.grayscale(), RGBColor{r: 0.299, g: 0.299, b: 0.299});
    /// ```
    pub fn grayscale(&self) -> RGBColor {
        let [wr, wg, wb] = consts::BT601_LUMA;
        let luma = wr * self.r + wg * self.g + wb * self.b;
        RGBColor {
            r: luma,
            g: luma,
            b: luma,
        }
    }

    /// Scales to 0-255 integers, clamping first, for display purposes.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let scale = |x: f64| (x.max(0.0).min(1.0) * 255.0).round() as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

/// Everything that can be wrong with the input to a conversion. In-range numeric edge cases (black,
/// white, grays, the edges of the gamut) are never errors: those have defined answers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorError {
    /// The wrong number of components was given.
    InvalidArity {
        /// How many components the operation takes.
        expected: usize,
        /// How many it was given.
        found: usize,
    },
    /// A component was not a finite real number: NaN, infinite, or (when parsing text) not a
    /// number at all.
    InvalidType {
        /// The zero-based position of the offending component.
        index: usize,
    },
    /// The interpolation weight was NaN or infinite.
    InvalidWeight,
    /// Text that couldn't be read as a color at all, such as unbalanced parentheses.
    InvalidSyntax,
    /// A color space name that isn't recognized.
    UnknownColorSpace,
    /// The input was finite but so large that the conversion overflowed.
    NonFiniteResult,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidArity { expected, found } => write!(
                f,
                "expected {} components, found {}",
                expected, found
            ),
            ColorError::InvalidType { index } => {
                write!(f, "component {} is not a finite number", index)
            }
            ColorError::InvalidWeight => write!(f, "interpolation weight is not a finite number"),
            ColorError::InvalidSyntax => write!(f, "invalid color syntax"),
            ColorError::UnknownColorSpace => write!(f, "unknown color space"),
            ColorError::NonFiniteResult => write!(f, "result is not a finite number"),
        }
    }
}

impl Error for ColorError {}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_xyz_conversion() {
        let black = RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        }.to_xyz();
        assert_eq!(black, XYZColor{x: 0., y: 0., z: 0.});
        let gray = RGBColor {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        }.to_xyz();
        assert!(Into::<Coord>::into(gray).approx_equal(
            &Coord{x: 0.4752, y: 0.5, z: 0.5444},
            1e-4
        ));
        let white = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        }.to_xyz();
        assert!((white.x - 0.9505).abs() <= 1e-4);
        assert!((white.y - 1.0).abs() <= 1e-4);
        assert!((white.z - 1.0888).abs() <= 1e-4);
    }

    #[test]
    fn test_xyz_rgb_conversion() {
        let rgb = RGBColor::from_xyz(XYZColor {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        });
        assert!((rgb.r - 0.6024).abs() <= 1e-4);
        assert!((rgb.g - 0.4741).abs() <= 1e-4);
        assert!((rgb.b - 0.4545).abs() <= 1e-4);
    }

    #[test]
    fn test_xyz_rgb_clamps() {
        // well outside of sRGB: red overshoots, green undershoots
        let rgb = RGBColor::from_xyz(XYZColor {
            x: 0.9,
            y: 0.2,
            z: 0.1,
        });
        assert_eq!(rgb.r, 1.0);
        assert_eq!(rgb.g, 0.0);
        assert!((rgb.b - 0.1150057).abs() <= 1e-6);
        let negative = RGBColor::from_xyz(XYZColor {
            x: -1.,
            y: -1.,
            z: -1.,
        });
        assert_eq!(negative, RGBColor{r: 0., g: 0., b: 0.});
    }

    #[test]
    fn test_rgb_round_trip() {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let rgb = RGBColor { r, g, b };
                    let back: RGBColor = rgb.convert();
                    assert!((back.r - r).abs() <= 1e-3);
                    assert!((back.g - g).abs() <= 1e-3);
                    assert!((back.b - b).abs() <= 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_grayscale() {
        for &k in &[0.0, 0.2, 0.5, 1.0] {
            let gray = RGBColor { r: k, g: k, b: k }.grayscale();
            assert!((gray.r - k).abs() <= 1e-12);
            assert_eq!(gray.r, gray.g);
            assert_eq!(gray.g, gray.b);
        }
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        assert_eq!(red.grayscale(), RGBColor{r: 0.299, g: 0.299, b: 0.299});
        // not restricted to [0, 1]
        let wild = RGBColor {
            r: 2.,
            g: -1.,
            b: 10.,
        }.grayscale();
        assert!((wild.r - (0.598 - 0.587 + 1.14)).abs() <= 1e-12);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let color = RGBColor {
            r: 0.8,
            g: 0.3,
            b: 0.6,
        };
        let once = color.grayscale();
        let twice = once.grayscale();
        assert!((once.r - twice.r).abs() <= 1e-12);
        assert!((once.g - twice.g).abs() <= 1e-12);
        assert!((once.b - twice.b).abs() <= 1e-12);
    }

    #[test]
    fn test_rgb8() {
        let color = RGBColor {
            r: 1.2,
            g: 0.5,
            b: -0.1,
        };
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn test_error_display() {
        let err = ColorError::InvalidArity {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "expected 3 components, found 2");
        assert_eq!(
            ColorError::InvalidType { index: 1 }.to_string(),
            "component 1 is not a finite number"
        );
        assert_eq!(
            ColorError::NonFiniteResult.to_string(),
            "result is not a finite number"
        );
    }
}
