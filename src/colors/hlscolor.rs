//! This file implements HLS (also written HSL): a simple transformation of RGB that creates a
//! cylindrical space. HLS and HSV are very similar but have an important difference: *value* in HSV
//! runs from black to fully saturated colors, whereas *lightness* in HLS runs from black to fully
//! saturated in the middle to white at the end. This makes the saturation component of HLS rather
//! inaccurate, because light colors can have a very high saturation even if they are extremely close
//! to white. Components are stored in hue, lightness, saturation order.
//!
//! Converting gray into HLS gives a hue of 0 degrees, although any hue could be used in its place.

use color::{Color, RGBColor, XYZColor};
use colors::{hexagon_point, hexagonal_hue};
use coord::Coord;

/// A color in the HLS color space, a direct transformation of RGB.
/// # Example
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::HLSColor;
/// let pink = HLSColor::from_rgb(&RGBColor{r: 0.8, g: 0.5, b: 0.5});
/// assert_eq!(pink.h, 0.);
/// assert!((pink.l - 0.65).abs() <= 1e-10);
/// assert!((pink.s - 0.4286).abs() <= 1e-4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HLSColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The lightness component. Ranges from 0 to 1. Defined as the average of the largest and
    /// smallest color components in RGB, which sacrifices accuracy for convenience.
    pub l: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
}

impl HLSColor {
    /// Converts straight from RGB, with no trip through XYZ.
    pub fn from_rgb(rgb: &RGBColor) -> HLSColor {
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let chroma = max_c - min_c;
        let sum = max_c + min_c;
        let lightness = sum / 2.0;
        let saturation = if chroma == 0.0 || sum == 0.0 || sum == 2.0 {
            // pure black and pure white would divide by 0
            0.0
        } else if lightness < 0.5 {
            chroma / sum
        } else {
            chroma / (2.0 - sum)
        };

        HLSColor {
            h: hue,
            l: lightness,
            s: saturation,
        }
    }

    /// Converts back to RGB. Hues outside of [0, 360) are wrapped.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let point = hexagon_point(self.h, chroma);
        let offset = self.l - chroma / 2.0;
        RGBColor {
            r: point.r + offset,
            g: point.g + offset,
            b: point.b + offset,
        }
    }
}

impl Color for HLSColor {
    /// Converts from XYZ to HLS through RGB, so anything out of the RGB gamut is clipped first.
    fn from_xyz(xyz: XYZColor) -> HLSColor {
        HLSColor::from_rgb(&RGBColor::from_xyz(xyz))
    }
    // Converts back to XYZ through RGB.
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}

impl From<Coord> for HLSColor {
    fn from(c: Coord) -> HLSColor {
        HLSColor {
            h: c.x,
            l: c.y,
            s: c.z,
        }
    }
}

impl Into<Coord> for HLSColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.l,
            z: self.s,
        }
    }
}
