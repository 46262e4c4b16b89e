//! This module implements the HSV color space, a cousin of the HLS color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HLS. Both are simple reshapings of RGB, derived here from linear RGB.

use color::{Color, RGBColor, XYZColor};
use colors::{hexagon_point, hexagonal_hue};
use coord::Coord;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// The hue comes from whichever channel is largest, checked in the order red, green, blue.
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::HSVColor;
/// let greenish = HSVColor::from_rgb(&RGBColor{r: 0.5, g: 0.8, b: 0.5});
/// assert!((greenish.h - 120.).abs() <= 1e-10);
/// assert!((greenish.s - 0.375).abs() <= 1e-10);
/// assert!((greenish.v - 0.8).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees. Gray has hue 0.
    pub h: f64,
    /// The saturation: chroma relative to value. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB component of a color.
    pub v: f64,
}

impl HSVColor {
    /// Converts straight from RGB, with no trip through XYZ.
    pub fn from_rgb(rgb: &RGBColor) -> HSVColor {
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let value = max_c;
        let saturation = if value == 0.0 {
            // black: would be 0 / 0
            0.0
        } else {
            (max_c - min_c) / value
        };
        HSVColor {
            h: hue,
            s: saturation,
            v: value,
        }
    }

    /// Converts back to RGB. Hues outside of [0, 360) are wrapped.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = self.s * self.v;
        let point = hexagon_point(self.h, chroma);
        // lift the zero-minimum point up to the right value
        let offset = self.v - chroma;
        RGBColor {
            r: point.r + offset,
            g: point.g + offset,
            b: point.b + offset,
        }
    }
}

impl Color for HSVColor {
    /// Converts to HSV by going through RGB, so anything out of the RGB gamut is clipped first.
    fn from_xyz(xyz: XYZColor) -> HSVColor {
        HSVColor::from_rgb(&RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for HSVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn assert_hsv(rgb: (f64, f64, f64), expected: (f64, f64, f64)) {
        let hsv = HSVColor::from_rgb(&RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        });
        assert!((hsv.h - expected.0).abs() <= 1e-4, "{:?} -> {:?}", rgb, hsv);
        assert!((hsv.s - expected.1).abs() <= 1e-4, "{:?} -> {:?}", rgb, hsv);
        assert!((hsv.v - expected.2).abs() <= 1e-4, "{:?} -> {:?}", rgb, hsv);
    }

    #[test]
    fn test_hsv_achromatic() {
        for &k in &[0.0, 0.25, 0.5, 1.0] {
            assert_hsv((k, k, k), (0.0, 0.0, k));
        }
    }

    #[test]
    fn test_hsv_hue_branches() {
        assert_hsv((0.8, 0.5, 0.5), (0.0, 0.375, 0.8));
        assert_hsv((0.5, 0.8, 0.5), (120.0, 0.375, 0.8));
        assert_hsv((0.5, 0.5, 0.8), (240.0, 0.375, 0.8));
        // red sector below 0 degrees wraps around
        assert_hsv((0.8, 0.2, 0.6), (320.0, 0.75, 0.8));
    }

    #[test]
    fn test_hsv_rgb_round_trip() {
        let samples = [(0.8, 0.2, 0.6), (0.1, 0.9, 0.4), (0.3, 0.3, 0.7), (1.0, 1.0, 0.0)];
        for &(r, g, b) in samples.iter() {
            let rgb = RGBColor { r, g, b };
            let back = HSVColor::from_rgb(&rgb).to_rgb();
            assert!((back.r - r).abs() <= 1e-10);
            assert!((back.g - g).abs() <= 1e-10);
            assert!((back.b - b).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_hsv_xyz_conversion() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let red_hsv: HSVColor = red.convert();
        assert!(red_hsv.h.abs() <= 1e-4 || (red_hsv.h - 360.).abs() <= 1e-4);
        assert!((red_hsv.s - 1.0).abs() <= 1e-4);
        assert!((red_hsv.v - 1.0).abs() <= 1e-4);
    }
}
