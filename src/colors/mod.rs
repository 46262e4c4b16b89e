//! This module contains the color spaces that are defined relative to [`XYZColor`] or
//! [`RGBColor`]. For convenience, each main type is imported into this module's namespace
//! directly.
//!
//! [`XYZColor`]: ../color/struct.XYZColor.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod cielabcolor;
pub mod cieluvcolor;
pub mod hlscolor;
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hlscolor::HLSColor;
pub use self::hsvcolor::HSVColor;

use color::RGBColor;

/// The hexagonal hue shared by HSV and HLS, in degrees in [0, 360), along with the largest and
/// smallest components it was computed from. Gray has no hue; it gets 0. When two channels tie for
/// the maximum the first of r, g, b wins, so `(1, 1, 0)` is read as the end of the red sector
/// (60 degrees) and never as the start of the green one.
pub(crate) fn hexagonal_hue(rgb: &RGBColor) -> (f64, f64, f64) {
    let max_c = rgb.r.max(rgb.g).max(rgb.b);
    let min_c = rgb.r.min(rgb.g).min(rgb.b);
    let chroma = max_c - min_c;

    let hue = if chroma == 0.0 {
        0.0
    } else if max_c == rgb.r {
        // remainder keeps the sign of the dividend, so g < b lands below 0 and is wrapped below
        60.0 * (((rgb.g - rgb.b) / chroma) % 6.0)
    } else if max_c == rgb.g {
        60.0 * ((rgb.b - rgb.r) / chroma + 2.0)
    } else {
        60.0 * ((rgb.r - rgb.g) / chroma + 4.0)
    };

    let hue = if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    };
    // -0.0 + 360 and the like
    let hue = if hue >= 360.0 { hue - 360.0 } else { hue };
    (hue, max_c, min_c)
}

/// Walks around the hue hexagon: given a hue in degrees and a chroma, returns the RGB point with
/// that hue and chroma whose smallest component is 0. Hues are taken modulo 360.
pub(crate) fn hexagon_point(hue: f64, chroma: f64) -> RGBColor {
    let h = hue.rem_euclid(360.0) / 60.0;
    // the intermediate component: the second-largest, where chroma is the largest
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    RGBColor { r, g, b }
}
