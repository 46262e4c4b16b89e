//! Color space identity. A bare triple doesn't know which space it's in, so anything that has to
//! decide at runtime (a demo reading arguments, a caller converting data it didn't produce) names
//! the space with a [`ColorSpace`] and lets [`convert`] compose the right conversions.
//!
//! [`ColorSpace`]: enum.ColorSpace.html
//! [`convert`]: fn.convert.html

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use color::{Color, ColorError, RGBColor, XYZColor};
use colors::{CIELABColor, CIELUVColor, HLSColor, HSVColor};
use convert::{check_triple, finish};
use coord::{Coord, Triple};

/// One of the color spaces this crate converts between.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Linear RGB with the sRGB primaries, components in [0, 1].
    RGB,
    /// Grayscale stored as RGB: three equal components.
    Gray,
    /// CIE 1931 XYZ, D65, Y normalized to 1.
    XYZ,
    /// CIE 1976 L\*a\*b\*.
    CIELAB,
    /// CIE 1976 L\*u\*v\*.
    CIELUV,
    /// Hue, saturation, value.
    HSV,
    /// Hue, lightness, saturation.
    HLS,
}

/// Every color space, in declaration order.
pub static COLOR_SPACES: [ColorSpace; 7] = [
    ColorSpace::RGB,
    ColorSpace::Gray,
    ColorSpace::XYZ,
    ColorSpace::CIELAB,
    ColorSpace::CIELUV,
    ColorSpace::HSV,
    ColorSpace::HLS,
];

lazy_static! {
    static ref SPACE_NAMES: HashMap<&'static str, ColorSpace> = hashmap!{
        "rgb" => ColorSpace::RGB,
        "gray" => ColorSpace::Gray,
        "grey" => ColorSpace::Gray,
        "grayscale" => ColorSpace::Gray,
        "xyz" => ColorSpace::XYZ,
        "lab" => ColorSpace::CIELAB,
        "cielab" => ColorSpace::CIELAB,
        "luv" => ColorSpace::CIELUV,
        "cieluv" => ColorSpace::CIELUV,
        "hsv" => ColorSpace::HSV,
        "hls" => ColorSpace::HLS,
        "hsl" => ColorSpace::HLS,
    };
}

impl ColorSpace {
    /// The canonical lowercase name, which `from_str` accepts.
    pub fn name(&self) -> &'static str {
        match *self {
            ColorSpace::RGB => "rgb",
            ColorSpace::Gray => "gray",
            ColorSpace::XYZ => "xyz",
            ColorSpace::CIELAB => "lab",
            ColorSpace::CIELUV => "luv",
            ColorSpace::HSV => "hsv",
            ColorSpace::HLS => "hls",
        }
    }

    /// The names of the three components, in order.
    pub fn components(&self) -> [&'static str; 3] {
        match *self {
            ColorSpace::RGB | ColorSpace::Gray => ["r", "g", "b"],
            ColorSpace::XYZ => ["x", "y", "z"],
            ColorSpace::CIELAB => ["l", "a", "b"],
            ColorSpace::CIELUV => ["l", "u", "v"],
            ColorSpace::HSV => ["h", "s", "v"],
            ColorSpace::HLS => ["h", "l", "s"],
        }
    }

    // RGB-derived spaces can skip the trip through XYZ and its clamping
    fn read_rgb(self, c: Coord) -> Option<RGBColor> {
        match self {
            ColorSpace::RGB | ColorSpace::Gray => Some(RGBColor::from(c)),
            ColorSpace::HSV => Some(HSVColor::from(c).to_rgb()),
            ColorSpace::HLS => Some(HLSColor::from(c).to_rgb()),
            _ => None,
        }
    }

    fn write_rgb(self, rgb: RGBColor) -> Option<Coord> {
        match self {
            ColorSpace::RGB => Some(rgb.into()),
            ColorSpace::Gray => Some(rgb.grayscale().into()),
            ColorSpace::HSV => Some(HSVColor::from_rgb(&rgb).into()),
            ColorSpace::HLS => Some(HLSColor::from_rgb(&rgb).into()),
            _ => None,
        }
    }

    fn read_xyz(self, c: Coord) -> XYZColor {
        match self {
            ColorSpace::XYZ => XYZColor::from(c),
            ColorSpace::CIELAB => CIELABColor::from(c).to_xyz(),
            ColorSpace::CIELUV => CIELUVColor::from(c).to_xyz(),
            // the others are all RGB underneath
            _ => self.read_rgb(c).map_or_else(|| XYZColor::from(c), |rgb| rgb.to_xyz()),
        }
    }

    fn write_xyz(self, xyz: XYZColor) -> Coord {
        match self {
            ColorSpace::XYZ => xyz.into(),
            ColorSpace::CIELAB => CIELABColor::from_xyz(xyz).into(),
            ColorSpace::CIELUV => CIELUVColor::from_xyz(xyz).into(),
            _ => {
                let rgb = RGBColor::from_xyz(xyz);
                self.write_rgb(rgb).unwrap_or_else(|| rgb.into())
            }
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<ColorSpace, ColorError> {
        SPACE_NAMES
            .get(s.trim().to_lowercase().as_str())
            .cloned()
            .ok_or(ColorError::UnknownColorSpace)
    }
}

/// Converts a triple from one color space to another, composing conversions as needed: RGB, Gray,
/// HSV, and HLS convert among themselves through RGB, and anything else goes through XYZ. Converting
/// to `Gray` gives the grayscale triple, even from `Gray`. Input is checked exactly as in the
/// [`convert`](../convert/index.html) module.
/// # Example
/// ```
/// # use colorspaces::space::{convert, ColorSpace};
/// let lab = convert(ColorSpace::RGB, ColorSpace::CIELAB, &[0.5, 0.5, 0.5]).unwrap();
/// assert!((lab[0] - 76.0693).abs() <= 1e-4);
/// ```
pub fn convert(from: ColorSpace, to: ColorSpace, components: &[f64]) -> Result<Triple, ColorError> {
    let input = check_triple(components)?;
    // Gray -> Gray still has to collapse a non-gray triple onto its luma
    if from == to && to != ColorSpace::Gray {
        return Ok(input.into());
    }
    let output = match from.read_rgb(input).and_then(|rgb| to.write_rgb(rgb)) {
        Some(coord) => coord,
        None => to.write_xyz(from.read_xyz(input)),
    };
    finish(output)
}
