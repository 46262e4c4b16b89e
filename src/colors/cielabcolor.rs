//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for lightness and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, a\*, and b\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module. This is CIELAB relative to D65, the white point everything else in this
//! crate uses: no chromatic adaptation happens anywhere.

use color::{Color, XYZColor};
use consts::{CIE_EPSILON, CIE_KAPPA, D65_WHITE};
use coord::Coord;

/// The CIE nonlinearity: a cube root, with a linear segment near black so the slope stays finite.
/// The two pieces meet at `CIE_EPSILON`.
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of `lab_f`.
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}

/// CIE 1976 lightness from relative luminance (Y divided by the white point's Y). Shared by CIELAB
/// and CIELUV, which define L\* identically.
pub(crate) fn cie_lightness(y_ratio: f64) -> f64 {
    if y_ratio > CIE_EPSILON {
        116.0 * y_ratio.cbrt() - 16.0
    } else {
        CIE_KAPPA * y_ratio
    }
}

/// Inverse of `cie_lightness`: relative luminance from L\*.
pub(crate) fn cie_lightness_inv(l: f64) -> f64 {
    if l > CIE_KAPPA * CIE_EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / CIE_KAPPA
    }
}

/// A color in the CIELAB color space.
/// # Example
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::CIELABColor;
/// let lab = CIELABColor::from_xyz(XYZColor{x: 0.5, y: 0.5, z: 0.5});
/// assert!((lab.l - 76.069261).abs() <= 1e-6);
/// assert!((lab.a - 6.779162).abs() <= 1e-6);
/// assert!((lab.b - 4.436215).abs() <= 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of a given color. 0 is black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis: negative is green, positive is magenta. Usually somewhere
    /// between -128 and 127 for visible colors.
    pub a: f64,
    /// The second opponent color axis: negative is blue, positive is yellow. Usually somewhere
    /// between -128 and 127 for visible colors.
    pub b: f64,
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB by normalizing against the D65 white point and
    /// applying the CIE nonlinearity to each axis.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let x_n = xyz.x / D65_WHITE[0];
        let y_n = xyz.y / D65_WHITE[1];
        let z_n = xyz.z / D65_WHITE[2];
        let (f_x, f_y, f_z) = (lab_f(x_n), lab_f(y_n), lab_f(z_n));

        // note how a and b are opponent color axes
        CIELABColor {
            l: cie_lightness(y_n),
            a: 500.0 * (f_x - f_y),
            b: 200.0 * (f_y - f_z),
        }
    }
    /// Returns the XYZ color that corresponds to this CIELAB color: the exact inverse of `from_xyz`,
    /// including its linear segment near black.
    fn to_xyz(&self) -> XYZColor {
        let f_y = (self.l + 16.0) / 116.0;
        let f_x = f_y + self.a / 500.0;
        let f_z = f_y - self.b / 200.0;
        XYZColor {
            x: D65_WHITE[0] * lab_f_inv(f_x),
            y: D65_WHITE[1] * cie_lightness_inv(self.l),
            z: D65_WHITE[2] * lab_f_inv(f_z),
        }
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for CIELABColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.a,
            z: self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_cielab_gray() {
        let lab = CIELABColor::from_xyz(XYZColor {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        });
        // a is 6.779162, not the 6.7790 that gets quoted for this point
        assert!((lab.l - 76.069261).abs() <= 1e-6);
        assert!((lab.a - 6.779162).abs() <= 1e-6);
        assert!((lab.b - 4.436215).abs() <= 1e-6);
    }

    #[test]
    fn test_cielab_white_and_black() {
        let white: CIELABColor = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        }.convert();
        assert!((white.l - 100.).abs() <= 1e-9);
        assert!(white.a.abs() <= 1e-3);
        assert!(white.b.abs() <= 1e-3);
        let black = CIELABColor::from_xyz(XYZColor {
            x: 0.,
            y: 0.,
            z: 0.,
        });
        assert_eq!(black.l, 0.);
        assert!(black.a.abs() <= 1e-12);
        assert!(black.b.abs() <= 1e-12);
    }

    #[test]
    fn test_lightness_continuity() {
        // compute both branch formulas right at the breakpoint
        let cube_root_branch = 116.0 * CIE_EPSILON.cbrt() - 16.0;
        let linear_branch = CIE_KAPPA * CIE_EPSILON;
        assert!((cube_root_branch - linear_branch).abs() < 1e-6);
        // and just either side of it
        let below = cie_lightness(CIE_EPSILON - 1e-12);
        let above = cie_lightness(CIE_EPSILON + 1e-12);
        assert!((above - below).abs() < 1e-6);
        // same for the axis nonlinearity
        assert!((lab_f(CIE_EPSILON - 1e-12) - lab_f(CIE_EPSILON + 1e-12)).abs() < 1e-6);
    }

    #[test]
    fn test_cielab_dark_branch() {
        // everything here is below the breakpoint, so only the linear pieces are used
        let lab = CIELABColor::from_xyz(XYZColor {
            x: 0.001,
            y: 0.002,
            z: 0.003,
        });
        assert!((lab.l - 1.8065926).abs() <= 1e-6);
        assert!((lab.a - -3.6905585).abs() <= 1e-6);
        assert!((lab.b - -1.1765371).abs() <= 1e-6);
    }

    #[test]
    fn test_cielab_xyz_round_trip() {
        let samples = [
            XYZColor {
                x: 0.4,
                y: 0.2,
                z: 0.6,
            },
            XYZColor {
                x: 0.001,
                y: 0.002,
                z: 0.003,
            },
            XYZColor {
                x: 0.9,
                y: 0.95,
                z: 1.05,
            },
        ];
        for xyz in samples.iter() {
            let xyz2 = CIELABColor::from_xyz(*xyz).to_xyz();
            assert!((xyz.x - xyz2.x).abs() <= 1e-9);
            assert!((xyz.y - xyz2.y).abs() <= 1e-9);
            assert!((xyz.z - xyz2.z).abs() <= 1e-9);
        }
    }
}
