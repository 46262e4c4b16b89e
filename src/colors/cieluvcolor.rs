//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV shares its lightness with CIELAB, but measures chromaticity as the distance from
//! the white point in the CIE 1976 UCS diagram instead of with a per-axis nonlinearity.

use color::{Color, XYZColor};
use colors::cielabcolor::{cie_lightness, cie_lightness_inv};
use consts::{D65_UV_PRIME, D65_WHITE};
use coord::Coord;

/// The (u', v') chromaticity of an XYZ color. Black has no chromaticity; it gets (0, 0) instead of
/// a division by zero.
fn uv_prime(xyz: &XYZColor) -> (f64, f64) {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
    }
}

/// A similar color system to CIELAB, adapted at the same time and with similar goals. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently and
/// act slightly differently.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::CIELUVColor;
/// let black = CIELUVColor::from_xyz(XYZColor{x: 0., y: 0., z: 0.});
/// assert_eq!(black.l, 0.);
/// assert_eq!(black.u, 0.);
/// assert_eq!(black.v, 0.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component of LUV, identical to CIELAB's. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is.
    pub v: f64,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color relative to D65.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let l = cie_lightness(xyz.y / D65_WHITE[1]);
        let (u_prime, v_prime) = uv_prime(&xyz);
        let (u_prime_n, v_prime_n) = D65_UV_PRIME;

        let u = 13.0 * l * (u_prime - u_prime_n);
        let v = 13.0 * l * (v_prime - v_prime_n);
        // 13 * 0 * negative is -0
        CIELUVColor {
            l,
            u: u + 0.0,
            v: v + 0.0,
        }
    }
    /// Returns the `XYZColor` that matches this color. As with CIELAB there is no outside reference
    /// for this direction; it is checked by round trip. Zero lightness is black regardless of u and v.
    fn to_xyz(&self) -> XYZColor {
        if self.l == 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let (u_prime_n, v_prime_n) = D65_UV_PRIME;
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;

        let y = D65_WHITE[1] * cie_lightness_inv(self.l);
        if v_prime == 0.0 {
            // the chromaticity diagram's degenerate edge: only Y is recoverable
            return XYZColor { x: 0.0, y, z: 0.0 };
        }
        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        XYZColor { x, y, z }
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for CIELUVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.u,
            z: self.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;
    use colors::CIELABColor;

    #[test]
    fn test_cieluv_black_guard() {
        let black = CIELUVColor::from_xyz(XYZColor {
            x: 0.,
            y: 0.,
            z: 0.,
        });
        assert_eq!(black, CIELUVColor{l: 0., u: 0., v: 0.});
        assert!(black.u.is_finite() && black.v.is_finite());
        assert_eq!(uv_prime(&XYZColor{x: 0., y: 0., z: 0.}), (0., 0.));
    }

    #[test]
    fn test_cieluv_shares_lightness() {
        let xyz = XYZColor {
            x: 0.3,
            y: 0.53,
            z: 0.65,
        };
        let luv = CIELUVColor::from_xyz(xyz);
        let lab = CIELABColor::from_xyz(xyz);
        assert_eq!(luv.l, lab.l);
        let dark = XYZColor {
            x: 0.001,
            y: 0.002,
            z: 0.003,
        };
        assert_eq!(CIELUVColor::from_xyz(dark).l, CIELABColor::from_xyz(dark).l);
    }

    #[test]
    fn test_cieluv_reference_values() {
        let gray = CIELUVColor::from_xyz(XYZColor {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        });
        assert!((gray.l - 76.0692610).abs() <= 1e-6);
        assert!((gray.u - 12.4471763).abs() <= 1e-6);
        assert!((gray.v - 5.3136096).abs() <= 1e-6);
        let red: CIELUVColor = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        }.convert();
        assert!((red.l - 53.2405879).abs() <= 1e-6);
        assert!((red.u - 174.9455341).abs() <= 1e-6);
        assert!((red.v - 37.7737143).abs() <= 1e-6);
    }

    #[test]
    fn test_cieluv_white_near_neutral() {
        // the reference chromaticities are very slightly off the matrix white, so u and v are small
        // but not exactly 0
        let white: CIELUVColor = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        }.convert();
        assert!((white.l - 100.).abs() <= 1e-9);
        assert!(white.u.abs() <= 0.2);
        assert!(white.v.abs() <= 0.2);
    }

    #[test]
    fn test_cieluv_xyz_round_trip() {
        let xyz = XYZColor {
            x: 0.3,
            y: 0.53,
            z: 0.65,
        };
        let xyz2 = CIELUVColor::from_xyz(xyz).to_xyz();
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
        let black = CIELUVColor {
            l: 0.,
            u: 12.,
            v: -4.,
        }.to_xyz();
        assert_eq!(black, XYZColor{x: 0., y: 0., z: 0.});
    }
}
