//! This module describes the Bound trait, which allows for a description of what colors a color
//! gamut supports. For example, linear sRGB only supports components ranging from 0 to 1. This is
//! the only gamut handling the crate does: out-of-range components are clipped to the nearest
//! bound, one axis at a time, with no attempt at perceptual gamut mapping.

use color::RGBColor;
use colors::{HLSColor, HSVColor};
use coord::Coord;

/// Describes a color space in which the total space of representable colors has explicit bounds on
/// each component. For example, an RGB color can't have negative values for any of its components,
/// whereas CIELAB can describe colors no display can show and so has no `Bound` implementation.
/// # Example
/// ```
/// # use colorspaces::prelude::*;
/// let out_of_bounds = RGBColor{r: 0.1, g: -0.2, b: 1.2};
/// assert_eq!(out_of_bounds.clamp(), RGBColor{r: 0.1, g: 0., b: 1.});
/// ```
pub trait Bound: From<Coord> + Into<Coord> {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp_one = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp_one(point.x, ranges[0]),
            y: clamp_one(point.y, ranges[1]),
            z: clamp_one(point.z, ranges[2]),
        }
    }
    /// Returns a copy of this color with every component clamped into bounds. Colors already in the
    /// gamut come back unchanged.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl Bound for HSVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}

impl Bound for HLSColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}
