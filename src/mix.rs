//! Describes colors that can be blended with other colors in their own 3D space. Blending, in this
//! context, is moving along the straight line between two color projections in some space.
//!
//! Note that there is one very crucial thing to remember about blending: it differs depending on
//! the color space being used. Two RGB colors blended in RGB give a different result than the same
//! two colors converted to CIELAB and blended there. For this reason, `a.lerp(b, t)` is only allowed
//! if `a` and `b` share a type.
//!
//! Hues are not special-cased: blending HSV 350 and HSV 10 runs the long way round through 180.

use color::Color;
use coord::Coord;

/// A color that can be linearly interpolated with another color of the same type. There is a blanket
/// implementation for every `Color` that converts to and from `Coord`, which is all of them.
pub trait Mix: Color + From<Coord> + Into<Coord> + Copy {
    /// Returns `(1 - t) * self + t * other`, componentwise. `t` is not clamped: values outside of
    /// [0, 1] extrapolate past either end.
    /// # Example
    /// ```
    /// # use colorspaces::prelude::*;
    /// let start = RGBColor{r: 0.5, g: 0.5, b: 0.5};
    /// let end = RGBColor{r: 1., g: 1., b: 1.};
    /// assert_eq!(start.lerp(end, 0.25), RGBColor{r: 0.625, g: 0.625, b: 0.625});
    /// ```
    fn lerp(self, other: Self, t: f64) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.lerp(&c2, t))
    }

    /// The midpoint of the two colors: `lerp` with `t = 0.5`.
    fn mix(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl<T: Color + From<Coord> + Into<Coord> + Copy> Mix for T {}

/// Returns `steps` colors evenly spaced from `start` to `end`, both included. Fewer than two steps
/// can't include both ends: zero steps gives nothing and one step gives just `start`.
pub fn gradient<T: Mix>(start: T, end: T, steps: usize) -> Vec<T> {
    match steps {
        0 => vec![],
        1 => vec![start],
        _ => (0..steps)
            .map(|i| start.lerp(end, i as f64 / (steps - 1) as f64))
            .collect(),
    }
}
