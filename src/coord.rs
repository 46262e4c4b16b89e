//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color in this
//! crate is, underneath, three numbers: `Coord` is where the arithmetic that doesn't care which
//! space those numbers live in (interpolation, componentwise checks) is written once.

use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};

/// A bare color triple: three components whose meaning depends entirely on which space the caller
/// says they're in.
pub type Triple = [f64; 3];

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`. Any color that converts
/// to and from a `Coord` matches its components with these axes in the order of the letters in its
/// name: `CIELABColor` puts `l` on the x-axis, `a` on the y-axis, and `b` on the z-axis, and
/// `HLSColor` puts `h`, `l`, `s` in that order.
///
/// # Example
/// ```
/// # use colorspaces::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalar multiplication only works with the scalar on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = rhs.to_f64().unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl From<Triple> for Coord {
    fn from(t: Triple) -> Coord {
        Coord {
            x: t[0],
            y: t[1],
            z: t[2],
        }
    }
}

impl Into<Triple> for Coord {
    fn into(self) -> Triple {
        [self.x, self.y, self.z]
    }
}

impl Coord {
    /// Linear interpolation between `self` and `other`: each component becomes
    /// `(1 - t) * start + t * end`. `t` is not clamped, so anything outside of [0, 1] extrapolates
    /// along the same line. Components that are already equal are returned untouched, which keeps
    /// `a.lerp(&a, t) == a` exact instead of merely close.
    /// # Example
    /// ```
    /// # use colorspaces::coord::Coord;
    /// let start = Coord{x: 0.5, y: 0.5, z: 0.5};
    /// let end = Coord{x: 1., y: 1., z: 1.};
    /// assert_eq!(start.lerp(&end, 0.25), Coord{x: 0.625, y: 0.625, z: 0.625});
    /// assert_eq!(start.lerp(&end, 2.), Coord{x: 1.5, y: 1.5, z: 1.5});
    /// ```
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        let mix = |a: f64, b: f64| if a == b { a } else { (1.0 - t) * a + t * b };
        Coord {
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            z: mix(self.z, other.z),
        }
    }

    /// The midpoint between two 3D points: `lerp` with `t = 0.5`.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.lerp(other, 0.5)
    }

    /// Returns `true` if every component is a finite number (not NaN and not infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The largest component.
    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// The smallest component.
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns `true` if each component of `self` is within `epsilon` of the matching component of
    /// `other`.
    pub fn approx_equal(&self, other: &Coord, epsilon: f64) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = epsilon)
            && approx_eq!(f64, self.y, other.y, epsilon = epsilon)
            && approx_eq!(f64, self.z, other.z, epsilon = epsilon)
    }
}
