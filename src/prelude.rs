//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait in the crate, the two anchor types
//! [`RGBColor`] and [`XYZColor`], the error type [`ColorError`], and [`ColorSpace`]. The alternative
//! color spaces in the [`colors`] module are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`XYZColor`]: ../color/struct.XYZColor.html
//! [`ColorError`]: ../color/enum.ColorError.html
//! [`ColorSpace`]: ../space/enum.ColorSpace.html
//! [`colors`]: ../colors/index.html

pub use bound::Bound;
pub use color::{Color, ColorError, RGBColor, XYZColor};
pub use coord::Coord;
pub use mix::Mix;
pub use space::ColorSpace;
