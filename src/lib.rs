//! A small, exact library of color space conversions. Colors are converted between linear RGB,
//! CIE 1931 XYZ (D65), CIELAB, CIELUV, HSV, HLS, and grayscale by pure functions with a fixed
//! numeric policy: the same coefficients, thresholds, tie-breaks, and degenerate-case values on
//! every call. There is no state anywhere in the crate, so every function may be called from any
//! number of threads at once.
//!
//! There are two ways in. The typed API ([`color::RGBColor`], [`colors::CIELABColor`], and friends,
//! tied together by the [`color::Color`] trait) cannot be handed the wrong number of components.
//! The [`convert`] module exposes the same operations over plain slices, checking arity and
//! finiteness and reporting problems as a [`color::ColorError`] instead of panicking.

#![doc(html_root_url = "https://docs.rs/colorspaces/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.969256 with -0.969_256
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate num;
extern crate regex;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(feature = "terminal")]
extern crate termion;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod coord;
pub mod diagnostics;
pub mod mix;
pub mod parse;
pub mod prelude;
pub mod space;
#[cfg(feature = "terminal")]
pub mod terminal;
