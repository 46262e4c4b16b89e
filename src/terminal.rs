//! Swatches for truecolor terminals, built on `termion`. Only compiled with the `terminal` feature.

use termion::color::{Fg, Reset, Rgb};

use color::RGBColor;
use mix::gradient;

const BLOCK: &str = "\u{2588}";

/// A single block character in the given color, followed by a reset. Components are clipped into
/// [0, 1] and rounded to 8 bits first.
/// # Example
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::terminal::swatch;
/// let red = swatch(&RGBColor{r: 1., g: 0., b: 0.});
/// assert!(red.starts_with("\x1b[38;2;255;0;0m"));
/// ```
pub fn swatch(color: &RGBColor) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("{}{}{}", Fg(Rgb(r, g, b)), BLOCK, Fg(Reset))
}

/// `steps` swatches from `start` to `end`, interpolated in RGB, as one line.
pub fn gradient_bar(start: RGBColor, end: RGBColor, steps: usize) -> String {
    gradient(start, end, steps)
        .iter()
        .map(|c| {
            let (r, g, b) = c.to_rgb8();
            format!("{}{}", Fg(Rgb(r, g, b)), BLOCK)
        })
        .chain(Some(Fg(Reset).to_string()))
        .collect()
}
