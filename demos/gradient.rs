//! Prints a gradient from dark red to white in linear RGB and CIELAB, with a swatch for each step.
//! Any arguments of the form `space(a, b, c)` are converted into every other space; bad ones are
//! logged and skipped. Set `RUST_LOG=debug` to see timings.
//!
//! ```text
//! cargo run --example gradient -- "hsv(240, 0.375, 0.8)" "lab(50, 0)"
//! ```

extern crate colorspaces;
extern crate env_logger;
#[macro_use]
extern crate log;

use std::env;

use colorspaces::convert;
use colorspaces::diagnostics::{report, timed};
use colorspaces::parse::parse_color;
use colorspaces::prelude::*;
use colorspaces::space::{self, COLOR_SPACES};
use colorspaces::terminal::{gradient_bar, swatch};

fn init_logger() {
    //default log level : warn
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn format_triple(t: &[f64; 3]) -> String {
    format!("[{:>9.4}, {:>9.4}, {:>9.4}]", t[0], t[1], t[2])
}

fn print_gradient() {
    let start = [0.5, 0., 0.];
    let end = [1., 1., 1.];
    let bar = gradient_bar(
        RGBColor::from(Coord::from(start)),
        RGBColor::from(Coord::from(end)),
        32,
    );
    println!("{}", bar);
    for &u in &[0., 0.25, 0.5, 0.75, 1.] {
        let rgb = match report("lerp", convert::lerp(&start, &end, u)) {
            Some(rgb) => rgb,
            None => continue,
        };
        let lab = match report(
            "rgb_to_lab",
            convert::rgb_to_xyz(&rgb).and_then(|xyz| convert::xyz_to_lab(&xyz)),
        ) {
            Some(lab) => lab,
            None => continue,
        };
        println!(
            "u = {:.2}  {}  rgb {}  lab {}",
            u,
            swatch(&RGBColor::from(Coord::from(rgb))),
            format_triple(&rgb),
            format_triple(&lab)
        );
    }
}

fn print_conversions(arg: &str) {
    let (from, triple) = match report(arg, parse_color(arg)) {
        Some(parsed) => parsed,
        None => return,
    };
    println!("{}", arg);
    for &to in COLOR_SPACES.iter() {
        let label = format!("{} -> {}", from, to);
        if let Some(out) = report(&label, timed(&label, || space::convert(from, to, &triple))) {
            println!("  {:<6}{}", to.name(), format_triple(&out));
        }
    }
    match space::convert(from, ColorSpace::RGB, &triple) {
        Ok(rgb) => println!("  {}", swatch(&RGBColor::from(Coord::from(rgb)))),
        Err(err) => error!("{}: {}", arg, err),
    }
}

fn main() {
    init_logger();
    print_gradient();
    for arg in env::args().skip(1) {
        print_conversions(&arg);
    }
}
