//! This file reads color triples out of text. Three shapes are accepted: a bare list of numbers
//! (`0.5, 0.5, 0.5` or `0.5 0.5 0.5`), the same list in brackets or parentheses (`[0.5, 0.5, 0.5]`),
//! and a tagged color (`hsv(240, 0.375, 0.8)`). Numbers are plain decimals with an optional sign and
//! exponent; anything else in a number's position is an `InvalidType` error naming its position,
//! never silently dropped.

use color::ColorError;
use convert::check_triple;
use coord::Triple;
use regex::Regex;
use space::ColorSpace;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"\s*,\s*|\s+").unwrap();
    static ref TAGGED: Regex = Regex::new(r"^([A-Za-z]+)\s*\((.*)\)$").unwrap();
}

// peel one matching pair of brackets or parentheses, if there is one
fn strip_brackets(text: &str) -> Result<&str, ColorError> {
    let opens = text.starts_with('[') || text.starts_with('(');
    let closes = text.ends_with(']') || text.ends_with(')');
    match (opens, closes) {
        (false, false) => Ok(text),
        (true, true) => {
            let pair = (&text[..1], &text[text.len() - 1..]);
            if pair == ("[", "]") || pair == ("(", ")") {
                Ok(text[1..text.len() - 1].trim())
            } else {
                Err(ColorError::InvalidSyntax)
            }
        }
        _ => Err(ColorError::InvalidSyntax),
    }
}

/// Splits text into numbers, in order. No arity check happens here: two numbers come back as two
/// numbers.
/// # Errors
/// `InvalidType { index }` for the first token that isn't a decimal number, and `InvalidSyntax` for
/// unbalanced brackets.
pub fn parse_components(text: &str) -> Result<Vec<f64>, ColorError> {
    let body = strip_brackets(text.trim())?;
    if body.is_empty() {
        return Ok(vec![]);
    }
    SEPARATOR
        .split(body)
        .enumerate()
        .map(|(index, token)| {
            if NUMBER.is_match(token) {
                token.parse::<f64>().map_err(|_| ColorError::InvalidType { index })
            } else {
                Err(ColorError::InvalidType { index })
            }
        })
        .collect()
}

/// Parses exactly three finite numbers.
/// # Example
/// ```
/// # use colorspaces::parse::parse_triple;
/// # use colorspaces::color::ColorError;
/// assert_eq!(parse_triple("[0.5, 0.25, 1]"), Ok([0.5, 0.25, 1.0]));
/// assert_eq!(parse_triple("0.5 0.25"), Err(ColorError::InvalidArity{expected: 3, found: 2}));
/// assert_eq!(parse_triple("0.5 red 1"), Err(ColorError::InvalidType{index: 1}));
/// ```
pub fn parse_triple(text: &str) -> Result<Triple, ColorError> {
    let components = parse_components(text)?;
    Ok(check_triple(&components)?.into())
}

/// Parses a tagged color such as `lab(76.07, 6.78, 4.44)` into its space and components.
/// # Errors
/// `InvalidSyntax` if the text isn't of the form `name(...)`, `UnknownColorSpace` if the name isn't
/// recognized, and anything `parse_triple` returns for the part in parentheses.
pub fn parse_color(text: &str) -> Result<(ColorSpace, Triple), ColorError> {
    let caps = TAGGED
        .captures(text.trim())
        .ok_or(ColorError::InvalidSyntax)?;
    let space: ColorSpace = caps[1].parse()?;
    let triple = parse_triple(&caps[2])?;
    Ok((space, triple))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_component_shapes() {
        assert_eq!(parse_components("0.5, 0.5, 0.5"), Ok(vec![0.5, 0.5, 0.5]));
        assert_eq!(parse_components("  1 2   3 "), Ok(vec![1., 2., 3.]));
        assert_eq!(parse_components("(-1,+2.5e1 ,.25)"), Ok(vec![-1., 25., 0.25]));
        assert_eq!(parse_components("[]"), Ok(vec![]));
        assert_eq!(parse_components("[0.5, 0.5"), Err(ColorError::InvalidSyntax));
        assert_eq!(parse_components("[0.5, 0.5)"), Err(ColorError::InvalidSyntax));
    }

    #[test]
    fn test_non_numeric_tokens() {
        assert_eq!(
            parse_components("0.5, abc, 0.5"),
            Err(ColorError::InvalidType { index: 1 })
        );
        // Rust would happily parse these; they aren't finite reals
        assert_eq!(parse_components("nan 0 0"), Err(ColorError::InvalidType { index: 0 }));
        assert_eq!(parse_components("0 0 inf"), Err(ColorError::InvalidType { index: 2 }));
        assert_eq!(parse_components("1..2 0 0"), Err(ColorError::InvalidType { index: 0 }));
        // a doubled comma leaves an empty token behind
        assert_eq!(parse_components("1,,2"), Err(ColorError::InvalidType { index: 1 }));
    }

    #[test]
    fn test_triple_arity() {
        assert_eq!(parse_triple("1 2 3"), Ok([1., 2., 3.]));
        assert_eq!(
            parse_triple("1 2 3 4"),
            Err(ColorError::InvalidArity {
                expected: 3,
                found: 4,
            })
        );
        assert_eq!(
            parse_triple(""),
            Err(ColorError::InvalidArity {
                expected: 3,
                found: 0,
            })
        );
        // overflows to infinity, so it parses but isn't finite
        assert_eq!(parse_triple("1e400 0 0"), Err(ColorError::InvalidType { index: 0 }));
    }

    #[test]
    fn test_tagged_colors() {
        assert_eq!(
            parse_color("hsv(240, 0.375, 0.8)"),
            Ok((ColorSpace::HSV, [240., 0.375, 0.8]))
        );
        assert_eq!(
            parse_color(" Lab (76.07 6.78 4.44) "),
            Ok((ColorSpace::CIELAB, [76.07, 6.78, 4.44]))
        );
        assert_eq!(parse_color("0.5 0.5 0.5"), Err(ColorError::InvalidSyntax));
        assert_eq!(parse_color("cmyk(0, 0, 0)"), Err(ColorError::UnknownColorSpace));
        assert_eq!(
            parse_color("rgb(0.5, 0.5)"),
            Err(ColorError::InvalidArity {
                expected: 3,
                found: 2,
            })
        );
    }
}
