//! Logging around fallible conversions. Library code never prints: invalid input is reported through
//! the `log` facade at `warn` level and timing at `debug`, so nothing shows up unless the caller
//! installs a logger.

use std::time::Instant;

use color::ColorError;

/// Unwraps a conversion result, logging a warning and returning `None` if it failed. This is for
/// callers that want to keep going past bad input instead of stopping at it.
/// # Example
/// ```
/// # use colorspaces::convert;
/// # use colorspaces::diagnostics::report;
/// assert!(report("rgb_to_hsv", convert::rgb_to_hsv(&[0.5, 0.5])).is_none());
/// assert!(report("rgb_to_hsv", convert::rgb_to_hsv(&[0.5, 0.5, 0.5])).is_some());
/// ```
pub fn report<T>(operation: &str, result: Result<T, ColorError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{}: invalid argument(s) ({})", operation, err);
            None
        }
    }
}

/// Runs `f`, logging how long it took at `debug` level.
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = Instant::now();
    let value = f();
    debug!("{}: {:.3?}", operation, start.elapsed());
    value
}
