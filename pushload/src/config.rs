//! Run configuration.
//!
//! pushload has no configuration file. The binary builds a [`Config`] from its
//! command line and always aims it at [`DEFAULT_SERVER`].

use std::convert::Infallible;

use http::Uri;

/// Base URI of the ingestion service receiving push events.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Configuration of a single pushload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URI of the ingestion service, [`crate::event::PUSH_PATH`] is
    /// appended to it
    pub target: Uri,
    /// Number of push events to send
    pub iterations: u64,
    /// The seed for random operations against the target
    pub seed: u64,
}

impl Config {
    /// Create a [`Config`] aimed at [`DEFAULT_SERVER`].
    #[must_use]
    pub fn new(iterations: u64, seed: u64) -> Self {
        Self {
            target: Uri::from_static(DEFAULT_SERVER),
            iterations,
            seed,
        }
    }
}

/// Parse an iteration count the forgiving way.
///
/// Leading whitespace is skipped, then an optional sign and the longest run of
/// ASCII digits are read. Trailing garbage is ignored. Input with no leading
/// digits is zero, negative counts are zero and counts past [`u64::MAX`]
/// saturate. This never fails; the `Result` lets clap use it as a value
/// parser.
///
/// # Errors
///
/// None.
pub fn parse_iterations(input: &str) -> Result<u64, Infallible> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut count: u64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        count = count
            .saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'));
    }

    if negative { Ok(0) } else { Ok(count) }
}
