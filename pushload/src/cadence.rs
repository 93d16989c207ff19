//! Progress reporting cadence.
//!
//! Progress lines thin out as a run grows: every tenth iteration while the
//! index is below 100, every hundredth below 1000 and every thousandth after
//! that. Indexes below 10 are never reported.

/// Returns true if progress should be reported for the 0-based iteration
/// `index`.
#[must_use]
pub fn reports(index: u64) -> bool {
    match index {
        0..10 => false,
        10..100 => index % 10 == 0,
        100..1_000 => index % 100 == 0,
        _ => index % 1_000 == 0,
    }
}
