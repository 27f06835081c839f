//! Average score policy
//!
//! The reported average is the arithmetic mean rounded up to the next
//! integer (ceiling), so `[3, 4]` averages to 4, not 3.5.

/// Ceiling of the mean of `scores`, or `None` when there are no scores.
///
/// The sum is accumulated as `i128` so no realistic number of `i64`
/// scores can overflow it. The mean lies between the smallest and largest
/// score, so narrowing it back to `i64` is lossless.
pub fn ceiling_mean(scores: &[i64]) -> Option<i64> {
    if scores.is_empty() {
        return None;
    }

    let total: i128 = scores.iter().map(|&s| i128::from(s)).sum();
    let count = scores.len() as i128;

    // Integer division truncates toward zero, which is already the ceiling
    // for negative quotients.
    let mut mean = total / count;
    if total % count > 0 {
        mean += 1;
    }

    Some(mean as i64)
}
