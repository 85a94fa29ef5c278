//! Wilson score interval bounds.
//!
//! Used as the statistical trigger for interval tuning and placement.
//!
//! Picking `z` for a one-sided bound at a given confidence:
//!
//! | confidence | lower bound z | upper bound z |
//! |------------|---------------|---------------|
//! | 0.80       | -0.845        | 0.845         |
//! | 0.85       | -1.035        | 1.035         |
//! | 0.90       | -1.285        | 1.285         |
//! | 0.95       | -1.645        | 1.645         |
//! | 0.99       | -2.325        | 2.325         |
//! | 0.999      | -3.1          | 3.1           |

/// One-sided lower bound z-score at 80% confidence.
pub const TOO_EASY_Z: f64 = -0.845;

/// Success rate the lower bound has to beat for "too easy".
pub const TOO_EASY_THRESHOLD: f64 = 0.875;

/// One-sided upper bound z-score at 99% confidence.
pub const TOO_HARD_Z: f64 = 2.325;

/// Success rate the upper bound has to stay under for "too hard".
pub const TOO_HARD_THRESHOLD: f64 = 0.80;

/// Boundary point of the Wilson score interval, without continuity correction.
///
/// A negative `z` gives a lower bound, a positive `z` an upper bound. With no
/// samples the bound is 0 for a lower bound and 1 for an upper bound, and
/// 0.5 when `z` is zero as well.
pub fn wilson(successes: u32, failures: u32, z: f64) -> f64 {
    let ns = f64::from(successes);
    let nf = f64::from(failures);
    let n = ns + nf;
    let z2 = z * z;

    let denominator = n + z2;
    if denominator == 0.0 {
        return 0.5;
    }

    let spread = if n > 0.0 { ns * nf / n } else { 0.0 };
    let bound = (ns + z2 / 2.0) / denominator + (z / denominator) * (spread + z2 / 4.0).sqrt();
    bound.clamp(0.0, 1.0)
}

/// Strong evidence that the true success rate is above 87.5%.
pub fn is_too_easy(correct: u32, incorrect: u32) -> bool {
    if correct == 0 && incorrect == 0 {
        return false;
    }
    wilson(correct, incorrect, TOO_EASY_Z) > TOO_EASY_THRESHOLD
}

/// Very strong evidence that the true success rate is below 80%.
pub fn is_too_hard(correct: u32, incorrect: u32) -> bool {
    if correct == 0 && incorrect == 0 {
        return false;
    }
    wilson(correct, incorrect, TOO_HARD_Z) < TOO_HARD_THRESHOLD
}
