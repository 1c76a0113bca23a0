//! Profile Progress
//!
//! Advisory completion percentage for onboarding-style forms. Never gates
//! submission.

/// Percentage of values with non-empty trimmed content, rounded to the
/// nearest integer.
///
/// An empty tracking set reports 100 rather than dividing by zero.
pub fn completion_percent<'a, I>(values: I) -> u8
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0usize;
    let mut filled = 0usize;
    for value in values {
        total += 1;
        if !value.trim().is_empty() {
            filled += 1;
        }
    }

    if total == 0 {
        return 100;
    }

    ((filled as f64 / total as f64) * 100.0).round() as u8
}
