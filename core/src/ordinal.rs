//! Ordinal formatting for positional diagnostics.

/// Format `n` as an English ordinal (`1st`, `2nd`, `3rd`, `4th`, ...).
///
/// Values whose remainder mod 100 falls in `11..=13` always take `th`;
/// otherwise the suffix follows the last digit.
pub fn ordinal(n: usize) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}
