// SPDX-License-Identifier: MIT
//
// HSL token value parsing.
//
// Accepted shape (case-insensitive, matched anywhere in the value):
//
//   [ws] [hsl(] <hue> ws+ <sat>% ws+ <light>% [ws] [)]
//
// where each number is a run of digits and dots. The run must then parse
// as an `f64`, so `1.2.3` or a lone `.` reject the whole value. Signs,
// units (`deg`, `turn`), commas and alpha components are not accepted;
// the audited tokens never use them.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Hsl;

static HSL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:hsl\()?([0-9.]+)\s+([0-9.]+)%\s+([0-9.]+)%\s*\)?")
        .expect("HSL value pattern is a valid regex")
});

/// Parse an HSL design-token value.
///
/// Returns `None` if the value does not contain an HSL triple.
#[must_use]
pub fn parse_hsl(value: &str) -> Option<Hsl> {
    let caps = HSL_VALUE.captures(value)?;
    let h = caps[1].parse::<f64>().ok()?;
    let s = caps[2].parse::<f64>().ok()?;
    let l = caps[3].parse::<f64>().ok()?;
    Some(Hsl::new(h, s, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_triple() {
        assert_eq!(parse_hsl("205 100% 45%"), Some(Hsl::new(205.0, 100.0, 45.0)));
    }

    #[test]
    fn function_wrapper() {
        assert_eq!(parse_hsl("hsl(205 100% 45%)"), Some(Hsl::new(205.0, 100.0, 45.0)));
        assert_eq!(parse_hsl("HSL(205 100% 45% )"), Some(Hsl::new(205.0, 100.0, 45.0)));
    }

    #[test]
    fn fractional_components() {
        assert_eq!(parse_hsl("217.2 32.6% 17.5%"), Some(Hsl::new(217.2, 32.6, 17.5)));
        assert_eq!(parse_hsl(".5 1.% 0%"), Some(Hsl::new(0.5, 1.0, 0.0)));
    }

    #[test]
    fn extra_whitespace_between_components() {
        assert_eq!(parse_hsl("  0\t0%   100%"), Some(Hsl::new(0.0, 0.0, 100.0)));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_hsl("not-a-color"), None);
        assert_eq!(parse_hsl("#0f1729"), None);
        assert_eq!(parse_hsl("rgb(0 0 0)"), None);
        assert_eq!(parse_hsl("205, 100%, 45%"), None);
        assert_eq!(parse_hsl("205 100 45"), None);
        assert_eq!(parse_hsl(""), None);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(parse_hsl("1.2.3 50% 50%"), None);
        assert_eq!(parse_hsl(". 50% 50%"), None);
    }

    #[test]
    fn match_is_not_anchored() {
        // Only the triple matters; surrounding text is ignored.
        assert_eq!(
            parse_hsl("var(--x, 10 20% 30%)"),
            Some(Hsl::new(10.0, 20.0, 30.0))
        );
    }
}
