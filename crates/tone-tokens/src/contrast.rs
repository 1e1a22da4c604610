//! WCAG contrast ratio and conformance levels.
//!
//! Text contrast thresholds from WCAG 2.x, success criteria 1.4.3 and 1.4.6:
//!
//! - AA: contrast ratio >= 4.5:1 for normal text
//! - AAA: contrast ratio >= 7:1 for normal text
//!
//! Luminance comes from tone-color; this module only compares numbers.

use std::fmt;

/// Compute the WCAG 2.x contrast ratio between two relative luminances.
///
/// Returns a value in [1.0, 21.0] for luminances in [0.0, 1.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Highest conformance level a contrast ratio reaches.
///
/// Ordered: `Fail < Aa < Aaa`. Reaching AAA implies reaching AA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Below the AA threshold.
    Fail,
    /// Meets AA but not AAA.
    Aa,
    /// Meets AAA (and therefore AA).
    Aaa,
}

impl Level {
    #[must_use]
    pub const fn meets_aa(self) -> bool {
        matches!(self, Self::Aa | Self::Aaa)
    }

    #[must_use]
    pub const fn meets_aaa(self) -> bool {
        matches!(self, Self::Aaa)
    }

    /// `"AA"` or `"fail"`, as printed in reports.
    #[must_use]
    pub const fn aa_label(self) -> &'static str {
        if self.meets_aa() { "AA" } else { "fail" }
    }

    /// `"AAA"` or `"fail"`, as printed in reports.
    #[must_use]
    pub const fn aaa_label(self) -> &'static str {
        if self.meets_aaa() { "AAA" } else { "fail" }
    }
}

impl fmt::Display for Level {
    /// Renders as `AA/AAA`, `AA/fail` or `fail/fail`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.aa_label(), self.aaa_label())
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Minimum contrast ratios for each conformance level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub aa: f64,
    pub aaa: f64,
}

impl Thresholds {
    /// WCAG 2.x normal-text thresholds: 4.5 and 7.0.
    pub const WCAG: Self = Self { aa: 4.5, aaa: 7.0 };

    /// Classify a contrast ratio. Comparisons are inclusive.
    #[must_use]
    pub fn classify(&self, ratio: f64) -> Level {
        if ratio >= self.aaa {
            Level::Aaa
        } else if ratio >= self.aa {
            Level::Aa
        } else {
            Level::Fail
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::WCAG
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
