//! Contrast report — one line per role pair, per theme.
//!
//! The report is plain text meant for a terminal or a CI log:
//!
//! ```text
//!
//! Theme: dark (default)
//!   - background (205 100% 12%) vs foreground (0 0% 100%) -> contrast 15.91 : AA/AAA
//!   - primary/primary-foreground: missing variable
//!   - secondary/secondary-foreground: unable to parse HSL
//!   - card (205 100% 15%) vs card-foreground (0 0% 100%) -> contrast 14.17 : AA/AAA
//! ```
//!
//! Each pair is evaluated on its own. A missing or malformed token only
//! affects the line for its pair.

use std::fmt;

use tone_color::{Hsl, Rgb8};
use tracing::{debug, trace, warn};

use crate::block::extract_block;
use crate::contrast::{Level, Thresholds, contrast_ratio};
use crate::vars::VarMap;

/// The role pairs every theme is checked for, in report order.
pub const DEFAULT_PAIRS: [(&str, &str); 4] = [
    ("background", "foreground"),
    ("primary", "primary-foreground"),
    ("secondary", "secondary-foreground"),
    ("card", "card-foreground"),
];

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Two token names whose colors are drawn on top of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RolePair {
    pub first: String,
    pub second: String,
}

impl RolePair {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for RolePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

/// A theme to audit: which block to read, and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Selector whose block holds the tokens, e.g. `:root` or `.dark`.
    pub selector: String,
    /// Name printed in the report header.
    pub label: String,
}

impl Theme {
    #[must_use]
    pub fn new(selector: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            label: label.into(),
        }
    }
}

/// Role pairs and thresholds for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub pairs: Vec<RolePair>,
    pub thresholds: Thresholds,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS
                .iter()
                .map(|&(a, b)| RolePair::new(a, b))
                .collect(),
            thresholds: Thresholds::WCAG,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Numbers behind a measured pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub first_value: String,
    pub second_value: String,
    pub first_rgb: Rgb8,
    pub second_rgb: Rgb8,
    pub ratio: f64,
    pub level: Level,
}

/// What happened when a pair was checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// At least one of the two tokens is not declared, or is blank.
    Missing,
    /// Both tokens are declared but at least one is not an HSL triple.
    Unparseable,
    /// Both tokens resolved to colors.
    Measured(Measurement),
}

/// One role pair and its outcome: a single report line.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCheck {
    pub pair: RolePair,
    pub outcome: Outcome,
}

impl PairCheck {
    /// Conformance level, if the pair could be measured.
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        match &self.outcome {
            Outcome::Measured(m) => Some(m.level),
            Outcome::Missing | Outcome::Unparseable => None,
        }
    }
}

impl fmt::Display for PairCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = &self.pair;
        match &self.outcome {
            Outcome::Missing => write!(f, "  - {pair}: missing variable"),
            Outcome::Unparseable => write!(f, "  - {pair}: unable to parse HSL"),
            Outcome::Measured(m) => write!(
                f,
                "  - {} ({}) vs {} ({}) -> contrast {} : {}",
                pair.first,
                m.first_value,
                pair.second,
                m.second_value,
                two_decimals(m.ratio),
                m.level
            ),
        }
    }
}

/// `value` with two decimals, exact ties rounded up.
///
/// `{:.2}` rounds an exact tie to even (1.125 → "1.12"); report lines round
/// it up (1.125 → "1.13"). A double sits exactly on a two-decimal tie only
/// when it is an odd multiple of 1/8.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && (eighths / 2.0).fract() != 0.0 {
        format!("{:.2}", (value * 100.0).ceil() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

/// Every pair check for one theme, in configuration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeReport {
    pub label: String,
    pub checks: Vec<PairCheck>,
}

impl ThemeReport {
    /// Pairs that were measured and reach at least AA.
    #[must_use]
    pub fn passing(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.level().is_some_and(Level::meets_aa))
            .count()
    }

    /// Pairs that were measured and fall short of AA.
    #[must_use]
    pub fn failing(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.level() == Some(Level::Fail))
            .count()
    }

    /// Pairs that could not be measured.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.checks.iter().filter(|c| c.level().is_none()).count()
    }
}

impl fmt::Display for ThemeReport {
    /// A blank line, the theme header, then one line per pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Theme: {}", self.label)?;
        for check in &self.checks {
            writeln!(f, "{check}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Check every configured pair against one theme's tokens.
#[must_use]
pub fn check_theme(label: &str, vars: &VarMap, config: &CheckConfig) -> ThemeReport {
    let checks = config
        .pairs
        .iter()
        .map(|pair| PairCheck {
            pair: pair.clone(),
            outcome: check_pair(pair, vars, &config.thresholds),
        })
        .collect();

    ThemeReport {
        label: label.to_owned(),
        checks,
    }
}

/// Extract, parse, and check every theme in `css`, in the order given.
#[must_use]
pub fn audit(css: &str, themes: &[Theme], config: &CheckConfig) -> Vec<ThemeReport> {
    themes
        .iter()
        .map(|theme| {
            let block = extract_block(css, &theme.selector);
            if block.trim().is_empty() {
                warn!(selector = %theme.selector, "theme block is missing or empty");
            }

            let vars = VarMap::parse(block);
            debug!(
                selector = %theme.selector,
                block_bytes = block.len(),
                tokens = vars.len(),
                "extracted theme tokens"
            );

            check_theme(&theme.label, &vars, config)
        })
        .collect()
}

fn check_pair(pair: &RolePair, vars: &VarMap, thresholds: &Thresholds) -> Outcome {
    let declared = |name: &str| vars.get(name).filter(|v| !v.is_empty());

    let (Some(first_value), Some(second_value)) = (declared(&pair.first), declared(&pair.second))
    else {
        debug!(%pair, "token not declared");
        return Outcome::Missing;
    };

    let (Some(first), Some(second)) = (Hsl::parse(first_value), Hsl::parse(second_value)) else {
        debug!(%pair, first_value, second_value, "token is not an HSL triple");
        return Outcome::Unparseable;
    };

    let first_rgb = first.to_rgb8();
    let second_rgb = second.to_rgb8();
    let ratio = contrast_ratio(
        first_rgb.relative_luminance(),
        second_rgb.relative_luminance(),
    );
    let level = thresholds.classify(ratio);
    trace!(%pair, %first, %second, %first_rgb, %second_rgb, ratio, ?level, "measured pair");

    Outcome::Measured(Measurement {
        first_value: first_value.to_owned(),
        second_value: second_value.to_owned(),
        first_rgb,
        second_rgb,
        ratio,
        level,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
