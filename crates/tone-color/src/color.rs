// SPDX-License-Identifier: MIT
//
// HSL and 8-bit sRGB color types.
//
// Single-character variable names (h, s, l, r, g, b, k, a) are the
// standard notation in the CSS Color 4 and WCAG formulas. Keeping them
// makes the code easy to check against the reference text.
#![allow(clippy::many_single_char_names)]
//
// Both conversions below must agree bit for bit with what a browser
// computes for `hsl(h s% l%)`: the arithmetic follows the reference
// algorithms in order, unfused.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in the CSS HSL model.
///
/// Values are kept in the units a stylesheet uses, not normalized:
///
/// - `h`: hue angle in degrees, nominally 0.0 to 360.0
/// - `s`: saturation in percent, 0.0 to 100.0
/// - `l`: lightness in percent, 0.0 to 100.0
///
/// # Examples
///
/// ```
/// use tone_color::{Hsl, Rgb8};
///
/// let navy = Hsl::new(222.0, 47.0, 11.0);
/// assert_eq!(navy.to_rgb8(), Rgb8::new(15, 23, 41));
///
/// let parsed = Hsl::parse("hsl(210 40% 98%)").unwrap();
/// assert_eq!(parsed, Hsl::new(210.0, 40.0, 98.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation, 0.0 to 100.0.
    pub s: f64,
    /// Lightness, 0.0 to 100.0.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse a design-token value such as `205 100% 45%` or
    /// `hsl(205 100% 45%)`.
    ///
    /// Returns `None` when the value does not have that shape. See
    /// [`crate::parse`] for the exact grammar.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        crate::parse::parse_hsl(value)
    }

    /// Convert to 8-bit sRGB using the CSS Color 4 `hslToRgb` algorithm.
    ///
    /// Each channel is `l - a * clamp(min(k - 3, 9 - k), -1, 1)` with
    /// `k = (n + h / 30) mod 12` and `a = s * min(l, 1 - l)`, evaluated at
    /// `n = 0` (red), `8` (green) and `4` (blue), then scaled to 255 and
    /// rounded half away from zero.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| {
            let k = (n + self.h / 30.0) % 12.0;
            let factor = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            to_u8(l - a * factor)
        };

        Rgb8::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// WCAG relative luminance of this color after 8-bit quantization.
    #[inline]
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        self.to_rgb8().relative_luminance()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

// ─── Rgb8 ────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compute the relative luminance per WCAG 2.x.
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    ///
    /// Channels are linearized with the WCAG 2.0 transfer function (knee at
    /// 0.03928). Returns a value in [0.0, 1.0] where 0 is black and 1 is
    /// white.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r = wcag_linear(self.r);
        let g = wcag_linear(self.g);
        let b = wcag_linear(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Transfer Functions ──────────────────────────────────────────────────────

/// Linearize one 8-bit sRGB channel (remove gamma) the way WCAG defines it.
///
/// WCAG 2.0 quotes 0.03928 as the knee rather than the 0.04045 of the sRGB
/// standard. No 8-bit value falls between the two, so the choice never
/// changes a result, but the published constant is kept.
#[inline]
#[must_use]
pub fn wcag_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Scale a unit value to 0–255, rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (255.0 * v).round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── HSL → RGB ───────────────────────────────────────────────────

    #[test]
    fn zero_lightness_is_black() {
        for h in [0.0, 45.0, 120.0, 359.0] {
            for s in [0.0, 50.0, 100.0] {
                assert_eq!(Hsl::new(h, s, 0.0).to_rgb8(), Rgb8::BLACK, "h={h} s={s}");
            }
        }
    }

    #[test]
    fn full_lightness_is_white() {
        for h in [0.0, 45.0, 120.0, 359.0] {
            for s in [0.0, 50.0, 100.0] {
                assert_eq!(Hsl::new(h, s, 100.0).to_rgb8(), Rgb8::WHITE, "h={h} s={s}");
            }
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        for h in (0..360).step_by(15) {
            for l in (0..=100).step_by(5) {
                let Rgb8 { r, g, b } = Hsl::new(f64::from(h), 0.0, f64::from(l)).to_rgb8();
                assert!(r == g && g == b, "h={h} l={l}: ({r}, {g}, {b})");
            }
        }
    }

    #[test]
    fn primaries_and_secondaries() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb8(), Rgb8::new(255, 0, 0));
        assert_eq!(Hsl::new(60.0, 100.0, 50.0).to_rgb8(), Rgb8::new(255, 255, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb8(), Rgb8::new(0, 255, 0));
        assert_eq!(Hsl::new(180.0, 100.0, 50.0).to_rgb8(), Rgb8::new(0, 255, 255));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb8(), Rgb8::new(0, 0, 255));
        assert_eq!(Hsl::new(300.0, 100.0, 50.0).to_rgb8(), Rgb8::new(255, 0, 255));
    }

    #[test]
    fn mid_gray_rounds_half_up() {
        // 255 * 0.5 = 127.5 → 128
        assert_eq!(Hsl::new(0.0, 0.0, 50.0).to_rgb8(), Rgb8::new(128, 128, 128));
    }

    #[test]
    fn design_token_values() {
        // Values as a browser renders them.
        assert_eq!(Hsl::new(222.0, 47.0, 11.0).to_rgb8(), Rgb8::new(15, 23, 41));
        assert_eq!(Hsl::new(210.0, 40.0, 98.0).to_rgb8(), Rgb8::new(248, 250, 252));
        assert_eq!(Hsl::new(205.0, 100.0, 12.0).to_rgb8(), Rgb8::new(0, 36, 61));
    }

    #[test]
    fn lightness_sits_between_min_and_max_channel() {
        for h in (0..360).step_by(7) {
            for s in (0..=100).step_by(10) {
                for l in (0..=100).step_by(10) {
                    let Rgb8 { r, g, b } =
                        Hsl::new(f64::from(h), f64::from(s), f64::from(l)).to_rgb8();
                    let mid = to_u8(f64::from(l) / 100.0);
                    let lo = r.min(g).min(b);
                    let hi = r.max(g).max(b);
                    assert!(lo <= mid && mid <= hi, "h={h} s={s} l={l}: ({r}, {g}, {b})");
                }
            }
        }
    }

    #[test]
    fn out_of_range_channels_clamp() {
        // s = 150%: red overshoots to 1.25, green and blue undershoot to -0.25.
        assert_eq!(Hsl::new(0.0, 150.0, 50.0).to_rgb8(), Rgb8::new(255, 0, 0));
        assert_eq!(Hsl::new(0.0, 0.0, 120.0).to_rgb8(), Rgb8::WHITE);
    }

    #[test]
    fn hue_wraps_past_360() {
        assert_eq!(
            Hsl::new(480.0, 100.0, 50.0).to_rgb8(),
            Hsl::new(120.0, 100.0, 50.0).to_rgb8()
        );
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = Rgb8::BLACK.relative_luminance();
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = Rgb8::WHITE.relative_luminance();
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_channels_match_weights() {
        assert!(approx_eq(Rgb8::new(255, 0, 0).relative_luminance(), 0.2126, 1e-9));
        assert!(approx_eq(Rgb8::new(0, 255, 0).relative_luminance(), 0.7152, 1e-9));
        assert!(approx_eq(Rgb8::new(0, 0, 255).relative_luminance(), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 128/255 linearizes to ~0.2158.
        let lum = Rgb8::new(128, 128, 128).relative_luminance();
        assert!(approx_eq(lum, 0.2158, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn linear_segment_below_knee() {
        // 10/255 ≈ 0.0392 sits on the linear segment.
        assert!(approx_eq(wcag_linear(10), 10.0 / 255.0 / 12.92, 1e-15));
        // 11/255 ≈ 0.0431 is on the power-law segment.
        let c: f64 = 11.0 / 255.0;
        assert!(approx_eq(wcag_linear(11), ((c + 0.055) / 1.055).powf(2.4), 1e-15));
    }

    #[test]
    fn luminance_is_monotonic_in_gray_level() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let lum = Rgb8::new(v, v, v).relative_luminance();
            assert!(lum > prev, "luminance not increasing at {v}");
            prev = lum;
        }
    }

    #[test]
    fn hsl_luminance_goes_through_rgb8() {
        let hsl = Hsl::new(222.0, 47.0, 11.0);
        assert!(approx_eq(
            hsl.relative_luminance(),
            hsl.to_rgb8().relative_luminance(),
            f64::EPSILON
        ));
    }

    // ── Display ─────────────────────────────────────────────────────

    #[test]
    fn display_formats() {
        assert_eq!(Hsl::new(205.0, 100.0, 12.5).to_string(), "205 100% 12.5%");
        assert_eq!(Rgb8::new(15, 23, 41).to_string(), "#0f1729");
    }
}
