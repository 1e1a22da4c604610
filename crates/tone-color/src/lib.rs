// SPDX-License-Identifier: MIT
//
// tone-color — color math for the tone contrast auditor.
//
// Design tokens in the audited stylesheets are written as bare HSL
// triples (`205 100% 12%`), the form shadcn-style themes feed into
// `hsl(var(--token))`. This crate turns those strings into numbers the
// WCAG formulas can consume:
//
//   "h s% l%" → Hsl → Rgb8 (CSS Color 4, 8-bit) → relative luminance
//
// Everything here is pure and allocation-free apart from parsing. The
// contrast ratio itself and the AA/AAA thresholds live in tone-tokens,
// next to the report that uses them.

pub mod color;
pub mod parse;

pub use color::{Hsl, Rgb8};
