//! # tone-tokens — design-token extraction and WCAG contrast reporting
//!
//! Reads the custom-property blocks of a stylesheet, resolves semantic
//! color roles to HSL values, and reports how each foreground/background
//! pairing scores against the WCAG AA and AAA thresholds.
//!
//! # Architecture
//!
//! ```text
//! stylesheet text + Theme (selector, label)
//!     │
//!     ▼
//! block.rs:    find `selector { ... }` (first `}` ends it)
//!     │
//!     ▼
//! vars.rs:     collect `--name: value;` into a VarMap
//!     │
//!     ▼
//! report.rs:   for each RolePair, look up, parse, measure
//!     │            (tone-color: Hsl → Rgb8 → luminance)
//!     ▼
//! contrast.rs: ratio + AA/AAA classification
//! ```
//!
//! Nothing is cached between calls. Every failure below the file level is
//! local to one role pair and shows up as a line in the report.

pub mod block;
pub mod contrast;
pub mod report;
pub mod vars;

pub use block::extract_block;
pub use contrast::{Level, Thresholds, contrast_ratio};
pub use report::{
    CheckConfig, DEFAULT_PAIRS, Measurement, Outcome, PairCheck, RolePair, Theme, ThemeReport,
    audit, check_theme,
};
pub use vars::VarMap;
