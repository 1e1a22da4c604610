//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tone_tokens::{CheckConfig, RolePair, Theme, Thresholds};

/// Stylesheet read when `--stylesheet` is not given, relative to the
/// working directory.
pub const DEFAULT_STYLESHEET: &str = "src/index.css";

/// Check the HSL design tokens of a stylesheet against WCAG AA/AAA contrast.
#[derive(Debug, Parser)]
#[command(name = "tone", version)]
pub struct Args {
    /// Stylesheet holding the token blocks.
    #[arg(short = 's', long = "stylesheet", value_name = "PATH", default_value = DEFAULT_STYLESHEET)]
    pub stylesheet: PathBuf,

    /// Which theme layout the stylesheet uses. Ignored when --theme is given.
    #[arg(long = "preset", value_enum, default_value_t = Preset::DarkDefault)]
    pub preset: Preset,

    /// Theme to audit, as SELECTOR=LABEL (split at the last `=`). Repeat to
    /// audit several, in order.
    #[arg(long = "theme", value_name = "SELECTOR=LABEL", value_parser = parse_theme)]
    pub themes: Vec<Theme>,

    /// Role pair to check, as NAME:NAME without the `--` prefix. Repeat to
    /// replace the default pair list.
    #[arg(long = "pair", value_name = "A:B", value_parser = parse_pair, allow_hyphen_values = true)]
    pub pairs: Vec<RolePair>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Themes to audit: the explicit `--theme` list, else the preset's.
    #[must_use]
    pub fn themes(&self) -> Vec<Theme> {
        if self.themes.is_empty() {
            self.preset.themes()
        } else {
            self.themes.clone()
        }
    }

    /// Pairs and thresholds: the explicit `--pair` list, else the defaults.
    #[must_use]
    pub fn check_config(&self) -> CheckConfig {
        if self.pairs.is_empty() {
            CheckConfig::default()
        } else {
            CheckConfig {
                pairs: self.pairs.clone(),
                thresholds: Thresholds::WCAG,
            }
        }
    }
}

/// The two layouts shadcn-style stylesheets come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// `:root` is the dark theme, `.light` overrides it.
    DarkDefault,
    /// `:root` is the light theme, `.dark` overrides it.
    LightDefault,
}

impl Preset {
    #[must_use]
    pub fn themes(self) -> Vec<Theme> {
        match self {
            Self::DarkDefault => vec![
                Theme::new(":root", "dark (default)"),
                Theme::new(".light", "light"),
            ],
            Self::LightDefault => vec![
                Theme::new(":root", "root (light)"),
                Theme::new(".dark", "dark"),
            ],
        }
    }
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    let (selector, label) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SELECTOR=LABEL, got `{s}`"))?;
    let (selector, label) = (selector.trim(), label.trim());
    if selector.is_empty() || label.is_empty() {
        return Err(format!("selector and label must both be non-empty in `{s}`"));
    }
    // `[data-theme=dim]` alone splits inside the brackets.
    if selector.matches('[').count() != selector.matches(']').count() {
        return Err(format!(
            "`{s}` has no label outside its attribute selector; expected SELECTOR=LABEL"
        ));
    }
    Ok(Theme::new(selector, label))
}

fn parse_pair(s: &str) -> Result<RolePair, String> {
    let (first, second) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:NAME, got `{s}`"))?;
    Ok(RolePair::new(token_name(first)?, token_name(second)?))
}

fn token_name(raw: &str) -> Result<&str, String> {
    let name = raw.trim();
    let name = name.strip_prefix("--").unwrap_or(name);
    if name.is_empty() {
        return Err("token name must not be empty".to_owned());
    }
    if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(format!(
            "token name `{name}` may only contain ASCII letters, digits and `-`"
        ));
    }
    Ok(name)
}
