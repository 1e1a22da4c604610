// SPDX-License-Identifier: MIT
//
// tone — WCAG contrast auditor for stylesheet design tokens.
//
// This is the binary that wires the crates together:
//
//   tone-color  → HSL parsing, HSL → sRGB-8, relative luminance
//   tone-tokens → theme blocks, custom properties, contrast report
//
// One run reads the stylesheet once, then walks a fixed list of role
// pairs for each theme:
//
//   file → extract_block → VarMap → Hsl → Rgb8 → luminance → ratio → line
//
// The report goes to stdout and nothing else does; logs go to stderr.
// A stylesheet that cannot be read is the only fatal error, and it is
// raised before a single report byte is written.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum ToneError {
    #[error("cannot read stylesheet {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report: {0}")]
    Write(#[from] io::Error),
}

// ─── Run ────────────────────────────────────────────────────────────────────

fn read_stylesheet(path: &Path) -> Result<String, ToneError> {
    let css = fs::read_to_string(path).map_err(|source| ToneError::Read {
        path: path.to_owned(),
        source,
    })?;
    info!(path = %path.display(), bytes = css.len(), "read stylesheet");
    Ok(css)
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), ToneError> {
    let css = read_stylesheet(&args.stylesheet)?;
    let themes = args.themes();
    let config = args.check_config();
    debug!(themes = themes.len(), pairs = config.pairs.len(), "starting audit");

    for report in tone_tokens::audit(&css, &themes, &config) {
        write!(out, "{report}")?;
        info!(
            theme = %report.label,
            passing = report.passing(),
            failing = report.failing(),
            skipped = report.skipped(),
            "theme checked"
        );
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tone: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
