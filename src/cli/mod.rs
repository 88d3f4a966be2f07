//! Command-line interface for the `bannerize` binary.
//!
//! This module owns the clap definitions, the plain/color mode dispatch,
//! and the mapping from library errors to exit codes. The core library
//! only returns values or errors; all printing happens here.

use clap::Parser;
use thiserror::Error;

use bannerize::{BannerError, BannerStyle, ColorError, Rgb, RenderError, apply_color, render};

pub mod args;

/// Exit code for usage and argument errors, including unknown banner names.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for banner loading failures.
pub const EXIT_BANNER: i32 = 2;
/// Exit code for rendering failures.
pub const EXIT_RENDER: i32 = 3;
/// Exit code for color specification failures.
pub const EXIT_COLOR: i32 = 4;

/// Parsed CLI entrypoint for the `bannerize` binary.
#[derive(Parser, Debug)]
#[command(
    name = "bannerize",
    version,
    about = "Render text as large block-letter ASCII art",
    after_help = "EXAMPLES:\n    bannerize \"Hello\\nWorld\"\n    bannerize \"Hello\" shadow\n    bannerize --color=orange \"Hello\"\n    bannerize --color=\"rgb(255,99,0)\" llo \"Hello\" thinkertoy"
)]
pub struct Cli {
    /// Color the output: a named color, #RRGGBB, or rgb(R,G,B)
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Positional arguments: TEXT [BANNER], or with --color
    /// [SUBSTRING] TEXT [BANNER]
    #[arg(value_name = "ARG", required = true, num_args = 1..=3)]
    pub args: Vec<String>,
}

/// Errors surfaced by the binary, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("Error: invalid banner name {name:?}\nValid options: {valid}")]
    UnknownBanner { name: String, valid: String },
    #[error("Error loading banner file: {0}")]
    Banner(#[from] BannerError),
    #[error("Error rendering text: {0}")]
    Render(#[from] RenderError),
    #[error("Error: {0}")]
    Color(#[from] ColorError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::UnknownBanner { .. } => EXIT_USAGE,
            CliError::Banner(_) => EXIT_BANNER,
            CliError::Render(_) => EXIT_RENDER,
            CliError::Color(_) => EXIT_COLOR,
        }
    }
}

/// Execute the requested mode.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.color {
        Some(spec) => run_color(&spec, &cli.args),
        None => run_plain(&cli.args),
    }
}

fn run_plain(positional: &[String]) -> Result<(), CliError> {
    let request = args::resolve_plain(positional)?;
    let table = resolve_banner(&request.banner)?.table()?;
    let art = render(&request.text, &table)?;
    if !request.text.is_empty() {
        println!("{art}");
    }
    Ok(())
}

/// Color mode renders and colorizes each logical line separately, so
/// glyph widths and substring positions are computed per line.
fn run_color(spec: &str, positional: &[String]) -> Result<(), CliError> {
    let request = args::resolve_color(positional)?;
    let rgb: Rgb = spec.parse()?;
    let color_code = rgb.ansi();
    let table = resolve_banner(&request.banner)?.table()?;

    let lines: Vec<&str> = request.text.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            // keep vertical separation, but no blank line for a trailing newline
            if i < lines.len() - 1 {
                println!();
            }
            continue;
        }

        let art = render(line, &table)?;
        let art_lines: Vec<String> = art.split('\n').map(str::to_string).collect();
        let widths = table.char_widths(line);
        let colored = apply_color(&art_lines, line, &request.substring, &color_code, &widths);
        for row in colored {
            println!("{row}");
        }
    }
    Ok(())
}

fn resolve_banner(name: &str) -> Result<BannerStyle, CliError> {
    BannerStyle::from_name(name).ok_or_else(|| CliError::UnknownBanner {
        name: name.to_string(),
        valid: BannerStyle::ALL.map(|style| style.name()).join(", "),
    })
}
