//! Core library for banner-glyph parsing, block-letter ASCII art
//! rendering, and column-accurate ANSI coloring.

mod banner;
mod color;
mod coloring;
mod glyphs;
mod render;

pub use banner::{BannerStyle, load_banner};
pub use color::{ColorError, Rgb};
pub use coloring::{RESET, apply_color};
pub use glyphs::{BannerError, CHAR_COUNT, FIRST_CHAR, GLYPH_HEIGHT, Glyph, GlyphTable, LAST_CHAR};
pub use render::{RenderError, render};

use anyhow::Result;

/// Renders `text` as ASCII art with one of the built-in banner styles.
pub fn render_text(text: &str, style: BannerStyle) -> Result<String> {
    let table = style.table()?;
    Ok(render(text, &table)?)
}
