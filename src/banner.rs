//! Built-in banner styles and banner file loading.
//!
//! The three shipped banners are embedded in the binary at compile time;
//! arbitrary banner files can also be read from disk. Both paths feed the
//! same strict [`GlyphTable`] constructor, so a malformed file is rejected
//! before any rendering is attempted.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::glyphs::{BannerError, GlyphTable};

/// The closed set of banner styles shipped with the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerStyle {
    #[default]
    Standard,
    Shadow,
    Thinkertoy,
}

impl BannerStyle {
    /// All recognized styles, in display order.
    pub const ALL: [BannerStyle; 3] = [
        BannerStyle::Standard,
        BannerStyle::Shadow,
        BannerStyle::Thinkertoy,
    ];

    /// Resolve a user-supplied banner name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(BannerStyle::Standard),
            "shadow" => Some(BannerStyle::Shadow),
            "thinkertoy" => Some(BannerStyle::Thinkertoy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BannerStyle::Standard => "standard",
            BannerStyle::Shadow => "shadow",
            BannerStyle::Thinkertoy => "thinkertoy",
        }
    }

    /// Raw embedded banner data for this style.
    fn asset(&self) -> &'static str {
        match self {
            BannerStyle::Standard => include_str!("../banners/standard.txt"),
            BannerStyle::Shadow => include_str!("../banners/shadow.txt"),
            BannerStyle::Thinkertoy => include_str!("../banners/thinkertoy.txt"),
        }
    }

    /// Parse the embedded banner for this style into a glyph table.
    pub fn table(&self) -> Result<GlyphTable, BannerError> {
        GlyphTable::from_lines(&split_lines(self.asset()))
    }
}

impl fmt::Display for BannerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Load a banner file from disk and parse it into a glyph table.
pub fn load_banner(path: &Path) -> Result<GlyphTable, BannerError> {
    let data = fs::read_to_string(path)?;
    GlyphTable::from_lines(&split_lines(&data))
}

/// Split raw banner data into lines, dropping `\n` and `\r\n` terminators.
fn split_lines(data: &str) -> Vec<String> {
    data.lines().map(str::to_string).collect()
}
