use thiserror::Error;

use crate::glyphs::{FIRST_CHAR, GLYPH_HEIGHT, GlyphTable, LAST_CHAR};

/// Errors raised while rendering text as ASCII art.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid character {ch:?} (code {code}), must be printable ASCII (32-126)")]
    InvalidCharacter { ch: char, code: u32 },
    #[error("banner is empty")]
    EmptyTable,
    #[error("character '{ch}' (code {code}) not found in banner")]
    MissingGlyph { ch: char, code: u32 },
    #[error("banner entry for '{ch}' has {rows} rows, expected {expected}")]
    CorruptGlyph {
        ch: char,
        rows: usize,
        expected: usize,
    },
}

/// Render `text` as block-letter ASCII art using the glyphs in `table`.
///
/// Newlines in `text` are logical line separators, not renderable
/// characters; every other character must be printable ASCII (32-126) and
/// the whole input is validated before anything is rendered. Each
/// non-empty logical line becomes a block of [`GLYPH_HEIGHT`] rows, and an
/// empty logical line (from consecutive newlines) becomes a single empty
/// output row. A trailing newline does not produce an extra block.
///
/// The returned string joins all output rows with `\n` and carries no
/// trailing newline. Empty input renders to an empty string.
pub fn render(text: &str, table: &GlyphTable) -> Result<String, RenderError> {
    validate_input(text)?;

    if text.is_empty() {
        return Ok(String::new());
    }

    let mut parts: Vec<&str> = text.split('\n').collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }

    if table.is_empty() {
        return Err(RenderError::EmptyTable);
    }

    let mut rows: Vec<String> = Vec::new();
    for line in parts {
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }
        render_line(line, table, &mut rows)?;
    }
    Ok(rows.join("\n"))
}

/// Append the [`GLYPH_HEIGHT`] rows for one logical line to `rows`.
///
/// Glyphs are resolved for the whole line before any row is assembled, so
/// the first unusable character in left-to-right order decides the error.
fn render_line(
    line: &str,
    table: &GlyphTable,
    rows: &mut Vec<String>,
) -> Result<(), RenderError> {
    let mut glyphs = Vec::new();
    for ch in line.chars() {
        let glyph = table.get(ch).ok_or(RenderError::MissingGlyph {
            ch,
            code: ch as u32,
        })?;
        if glyph.rows().len() != GLYPH_HEIGHT {
            return Err(RenderError::CorruptGlyph {
                ch,
                rows: glyph.rows().len(),
                expected: GLYPH_HEIGHT,
            });
        }
        glyphs.push(glyph);
    }

    for row in 0..GLYPH_HEIGHT {
        let mut rendered = String::new();
        for glyph in &glyphs {
            rendered.push_str(&glyph.rows()[row]);
        }
        rows.push(rendered);
    }
    Ok(())
}

fn validate_input(text: &str) -> Result<(), RenderError> {
    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        if !(FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            return Err(RenderError::InvalidCharacter {
                ch,
                code: ch as u32,
            });
        }
    }
    Ok(())
}
