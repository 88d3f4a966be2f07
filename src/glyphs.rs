use thiserror::Error;

/// First character a banner covers (space).
pub const FIRST_CHAR: char = ' ';
/// Last character a banner covers (tilde).
pub const LAST_CHAR: char = '~';
/// Number of characters a complete banner defines.
pub const CHAR_COUNT: usize = 95;
/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Rows per character block in a banner file: 8 glyph rows + 1 separator.
const LINES_PER_CHAR: usize = GLYPH_HEIGHT + 1;
/// Total line count of a well-formed banner file.
const EXPECTED_LINES: usize = CHAR_COUNT * LINES_PER_CHAR;

/// Errors raised while building a [`GlyphTable`] from banner data.
#[derive(Debug, Error)]
pub enum BannerError {
    #[error("empty banner file")]
    Empty,
    #[error("invalid format: expected {expected} lines, got {actual}")]
    LineCount { expected: usize, actual: usize },
    #[error("incomplete banner: got {actual} chars, expected {expected}")]
    Incomplete { expected: usize, actual: usize },
    #[error("failed to read banner file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-height block-art representation of one character.
///
/// All rows of a well-formed glyph have the same length; that length is
/// the glyph's column width and may differ between glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Glyph rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Column width, taken from the first row (0 for a rowless glyph).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }
}

/// Maps printable ASCII characters (32-126) to their glyphs.
///
/// Glyphs live in a direct-indexed array offset by [`FIRST_CHAR`], so the
/// hot rendering path does plain slot lookups instead of hashing. A table
/// built with [`GlyphTable::from_lines`] always holds all 95 characters;
/// one assembled with [`GlyphTable::insert`] may be partial, in which case
/// missing characters surface as render-time errors.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: Vec<Option<Glyph>>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphTable {
    /// Create an empty table with no glyphs.
    pub fn new() -> Self {
        Self {
            glyphs: vec![None; CHAR_COUNT],
        }
    }

    /// Build a complete table from the raw lines of a banner file.
    ///
    /// The format is strict: a leading separator line, then one block of
    /// [`GLYPH_HEIGHT`] rows per character in ascending code-point order,
    /// blocks separated by single separator lines, 855 lines total. Inputs
    /// with any other line count are rejected outright, never truncated.
    pub fn from_lines(lines: &[String]) -> Result<Self, BannerError> {
        if lines.is_empty() {
            return Err(BannerError::Empty);
        }
        if lines.len() != EXPECTED_LINES {
            return Err(BannerError::LineCount {
                expected: EXPECTED_LINES,
                actual: lines.len(),
            });
        }

        let mut table = Self::new();
        let mut slot = 0;
        // The first line of the file is a leading separator.
        let mut i = 1;
        while i + GLYPH_HEIGHT <= lines.len() && slot < CHAR_COUNT {
            table.glyphs[slot] = Some(Glyph::new(lines[i..i + GLYPH_HEIGHT].to_vec()));
            slot += 1;
            i += LINES_PER_CHAR;
        }

        let filled = table.len();
        if filled != CHAR_COUNT {
            return Err(BannerError::Incomplete {
                expected: CHAR_COUNT,
                actual: filled,
            });
        }
        Ok(table)
    }

    fn slot(ch: char) -> Option<usize> {
        if (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            Some(ch as usize - FIRST_CHAR as usize)
        } else {
            None
        }
    }

    /// Insert or replace the glyph for `ch`.
    ///
    /// Characters outside the supported range are ignored.
    pub fn insert(&mut self, ch: char, rows: Vec<String>) {
        if let Some(slot) = Self::slot(ch) {
            self.glyphs[slot] = Some(Glyph::new(rows));
        }
    }

    /// Look up the glyph for `ch`, if present.
    pub fn get(&self, ch: char) -> Option<&Glyph> {
        Self::slot(ch).and_then(|slot| self.glyphs[slot].as_ref())
    }

    /// Number of characters with a glyph.
    pub fn len(&self) -> usize {
        self.glyphs.iter().filter(|glyph| glyph.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.iter().all(|glyph| glyph.is_none())
    }

    /// Column width of every character in `text`, one entry per code
    /// point. Characters without a glyph contribute width 0.
    ///
    /// Call this with the same text that was rendered so the entries line
    /// up with the column spans in the output.
    pub fn char_widths(&self, text: &str) -> Vec<usize> {
        text.chars()
            .map(|ch| self.get(ch).map_or(0, Glyph::width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Well-formed 855-line banner input where every glyph row reads
    /// "<code>x<row>", e.g. "32x0" .. "32x7" for space.
    fn banner_lines() -> Vec<String> {
        let mut lines = vec![String::new()];
        for code in 32..=126u32 {
            for row in 0..GLYPH_HEIGHT {
                lines.push(format!("{code}x{row}"));
            }
            if code != 126 {
                lines.push(String::new());
            }
        }
        lines
    }

    #[test]
    fn builds_full_table_from_valid_input() {
        let table = GlyphTable::from_lines(&banner_lines()).unwrap();
        assert_eq!(table.len(), CHAR_COUNT);
        assert!(!table.is_empty());

        let space = table.get(' ').unwrap();
        assert_eq!(space.rows().len(), GLYPH_HEIGHT);
        assert_eq!(space.rows()[0], "32x0");
        assert_eq!(space.rows()[7], "32x7");

        let tilde = table.get('~').unwrap();
        assert_eq!(tilde.rows()[0], "126x0");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            GlyphTable::from_lines(&[]),
            Err(BannerError::Empty)
        ));
    }

    #[test]
    fn rejects_truncated_input() {
        let mut lines = banner_lines();
        lines.truncate(400);
        match GlyphTable::from_lines(&lines) {
            Err(BannerError::LineCount { expected, actual }) => {
                assert_eq!(expected, 855);
                assert_eq!(actual, 400);
            }
            other => panic!("expected LineCount error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_oversized_input() {
        let mut lines = banner_lines();
        lines.push(String::new());
        assert!(matches!(
            GlyphTable::from_lines(&lines),
            Err(BannerError::LineCount { actual: 856, .. })
        ));
    }

    #[test]
    fn get_returns_none_outside_supported_range() {
        let table = GlyphTable::from_lines(&banner_lines()).unwrap();
        assert!(table.get('\n').is_none());
        assert!(table.get('é').is_none());
    }

    #[test]
    fn insert_ignores_unsupported_characters() {
        let mut table = GlyphTable::new();
        table.insert('\t', vec!["x".to_string()]);
        table.insert('é', vec!["x".to_string()]);
        assert!(table.is_empty());

        table.insert('A', vec!["x".to_string()]);
        assert_eq!(table.len(), 1);
        assert!(table.get('A').is_some());
    }

    #[test]
    fn char_widths_follow_row_zero() {
        let mut table = GlyphTable::new();
        table.insert('a', vec!["####".to_string(); GLYPH_HEIGHT]);
        table.insert('b', vec!["##".to_string(); GLYPH_HEIGHT]);

        assert_eq!(table.char_widths("ab"), vec![4, 2]);
        // unknown characters degrade to width 0 instead of failing
        assert_eq!(table.char_widths("axb"), vec![4, 0, 2]);
        assert_eq!(table.char_widths(""), Vec::<usize>::new());
    }

    #[test]
    fn char_widths_counts_code_points() {
        let table = GlyphTable::new();
        assert_eq!(table.char_widths("héllo").len(), 5);
    }
}
