//! Column-accurate ANSI coloring of rendered ASCII art.
//!
//! Character positions in the original text are mapped to column ranges
//! in the rendered output through the per-character glyph widths, so a
//! substring of the input can be wrapped in color codes at the right
//! columns of every art row.

/// ANSI escape sequence that resets terminal styling.
pub const RESET: &str = "\x1b[0m";

/// Wrap the matching column spans of `art_lines` in ANSI color codes.
///
/// `text` is the original input the art was rendered from, `widths` its
/// per-character column widths. An empty `substring` colors the whole
/// text; otherwise every character covered by at least one literal
/// occurrence of `substring` is colored, so overlapping and adjacent
/// matches merge into one contiguous span. When `art_lines`, `widths`, or
/// `text` is empty the art is returned unchanged.
pub fn apply_color(
    art_lines: &[String],
    text: &str,
    substring: &str,
    color_code: &str,
    widths: &[usize],
) -> Vec<String> {
    if art_lines.is_empty() || widths.is_empty() || text.is_empty() {
        return art_lines.to_vec();
    }

    let positions = find_positions(text, substring);
    art_lines
        .iter()
        .map(|line| color_line(line, &positions, widths, color_code))
        .collect()
}

/// Colorize a single art row.
///
/// Walks `widths` with a running column offset, keeping an inside/outside
/// run state: the color code is emitted when a marked run opens and the
/// reset when it closes. Column spans are clipped to the actual row
/// length, and a row shorter than the widths imply simply stops early;
/// any trailing row content beyond the widths is copied uncolored.
fn color_line(line: &str, positions: &[bool], widths: &[usize], color_code: &str) -> String {
    let cols: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + color_code.len() + RESET.len());
    let mut offset = 0;
    let mut inside = false;

    for (idx, &width) in widths.iter().enumerate() {
        if offset >= cols.len() {
            break;
        }
        let end = (offset + width).min(cols.len());

        if marked(positions, idx) && !inside {
            out.push_str(color_code);
            inside = true;
        }
        out.extend(&cols[offset..end]);
        if inside && !marked(positions, idx + 1) {
            out.push_str(RESET);
            inside = false;
        }

        offset = end;
    }

    if offset < cols.len() {
        out.extend(&cols[offset..]);
    }
    out
}

fn marked(positions: &[bool], idx: usize) -> bool {
    positions.get(idx).copied().unwrap_or(false)
}

/// Mark which character positions of `text` fall inside a match.
///
/// Every start offset is probed, so positions covered by more than one
/// occurrence window stay marked: the result is the union of all literal
/// matches, not a non-overlapping segmentation.
fn find_positions(text: &str, substring: &str) -> Vec<bool> {
    let chars: Vec<char> = text.chars().collect();
    let mut positions = vec![false; chars.len()];

    if substring.is_empty() {
        positions.fill(true);
        return positions;
    }

    let needle: Vec<char> = substring.chars().collect();
    if needle.len() > chars.len() {
        return positions;
    }

    for start in 0..=chars.len() - needle.len() {
        if chars[start..start + needle.len()] == needle[..] {
            for pos in &mut positions[start..start + needle.len()] {
                *pos = true;
            }
        }
    }
    positions
}
