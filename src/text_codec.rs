//! The line-oriented text format: one line per row, one character per
//! column, `x` punched and `-` unpunched. This is the human-editable
//! interchange format and the payload of the export artifact.

use crate::design::Design;
use crate::error::{EditorError, EditorResult};
use crate::stitch::Stitch;

/// Encode a design as newline-joined rows with no trailing newline.
pub fn encode(design: &Design) -> String {
    let mut out = String::with_capacity(design.len() + design.rows());
    for row in 0..design.rows() {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..design.columns() {
            // stitch_at is total over the grid range by the length invariant
            let stitch = design.stitch_at(row, col).unwrap_or(Stitch::Unpunched);
            out.push(stitch.to_char());
        }
    }
    out
}

/// Decode the text format permissively.
///
/// The column count comes from the first line; later lines are read per
/// cell by index, so short lines pad with unpunched and long lines are
/// truncated. Any character other than `x` is unpunched. The only inputs
/// rejected are those with no usable first row.
pub fn decode(text: &str) -> EditorResult<Design> {
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
    let columns = match lines.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(EditorError::EmptyInput),
    };
    let rows = lines.len();

    let mut stitches = Vec::with_capacity(columns * rows);
    for line in &lines {
        for col in 0..columns {
            let stitch = line
                .get(col)
                .copied()
                .map(Stitch::from_char)
                .unwrap_or(Stitch::Unpunched);
            stitches.push(stitch);
        }
    }
    Design::from_stitches(stitches, columns, rows)
}
