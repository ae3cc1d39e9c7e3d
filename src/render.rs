//! Glyph and pattern rendering onto the 7x7 grid.

use crate::font::{self, GlyphPattern};
use crate::foundation::core::{GLYPH_SIZE, GRID_COLS, GRID_ROWS, Grid};

// The 5x5 glyph cell sits at this offset, leaving a 1-pixel off border on
// all four sides of the 7x7 grid.
const GLYPH_ORIGIN: usize = 1;

/// Render one character as a 7x7 grid, the 5x5 glyph centered with a
/// 1-pixel border. Lookup is case-insensitive; characters without a glyph
/// render as `?`. This substitution is defined behavior, not a failure.
pub fn render_char(c: char) -> Grid {
    render_glyph(font::glyph(c).unwrap_or(&font::FALLBACK))
}

/// Render a 5x5 glyph pattern centered on an otherwise-off 7x7 grid.
pub fn render_glyph(pattern: &GlyphPattern) -> Grid {
    let mut grid = Grid::empty();
    for (r, row) in pattern.iter().enumerate() {
        for (c, byte) in row.bytes().take(GLYPH_SIZE).enumerate() {
            grid.set(GLYPH_ORIGIN + r, GLYPH_ORIGIN + c, byte == b'#');
        }
    }
    grid
}

/// Map a raw pattern straight onto the full 7x7 grid with no centering,
/// for custom non-glyph frames. `#` is on, anything else off; lines past
/// the seventh and columns past the seventh are ignored.
pub fn render_pattern<S: AsRef<str>>(lines: &[S]) -> Grid {
    let mut grid = Grid::empty();
    for (r, line) in lines.iter().take(GRID_ROWS).enumerate() {
        for (c, byte) in line.as_ref().bytes().take(GRID_COLS).enumerate() {
            grid.set(r, c, byte == b'#');
        }
    }
    grid
}
