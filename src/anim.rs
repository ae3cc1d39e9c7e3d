//! Frame sequence generation: one of five animation modes turns a text
//! string into an ordered list of 7x7 grids.
//!
//! Scrolling modes first lay the glyphs out on a strip along the scroll
//! axis, then slide a 5-pixel window across it from fully off-screen on
//! one side to fully off-screen on the other. Each window position
//! becomes one frame, with the window content centered in the grid.

use crate::font;
use crate::foundation::core::{GLYPH_SIZE, Grid};
use crate::render;

/// Blank columns (or rows) between glyphs when scrolling.
pub const DEFAULT_GAP: usize = 1;

/// How a text string becomes a frame sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One frame per character.
    #[default]
    Static,
    /// Marquee: text enters from the right edge and exits the left.
    ScrollLeft,
    /// [`Mode::ScrollLeft`] played backwards; text enters from the left.
    ScrollRight,
    /// Text enters from the bottom edge and exits the top.
    ScrollUp,
    /// [`Mode::ScrollUp`] played backwards; text enters from the top.
    ScrollDown,
}

impl Mode {
    /// Frame rate used when the caller does not pick one. Static character
    /// swaps read best slower than scrolling.
    pub fn default_fps(self) -> u8 {
        match self {
            Mode::Static => 5,
            _ => 10,
        }
    }
}

/// Generate the frame sequence for `text` in the given mode. Empty text
/// yields an empty sequence in every mode; rejecting that is the caller's
/// business.
pub fn frames_for(text: &str, mode: Mode, gap: usize) -> Vec<Grid> {
    match mode {
        Mode::Static => static_frames(text),
        Mode::ScrollLeft => scroll_left(text, gap),
        Mode::ScrollRight => scroll_right(text, gap),
        Mode::ScrollUp => scroll_up(text, gap),
        Mode::ScrollDown => scroll_down(text, gap),
    }
}

/// One frame per input character.
pub fn static_frames(text: &str) -> Vec<Grid> {
    text.chars().map(render::render_char).collect()
}

/// Scroll `text` right-to-left with `gap` blank columns between glyphs.
///
/// For `L` characters the strip is `5*L + gap*(L-1)` columns wide and the
/// sequence has `strip_width + 6` frames.
pub fn scroll_left(text: &str, gap: usize) -> Vec<Grid> {
    slide(&build_strip(text, gap, Axis::Horizontal), Axis::Horizontal)
}

/// Scroll `text` left-to-right: the reverse of [`scroll_left`].
pub fn scroll_right(text: &str, gap: usize) -> Vec<Grid> {
    let mut frames = scroll_left(text, gap);
    frames.reverse();
    frames
}

/// Scroll `text` bottom-to-top with `gap` blank rows between glyphs.
pub fn scroll_up(text: &str, gap: usize) -> Vec<Grid> {
    slide(&build_strip(text, gap, Axis::Vertical), Axis::Vertical)
}

/// Scroll `text` top-to-bottom: the reverse of [`scroll_up`].
pub fn scroll_down(text: &str, gap: usize) -> Vec<Grid> {
    let mut frames = scroll_up(text, gap);
    frames.reverse();
    frames
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    /// Glyphs side by side; strip lanes are columns.
    Horizontal,
    /// Glyphs stacked; strip lanes are rows.
    Vertical,
}

/// Lay the glyphs out along the scroll axis. Each returned lane is one
/// 5-pixel slice perpendicular to the axis: a column of the strip when
/// scrolling horizontally, a row when scrolling vertically.
fn build_strip(text: &str, gap: usize, axis: Axis) -> Vec<[bool; GLYPH_SIZE]> {
    let mut strip = Vec::new();
    for (index, ch) in text.chars().enumerate() {
        if index > 0 {
            for _ in 0..gap {
                strip.push([false; GLYPH_SIZE]);
            }
        }
        let pattern = font::glyph(ch).unwrap_or(&font::FALLBACK);
        for i in 0..GLYPH_SIZE {
            let mut lane = [false; GLYPH_SIZE];
            for (j, cell) in lane.iter_mut().enumerate() {
                let (row, col) = match axis {
                    Axis::Horizontal => (j, i),
                    Axis::Vertical => (i, j),
                };
                *cell = pattern[row].as_bytes()[col] == b'#';
            }
            strip.push(lane);
        }
    }
    strip
}

/// Slide a 5-lane window across the strip. Window start offsets run from
/// `-5` (fully before the strip) to `strip.len()` (fully past it)
/// inclusive; lanes outside the strip are off.
fn slide(strip: &[[bool; GLYPH_SIZE]], axis: Axis) -> Vec<Grid> {
    if strip.is_empty() {
        return Vec::new();
    }

    let len = strip.len() as i32;
    let mut frames = Vec::with_capacity(strip.len() + GLYPH_SIZE + 1);
    for offset in -(GLYPH_SIZE as i32)..=len {
        let mut grid = Grid::empty();
        for w in 0..GLYPH_SIZE {
            let src = offset + w as i32;
            if !(0..len).contains(&src) {
                continue;
            }
            for (j, &on) in strip[src as usize].iter().enumerate() {
                let (row, col) = match axis {
                    Axis::Horizontal => (j + 1, w + 1),
                    Axis::Vertical => (w + 1, j + 1),
                };
                grid.set(row, col, on);
            }
        }
        frames.push(grid);
    }
    frames
}
