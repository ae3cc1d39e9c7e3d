use std::fmt;
use std::ops::Add;

use crate::foundation::error::{TabmlError, TabmlResult};

/// Matrix height in pixels.
pub const GRID_ROWS: usize = 7;
/// Matrix width in pixels.
pub const GRID_COLS: usize = 7;
/// Side length of one glyph cell.
pub const GLYPH_SIZE: usize = 5;

/// One displayed frame: a 7x7 matrix of on/off pixels.
///
/// Pixels are binary, never partial intensity; the display color is a
/// property of the whole container, not of a grid. Transforms return new
/// grids and never mutate their input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[bool; GRID_COLS]; GRID_ROWS],
}

impl Grid {
    /// All pixels off.
    pub fn empty() -> Self {
        Self {
            cells: [[false; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Pixel state at (`row`, `col`). Panics when either index is >= 7.
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, on: bool) {
        self.cells[row][col] = on;
    }

    /// Number of on pixels.
    pub fn count_on(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&on| on).count())
            .sum()
    }

    /// Translate the grid by `shift`, clipping pixels that leave the 7x7
    /// bounds. Clipped content is gone; there is no wraparound.
    ///
    /// A zero shift returns a grid equal to the input, and shifting twice
    /// equals shifting once by the summed offsets.
    pub fn shifted(&self, shift: Shift) -> Grid {
        let mut out = Grid::empty();
        for (r, row) in out.cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let sr = r as i32 - shift.d_row;
                let sc = c as i32 - shift.d_col;
                if (0..GRID_ROWS as i32).contains(&sr) && (0..GRID_COLS as i32).contains(&sc) {
                    *cell = self.cells[sr as usize][sc as usize];
                }
            }
        }
        out
    }
}

/// Renders the row-by-row `##`/`..` preview used for diagnostics.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for &on in row {
                f.write_str(if on { "##" } else { ".." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid [")?;
        for row in &self.cells {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "    {line}")?;
        }
        write!(f, "]")
    }
}

/// Signed whole-grid translation. Positive `d_row` moves content down,
/// positive `d_col` moves it right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Shift {
    #[serde(default)]
    pub d_row: i32,
    #[serde(default)]
    pub d_col: i32,
}

impl Shift {
    pub const ZERO: Shift = Shift { d_row: 0, d_col: 0 };

    pub fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Build a shift from the four non-negative directional distances.
    pub fn from_directions(up: u32, down: u32, left: u32, right: u32) -> Self {
        Self {
            d_row: down as i32 - up as i32,
            d_col: right as i32 - left as i32,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Add for Shift {
    type Output = Shift;

    fn add(self, rhs: Shift) -> Shift {
        Shift {
            d_row: self.d_row + rhs.d_row,
            d_col: self.d_col + rhs.d_col,
        }
    }
}

/// Display color for on pixels. One color applies uniformly to every on
/// pixel across every frame of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default display color, also the decoder fallback when a container
    /// has no on pixel to infer from.
    pub const CYAN: Rgb = Rgb {
        r: 0,
        g: 0xFF,
        b: 0xFF,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-hex-digit color string; the leading `#` is optional.
    pub fn from_hex(s: &str) -> TabmlResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(TabmlError::invalid_color(format!(
                "\"{s}\" is not a 6-hex-digit color like \"#00FFFF\""
            )));
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| {
                TabmlError::invalid_color(format!(
                    "\"{s}\" is not a 6-hex-digit color like \"#00FFFF\""
                ))
            })
        };

        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
