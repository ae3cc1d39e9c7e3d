use std::path::Path;

use anyhow::Context as _;

use crate::container::{HEADER_LEN, MAGIC};
use crate::foundation::core::{GRID_COLS, GRID_ROWS, Grid, Rgb};
use crate::foundation::error::{TabmlError, TabmlResult};

/// A decoded container: playback metadata plus the boolean frame grids.
#[derive(Clone, Debug)]
pub struct Container {
    /// Stored frame rate in frames per second.
    pub fps: u8,
    /// Stored row count; always 7 in this version.
    pub rows: u8,
    /// Stored column count; always 7 in this version.
    pub cols: u8,
    /// Frames in playback order.
    pub frames: Vec<Grid>,
    /// Display color inferred from the payload; [`Rgb::CYAN`] when no
    /// frame has an on pixel.
    pub color: Rgb,
}

impl Container {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Parse container bytes back into metadata and frames.
///
/// The on-pixel predicate requires the green and blue channels to both be
/// saturated, so only cyan-family display colors are recovered exactly;
/// payloads written with other colors decode with every pixel off. The
/// inferred [`Container::color`] is the first non-zero pixel triple in
/// payload order regardless of that predicate.
///
/// Any structural defect fails with [`TabmlError::MalformedContainer`]:
/// a buffer shorter than the header, a bad magic, dimensions other than
/// 7x7, a payload that is not a whole number of frames, or a payload that
/// disagrees with the header frame count.
pub fn decode(bytes: &[u8]) -> TabmlResult<Container> {
    if bytes.len() < HEADER_LEN {
        return Err(TabmlError::malformed(format!(
            "buffer is {} bytes, shorter than the {HEADER_LEN}-byte header",
            bytes.len()
        )));
    }
    if &bytes[..MAGIC.len()] != MAGIC {
        return Err(TabmlError::malformed("bad magic, expected \"tabml\""));
    }

    let frame_count = bytes[5] as usize;
    let fps = bytes[6];
    let rows = bytes[7];
    let cols = bytes[8];
    if usize::from(rows) != GRID_ROWS || usize::from(cols) != GRID_COLS {
        return Err(TabmlError::malformed(format!(
            "unsupported dimensions {cols}x{rows}, this version reads 7x7 only"
        )));
    }

    let frame_len = usize::from(rows) * usize::from(cols) * 3;
    let payload = &bytes[HEADER_LEN..];
    if !payload.len().is_multiple_of(frame_len) {
        return Err(TabmlError::malformed(format!(
            "payload of {} bytes is not a whole number of {frame_len}-byte frames",
            payload.len()
        )));
    }
    if payload.len() != frame_count * frame_len {
        return Err(TabmlError::malformed(format!(
            "header declares {frame_count} frames but the payload holds {}",
            payload.len() / frame_len
        )));
    }

    let mut frames = Vec::with_capacity(frame_count);
    for chunk in payload.chunks_exact(frame_len) {
        let mut grid = Grid::empty();
        for (i, px) in chunk.chunks_exact(3).enumerate() {
            // On means green and blue both saturated; colors outside the
            // cyan family decode as off.
            grid.set(i / GRID_COLS, i % GRID_COLS, px[1] == 0xFF && px[2] == 0xFF);
        }
        frames.push(grid);
    }

    let color = payload
        .chunks_exact(3)
        .find(|px| px.iter().any(|&b| b != 0))
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .unwrap_or(Rgb::CYAN);

    tracing::debug!(frames = frames.len(), fps, %color, "decoded container");
    Ok(Container {
        fps,
        rows,
        cols,
        frames,
        color,
    })
}

/// Read and decode a container file in one shot.
pub fn read_path(path: &Path) -> TabmlResult<Container> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read container '{}'", path.display()))?;
    decode(&bytes)
}
