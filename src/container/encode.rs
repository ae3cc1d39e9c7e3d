use std::path::Path;

use anyhow::Context as _;

use crate::container::{FRAME_LEN, HEADER_LEN, MAGIC, MAX_FRAMES};
use crate::foundation::core::{GRID_COLS, GRID_ROWS, Grid, Rgb, Shift};
use crate::foundation::error::{TabmlError, TabmlResult};

/// Serialize a frame sequence into container bytes.
///
/// A non-zero `shift` translates every frame before encoding (clipping at
/// the grid bounds). More than [`MAX_FRAMES`] frames fails with
/// [`TabmlError::FrameCountOverflow`] rather than wrapping the one-byte
/// count field. An empty sequence encodes to a well-formed, header-only
/// container.
pub fn encode(frames: &[Grid], fps: u8, color: Rgb, shift: Shift) -> TabmlResult<Vec<u8>> {
    if frames.len() > MAX_FRAMES {
        return Err(TabmlError::FrameCountOverflow(frames.len()));
    }

    let mut buf = Vec::with_capacity(HEADER_LEN + frames.len() * FRAME_LEN);
    buf.extend_from_slice(MAGIC);
    buf.push(frames.len() as u8);
    buf.push(fps);
    buf.push(GRID_ROWS as u8);
    buf.push(GRID_COLS as u8);
    buf.resize(HEADER_LEN, 0);

    for frame in frames {
        let frame = if shift.is_zero() {
            *frame
        } else {
            frame.shifted(shift)
        };
        for r in 0..GRID_ROWS {
            for c in 0..GRID_COLS {
                if frame.is_on(r, c) {
                    buf.extend_from_slice(&[color.r, color.g, color.b]);
                } else {
                    buf.extend_from_slice(&[0, 0, 0]);
                }
            }
        }
    }

    tracing::debug!(frames = frames.len(), bytes = buf.len(), "encoded container");
    Ok(buf)
}

/// Encode and write a container in one shot, creating parent directories
/// as needed. Returns the number of bytes written.
pub fn write_path(
    path: &Path,
    frames: &[Grid],
    fps: u8,
    color: Rgb,
    shift: Shift,
) -> TabmlResult<usize> {
    let bytes = encode(frames, fps, color, shift)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("failed to write container '{}'", path.display()))?;
    Ok(bytes.len())
}

fn ensure_parent_dir(path: &Path) -> TabmlResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
