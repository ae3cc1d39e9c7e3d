//! Producer-side pipeline: a validated animation description drives
//! glyph rendering, frame generation and the container write.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::anim::{self, DEFAULT_GAP, Mode};
use crate::container;
use crate::foundation::core::{Grid, Rgb, Shift};
use crate::foundation::error::{TabmlError, TabmlResult};

/// Everything needed to produce one container: what to show and how.
///
/// Deserializes from JSON with `text` as the only required field, so a
/// minimal manifest is just `{"text": "HELLO"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Text to display. Characters without a glyph render as `?`.
    pub text: String,
    #[serde(default)]
    pub mode: Mode,
    /// Frames per second, 1-255. `None` picks the mode default.
    #[serde(default)]
    pub fps: Option<u8>,
    /// Display color for on pixels.
    #[serde(default = "default_color")]
    pub color: Rgb,
    /// Blank columns (or rows) between glyphs when scrolling.
    #[serde(default = "default_gap")]
    pub gap: usize,
    /// Global translation applied to every frame at encode time.
    #[serde(default)]
    pub shift: Shift,
}

fn default_color() -> Rgb {
    Rgb::CYAN
}

fn default_gap() -> usize {
    DEFAULT_GAP
}

impl GenerateConfig {
    /// Load a config from a JSON manifest file.
    pub fn from_path(path: &Path) -> TabmlResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("failed to open manifest '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .map_err(|e| TabmlError::serde(format!("parse manifest '{}': {e}", path.display())))?;
        Ok(cfg)
    }

    /// Effective frame rate: the explicit one, or the mode default.
    pub fn fps(&self) -> u8 {
        self.fps.unwrap_or_else(|| self.mode.default_fps())
    }

    pub fn validate(&self) -> TabmlResult<()> {
        if self.text.is_empty() {
            return Err(TabmlError::validation("text must not be empty"));
        }
        if self.fps() == 0 {
            return Err(TabmlError::validation("fps must be between 1 and 255"));
        }
        Ok(())
    }
}

/// Summary of a finished generation, for display by callers.
#[derive(Clone, Copy, Debug)]
pub struct GenerateSummary {
    pub frame_count: usize,
    pub fps: u8,
    pub color: Rgb,
    /// Size of the written container in bytes.
    pub bytes: usize,
}

/// Generate the frame sequence for `cfg`, before the global shift. The
/// shift belongs to the encoder; preview the final pixels by applying
/// [`Grid::shifted`] with `cfg.shift`.
pub fn generate_frames(cfg: &GenerateConfig) -> TabmlResult<Vec<Grid>> {
    cfg.validate()?;
    Ok(anim::frames_for(&cfg.text, cfg.mode, cfg.gap))
}

/// Run the whole producer pipeline and write the container to `out`.
#[tracing::instrument(skip(cfg), fields(mode = ?cfg.mode))]
pub fn generate_to_path(cfg: &GenerateConfig, out: &Path) -> TabmlResult<GenerateSummary> {
    let frames = generate_frames(cfg)?;
    let bytes = container::write_path(out, &frames, cfg.fps(), cfg.color, cfg.shift)?;
    Ok(GenerateSummary {
        frame_count: frames.len(),
        fps: cfg.fps(),
        color: cfg.color,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GenerateConfig {
        GenerateConfig {
            text: "HI".to_string(),
            mode: Mode::Static,
            fps: None,
            color: Rgb::CYAN,
            gap: DEFAULT_GAP,
            shift: Shift::ZERO,
        }
    }

    #[test]
    fn fps_defaults_follow_the_mode() {
        let mut cfg = base_config();
        assert_eq!(cfg.fps(), 5);
        cfg.mode = Mode::ScrollLeft;
        assert_eq!(cfg.fps(), 10);
        cfg.fps = Some(30);
        assert_eq!(cfg.fps(), 30);
    }

    #[test]
    fn empty_text_is_rejected_at_this_boundary() {
        let cfg = GenerateConfig {
            text: String::new(),
            ..base_config()
        };
        assert!(matches!(
            generate_frames(&cfg),
            Err(TabmlError::Validation(_))
        ));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let cfg = GenerateConfig {
            fps: Some(0),
            ..base_config()
        };
        assert!(matches!(cfg.validate(), Err(TabmlError::Validation(_))));
    }

    #[test]
    fn generates_static_frames() {
        let frames = generate_frames(&base_config()).unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn minimal_manifest_fills_in_defaults() {
        let cfg: GenerateConfig = serde_json::from_str(r#"{"text": "GO"}"#).unwrap();
        assert_eq!(cfg.mode, Mode::Static);
        assert_eq!(cfg.fps(), 5);
        assert_eq!(cfg.color, Rgb::CYAN);
        assert_eq!(cfg.gap, DEFAULT_GAP);
        assert_eq!(cfg.shift, Shift::ZERO);
    }

    #[test]
    fn full_manifest_parses() {
        let cfg: GenerateConfig = serde_json::from_str(
            r##"{
                "text": "UP",
                "mode": "scroll_up",
                "fps": 15,
                "color": "#FF8800",
                "gap": 2,
                "shift": {"d_row": -1, "d_col": 1}
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.mode, Mode::ScrollUp);
        assert_eq!(cfg.fps(), 15);
        assert_eq!(cfg.color, Rgb::new(0xFF, 0x88, 0x00));
        assert_eq!(cfg.gap, 2);
        assert_eq!(cfg.shift, Shift::new(-1, 1));
    }

    #[test]
    fn manifest_with_bad_color_fails_as_serde_error() {
        let err =
            serde_json::from_str::<GenerateConfig>(r#"{"text": "A", "color": "teal"}"#).unwrap_err();
        assert!(err.to_string().contains("6-hex-digit"));
    }
}
