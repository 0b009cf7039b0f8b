use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{CardError, CardResult};

/// Editor-wide tunables. Every field has a default so a partial JSON file is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Device scale applied when capturing the card to a raster.
    pub capture_scale: f64,
    /// Upper bound for a field's font-size multiplier. The lower bound is fixed at 0.2.
    pub font_scale_ceiling: f64,
    /// Long-press duration before the floating preview peeks.
    pub long_press_ms: u64,
    /// Pointer travel that turns a pending long-press into a window drag.
    pub drag_threshold_px: f64,
    /// Step used by the arrow nudge controls.
    pub nudge_step_px: f64,
    /// Step used by the font size +/- controls.
    pub size_step: f64,
    /// Draft file used by the file-backed slot.
    pub draft_file: PathBuf,
    /// Extra font directories loaded before system fonts at capture time.
    pub font_dirs: Vec<PathBuf>,
    /// Photo reference used when a split layout is chosen without a user photo.
    pub default_photo: String,
}

pub const DEFAULT_COUPLE_PHOTO: &str = "https://images.unsplash.com/photo-1621621667797-e06afc217fb0?q=80&w=2070&auto=format&fit=crop";

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            capture_scale: 2.0,
            font_scale_ceiling: 4.0,
            long_press_ms: 250,
            drag_threshold_px: 6.0,
            nudge_step_px: 5.0,
            size_step: 0.1,
            draft_file: PathBuf::from("weddingCardDraft.json"),
            font_dirs: Vec::new(),
            default_photo: DEFAULT_COUPLE_PHOTO.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    #[tracing::instrument]
    pub fn load(path: &Path) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        tracing::debug!(?cfg, "loaded editor config");
        Ok(cfg)
    }

    pub fn validate(&self) -> CardResult<()> {
        if !(self.capture_scale.is_finite() && self.capture_scale > 0.0) {
            return Err(CardError::validation("captureScale must be > 0"));
        }
        if !(self.font_scale_ceiling.is_finite()
            && self.font_scale_ceiling >= crate::model::style::MIN_FONT_SCALE)
        {
            return Err(CardError::validation("fontScaleCeiling must be >= 0.2"));
        }
        if self.drag_threshold_px < 0.0 || self.nudge_step_px <= 0.0 || self.size_step <= 0.0 {
            return Err(CardError::validation(
                "dragThresholdPx must be >= 0 and step sizes must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
