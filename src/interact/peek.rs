use std::time::{Duration, Instant};

use crate::foundation::config::EditorConfig;
use crate::foundation::core::{Point, Vec2};

pub const MIN_PREVIEW_SCALE: f64 = 0.1;
pub const MAX_PREVIEW_SCALE: f64 = 0.4;
pub const PREVIEW_SCALE_STEP: f64 = 0.02;
pub const DEFAULT_PREVIEW_SCALE: f64 = 0.18;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PeekState {
    Idle,
    /// Long-press timer running since `since`.
    Pending { since: Instant, origin: Point },
    /// Enlarged preview shown until release.
    Peeking,
    /// Window follows the pointer, keeping `grab` between pointer and window origin.
    Dragging { grab: Vec2 },
}

/// Long-press peek and drag handling for the floating preview window.
///
/// Time is passed in by the caller, so the controller has no clock of its own.
#[derive(Clone, Debug)]
pub struct PeekController {
    long_press: Duration,
    threshold_px: f64,
    state: PeekState,
    position: Point,
    scale: f64,
}

impl PeekController {
    pub fn new(long_press: Duration, threshold_px: f64) -> Self {
        Self {
            long_press,
            threshold_px,
            state: PeekState::Idle,
            position: Point::ORIGIN,
            scale: DEFAULT_PREVIEW_SCALE,
        }
    }

    pub fn from_config(cfg: &EditorConfig) -> Self {
        Self::new(Duration::from_millis(cfg.long_press_ms), cfg.drag_threshold_px)
    }

    pub fn state(&self) -> PeekState {
        self.state
    }

    pub fn is_peeking(&self) -> bool {
        self.state == PeekState::Peeking
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PeekState::Dragging { .. })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, p: Point) {
        self.position = p;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the preview scale, snapped to the step and clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        let snapped = (scale / PREVIEW_SCALE_STEP).round() * PREVIEW_SCALE_STEP;
        self.scale = if snapped.is_finite() {
            snapped.clamp(MIN_PREVIEW_SCALE, MAX_PREVIEW_SCALE)
        } else {
            DEFAULT_PREVIEW_SCALE
        };
        self.scale
    }

    pub fn press(&mut self, point: Point, now: Instant) {
        self.state = PeekState::Pending {
            since: now,
            origin: point,
        };
    }

    /// Advance the long-press timer. Returns `true` when the peek opens on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            PeekState::Pending { since, .. }
                if now.saturating_duration_since(since) >= self.long_press =>
            {
                tracing::debug!("preview peek opened");
                self.state = PeekState::Peeking;
                true
            }
            _ => false,
        }
    }

    /// Pointer moved. Returns the new window position while dragging.
    pub fn pointer_move(&mut self, point: Point) -> Option<Point> {
        match self.state {
            PeekState::Pending { origin, .. } => {
                if (point - origin).hypot() <= self.threshold_px {
                    return None;
                }
                let grab = origin - self.position;
                self.state = PeekState::Dragging { grab };
                self.position = point - grab;
                Some(self.position)
            }
            PeekState::Dragging { grab } => {
                self.position = point - grab;
                Some(self.position)
            }
            PeekState::Idle | PeekState::Peeking => None,
        }
    }

    /// Pointer up: closes the peek and ends any drag.
    pub fn release(&mut self) {
        self.state = PeekState::Idle;
    }
}

impl Default for PeekController {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/peek.rs"]
mod tests;
