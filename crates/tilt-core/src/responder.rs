//! Pointer-driven tilt model for a single card surface.
//!
//! Events set spring targets; `tick` integrates every spring once per
//! animation frame and returns the snapshot to render. Each surface owns an
//! independent responder.

use crate::config::{ConfigError, TiltConfig};
use crate::constants::{MAX_FRAME_DT_SEC, MAX_SUBSTEP_SEC, SETTLE_EPSILON};
use crate::geometry::{PointerSample, SurfaceRect};
use crate::spring::Spring;
use glam::Vec2;
use std::time::Duration;

/// Render snapshot produced by [`TiltResponder::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    /// Degrees about the horizontal axis; positive tips the top edge away.
    pub rotate_x: f32,
    /// Degrees about the vertical axis.
    pub rotate_y: f32,
    pub scale: f32,
    /// Pointer position inside the surface, unsmoothed. Places the tooltip.
    pub translate: Vec2,
    pub caption_rotate: f32,
    pub opacity: f32,
}

impl Default for TiltState {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            translate: Vec2::ZERO,
            caption_rotate: 0.0,
            opacity: 0.0,
        }
    }
}

/// What one pointer move computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltDelta {
    /// Displacement from the surface center.
    pub offset: Vec2,
    pub rotate_x_target: f32,
    pub rotate_y_target: f32,
    pub translate: Vec2,
    pub velocity_y: f32,
    pub caption_rotate_target: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltResponder {
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    opacity: Spring,
    caption_rotate: Spring,
    translate: Vec2,
    previous_offset_y: f32,
    hovering: bool,
}

impl Default for TiltResponder {
    fn default() -> Self {
        Self::with_valid_config(&TiltConfig::default())
    }
}

impl TiltResponder {
    pub fn new(config: &TiltConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: &TiltConfig) -> Self {
        let s = &config.springs;
        Self {
            rotate_x: Spring::new(0.0, s.rotation),
            rotate_y: Spring::new(0.0, s.rotation),
            scale: Spring::new(1.0, s.scale),
            opacity: Spring::new(0.0, s.opacity),
            caption_rotate: Spring::new(0.0, s.caption),
            translate: Vec2::ZERO,
            previous_offset_y: 0.0,
            hovering: false,
        }
    }

    /// Retarget the rotation and caption springs from a pointer sample.
    ///
    /// Returns `None` without touching any state when the surface has no
    /// usable size yet.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        rect: SurfaceRect,
        config: &TiltConfig,
    ) -> Option<TiltDelta> {
        if rect.is_degenerate() {
            log::debug!(
                "[tilt] skip move: degenerate surface {}x{}",
                rect.width,
                rect.height
            );
            return None;
        }
        let offset = sample.position - rect.center();
        let half = rect.half_extent();
        let amplitude = config.rotate_amplitude * config.device_factor_for(sample.viewport_width);

        let rotate_x_target = (offset.y / half.y) * -amplitude;
        let rotate_y_target = (offset.x / half.x) * amplitude;
        let translate = sample.position - rect.origin();

        let velocity_y = offset.y - self.previous_offset_y;
        let caption_rotate_target = -velocity_y * config.caption_velocity_scale;
        self.previous_offset_y = offset.y;

        self.rotate_x.set_target(rotate_x_target);
        self.rotate_y.set_target(rotate_y_target);
        self.caption_rotate.set_target(caption_rotate_target);
        self.translate = translate;

        Some(TiltDelta {
            offset,
            rotate_x_target,
            rotate_y_target,
            translate,
            velocity_y,
            caption_rotate_target,
        })
    }

    pub fn on_pointer_enter(&mut self, config: &TiltConfig) {
        self.hovering = true;
        self.scale.set_target(config.scale_on_hover);
        self.opacity.set_target(1.0);
    }

    /// End the session: every target goes back to rest and the vertical
    /// velocity baseline is forgotten.
    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
        self.opacity.set_target(0.0);
        self.scale.set_target(1.0);
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.caption_rotate.set_target(0.0);
        self.previous_offset_y = 0.0;
    }

    /// Advance all springs by `dt` and return the state to render.
    ///
    /// Frames longer than `MAX_FRAME_DT_SEC` are truncated and the rest is
    /// split into substeps of at most `MAX_SUBSTEP_SEC`, so a 60 Hz frame is a
    /// single integration step.
    pub fn tick(&mut self, dt: Duration) -> TiltState {
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);
        if dt_sec > 0.0 {
            // tolerance keeps an exact 1/60 s frame from rounding up to two steps
            let steps = (dt_sec / MAX_SUBSTEP_SEC - 1e-3).ceil().max(1.0) as u32;
            let h = dt_sec / steps as f32;
            for _ in 0..steps {
                self.step(h);
            }
        }
        self.state()
    }

    fn step(&mut self, h: f32) {
        self.rotate_x.advance(h);
        self.rotate_y.advance(h);
        self.scale.advance(h);
        self.opacity.advance(h);
        self.caption_rotate.advance(h);
    }

    pub fn state(&self) -> TiltState {
        TiltState {
            rotate_x: self.rotate_x.value,
            rotate_y: self.rotate_y.value,
            scale: self.scale.value,
            translate: self.translate,
            caption_rotate: self.caption_rotate.value,
            opacity: self.opacity.value,
        }
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// No session is active and every spring has settled on its target.
    pub fn is_at_rest(&self) -> bool {
        !self.hovering
            && [
                &self.rotate_x,
                &self.rotate_y,
                &self.scale,
                &self.opacity,
                &self.caption_rotate,
            ]
            .iter()
            .all(|s| s.is_settled(SETTLE_EPSILON))
    }

    /// Current targets as a state, useful to see where the springs are heading.
    pub fn targets(&self) -> TiltState {
        TiltState {
            rotate_x: self.rotate_x.target,
            rotate_y: self.rotate_y.target,
            scale: self.scale.target,
            translate: self.translate,
            caption_rotate: self.caption_rotate.target,
            opacity: self.opacity.target,
        }
    }
}
