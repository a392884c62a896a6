// Default tuning for the tilt card. Mirrors the profile card's original feel.

// Tilt
pub const ROTATE_AMPLITUDE_DEG: f32 = 12.0; // max tilt at the surface edge
pub const SCALE_ON_HOVER: f32 = 1.1;
pub const CAPTION_VELOCITY_SCALE: f32 = 0.6; // degrees of caption swing per px of vertical motion

// Small viewports
pub const MOBILE_DEVICE_FACTOR: f32 = 0.6; // applied to rotation amplitude only
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewport widths <= this count as mobile

// Spring constants: slow heavy settle for the surface, fast light flutter for the caption
pub const SURFACE_STIFFNESS: f32 = 100.0;
pub const SURFACE_DAMPING: f32 = 30.0;
pub const SURFACE_MASS: f32 = 2.0;

pub const CAPTION_STIFFNESS: f32 = 350.0;
pub const CAPTION_DAMPING: f32 = 30.0;
pub const CAPTION_MASS: f32 = 1.0;

// Integration
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (background tab) are truncated
pub const MAX_SUBSTEP_SEC: f32 = 1.0 / 60.0;

// Rest detection, in the spring's own units
pub const SETTLE_EPSILON: f32 = 1e-3;
