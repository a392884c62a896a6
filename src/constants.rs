/// Front-end layout and paint constants.
///
/// Tilt tuning lives in `tilt_core::constants`; these only concern how the
/// state is mapped onto the DOM.
// Card discovery
pub const CARD_SELECTOR: &str = "[data-tilt-card]";
pub const SURFACE_CLASS: &str = "tilt-card__surface";
pub const CAPTION_CLASS: &str = "tilt-card__caption";
pub const OVERLAY_CLASS: &str = "tilt-card__overlay";

// 3D projection applied by the card root
pub const PERSPECTIVE_PX: f32 = 800.0;

// Overlay banner floats above the surface plane
pub const OVERLAY_LIFT_PX: f32 = 30.0;

// Stacking inside the card
pub const OVERLAY_Z_INDEX: i32 = 2;
pub const CAPTION_Z_INDEX: i32 = 3;

// CSS number formatting
pub const CSS_DECIMALS: usize = 4;
