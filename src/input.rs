use tilt_core::{PointerSample, SurfaceRect};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn surface_rect(el: &web::Element) -> SurfaceRect {
    let rect = el.get_bounding_client_rect();
    SurfaceRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Viewport width in CSS px. Unknown widths count as desktop.
#[inline]
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as f32)
        .unwrap_or(f32::INFINITY)
}

#[inline]
pub fn pointer_sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample::new(ev.client_x() as f32, ev.client_y() as f32, viewport_width())
}
