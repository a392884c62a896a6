// Mapping from a `TiltState` snapshot to CSS property values.
// Pure string/matrix code so it can be exercised on the host.

use glam::{Mat4, Vec3};
use tilt_core::TiltState;

/// Rotation about X then Y, then uniform scale. CSS and glam agree on the
/// per-axis rotation matrices, so the result feeds `matrix3d` directly.
pub fn surface_matrix(state: &TiltState) -> Mat4 {
    let m = Mat4::from_rotation_x(state.rotate_x.to_radians())
        * Mat4::from_rotation_y(state.rotate_y.to_radians())
        * Mat4::from_scale(Vec3::splat(state.scale));
    if m.is_finite() {
        m
    } else {
        Mat4::IDENTITY
    }
}

/// Column-major, as `matrix3d()` expects.
pub fn matrix3d_css(m: &Mat4, decimals: usize) -> String {
    let parts: Vec<String> = m
        .to_cols_array()
        .iter()
        .map(|v| css_number(*v, decimals))
        .collect();
    format!("matrix3d({})", parts.join(", "))
}

/// Surface transform. The card root supplies the `perspective`.
pub fn surface_transform_css(state: &TiltState, decimals: usize) -> String {
    matrix3d_css(&surface_matrix(state), decimals)
}

pub fn caption_transform_css(state: &TiltState, decimals: usize) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg)",
        css_number(state.translate.x, decimals),
        css_number(state.translate.y, decimals),
        css_number(state.caption_rotate, decimals)
    )
}

pub fn opacity_css(state: &TiltState) -> String {
    let o = if state.opacity.is_finite() {
        state.opacity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    css_number(o, 3)
}

/// Fixed precision with trailing zeros trimmed; never emits `-0` or NaN.
pub fn css_number(v: f32, decimals: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.*}", decimals, v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
