//! Caption tooltip that follows the pointer inside a card, plus the
//! optional overlay banner pinned to the top of the surface.
use crate::constants::{
    CAPTION_CLASS, CAPTION_Z_INDEX, CSS_DECIMALS, OVERLAY_CLASS, OVERLAY_LIFT_PX, OVERLAY_Z_INDEX,
};
use crate::dom;
use crate::style;
use tilt_core::TiltState;
use web_sys as web;

pub fn create_caption(
    document: &web::Document,
    card: &web::HtmlElement,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_div(document, CAPTION_CLASS)?;
    el.set_text_content(Some(text));
    let z = CAPTION_Z_INDEX.to_string();
    dom::set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("pointer-events", "none"),
            ("opacity", "0"),
            ("z-index", &z),
        ],
    );
    card.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append caption: {:?}", e))?;
    Ok(el)
}

pub fn create_overlay(
    document: &web::Document,
    surface: &web::HtmlElement,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_div(document, OVERLAY_CLASS)?;
    el.set_text_content(Some(text));
    let lift = format!("translateZ({}px)", style::css_number(OVERLAY_LIFT_PX, CSS_DECIMALS));
    let z = OVERLAY_Z_INDEX.to_string();
    dom::set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("width", "100%"),
            ("transform", &lift),
            ("z-index", &z),
        ],
    );
    surface
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append overlay: {:?}", e))?;
    Ok(el)
}

#[inline]
pub fn paint_caption(el: &web::HtmlElement, state: &TiltState) {
    dom::set_styles(
        el,
        &[
            ("transform", &style::caption_transform_css(state, CSS_DECIMALS)),
            ("opacity", &style::opacity_css(state)),
        ],
    );
}
