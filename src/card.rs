use crate::constants::{CSS_DECIMALS, PERSPECTIVE_PX, SURFACE_CLASS};
use crate::dom;
use crate::style;
use crate::tooltip;
use std::cell::RefCell;
use std::rc::Rc;
use tilt_core::{TiltConfig, TiltResponder, TiltState, OVERRIDE_KEYS};
use web_sys as web;

pub type SharedCard = Rc<RefCell<Card>>;

/// One mounted tilt card: its DOM parts plus the responder driving them.
pub struct Card {
    pub root: web::HtmlElement,
    pub surface: web::HtmlElement,
    pub caption: Option<web::HtmlElement>,
    pub config: TiltConfig,
    pub responder: TiltResponder,
    painted_at_rest: bool,
}

impl Card {
    pub fn mount(document: &web::Document, root: web::HtmlElement) -> anyhow::Result<Self> {
        let config = read_config(&root);
        let responder = TiltResponder::new(&config)?;

        let surface = match dom::find_html(&root, &format!(".{SURFACE_CLASS}")) {
            Some(s) => s,
            None => wrap_children(document, &root)?,
        };
        let perspective = format!("{}px", style::css_number(PERSPECTIVE_PX, CSS_DECIMALS));
        dom::set_styles(&root, &[("position", "relative"), ("perspective", &perspective)]);
        dom::set_styles(
            &surface,
            &[
                ("transform-style", "preserve-3d"),
                ("will-change", "transform"),
            ],
        );

        if let Some(text) = root.get_attribute("data-overlay") {
            tooltip::create_overlay(document, &surface, &text)?;
        }
        let show_caption = root
            .get_attribute("data-show-tooltip")
            .map(|v| v != "false")
            .unwrap_or(true);
        let caption = if show_caption {
            let text = root.get_attribute("data-caption").unwrap_or_default();
            Some(tooltip::create_caption(document, &root, &text)?)
        } else {
            None
        };

        Ok(Self {
            root,
            surface,
            caption,
            config,
            responder,
            painted_at_rest: false,
        })
    }

    /// Advance the springs and write the new state, skipping DOM writes
    /// once a resting card has been painted.
    pub fn frame(&mut self, dt: std::time::Duration) {
        let state = self.responder.tick(dt);
        let at_rest = self.responder.is_at_rest();
        if at_rest && self.painted_at_rest {
            return;
        }
        self.paint(&state);
        self.painted_at_rest = at_rest;
    }

    fn paint(&self, state: &TiltState) {
        dom::set_styles(
            &self.surface,
            &[("transform", &style::surface_transform_css(state, CSS_DECIMALS))],
        );
        if let Some(c) = &self.caption {
            tooltip::paint_caption(c, state);
        }
    }
}

pub fn mount_all(document: &web::Document, selector: &str) -> Vec<SharedCard> {
    dom::query_all_html(document, selector)
        .into_iter()
        .filter_map(|el| match Card::mount(document, el) {
            Ok(card) => Some(Rc::new(RefCell::new(card))),
            Err(e) => {
                log::error!("[card] mount failed: {:?}", e);
                None
            }
        })
        .collect()
}

// Bad attributes are dropped one by one; the rest of the config still applies.
fn read_config(root: &web::HtmlElement) -> TiltConfig {
    let mut config = TiltConfig::default();
    for key in OVERRIDE_KEYS {
        if let Some(value) = root.get_attribute(&format!("data-{key}")) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[card] ignoring data-{}: {}", key, e);
            }
        }
    }
    config
}

fn wrap_children(
    document: &web::Document,
    root: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let surface = dom::create_div(document, SURFACE_CLASS)?;
    dom::set_styles(&surface, &[("width", "100%"), ("height", "100%")]);
    while let Some(child) = root.first_child() {
        surface
            .append_child(&child)
            .map_err(|e| anyhow::anyhow!("move child: {:?}", e))?;
    }
    root.append_child(&surface)
        .map_err(|e| anyhow::anyhow!("append surface: {:?}", e))?;
    Ok(surface)
}
