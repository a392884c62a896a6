#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod style;
mod tooltip;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-card starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cards = card::mount_all(&document, constants::CARD_SELECTOR);
    if cards.is_empty() {
        log::warn!("no {} elements found", constants::CARD_SELECTOR);
        return Ok(());
    }
    log::info!("[card] mounted {}", cards.len());

    for c in &cards {
        events::wire_card_handlers(c);
    }

    // Spring integration + DOM writes driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(cards)));
    frame::start_loop(frame_ctx);

    Ok(())
}
