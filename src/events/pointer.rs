use crate::card::SharedCard;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_card_handlers(card: &SharedCard) {
    wire_pointerenter(card);
    wire_pointermove(card);
    wire_pointerleave(card);
}

fn wire_pointerenter(card: &SharedCard) {
    let card = card.clone();
    let target = card.borrow().root.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut guard = card.borrow_mut();
        let c = &mut *guard;
        c.responder.on_pointer_enter(&c.config);
        log::debug!("[pointer] enter");
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(card: &SharedCard) {
    let card = card.clone();
    let target = card.borrow().root.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut guard = card.borrow_mut();
        let c = &mut *guard;
        // layout may have shifted since the last event (scroll, resize)
        let rect = input::surface_rect(&c.root);
        let sample = input::pointer_sample(&ev);
        _ = c.responder.on_pointer_move(sample, rect, &c.config);
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(card: &SharedCard) {
    let card = card.clone();
    let target = card.borrow().root.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        card.borrow_mut().responder.on_pointer_leave();
        log::debug!("[pointer] leave");
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
