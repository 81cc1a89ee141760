use crate::constants::{PANEL_TOGGLE_KEY, REGENERATE_KEY};
use crate::{dom, panel};
use plane_core::{AppEvent, EventQueue};
use web_sys as web;

/// Key bindings outside the panel: `h` toggles the panel, `r` reseeds spikes.
pub fn wire_global_keydown(document: &web::Document, queue: &EventQueue) {
    let queue = queue.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let key = ev.key();
        if key.eq_ignore_ascii_case(PANEL_TOGGLE_KEY) {
            if let Some(doc) = dom::window_document() {
                panel::toggle(&doc);
            }
        } else if key.eq_ignore_ascii_case(REGENERATE_KEY) {
            queue.push(AppEvent::RegenerateSpikes);
        }
    });
}
