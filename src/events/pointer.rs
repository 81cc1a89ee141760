use crate::dom;
use plane_core::{is_orbit_button, wheel_delta_px, AppEvent, EventQueue, PointerInput};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    (x, y)
}

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    wire_pointerdown(canvas, queue);
    wire_pointermove(canvas, queue);
    wire_pointerup(queue);
    wire_wheel(canvas, queue);
    // Suppress the context menu so right-drag does not pop it over the scene
    dom::add_listener(canvas, "contextmenu", |ev: web::Event| ev.prevent_default());
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let canvas_down = canvas.clone();
    let queue = queue.clone();
    dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !is_orbit_button(&ev.pointer_type(), ev.button()) {
            return;
        }
        let (x, y) = pointer_canvas_css(&ev, &canvas_down);
        _ = canvas_down.set_pointer_capture(ev.pointer_id());
        queue.push(AppEvent::Pointer(PointerInput::Down {
            id: ev.pointer_id(),
            x,
            y,
        }));
        ev.prevent_default();
    });
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let canvas_move = canvas.clone();
    let queue = queue.clone();
    if let Some(wnd) = web::window() {
        dom::add_listener(&wnd, "pointermove", move |ev: web::PointerEvent| {
            let (x, y) = pointer_canvas_css(&ev, &canvas_move);
            queue.push(AppEvent::Pointer(PointerInput::Move {
                id: ev.pointer_id(),
                x,
                y,
            }));
        });
    }
}

fn wire_pointerup(queue: &EventQueue) {
    let Some(wnd) = web::window() else {
        return;
    };
    for name in ["pointerup", "pointercancel"] {
        let queue = queue.clone();
        dom::add_listener(&wnd, name, move |ev: web::PointerEvent| {
            queue.push(AppEvent::Pointer(PointerInput::Up {
                id: ev.pointer_id(),
            }));
        });
    }
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta_y = wheel_delta_px(ev.delta_y(), ev.delta_mode());
        queue.push(AppEvent::Pointer(PointerInput::Wheel { delta_y }));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so prevent_default keeps the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
