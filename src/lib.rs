#![cfg(target_arch = "wasm32")]
use plane_core::{AppContext, AppEvent, SceneConfig, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod panel;
mod texture;

thread_local! {
    static STOP: RefCell<Option<StopHandle>> = const { RefCell::new(None) };
}

/// Stop the animation loop after the current frame.
#[wasm_bindgen]
pub fn stop() {
    STOP.with(|s| match s.borrow().as_ref() {
        Some(handle) => handle.stop(),
        None => log::warn!("stop() called before the loop started"),
    });
}

fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement, ctx: &AppContext) {
    let queue = ctx.events();
    let canvas = canvas.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::viewport_of(&w);
        dom::apply_viewport(&canvas, &viewport);
        queue.push(AppEvent::Resized(viewport));
    });
}

fn spawn_texture_load(path: String, ctx: &AppContext) {
    let queue = ctx.events();
    spawn_local(async move {
        match texture::fetch_texture(&path).await {
            Ok(image) => queue.push(AppEvent::TextureLoaded(image)),
            Err(e) => log::warn!("[texture] {}: {:#}; rendering with placeholder", path, e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spike-plane starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document)?;

    let config = SceneConfig::default();
    let viewport = dom::viewport_of(&window);
    dom::apply_viewport(&canvas, &viewport);
    let ctx = AppContext::new(&config, viewport);

    spawn_texture_load(config.texture_path.clone(), &ctx);
    let gpu = frame::init_gpu(&canvas, &ctx).await?;

    let queue = ctx.events();
    wire_resize(&window, &canvas, &ctx);
    events::wire_input_handlers(&canvas, &queue);
    events::wire_global_keydown(&document, &queue);
    if let Err(e) = panel::build(&document, ctx.uniforms.frequency(), &queue) {
        log::warn!("[panel] {:#}", e);
    }

    let frame_loop = plane_core::FrameLoop::new();
    STOP.with(|s| *s.borrow_mut() = Some(frame_loop.stop_handle()));
    let state = Rc::new(RefCell::new(frame::FrameState {
        ctx: Some(ctx),
        gpu,
        frame_loop,
    }));
    frame::start_loop(state);
    Ok(())
}
