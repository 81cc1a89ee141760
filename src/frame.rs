use instant::Instant;
use plane_core::{AppContext, FrameLoop};
use plane_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation frame callback touches.
pub struct FrameState {
    pub ctx: Option<AppContext>,
    pub gpu: GpuState<'static>,
    pub frame_loop: FrameLoop,
}

impl FrameState {
    /// Run one frame. Returns whether another should be scheduled.
    fn tick(&mut self) -> bool {
        let Some(ctx) = self.ctx.as_mut() else {
            return false;
        };
        // Transient surface failures are skipped inside the renderer
        if let Err(e) = ctx.frame(Instant::now(), &mut self.gpu) {
            log::error!("[frame] {:#}", e);
            self.frame_loop.stop_handle().stop();
        }
        if self.frame_loop.should_continue() {
            return true;
        }
        if let Some(ctx) = self.ctx.take() {
            ctx.shutdown(&mut self.frame_loop);
        }
        false
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    ctx: &AppContext,
) -> anyhow::Result<GpuState<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    GpuState::new(target, &ctx.viewport, &ctx.geometry)
        .await
        .map_err(|e| anyhow::anyhow!(format!("WebGPU init error: {e}")))
}

fn request_frame(closure: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Drive `state` from requestAnimationFrame until its loop is stopped. The
/// callback stays alive in `tick` and is simply not rescheduled once stopped.
pub fn start_loop(state: Rc<RefCell<FrameState>>) {
    if !state.borrow_mut().frame_loop.start() {
        log::warn!("[loop] already started");
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_next = tick.clone();
    let state_tick = state.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state_tick.borrow_mut().tick() {
            return;
        }
        if let Some(closure) = tick_next.borrow().as_ref() {
            request_frame(closure);
        }
    }) as Box<dyn FnMut()>));
    if let Some(closure) = tick.borrow().as_ref() {
        request_frame(closure);
    }
}
