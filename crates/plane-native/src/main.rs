use anyhow::Context;
use instant::Instant;
use plane_core::{
    AppContext, AppEvent, EventQueue, FrameLoop, FrequencyAxis, PointerInput, SceneConfig,
    TextureImage, Viewport,
};
use plane_render::GpuState;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{
    ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

// Arrow keys stand in for the web panel sliders.
const FREQUENCY_KEY_STEP: f32 = 0.5;
const MOUSE_POINTER_ID: i32 = 0;
// Pixels per scroll line, matching the DOM line-mode conversion.
const WHEEL_LINE_PX: f32 = 16.0;

fn viewport_of(window: &Window) -> Viewport {
    let size = window.inner_size();
    Viewport::from_physical(size.width, size.height, window.scale_factor())
}

fn load_texture(path: &str) -> anyhow::Result<TextureImage> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    let image = TextureImage::decode(&bytes).with_context(|| format!("decoding {path}"))?;
    Ok(image)
}

/// Tracks the cursor so button presses can carry a position.
#[derive(Default)]
struct PointerTracker {
    cursor: PhysicalPosition<f64>,
    pressed: bool,
}

impl PointerTracker {
    fn logical(&self, scale: f64) -> (f32, f32) {
        ((self.cursor.x / scale) as f32, (self.cursor.y / scale) as f32)
    }
}

fn touch_input(touch: &Touch, scale: f64) -> PointerInput {
    let id = touch.id as i32 + 1;
    let x = (touch.location.x / scale) as f32;
    let y = (touch.location.y / scale) as f32;
    match touch.phase {
        TouchPhase::Started => PointerInput::Down { id, x, y },
        TouchPhase::Moved => PointerInput::Move { id, x, y },
        TouchPhase::Ended | TouchPhase::Cancelled => PointerInput::Up { id },
    }
}

fn handle_key(event: &KeyEvent, queue: &EventQueue, frame_loop: &FrameLoop) {
    if event.state != ElementState::Pressed {
        return;
    }
    let step = |axis, delta| queue.push(AppEvent::FrequencyStep(axis, delta));
    match &event.logical_key {
        Key::Named(NamedKey::ArrowRight) => step(FrequencyAxis::X, FREQUENCY_KEY_STEP),
        Key::Named(NamedKey::ArrowLeft) => step(FrequencyAxis::X, -FREQUENCY_KEY_STEP),
        Key::Named(NamedKey::ArrowUp) => step(FrequencyAxis::Y, FREQUENCY_KEY_STEP),
        Key::Named(NamedKey::ArrowDown) => step(FrequencyAxis::Y, -FREQUENCY_KEY_STEP),
        Key::Named(NamedKey::Escape) => frame_loop.stop_handle().stop(),
        Key::Character(c) if c.eq_ignore_ascii_case("r") => {
            queue.push(AppEvent::RegenerateSpikes)
        }
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut config = SceneConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        config.texture_path = path;
    }

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title("Spike plane (native)")
        .with_inner_size(LogicalSize::new(800.0, 600.0))
        .build(&event_loop)
        .context("creating window")?;

    let ctx = AppContext::new(&config, viewport_of(&window));
    let queue = ctx.events();
    let mut gpu = pollster::block_on(GpuState::new(&window, &ctx.viewport, &ctx.geometry))
        .context("initializing GPU")?;

    match load_texture(&config.texture_path) {
        Ok(image) => queue.push(AppEvent::TextureLoaded(image)),
        Err(e) => log::warn!("[texture] {:#}; rendering with placeholder", e),
    }

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    let mut pointer = PointerTracker::default();
    let mut app = Some(ctx);
    let window = &window;

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| {
        let Some(ctx) = app.as_mut() else {
            elwt.exit();
            return;
        };
        let scale = window.scale_factor();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => frame_loop.stop_handle().stop(),
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                    queue.push(AppEvent::Resized(viewport_of(window)));
                }
                WindowEvent::CursorMoved { position, .. } => {
                    pointer.cursor = position;
                    if pointer.pressed {
                        let (x, y) = pointer.logical(scale);
                        queue.push(AppEvent::Pointer(PointerInput::Move {
                            id: MOUSE_POINTER_ID,
                            x,
                            y,
                        }));
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    pointer.pressed = state == ElementState::Pressed;
                    let (x, y) = pointer.logical(scale);
                    let input = if pointer.pressed {
                        PointerInput::Down {
                            id: MOUSE_POINTER_ID,
                            x,
                            y,
                        }
                    } else {
                        PointerInput::Up {
                            id: MOUSE_POINTER_ID,
                        }
                    };
                    queue.push(AppEvent::Pointer(input));
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports positive y for scrolling away from the user
                    let delta_y = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                        MouseScrollDelta::PixelDelta(p) => -(p.y / scale) as f32,
                    };
                    queue.push(AppEvent::Pointer(PointerInput::Wheel { delta_y }));
                }
                WindowEvent::Touch(touch) => {
                    queue.push(AppEvent::Pointer(touch_input(&touch, scale)));
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    handle_key(&event, &queue, &frame_loop);
                }
                WindowEvent::RedrawRequested => {
                    // Transient surface failures are skipped inside the renderer
                    if let Err(e) = ctx.frame(Instant::now(), &mut gpu) {
                        log::error!("{:#}", e);
                        frame_loop.stop_handle().stop();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if frame_loop.should_continue() {
                    window.request_redraw();
                } else if let Some(ctx) = app.take() {
                    ctx.shutdown(&mut frame_loop);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
