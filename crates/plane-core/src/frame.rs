//! Application context and the per-frame step shared by every host.

use crate::camera::PerspectiveCamera;
use crate::clock::Clock;
use crate::constants::*;
use crate::controls::{ControlsConfig, OrbitControls};
use crate::events::{AppEvent, EventQueue};
use crate::geometry::PlaneGeometry;
use crate::texture::TextureImage;
use crate::uniforms::{PlaneUniforms, Rgb, UniformBlock};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

/// The GPU side of a frame, implemented by the wgpu renderer and by test
/// doubles.
pub trait Renderer {
    /// Reconfigure the surface to the viewport's physical size.
    fn resize(&mut self, viewport: &Viewport);
    fn upload_spikes(&mut self, spikes: &[f32]);
    fn upload_texture(&mut self, image: &TextureImage);
    fn render(&mut self, uniforms: &UniformBlock) -> anyhow::Result<()>;
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub plane_size: Vec2,
    pub plane_segments: (u32, u32),
    pub plane_scale_y: f32,
    pub frequency: Vec2,
    pub base_color: Rgb,
    pub controls: ControlsConfig,
    pub texture_path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            plane_size: Vec2::new(PLANE_WIDTH, PLANE_HEIGHT),
            plane_segments: (PLANE_SEGMENTS, PLANE_SEGMENTS),
            plane_scale_y: PLANE_SCALE_Y,
            frequency: Vec2::from(DEFAULT_FREQUENCY),
            base_color: Rgb::SALMON,
            controls: ControlsConfig::default(),
            texture_path: TEXTURE_PATH.to_string(),
        }
    }
}

/// All mutable scene state, owned for the lifetime of the program and only
/// touched from the frame loop.
pub struct AppContext {
    pub geometry: PlaneGeometry,
    pub uniforms: PlaneUniforms,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub model: Mat4,
    clock: Clock,
    events: EventQueue,
    rng: StdRng,
}

impl AppContext {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    pub fn with_rng(config: &SceneConfig, viewport: Viewport, mut rng: StdRng) -> Self {
        let geometry = PlaneGeometry::new(
            config.plane_size.x,
            config.plane_size.y,
            config.plane_segments.0,
            config.plane_segments.1,
            &mut rng,
        );
        let camera = PerspectiveCamera::new(viewport.aspect());
        let controls = OrbitControls::new(&camera, config.controls);
        log::info!(
            "[scene] plane {}x{} segments={}x{} vertices={}",
            config.plane_size.x,
            config.plane_size.y,
            geometry.width_segments,
            geometry.height_segments,
            geometry.vertex_count()
        );
        Self {
            geometry,
            uniforms: PlaneUniforms::new(config.frequency, config.base_color),
            camera,
            controls,
            viewport,
            model: Mat4::from_scale(Vec3::new(1.0, config.plane_scale_y, 1.0)),
            clock: Clock::new(),
            events: EventQueue::new(),
            rng,
        }
    }

    /// Handle for host callbacks to enqueue input.
    pub fn events(&self) -> EventQueue {
        self.events.clone()
    }

    pub fn uniform_block(&self) -> UniformBlock {
        self.uniforms.pack(self.model, self.camera.view_projection())
    }

    fn apply_event<R: Renderer + ?Sized>(&mut self, event: AppEvent, renderer: &mut R) {
        match event {
            AppEvent::Resized(viewport) => {
                self.viewport = viewport;
                self.camera.set_aspect(viewport.aspect());
                renderer.resize(&viewport);
                let (w, h) = viewport.physical_size();
                log::info!(
                    "[viewport] resized to {}x{} ({}x{} px)",
                    viewport.width,
                    viewport.height,
                    w,
                    h
                );
            }
            AppEvent::Pointer(input) => {
                self.controls.handle_input(input, self.viewport.height as f32);
            }
            AppEvent::Frequency(axis, value) => {
                self.uniforms.set_frequency(axis, value);
            }
            AppEvent::FrequencyStep(axis, delta) => {
                self.uniforms.step_frequency(axis, delta);
            }
            AppEvent::RegenerateSpikes => {
                self.geometry.regenerate_spikes(&mut self.rng);
                renderer.upload_spikes(&self.geometry.spikes);
                log::info!("[scene] regenerated {} spikes", self.geometry.spikes.len());
            }
            AppEvent::TextureLoaded(image) => {
                renderer.upload_texture(&image);
                log::info!("[texture] uploaded {}x{}", image.width, image.height);
            }
        }
    }

    /// One iteration of the loop body: drain input, advance time, poll the
    /// controls and draw once.
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        now: Instant,
        renderer: &mut R,
    ) -> anyhow::Result<()> {
        for event in self.events.drain() {
            self.apply_event(event, renderer);
        }
        let elapsed = self.clock.elapsed(now);
        self.uniforms.advance(elapsed);
        self.controls.update(&mut self.camera);
        renderer.render(&self.uniform_block())
    }

    /// Release the scene. Stops `frame_loop` so no further frame is scheduled.
    pub fn shutdown(self, frame_loop: &mut FrameLoop) {
        frame_loop.stop_handle().stop();
        frame_loop.should_continue();
        log::info!("[scene] shut down after {:.2}s of animation", self.uniforms.time);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Cancellation flag checked before every reschedule.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    stop: StopHandle,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            stop: StopHandle::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Idle -> Running. Returns false if the loop already left Idle.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// Called after a frame completes: whether to schedule the next one.
    pub fn should_continue(&mut self) -> bool {
        if self.state == LoopState::Running && self.stop.is_stopped() {
            self.state = LoopState::Stopped;
            log::info!("[loop] stopped");
        }
        self.state == LoopState::Running
    }
}
