use plane_core::{PlaneGeometry, Renderer, TextureImage, UniformBlock, Viewport};
use thiserror::Error;
use wgpu::util::DeviceExt;

mod helpers;
mod plane;

pub use helpers::{select_surface_formats, surface_error_action, SurfaceAction, SurfaceFormats};
use plane::{create_plane_resources, PlaneResources};

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    plane: PlaneResources,
    bind_group: wgpu::BindGroup,
    // Keep the sampled texture alive alongside its bind group
    _color_tex: wgpu::Texture,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Acquire a device for `target` and build the plane pipeline. The
    /// placeholder texture is bound until `upload_texture` is called.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        viewport: &Viewport,
        geometry: &PlaneGeometry,
    ) -> Result<Self, GpuError> {
        let (width, height) = viewport.physical_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let formats =
            helpers::select_surface_formats(&caps.formats).ok_or(GpuError::UnsupportedSurface)?;
        let alpha_mode = *caps
            .alpha_modes
            .first()
            .ok_or(GpuError::UnsupportedSurface)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: formats.surface,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: formats.extra_view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?}",
            width,
            height,
            formats.surface,
            formats.view
        );

        let plane = create_plane_resources(&device, formats.view, geometry);
        let (color_tex, color_view) =
            helpers::upload_color_texture(&device, &queue, &TextureImage::placeholder());
        let bind_group = plane.bind_group(&device, &color_view);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format: formats.view,
            plane,
            bind_group,
            _color_tex: color_tex,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self._depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn draw(&mut self, uniforms: &UniformBlock) -> Result<(), GpuError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e) => {
                return match helpers::surface_error_action(&e) {
                    SurfaceAction::Reconfigure => {
                        log::warn!("[gpu] surface {:?}, reconfiguring", e);
                        self.reconfigure();
                        Ok(())
                    }
                    SurfaceAction::Skip => {
                        log::warn!("[gpu] dropped frame: {}", e);
                        Ok(())
                    }
                    SurfaceAction::Fatal => Err(e.into()),
                };
            }
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        self.queue
            .write_buffer(&self.plane.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("plane_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.plane.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.plane.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.plane.spike_buffer.slice(..));
            rpass.set_index_buffer(self.plane.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.plane.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> Renderer for GpuState<'a> {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.physical_size();
        self.resize_if_needed(w, h);
    }

    fn upload_spikes(&mut self, spikes: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(spikes);
        if bytes.len() as u64 == self.plane.spike_buffer.size() {
            self.queue.write_buffer(&self.plane.spike_buffer, 0, bytes);
        } else {
            log::warn!(
                "[gpu] spike count changed ({} bytes), recreating buffer",
                bytes.len()
            );
            self.plane.spike_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("plane_spikes"),
                    contents: bytes,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
        }
    }

    fn upload_texture(&mut self, image: &TextureImage) {
        let max = self.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            log::warn!(
                "[gpu] texture {}x{} exceeds device limit {}, keeping placeholder",
                image.width,
                image.height,
                max
            );
            return;
        }
        let (tex, view) = helpers::upload_color_texture(&self.device, &self.queue, image);
        self.bind_group = self.plane.bind_group(&self.device, &view);
        self._color_tex = tex;
    }

    fn render(&mut self, uniforms: &UniformBlock) -> anyhow::Result<()> {
        self.draw(uniforms)
            .map_err(|e| anyhow::anyhow!(format!("render error: {e}")))
    }
}
