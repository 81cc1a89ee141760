use plane_core::TextureImage;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const COLOR_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Surface storage format plus the format frames are rendered through.
///
/// The shader outputs linear colour, so the render view is always the sRGB
/// variant when one exists. WebGPU canvases only expose non-sRGB storage; in
/// that case the sRGB view is registered as an extra view format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub surface: wgpu::TextureFormat,
    pub view: wgpu::TextureFormat,
}

impl SurfaceFormats {
    /// Extra entries for `SurfaceConfiguration::view_formats`.
    pub fn extra_view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view == self.surface {
            Vec::new()
        } else {
            vec![self.view]
        }
    }
}

/// Pick from the formats a surface reports. Prefers native sRGB storage,
/// then 8-bit BGRA/RGBA with an sRGB view, then whatever comes first.
pub fn select_surface_formats(available: &[wgpu::TextureFormat]) -> Option<SurfaceFormats> {
    use wgpu::TextureFormat as F;
    if let Some(&srgb) = available
        .iter()
        .find(|f| matches!(f, F::Bgra8UnormSrgb | F::Rgba8UnormSrgb))
    {
        return Some(SurfaceFormats {
            surface: srgb,
            view: srgb,
        });
    }
    let surface = available
        .iter()
        .copied()
        .find(|f| matches!(f, F::Bgra8Unorm | F::Rgba8Unorm))
        .or_else(|| available.first().copied())?;
    Some(SurfaceFormats {
        surface,
        view: surface.add_srgb_suffix(),
    })
}

/// What the draw path does with a failed frame acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceAction {
    Reconfigure,
    Skip,
    Fatal,
}

/// Only running out of memory ends the loop; every other acquisition
/// failure drops the frame.
pub fn surface_error_action(err: &wgpu::SurfaceError) -> SurfaceAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceAction::Fatal,
        _ => SurfaceAction::Skip,
    }
}

pub fn create_texture_device(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    create_texture_device(
        device,
        "depth_tex",
        width,
        height,
        DEPTH_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}

/// Create a sampled RGBA8 texture and fill it from `image`.
pub fn upload_color_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &TextureImage,
) -> (wgpu::Texture, wgpu::TextureView) {
    let (tex, view) = create_texture_device(
        device,
        "color_tex",
        image.width,
        image.height,
        COLOR_TEXTURE_FORMAT,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        },
    );
    (tex, view)
}
