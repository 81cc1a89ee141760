//! Subdivided plane mesh with a random per-vertex `spike` attribute.

use rand::Rng;

/// Interleaved per-vertex layout uploaded to vertex buffer slot 0.
///
/// The `spike` attribute is kept out of this struct and lives in its own
/// buffer so it can be regenerated without touching the grid.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub spikes: Vec<f32>,
}

impl PlaneGeometry {
    /// Build a `width x height` grid in the XY plane, centred on the origin and
    /// facing +Z. Segment counts of zero are treated as one.
    pub fn new<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
        rng: &mut R,
    ) -> Self {
        let grid_x = width_segments.max(1);
        let grid_y = height_segments.max(1);
        let grid_x1 = grid_x + 1;
        let grid_y1 = grid_y + 1;
        let segment_width = width / grid_x as f32;
        let segment_height = height / grid_y as f32;
        let half_w = width * 0.5;
        let half_h = height * 0.5;

        let mut vertices = Vec::with_capacity((grid_x1 * grid_y1) as usize);
        for iy in 0..grid_y1 {
            let y = iy as f32 * segment_height - half_h;
            for ix in 0..grid_x1 {
                let x = ix as f32 * segment_width - half_w;
                vertices.push(MeshVertex {
                    position: [x, -y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    // v grows downward to match texture row order
                    uv: [ix as f32 / grid_x as f32, iy as f32 / grid_y as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = ix + grid_x1 * iy;
                let b = ix + grid_x1 * (iy + 1);
                let c = (ix + 1) + grid_x1 * (iy + 1);
                let d = (ix + 1) + grid_x1 * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        let mut geometry = Self {
            width,
            height,
            width_segments: grid_x,
            height_segments: grid_y,
            vertices,
            indices,
            spikes: Vec::new(),
        };
        geometry.regenerate_spikes(rng);
        geometry
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Redraw every spike independently from `rng`, uniform in [0, 1).
    pub fn regenerate_spikes<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self.vertices.len();
        self.spikes.clear();
        self.spikes.reserve_exact(count);
        self.spikes.extend((0..count).map(|_| rng.gen::<f32>()));
    }
}
