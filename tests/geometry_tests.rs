// Host-side tests for the plane mesh and its spike attribute.

use plane_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_plane(seed: u64) -> PlaneGeometry {
    let mut rng = StdRng::seed_from_u64(seed);
    PlaneGeometry::new(
        PLANE_WIDTH,
        PLANE_HEIGHT,
        PLANE_SEGMENTS,
        PLANE_SEGMENTS,
        &mut rng,
    )
}

#[test]
fn grid_has_expected_vertex_and_index_counts() {
    let g = default_plane(1);
    assert_eq!(g.vertex_count(), 33 * 33);
    assert_eq!(g.indices.len(), 32 * 32 * 6);
    assert_eq!(g.spikes.len(), g.vertex_count());
    let max_index = *g.indices.iter().max().unwrap();
    assert!((max_index as usize) < g.vertex_count());
}

#[test]
fn grid_is_centred_and_faces_positive_z() {
    let g = default_plane(2);
    for v in &g.vertices {
        assert!(v.position[0] >= -0.5 - 1e-6 && v.position[0] <= 0.5 + 1e-6);
        assert!(v.position[1] >= -0.5 - 1e-6 && v.position[1] <= 0.5 + 1e-6);
        assert_eq!(v.position[2], 0.0);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
    // First vertex is the top-left corner with uv (0, 0)
    let first = g.vertices[0];
    assert_eq!(first.position, [-0.5, 0.5, 0.0]);
    assert_eq!(first.uv, [0.0, 0.0]);
    let last = g.vertices[g.vertex_count() - 1];
    assert_eq!(last.position, [0.5, -0.5, 0.0]);
    assert_eq!(last.uv, [1.0, 1.0]);
}

#[test]
fn spikes_are_unit_interval() {
    let g = default_plane(3);
    assert!(g.spikes.iter().all(|s| (0.0..1.0).contains(s)));
    // A thousand uniform draws should not all collapse to one value
    let min = g.spikes.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = g.spikes.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min > 0.5);
}

#[test]
fn same_seed_gives_same_spikes() {
    assert_eq!(default_plane(42).spikes, default_plane(42).spikes);
}

#[test]
fn regeneration_draws_fresh_values() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut g = PlaneGeometry::new(1.0, 1.0, 32, 32, &mut rng);
    let before = g.spikes.clone();
    let vertices = g.vertices.clone();
    g.regenerate_spikes(&mut rng);
    assert_eq!(g.spikes.len(), before.len());
    assert_ne!(g.spikes, before);
    assert!(g.spikes.iter().all(|s| (0.0..1.0).contains(s)));
    // The grid itself is untouched
    assert_eq!(g.vertices, vertices);
}

#[test]
fn zero_segments_fall_back_to_one_quad() {
    let mut rng = StdRng::seed_from_u64(5);
    let g = PlaneGeometry::new(2.0, 1.0, 0, 0, &mut rng);
    assert_eq!(g.width_segments, 1);
    assert_eq!(g.height_segments, 1);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.indices, vec![0, 2, 1, 2, 3, 1]);
}
