//! Tests for the cylinder strip generator.

use super::*;
use crate::bounds::BoundsMode;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use config::constants::DEFAULT_RADIAL_SEGMENTS;

fn strip(points: Vec<Vec3>, radius: f64, segments: u32, smooth: bool) -> MeshData {
    let params = StripParams::new(points, radius, segments, smooth);
    generate_cylinder_strip(&params, &MeshConfig::default()).unwrap()
}

fn vertical(segments: u32, smooth: bool) -> MeshData {
    strip(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)], 1.0, segments, smooth)
}

/// Flat normal of each quad recomputed from the stored positions.
fn flat_normals(mesh: &MeshData) -> Vec<Vec3> {
    mesh.vertices
        .chunks_exact(4)
        .map(|q| {
            let (p0, p1, p2) = (q[0].position, q[1].position, q[2].position);
            (p0 - p2).cross(p1 - p2).normalize()
        })
        .collect()
}

fn assert_vec_eq(a: Vec3, b: Vec3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
}

#[test]
fn counts_scale_with_points_and_segments() {
    for (m, n) in [(2usize, 3u32), (3, 8), (5, 16)] {
        let points = (0..m).map(|i| Vec3::new(i as f64, (i * i) as f64, 2.0 * i as f64)).collect();
        let mesh = strip(points, 0.5, n, true);
        let n = n as usize;
        assert_eq!(mesh.vertex_count(), 4 * n * (m - 1));
        assert_eq!(mesh.indices.len(), 6 * n * (m - 1));
        assert!(mesh.validate());
    }
}

#[test]
fn vertical_segment_scenario() {
    let mesh = vertical(4, false);
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.indices.len(), 24);
    assert_eq!(mesh.bounds.min, Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 11.0));

    assert_vec_eq(mesh.vertices[0].position, Vec3::new(1.0, 0.0, 0.0));
    assert_vec_eq(mesh.vertices[1].position, Vec3::new(0.0, 1.0, 0.0));
    assert_vec_eq(mesh.vertices[2].position, Vec3::new(0.0, 1.0, 10.0));
    assert_vec_eq(mesh.vertices[3].position, Vec3::new(1.0, 0.0, 10.0));

    let diagonal = Vec3::new(1.0, 1.0, 0.0).normalize();
    assert_vec_eq(mesh.vertices[0].normal, diagonal);
    assert_eq!(&mesh.indices[..6], &[3, 2, 0, 2, 1, 0]);
}

/// Rings stay perpendicular to the segment at the given radius, whatever
/// the segment direction.
#[test]
fn rings_are_perpendicular_to_segment() {
    let segments = [
        (Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)),
        (Vec3::ZERO, Vec3::new(0.0, -5.0, 0.0)),
        (Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -1.0, 7.0)),
        (Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
    ];
    for (start, end) in segments {
        let mesh = strip(vec![start, end], 2.0, 12, false);
        let axis = (end - start).normalize();
        for quad in mesh.vertices.chunks_exact(4) {
            for v in &quad[..2] {
                let radial = v.position - start;
                assert_abs_diff_eq!(radial.dot(axis), 0.0, epsilon = 1e-9);
                assert_relative_eq!(radial.length(), 2.0, epsilon = 1e-9);
            }
            for v in &quad[2..] {
                assert_abs_diff_eq!((v.position - end).dot(axis), 0.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn flat_shading_uses_face_normal() {
    let mesh = strip(
        vec![Vec3::ZERO, Vec3::new(3.0, 4.0, 5.0), Vec3::new(6.0, 4.0, 0.0)],
        1.5,
        7,
        false,
    );
    for (quad, flat) in mesh.vertices.chunks_exact(4).zip(flat_normals(&mesh)) {
        for v in quad {
            assert_vec_eq(v.normal, flat);
        }
    }
}

/// Flat normals point away from the segment axis.
#[test]
fn normals_face_outward() {
    let start = Vec3::new(-2.0, 1.0, 0.0);
    let end = Vec3::new(3.0, 1.0, 4.0);
    let mesh = strip(vec![start, end], 1.0, 9, false);
    let axis = (end - start).normalize();
    for quad in mesh.vertices.chunks_exact(4) {
        let normal = quad[0].normal;
        let mid = (quad[0].position + quad[1].position) / 2.0 - start;
        assert!(normal.dot(mid) > 0.0);
        assert_abs_diff_eq!(normal.dot(axis), 0.0, epsilon = 1e-9);
    }
}

/// Shared-edge vertices get the average of the two adjacent face normals,
/// including across the seam between the last and first quad.
#[test]
fn smoothing_blends_adjacent_faces() {
    let n = 6;
    let flat = flat_normals(&vertical(n, false));
    let smooth = vertical(n, true);
    let n = n as usize;

    for (k, quad) in smooth.vertices.chunks_exact(4).enumerate() {
        let right = (flat[k] + flat[(k + 1) % n]).normalize();
        let left = (flat[k] + flat[(k + n - 1) % n]).normalize();
        assert_vec_eq(quad[1].normal, right);
        assert_vec_eq(quad[2].normal, right);
        assert_vec_eq(quad[0].normal, left);
        assert_vec_eq(quad[3].normal, left);
        assert!((quad[1].normal - flat[k]).length() > 1e-3);
    }
}

#[test]
fn smoothing_matches_across_shared_edge() {
    let mesh = vertical(8, true);
    let quads: Vec<_> = mesh.vertices.chunks_exact(4).collect();
    for k in 0..quads.len() {
        let next = quads[(k + 1) % quads.len()];
        assert_vec_eq(quads[k][1].normal, next[0].normal);
        assert_vec_eq(quads[k][1].position, next[0].position);
    }
}

#[test]
fn tangents_follow_ring_edge() {
    let mesh = vertical(5, false);
    for quad in mesh.vertices.chunks_exact(4) {
        let expected = (quad[0].position - quad[1].position).normalize();
        for v in quad {
            assert_vec_eq(v.tangent, expected);
            assert_abs_diff_eq!(v.tangent.dot(v.normal), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn uvs_wrap_circumference() {
    let n = 4;
    let mesh = vertical(n, false);
    for (k, quad) in mesh.vertices.chunks_exact(4).enumerate() {
        let u0 = 1.0 - k as f64 / n as f64;
        let u1 = 1.0 - (k + 1) as f64 / n as f64;
        assert_eq!(quad[0].uv, Vec2::new(u0, 1.0));
        assert_eq!(quad[1].uv, Vec2::new(u1, 1.0));
        assert_eq!(quad[2].uv, Vec2::new(u1, 0.0));
        assert_eq!(quad[3].uv, Vec2::new(u0, 0.0));
    }
}

/// The right-handed cross product of each triangle points away from the
/// face normal, same as the cube.
#[test]
fn winding_matches_cube_convention() {
    let mesh = strip(
        vec![Vec3::ZERO, Vec3::new(0.0, 5.0, 5.0), Vec3::new(5.0, 5.0, 5.0)],
        1.0,
        10,
        false,
    );
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (
            &mesh.vertices[a as usize],
            &mesh.vertices[b as usize],
            &mesh.vertices[c as usize],
        );
        let face = (b.position - a.position).cross(c.position - a.position);
        assert!(face.dot(a.normal) < 0.0);
    }
}

#[test]
fn regenerating_is_identical() {
    let params = StripParams::new(
        vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 6.0)],
        0.75,
        11,
        true,
    );
    let config = MeshConfig::default();
    let first = generate_cylinder_strip(&params, &config).unwrap();

    let mut cache = CrossSectionCache::new();
    let mut mesh = MeshData::allocate(params.buffer_sizes(&config));
    fill_cylinder_strip(&params, &mut cache, &config, &mut mesh).unwrap();
    let generation = cache.generation();
    fill_cylinder_strip(&params, &mut cache, &config, &mut mesh).unwrap();

    assert_eq!(mesh, first);
    assert_eq!(cache.generation(), generation);
}

#[test]
fn too_few_points_or_segments_is_empty() {
    let one_point = strip(vec![Vec3::ONE], 1.0, 8, true);
    assert!(one_point.is_empty());
    assert_eq!(one_point.bounds, Default::default());

    assert!(strip(Vec::new(), 1.0, 8, true).is_empty());
    assert!(vertical(2, true).is_empty());
}

#[test]
fn rejects_degenerate_input() {
    let config = MeshConfig::default();
    let cases = [
        StripParams::new(vec![Vec3::ZERO, Vec3::ZERO], 1.0, 8, true),
        StripParams::new(vec![Vec3::ZERO, Vec3::Z], 0.0, 8, true),
        StripParams::new(vec![Vec3::ZERO, Vec3::Z], -1.0, 8, true),
        StripParams::new(vec![Vec3::ZERO, Vec3::splat(f64::NAN)], 1.0, 8, true),
        StripParams::new(vec![Vec3::ZERO, Vec3::Z], f64::INFINITY, 8, true),
    ];
    for params in cases {
        let err = generate_cylinder_strip(&params, &config).unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }), "{params:?}");
    }
}

#[test]
fn bounds_follow_config_mode() {
    let points = vec![Vec3::new(5.0, 5.0, 5.0), Vec3::new(5.0, 5.0, 15.0)];
    let params = StripParams::new(points, 1.0, 6, false);

    let tight = generate_cylinder_strip(&params, &MeshConfig::default()).unwrap();
    assert_eq!(tight.bounds.min, Vec3::splat(4.0));

    let anchored_config = MeshConfig::new(1.0e-8, 6, BoundsMode::OriginAnchored).unwrap();
    let anchored = generate_cylinder_strip(&params, &anchored_config).unwrap();
    assert_eq!(anchored.bounds.min, Vec3::splat(-1.0));
    assert_eq!(anchored.bounds.max, Vec3::new(6.0, 6.0, 16.0));
}

#[test]
fn params_deserialize_with_defaults() {
    let params: StripParams = serde_json::from_str(r#"{"points":[[0,0,0],[0,0,1]]}"#).unwrap();
    assert_eq!(params.radius, DEFAULT_STRIP_RADIUS);
    assert_eq!(params.radial_segments, None);
    assert_eq!(
        params.segment_count(&MeshConfig::default()),
        DEFAULT_RADIAL_SEGMENTS
    );
    assert!(params.smooth_normals);
}

/// A missing segment count comes from the configuration, not a constant.
#[test]
fn missing_segment_count_uses_config_default() {
    let params: StripParams =
        serde_json::from_str(r#"{"points":[[0,0,0],[0,0,1]],"radius":1.0}"#).unwrap();
    let config = MeshConfig::new(1.0e-8, 5, BoundsMode::Tight).unwrap();
    let mesh = generate_cylinder_strip(&params, &config).unwrap();
    assert_eq!(mesh.vertex_count(), 4 * 5);
    assert_eq!(mesh.indices.len(), 6 * 5);
}

/// Tubes far thinner than the tolerance still get unit normals and tangents.
#[test]
fn thin_tubes_keep_unit_normals_and_tangents() {
    let cases = [
        (vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)], 1e-4),
        (vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)], 1e-7),
        (vec![Vec3::ZERO, Vec3::new(1e-3, 0.0, 0.0), Vec3::new(1e-3, 1e-3, 0.0)], 1e-5),
    ];
    for (points, radius) in cases {
        for smooth in [false, true] {
            let mesh = strip(points.clone(), radius, 8, smooth);
            for v in &mesh.vertices {
                assert_relative_eq!(v.normal.length(), 1.0, epsilon = 1e-9);
                assert_relative_eq!(v.tangent.length(), 1.0, epsilon = 1e-9);
            }
        }
    }
}

/// The tolerance is compared against the squared segment length.
#[test]
fn segment_tolerance_is_squared_length() {
    let config = MeshConfig::default();
    let short = StripParams::new(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 5e-5)], 1.0, 8, false);
    assert!(5e-5 > config.tolerance);
    assert!(short.validate(config.tolerance).is_err());

    let long_enough = StripParams::new(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 5e-4)], 1.0, 8, false);
    assert!(long_enough.validate(config.tolerance).is_ok());
}
