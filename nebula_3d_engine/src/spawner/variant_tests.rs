use super::*;
use crate::nebula3d::Error;
use glam::Vec3;

// ============================================================================
// Primitive shapes
// ============================================================================

#[test]
fn test_triangle_positions() {
    let source = SpawnerSource::primitive(PrimitiveShape::Triangle);
    let positions = source.generate_positions();
    assert_eq!(positions, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_quad_is_two_triangles() {
    let source = SpawnerSource::primitive(PrimitiveShape::Quad);
    assert_eq!(source.generate_positions().len(), 6 * 3);
}

#[test]
fn test_cube_is_36_vertices() {
    let source = SpawnerSource::primitive(PrimitiveShape::Cube);
    let positions = source.generate_positions();
    assert_eq!(positions.len(), 36 * 3);
    // All corners on the unit cube
    assert!(positions.iter().all(|&c| c == 0.5 || c == -0.5));
}

#[test]
fn test_primitive_tex_coords_match_vertex_count() {
    for shape in [PrimitiveShape::Triangle, PrimitiveShape::Quad, PrimitiveShape::Cube] {
        let source = SpawnerSource::primitive(shape);
        let positions = source.generate_positions();
        let uv = source.generate_tex_coords(&positions);
        assert_eq!(uv.len() / 2, positions.len() / 3, "shape {:?}", shape);
    }
}

// ============================================================================
// Normals
// ============================================================================

#[test]
fn test_triangle_normals_point_along_z() {
    let source = SpawnerSource::primitive(PrimitiveShape::Triangle);
    let positions = source.generate_positions();
    let normals = source.generate_normals(&positions);

    assert_eq!(normals.len(), positions.len());
    for n in normals.chunks_exact(3) {
        assert_eq!(n, &[0.0, 0.0, 1.0]);
    }
}

#[test]
fn test_cube_normals_are_unit_length() {
    let source = SpawnerSource::primitive(PrimitiveShape::Cube);
    let positions = source.generate_positions();
    let normals = source.generate_normals(&positions);

    for n in normals.chunks_exact(3) {
        let len = Vec3::new(n[0], n[1], n[2]).length();
        assert!((len - 1.0).abs() < 1e-6);
    }
}

// ============================================================================
// Model variant
// ============================================================================

#[test]
fn test_model_flattens_indices() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    let source = SpawnerSource::model(positions, Some(vec![0, 1, 2, 1, 3, 2])).unwrap();

    let flat = source.generate_positions();
    assert_eq!(flat.len(), 6 * 3);
    assert_eq!(&flat[0..3], &[0.0, 0.0, 0.0]);
    assert_eq!(&flat[9..12], &[1.0, 0.0, 0.0]);
}

#[test]
fn test_model_without_indices() {
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    let source = SpawnerSource::model(positions, None).unwrap();
    assert_eq!(source.generate_positions().len(), 9);
}

#[test]
fn test_model_empty_positions_fails() {
    let result = SpawnerSource::model(vec![], None);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_model_ragged_triangle_list_fails() {
    let result = SpawnerSource::model(vec![Vec3::ZERO, Vec3::X], None);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_model_index_out_of_range_fails() {
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    let result = SpawnerSource::model(positions, Some(vec![0, 1, 3]));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_model_tex_coords_normalized() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
    ];
    let source = SpawnerSource::model(positions, None).unwrap();
    let flat = source.generate_positions();
    let uv = source.generate_tex_coords(&flat);

    assert_eq!(uv, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
}

// ============================================================================
// Render parameters
// ============================================================================

#[test]
fn test_render_params_are_triangles() {
    let source = SpawnerSource::primitive(PrimitiveShape::Cube);
    let (primitive, count) = source.render_params(36);
    assert_eq!(primitive, crate::view::DrawingPrimitive::Triangles);
    assert_eq!(count, 36);
}
