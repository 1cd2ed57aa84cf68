use super::*;
use glam::{Mat4, Vec3};

#[test]
fn test_default_is_identity() {
    let camera = Camera::default();
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
    assert_eq!(*camera.projection_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_view_projection_order() {
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    let projection = Mat4::perspective_rh(1.0, 16.0 / 9.0, 0.1, 100.0);
    let camera = Camera::new(view, projection);

    assert_eq!(camera.view_projection_matrix(), projection * view);
}

#[test]
fn test_setters() {
    let mut camera = Camera::default();
    let view = Mat4::from_translation(Vec3::X);
    camera.set_view_matrix(view);
    camera.set_projection_matrix(Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.0, 1.0));

    assert_eq!(*camera.view_matrix(), view);
    assert_ne!(*camera.projection_matrix(), Mat4::IDENTITY);
}
