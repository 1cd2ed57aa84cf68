use super::*;
use crate::program::{GraphicsProgram, ProgramHandle};
use crate::spawner::{PrimitiveShape, SpawnerSource, ViewSpawner};
use glam::{Mat4, Vec3};
use std::sync::{Arc, Mutex};

fn spawn_view() -> View {
    let mut spawner = ViewSpawner::new(
        "basic",
        Arc::new(GraphicsProgram::new("basic", ProgramHandle(1))),
        SpawnerSource::primitive(PrimitiveShape::Triangle),
    );
    spawner.create_vertex_data().unwrap();
    spawner.create().unwrap()
}

#[test]
fn test_transform_defaults_to_identity() {
    let view = spawn_view();
    assert_eq!(*view.transform(), Mat4::IDENTITY);
}

#[test]
fn test_set_transform() {
    let mut view = spawn_view();
    let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    view.set_transform(transform);
    assert_eq!(*view.transform(), transform);
}

#[test]
fn test_camera_binding_is_weak() {
    let mut view = spawn_view();
    assert!(view.camera().is_none());

    let camera = Arc::new(Mutex::new(Camera::default()));
    view.bind_to_camera(&camera);
    assert!(view.camera().is_some());

    // Dropping the camera invalidates the binding
    drop(camera);
    assert!(view.camera().is_none());
}

#[test]
fn test_unbind_from_camera() {
    let mut view = spawn_view();
    let camera = Arc::new(Mutex::new(Camera::default()));
    view.bind_to_camera(&camera);
    view.unbind_from_camera();
    assert!(view.camera().is_none());
}
