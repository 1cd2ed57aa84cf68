//! View — a drawable unit manufactured by a spawner.
//!
//! Every view created by one spawner shares that spawner's buffer
//! store: the view references the data, it never copies it. Mutating a
//! channel through the spawner (e.g. recoloring) is observed by all of
//! its views, created before or after the mutation.

use std::sync::{Arc, Mutex, Weak};
use glam::Mat4;
use crate::spawner::SpawnerData;
use super::camera::Camera;
use super::renderer::ViewRenderer;

/// A drawable unit: transform, optional camera binding, draw
/// description, and a shared reference to the producing spawner's data.
///
/// Owned by the caller once created. The shared data outlives the
/// spawner if the spawner is dropped first (views keep it alive).
pub struct View {
    transform: Mat4,
    camera: Option<Weak<Mutex<Camera>>>,
    renderer: ViewRenderer,
    data: Arc<Mutex<SpawnerData>>,
}

impl View {
    /// Create a view (crate-internal: only spawners create views)
    pub(crate) fn new(data: Arc<Mutex<SpawnerData>>, renderer: ViewRenderer) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            camera: None,
            renderer,
            data,
        }
    }

    /// World transform
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Replace the world transform
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Draw description consumed by an external renderer
    pub fn renderer(&self) -> &ViewRenderer {
        &self.renderer
    }

    /// Bind this view to a camera.
    ///
    /// The binding is weak: the view never keeps the camera alive, and
    /// `camera()` returns `None` once the camera is dropped.
    pub fn bind_to_camera(&mut self, camera: &Arc<Mutex<Camera>>) {
        self.camera = Some(Arc::downgrade(camera));
    }

    /// Remove the camera binding
    pub fn unbind_from_camera(&mut self) {
        self.camera = None;
    }

    /// The bound camera, if it is still alive
    pub fn camera(&self) -> Option<Arc<Mutex<Camera>>> {
        self.camera.as_ref().and_then(Weak::upgrade)
    }

    /// The spawner data this view aliases (buffers, tables, programs)
    pub fn shared_data(&self) -> &Arc<Mutex<SpawnerData>> {
        &self.data
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
