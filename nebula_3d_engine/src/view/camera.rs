//! Camera — passive matrix container.
//!
//! The camera computes nothing. The caller is responsible for
//! computing and setting the view and projection matrices; views only
//! keep a weak binding to a camera they are rendered through.

use glam::Mat4;

/// Low-level camera. A passive data container — computes nothing.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera with the given matrices
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    /// View matrix (inverse of the camera's world transform)
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic)
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Replace the view matrix
    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.view_matrix = view;
    }

    /// Replace the projection matrix
    pub fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection_matrix = projection;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
