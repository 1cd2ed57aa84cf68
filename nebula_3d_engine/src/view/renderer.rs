//! Per-view draw description.
//!
//! A `ViewRenderer` carries everything an external renderer needs to
//! draw one view: the primitive kind, how many vertices to render, and
//! the ordered list of graphics programs to execute. The actual GPU
//! submission happens in a backend, not here.

/// Primitive kind used to interpret the vertex stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingPrimitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Draw parameters of one view.
///
/// Draw calls are listed by program name, in the order the programs
/// were registered on the spawner.
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    drawing_primitive: DrawingPrimitive,
    nb_vertices_to_render: u32,
    draw_calls: Vec<String>,
}

impl ViewRenderer {
    /// Create an empty draw description
    pub fn new() -> Self {
        Self {
            drawing_primitive: DrawingPrimitive::Triangles,
            nb_vertices_to_render: 0,
            draw_calls: Vec::new(),
        }
    }

    /// Set the primitive kind
    pub fn set_drawing_primitive(&mut self, primitive: DrawingPrimitive) {
        self.drawing_primitive = primitive;
    }

    /// Primitive kind
    pub fn drawing_primitive(&self) -> DrawingPrimitive {
        self.drawing_primitive
    }

    /// Set the number of vertices to render
    pub fn set_nb_vertices_to_render(&mut self, count: u32) {
        self.nb_vertices_to_render = count;
    }

    /// Number of vertices to render
    pub fn nb_vertices_to_render(&self) -> u32 {
        self.nb_vertices_to_render
    }

    /// Append a draw call for a program
    pub fn push_draw_call(&mut self, program_name: impl Into<String>) {
        self.draw_calls.push(program_name.into());
    }

    /// Program names in draw order
    pub fn draw_calls(&self) -> &[String] {
        &self.draw_calls
    }
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
