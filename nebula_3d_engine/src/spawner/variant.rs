//! Spawner data sources.
//!
//! A `SpawnerSource` generates the vertex data a spawner owns. Variant
//! dispatch (tagged enum) replaces a virtual factory hierarchy: each
//! variant knows how to produce positions, derived normals, texture
//! coordinates, and the view's draw parameters.

use glam::{Vec2, Vec3};
use crate::error::Result;
use crate::engine_bail;
use crate::view::DrawingPrimitive;

// ===== PRIMITIVE VARIANT =====

/// Built-in procedural shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveShape {
    /// Single triangle {(0,0,0), (1,0,0), (0,1,0)}
    Triangle,
    /// Unit quad in the XY plane, two triangles
    Quad,
    /// Unit cube centered at the origin, 36 vertices
    Cube,
}

/// Procedural-shape data source
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveVariant {
    shape: PrimitiveShape,
}

impl PrimitiveVariant {
    pub fn new(shape: PrimitiveShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> PrimitiveShape {
        self.shape
    }

    fn positions(&self) -> Vec<f32> {
        match self.shape {
            PrimitiveShape::Triangle => vec![
                0.0, 0.0, 0.0,
                1.0, 0.0, 0.0,
                0.0, 1.0, 0.0,
            ],
            PrimitiveShape::Quad => vec![
                0.0, 0.0, 0.0,
                1.0, 0.0, 0.0,
                1.0, 1.0, 0.0,
                0.0, 0.0, 0.0,
                1.0, 1.0, 0.0,
                0.0, 1.0, 0.0,
            ],
            PrimitiveShape::Cube => cube_positions(),
        }
    }

    fn tex_coords(&self) -> Vec<f32> {
        const QUAD_UV: [f32; 12] = [
            0.0, 0.0,
            1.0, 0.0,
            1.0, 1.0,
            0.0, 0.0,
            1.0, 1.0,
            0.0, 1.0,
        ];

        match self.shape {
            PrimitiveShape::Triangle => vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            PrimitiveShape::Quad => QUAD_UV.to_vec(),
            PrimitiveShape::Cube => {
                // Same quad mapping on each of the 6 faces
                let mut out = Vec::with_capacity(6 * QUAD_UV.len());
                for _ in 0..6 {
                    out.extend_from_slice(&QUAD_UV);
                }
                out
            }
        }
    }
}

/// Unit cube as a non-indexed triangle list, outward winding
fn cube_positions() -> Vec<f32> {
    const CORNERS: [[f32; 3]; 8] = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    // Each face as 4 corner indices, counter-clockwise seen from outside
    const FACES: [[usize; 4]; 6] = [
        [4, 5, 6, 7], // +Z
        [1, 0, 3, 2], // -Z
        [5, 1, 2, 6], // +X
        [0, 4, 7, 3], // -X
        [7, 6, 2, 3], // +Y
        [0, 1, 5, 4], // -Y
    ];

    let mut out = Vec::with_capacity(36 * 3);
    for face in FACES {
        for idx in [face[0], face[1], face[2], face[0], face[2], face[3]] {
            out.extend_from_slice(&CORNERS[idx]);
        }
    }
    out
}

// ===== MODEL VARIANT =====

/// Pre-parsed mesh data source.
///
/// Takes positions (and optional triangle indices) produced by an
/// external importer; file parsing stays outside this crate. Indexed
/// input is flattened to a non-indexed triangle list at generation
/// time.
#[derive(Debug, Clone)]
pub struct ModelVariant {
    positions: Vec<Vec3>,
    indices: Option<Vec<u32>>,
}

impl ModelVariant {
    /// Wrap pre-parsed mesh data.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if positions are empty, the triangle
    ///   list is ragged, or an index is out of range
    pub fn new(positions: Vec<Vec3>, indices: Option<Vec<u32>>) -> Result<Self> {
        if positions.is_empty() {
            engine_bail!(InvalidConfiguration, "nebula3d::ModelVariant",
                "mesh has no positions");
        }

        match &indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    engine_bail!(InvalidConfiguration, "nebula3d::ModelVariant",
                        "index count {} is not a multiple of 3", indices.len());
                }
                if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
                    engine_bail!(InvalidConfiguration, "nebula3d::ModelVariant",
                        "index {} out of range for {} positions", bad, positions.len());
                }
            }
            None => {
                if positions.len() % 3 != 0 {
                    engine_bail!(InvalidConfiguration, "nebula3d::ModelVariant",
                        "vertex count {} is not a multiple of 3", positions.len());
                }
            }
        }

        Ok(Self { positions, indices })
    }

    fn positions(&self) -> Vec<f32> {
        match &self.indices {
            Some(indices) => {
                let mut out = Vec::with_capacity(indices.len() * 3);
                for &idx in indices {
                    out.extend_from_slice(&self.positions[idx as usize].to_array());
                }
                out
            }
            None => {
                let mut out = Vec::with_capacity(self.positions.len() * 3);
                for p in &self.positions {
                    out.extend_from_slice(&p.to_array());
                }
                out
            }
        }
    }

    /// Planar XY projection normalized over the mesh's bounding range
    fn tex_coords(positions: &[f32]) -> Vec<f32> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for v in positions.chunks_exact(3) {
            let p = Vec2::new(v[0], v[1]);
            min = min.min(p);
            max = max.max(p);
        }

        let extent = max - min;
        let mut out = Vec::with_capacity(positions.len() / 3 * 2);
        for v in positions.chunks_exact(3) {
            let p = Vec2::new(v[0], v[1]) - min;
            // Degenerate axis maps to the middle of the texture
            out.push(if extent.x > 0.0 { p.x / extent.x } else { 0.5 });
            out.push(if extent.y > 0.0 { p.y / extent.y } else { 0.5 });
        }
        out
    }
}

// ===== SPAWNER SOURCE =====

/// The data source a spawner was constructed with.
pub enum SpawnerSource {
    Primitive(PrimitiveVariant),
    Model(ModelVariant),
}

impl SpawnerSource {
    /// Procedural-shape source
    pub fn primitive(shape: PrimitiveShape) -> Self {
        SpawnerSource::Primitive(PrimitiveVariant::new(shape))
    }

    /// Pre-parsed mesh source
    pub fn model(positions: Vec<Vec3>, indices: Option<Vec<u32>>) -> Result<Self> {
        Ok(SpawnerSource::Model(ModelVariant::new(positions, indices)?))
    }

    /// Generate the raw position data (3 floats per vertex)
    pub fn generate_positions(&self) -> Vec<f32> {
        match self {
            SpawnerSource::Primitive(v) => v.positions(),
            SpawnerSource::Model(v) => v.positions(),
        }
    }

    /// Generate flat per-vertex normals from a triangle list
    pub fn generate_normals(&self, positions: &[f32]) -> Vec<f32> {
        let mut normals = Vec::with_capacity(positions.len());
        for tri in positions.chunks_exact(9) {
            let a = Vec3::new(tri[0], tri[1], tri[2]);
            let b = Vec3::new(tri[3], tri[4], tri[5]);
            let c = Vec3::new(tri[6], tri[7], tri[8]);
            let n = (b - a).cross(c - a).normalize_or_zero();
            for _ in 0..3 {
                normals.extend_from_slice(&n.to_array());
            }
        }
        normals
    }

    /// Generate 2D texture coordinates (2 floats per vertex)
    pub fn generate_tex_coords(&self, positions: &[f32]) -> Vec<f32> {
        match self {
            SpawnerSource::Primitive(v) => v.tex_coords(),
            SpawnerSource::Model(_) => ModelVariant::tex_coords(positions),
        }
    }

    /// Draw parameters for a view built over this source
    pub fn render_params(&self, vertex_count: u32) -> (DrawingPrimitive, u32) {
        // All current sources produce non-indexed triangle lists
        (DrawingPrimitive::Triangles, vertex_count)
    }
}

#[cfg(test)]
#[path = "variant_tests.rs"]
mod tests;
