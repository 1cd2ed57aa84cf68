//! View factory.
//!
//! A `ViewSpawner` manufactures `View` instances. Every view produced
//! by one spawner shares the same underlying data — buffers, binding
//! tables, and program entries — through a single reference-counted
//! store; nothing is copied into a view.
//!
//! The builder protocol is ordered: vertex data must exist before any
//! channel can be mapped to a program and before `create()` can
//! produce a view. Violations fail with a typed error and leave the
//! spawner unchanged.
//!
//! Shader layout slot 0 is reserved for the vertex position in every
//! program; mapping any other channel there is rejected.

use std::sync::{Arc, Mutex, Weak};
use crate::color::Color;
use crate::error::Result;
use crate::{engine_bail, engine_debug};
use crate::program::{GraphicsProgram, ShaderAttributeDesc, Texture, UniformDesc};
use crate::view::{View, ViewRenderer};
use super::attribute_table::AttributeTable;
use super::geometry_buffers::{BufferChannel, BufferKey, GeometryBuffers};
use super::program_binding::ProgramRegistry;
use super::uniform_table::{UniformKey, UniformTable};
use super::variant::SpawnerSource;

/// Shader layout slot reserved for vertex positions
pub const POSITION_LAYOUT_SLOT: u8 = 0;

const SOURCE: &str = "nebula3d::ViewSpawner";

// ===== SPAWNER STATE =====

/// Progress of the builder protocol.
///
/// `Ready` is sticky: `create()` may be called repeatedly, each call
/// producing a new view over the same shared data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerState {
    /// No vertex data yet
    Empty,
    /// Vertex positions exist; channels can be created and mapped
    VerticesCreated,
    /// At least one program has attribute/uniform bindings
    AttributesConfigured,
    /// At least one view has been created
    Ready,
}

// ===== SHARED DATA =====

/// The store every view of one spawner aliases.
///
/// Held behind `Arc<Mutex<_>>`: the spawner mutates it through the
/// builder protocol, views read it at draw time. It outlives the
/// spawner while any view is alive.
pub struct SpawnerData {
    pub buffers: GeometryBuffers,
    pub attributes: AttributeTable,
    pub uniforms: UniformTable,
    pub programs: ProgramRegistry,
}

impl SpawnerData {
    fn new(programs: ProgramRegistry) -> Self {
        Self {
            buffers: GeometryBuffers::new(),
            attributes: AttributeTable::new(),
            uniforms: UniformTable::new(),
            programs,
        }
    }
}

// ===== VIEW SPAWNER =====

/// Highly coupled factory: every produced view depends on the
/// spawner's shared data to exist.
///
/// The spawner owns the data-generation source (primitive shape or
/// pre-parsed mesh) and drives the binding protocol; the concrete
/// vertex data always comes from the source variant.
pub struct ViewSpawner {
    source: SpawnerSource,
    data: Arc<Mutex<SpawnerData>>,
    state: SpawnerState,
    texture: Option<Weak<Texture>>,
}

impl ViewSpawner {
    /// Create a spawner with a first graphics program.
    pub fn new(
        program_name: impl Into<String>,
        program: Arc<GraphicsProgram>,
        source: SpawnerSource,
    ) -> Self {
        let mut programs = ProgramRegistry::new();
        programs
            .add_program(program_name, program)
            .expect("first program registration cannot collide");

        Self {
            source,
            data: Arc::new(Mutex::new(SpawnerData::new(programs))),
            state: SpawnerState::Empty,
            texture: None,
        }
    }

    /// Attach a texture for default shading.
    ///
    /// The reference is weak: the caller keeps the texture alive, and
    /// `texture()` returns `None` once it is dropped.
    pub fn set_texture(&mut self, texture: &Arc<Texture>) {
        self.texture = Some(Arc::downgrade(texture));
    }

    /// The attached texture, if one is set and still alive
    pub fn texture(&self) -> Option<Arc<Texture>> {
        self.texture.as_ref().and_then(Weak::upgrade)
    }

    /// Current protocol state
    pub fn state(&self) -> SpawnerState {
        self.state
    }

    /// Number of vertices in the position channel (0 before creation)
    pub fn vertex_count(&self) -> u32 {
        self.data.lock().unwrap().buffers.vertex_count()
    }

    /// Key of a channel, if its data exists
    pub fn buffer_key(&self, channel: BufferChannel) -> Option<BufferKey> {
        self.data.lock().unwrap().buffers.key(channel)
    }

    /// The shared store aliased by every view of this spawner
    pub fn shared_data(&self) -> &Arc<Mutex<SpawnerData>> {
        &self.data
    }

    // ===== DATA CREATION =====

    /// Generate (or regenerate) the vertex position data from the
    /// source variant.
    ///
    /// Registers the position attribute at the reserved layout slot 0.
    /// Re-invocation overwrites the data in place; the buffer key and
    /// all registered descriptions stay valid.
    pub fn create_vertex_data(&mut self) -> Result<()> {
        let positions = self.source.generate_positions();

        let mut data = self.data.lock().unwrap();
        let key = data.buffers.set_channel(BufferChannel::Position, positions)?;
        data.attributes
            .register(key, ShaderAttributeDesc::packed_f32(POSITION_LAYOUT_SLOT, 3));
        drop(data);

        if self.state == SpawnerState::Empty {
            self.state = SpawnerState::VerticesCreated;
        }
        Ok(())
    }

    /// Fill (or refill) the color channel with one color broadcast to
    /// every vertex.
    ///
    /// Replaces any prior color data: views created before the call
    /// observe the new color too, since they reference the buffer.
    ///
    /// # Errors
    ///
    /// `PreconditionNotMet` if vertex data has not been created.
    pub fn create_color_data(&mut self, color: Color) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        let count = data.buffers.vertex_count() as usize;
        if count == 0 {
            engine_bail!(PreconditionNotMet, SOURCE,
                "color data requires vertex data to be created first");
        }

        let mut colors = Vec::with_capacity(count * 4);
        for _ in 0..count {
            colors.extend_from_slice(&color.to_array());
        }
        data.buffers.set_channel(BufferChannel::Color, colors)?;
        Ok(())
    }

    /// Generate per-vertex normals from the vertex topology.
    ///
    /// # Errors
    ///
    /// `PreconditionNotMet` if vertex data has not been created.
    pub fn create_normal_data(&mut self) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        let positions = match data.buffers.key(BufferChannel::Position) {
            Some(key) => data.buffers.data(key).unwrap_or_default().to_vec(),
            None => engine_bail!(PreconditionNotMet, SOURCE,
                "normal data requires vertex data to be created first"),
        };

        let normals = self.source.generate_normals(&positions);
        data.buffers.set_channel(BufferChannel::Normal, normals)?;
        Ok(())
    }

    /// Generate 2D texture coordinates covering the whole view.
    ///
    /// # Errors
    ///
    /// `PreconditionNotMet` if vertex data has not been created.
    pub fn create_2d_texture_map_data(&mut self) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        let positions = match data.buffers.key(BufferChannel::Position) {
            Some(key) => data.buffers.data(key).unwrap_or_default().to_vec(),
            None => engine_bail!(PreconditionNotMet, SOURCE,
                "texture coordinates require vertex data to be created first"),
        };

        let tex_coords = self.source.generate_tex_coords(&positions);
        data.buffers.set_channel(BufferChannel::TexCoord, tex_coords)?;
        Ok(())
    }

    // ===== GRAPHICS-PROGRAM BINDING =====

    /// Register another graphics program; adds one draw call to every
    /// view created afterwards.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the name is already registered.
    pub fn add_graphics_program(
        &mut self,
        name: impl Into<String>,
        program: Arc<GraphicsProgram>,
    ) -> Result<()> {
        self.data.lock().unwrap().programs.add_program(name, program)
    }

    /// Bind a spawner buffer as a shader attribute of a program.
    ///
    /// The description is registered under the buffer key
    /// (last-write-wins) and the key is appended to the program's
    /// binding list.
    ///
    /// # Errors
    ///
    /// - `UnknownIdentifier` for an unregistered program or buffer key;
    ///   nothing is mutated
    /// - `InvalidConfiguration` if the description claims layout slot 0
    ///   for a buffer other than the position channel
    pub fn add_shader_attribute(
        &mut self,
        program_name: &str,
        key: BufferKey,
        desc: ShaderAttributeDesc,
    ) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        if !data.programs.contains(program_name) {
            engine_bail!(UnknownIdentifier, SOURCE, "no program named '{}'", program_name);
        }
        if !data.buffers.contains(key) {
            engine_bail!(UnknownIdentifier, SOURCE,
                "attribute buffer key is not owned by this spawner");
        }
        if desc.layout == POSITION_LAYOUT_SLOT
            && data.buffers.key(BufferChannel::Position) != Some(key)
        {
            engine_bail!(InvalidConfiguration, SOURCE,
                "layout slot 0 is reserved for vertex position");
        }

        data.attributes.register(key, desc);
        data.programs
            .add_attribute(program_name, key)
            .expect("program existence checked above");
        drop(data);

        self.note_bindings_configured();
        Ok(())
    }

    /// Register a uniform variable as an input of a program.
    ///
    /// The table owns the value; the returned key can be used to
    /// overwrite it later via [`update_uniform_variable`].
    ///
    /// [`update_uniform_variable`]: Self::update_uniform_variable
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` for an unregistered program; nothing is
    /// mutated.
    pub fn add_uniform_variable(
        &mut self,
        program_name: &str,
        desc: UniformDesc,
    ) -> Result<UniformKey> {
        let mut data = self.data.lock().unwrap();
        if !data.programs.contains(program_name) {
            engine_bail!(UnknownIdentifier, SOURCE, "no program named '{}'", program_name);
        }

        let key = data.uniforms.insert(desc);
        data.programs
            .add_uniform(program_name, key)
            .expect("program existence checked above");
        drop(data);

        self.note_bindings_configured();
        Ok(key)
    }

    /// Overwrite a registered uniform's description (last-write-wins).
    ///
    /// Observed by every view referencing the key.
    pub fn update_uniform_variable(&mut self, key: UniformKey, desc: UniformDesc) -> Result<()> {
        self.data.lock().unwrap().uniforms.replace(key, desc)
    }

    /// Bind the color channel to a program at a layout slot.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for layout slot 0 (reserved)
    /// - `UnknownIdentifier` for an unregistered program
    /// - `PreconditionNotMet` if color data has not been created
    pub fn map_color_data(&mut self, program_name: &str, layout: u8) -> Result<()> {
        self.map_channel(BufferChannel::Color, program_name, layout)
    }

    /// Bind the normal channel to a program at a layout slot.
    ///
    /// Same error contract as [`map_color_data`](Self::map_color_data).
    pub fn map_normal_data(&mut self, program_name: &str, layout: u8) -> Result<()> {
        self.map_channel(BufferChannel::Normal, program_name, layout)
    }

    /// Bind the texture-coordinate channel to a program at a layout slot.
    ///
    /// Same error contract as [`map_color_data`](Self::map_color_data).
    pub fn map_2d_texture_map_data(&mut self, program_name: &str, layout: u8) -> Result<()> {
        self.map_channel(BufferChannel::TexCoord, program_name, layout)
    }

    fn map_channel(&mut self, channel: BufferChannel, program_name: &str, layout: u8) -> Result<()> {
        if layout == POSITION_LAYOUT_SLOT {
            engine_bail!(InvalidConfiguration, SOURCE,
                "layout slot 0 is reserved for vertex position");
        }

        let mut data = self.data.lock().unwrap();
        if !data.programs.contains(program_name) {
            engine_bail!(UnknownIdentifier, SOURCE, "no program named '{}'", program_name);
        }
        let key = match data.buffers.key(channel) {
            Some(key) => key,
            None => engine_bail!(PreconditionNotMet, SOURCE,
                "{:?} data has not been created", channel),
        };

        let desc = ShaderAttributeDesc::packed_f32(layout, channel.components() as u8);
        data.attributes.register(key, desc);
        data.programs
            .add_attribute(program_name, key)
            .expect("program existence checked above");
        drop(data);

        self.note_bindings_configured();
        Ok(())
    }

    // ===== VIEW CREATION =====

    /// Manufacture a view over the shared data, transferring ownership
    /// to the caller.
    ///
    /// Repeatable: each call produces a new view aliasing the same
    /// buffers and program entries. The source variant supplies the
    /// drawing primitive and vertex count; every registered program
    /// becomes one draw call, position bound first.
    ///
    /// # Errors
    ///
    /// - `PreconditionNotMet` if vertex data has not been created
    /// - `UnknownIdentifier` if a program references a key missing from
    ///   the tables (construction error, not a runtime crash)
    pub fn create(&mut self) -> Result<View> {
        let mut data = self.data.lock().unwrap();
        let vertex_count = data.buffers.vertex_count();
        if vertex_count == 0 {
            engine_bail!(PreconditionNotMet, SOURCE,
                "cannot create a view before vertex data exists");
        }
        let position_key = data
            .buffers
            .key(BufferChannel::Position)
            .expect("position channel exists when vertex_count > 0");

        // The position description may have been dropped by clear()
        if !data.attributes.contains(position_key) {
            data.attributes
                .register(position_key, ShaderAttributeDesc::packed_f32(POSITION_LAYOUT_SLOT, 3));
        }

        // Construction-time validation of every program's binding list
        for (name, entry) in data.programs.entries() {
            for &key in entry.attributes() {
                if !data.buffers.contains(key) || !data.attributes.contains(key) {
                    engine_bail!(UnknownIdentifier, SOURCE,
                        "program '{}' references an unregistered attribute buffer", name);
                }
            }
            for &key in entry.uniforms() {
                if !data.uniforms.contains(key) {
                    engine_bail!(UnknownIdentifier, SOURCE,
                        "program '{}' references an unregistered uniform", name);
                }
            }
        }

        data.programs.ensure_first_attribute(position_key);

        let (primitive, count) = self.source.render_params(vertex_count);
        let mut renderer = ViewRenderer::new();
        renderer.set_drawing_primitive(primitive);
        renderer.set_nb_vertices_to_render(count);
        for name in data.programs.names() {
            renderer.push_draw_call(name.clone());
        }
        let program_count = data.programs.len();
        drop(data);

        self.state = SpawnerState::Ready;
        engine_debug!(SOURCE, "view created: {} vertices, {} program(s)", count, program_count);
        Ok(View::new(Arc::clone(&self.data), renderer))
    }

    /// Drop every attribute/uniform registration and every program's
    /// binding lists. Buffers and programs are kept.
    pub fn clear(&mut self) {
        let mut data = self.data.lock().unwrap();
        data.attributes.clear();
        data.uniforms.clear();
        data.programs.clear_bindings();
        let has_vertices = data.buffers.vertex_count() > 0;
        drop(data);

        self.state = if has_vertices {
            SpawnerState::VerticesCreated
        } else {
            SpawnerState::Empty
        };
    }

    fn note_bindings_configured(&mut self) {
        if self.state == SpawnerState::VerticesCreated {
            self.state = SpawnerState::AttributesConfigured;
        }
    }
}

#[cfg(test)]
#[path = "view_spawner_tests.rs"]
mod tests;
