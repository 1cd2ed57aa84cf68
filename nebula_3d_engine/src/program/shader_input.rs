//! Shader-input description value types.
//!
//! These describe how a spawner buffer (vertex attribute) or an owned
//! uniform value is fed to a graphics program. The descriptions are
//! plain data; binding tables key them by buffer/uniform identity.

use glam::{Vec2, Vec3, Vec4, Mat4};

// ===== ATTRIBUTE DATA TYPE =====

/// Scalar type of one vertex-attribute component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeDataType {
    Float32,
    Int32,
    UInt32,
    Int16,
    UInt16,
    Int8,
    UInt8,
}

impl AttributeDataType {
    /// Size in bytes of a single component
    pub fn size_bytes(&self) -> u32 {
        match self {
            AttributeDataType::Float32 | AttributeDataType::Int32 | AttributeDataType::UInt32 => 4,
            AttributeDataType::Int16 | AttributeDataType::UInt16 => 2,
            AttributeDataType::Int8 | AttributeDataType::UInt8 => 1,
        }
    }
}

// ===== SHADER ATTRIBUTE DESC =====

/// Describes how to interpret a buffer as a vertex-shader input.
///
/// `layout` is the shader-side binding slot. Slot 0 is reserved for
/// vertex position throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderAttributeDesc {
    /// Shader layout slot the attribute is wired to
    pub layout: u8,
    /// Number of components per vertex (e.g. 3 for a position)
    pub components: u8,
    /// Component scalar type
    pub data_type: AttributeDataType,
    /// Whether integer data is normalized to [0, 1] / [-1, 1]
    pub normalized: bool,
    /// Byte distance between consecutive vertices (0 = tightly packed)
    pub stride: u32,
}

impl ShaderAttributeDesc {
    /// Tightly packed float attribute at the given slot.
    pub fn packed_f32(layout: u8, components: u8) -> Self {
        Self {
            layout,
            components,
            data_type: AttributeDataType::Float32,
            normalized: false,
            stride: 0,
        }
    }
}

// ===== UNIFORM VALUE =====

/// A uniform value owned by the spawner's uniform table.
///
/// Owned storage replaces the raw data pointers a renderer would
/// otherwise have to keep alive on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Int(i32),
    UInt(u32),
}

impl UniformValue {
    /// Size in bytes of the uploaded value
    pub fn size_bytes(&self) -> u32 {
        match self {
            UniformValue::Float(_) => 4,
            UniformValue::Vec2(_) => 8,
            UniformValue::Vec3(_) => 12,
            UniformValue::Vec4(_) => 16,
            UniformValue::Mat4(_) => 64,
            UniformValue::Int(_) => 4,
            UniformValue::UInt(_) => 4,
        }
    }
}

// ===== UNIFORM DESC =====

/// Describes a single uniform upload: name, shader location, value.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformDesc {
    /// Uniform variable name in the shader
    pub name: String,
    /// Shader location (or binding index)
    pub location: i32,
    /// Owned value to upload
    pub value: UniformValue,
}

impl UniformDesc {
    pub fn new(name: impl Into<String>, location: i32, value: UniformValue) -> Self {
        Self {
            name: name.into(),
            location,
            value,
        }
    }
}

#[cfg(test)]
#[path = "shader_input_tests.rs"]
mod tests;
