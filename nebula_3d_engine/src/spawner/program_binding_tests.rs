use super::*;
use crate::nebula3d::Error;
use crate::program::{GraphicsProgram, ProgramHandle};
use crate::spawner::{BufferChannel, GeometryBuffers, UniformTable};
use crate::program::{UniformDesc, UniformValue};

fn basic_program() -> Arc<GraphicsProgram> {
    Arc::new(GraphicsProgram::new("basic", ProgramHandle(1)))
}

fn buffer_key() -> BufferKey {
    let mut buffers = GeometryBuffers::new();
    buffers
        .set_channel(BufferChannel::Position, vec![0.0; 9])
        .unwrap()
}

fn uniform_key() -> UniformKey {
    let mut table = UniformTable::new();
    table.insert(UniformDesc::new("u_t", 0, UniformValue::Float(0.0)))
}

// ============================================================================
// Program registration
// ============================================================================

#[test]
fn test_add_program() {
    let mut registry = ProgramRegistry::new();
    assert!(registry.add_program("basic", basic_program()).is_ok());

    assert!(registry.contains("basic"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entry("basic").unwrap().program().name(), "basic");
}

#[test]
fn test_duplicate_program_name_fails_and_keeps_first() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("basic", basic_program()).unwrap();

    let other = Arc::new(GraphicsProgram::new("basic", ProgramHandle(99)));
    let result = registry.add_program("basic", other);

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entry("basic").unwrap().program().handle(), ProgramHandle(1));
}

#[test]
fn test_registration_order_is_draw_order() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("depth", basic_program()).unwrap();
    registry.add_program("shade", basic_program()).unwrap();
    registry.add_program("outline", basic_program()).unwrap();

    assert_eq!(registry.names(), &["depth", "shade", "outline"]);
    let ordered: Vec<&str> = registry.entries().map(|(name, _)| name).collect();
    assert_eq!(ordered, vec!["depth", "shade", "outline"]);
}

// ============================================================================
// Binding lists
// ============================================================================

#[test]
fn test_add_attribute_appends_in_order() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("basic", basic_program()).unwrap();

    let a = buffer_key();
    let b = buffer_key();
    registry.add_attribute("basic", a).unwrap();
    registry.add_attribute("basic", b).unwrap();

    assert_eq!(registry.entry("basic").unwrap().attributes(), &[a, b]);
}

#[test]
fn test_add_attribute_unknown_program_fails_without_mutation() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("basic", basic_program()).unwrap();

    let result = registry.add_attribute("missing", buffer_key());
    assert!(matches!(result, Err(Error::UnknownIdentifier(_))));
    assert!(registry.entry("basic").unwrap().attributes().is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_add_uniform_unknown_program_fails() {
    let mut registry = ProgramRegistry::new();
    let result = registry.add_uniform("missing", uniform_key());
    assert!(matches!(result, Err(Error::UnknownIdentifier(_))));
}

#[test]
fn test_ensure_first_attribute_prepends_everywhere() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("basic", basic_program()).unwrap();
    registry.add_program("toon", basic_program()).unwrap();

    let color = buffer_key();
    let position = buffer_key();
    registry.add_attribute("basic", color).unwrap();
    registry.add_attribute("toon", position).unwrap(); // already bound here

    registry.ensure_first_attribute(position);

    assert_eq!(registry.entry("basic").unwrap().attributes(), &[position, color]);
    // No duplicate added where the key was already bound
    assert_eq!(registry.entry("toon").unwrap().attributes(), &[position]);
}

#[test]
fn test_clear_bindings_keeps_programs() {
    let mut registry = ProgramRegistry::new();
    registry.add_program("basic", basic_program()).unwrap();
    registry.add_attribute("basic", buffer_key()).unwrap();
    registry.add_uniform("basic", uniform_key()).unwrap();

    registry.clear_bindings();

    assert!(registry.contains("basic"));
    assert!(registry.entry("basic").unwrap().attributes().is_empty());
    assert!(registry.entry("basic").unwrap().uniforms().is_empty());
}
