use super::*;
use crate::nebula3d::Error;
use crate::program::{UniformDesc, UniformValue};
use glam::Mat4;

fn world_uniform() -> UniformDesc {
    UniformDesc::new("u_world", 0, UniformValue::Mat4(Mat4::IDENTITY))
}

#[test]
fn test_insert_and_get() {
    let mut table = UniformTable::new();
    let key = table.insert(world_uniform());

    assert!(table.contains(key));
    assert_eq!(table.get(key).unwrap().name, "u_world");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_replace_last_write_wins() {
    let mut table = UniformTable::new();
    let key = table.insert(world_uniform());

    let updated = UniformDesc::new("u_world", 0, UniformValue::Float(2.0));
    assert!(table.replace(key, updated.clone()).is_ok());

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(key), Some(&updated));
}

#[test]
fn test_replace_unknown_key_fails() {
    let mut table = UniformTable::new();
    let key = table.insert(world_uniform());
    table.clear();

    let result = table.replace(key, world_uniform());
    assert!(matches!(result, Err(Error::UnknownIdentifier(_))));
    assert!(table.is_empty());
}

#[test]
fn test_clear() {
    let mut table = UniformTable::new();
    let key = table.insert(world_uniform());
    table.clear();

    assert!(!table.contains(key));
    assert!(table.is_empty());
}
