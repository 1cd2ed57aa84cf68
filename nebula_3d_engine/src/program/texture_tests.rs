use super::*;

#[test]
fn test_texture_accessors() {
    let texture = Texture::new("albedo", TextureHandle(3));
    assert_eq!(texture.name(), "albedo");
    assert_eq!(texture.handle(), TextureHandle(3));
}
