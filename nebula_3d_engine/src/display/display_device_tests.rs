use super::*;

// ============================================================================
// MultiSampling
// ============================================================================

#[test]
fn test_sample_counts() {
    assert_eq!(MultiSampling::None.sample_count(), 0);
    assert_eq!(MultiSampling::X2.sample_count(), 2);
    assert_eq!(MultiSampling::X4.sample_count(), 4);
    assert_eq!(MultiSampling::X8.sample_count(), 8);
    assert_eq!(MultiSampling::X16.sample_count(), 16);
}

#[test]
fn test_default_is_none() {
    assert_eq!(MultiSampling::default(), MultiSampling::None);
}

// ============================================================================
// GraphicalContextSettings
// ============================================================================

#[test]
fn test_settings_defaults() {
    let settings = GraphicalContextSettings::default();
    assert_eq!(settings.anti_aliasing, MultiSampling::None);
    assert_eq!(settings.frame_buffer_width, 0);
    assert_eq!(settings.frame_buffer_height, 0);
    assert!(!settings.enable_reversed_z);
    assert!(!settings.wants_off_screen_rendering());
}

#[test]
fn test_off_screen_needs_both_dimensions() {
    let mut settings = GraphicalContextSettings::default();
    settings.frame_buffer_width = 1024;
    assert!(!settings.wants_off_screen_rendering());

    settings.frame_buffer_height = 768;
    assert!(settings.wants_off_screen_rendering());
}

// ============================================================================
// DisplayContext
// ============================================================================

#[test]
fn test_clear_depth_follows_depth_convention() {
    let mut ctx = DisplayContext {
        window_width: 800,
        window_height: 600,
        frame_buffer_width: 800,
        frame_buffer_height: 600,
        sample_count: 0,
        reversed_z: false,
        off_screen: false,
    };
    assert_eq!(ctx.clear_depth(), 1.0);

    ctx.reversed_z = true;
    assert_eq!(ctx.clear_depth(), 0.0);
}
