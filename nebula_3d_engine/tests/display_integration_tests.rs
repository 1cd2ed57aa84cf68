//! Integration tests for the display layer and engine singleton
//!
//! These run against the headless device, no display server required.
//! Tests touching the Engine singleton are #[serial].

use nebula_3d_engine::nebula3d::display::{
    DisplayDevice, GraphicalContextSettings, HeadlessDisplayDevice, MultiSampling,
};
use nebula_3d_engine::nebula3d::Engine;
use serial_test::serial;

// ============================================================================
// DEVICE FRAME LOOP
// ============================================================================

#[test]
fn test_integration_headless_frame_loop() {
    let mut device = HeadlessDisplayDevice::new();

    let window = device
        .create_window("demo", 1280, 720, MultiSampling::X4, false)
        .unwrap();
    let settings = GraphicalContextSettings {
        anti_aliasing: MultiSampling::X4,
        frame_buffer_width: 1920,
        frame_buffer_height: 1080,
        enable_reversed_z: true,
    };
    let context = device.create_graphical_context(window, settings).unwrap();

    {
        let ctx = device.context(context).unwrap();
        assert_eq!(ctx.sample_count, 4);
        assert!(ctx.off_screen);
        assert_eq!(ctx.clear_depth(), 0.0);
    }

    for _ in 0..10 {
        device.clear_buffers(context).unwrap();
        device.swap_buffer(context).unwrap();
    }
    assert_eq!(device.present_count(), 10);

    device.destroy_context(context);
    device.destroy_window(window);
    assert!(device.context(context).is_none());
}

#[test]
fn test_integration_capability_degradation() {
    // Device capped at 2x multisampling, no reversed-z
    let mut device = HeadlessDisplayDevice::with_capabilities(2, false);

    let window = device
        .create_window("degraded", 640, 480, MultiSampling::X16, false)
        .unwrap();
    let settings = GraphicalContextSettings {
        anti_aliasing: MultiSampling::X16,
        frame_buffer_width: 0,
        frame_buffer_height: 0,
        enable_reversed_z: true,
    };
    let context = device.create_graphical_context(window, settings).unwrap();

    // Degraded, not failed
    let ctx = device.context(context).unwrap();
    assert_eq!(ctx.sample_count, 0);
    assert!(!ctx.reversed_z);
    assert_eq!(ctx.clear_depth(), 1.0);
}

// ============================================================================
// ENGINE SINGLETON
// ============================================================================

#[test]
#[serial]
fn test_integration_engine_display_device_lifecycle() {
    Engine::initialize().unwrap();
    Engine::create_display_device(HeadlessDisplayDevice::new()).unwrap();

    {
        let device = Engine::display_device().unwrap();
        let mut device = device.lock().unwrap();
        let window = device
            .create_window("singleton", 800, 600, MultiSampling::None, false)
            .unwrap();
        let context = device
            .create_graphical_context(window, GraphicalContextSettings::default())
            .unwrap();
        device.clear_buffers(context).unwrap();
        device.swap_buffer(context).unwrap();
    }

    Engine::destroy_display_device().unwrap();
    assert!(Engine::display_device().is_err());
}
