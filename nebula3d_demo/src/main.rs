//! Nebula3D demo — builds a colored cube spawner, manufactures views
//! sharing its buffers, and drives a short headless presentation loop.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use nebula_3d_engine::nebula3d::display::{
    DisplayDevice, GraphicalContextSettings, HeadlessDisplayDevice, MultiSampling,
};
use nebula_3d_engine::nebula3d::program::{
    GraphicsProgram, ProgramHandle, UniformDesc, UniformValue,
};
use nebula_3d_engine::nebula3d::spawner::{PrimitiveShape, SpawnerSource, ViewSpawner};
use nebula_3d_engine::nebula3d::{Color, Engine, Result};
use nebula_3d_engine::engine_info;

fn main() -> Result<()> {
    Engine::initialize()?;
    Engine::create_display_device(HeadlessDisplayDevice::new())?;

    // Presentation surface: off-screen framebuffer with reversed-z
    let device = Engine::display_device()?;
    let context = {
        let mut device = device.lock().unwrap();
        let window = device.create_window("Nebula3D demo", 1280, 720, MultiSampling::X4, false)?;
        device.create_graphical_context(
            window,
            GraphicalContextSettings {
                anti_aliasing: MultiSampling::X4,
                frame_buffer_width: 1920,
                frame_buffer_height: 1080,
                enable_reversed_z: true,
            },
        )?
    };

    // A cube spawner with one shading program
    let program = Arc::new(GraphicsProgram::new("shade", ProgramHandle(1)));
    let mut spawner = ViewSpawner::new("shade", program, SpawnerSource::primitive(PrimitiveShape::Cube));
    spawner.create_vertex_data()?;
    spawner.create_color_data(Color::RED)?;
    spawner.create_normal_data()?;
    spawner.map_color_data("shade", 1)?;
    spawner.map_normal_data("shade", 2)?;
    spawner.add_uniform_variable(
        "shade",
        UniformDesc::new("u_world", 0, UniformValue::Mat4(Mat4::IDENTITY)),
    )?;

    // Two views over the same buffers
    let mut left = spawner.create()?;
    let mut right = spawner.create()?;
    left.set_transform(Mat4::from_translation(Vec3::new(-1.5, 0.0, -5.0)));
    right.set_transform(Mat4::from_translation(Vec3::new(1.5, 0.0, -5.0)));

    engine_info!("nebula3d_demo", "{} draw call(s) per view, {} vertices",
        left.renderer().draw_calls().len(),
        left.renderer().nb_vertices_to_render());

    // Recoloring reaches both views: they alias the spawner's buffers
    spawner.create_color_data(Color::BLUE)?;

    {
        let mut device = device.lock().unwrap();
        for frame in 0..3 {
            device.clear_buffers(context)?;
            // A real backend would execute both views' draw lists here
            device.swap_buffer(context)?;
            engine_info!("nebula3d_demo", "frame {} presented", frame);
        }
    }

    Engine::destroy_display_device()?;
    Engine::shutdown();
    Ok(())
}
