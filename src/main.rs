#[macro_use]
extern crate log;

use anyhow::{anyhow, Result};
use glutin_window::GlutinWindow;
use opengl_graphics::{GlGraphics, OpenGL};
use piston::{
    event_loop::{EventSettings, Events},
    window::{Window, WindowSettings},
    Button, Key, MouseButton, MouseCursorEvent, PressEvent, RenderEvent, UpdateEvent,
};

use boxdrop::assets::Textures;
use boxdrop::constants::*;
use boxdrop::conversions::{Converter, PixelCoords};
use boxdrop::render::{self, Overlay};
use boxdrop::world::{PhysicsWorld, Push, Scene};

fn main() -> Result<()> {
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(log::LevelFilter::Debug);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let converter = Converter::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT, CONV_FACTOR);
    info!("Initialized, {:?}", converter);

    // Change this to OpenGL::V2_1 if not working.
    let opengl = OpenGL::V3_2;

    let mut window: GlutinWindow =
        WindowSettings::new("boxdrop", [SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32])
            .graphics_api(opengl)
            .exit_on_esc(false)
            .resizable(false)
            .vsync(true)
            .build()
            .map_err(|e| anyhow!("could not create window: {}", e))?;

    let mut gl = GlGraphics::new(opengl);
    let textures = Textures::load()?;

    let mut world = PhysicsWorld::default();
    let scene = Scene::build(&mut world, &converter);
    let mut overlay = Overlay::default();
    let mut cursor = PixelCoords::default();

    let mut events = Events::new({
        let mut es = EventSettings::new();
        es.lazy = false;
        // one physics step per update
        es.ups = (1.0 / TIME_STEP).round() as u64;
        es
    });

    while let Some(e) = events.next(&mut window) {
        if let Some(args) = e.render_args() {
            gl.draw(args.viewport(), |c, gl| {
                render::draw_scene(&converter, &world, &scene, &textures, &overlay, &c, gl);
            });
        }

        if e.update_args().is_some() {
            world.step();
            for &handle in &scene.objects {
                trace!(
                    "{:?} at {:?} moving {:?}",
                    handle,
                    world.position(handle),
                    world.velocity(handle)
                );
            }
        }

        if let Some([x, y]) = e.mouse_cursor_args() {
            cursor = PixelCoords::new(x as i32, y as i32);
        }

        if let Some(args) = e.press_args() {
            match args {
                Button::Keyboard(key) => match key {
                    Key::Escape => window.set_should_close(true),
                    Key::Space => scene.push_objects(&mut world, Push::Up),
                    Key::Left => scene.push_objects(&mut world, Push::Left),
                    Key::Right => scene.push_objects(&mut world, Push::Right),
                    Key::D => {
                        overlay.enabled = !overlay.enabled;
                        debug!("overlay enabled: {}", overlay.enabled);
                    }
                    _ => {}
                },
                Button::Mouse(MouseButton::Left) => {
                    let at = converter.screen_to_meters(cursor);
                    debug!("click at {:?} px, {:?} m", cursor, at);
                    overlay.last_click = Some(at);
                }
                _ => {}
            }
        }
    }

    info!("window closed");
    Ok(())
}
