//! Draw calls, everything positioned in meters and placed on screen through
//! a [`Converter`].

use graphics::math::Matrix2d;
use opengl_graphics::{GlGraphics, Texture};
use rapier2d::prelude::RigidBodyHandle;

use crate::assets::{TextureKind, Textures};
use crate::colors::*;
use crate::constants::*;
use crate::conversions::{center_to_corner, Converter, MeterCoords};
use crate::registry::BodyChain;
use crate::world::{PhysicsWorld, Scene};

/// half length of a meter tick on the grid axes
const TICK_HALF_LEN: i32 = 10;
/// half length of a [`line_at`] marker
const MARKER_HALF_LEN: i32 = 20;

/// The two axes through the converter's origin on a `width` x `height`
/// screen, plus a tick every meter along each of them. Ticks stop before
/// reaching the screen edge.
pub fn grid_lines(converter: &Converter, width: i32, height: i32) -> Vec<[f64; 4]> {
    let mid_x = converter.px_origin.x;
    let mid_y = converter.px_origin.y;
    let step = converter.conv_factor as i32;

    let mut lines = vec![
        line(mid_x, 0, mid_x, height),
        line(0, mid_y, width, mid_y),
    ];
    if step <= 0 {
        return lines;
    }

    // up
    let mut i = mid_y - step;
    while i > 0 {
        lines.push(line(mid_x - TICK_HALF_LEN, i, mid_x + TICK_HALF_LEN, i));
        i -= step;
    }
    // down
    let mut i = mid_y + step;
    while i < height {
        lines.push(line(mid_x - TICK_HALF_LEN, i, mid_x + TICK_HALF_LEN, i));
        i += step;
    }
    // right
    let mut i = mid_x + step;
    while i < width {
        lines.push(line(i, mid_y - TICK_HALF_LEN, i, mid_y + TICK_HALF_LEN));
        i += step;
    }
    // left
    let mut i = mid_x - step;
    while i > 0 {
        lines.push(line(i, mid_y - TICK_HALF_LEN, i, mid_y + TICK_HALF_LEN));
        i -= step;
    }

    lines
}

fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> [f64; 4] {
    [x0 as f64, y0 as f64, x1 as f64, y1 as f64]
}

/// `[x, y, w, h]` of a `width` x `height` pixel rectangle centered on `m`
pub fn quad_at(converter: &Converter, m: MeterCoords, width: i32, height: i32) -> [f64; 4] {
    let corner = center_to_corner(converter.meter_coords_to_px(m), width, height);
    [
        corner.x as f64,
        corner.y as f64,
        width as f64,
        height as f64,
    ]
}

/// short horizontal marker centered on `m`
pub fn line_at(converter: &Converter, m: MeterCoords) -> [f64; 4] {
    let px = converter.meter_coords_to_px(m);
    line(
        px.x.saturating_sub(MARKER_HALF_LEN),
        px.y,
        px.x.saturating_add(MARKER_HALF_LEN),
        px.y,
    )
}

/// `view_size` is the drawable area in pixels, `[width, height]`
pub fn draw_grid(
    converter: &Converter,
    view_size: [f64; 2],
    transform: Matrix2d,
    gl: &mut GlGraphics,
) {
    let [width, height] = view_size;
    for l in grid_lines(converter, width as i32, height as i32) {
        graphics::line(BLACK, 0.5, l, transform, gl);
    }
}

pub fn draw_textured_quad(
    converter: &Converter,
    texture: &Texture,
    at: MeterCoords,
    transform: Matrix2d,
    gl: &mut GlGraphics,
) {
    use graphics::*;

    Image::new()
        .rect(quad_at(converter, at, BODY_SPRITE_PX, BODY_SPRITE_PX))
        .draw(texture, &DrawState::default(), transform, gl);
}

pub fn fill_box_at_meters(
    converter: &Converter,
    at: MeterCoords,
    width: i32,
    height: i32,
    color: Color,
    transform: Matrix2d,
    gl: &mut GlGraphics,
) {
    graphics::rectangle(color, quad_at(converter, at, width, height), transform, gl);
}

pub fn line_at_meters(
    converter: &Converter,
    at: MeterCoords,
    color: Color,
    transform: Matrix2d,
    gl: &mut GlGraphics,
) {
    graphics::line(color, 1.0, line_at(converter, at), transform, gl);
}

/// one texture for every body in `chain`, at its current position
pub fn draw_chain(
    converter: &Converter,
    world: &PhysicsWorld,
    chain: &BodyChain<RigidBodyHandle>,
    texture: &Texture,
    transform: Matrix2d,
    gl: &mut GlGraphics,
) {
    for &handle in chain {
        if let Some(at) = world.position(handle) {
            draw_textured_quad(converter, texture, at, transform, gl);
        }
    }
}

/// Debug marks drawn on top of the scene: a line through the center of
/// every dynamic object and a small box where the mouse was last clicked.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub enabled: bool,
    pub last_click: Option<MeterCoords>,
}

impl Overlay {
    pub fn draw(
        &self,
        converter: &Converter,
        world: &PhysicsWorld,
        scene: &Scene,
        transform: Matrix2d,
        gl: &mut GlGraphics,
    ) {
        if !self.enabled {
            return;
        }
        for &handle in &scene.objects {
            if let Some(at) = world.position(handle) {
                line_at_meters(converter, at, RED, transform, gl);
            }
        }
        if let Some(click) = self.last_click {
            fill_box_at_meters(converter, click, 10, 10, rgba(255, 0, 0, 0.6), transform, gl);
        }
    }
}

pub fn draw_scene(
    converter: &Converter,
    world: &PhysicsWorld,
    scene: &Scene,
    textures: &Textures,
    overlay: &Overlay,
    c: &graphics::Context,
    gl: &mut GlGraphics,
) {
    graphics::clear(WHITE, gl);

    draw_grid(converter, c.get_view_size(), c.transform, gl);
    draw_chain(
        converter,
        world,
        &scene.ground,
        textures.get(TextureKind::Ground),
        c.transform,
        gl,
    );
    draw_chain(
        converter,
        world,
        &scene.objects,
        textures.get(TextureKind::Box),
        c.transform,
        gl,
    );
    overlay.draw(converter, world, scene, c.transform, gl);
}
