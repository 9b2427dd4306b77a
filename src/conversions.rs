//! Conversions between meter space (physics, Y up) and pixel space (screen,
//! Y down, origin at the screen center).

use rapier2d::prelude::{Real, Vector};

/// position in the physics world, in meters. y grows upward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeterCoords {
    pub x: f32,
    pub y: f32,
}

impl MeterCoords {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vector<Real>> for MeterCoords {
    fn from(v: Vector<Real>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<&Vector<Real>> for MeterCoords {
    fn from(v: &Vector<Real>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<MeterCoords> for Vector<Real> {
    fn from(m: MeterCoords) -> Self {
        Vector::new(m.x, m.y)
    }
}

/// position on screen, in pixels. y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCoords {
    pub x: i32,
    pub y: i32,
}

impl PixelCoords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scale factor and screen origin shared by everything that turns
/// physics positions into draw calls.
///
/// Built once at startup and handed around by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    /// pixels per meter
    pub conv_factor: f32,
    /// where meter (0, 0) lands on screen
    pub px_origin: PixelCoords,
}

impl Converter {
    pub const fn new(conv_factor: f32, px_origin: PixelCoords) -> Self {
        Self {
            conv_factor,
            px_origin,
        }
    }

    /// origin at the center of a `width` x `height` screen
    pub const fn for_screen(width: i32, height: i32, conv_factor: f32) -> Self {
        Self::new(conv_factor, PixelCoords::new(width / 2, height / 2))
    }

    /// Truncates toward zero, never rounds. Grid and sprite placement
    /// line up with this.
    pub fn meters_to_pixels(&self, meters: f32) -> i32 {
        (meters * self.conv_factor) as i32
    }

    pub fn pixels_to_meters(&self, pixels: i32) -> f32 {
        pixels as f32 / self.conv_factor
    }

    /// Positive x lands right of the origin, positive y above it. Positions
    /// too far away to fit an `i32` pin to the edge of the pixel range.
    pub fn meter_coords_to_px(&self, m: MeterCoords) -> PixelCoords {
        let px = self.meters_to_pixels(m.x);
        let py = self.meters_to_pixels(m.y);

        PixelCoords {
            x: self.px_origin.x.saturating_add(px),
            y: self.px_origin.y.saturating_sub(py),
        }
    }

    /// Scales each axis only. The origin and the y flip are NOT undone, so
    /// this is not the inverse of [`Converter::meter_coords_to_px`]; use
    /// [`Converter::screen_to_meters`] for a screen position.
    pub fn pixel_coords_to_meters(&self, p: PixelCoords) -> MeterCoords {
        MeterCoords {
            x: self.pixels_to_meters(p.x),
            y: self.pixels_to_meters(p.y),
        }
    }

    /// inverse of [`Converter::meter_coords_to_px`], e.g. for a mouse position
    pub fn screen_to_meters(&self, p: PixelCoords) -> MeterCoords {
        MeterCoords {
            x: self.pixels_to_meters(p.x.saturating_sub(self.px_origin.x)),
            y: self.pixels_to_meters(self.px_origin.y.saturating_sub(p.y)),
        }
    }
}

/// top left corner of a `width` x `height` rectangle centered on `center`
pub fn center_to_corner(center: PixelCoords, width: i32, height: i32) -> PixelCoords {
    PixelCoords {
        x: center.x.saturating_sub(width / 2),
        y: center.y.saturating_sub(height / 2),
    }
}
