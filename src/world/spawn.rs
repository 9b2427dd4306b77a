use rapier2d::prelude::*;

use crate::constants::*;
use crate::conversions::{Converter, MeterCoords};

/// static tile the boxes land on. its collider matches the tile's drawn size
pub fn ground_block(at: MeterCoords, converter: &Converter) -> (RigidBody, Collider) {
    let half_w = converter.pixels_to_meters(GROUND_BLOCK_PX) / 2.0;
    let half_h = converter.pixels_to_meters(GROUND_BLOCK_PX) / 2.0;

    let body = RigidBodyBuilder::fixed()
        .translation(vector![at.x, at.y])
        .build();
    let collider = ColliderBuilder::cuboid(half_w, half_h).build();

    (body, collider)
}

/// 1m x 1m crate that falls under gravity
pub fn dynamic_box(at: MeterCoords) -> (RigidBody, Collider) {
    let body = RigidBodyBuilder::dynamic()
        .translation(vector![at.x, at.y])
        .build();
    let collider = ColliderBuilder::cuboid(BOX_HALF_EXTENT, BOX_HALF_EXTENT)
        .density(BOX_DENSITY)
        .friction(BOX_FRICTION)
        .restitution(BOX_RESTITUTION)
        .build();

    (body, collider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_block_collider_matches_tile() {
        let converter = Converter::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT, CONV_FACTOR);
        let (body, collider) = ground_block(MeterCoords::new(1.0, -5.0), &converter);

        assert!(body.is_fixed());
        assert_eq!(*body.translation(), vector![1.0, -5.0]);
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert!((cuboid.half_extents.x - 0.5).abs() < 1e-6);
        assert!((cuboid.half_extents.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn dynamic_box_material() {
        let (body, collider) = dynamic_box(MeterCoords::new(0.0, 5.0));

        assert!(body.is_dynamic());
        assert_eq!(collider.density(), BOX_DENSITY);
        assert_eq!(collider.friction(), BOX_FRICTION);
        assert_eq!(collider.restitution(), BOX_RESTITUTION);
    }
}
