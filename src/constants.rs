use rapier2d::prelude::Real;

pub const SCREEN_WIDTH: i32 = 1000;
pub const SCREEN_HEIGHT: i32 = 1000;

/// pixels per meter
pub const CONV_FACTOR: f32 = 70.0;

/// seconds simulated per physics step
pub const TIME_STEP: Real = 1.0 / 60.0;
/// each step is split into this many equal sub steps
pub const SUB_STEPS: usize = 4;
/// m/s^2
pub const GRAVITY: [Real; 2] = [0.0, -10.0];

/// ground tiles are sized in pixels, their colliders are derived from that
pub const GROUND_BLOCK_PX: i32 = 70;
/// m, half of the dynamic box's side
pub const BOX_HALF_EXTENT: Real = 0.5;
pub const BOX_DENSITY: Real = 1.0;
pub const BOX_FRICTION: Real = 0.3;
pub const BOX_RESTITUTION: Real = 0.3;
/// drawn size of every body quad
pub const BODY_SPRITE_PX: i32 = 70;

/// newtons, delivered over a single time step when space is pressed
pub const PUSH_UP_FORCE: Real = 500.0;
/// N*s, left / right arrow
pub const PUSH_SIDE_IMPULSE: Real = 2.0;

pub const GROUND_TEXTURE_PATH: &str = "assets/tiles/grassCenter.png";
pub const BOX_TEXTURE_PATH: &str = "assets/tiles/box.png";
