//! Rigid bodies dropped onto a floor, drawn in a window.
//!
//! - `conversions`: meter space <-> pixel space
//! - `registry`: ordered chains of body handles, walked every frame
//! - `world`: the physics simulation and the bodies it starts with
//! - `render` / `assets`: piston draw calls and the textures they use

pub mod assets;
pub mod colors;
pub mod constants;
pub mod conversions;
pub mod registry;
pub mod render;
pub mod world;

#[macro_use]
extern crate log;
#[macro_use]
extern crate derivative;
