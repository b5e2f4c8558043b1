//! Shared domain - cross-cutting ресурсы
//!
//! - Camera (viewport, world→screen offset, off-screen culling)

pub mod camera;

pub use camera::*;
