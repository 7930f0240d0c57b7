//! Hex Bounce - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, sparks, stepping)
//! - `settings`: Tunable physics constants, loadable from JSON
//! - `error`: Error type shared by the simulation and the runner

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::SimConfig;

use glam::Vec2;

/// Simulation defaults
pub mod consts {
    /// Viewport size; the polygon sits at its center
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Frame pacer target
    pub const FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawn point, relative to the polygon center
    pub const BALL_START_OFFSET: [f32; 2] = [100.0, 0.0];
    pub const BALL_START_VELOCITY: [f32; 2] = [200.0, -50.0];
    /// Downward acceleration (pixels/s², screen space so +y is down)
    pub const GRAVITY: [f32; 2] = [0.0, 500.0];

    /// Polygon defaults
    pub const POLYGON_RADIUS: f32 = 250.0;
    pub const POLYGON_SIDES: usize = 6;
    /// Angle of vertex 0 before rotation (degrees)
    pub const POLYGON_ANGLE_OFFSET_DEG: f32 = -30.0;
    /// Rotation speed (degrees/s)
    pub const ANGULAR_SPEED_DEG: f32 = 20.0;

    /// Spark defaults
    pub const SPARK_LIFE: f32 = 0.3;
    pub const SPARK_COUNT: usize = 10;
    pub const SPARK_SPEED_MIN: f32 = 80.0;
    pub const SPARK_SPEED_MAX: f32 = 160.0;
    /// Rendered dot size in pixels (presentation only)
    pub const SPARK_SIZE: f32 = 3.0;
    /// Hard cap on live sparks
    pub const MAX_SPARKS: usize = 512;

    pub const DEFAULT_SEED: u64 = 0x5EED;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rotate a vector counter-clockwise (in y-up terms) by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Perpendicular vector: (x, y) -> (-y, x)
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, with `normal` of unit length.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
