//! Simulation settings
//!
//! Every physics constant lives here so a run can be tuned from a JSON file
//! without recompiling. Missing fields fall back to the `consts` defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Tunable constants for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Viewport ===
    /// Viewport width; the polygon is centered in the viewport
    pub width: f32,
    pub height: f32,
    /// Target frames per second for the pacer
    pub fps: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Spawn position relative to the polygon center
    pub ball_start_offset: Vec2,
    pub ball_start_velocity: Vec2,
    /// Constant acceleration (pixels/s², +y is down)
    pub gravity: Vec2,

    // === Polygon ===
    /// Circumradius
    pub polygon_radius: f32,
    pub polygon_sides: usize,
    /// Angle of vertex 0 before rotation (degrees)
    pub polygon_angle_offset_deg: f32,
    /// Rotation speed (degrees/s)
    pub angular_speed_deg: f32,

    // === Sparks ===
    /// Lifetime of each spark (seconds)
    pub spark_life: f32,
    /// Sparks spawned per impact
    pub spark_count: usize,
    pub spark_speed_min: f32,
    pub spark_speed_max: f32,
    /// Rendered dot size (presentation only)
    pub spark_size: f32,
    pub max_sparks: usize,

    /// Seed for the spark RNG
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,

            ball_radius: BALL_RADIUS,
            ball_start_offset: Vec2::from_array(BALL_START_OFFSET),
            ball_start_velocity: Vec2::from_array(BALL_START_VELOCITY),
            gravity: Vec2::from_array(GRAVITY),

            polygon_radius: POLYGON_RADIUS,
            polygon_sides: POLYGON_SIDES,
            polygon_angle_offset_deg: POLYGON_ANGLE_OFFSET_DEG,
            angular_speed_deg: ANGULAR_SPEED_DEG,

            spark_life: SPARK_LIFE,
            spark_count: SPARK_COUNT,
            spark_speed_min: SPARK_SPEED_MIN,
            spark_speed_max: SPARK_SPEED_MAX,
            spark_size: SPARK_SIZE,
            max_sparks: MAX_SPARKS,

            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Polygon center (middle of the viewport)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Rotation speed in radians/s
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed_deg.to_radians()
    }

    /// Vertex 0 angle offset in radians
    pub fn angle_offset(&self) -> f32 {
        self.polygon_angle_offset_deg.to_radians()
    }

    /// Fixed frame duration implied by `fps`
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.width,
            self.height,
            self.ball_radius,
            self.ball_start_offset.x,
            self.ball_start_offset.y,
            self.ball_start_velocity.x,
            self.ball_start_velocity.y,
            self.gravity.x,
            self.gravity.y,
            self.polygon_radius,
            self.polygon_angle_offset_deg,
            self.angular_speed_deg,
            self.spark_life,
            self.spark_speed_min,
            self.spark_speed_max,
            self.spark_size,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all numeric settings must be finite"));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be at least 1"));
        }
        if self.ball_radius <= 0.0 {
            return Err(invalid("ball_radius must be positive"));
        }
        if self.polygon_radius <= 0.0 {
            return Err(invalid("polygon_radius must be positive"));
        }
        if self.polygon_sides < 3 {
            return Err(invalid("polygon_sides must be at least 3"));
        }
        // The ball has to fit inside the inscribed circle
        let apothem =
            self.polygon_radius * (std::f32::consts::PI / self.polygon_sides as f32).cos();
        if self.ball_radius >= apothem {
            return Err(invalid("ball_radius must be smaller than the polygon apothem"));
        }
        if self.spark_life <= 0.0 {
            return Err(invalid("spark_life must be positive"));
        }
        if self.spark_speed_min < 0.0 || self.spark_speed_min > self.spark_speed_max {
            return Err(invalid(
                "spark speed range must satisfy 0 <= spark_speed_min <= spark_speed_max",
            ));
        }
        if self.spark_size < 0.0 {
            return Err(invalid("spark_size must not be negative"));
        }
        // A single impact must fit under the cap
        if self.max_sparks < self.spark_count {
            return Err(invalid("max_sparks must be at least spark_count"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SimError {
    SimError::InvalidConfig(msg.to_string())
}
