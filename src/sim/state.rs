//! Simulation state
//!
//! Everything the step function mutates lives in `SimState`; there is no
//! ambient global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use super::polygon::Polygon;
use crate::consts::BALL_RADIUS;
use crate::error::Result;
use crate::settings::SimConfig;

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Fixed for the life of the ball
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity
    pub fn integrate(&mut self, gravity: Vec2, dt: f32) {
        self.velocity += gravity * dt;
        self.position += self.velocity * dt;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, BALL_RADIUS)
    }
}

/// Physics constants consulted every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: Vec2,
    /// Polygon rotation speed (radians/s)
    pub angular_speed: f32,
    /// Sparks per impact
    pub spark_count: usize,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub ball: Ball,
    pub polygon: Polygon,
    pub sparks: ParticleSystem,
    pub physics: Physics,
    /// Spark RNG, seeded for reproducible runs
    pub rng: Pcg32,
    /// Ticks stepped so far
    pub time_ticks: u64,
    /// Simulated seconds elapsed
    pub elapsed: f64,
    /// Wall impacts resolved so far
    pub impacts: u64,
}

impl SimState {
    /// Build the starting state from validated settings
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let center = config.center();
        let polygon = Polygon::new(
            center,
            config.polygon_radius,
            config.polygon_sides,
            config.angle_offset(),
        );
        let ball = Ball::new(
            center + config.ball_start_offset,
            config.ball_start_velocity,
            config.ball_radius,
        );

        log::info!(
            "Sim start: {}-gon r={} at ({}, {}), ball r={}, seed={}",
            config.polygon_sides,
            config.polygon_radius,
            center.x,
            center.y,
            config.ball_radius,
            config.seed
        );

        Ok(Self::from_parts(
            ball,
            polygon,
            ParticleSystem::from_config(config),
            Physics {
                gravity: config.gravity,
                angular_speed: config.angular_speed(),
                spark_count: config.spark_count,
            },
            config.seed,
        ))
    }

    /// Assemble a state from explicit pieces (tests and custom scenes)
    pub fn from_parts(
        ball: Ball,
        polygon: Polygon,
        sparks: ParticleSystem,
        physics: Physics,
        seed: u64,
    ) -> Self {
        Self {
            ball,
            polygon,
            sparks,
            physics,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            elapsed: 0.0,
            impacts: 0,
        }
    }
}
