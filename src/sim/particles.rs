//! Impact sparks
//!
//! Sparks are purely visual: they fly in a straight line and vanish when
//! their life runs out. They never feed back into the ball physics.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::SPARK_SIZE;
use crate::polar_to_cartesian;
use crate::settings::SimConfig;

/// A single spark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spark {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Seconds left before removal
    pub remaining_life: f32,
    /// Lifetime at spawn
    pub total_life: f32,
}

impl Spark {
    /// Fade factor in [0, 1] for the renderer
    pub fn opacity(&self) -> f32 {
        (self.remaining_life / self.total_life).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }
}

/// Owns every live spark
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    sparks: Vec<Spark>,
    /// Lifetime given to new sparks
    pub spark_life: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Oldest sparks are dropped beyond this
    pub max_sparks: usize,
    /// Rendered dot size (presentation only)
    pub spark_size: f32,
}

impl ParticleSystem {
    pub fn new(spark_life: f32, speed_min: f32, speed_max: f32, max_sparks: usize) -> Self {
        Self {
            sparks: Vec::new(),
            spark_life,
            speed_min,
            speed_max,
            max_sparks,
            spark_size: SPARK_SIZE,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            spark_size: config.spark_size,
            ..Self::new(
                config.spark_life,
                config.spark_speed_min,
                config.spark_speed_max,
                config.max_sparks,
            )
        }
    }

    /// Spawn `count` sparks at `position` flying in random directions
    ///
    /// Returns how many of the new sparks are live afterwards. That is
    /// `count` unless the cap is smaller than `count` itself.
    pub fn spawn<R: Rng + ?Sized>(&mut self, position: Vec2, count: usize, rng: &mut R) -> usize {
        for _ in 0..count {
            let angle = rng.random_range(0.0..TAU);
            let speed = if self.speed_max > self.speed_min {
                rng.random_range(self.speed_min..=self.speed_max)
            } else {
                self.speed_min
            };
            self.sparks.push(Spark {
                position,
                velocity: polar_to_cartesian(speed, angle),
                remaining_life: self.spark_life,
                total_life: self.spark_life,
            });
        }

        if self.sparks.len() > self.max_sparks {
            let excess = self.sparks.len() - self.max_sparks;
            log::warn!("Spark cap {} reached, dropping {} oldest", self.max_sparks, excess);
            self.sparks.drain(..excess);
        }
        count.min(self.max_sparks)
    }

    /// Move every spark, burn `dt` of life, then drop the dead ones
    pub fn update(&mut self, dt: f32) {
        for spark in self.sparks.iter_mut() {
            spark.position += spark.velocity * dt;
            spark.remaining_life -= dt;
        }
        self.sparks.retain(Spark::is_alive);
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spark> {
        self.sparks.iter()
    }

    pub fn as_slice(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn clear(&mut self) {
        self.sparks.clear();
    }
}
