//! Renderer hand-off
//!
//! A `Snapshot` is a read-only copy of what one frame needs to draw: the
//! polygon outline, the ball and the fading sparks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::SimState;

/// One spark as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkView {
    pub position: Vec2,
    pub remaining_life: f32,
    pub total_life: f32,
    /// `remaining_life / total_life`, clamped to [0, 1]
    pub opacity: f32,
}

/// Drawable state for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub time: f64,
    pub vertices: Vec<Vec2>,
    pub ball_position: Vec2,
    pub ball_radius: f32,
    /// Dot size to draw each spark with
    pub spark_size: f32,
    pub sparks: Vec<SparkView>,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        Self {
            tick: state.time_ticks,
            time: state.elapsed,
            vertices: state.polygon.vertices().to_vec(),
            ball_position: state.ball.position,
            ball_radius: state.ball.radius(),
            spark_size: state.sparks.spark_size,
            sparks: state
                .sparks
                .iter()
                .map(|s| SparkView {
                    position: s.position,
                    remaining_life: s.remaining_life,
                    total_life: s.total_life,
                    opacity: s.opacity(),
                })
                .collect(),
        }
    }

    /// Single-line JSON, one frame per line
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
