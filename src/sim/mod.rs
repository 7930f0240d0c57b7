//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - `dt` comes from the caller, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (polygon edge order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod polygon;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{EdgeHit, ball_edge_collision, find_edge_collision, resolve_collision};
pub use particles::{ParticleSystem, Spark};
pub use polygon::{Edge, Polygon, compute_edges, compute_vertices};
pub use snapshot::{Snapshot, SparkView};
pub use state::{Ball, Physics, SimState};
pub use tick::{StepReport, step};
