//! Simulation step
//!
//! One call advances the whole scene by `dt`: rotate the container, rebuild
//! its outline, integrate the ball, resolve at most one wall hit, then age
//! the sparks.

use super::collision::{EdgeHit, resolve_collision};
use super::state::SimState;
use crate::error::{Result, SimError};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// The wall hit resolved this step, if any
    pub hit: Option<EdgeHit>,
    /// Sparks added at the hit and still live after the spark cap
    pub sparks_spawned: usize,
}

/// Advance the simulation by `dt` seconds
///
/// `dt` is used as given: it is never clamped or split into substeps, so a
/// very long frame can carry the ball through a wall. Negative, NaN and
/// infinite values are rejected before any state changes.
pub fn step(state: &mut SimState, dt: f32) -> Result<StepReport> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimError::InvalidTick(dt));
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;

    // Rotate container (rebuilds vertices and edges)
    state.polygon.rotate(state.physics.angular_speed, dt);

    // Gravity, then free flight
    state.ball.integrate(state.physics.gravity, dt);

    let mut report = StepReport::default();
    if let Some(hit) = resolve_collision(&mut state.ball, state.polygon.edges()) {
        let count = state
            .sparks
            .spawn(hit.contact, state.physics.spark_count, &mut state.rng);
        state.impacts += 1;

        log::debug!(
            "Tick {}: hit edge {} at ({:.1}, {:.1}), speed {:.1}",
            state.time_ticks,
            hit.edge_index,
            hit.contact.x,
            hit.contact.y,
            state.ball.speed()
        );

        report.hit = Some(hit);
        report.sparks_spawned = count;
    }

    state.sparks.update(dt);

    log::trace!(
        "Tick {}: ball ({:.2}, {:.2}), {} sparks",
        state.time_ticks,
        state.ball.position.x,
        state.ball.position.y,
        state.sparks.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::particles::ParticleSystem;
    use crate::sim::polygon::Polygon;
    use crate::sim::state::{Ball, Physics};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Radius-250 hexagon at the origin with default sparks
    fn scene(ball: Ball, gravity: Vec2, angular_speed: f32) -> SimState {
        SimState::from_parts(
            ball,
            Polygon::hexagon(Vec2::ZERO, 250.0),
            ParticleSystem::new(0.3, 80.0, 160.0, 512),
            Physics {
                gravity,
                angular_speed,
                spark_count: 10,
            },
            1234,
        )
    }

    #[test]
    fn test_drop_from_center_hits_bottom() {
        let mut state = scene(
            Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0),
            Vec2::new(0.0, 500.0),
            20.0_f32.to_radians(),
        );

        let mut hit_tick = None;
        for tick in 0..120 {
            let velocity_before = state.ball.velocity;
            let report = step(&mut state, DT).unwrap();
            if let Some(hit) = report.hit {
                assert!(velocity_before.y >= 0.0);
                assert!(state.ball.velocity.y < 0.0, "vertical velocity must reverse");
                // Bottom side: inward normal points up the screen
                assert!(hit.normal.y < 0.0);
                assert_eq!(report.sparks_spawned, 10);
                assert_eq!(state.sparks.len(), 10);

                // Ball left tangent to the edge it hit
                let edge = state.polygon.edges()[hit.edge_index];
                assert!((edge.signed_distance(state.ball.position) - 10.0).abs() < 1e-2);

                hit_tick = Some(tick);
                break;
            }
            assert!(state.sparks.is_empty());
        }

        let hit_tick = hit_tick.expect("ball never reached the bottom");
        // Free fall of ~210px under 500px/s² takes just under a second
        assert!((50..70).contains(&hit_tick), "hit at tick {hit_tick}");
        assert_eq!(state.impacts, 1);
    }

    #[test]
    fn test_parallel_launch_never_collides() {
        // Edge 0 is the vertical side at x = 250·cos(30°). Travel parallel to
        // it, 100px in from the center line, slowly enough that no wall comes
        // within a radius for the whole run.
        let radius = 10.0;
        let velocity = Vec2::new(0.0, 20.0);
        let mut state = scene(
            Ball::new(Vec2::new(100.0, 0.0), velocity, radius),
            Vec2::ZERO,
            0.0,
        );
        let edges = state.polygon.edges().to_vec();
        let start_distance = edges[0].signed_distance(state.ball.position);
        assert!(edges[0].normal.dot(velocity).abs() < 1e-4);

        // Earliest time any edge line comes within one radius
        let horizon = edges
            .iter()
            .filter(|e| e.normal.dot(velocity) < 0.0)
            .map(|e| (e.signed_distance(state.ball.position) - radius) / -e.normal.dot(velocity))
            .fold(f32::INFINITY, f32::min);
        let ticks = (horizon * 0.95 / DT) as usize;
        assert!(ticks > 400, "run of {ticks} ticks is too short");

        for _ in 0..ticks {
            let report = step(&mut state, DT).unwrap();
            assert!(report.hit.is_none());
            assert!(state.sparks.is_empty());
            for edge in state.polygon.edges() {
                assert!(edge.signed_distance(state.ball.position) > radius);
            }
            let drift = state.polygon.edges()[0].signed_distance(state.ball.position) - start_distance;
            assert!(drift.abs() < 1e-3);
        }

        assert_eq!(state.impacts, 0);
        assert!(state.polygon.edges() == &edges[..]);
    }

    #[test]
    fn test_report_matches_live_sparks_at_hit() {
        // Cap below the burst size; built directly since SimConfig rejects it
        let mut state = SimState::from_parts(
            Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0),
            Polygon::hexagon(Vec2::ZERO, 250.0),
            ParticleSystem::new(0.3, 80.0, 160.0, 4),
            Physics {
                gravity: Vec2::new(0.0, 500.0),
                angular_speed: 0.0,
                spark_count: 10,
            },
            7,
        );

        let report = (0..120)
            .map(|_| step(&mut state, DT).unwrap())
            .find(|r| r.hit.is_some())
            .expect("ball never reached the bottom");
        assert_eq!(report.sparks_spawned, 4);
        assert_eq!(state.sparks.len(), report.sparks_spawned);
    }

    #[test]
    fn test_default_config_reports_full_burst() {
        let mut state = SimState::new(&SimConfig::default()).unwrap();
        let report = (0..600)
            .map(|_| step(&mut state, DT).unwrap())
            .find(|r| r.hit.is_some())
            .expect("ball never hit a wall");
        assert_eq!(report.sparks_spawned, SimConfig::default().spark_count);
        assert_eq!(state.sparks.len(), report.sparks_spawned);
    }

    #[test]
    fn test_gravity_only_changes_vertical_velocity() {
        let mut state = scene(
            Ball::new(Vec2::ZERO, Vec2::new(30.0, -20.0), 10.0),
            Vec2::new(0.0, 500.0),
            0.3,
        );
        for _ in 0..10 {
            let before = state.ball.velocity;
            let report = step(&mut state, DT).unwrap();
            assert!(report.hit.is_none());
            assert_eq!(state.ball.velocity.x, before.x);
            assert!(state.ball.velocity.y > before.y);
            assert!((state.ball.velocity.y - before.y - 500.0 * DT).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rotation_advances_per_step() {
        let mut state = scene(Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0), Vec2::ZERO, 0.5);
        step(&mut state, 0.2).unwrap();
        assert!((state.polygon.rotation - 0.1).abs() < 1e-6);
        // Outline is rebuilt from the new angle
        let expected = crate::sim::polygon::compute_vertices(
            Vec2::ZERO,
            250.0,
            0.1,
            6,
            (-30.0_f32).to_radians(),
        );
        for (a, b) in state.polygon.vertices().iter().zip(expected.iter()) {
            assert!((*a - *b).length() < 1e-3);
        }
    }

    #[test]
    fn test_invalid_dt_rejected_without_side_effects() {
        let mut state = SimState::new(&SimConfig::default()).unwrap();
        let position = state.ball.position;

        for dt in [-0.01, f32::NAN, f32::INFINITY] {
            assert!(matches!(step(&mut state, dt), Err(SimError::InvalidTick(_))));
        }
        assert_eq!(state.ball.position, position);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.polygon.rotation, 0.0);
    }

    #[test]
    fn test_zero_dt_is_a_no_op_for_motion() {
        let mut state = SimState::new(&SimConfig::default()).unwrap();
        let position = state.ball.position;
        let velocity = state.ball.velocity;
        step(&mut state, 0.0).unwrap();
        assert_eq!(state.ball.position, position);
        assert_eq!(state.ball.velocity, velocity);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = SimState::new(&SimConfig::default()).unwrap();
        let mut state2 = SimState::new(&SimConfig::default()).unwrap();

        for _ in 0..600 {
            step(&mut state1, DT).unwrap();
            step(&mut state2, DT).unwrap();
        }

        assert!(state1.impacts > 0);
        assert_eq!(state1.impacts, state2.impacts);
        assert_eq!(state1.ball.position, state2.ball.position);
        assert_eq!(state1.sparks.len(), state2.sparks.len());
        for (a, b) in state1.sparks.iter().zip(state2.sparks.iter()) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn test_long_run_keeps_only_live_sparks() {
        let mut state = SimState::new(&SimConfig::default()).unwrap();
        for _ in 0..3_000 {
            step(&mut state, DT).unwrap();
            assert!(state.sparks.iter().all(|s| s.remaining_life > 0.0));
            // At most 0.3s worth of impacts, one per tick
            assert!(state.sparks.len() <= 10 * 19);
        }
        assert!(state.impacts > 0);
        assert!((state.elapsed - 3_000.0 * DT as f64).abs() < 1e-3);
    }
}
