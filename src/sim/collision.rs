//! Ball-vs-edge collision detection and response
//!
//! Edges are checked in polygon order and the first penetrated one wins, not
//! the nearest. Near a vertex the ball can overlap two edges; only the first
//! is resolved this tick and the other is left for the next one.

use glam::Vec2;

use super::polygon::Edge;
use super::state::Ball;
use crate::reflect;

/// A detected ball/edge overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Index of the edge in polygon order
    pub edge_index: usize,
    /// Inward unit normal of the edge
    pub normal: Vec2,
    /// Signed distance from the ball center to the edge line at detection
    pub signed_distance: f32,
    /// How far the ball overlapped the edge (radius - signed distance)
    pub penetration: f32,
    /// Point where the ball surface meets the edge line
    pub contact: Vec2,
}

/// Check one edge: the ball overlaps the edge line and its center projects
/// onto the finite segment
pub fn ball_edge_collision(position: Vec2, radius: f32, edge: &Edge) -> Option<(f32, f32)> {
    let signed_distance = edge.signed_distance(position);
    if signed_distance >= radius {
        return None;
    }

    let proj = edge.projection(position);
    if proj < 0.0 || proj > edge.length() {
        return None;
    }

    Some((signed_distance, radius - signed_distance))
}

/// Find the first edge the ball penetrates, without touching the ball
pub fn find_edge_collision(ball: &Ball, edges: &[Edge]) -> Option<EdgeHit> {
    edges.iter().enumerate().find_map(|(edge_index, edge)| {
        ball_edge_collision(ball.position, ball.radius(), edge).map(
            |(signed_distance, penetration)| EdgeHit {
                edge_index,
                normal: edge.normal,
                signed_distance,
                penetration,
                // Contact on the edge line, directly "below" the ball center
                contact: ball.position + edge.normal * (penetration - ball.radius()),
            },
        )
    })
}

/// Resolve at most one collision: reflect velocity, push the ball out so it
/// is tangent to the edge, and report the contact point
pub fn resolve_collision(ball: &mut Ball, edges: &[Edge]) -> Option<EdgeHit> {
    let hit = find_edge_collision(ball, edges)?;

    ball.velocity = reflect(ball.velocity, hit.normal);
    ball.position += hit.normal * hit.penetration;

    let contact = ball.position - hit.normal * ball.radius();
    Some(EdgeHit { contact, ..hit })
}
