//! Rotating regular polygon geometry
//!
//! The container is described by a center, a circumradius and a rotation
//! angle. Vertices and edges are derived from those each tick; nothing about
//! the outline is carried over between ticks.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::{normalize_angle, perp, polar_to_cartesian, rotate};

/// One side of the polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub p1: Vec2,
    pub p2: Vec2,
    /// Unit normal pointing toward the polygon interior
    pub normal: Vec2,
}

impl Edge {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self {
            p1,
            p2,
            normal: perp(p2 - p1).normalize_or_zero(),
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.p2 - self.p1).length()
    }

    /// Unit vector from `p1` to `p2`
    #[inline]
    pub fn direction(&self) -> Vec2 {
        (self.p2 - self.p1).normalize_or_zero()
    }

    /// Distance from the edge line along the inward normal (positive inside)
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        (point - self.p1).dot(self.normal)
    }

    /// Position of `point` projected onto the edge, measured from `p1`
    #[inline]
    pub fn projection(&self, point: Vec2) -> f32 {
        (point - self.p1).dot(self.direction())
    }
}

/// Vertices of a regular polygon
///
/// Vertex `i` sits at angle `angle_offset + TAU·i/n`, rotated by `rotation`,
/// so vertices run in increasing-angle order.
pub fn compute_vertices(
    center: Vec2,
    radius: f32,
    rotation: f32,
    vertex_count: usize,
    angle_offset: f32,
) -> Vec<Vec2> {
    (0..vertex_count)
        .map(|i| {
            let base = angle_offset + TAU * i as f32 / vertex_count as f32;
            center + rotate(polar_to_cartesian(1.0, base), rotation) * radius
        })
        .collect()
}

/// Edges joining consecutive vertices, closing back to vertex 0
///
/// For the increasing-angle winding of `compute_vertices`, `perp(p2 - p1)`
/// points into the polygon.
pub fn compute_edges(vertices: &[Vec2]) -> Vec<Edge> {
    let n = vertices.len();
    (0..n)
        .map(|i| Edge::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// The rotating container
#[derive(Debug, Clone)]
pub struct Polygon {
    pub center: Vec2,
    /// Circumradius
    pub radius: f32,
    /// Current rotation (radians, normalized to [-π, π))
    pub rotation: f32,
    pub vertex_count: usize,
    /// Angle of vertex 0 at zero rotation
    pub angle_offset: f32,
    vertices: Vec<Vec2>,
    edges: Vec<Edge>,
}

impl Polygon {
    pub fn new(center: Vec2, radius: f32, vertex_count: usize, angle_offset: f32) -> Self {
        let mut polygon = Self {
            center,
            radius,
            rotation: 0.0,
            vertex_count,
            angle_offset,
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(vertex_count),
        };
        polygon.refresh();
        polygon
    }

    /// Flat-sided hexagon with vertex 0 at -30°
    pub fn hexagon(center: Vec2, radius: f32) -> Self {
        Self::new(center, radius, 6, (-30.0_f32).to_radians())
    }

    /// Advance rotation by `angular_speed * dt` and rebuild the outline
    pub fn rotate(&mut self, angular_speed: f32, dt: f32) {
        if angular_speed != 0.0 {
            self.rotation = normalize_angle(self.rotation + angular_speed * dt);
        }
        self.refresh();
    }

    /// Set an absolute rotation and rebuild the outline
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = normalize_angle(rotation);
        self.refresh();
    }

    /// Recompute vertices and edges from the current rotation
    pub fn refresh(&mut self) {
        self.vertices = compute_vertices(
            self.center,
            self.radius,
            self.rotation,
            self.vertex_count,
            self.angle_offset,
        );
        self.edges = compute_edges(&self.vertices);
    }

    /// Vertices for the current rotation
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Edges for the current rotation, in vertex order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Inscribed-circle radius
    pub fn apothem(&self) -> f32 {
        self.radius * (std::f32::consts::PI / self.vertex_count as f32).cos()
    }

    /// Check if a point is on the interior side of every edge
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.edges.iter().all(|e| e.signed_distance(point) >= 0.0)
    }
}
