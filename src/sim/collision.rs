//! Slice geometry: bounded segment intersection
//!
//! The slash gesture is a polyline of recent pointer samples; each fruit's
//! hit region is the pair of diagonals across its bounding square. A slice
//! is any bounded intersection between a trail segment and either diagonal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A bounded line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    pub fn length(&self) -> f32 {
        (self.b - self.a).length()
    }
}

/// Parallel-rejection threshold for the intersection denominator
const PARALLEL_EPS: f32 = 1e-6;

/// Intersection point of two bounded segments, if any
///
/// Standard parametric test: with r = s1.b - s1.a and s = s2.b - s2.a, solve
/// s1.a + t*r = s2.a + u*s and accept when both t and u land in [0, 1].
/// Parallel and collinear pairs report no intersection.
pub fn segment_intersection(s1: &Segment, s2: &Segment) -> Option<Vec2> {
    let r = s1.b - s1.a;
    let s = s2.b - s2.a;

    let denom = r.perp_dot(s);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let qp = s2.a - s1.a;
    let t = qp.perp_dot(s) / denom;
    let u = qp.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(s1.a + r * t)
    } else {
        None
    }
}

/// Whether a trail segment crosses either diagonal of a fruit's hit region
pub fn crosses_either(trail_seg: &Segment, diagonals: &[Segment; 2]) -> bool {
    segment_intersection(trail_seg, &diagonals[0]).is_some()
        || segment_intersection(trail_seg, &diagonals[1]).is_some()
}
