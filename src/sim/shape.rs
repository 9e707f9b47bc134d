//! SDF-based shape overlap
//!
//! Shapes are tested against their true outline using signed distance
//! fields, so a circle skimming past the corner of a rectangle does not
//! count as a hit the way a bounding-box test would.

use glam::Vec2;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box given its centre and half extents
pub fn sd_box(p: Vec2, center: Vec2, half: Vec2) -> f32 {
    let d = (p - center).abs() - half;
    let outside = d.max(Vec2::ZERO).length();
    let inside = d.x.max(d.y).min(0.0);
    outside + inside
}

/// An occupied region in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned rectangle spanning `min..max`
    Rect { min: Vec2, max: Vec2 },
}

impl Shape {
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Shape::Rect {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Signed distance from a point to this shape's outline
    pub fn distance(&self, p: Vec2) -> f32 {
        match *self {
            Shape::Circle { center, radius } => sd_circle(p, center, radius),
            Shape::Rect { min, max } => sd_box(p, (min + max) * 0.5, (max - min) * 0.5),
        }
    }
}

/// Whether two shapes overlap; touching edges do not count
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    match (*a, *b) {
        (Shape::Circle { center, radius }, other) | (other, Shape::Circle { center, radius }) => {
            other.distance(center) < radius
        }
        (
            Shape::Rect {
                min: a_min,
                max: a_max,
            },
            Shape::Rect {
                min: b_min,
                max: b_max,
            },
        ) => a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y,
    }
}
