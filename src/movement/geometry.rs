//! Movement domain: penetration queries for the controller capsule.
//!
//! The controller body is always a vertical capsule: a core segment of
//! `2 * half_segment` along Y, inflated by `radius`. Other shapes are
//! expressed in world space and assumed axis-aligned.

use bevy::prelude::*;

/// Result of a distance query between another shape (A) and the body (B).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Separation {
    pub overlapped: bool,
    /// Closest point on the other shape's boundary.
    pub point_a: Vec2,
    /// Closest point on the body's boundary.
    pub point_b: Vec2,
    /// Unit direction the body must move to separate.
    pub normal: Vec2,
}

impl Separation {
    /// Shortest translation that moves the body out of the other shape.
    pub fn vector(&self) -> Vec2 {
        self.point_a - self.point_b
    }

    pub fn depth(&self) -> f32 {
        if self.overlapped {
            self.vector().length()
        } else {
            0.0
        }
    }
}

/// World-space shapes the body can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { center: Vec2, half_extents: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Capsule(Capsule),
}

/// Vertical capsule in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub center: Vec2,
    pub radius: f32,
    pub half_segment: f32,
}

impl Capsule {
    pub fn new(center: Vec2, radius: f32, half_segment: f32) -> Self {
        Self {
            center,
            radius,
            half_segment: half_segment.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_segment
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_segment
    }

    /// Distance query of `other` against this capsule.
    pub fn separation(&self, other: &Shape) -> Separation {
        match *other {
            Shape::Box {
                center,
                half_extents,
            } => self.box_separation(center - half_extents, center + half_extents),
            Shape::Circle { center, radius } => {
                let core = Vec2::new(self.center.x, center.y.clamp(self.bottom(), self.top()));
                round_separation(core, self.radius, center, radius)
            }
            Shape::Capsule(other) => {
                let (mine, theirs) = closest_vertical_points(self, &other);
                round_separation(mine, self.radius, theirs, other.radius)
            }
        }
    }

    fn box_separation(&self, min: Vec2, max: Vec2) -> Separation {
        let x = self.center.x;
        let (y0, y1) = (self.bottom(), self.top());

        // Closest pair between the core segment and the box
        let (seg_y, box_y) = if y1 < min.y {
            (y1, min.y)
        } else if y0 > max.y {
            (y0, max.y)
        } else {
            let mid = (y0.max(min.y) + y1.min(max.y)) * 0.5;
            (mid, mid)
        };
        let on_segment = Vec2::new(x, seg_y);
        let on_box = Vec2::new(x.clamp(min.x, max.x), box_y);

        let offset = on_segment - on_box;
        let dist = offset.length();

        if dist > f32::EPSILON {
            let normal = offset / dist;
            return Separation {
                overlapped: dist < self.radius,
                point_a: on_box,
                point_b: on_segment - normal * self.radius,
                normal,
            };
        }

        // Core segment is inside the box: push out along the cheapest axis
        let r = self.radius;
        let pushes = [
            (max.y + r - y0, Vec2::Y, Vec2::new(x, y0 - r)),
            (y1 + r - min.y, Vec2::NEG_Y, Vec2::new(x, y1 + r)),
            (max.x + r - x, Vec2::X, Vec2::new(x - r, self.center.y)),
            (x + r - min.x, Vec2::NEG_X, Vec2::new(x + r, self.center.y)),
        ];
        let (depth, normal, support) = pushes
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .unwrap_or(pushes[0]);

        Separation {
            overlapped: true,
            point_a: support + normal * depth,
            point_b: support,
            normal,
        }
    }
}

/// Sphere-sphere style separation between two inflated points.
/// `body` belongs to the controller, `other` to the contacted shape.
fn round_separation(body: Vec2, body_radius: f32, other: Vec2, other_radius: f32) -> Separation {
    let offset = body - other;
    let dist = offset.length();
    let normal = if dist > f32::EPSILON {
        offset / dist
    } else {
        Vec2::Y
    };

    Separation {
        overlapped: dist < body_radius + other_radius,
        point_a: other + normal * other_radius,
        point_b: body - normal * body_radius,
        normal,
    }
}

/// Closest points between the core segments of two vertical capsules.
fn closest_vertical_points(a: &Capsule, b: &Capsule) -> (Vec2, Vec2) {
    if a.top() < b.bottom() {
        (
            Vec2::new(a.center.x, a.top()),
            Vec2::new(b.center.x, b.bottom()),
        )
    } else if a.bottom() > b.top() {
        (
            Vec2::new(a.center.x, a.bottom()),
            Vec2::new(b.center.x, b.top()),
        )
    } else {
        let mid = (a.bottom().max(b.bottom()) + a.top().min(b.top())) * 0.5;
        (Vec2::new(a.center.x, mid), Vec2::new(b.center.x, mid))
    }
}
