//! Planar geometry in terrain space.
//!
//! Terrain coordinates are `f32` world units with the origin at the lower-left
//! corner of the field.  Angles are degrees throughout; positive rotation is
//! counter-clockwise.

use std::ops::{Add, Mul, Neg, Sub};

/// Two positions closer than this are the same road node.
pub const POSITION_EPSILON: f32 = 1e-3;

/// Determinants below this magnitude are treated as parallel lines.
const PARALLEL_EPSILON: f32 = 1e-6;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or direction in terrain space.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    /// Rotate counter-clockwise by `degrees`.
    pub fn rotated(self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3-D cross product.  Positive when `other` lies
    /// counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Position equality within [`POSITION_EPSILON`].
    #[inline]
    pub fn approx_eq(self, other: Vec2) -> bool {
        (self.x - other.x).abs() <= POSITION_EPSILON && (self.y - other.y).abs() <= POSITION_EPSILON
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(a: [f32; 2]) -> Self {
        Vec2::new(a[0], a[1])
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

/// Unsigned angle between two directions in degrees, in `[0, 180]`.
///
/// Returns `0.0` when either vector has zero length.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle between two undirected lines in degrees, folded into `[0, 90]`.
pub fn crossing_angle(a: Vec2, b: Vec2) -> f32 {
    let angle = angle_between(a, b);
    if angle > 90.0 { 180.0 - angle } else { angle }
}

// ── Lines and segments ────────────────────────────────────────────────────────

/// Intersection of the infinite lines through `(p1, p2)` and `(q1, q2)`.
///
/// Uses the `Ax + By = C` form.  Returns `None` for parallel or degenerate
/// lines.
pub fn line_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = a2 * q1.x + b2 * q1.y;

    let delta = a1 * b2 - a2 * b1;
    if delta.abs() <= PARALLEL_EPSILON {
        return None;
    }
    Some(Vec2::new((b2 * c1 - b1 * c2) / delta, (a1 * c2 - a2 * c1) / delta))
}

/// Parameter `t` of the projection of `p` onto the line `a + t·(b − a)`.
///
/// Returns `0.0` for a degenerate segment.
pub fn project_param(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 <= f32::EPSILON {
        0.0
    } else {
        (p - a).dot(ab) / len2
    }
}

/// Shortest distance from `p` to the closed segment `[a, b]`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let t = project_param(p, a, b).clamp(0.0, 1.0);
    p.distance(a + (b - a) * t)
}

/// Intersection point of the closed segments `[a0, a1]` and `[b0, b1]`.
///
/// Parallel segments never intersect here, even if collinear and overlapping;
/// callers that care about overlap use [`segment_distance`].
pub fn segment_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = r.cross(s);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }
    let qp = b0 - a0;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a0 + r * t)
    } else {
        None
    }
}

/// Shortest distance between the closed segments `[a0, a1]` and `[b0, b1]`.
pub fn segment_distance(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> f32 {
    if segment_intersection(a0, a1, b0, b1).is_some() {
        return 0.0;
    }
    point_segment_distance(a0, b0, b1)
        .min(point_segment_distance(a1, b0, b1))
        .min(point_segment_distance(b0, a0, a1))
        .min(point_segment_distance(b1, a0, a1))
}
