//! World space coordinate types for measurement
//!
//! World space is the metric coordinate system of the tracked scene: one
//! unit is one meter. Points picked by the user are stored here in double
//! precision and only narrowed to `Vec3` when handed to the renderer.

use std::fmt;
use std::ops::{Add, Sub};

use bevy::math::Vec3;

/// A point in world space, in meters.
#[derive(Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A vector in world space, the difference between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldVec {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub const ORIGIN: WorldPoint = WorldPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> WorldPoint {
        WorldPoint { x, y, z }
    }

    /// Create a `WorldPoint` from a renderer position.
    pub fn from_vec3(v: Vec3) -> WorldPoint {
        WorldPoint::new(v.x as f64, v.y as f64, v.z as f64)
    }

    /// Narrow to a renderer position.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// The point shifted by the given amount on each axis.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> WorldPoint {
        self + WorldVec::new(dx, dy, dz)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl WorldVec {
    pub const ZERO: WorldVec = WorldVec {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> WorldVec {
        WorldVec { x, y, z }
    }
}

/// Component-wise `a - b`.
pub fn subtract(a: WorldPoint, b: WorldPoint) -> WorldVec {
    WorldVec::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Length of `v`: sqrt(x² + y² + z²).
pub fn euclidean_norm(v: WorldVec) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

impl Sub<WorldPoint> for WorldPoint {
    type Output = WorldVec;

    fn sub(self, other: WorldPoint) -> WorldVec {
        subtract(self, other)
    }
}

impl Add<WorldVec> for WorldPoint {
    type Output = WorldPoint;

    fn add(self, other: WorldVec) -> WorldPoint {
        WorldPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl From<Vec3> for WorldPoint {
    fn from(v: Vec3) -> Self {
        WorldPoint::from_vec3(v)
    }
}

impl fmt::Debug for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "W({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [WorldPoint; 5] = [
        WorldPoint::ORIGIN,
        WorldPoint::new(1.0, 0.0, 0.0),
        WorldPoint::new(-0.25, 1.5, 3.0),
        WorldPoint::new(12.5, -7.125, 0.001),
        WorldPoint::new(-1e3, 2e-3, 42.0),
    ];

    #[test]
    fn test_distance_to_self_is_zero() {
        for p in POINTS {
            assert_eq!(euclidean_norm(subtract(p, p)), 0.0, "{p:?}");
        }
    }

    #[test]
    fn test_norm_is_symmetric() {
        for p in POINTS {
            for q in POINTS {
                let pq = euclidean_norm(subtract(p, q));
                let qp = euclidean_norm(subtract(q, p));
                assert_eq!(pq, qp, "norm should not depend on order: {p:?} {q:?}");
                assert!(pq >= 0.0);
            }
        }
    }

    #[test]
    fn test_norm_of_known_vectors() {
        assert_eq!(euclidean_norm(WorldVec::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(euclidean_norm(WorldVec::new(0.0, -2.0, 0.0)), 2.0);
        assert_eq!(euclidean_norm(WorldVec::new(2.0, 3.0, 6.0)), 7.0);
        assert_eq!(euclidean_norm(WorldVec::ZERO), 0.0);
    }

    #[test]
    fn test_subtract_is_componentwise() {
        let a = WorldPoint::new(1.0, 2.0, 3.0);
        let b = WorldPoint::new(0.5, -2.0, 10.0);
        assert_eq!(a - b, WorldVec::new(0.5, 4.0, -7.0));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn test_vec3_conversion() {
        let p = WorldPoint::from_vec3(Vec3::new(1.0, 0.5, -5.0));
        assert_eq!(p, WorldPoint::new(1.0, 0.5, -5.0));
        assert_eq!(p.to_vec3(), Vec3::new(1.0, 0.5, -5.0));
        assert!(p.is_finite());
        assert!(!WorldPoint::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
