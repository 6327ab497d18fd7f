//! Conversions between glam (public API) and nalgebra (rapier internals).
//!
//! All game-facing math uses glam; rapier speaks nalgebra. These helpers are
//! the only place the two meet.

use glam::{Quat, Vec3};
use rapier3d::na::Quaternion;
use rapier3d::prelude::{Isometry, Real, Rotation, Translation, Vector};

/// glam vector → nalgebra vector.
#[inline]
pub fn na_vector(v: Vec3) -> Vector<Real> {
    Vector::new(v.x, v.y, v.z)
}

/// glam quaternion → nalgebra unit quaternion.
#[inline]
pub fn na_rotation(q: Quat) -> Rotation<Real> {
    Rotation::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

/// glam pose → nalgebra isometry.
#[inline]
pub fn na_isometry(position: Vec3, rotation: Quat) -> Isometry<Real> {
    Isometry::from_parts(Translation::from(na_vector(position)), na_rotation(rotation))
}

/// nalgebra vector → glam vector.
#[inline]
pub fn glam_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// nalgebra unit quaternion → glam quaternion.
#[inline]
pub fn glam_rotation(q: &Rotation<Real>) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_round_trip() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(glam_vector(&na_vector(v)), v);
    }

    #[test]
    fn test_rotation_round_trip() {
        let q = Quat::from_rotation_y(0.7);
        let back = glam_rotation(&na_rotation(q));
        assert!((back.x - q.x).abs() < 1e-6);
        assert!((back.y - q.y).abs() < 1e-6);
        assert!((back.z - q.z).abs() < 1e-6);
        assert!((back.w - q.w).abs() < 1e-6);
    }
}
