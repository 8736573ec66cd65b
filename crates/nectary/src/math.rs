//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. The [`Transform`] type provides position, rotation,
//! and scale for scene nodes.

pub use glam::{EulerRot, Mat4, Quat, Vec3};

/// A 3D transform: position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform (origin, no rotation, uniform scale of 1).
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform at the given position.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    /// Return a copy rotated by the given quaternion.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Return a copy with uniform scale applied.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Compute the 4x4 model matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Build a rotation from euler angles given in degrees.
///
/// The spin around Y (the principal axis) is applied first, then the X and Z
/// tilts — the yaw/pitch/roll order plant orientation is authored in.
pub fn rotation_from_euler_degrees(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        y.to_radians(),
        x.to_radians(),
        z.to_radians(),
    )
}

/// Recover euler angles in degrees (same axis order as
/// [`rotation_from_euler_degrees`]).
pub fn rotation_to_euler_degrees(rotation: Quat) -> (f32, f32, f32) {
    let (y, x, z) = rotation.to_euler(EulerRot::YXZ);
    (x.to_degrees(), y.to_degrees(), z.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn from_xyz_translates() {
        let t = Transform::from_xyz(1.0, 2.0, 3.0);
        let col3 = t.matrix().col(3);
        assert_eq!((col3.x, col3.y, col3.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn euler_degrees_round_trip() {
        let q = rotation_from_euler_degrees(-4.0, 135.0, 3.5);
        let (x, y, z) = rotation_to_euler_degrees(q);
        assert!((x - -4.0).abs() < 0.01);
        assert!((y - 135.0).abs() < 0.01);
        assert!((z - 3.5).abs() < 0.01);
    }
}
