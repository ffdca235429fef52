use crate::{Matrix4, Point, Quaternion, ToVector3, Vector3};

/// A rigid transform: rotate first, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector3,
    pub rotate: Quaternion,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: Vector3::ZERO,
        rotate: Quaternion::IDENTITY,
    };

    pub fn new(translate: impl Into<Vector3>, rotate: Quaternion) -> Self {
        Self {
            translate: translate.into(),
            rotate,
        }
    }

    /// A rotation around the z axis followed by a translation in the xy plane.
    ///
    /// Positive angles rotate counter-clockwise when y points up.
    pub fn planar(translate: Point, z_degrees: f64) -> Self {
        Self::new(
            translate.to_vector3(),
            Quaternion::from_rotation_z(z_degrees.to_radians()),
        )
    }

    pub fn to_matrix4(&self) -> Matrix4 {
        if self.is_translation_only() {
            return Matrix4::from_translation(self.translate);
        }
        Matrix4::from_rotation_translation(self.rotate, self.translate)
    }

    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        if self.is_translation_only() {
            return point + self.translate;
        }
        self.rotate * point + self.translate
    }

    pub fn is_translation_only(&self) -> bool {
        self.rotate == Quaternion::IDENTITY
    }
}
