use crate::{DMat3, DMat4, DQuat, Vector3};
use serde::{Deserialize, Serialize};

/// Canonical direction a locator points along before its orientation is applied.
pub const REFERENCE_FORWARD: Vector3 = Vector3::Y;

/// Capability to rotate direction vectors, used to seed curve tangents from
/// a waypoint's orientation.
pub trait Orientation {
    /// Rotate a direction vector (translation, if any, is not applied).
    fn rotate(&self, v: Vector3) -> Vector3;

    /// The rotated [`REFERENCE_FORWARD`] direction.
    fn forward(&self) -> Vector3 {
        self.rotate(REFERENCE_FORWARD)
    }
}

impl Orientation for DQuat {
    fn rotate(&self, v: Vector3) -> Vector3 {
        *self * v
    }
}

impl Orientation for DMat3 {
    fn rotate(&self, v: Vector3) -> Vector3 {
        *self * v
    }
}

/// Rigid body transform (rotation + translation, no shear/scale), e.g. a
/// waypoint locator's world matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_rotation_translation(rotation: DQuat, translation: Vector3) -> Self {
        Self::from_mat4(DMat4::from_rotation_translation(rotation, translation))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Orientation for Transform {
    fn rotate(&self, v: Vector3) -> Vector3 {
        self.transform_vector(v)
    }
}
