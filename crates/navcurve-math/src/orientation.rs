//! Forward-vector to Euler angle decomposition.
//!
//! Angles are in degrees. Yaw is a bearing in `[0, 360)` measured so that the
//! negative Z axis has yaw 0, negative X has yaw 90, positive Z has yaw 180 and
//! positive X has yaw 270. Pitch is the elevation above the X/Z plane.

use navcurve_core::Tolerance;
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// Rotation angles recovered from a forward direction, in degrees.
///
/// Roll is always zero: it cannot be encoded in a single direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl EulerAngles {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
    };

    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Unit forward vector described by `pitch` and `yaw` (roll has no effect).
    ///
    /// Inverse of [`decompose_forward`] for non-degenerate input.
    pub fn forward(&self) -> Vector3 {
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vector3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }
}

/// Decompose `forward` into pitch and yaw using the default direction tolerance.
pub fn decompose_forward(forward: Vector3) -> EulerAngles {
    decompose_forward_with(forward, Tolerance::default())
}

/// Decompose `forward` into pitch and yaw.
///
/// A forward vector shorter than `tol.direction` yields [`EulerAngles::ZERO`].
pub fn decompose_forward_with(forward: Vector3, tol: Tolerance) -> EulerAngles {
    let length = forward.length();
    if length < tol.direction {
        log::warn!("Degenerate forward vector {forward}, using zero rotation");
        return EulerAngles::ZERO;
    }

    // asin is undefined past +-1, which rounding can reach for vertical vectors.
    let pitch = (forward.y / length).clamp(-1.0, 1.0).asin().to_degrees();

    EulerAngles {
        pitch,
        roll: 0.0,
        yaw: yaw_of(forward, tol),
    }
}

fn yaw_of(forward: Vector3, tol: Tolerance) -> f64 {
    if tol.is_direction_zero(forward.z) {
        return if forward.x < 0.0 {
            90.0
        } else if forward.x > 0.0 {
            270.0
        } else {
            0.0
        };
    }

    // atan only covers (-90, 90); stitch the Z halfspaces into a full bearing.
    let angle = (forward.x / forward.z).atan().to_degrees();
    if forward.z >= 0.0 {
        angle + 180.0
    } else if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    #[test]
    fn test_zero_vector() {
        assert_eq!(decompose_forward(Vector3::ZERO), EulerAngles::ZERO);
        assert_eq!(decompose_forward(dvec3(5e-5, 0.0, 0.0)), EulerAngles::ZERO);
    }

    #[test]
    fn test_axis_bearings() {
        assert_relative_eq!(decompose_forward(dvec3(0.0, 0.0, -1.0)).yaw, 0.0);
        assert_relative_eq!(decompose_forward(dvec3(-1.0, 0.0, 0.0)).yaw, 90.0);
        assert_relative_eq!(decompose_forward(dvec3(0.0, 0.0, 1.0)).yaw, 180.0);
        assert_relative_eq!(decompose_forward(dvec3(1.0, 0.0, 0.0)).yaw, 270.0);
    }

    #[test]
    fn test_vertical_has_zero_yaw() {
        let up = decompose_forward(dvec3(0.0, 3.0, 0.0));
        assert_relative_eq!(up.pitch, 90.0);
        assert_eq!(up.yaw, 0.0);

        let down = decompose_forward(dvec3(0.0, -2.0, 0.0));
        assert_relative_eq!(down.pitch, -90.0);
    }

    #[test]
    fn test_diagonal_quadrants() {
        // negative Z halfspace wraps into (270, 360) or [0, 90)
        assert_relative_eq!(decompose_forward(dvec3(1.0, 0.0, -1.0)).yaw, 315.0, epsilon = 1e-9);
        assert_relative_eq!(decompose_forward(dvec3(-1.0, 0.0, -1.0)).yaw, 45.0, epsilon = 1e-9);
        // positive Z halfspace maps into (90, 270)
        assert_relative_eq!(decompose_forward(dvec3(-1.0, 0.0, 1.0)).yaw, 135.0, epsilon = 1e-9);
        assert_relative_eq!(decompose_forward(dvec3(1.0, 0.0, 1.0)).yaw, 225.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roll_is_always_zero() {
        let angles = decompose_forward(dvec3(0.3, -0.7, 2.0));
        assert_eq!(angles.roll, 0.0);
    }

    #[test]
    fn test_pitch_ignores_scale() {
        let a = decompose_forward(dvec3(1.0, 1.0, 0.0));
        let b = decompose_forward(dvec3(10.0, 10.0, 0.0));
        assert_relative_eq!(a.pitch, 45.0, epsilon = 1e-9);
        assert_relative_eq!(a.pitch, b.pitch, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_round_trip() {
        let directions = [
            dvec3(0.2, 0.1, -0.9),
            dvec3(-3.0, 2.0, 1.0),
            dvec3(4.0, -1.0, 5.0),
            dvec3(-0.5, 0.0, -0.5),
            dvec3(1.0, 0.0, 0.0),
            dvec3(-2.0, 1.0, 0.0),
            dvec3(0.0, 0.0, 7.0),
        ];
        for dir in directions {
            let rebuilt = decompose_forward(dir).forward();
            let expected = dir.normalize();
            assert!(
                (rebuilt - expected).length() < 1e-9,
                "round trip of {dir} gave {rebuilt}, expected {expected}"
            );
        }
    }
}
