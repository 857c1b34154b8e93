pub mod orientation;
pub mod planar;
pub mod transform;

pub use glam::{dvec3, DMat3, DMat4, DQuat, DVec3};
pub use orientation::{decompose_forward, decompose_forward_with, EulerAngles};
pub use planar::{Segment, SegmentHit};
pub use transform::{Orientation, Transform, REFERENCE_FORWARD};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
