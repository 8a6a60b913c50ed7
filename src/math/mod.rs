//! Small amount of 3D math on top of cgmath: the axis enum, Euler rotators,
//! and the TRS transform with its mirror operation.

mod axis;
mod rotator;
mod transform;

pub use self::axis::Axis;
pub use self::rotator::Rotator;
pub use self::transform::Transform;
