//! Euler-angle rotations.
//!
//! The angle conventions are the ones of the engine the animation data comes
//! from: pitch turns about Y, yaw about Z, roll about X, all in degrees, and
//! a rotator is applied roll first, then pitch, then yaw. Mirror-table
//! rotation offsets are authored in this form, so the round trip
//! quaternion -> rotator -> quaternion has to use exactly these formulas.

use cgmath::{Angle, Deg, Quaternion, Rad};
use std::ops::Add;

/// |z*x - w*y| above this means we're at a pole (pitch of +-90 degrees).
const SINGULARITY_THRESHOLD: f32 = 0.4999995;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Rotator {
        Rotator { pitch, yaw, roll }
    }

    pub fn zero() -> Rotator {
        Rotator::default()
    }

    pub fn is_zero(&self) -> bool {
        self.pitch == 0.0 && self.yaw == 0.0 && self.roll == 0.0
    }

    pub fn from_quaternion(q: Quaternion<f32>) -> Rotator {
        let (x, y, z, w) = (q.v.x, q.v.y, q.v.z, q.s);

        let singularity_test = z * x - w * y;
        let yaw_y = 2.0 * (w * z + x * y);
        let yaw_x = 1.0 - 2.0 * (y * y + z * z);
        let yaw = degrees(Rad::atan2(yaw_y, yaw_x));

        if singularity_test < -SINGULARITY_THRESHOLD {
            let pitch = -90.0;
            let roll = normalize_axis(-yaw - 2.0 * degrees(Rad::atan2(x, w)));
            Rotator { pitch, yaw, roll }
        } else if singularity_test > SINGULARITY_THRESHOLD {
            let pitch = 90.0;
            let roll = normalize_axis(yaw - 2.0 * degrees(Rad::atan2(x, w)));
            Rotator { pitch, yaw, roll }
        } else {
            let pitch = degrees(Rad::asin(2.0 * singularity_test));
            let roll = degrees(Rad::atan2(
                -2.0 * (w * x + y * z),
                1.0 - 2.0 * (x * x + y * y),
            ));
            Rotator { pitch, yaw, roll }
        }
    }

    pub fn to_quaternion(&self) -> Quaternion<f32> {
        let half = |angle: f32| Rad::from(Deg(angle % 360.0)) / 2.0;
        let (sp, cp) = half(self.pitch).sin_cos();
        let (sy, cy) = half(self.yaw).sin_cos();
        let (sr, cr) = half(self.roll).sin_cos();

        let x = cr * sp * sy - sr * cp * cy;
        let y = -cr * sp * cy - sr * cp * sy;
        let z = cr * cp * sy - sr * sp * cy;
        let w = cr * cp * cy + sr * sp * sy;
        Quaternion::new(w, x, y, z)
    }
}

impl Add for Rotator {
    type Output = Rotator;

    fn add(self, other: Rotator) -> Rotator {
        Rotator {
            pitch: self.pitch + other.pitch,
            yaw: self.yaw + other.yaw,
            roll: self.roll + other.roll,
        }
    }
}

fn degrees(angle: Rad<f32>) -> f32 {
    Deg::from(angle).0
}

/// Wraps an angle in degrees into (-180, 180].
fn normalize_axis(angle: f32) -> f32 {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

#[cfg(test)]
fn same_rotation(a: Quaternion<f32>, b: Quaternion<f32>) -> bool {
    use cgmath::InnerSpace;
    (a.dot(b).abs() - 1.0).abs() < 1e-5
}

#[test]
fn test_zero_rotator_is_identity() {
    let q = Rotator::zero().to_quaternion();
    assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(Rotator::from_quaternion(q), Rotator::zero());
}

#[test]
fn test_yaw_is_about_z() {
    let q = Rotator::new(0.0, 90.0, 0.0).to_quaternion();
    let h = 0.5f32.sqrt();
    assert!(same_rotation(q, Quaternion::new(h, 0.0, 0.0, h)));

    let r = Rotator::from_quaternion(q);
    assert!((r.yaw - 90.0).abs() < 1e-3);
    assert!(r.pitch.abs() < 1e-3);
    assert!(r.roll.abs() < 1e-3);
}

#[test]
fn test_round_trip() {
    let rotators = [
        Rotator::new(10.0, 20.0, 30.0),
        Rotator::new(-45.0, 170.0, -120.0),
        Rotator::new(89.0, -30.0, 5.0),
    ];
    for r in &rotators {
        let back = Rotator::from_quaternion(r.to_quaternion());
        assert!((back.pitch - r.pitch).abs() < 1e-2, "{:?} vs {:?}", back, r);
        assert!((back.yaw - r.yaw).abs() < 1e-2, "{:?} vs {:?}", back, r);
        assert!((back.roll - r.roll).abs() < 1e-2, "{:?} vs {:?}", back, r);
    }
}

#[test]
fn test_pole_keeps_rotation() {
    // Gimbal lock: the angles aren't unique, but the rotation must survive.
    let q = Rotator::new(90.0, 40.0, 10.0).to_quaternion();
    let r = Rotator::from_quaternion(q);
    assert_eq!(r.pitch, 90.0);
    assert!(same_rotation(r.to_quaternion(), q));
}

#[test]
fn test_normalize_axis() {
    assert_eq!(normalize_axis(190.0), -170.0);
    assert_eq!(normalize_axis(-190.0), 170.0);
    assert_eq!(normalize_axis(180.0), 180.0);
    assert_eq!(normalize_axis(540.0), 180.0);
}
