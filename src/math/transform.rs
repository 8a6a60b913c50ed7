use cgmath::{vec3, InnerSpace, Matrix3, One, Quaternion, SquareMatrix, Vector3, Zero};
use math::{Axis, Rotator};

/// Squared column length below which a basis column is treated as having no
/// scale.
const SMALL_NUMBER: f32 = 1e-8;
/// Per-component tolerance for a basis column to count as zero when building
/// a rotation.
const KINDA_SMALL_NUMBER: f32 = 1e-4;

/// Translation, rotation and (non-uniform) scale of a bone, applied to a
/// point as `translation + rotation * (scale * point)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::identity()
    }
}

impl Transform {
    pub fn identity() -> Transform {
        Transform {
            translation: Vector3::zero(),
            rotation: Quaternion::one(),
            scale: vec3(1.0, 1.0, 1.0),
        }
    }

    pub fn new(
        translation: Vector3<f32>,
        rotation: Quaternion<f32>,
        scale: Vector3<f32>,
    ) -> Transform {
        Transform { translation, rotation, scale }
    }

    /// The 3x3 part of the transform's matrix. Column i is the bone's local
    /// i-axis, scaled by the i-th scale factor.
    pub fn scaled_basis(&self) -> Matrix3<f32> {
        let r = Matrix3::from(self.rotation);
        Matrix3::from_cols(
            r.x * self.scale.x,
            r.y * self.scale.y,
            r.z * self.scale.z,
        )
    }

    /// Reflects the transform through the plane perpendicular to
    /// `mirror_axis`, then negates the local `flip_axis` (if any).
    ///
    /// Done on the matrix form and decomposed back into TRS. A reflection
    /// leaves a basis of negative determinant, which can't be a rotation;
    /// that is absorbed by negating the X scale (and X column).
    pub fn mirror(&mut self, mirror_axis: Axis, flip_axis: Option<Axis>) {
        let mut basis = self.scaled_basis();
        let mut translation = self.translation;

        let k = mirror_axis.index();
        for col in 0..3 {
            basis[col][k] = -basis[col][k];
        }
        translation[k] = -translation[k];

        if let Some(flip) = flip_axis {
            let f = flip.index();
            basis[f] = -basis[f];
        }

        self.set_from_basis(basis, translation);
    }

    fn set_from_basis(&mut self, basis: Matrix3<f32>, translation: Vector3<f32>) {
        let mut axes = basis;
        let mut scale = Vector3::zero();
        for i in 0..3 {
            let len2 = axes[i].magnitude2();
            if len2 > SMALL_NUMBER {
                let len = len2.sqrt();
                scale[i] = len;
                axes[i] = axes[i] / len;
            }
        }

        if basis.determinant() < 0.0 {
            scale.x = -scale.x;
            axes.x = -axes.x;
        }

        self.translation = translation;
        self.rotation = normalized_or_identity(rotation_from_axes(axes));
        self.scale = scale;
    }

    pub fn rotator(&self) -> Rotator {
        Rotator::from_quaternion(self.rotation)
    }

    pub fn set_rotator(&mut self, rotator: Rotator) {
        self.rotation = rotator.to_quaternion();
    }

    pub fn abs_scale(&mut self) {
        let s = self.scale;
        self.scale = vec3(s.x.abs(), s.y.abs(), s.z.abs());
    }

    pub fn normalize_rotation(&mut self) {
        self.rotation = normalized_or_identity(self.rotation);
    }

    /// Applies the transform to a point.
    pub fn transform_point(&self, p: Vector3<f32>) -> Vector3<f32> {
        let scaled = vec3(p.x * self.scale.x, p.y * self.scale.y, p.z * self.scale.z);
        self.translation + self.rotation * scaled
    }
}

fn rotation_from_axes(axes: Matrix3<f32>) -> Quaternion<f32> {
    let nearly_zero = |v: Vector3<f32>| {
        v.x.abs() <= KINDA_SMALL_NUMBER
            && v.y.abs() <= KINDA_SMALL_NUMBER
            && v.z.abs() <= KINDA_SMALL_NUMBER
    };
    if nearly_zero(axes.x) || nearly_zero(axes.y) || nearly_zero(axes.z) {
        return Quaternion::one();
    }
    Quaternion::from(axes)
}

fn normalized_or_identity(q: Quaternion<f32>) -> Quaternion<f32> {
    if q.magnitude2() >= SMALL_NUMBER {
        q.normalize()
    } else {
        Quaternion::one()
    }
}

#[cfg(test)]
fn assert_vec_close(a: Vector3<f32>, b: Vector3<f32>) {
    assert!((a - b).magnitude() < 1e-4, "{:?} != {:?}", a, b);
}

#[test]
fn test_mirror_identity_x() {
    let mut tm = Transform::identity();
    tm.translation = vec3(1.0, 2.0, 3.0);
    tm.mirror(Axis::X, None);

    assert_vec_close(tm.translation, vec3(-1.0, 2.0, 3.0));
    assert_eq!(tm.rotation, Quaternion::one());
    // The reflection shows up as a negative X scale.
    assert_vec_close(tm.scale, vec3(-1.0, 1.0, 1.0));
}

#[test]
fn test_mirror_flips_yaw() {
    // A yaw of 90 degrees about Z, reflected through the YZ plane, turns
    // the other way.
    let mut tm = Transform::identity();
    tm.rotation = Rotator::new(0.0, 90.0, 0.0).to_quaternion();
    tm.mirror(Axis::X, None);
    tm.abs_scale();

    let expected = Rotator::new(0.0, -90.0, 0.0).to_quaternion();
    assert!((tm.rotation.dot(expected).abs() - 1.0).abs() < 1e-5);
}

#[test]
fn test_mirror_maps_points_through_plane() {
    // For any axis and flip, mirroring the transform must send a point p
    // in bone space to the reflection of where the original sent p, up to
    // the flip of the local axis.
    let mut tm = Transform::identity();
    tm.translation = vec3(0.5, -1.0, 2.0);
    tm.rotation = Rotator::new(20.0, -35.0, 60.0).to_quaternion();
    tm.scale = vec3(1.0, 2.0, 0.5);

    for &axis in &[Axis::X, Axis::Y, Axis::Z] {
        for &flip in &[None, Some(Axis::X), Some(Axis::Y), Some(Axis::Z)] {
            let mut mirrored = tm;
            mirrored.mirror(axis, flip);

            let mut p = vec3(0.3, -0.7, 1.1);
            let mut expected = tm.transform_point(p);
            expected[axis.index()] = -expected[axis.index()];
            if let Some(f) = flip {
                p[f.index()] = -p[f.index()];
            }
            assert_vec_close(mirrored.transform_point(p), expected);
        }
    }
}

#[test]
fn test_degenerate_rotation_normalizes_to_identity() {
    let mut tm = Transform::identity();
    tm.rotation = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    tm.normalize_rotation();
    assert_eq!(tm.rotation, Quaternion::one());
}
