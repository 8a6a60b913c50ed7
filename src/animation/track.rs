use animation::Channel;
use cgmath::{Quaternion, Vector3};
use math::Transform;

/// Raw keyframe data for one bone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoneTrack {
    pub positions: Channel<Vector3<f32>>,
    pub rotations: Channel<Quaternion<f32>>,
    pub scales: Channel<Vector3<f32>>,
}

/// What a track says about a single frame. Each channel is `None` when the
/// track has no key for it at that frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Key {
    pub position: Option<Vector3<f32>>,
    pub rotation: Option<Quaternion<f32>>,
    pub scale: Option<Vector3<f32>>,
}

impl Key {
    /// The transform for this key, with missing channels taken from the
    /// identity.
    pub fn to_transform(&self) -> Transform {
        let id = Transform::identity();
        Transform::new(
            self.position.unwrap_or(id.translation),
            self.rotation.unwrap_or(id.rotation),
            self.scale.unwrap_or(id.scale),
        )
    }
}

impl BoneTrack {
    pub fn new() -> BoneTrack {
        BoneTrack::default()
    }

    pub fn key(&self, frame: usize) -> Key {
        Key {
            position: self.positions.get(frame),
            rotation: self.rotations.get(frame),
            scale: self.scales.get(frame),
        }
    }

    /// Appends one frame whose values come from `tm`, keeping only the
    /// channels `present` has keys for.
    pub fn push_masked(&mut self, present: &Key, tm: &Transform) {
        self.positions.push(present.position.map(|_| tm.translation));
        self.rotations.push(present.rotation.map(|_| tm.rotation));
        self.scales.push(present.scale.map(|_| tm.scale));
    }

    pub fn trim(&mut self) {
        self.positions.trim();
        self.rotations.trim();
        self.scales.trim();
    }
}

#[test]
fn test_push_masked_keeps_sparsity() {
    use cgmath::vec3;

    let mut track = BoneTrack::new();
    track.positions = Channel::from_slots(vec![Some(vec3(1.0, 0.0, 0.0)), None]);

    let mut out = BoneTrack::new();
    for frame in 0..2 {
        let key = track.key(frame);
        out.push_masked(&key, &key.to_transform());
    }
    out.trim();

    assert_eq!(out.positions.num_keys(), 1);
    assert_eq!(out.rotations.len(), 0);
    assert_eq!(out.scales.len(), 0);
}
