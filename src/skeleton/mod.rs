//! The skeleton an animation plays on.
//!
//! For mirroring we only need two things from it: whether a bone exists, and
//! the bone's reference (rest) pose, which stands in for the animation of a
//! bone that has no track.

use math::Transform;
use std::collections::HashMap;

pub type BoneId = usize;

pub struct Bone {
    pub name: String,
    pub parent: Option<BoneId>,
    /// Local-to-parent transform at rest.
    pub ref_pose: Transform,
}

#[derive(Default)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
    bones_by_name: HashMap<String, BoneId>,
}

/// The skeleton queries the mirror engine needs.
pub trait SkeletonQuery {
    /// Reference pose of the named bone, or `None` if there is no such bone.
    fn reference_pose(&self, bone_name: &str) -> Option<Transform>;

    fn has_bone(&self, bone_name: &str) -> bool {
        self.reference_pose(bone_name).is_some()
    }
}

impl Skeleton {
    pub fn new(bones: Vec<Bone>) -> Skeleton {
        let mut skel = Skeleton { bones, bones_by_name: HashMap::new() };
        skel.build_by_name_map();
        skel
    }

    fn build_by_name_map(&mut self) {
        use std::collections::hash_map::Entry::*;

        for (id, bone) in self.bones.iter().enumerate() {
            match self.bones_by_name.entry(bone.name.clone()) {
                Vacant(ve) => { ve.insert(id); }
                Occupied(_) => {
                    warn!("multiple bones have the name {}; using the first one", bone.name);
                }
            }
        }
    }

    pub fn find_bone_index(&self, bone_name: &str) -> Option<BoneId> {
        self.bones_by_name.get(bone_name).cloned()
    }

    pub fn num_bones(&self) -> usize {
        self.bones.len()
    }
}

impl SkeletonQuery for Skeleton {
    fn reference_pose(&self, bone_name: &str) -> Option<Transform> {
        self.find_bone_index(bone_name).map(|id| self.bones[id].ref_pose)
    }
}

#[test]
fn test_lookup() {
    use cgmath::vec3;

    let mut hand = Transform::identity();
    hand.translation = vec3(0.0, 5.0, 0.0);
    let skel = Skeleton::new(vec![
        Bone { name: "root".to_string(), parent: None, ref_pose: Transform::identity() },
        Bone { name: "hand".to_string(), parent: Some(0), ref_pose: hand },
        Bone { name: "hand".to_string(), parent: Some(0), ref_pose: Transform::identity() },
    ]);

    assert_eq!(skel.find_bone_index("hand"), Some(1));
    assert!(skel.has_bone("root"));
    assert!(!skel.has_bone("foot"));
    assert_eq!(skel.reference_pose("hand"), Some(hand));
}
