use math::{Axis, Rotator, Transform};
use skeleton::SkeletonQuery;

/// How to mirror one bone (or one pair of twin bones).
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorRule {
    pub bone_name: String,
    /// The bone's counterpart on the other side, if it has one. The two
    /// bones trade animation when mirrored.
    pub twin_bone: Option<String>,
    /// Transforms are reflected through the plane perpendicular to this.
    pub mirror_axis: Axis,
    /// Local axis negated after the reflection.
    pub flip_axis: Option<Axis>,
    /// Added to the mirrored rotation, for bones whose left and right local
    /// frames aren't mirror images of each other.
    pub rotation_offset: Rotator,
    /// If true, twin bones trade translation along with rotation and scale.
    /// If false, each bone keeps its own (mirrored) translation.
    pub mirror_translation: bool,
}

impl MirrorRule {
    /// A rule for a bone on the mirror plane (spine, head, ...).
    pub fn single(bone_name: &str, mirror_axis: Axis) -> MirrorRule {
        MirrorRule {
            bone_name: bone_name.to_string(),
            twin_bone: None,
            mirror_axis,
            flip_axis: None,
            rotation_offset: Rotator::zero(),
            mirror_translation: false,
        }
    }

    /// A rule for a left/right pair.
    pub fn twin(bone_name: &str, twin_bone: &str, mirror_axis: Axis) -> MirrorRule {
        MirrorRule {
            twin_bone: Some(twin_bone.to_string()),
            ..MirrorRule::single(bone_name, mirror_axis)
        }
    }

    pub fn with_flip_axis(mut self, flip_axis: Option<Axis>) -> MirrorRule {
        self.flip_axis = flip_axis;
        self
    }

    pub fn with_rotation_offset(mut self, offset: Rotator) -> MirrorRule {
        self.rotation_offset = offset;
        self
    }

    pub fn with_mirror_translation(mut self, mirror_translation: bool) -> MirrorRule {
        self.mirror_translation = mirror_translation;
        self
    }

    pub fn is_twin(&self) -> bool {
        self.twin_bone.is_some()
    }

    /// Mirrors one transform according to this rule.
    ///
    /// Reflect, add the rotation offset by way of Euler angles, make the
    /// scale non-negative, renormalize.
    pub fn mirror_transform(&self, tm: &Transform) -> Transform {
        let mut tm = *tm;
        tm.mirror(self.mirror_axis, self.flip_axis);

        let rotator = tm.rotator() + self.rotation_offset;
        tm.set_rotator(rotator);
        tm.abs_scale();
        tm.normalize_rotation();
        tm
    }
}

/// An ordered list of mirror rules for one skeleton (or family of
/// skeletons). A later rule for the same bone overrides an earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MirrorTable {
    pub rules: Vec<MirrorRule>,
}

/// Why a rule won't apply to some skeleton.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleMismatch {
    MissingBone(String),
    MissingTwin(String),
}

impl MirrorTable {
    pub fn new(rules: Vec<MirrorRule>) -> MirrorTable {
        MirrorTable { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lists the rules that name bones the skeleton doesn't have. These are
    /// skipped when mirroring; tables are often written for several
    /// skeleton variants at once, so this is informational.
    pub fn mismatches<S: SkeletonQuery>(&self, skeleton: &S) -> Vec<(usize, RuleMismatch)> {
        let mut res = vec![];
        for (i, rule) in self.rules.iter().enumerate() {
            if !skeleton.has_bone(&rule.bone_name) {
                res.push((i, RuleMismatch::MissingBone(rule.bone_name.clone())));
                continue;
            }
            if let Some(ref twin) = rule.twin_bone {
                if !skeleton.has_bone(twin) {
                    res.push((i, RuleMismatch::MissingTwin(twin.clone())));
                }
            }
        }
        res
    }
}

#[test]
fn test_rule_builders() {
    let rule = MirrorRule::twin("upperarm_l", "upperarm_r", Axis::X)
        .with_flip_axis(Some(Axis::Z))
        .with_mirror_translation(true);
    assert!(rule.is_twin());
    assert_eq!(rule.twin_bone.as_ref().map(|s| s.as_str()), Some("upperarm_r"));
    assert_eq!(rule.flip_axis, Some(Axis::Z));
    assert!(rule.mirror_translation);
    assert!(rule.rotation_offset.is_zero());
    assert!(!MirrorRule::single("spine", Axis::X).is_twin());
}

#[test]
fn test_mismatches() {
    use skeleton::{Bone, Skeleton};

    let bone = |name: &str| Bone {
        name: name.to_string(),
        parent: None,
        ref_pose: Transform::identity(),
    };
    let skel = Skeleton::new(vec![bone("spine"), bone("hand_l")]);
    let table = MirrorTable::new(vec![
        MirrorRule::single("spine", Axis::X),
        MirrorRule::twin("hand_l", "hand_r", Axis::X),
        MirrorRule::single("tail", Axis::X),
    ]);

    assert_eq!(table.mismatches(&skel), vec![
        (1, RuleMismatch::MissingTwin("hand_r".to_string())),
        (2, RuleMismatch::MissingBone("tail".to_string())),
    ]);
}
