//! The mirror engine.
//!
//! For every rule of a mirror table, every frame of the rule's bone (and its
//! twin, if any) is reflected through the rule's mirror plane. Twin bones
//! then trade their mirrored animation, so the left arm gets the mirrored
//! motion of the right arm and vice versa.
//!
//! A bone without a track is taken to be at rest: its reference pose is
//! mirrored instead, giving a single position and rotation key.
//!
//! Keys are mirrored slot by slot. A frame with no key on some channel still
//! has no key on that channel afterwards.

mod table;

pub use self::table::{MirrorRule, MirrorTable, RuleMismatch};

use animation::{BoneTrack, TrackSink, TrackSource};
use math::Transform;
use skeleton::SkeletonQuery;

/// What happened during one `mirror_into` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorStats {
    pub rules_applied: usize,
    pub rules_skipped: usize,
    pub tracks_written: usize,
}

/// Tracks produced by `mirror_sequence`, by bone name, in the order they
/// were first written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MirroredTracks {
    tracks: Vec<(String, BoneTrack)>,
}

impl MirroredTracks {
    pub fn new() -> MirroredTracks {
        MirroredTracks::default()
    }

    pub fn get(&self, bone_name: &str) -> Option<&BoneTrack> {
        self.tracks.iter()
            .find(|entry| entry.0 == bone_name)
            .map(|entry| &entry.1)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, BoneTrack)> {
        self.tracks
    }
}

impl TrackSink for MirroredTracks {
    fn set_track(&mut self, bone_name: &str, track: BoneTrack) {
        match self.tracks.iter_mut().find(|entry| entry.0 == bone_name) {
            Some(entry) => entry.1 = track,
            None => self.tracks.push((bone_name.to_string(), track)),
        }
    }
}

/// Mirrors `source` with `table`, returning the new tracks. Bones no rule
/// touches aren't in the result.
pub fn mirror_sequence<A, S>(source: &A, skeleton: &S, table: &MirrorTable) -> MirroredTracks
where A: TrackSource, S: SkeletonQuery {
    let mut out = MirroredTracks::new();
    mirror_into(source, skeleton, table, &mut out);
    out
}

/// Mirrors `source` with `table`, writing each new track into `sink` as soon
/// as its rule is done.
///
/// `set_track` is called once per applied rule (twice for twin rules, twin
/// bone first). Afterwards the sink's derived data is invalidated and it is
/// marked dirty. If the table or the source is empty, the sink isn't
/// touched at all.
pub fn mirror_into<A, S, K>(source: &A, skeleton: &S, table: &MirrorTable, sink: &mut K) -> MirrorStats
where A: TrackSource, S: SkeletonQuery, K: TrackSink {
    let mut stats = MirrorStats::default();

    if table.is_empty() {
        debug!("mirror table has no rules, nothing to do");
        return stats;
    }
    if source.track_names().is_empty() {
        debug!("animation has no tracks, nothing to do");
        return stats;
    }

    let frame_count = source.frame_count();
    for rule in &table.rules {
        match apply_rule(source, skeleton, rule, frame_count, sink) {
            Some(n) => {
                stats.rules_applied += 1;
                stats.tracks_written += n;
            }
            None => stats.rules_skipped += 1,
        }
    }

    sink.invalidate_baked_data();
    sink.mark_dirty();

    debug!("applied {} rule(s), skipped {}, wrote {} track(s)",
        stats.rules_applied, stats.rules_skipped, stats.tracks_written);

    stats
}

/// Returns the number of tracks written, or `None` if the rule was skipped.
fn apply_rule<A, S, K>(
    source: &A,
    skeleton: &S,
    rule: &MirrorRule,
    frame_count: usize,
    sink: &mut K,
) -> Option<usize>
where A: TrackSource, S: SkeletonQuery, K: TrackSink {
    let bone_name = &rule.bone_name;
    let ref_pose = match skeleton.reference_pose(bone_name) {
        Some(tm) => tm,
        None => {
            debug!("skipping rule for {}: bone not in skeleton", bone_name);
            return None;
        }
    };

    let twin_name = match rule.twin_bone {
        Some(ref twin_name) => twin_name,
        None => {
            let track = match source.track(bone_name) {
                Some(track) => track,
                None => {
                    debug!("skipping rule for {}: no track", bone_name);
                    return None;
                }
            };
            sink.set_track(bone_name, mirror_track(track, frame_count, rule));
            return Some(1);
        }
    };

    let twin_ref_pose = match skeleton.reference_pose(twin_name) {
        Some(tm) => tm,
        None => {
            debug!("skipping rule for {}: twin {} not in skeleton", bone_name, twin_name);
            return None;
        }
    };

    let track = source.track(bone_name);
    let twin_track = source.track(twin_name);
    if track.is_none() && twin_track.is_none() {
        debug!("skipping rule for {}: neither it nor twin {} has a track", bone_name, twin_name);
        return None;
    }

    let mirrored = mirror_bone(track, &ref_pose, frame_count, rule);
    let twin_mirrored = mirror_bone(twin_track, &twin_ref_pose, frame_count, rule);
    let (to_twin, to_bone) = cross_assign(mirrored, twin_mirrored, rule.mirror_translation);

    sink.set_track(twin_name, to_twin);
    sink.set_track(bone_name, to_bone);
    Some(2)
}

fn mirror_bone(
    track: Option<&BoneTrack>,
    ref_pose: &Transform,
    frame_count: usize,
    rule: &MirrorRule,
) -> BoneTrack {
    match track {
        Some(track) => mirror_track(track, frame_count, rule),
        None => mirror_ref_pose(ref_pose, rule),
    }
}

/// Mirrors every frame of `track`, keeping the channel layout.
fn mirror_track(track: &BoneTrack, frame_count: usize, rule: &MirrorRule) -> BoneTrack {
    let mut out = BoneTrack::new();
    for frame in 0..frame_count {
        let key = track.key(frame);
        let tm = rule.mirror_transform(&key.to_transform());
        out.push_masked(&key, &tm);
    }
    out.trim();
    out
}

/// A single-key track (position and rotation only) holding the mirrored
/// reference pose.
fn mirror_ref_pose(ref_pose: &Transform, rule: &MirrorRule) -> BoneTrack {
    let tm = rule.mirror_transform(ref_pose);
    let mut out = BoneTrack::new();
    out.positions.push(Some(tm.translation));
    out.rotations.push(Some(tm.rotation));
    out
}

/// Builds the (twin-named, bone-named) output tracks out of the mirrored
/// tracks of the bone and of its twin. Rotation and scale always cross over;
/// translation crosses over only if `swap_translation`.
fn cross_assign(
    mirrored: BoneTrack,
    twin_mirrored: BoneTrack,
    swap_translation: bool,
) -> (BoneTrack, BoneTrack) {
    let (to_twin_positions, to_bone_positions) = if swap_translation {
        (mirrored.positions, twin_mirrored.positions)
    } else {
        (twin_mirrored.positions, mirrored.positions)
    };

    let to_twin = BoneTrack {
        positions: to_twin_positions,
        rotations: mirrored.rotations,
        scales: mirrored.scales,
    };
    let to_bone = BoneTrack {
        positions: to_bone_positions,
        rotations: twin_mirrored.rotations,
        scales: twin_mirrored.scales,
    };
    (to_twin, to_bone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animation::{Channel, RawAnimation};
    use cgmath::{vec3, InnerSpace, Quaternion, Vector3};
    use math::{Axis, Rotator};
    use skeleton::{Bone, Skeleton};

    fn skeleton(names: &[&str]) -> Skeleton {
        Skeleton::new(names.iter().map(|name| Bone {
            name: name.to_string(),
            parent: None,
            ref_pose: Transform::identity(),
        }).collect())
    }

    fn anim(frame_count: usize, tracks: Vec<(&str, BoneTrack)>) -> RawAnimation {
        let mut anim = RawAnimation::new("test".to_string(), frame_count);
        for (name, track) in tracks {
            anim.tracks.push((name.to_string(), track));
        }
        anim
    }

    fn positions_track(positions: Vec<Vector3<f32>>) -> BoneTrack {
        let mut track = BoneTrack::new();
        track.positions = Channel::from_keys(positions);
        track
    }

    fn assert_vec_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-4, "{:?} != {:?}", a, b);
    }

    fn assert_same_rotation(a: Quaternion<f32>, b: Quaternion<f32>) {
        assert!((a.dot(b).abs() - 1.0).abs() < 1e-4, "{:?} != {:?}", a, b);
    }

    /// Counts the calls the engine makes on its sink.
    #[derive(Default)]
    struct RecordingSink {
        set: Vec<String>,
        invalidated: usize,
        dirtied: usize,
    }

    impl TrackSink for RecordingSink {
        fn set_track(&mut self, bone_name: &str, _track: BoneTrack) {
            self.set.push(bone_name.to_string());
        }
        fn invalidate_baked_data(&mut self) { self.invalidated += 1; }
        fn mark_dirty(&mut self) { self.dirtied += 1; }
    }

    #[test]
    fn end_to_end_single_bone() {
        let skel = skeleton(&["root", "spine"]);
        let mut track = positions_track(vec![vec3(1.0, 0.0, 0.0), vec3(2.0, 0.0, 0.0)]);
        track.rotations = Channel::from_keys(vec![Quaternion::new(1.0, 0.0, 0.0, 0.0); 2]);
        track.scales = Channel::from_keys(vec![vec3(1.0, 1.0, 1.0), vec3(-2.0, 1.0, 1.0)]);
        let source = anim(2, vec![("spine", track)]);
        let table = MirrorTable::new(vec![MirrorRule::single("spine", Axis::X)]);

        let out = mirror_sequence(&source, &skel, &table);
        assert_eq!(out.len(), 1);
        let spine = out.get("spine").unwrap();

        let positions: Vec<_> = spine.positions.keys().collect();
        assert_eq!(positions.len(), 2);
        assert_vec_close(positions[0], vec3(-1.0, 0.0, 0.0));
        assert_vec_close(positions[1], vec3(-2.0, 0.0, 0.0));

        assert_eq!(spine.rotations.num_keys(), 2);
        for rot in spine.rotations.keys() {
            assert_same_rotation(rot, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        }

        let scales: Vec<_> = spine.scales.keys().collect();
        assert_vec_close(scales[0], vec3(1.0, 1.0, 1.0));
        assert_vec_close(scales[1], vec3(2.0, 1.0, 1.0));
    }

    #[test]
    fn mirroring_twice_is_identity() {
        let skel = skeleton(&["spine"]);
        let mut track = positions_track(vec![vec3(1.0, 2.0, 3.0), vec3(-0.5, 0.25, 4.0)]);
        track.rotations = Channel::from_keys(vec![
            Rotator::new(10.0, 20.0, 30.0).to_quaternion(),
            Rotator::new(-40.0, 100.0, -15.0).to_quaternion(),
        ]);
        let source = anim(2, vec![("spine", track.clone())]);

        for &flip in &[None, Some(Axis::Y), Some(Axis::Z)] {
            let rule = MirrorRule::single("spine", Axis::X).with_flip_axis(flip);
            let table = MirrorTable::new(vec![rule]);

            let once = mirror_sequence(&source, &skel, &table);
            let once = anim(2, once.into_vec().into_iter()
                .map(|(_, t)| ("spine", t)).collect());
            let twice = mirror_sequence(&once, &skel, &table);
            let back = twice.get("spine").unwrap();

            for (a, b) in back.positions.keys().zip(track.positions.keys()) {
                assert_vec_close(a, b);
            }
            assert_eq!(back.rotations.num_keys(), 2);
            for (a, b) in back.rotations.keys().zip(track.rotations.keys()) {
                assert_same_rotation(a, b);
            }
        }
    }

    fn twin_source() -> RawAnimation {
        let mut left = positions_track(vec![vec3(1.0, 0.0, 0.0)]);
        left.rotations = Channel::from_keys(vec![Rotator::new(0.0, 30.0, 0.0).to_quaternion()]);
        let mut right = positions_track(vec![vec3(-2.0, 1.0, 0.0)]);
        right.rotations = Channel::from_keys(vec![Rotator::new(0.0, -50.0, 0.0).to_quaternion()]);
        anim(1, vec![("hand_l", left), ("hand_r", right)])
    }

    #[test]
    fn twins_keep_own_translation() {
        let skel = skeleton(&["hand_l", "hand_r"]);
        let table = MirrorTable::new(vec![
            MirrorRule::twin("hand_l", "hand_r", Axis::X).with_mirror_translation(false),
        ]);
        let out = mirror_sequence(&twin_source(), &skel, &table);

        let left = out.get("hand_l").unwrap();
        let right = out.get("hand_r").unwrap();
        assert_vec_close(right.positions.get(0).unwrap(), vec3(2.0, 1.0, 0.0));
        assert_vec_close(left.positions.get(0).unwrap(), vec3(-1.0, 0.0, 0.0));

        // Rotations trade sides.
        assert_same_rotation(right.rotations.get(0).unwrap(),
            Rotator::new(0.0, -30.0, 0.0).to_quaternion());
        assert_same_rotation(left.rotations.get(0).unwrap(),
            Rotator::new(0.0, 50.0, 0.0).to_quaternion());
    }

    #[test]
    fn twins_trade_translation() {
        let skel = skeleton(&["hand_l", "hand_r"]);
        let table = MirrorTable::new(vec![
            MirrorRule::twin("hand_l", "hand_r", Axis::X).with_mirror_translation(true),
        ]);
        let out = mirror_sequence(&twin_source(), &skel, &table);

        assert_vec_close(out.get("hand_r").unwrap().positions.get(0).unwrap(), vec3(-1.0, 0.0, 0.0));
        assert_vec_close(out.get("hand_l").unwrap().positions.get(0).unwrap(), vec3(2.0, 1.0, 0.0));
    }

    #[test]
    fn sparse_keys_stay_sparse() {
        let skel = skeleton(&["spine"]);
        let mut track = BoneTrack::new();
        track.positions = Channel::from_slots(vec![
            Some(vec3(1.0, 0.0, 0.0)), None, Some(vec3(3.0, 0.0, 0.0)),
        ]);
        track.rotations = Channel::from_keys(vec![Quaternion::new(1.0, 0.0, 0.0, 0.0); 3]);
        let source = anim(3, vec![("spine", track)]);
        let table = MirrorTable::new(vec![MirrorRule::single("spine", Axis::X)]);

        let out = mirror_sequence(&source, &skel, &table);
        let spine = out.get("spine").unwrap();
        assert_eq!(spine.positions.num_keys(), 2);
        assert_eq!(spine.positions.get(1), None);
        assert_vec_close(spine.positions.get(2).unwrap(), vec3(-3.0, 0.0, 0.0));
        assert_eq!(spine.rotations.num_keys(), 3);
        assert_eq!(spine.scales.num_keys(), 0);
    }

    #[test]
    fn keys_past_frame_count_are_dropped() {
        let skel = skeleton(&["spine"]);
        let track = positions_track(vec![vec3(1.0, 0.0, 0.0); 5]);
        let source = anim(3, vec![("spine", track)]);
        let table = MirrorTable::new(vec![MirrorRule::single("spine", Axis::Y)]);

        let out = mirror_sequence(&source, &skel, &table);
        assert_eq!(out.get("spine").unwrap().positions.num_keys(), 3);
    }

    #[test]
    fn scale_is_never_negative() {
        let skel = skeleton(&["spine"]);
        let mut track = BoneTrack::new();
        track.scales = Channel::from_keys(vec![
            vec3(-1.0, -2.0, 0.5),
            vec3(3.0, -0.1, -4.0),
            vec3(-1.0, -1.0, -1.0),
        ]);
        track.rotations = Channel::from_keys(vec![
            Rotator::new(15.0, -70.0, 120.0).to_quaternion(); 3
        ]);
        let source = anim(3, vec![("spine", track)]);

        for &axis in &[Axis::X, Axis::Y, Axis::Z] {
            for &flip in &[None, Some(Axis::X), Some(Axis::Y), Some(Axis::Z)] {
                let rule = MirrorRule::single("spine", axis).with_flip_axis(flip);
                let out = mirror_sequence(&source, &skel, &MirrorTable::new(vec![rule]));
                let spine = out.get("spine").unwrap();
                assert_eq!(spine.scales.num_keys(), 3);
                for s in spine.scales.keys() {
                    assert!(s.x >= 0.0 && s.y >= 0.0 && s.z >= 0.0, "{:?}", s);
                }
            }
        }
    }

    #[test]
    fn bone_missing_from_skeleton_is_skipped() {
        let skel = skeleton(&["spine"]);
        let source = anim(1, vec![
            ("spine", positions_track(vec![vec3(1.0, 0.0, 0.0)])),
            ("tail", positions_track(vec![vec3(1.0, 0.0, 0.0)])),
        ]);
        let table = MirrorTable::new(vec![
            MirrorRule::single("tail", Axis::X),
            MirrorRule::twin("spine", "spine_twin", Axis::X),
            MirrorRule::single("spine", Axis::X),
        ]);

        let mut out = MirroredTracks::new();
        let stats = mirror_into(&source, &skel, &table, &mut out);
        assert_eq!(stats, MirrorStats { rules_applied: 1, rules_skipped: 2, tracks_written: 1 });
        assert_eq!(out.len(), 1);
        assert!(out.get("tail").is_none());
        assert!(out.get("spine_twin").is_none());
    }

    #[test]
    fn untracked_twin_uses_reference_pose() {
        let offset = Rotator::new(0.0, 0.0, 90.0);
        let mut ref_pose = Transform::identity();
        ref_pose.translation = vec3(2.0, 3.0, 4.0);
        ref_pose.rotation = Rotator::new(0.0, 45.0, 0.0).to_quaternion();
        ref_pose.scale = vec3(2.0, 2.0, 2.0);
        let skel = Skeleton::new(vec![
            Bone { name: "foot_l".to_string(), parent: None, ref_pose: Transform::identity() },
            Bone { name: "foot_r".to_string(), parent: None, ref_pose },
        ]);
        let mut left = positions_track(vec![vec3(1.0, 0.0, 0.0); 3]);
        left.scales = Channel::from_keys(vec![vec3(1.0, 1.0, 1.0); 3]);
        let source = anim(3, vec![("foot_l", left)]);
        let rule = MirrorRule::twin("foot_l", "foot_r", Axis::X).with_rotation_offset(offset);
        let expected = rule.mirror_transform(&ref_pose);
        let table = MirrorTable::new(vec![rule]);

        let out = mirror_sequence(&source, &skel, &table);
        let left = out.get("foot_l").unwrap();
        let right = out.get("foot_r").unwrap();

        // foot_r keeps its own (rest) translation: one key.
        assert_eq!(right.positions.num_keys(), 1);
        assert_vec_close(right.positions.get(0).unwrap(), vec3(-2.0, 3.0, 4.0));
        // foot_l gets foot_r's rotation: one key, and no scale at all.
        assert_eq!(left.rotations.num_keys(), 1);
        assert_same_rotation(left.rotations.get(0).unwrap(), expected.rotation);
        assert_eq!(left.scales.num_keys(), 0);
        // foot_l's own translation and foot_r's inherited scale are per frame.
        assert_eq!(left.positions.num_keys(), 3);
        assert_eq!(right.scales.num_keys(), 3);
    }

    #[test]
    fn untracked_bone_uses_reference_pose() {
        let mut ref_pose = Transform::identity();
        ref_pose.translation = vec3(5.0, 1.0, 0.0);
        ref_pose.rotation = Rotator::new(30.0, 0.0, 0.0).to_quaternion();
        let skel = Skeleton::new(vec![
            Bone { name: "hand_l".to_string(), parent: None, ref_pose },
            Bone { name: "hand_r".to_string(), parent: None, ref_pose: Transform::identity() },
        ]);
        let mut right = positions_track(vec![vec3(-1.0, 0.0, 0.0), vec3(-2.0, 0.0, 0.0)]);
        right.scales = Channel::from_keys(vec![vec3(1.0, 1.0, 1.0); 2]);
        let source = anim(2, vec![("hand_r", right)]);
        let rule = MirrorRule::twin("hand_l", "hand_r", Axis::X).with_mirror_translation(true);
        let expected = rule.mirror_transform(&ref_pose);
        let table = MirrorTable::new(vec![rule]);

        let out = mirror_sequence(&source, &skel, &table);
        let left = out.get("hand_l").unwrap();
        let right = out.get("hand_r").unwrap();

        // hand_r gets everything of hand_l's mirrored rest pose, which has
        // no scale key.
        assert_eq!(right.positions.num_keys(), 1);
        assert_vec_close(right.positions.get(0).unwrap(), vec3(-5.0, 1.0, 0.0));
        assert_eq!(right.rotations.num_keys(), 1);
        assert_same_rotation(right.rotations.get(0).unwrap(), expected.rotation);
        assert_eq!(right.scales.num_keys(), 0);
        // hand_l gets hand_r's mirrored frames.
        assert_eq!(left.positions.num_keys(), 2);
        assert_vec_close(left.positions.get(1).unwrap(), vec3(2.0, 0.0, 0.0));
        assert_eq!(left.scales.num_keys(), 2);
        assert_eq!(left.rotations.num_keys(), 0);
    }

    #[test]
    fn rules_without_any_track_are_skipped() {
        let skel = skeleton(&["spine", "hand_l", "hand_r", "neck"]);
        let source = anim(1, vec![("neck", positions_track(vec![vec3(0.0, 1.0, 0.0)]))]);
        let table = MirrorTable::new(vec![
            MirrorRule::single("spine", Axis::X),
            MirrorRule::twin("hand_l", "hand_r", Axis::X),
        ]);

        let mut sink = RecordingSink::default();
        let stats = mirror_into(&source, &skel, &table, &mut sink);
        assert_eq!(stats.rules_skipped, 2);
        assert!(sink.set.is_empty());
        // The pass still ran, so derived data goes.
        assert_eq!(sink.invalidated, 1);
        assert_eq!(sink.dirtied, 1);
    }

    #[test]
    fn sink_sees_each_write() {
        let skel = skeleton(&["spine", "hand_l", "hand_r"]);
        let source = twin_source();
        let table = MirrorTable::new(vec![
            MirrorRule::twin("hand_l", "hand_r", Axis::X),
            MirrorRule::single("hand_l", Axis::X),
        ]);

        let mut sink = RecordingSink::default();
        mirror_into(&source, &skel, &table, &mut sink);
        assert_eq!(sink.set, vec!["hand_r", "hand_l", "hand_l"]);
        assert_eq!(sink.invalidated, 1);
        assert_eq!(sink.dirtied, 1);
    }

    #[test]
    fn later_rule_overrides_earlier() {
        let skel = skeleton(&["hand_l", "hand_r"]);
        let source = twin_source();
        let table = MirrorTable::new(vec![
            MirrorRule::twin("hand_l", "hand_r", Axis::X),
            MirrorRule::single("hand_l", Axis::Y),
        ]);

        let out = mirror_sequence(&source, &skel, &table);
        assert_eq!(out.len(), 2);
        // The second rule mirrors hand_l's own source track across Y.
        assert_vec_close(out.get("hand_l").unwrap().positions.get(0).unwrap(), vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn empty_inputs_do_nothing() {
        let skel = skeleton(&["spine"]);
        let mut sink = RecordingSink::default();

        let source = anim(1, vec![("spine", positions_track(vec![vec3(1.0, 0.0, 0.0)]))]);
        mirror_into(&source, &skel, &MirrorTable::default(), &mut sink);

        let empty = anim(10, vec![]);
        let table = MirrorTable::new(vec![MirrorRule::single("spine", Axis::X)]);
        mirror_into(&empty, &skel, &table, &mut sink);

        assert!(sink.set.is_empty());
        assert_eq!(sink.invalidated, 0);
        assert_eq!(sink.dirtied, 0);
    }

    #[test]
    fn rotation_offset_is_added() {
        let skel = skeleton(&["spine"]);
        let mut track = BoneTrack::new();
        track.rotations = Channel::from_keys(vec![Quaternion::new(1.0, 0.0, 0.0, 0.0)]);
        let source = anim(1, vec![("spine", track)]);
        let rule = MirrorRule::single("spine", Axis::X)
            .with_rotation_offset(Rotator::new(0.0, 90.0, 0.0));

        let out = mirror_sequence(&source, &skel, &MirrorTable::new(vec![rule]));
        let rot = out.get("spine").unwrap().rotations.get(0).unwrap();
        assert_same_rotation(rot, Rotator::new(0.0, 90.0, 0.0).to_quaternion());
        assert!((rot.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn applying_to_animation_replaces_tracks() {
        let skel = skeleton(&["hand_l", "hand_r", "spine"]);
        let mut dest = twin_source();
        dest.tracks.push(("spine".to_string(), positions_track(vec![vec3(0.0, 1.0, 0.0)])));
        dest.transform_curves.push(::animation::TransformCurve {
            bone_name: "spine".to_string(),
            keys: vec![],
        });
        let source = dest.clone();
        let table = MirrorTable::new(vec![MirrorRule::twin("hand_l", "hand_r", Axis::X)]);

        mirror_into(&source, &skel, &table, &mut dest);
        assert_eq!(dest.track_names(), vec!["hand_l", "hand_r", "spine"]);
        assert_vec_close(dest.track("hand_l").unwrap().positions.get(0).unwrap(), vec3(-1.0, 0.0, 0.0));
        assert_eq!(dest.track("spine"), source.track("spine"));
        assert!(dest.transform_curves.is_empty());
        assert!(dest.raw_data_modified);
    }
}
