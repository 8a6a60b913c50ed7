//! Raw animation data: per-bone keyframe tracks and the traits the mirror
//! engine reads tracks through and writes them to.

mod channel;
mod track;

pub use self::channel::Channel;
pub use self::track::{BoneTrack, Key};

use math::Transform;

/// Something the mirror engine can read source tracks from.
pub trait TrackSource {
    /// Number of frames in the clip. Keys past this are ignored.
    fn frame_count(&self) -> usize;
    /// Names of the bones that have tracks, in track order.
    fn track_names(&self) -> Vec<&str>;
    fn track(&self, bone_name: &str) -> Option<&BoneTrack>;
}

/// Something the mirror engine can write its output tracks to.
pub trait TrackSink {
    /// Adds the track for `bone_name`, replacing any existing one.
    fn set_track(&mut self, bone_name: &str, track: BoneTrack);

    /// Called once all tracks are written. Data derived from the old raw
    /// tracks must not survive this.
    fn invalidate_baked_data(&mut self) {}

    /// Called last, to flag that the raw data changed.
    fn mark_dirty(&mut self) {}
}

/// A keyed transform curve attached to a bone, layered on top of the raw
/// tracks. Curves are derived data: they're dropped whenever the raw tracks
/// are rewritten.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformCurve {
    pub bone_name: String,
    pub keys: Vec<(f32, Transform)>,
}

/// An animation clip: a frame count plus one raw track per animated bone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawAnimation {
    pub name: String,
    pub frame_count: usize,
    /// (bone name, track) in track order. Names are unique.
    pub tracks: Vec<(String, BoneTrack)>,
    pub transform_curves: Vec<TransformCurve>,
    /// Set when the raw tracks were modified after loading.
    pub raw_data_modified: bool,
}

impl RawAnimation {
    pub fn new(name: String, frame_count: usize) -> RawAnimation {
        RawAnimation { name, frame_count, ..Default::default() }
    }

    pub fn track_index(&self, bone_name: &str) -> Option<usize> {
        self.tracks.iter().position(|&(ref name, _)| name == bone_name)
    }
}

impl TrackSource for RawAnimation {
    fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn track_names(&self) -> Vec<&str> {
        self.tracks.iter().map(|&(ref name, _)| name.as_str()).collect()
    }

    fn track(&self, bone_name: &str) -> Option<&BoneTrack> {
        self.track_index(bone_name).map(|idx| &self.tracks[idx].1)
    }
}

impl TrackSink for RawAnimation {
    fn set_track(&mut self, bone_name: &str, track: BoneTrack) {
        match self.track_index(bone_name) {
            Some(idx) => self.tracks[idx].1 = track,
            None => self.tracks.push((bone_name.to_string(), track)),
        }
    }

    fn invalidate_baked_data(&mut self) {
        if !self.transform_curves.is_empty() {
            debug!("{}: dropping {} transform curve(s)",
                self.name, self.transform_curves.len());
        }
        self.transform_curves.clear();
    }

    fn mark_dirty(&mut self) {
        self.raw_data_modified = true;
    }
}

#[test]
fn test_set_track_replaces_by_name() {
    use cgmath::vec3;

    let mut anim = RawAnimation::new("walk".to_string(), 2);
    anim.set_track("a", BoneTrack::new());
    anim.set_track("b", BoneTrack::new());

    let mut t = BoneTrack::new();
    t.positions = Channel::from_keys(vec![vec3(1.0, 2.0, 3.0)]);
    anim.set_track("a", t.clone());

    assert_eq!(anim.track_names(), vec!["a", "b"]);
    assert_eq!(anim.track("a"), Some(&t));
    assert_eq!(anim.track("c"), None);
}

#[test]
fn test_invalidate_drops_curves() {
    let mut anim = RawAnimation::new("walk".to_string(), 2);
    anim.transform_curves.push(TransformCurve {
        bone_name: "a".to_string(),
        keys: vec![(0.0, Transform::identity())],
    });
    anim.invalidate_baked_data();
    anim.mark_dirty();
    assert!(anim.transform_curves.is_empty());
    assert!(anim.raw_data_modified);
}
