//! Mirrors skeletal animation clips across a plane.
//!
//! A `MirrorTable` says, per bone, which axis to reflect through and which
//! bones form left/right pairs ("twins"). `mirror::mirror_sequence` applies
//! the table to the raw keyframe tracks of one animation and returns the new
//! tracks; `batch::bulk_mirror` does the same for many animations, producing
//! renamed copies.

#![recursion_limit = "1024"] // for error_chain

#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;
extern crate cgmath;
extern crate json;

pub mod errors;
pub mod util;
pub mod math;
pub mod animation;
pub mod skeleton;
pub mod mirror;
pub mod batch;
pub mod format;

pub use animation::{BoneTrack, Channel, RawAnimation, TrackSink, TrackSource};
pub use math::{Axis, Rotator, Transform};
pub use mirror::{mirror_into, mirror_sequence, MirrorRule, MirrorTable, MirroredTracks};
pub use skeleton::{Skeleton, SkeletonQuery};
