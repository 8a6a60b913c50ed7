//! JSON files for animations, skeletons and mirror tables.
//!
//! These are the interchange formats of the command-line tool. Vectors are
//! arrays `[x, y, z]`, quaternions are `[x, y, z, w]`, and a missing key in
//! a track channel is written as `null`:
//!
//! ```text
//! {
//!   "name": "Walk", "frame_count": 3,
//!   "tracks": [
//!     { "bone": "hand_l",
//!       "positions": [[1, 0, 0], null, [2, 0, 0]],
//!       "rotations": [[0, 0, 0, 1]],
//!       "scales": [] }
//!   ],
//!   "transform_curves": []
//! }
//! ```

mod read;
mod write;

pub use self::read::{animation_from_json, skeleton_from_json, table_from_json};
pub use self::write::{animation_to_json, skeleton_to_json, table_to_json};

use animation::RawAnimation;
use errors::{Result, ResultExt};
use json::{self, JsonValue};
use mirror::MirrorTable;
use skeleton::Skeleton;
use std::fs;
use std::path::Path;

fn read_json_file(path: &Path) -> Result<JsonValue> {
    let text = fs::read_to_string(path)?;
    Ok(json::parse(&text)?)
}

pub fn read_animation(path: &Path) -> Result<RawAnimation> {
    let v = read_json_file(path)
        .chain_err(|| format!("couldn't read {}", path.display()))?;
    animation_from_json(&v)
        .chain_err(|| format!("bad animation file {}", path.display()))
}

pub fn read_skeleton(path: &Path) -> Result<Skeleton> {
    let v = read_json_file(path)
        .chain_err(|| format!("couldn't read {}", path.display()))?;
    skeleton_from_json(&v)
        .chain_err(|| format!("bad skeleton file {}", path.display()))
}

pub fn read_mirror_table(path: &Path) -> Result<MirrorTable> {
    let v = read_json_file(path)
        .chain_err(|| format!("couldn't read {}", path.display()))?;
    table_from_json(&v)
        .chain_err(|| format!("bad mirror table file {}", path.display()))
}
