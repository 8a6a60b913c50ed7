use animation::{BoneTrack, Channel, RawAnimation, TransformCurve};
use cgmath::{vec3, Quaternion, Vector3};
use errors::{Error, ErrorKind, Result};
use json::JsonValue;
use math::{Axis, Rotator, Transform};
use mirror::{MirrorRule, MirrorTable};
use skeleton::{Bone, Skeleton};

fn bad(path: &str, expected: &'static str) -> Error {
    ErrorKind::BadField(path.to_string(), expected).into()
}

/// Path of a member of the object at `path`.
fn member(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_string() } else { format!("{}.{}", path, key) }
}

fn element(path: &str, idx: usize) -> String {
    format!("{}[{}]", path, idx)
}

/// An array, or the empty array if the value is missing.
fn read_array<'a>(v: &'a JsonValue, path: &str) -> Result<&'a [JsonValue]> {
    match *v {
        JsonValue::Array(ref elems) => Ok(&elems[..]),
        JsonValue::Null => Ok(&[]),
        _ => Err(bad(path, "an array")),
    }
}

fn read_string(v: &JsonValue, path: &str) -> Result<String> {
    v.as_str().map(|s| s.to_string()).ok_or_else(|| bad(path, "a string"))
}

fn read_f32(v: &JsonValue, path: &str) -> Result<f32> {
    v.as_f32().ok_or_else(|| bad(path, "a number"))
}

fn read_f32_or(v: &JsonValue, path: &str, default: f32) -> Result<f32> {
    if v.is_null() { Ok(default) } else { read_f32(v, path) }
}

fn read_bool_or(v: &JsonValue, path: &str, default: bool) -> Result<bool> {
    if v.is_null() {
        return Ok(default);
    }
    v.as_bool().ok_or_else(|| bad(path, "true or false"))
}

fn read_numbers(v: &JsonValue, path: &str, n: usize, expected: &'static str) -> Result<Vec<f32>> {
    match *v {
        JsonValue::Array(ref elems) if elems.len() == n => {
            elems.iter().enumerate()
                .map(|(i, x)| read_f32(x, &element(path, i)))
                .collect()
        }
        _ => Err(bad(path, expected)),
    }
}

fn read_vec3(v: &JsonValue, path: &str) -> Result<Vector3<f32>> {
    let xs = read_numbers(v, path, 3, "an array [x, y, z]")?;
    Ok(vec3(xs[0], xs[1], xs[2]))
}

fn read_quat(v: &JsonValue, path: &str) -> Result<Quaternion<f32>> {
    let xs = read_numbers(v, path, 4, "a quaternion [x, y, z, w]")?;
    Ok(Quaternion::new(xs[3], xs[0], xs[1], xs[2]))
}

fn read_channel<T, F>(v: &JsonValue, path: &str, read_key: F) -> Result<Channel<T>>
where T: Copy, F: Fn(&JsonValue, &str) -> Result<T> {
    let elems = read_array(v, path)?;
    let mut slots = Vec::with_capacity(elems.len());
    for (i, elem) in elems.iter().enumerate() {
        if elem.is_null() {
            slots.push(None);
        } else {
            slots.push(Some(read_key(elem, &element(path, i))?));
        }
    }
    Ok(Channel::from_slots(slots))
}

/// A transform from `translation`/`rotation`/`scale` members of `v`. Missing
/// members come from the identity.
fn read_transform(v: &JsonValue, path: &str) -> Result<Transform> {
    let mut tm = Transform::identity();
    if !v["translation"].is_null() {
        tm.translation = read_vec3(&v["translation"], &member(path, "translation"))?;
    }
    if !v["rotation"].is_null() {
        tm.rotation = read_quat(&v["rotation"], &member(path, "rotation"))?;
    }
    if !v["scale"].is_null() {
        tm.scale = read_vec3(&v["scale"], &member(path, "scale"))?;
    }
    Ok(tm)
}

fn read_track(v: &JsonValue, path: &str) -> Result<BoneTrack> {
    Ok(BoneTrack {
        positions: read_channel(&v["positions"], &member(path, "positions"), read_vec3)?,
        rotations: read_channel(&v["rotations"], &member(path, "rotations"), read_quat)?,
        scales: read_channel(&v["scales"], &member(path, "scales"), read_vec3)?,
    })
}

fn read_curve(v: &JsonValue, path: &str) -> Result<TransformCurve> {
    let bone_name = read_string(&v["bone"], &member(path, "bone"))?;
    let keys_path = member(path, "keys");
    let mut keys = vec![];
    for (i, key) in read_array(&v["keys"], &keys_path)?.iter().enumerate() {
        let key_path = element(&keys_path, i);
        let time = read_f32(&key["time"], &member(&key_path, "time"))?;
        keys.push((time, read_transform(key, &key_path)?));
    }
    Ok(TransformCurve { bone_name, keys })
}

pub fn animation_from_json(v: &JsonValue) -> Result<RawAnimation> {
    let name = read_string(&v["name"], "name")?;
    let frame_count = v["frame_count"].as_usize()
        .ok_or_else(|| bad("frame_count", "a non-negative integer"))?;

    let mut anim = RawAnimation::new(name, frame_count);

    for (i, t) in read_array(&v["tracks"], "tracks")?.iter().enumerate() {
        let path = element("tracks", i);
        let bone = read_string(&t["bone"], &member(&path, "bone"))?;
        if anim.track_index(&bone).is_some() {
            bail!("{}: second track for bone {}", path, bone);
        }
        let track = read_track(t, &path)?;
        anim.tracks.push((bone, track));
    }

    for (i, c) in read_array(&v["transform_curves"], "transform_curves")?.iter().enumerate() {
        let curve = read_curve(c, &element("transform_curves", i))?;
        anim.transform_curves.push(curve);
    }

    Ok(anim)
}

pub fn skeleton_from_json(v: &JsonValue) -> Result<Skeleton> {
    let elems = read_array(&v["bones"], "bones")?;
    let mut bones = Vec::with_capacity(elems.len());
    for (i, b) in elems.iter().enumerate() {
        let path = element("bones", i);
        let name = read_string(&b["name"], &member(&path, "name"))?;
        let parent = if b["parent"].is_null() {
            None
        } else {
            let parent = b["parent"].as_usize()
                .ok_or_else(|| bad(&member(&path, "parent"), "a bone index or null"))?;
            if parent >= elems.len() {
                bail!("{}: parent {} is out of range", member(&path, "parent"), parent);
            }
            Some(parent)
        };
        let ref_pose = read_transform(b, &path)?;
        bones.push(Bone { name, parent, ref_pose });
    }
    Ok(Skeleton::new(bones))
}

fn read_axis(v: &JsonValue, path: &str) -> Result<Axis> {
    v.as_str().and_then(Axis::from_name).ok_or_else(|| bad(path, "\"X\", \"Y\" or \"Z\""))
}

fn read_flip_axis(v: &JsonValue, path: &str) -> Result<Option<Axis>> {
    match v.as_str() {
        _ if v.is_null() => Ok(None),
        Some("None") | Some("none") => Ok(None),
        Some(name) => Axis::from_name(name).map(Some)
            .ok_or_else(|| bad(path, "\"X\", \"Y\", \"Z\" or \"None\"")),
        None => Err(bad(path, "\"X\", \"Y\", \"Z\" or \"None\"")),
    }
}

fn read_rotator(v: &JsonValue, path: &str) -> Result<Rotator> {
    if v.is_null() {
        return Ok(Rotator::zero());
    }
    if !v.is_object() {
        return Err(bad(path, "an object { pitch, yaw, roll }"));
    }
    Ok(Rotator {
        pitch: read_f32_or(&v["pitch"], &member(path, "pitch"), 0.0)?,
        yaw: read_f32_or(&v["yaw"], &member(path, "yaw"), 0.0)?,
        roll: read_f32_or(&v["roll"], &member(path, "roll"), 0.0)?,
    })
}

fn read_rule(v: &JsonValue, path: &str) -> Result<MirrorRule> {
    let bone_name = read_string(&v["bone"], &member(path, "bone"))?;
    let twin_bone = if v["twin"].is_null() {
        None
    } else {
        Some(read_string(&v["twin"], &member(path, "twin"))?)
    };
    Ok(MirrorRule {
        bone_name,
        twin_bone,
        mirror_axis: read_axis(&v["mirror_axis"], &member(path, "mirror_axis"))?,
        flip_axis: read_flip_axis(&v["flip_axis"], &member(path, "flip_axis"))?,
        rotation_offset: read_rotator(&v["rotation_offset"], &member(path, "rotation_offset"))?,
        mirror_translation: read_bool_or(
            &v["mirror_translation"], &member(path, "mirror_translation"), false)?,
    })
}

pub fn table_from_json(v: &JsonValue) -> Result<MirrorTable> {
    let rules = read_array(&v["rules"], "rules")?
        .iter().enumerate()
        .map(|(i, r)| read_rule(r, &element("rules", i)))
        .collect::<Result<Vec<MirrorRule>>>()?;
    Ok(MirrorTable::new(rules))
}
