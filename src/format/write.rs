use animation::{Channel, RawAnimation};
use cgmath::{Quaternion, Vector3};
use json::JsonValue;
use math::{Rotator, Transform};
use mirror::{MirrorRule, MirrorTable};
use skeleton::Skeleton;

fn vec3_json(v: Vector3<f32>) -> JsonValue {
    JsonValue::Array(vec![v.x.into(), v.y.into(), v.z.into()])
}

fn quat_json(q: Quaternion<f32>) -> JsonValue {
    JsonValue::Array(vec![q.v.x.into(), q.v.y.into(), q.v.z.into(), q.s.into()])
}

fn channel_json<T, F>(channel: &Channel<T>, key_json: F) -> JsonValue
where T: Copy, F: Fn(T) -> JsonValue {
    let slots = channel.slots().iter()
        .map(|slot| match *slot {
            Some(key) => key_json(key),
            None => JsonValue::Null,
        })
        .collect();
    JsonValue::Array(slots)
}

fn write_transform(obj: &mut JsonValue, tm: &Transform) {
    obj["translation"] = vec3_json(tm.translation);
    obj["rotation"] = quat_json(tm.rotation);
    obj["scale"] = vec3_json(tm.scale);
}

fn rotator_json(r: &Rotator) -> JsonValue {
    let mut o = JsonValue::new_object();
    o["pitch"] = r.pitch.into();
    o["yaw"] = r.yaw.into();
    o["roll"] = r.roll.into();
    o
}

pub fn animation_to_json(anim: &RawAnimation) -> JsonValue {
    let tracks = anim.tracks.iter()
        .map(|&(ref bone, ref track)| {
            let mut t = JsonValue::new_object();
            t["bone"] = bone.as_str().into();
            t["positions"] = channel_json(&track.positions, vec3_json);
            t["rotations"] = channel_json(&track.rotations, quat_json);
            t["scales"] = channel_json(&track.scales, vec3_json);
            t
        })
        .collect();

    let curves = anim.transform_curves.iter()
        .map(|curve| {
            let keys = curve.keys.iter()
                .map(|&(time, ref tm)| {
                    let mut k = JsonValue::new_object();
                    k["time"] = time.into();
                    write_transform(&mut k, tm);
                    k
                })
                .collect();
            let mut c = JsonValue::new_object();
            c["bone"] = curve.bone_name.as_str().into();
            c["keys"] = JsonValue::Array(keys);
            c
        })
        .collect();

    let mut v = JsonValue::new_object();
    v["name"] = anim.name.as_str().into();
    v["frame_count"] = anim.frame_count.into();
    v["tracks"] = JsonValue::Array(tracks);
    v["transform_curves"] = JsonValue::Array(curves);
    v
}

pub fn skeleton_to_json(skel: &Skeleton) -> JsonValue {
    let bones = skel.bones.iter()
        .map(|bone| {
            let mut b = JsonValue::new_object();
            b["name"] = bone.name.as_str().into();
            b["parent"] = match bone.parent {
                Some(parent) => parent.into(),
                None => JsonValue::Null,
            };
            write_transform(&mut b, &bone.ref_pose);
            b
        })
        .collect();

    let mut v = JsonValue::new_object();
    v["bones"] = JsonValue::Array(bones);
    v
}

fn rule_json(rule: &MirrorRule) -> JsonValue {
    let mut r = JsonValue::new_object();
    r["bone"] = rule.bone_name.as_str().into();
    r["twin"] = match rule.twin_bone {
        Some(ref twin) => twin.as_str().into(),
        None => JsonValue::Null,
    };
    r["mirror_axis"] = rule.mirror_axis.name().into();
    r["flip_axis"] = match rule.flip_axis {
        Some(axis) => axis.name().into(),
        None => "None".into(),
    };
    r["rotation_offset"] = rotator_json(&rule.rotation_offset);
    r["mirror_translation"] = rule.mirror_translation.into();
    r
}

pub fn table_to_json(table: &MirrorTable) -> JsonValue {
    let mut v = JsonValue::new_object();
    v["rules"] = JsonValue::Array(table.rules.iter().map(rule_json).collect());
    v
}
