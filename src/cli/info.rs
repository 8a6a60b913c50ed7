use anim_mirror::errors::Result;
use anim_mirror::mirror::{MirrorTable, RuleMismatch};
use anim_mirror::skeleton::Skeleton;
use anim_mirror::RawAnimation;
use clap::ArgMatches;
use super::{read_inputs, read_skeleton, read_table};

pub fn main(matches: &ArgMatches) -> Result<()> {
    let table = read_table(matches)?;
    let skeleton = read_skeleton(matches)?;
    let animations = read_inputs(matches)?;

    if let Some(ref skeleton) = skeleton {
        skeleton_info(skeleton);
    }
    if let Some(ref table) = table {
        table_info(table, skeleton.as_ref());
    }
    for (anim_id, anim) in animations.iter().enumerate() {
        animation_info(anim_id, anim);
    }

    Ok(())
}

fn skeleton_info(skeleton: &Skeleton) {
    println!("Skeleton:");
    println!("  Bones ({} total):", skeleton.num_bones());
    for (i, bone) in skeleton.bones.iter().enumerate() {
        match bone.parent {
            Some(parent) => println!("    Bone {}: {:?} (parent {})", i, bone.name, parent),
            None => println!("    Bone {}: {:?} (root)", i, bone.name),
        }
    }
    println!();
}

fn table_info(table: &MirrorTable, skeleton: Option<&Skeleton>) {
    println!("Mirror Table:");
    println!("  Rules ({} total):", table.rules.len());
    for (i, rule) in table.rules.iter().enumerate() {
        print!("    Rule {}: {:?}", i, rule.bone_name);
        if let Some(ref twin) = rule.twin_bone {
            print!(" <-> {:?}", twin);
        }
        print!(" mirror {}", rule.mirror_axis);
        if let Some(flip) = rule.flip_axis {
            print!(" flip {}", flip);
        }
        if !rule.rotation_offset.is_zero() {
            let r = rule.rotation_offset;
            print!(" offset (P={} Y={} R={})", r.pitch, r.yaw, r.roll);
        }
        if rule.mirror_translation {
            print!(" +translation");
        }
        println!();
    }

    if let Some(skeleton) = skeleton {
        let mismatches = table.mismatches(skeleton);
        if mismatches.is_empty() {
            println!("  All rules apply to the skeleton");
        } else {
            println!("  Skipped Rules ({} total):", mismatches.len());
            for (i, mismatch) in mismatches {
                match mismatch {
                    RuleMismatch::MissingBone(name) =>
                        println!("    Rule {}: no bone {:?}", i, name),
                    RuleMismatch::MissingTwin(name) =>
                        println!("    Rule {}: no twin bone {:?}", i, name),
                }
            }
        }
    }
    println!();
}

fn animation_info(anim_id: usize, anim: &RawAnimation) {
    println!("Animation {}:", anim_id);
    println!("  Name: {:?}", anim.name);
    println!("  Num Frames: {}", anim.frame_count);
    println!("  Tracks ({} total):", anim.tracks.len());
    for (bone_name, track) in &anim.tracks {
        println!("    {:?}: {} positions, {} rotations, {} scales",
            bone_name,
            track.positions.num_keys(),
            track.rotations.num_keys(),
            track.scales.num_keys(),
        );
    }
    if !anim.transform_curves.is_empty() {
        println!("  Transform Curves: {}", anim.transform_curves.len());
    }
    println!();
}
