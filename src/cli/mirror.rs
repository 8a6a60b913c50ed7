use anim_mirror::batch::{bulk_mirror_with_namer, LogNotifier};
use anim_mirror::errors::Result;
use anim_mirror::format::animation_to_json;
use anim_mirror::util::{OutDir, UniqueNamer};
use clap::ArgMatches;
use std::ffi::OsStr;
use super::{read_inputs, read_skeleton, read_table};

pub fn main(matches: &ArgMatches) -> Result<()> {
    let table = match read_table(matches)? {
        Some(table) => table,
        None => return Err("you must provide a mirror table".into()),
    };
    if table.is_empty() {
        warn!("the mirror table has no rules; animations will be copied unchanged");
    }

    let skeleton = match read_skeleton(matches)? {
        Some(skeleton) => skeleton,
        None => return Err("you must provide a skeleton".into()),
    };

    let sources = read_inputs(matches)?;
    if sources.is_empty() {
        warn!("no animations to mirror");
        return Ok(());
    }

    for (i, mismatch) in table.mismatches(&skeleton) {
        debug!("rule {} won't apply to this skeleton: {:?}", i, mismatch);
    }

    let mut out_dir = OutDir::new(matches.value_of_os("output").unwrap_or(OsStr::new(".")));
    debug!("writing to {}", out_dir.path().display());

    // Output names mustn't collide with files already there.
    let mut namer = UniqueNamer::new();
    for stem in out_dir.existing_stems()? {
        namer.reserve(stem);
    }

    let mirrored = bulk_mirror_with_namer(&sources, Some(&table), &skeleton, &mut namer, &mut LogNotifier);

    for anim in &mirrored {
        let path = out_dir.write_json(&anim.name, &animation_to_json(anim))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

#[test]
fn test_missing_table_is_an_error() {
    let matches = super::app("0").get_matches_from(vec!["anim-mirror", "mirror", "walk.json"]);
    let sub_matches = matches.subcommand_matches("mirror").unwrap();
    let err = main(sub_matches).unwrap_err();
    assert_eq!(err.to_string(), "you must provide a mirror table");
}
