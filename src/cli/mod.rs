//! Command-line interface.

pub mod info;
pub mod mirror;

use anim_mirror::errors::Result;
use anim_mirror::format;
use anim_mirror::mirror::MirrorTable;
use anim_mirror::skeleton::Skeleton;
use anim_mirror::RawAnimation;
use clap::{App, ArgMatches};
use std::path::Path;

pub fn app(version: &str) -> App {
    clap_app!(("anim-mirror") =>
        (@setting SubcommandRequiredElseHelp)
        (@setting VersionlessSubcommands)
        (about: "Mirror skeletal animations across a plane")
        (@arg verbose: -v --verbose +global "Print debugging messages")
        (@subcommand mirror =>
            (about: "Write mirrored copies of animations")
            (alias: "m")
            (@arg table: -t --table +takes_value "Mirror table (JSON)")
            (@arg skeleton: -s --skeleton +takes_value "Skeleton (JSON)")
            (@arg output: -o --output +takes_value "Output directory [default: .]")
            (@arg INPUT: +required +multiple "Animation files (JSON)")
        )
        (@subcommand info =>
            (about: "Print info about animations and mirror tables")
            (alias: "i")
            (@arg table: -t --table +takes_value "Mirror table (JSON)")
            (@arg skeleton: -s --skeleton +takes_value "Skeleton (JSON)")
            (@arg INPUT: +multiple "Animation files (JSON)")
        )
    ).version(version)
}

/// Reads every INPUT animation, in order.
fn read_inputs(matches: &ArgMatches) -> Result<Vec<RawAnimation>> {
    let inputs = match matches.values_of_os("INPUT") {
        Some(inputs) => inputs,
        None => return Ok(vec![]),
    };
    inputs
        .map(|input| format::read_animation(Path::new(input)))
        .collect()
}

fn read_table(matches: &ArgMatches) -> Result<Option<MirrorTable>> {
    match matches.value_of_os("table") {
        Some(path) => Ok(Some(format::read_mirror_table(Path::new(path))?)),
        None => Ok(None),
    }
}

fn read_skeleton(matches: &ArgMatches) -> Result<Option<Skeleton>> {
    match matches.value_of_os("skeleton") {
        Some(path) => Ok(Some(format::read_skeleton(Path::new(path))?)),
        None => Ok(None),
    }
}
