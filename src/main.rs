extern crate anim_mirror;
extern crate atty;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate termcolor;

mod cli;
mod logger;
mod version;

use std::process::exit;

fn main() {
    let version = version::version_info();
    let matches = cli::app(&version).get_matches();

    let level = if matches.is_present("verbose") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    logger::init(level);

    let res = match matches.subcommand() {
        ("mirror", Some(sub_matches)) => cli::mirror::main(sub_matches),
        ("info", Some(sub_matches)) => cli::info::main(sub_matches),
        _ => Ok(()),
    };

    if let Err(e) = res {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("  caused by: {}", cause);
        }
        exit(1);
    }
}
