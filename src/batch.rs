//! Mirroring many animations at once.
//!
//! Every source animation is duplicated under a fresh name (`Walk` becomes
//! `Walk_Mirrored`), the copy is mirrored in place, and a notifier is told
//! about it. The sources themselves are never modified.

use animation::RawAnimation;
use mirror::{mirror_into, MirrorTable};
use skeleton::SkeletonQuery;
use util::namers::UniqueNamer;

pub const MIRRORED_SUFFIX: &str = "_Mirrored";

/// Told about each animation once it has been mirrored.
pub trait MirrorNotifier {
    fn animation_mirrored(&mut self, anim: &RawAnimation);
}

/// Logs each mirrored animation.
pub struct LogNotifier;

impl MirrorNotifier for LogNotifier {
    fn animation_mirrored(&mut self, anim: &RawAnimation) {
        info!("Successfully mirrored animation {}", anim.name);
    }
}

/// Mirrors every animation in `sources` with `table`, returning the
/// mirrored copies in the same order.
///
/// Without a table, or with no sources, nothing happens and the result is
/// empty.
pub fn bulk_mirror<S, N>(
    sources: &[RawAnimation],
    table: Option<&MirrorTable>,
    skeleton: &S,
    notifier: &mut N,
) -> Vec<RawAnimation>
where S: SkeletonQuery, N: MirrorNotifier {
    bulk_mirror_with_namer(sources, table, skeleton, &mut UniqueNamer::new(), notifier)
}

/// Like `bulk_mirror`, but the copies are named by `namer`, so names
/// reserved in it beforehand (eg. files that already exist) are avoided.
pub fn bulk_mirror_with_namer<S, N>(
    sources: &[RawAnimation],
    table: Option<&MirrorTable>,
    skeleton: &S,
    namer: &mut UniqueNamer,
    notifier: &mut N,
) -> Vec<RawAnimation>
where S: SkeletonQuery, N: MirrorNotifier {
    if sources.is_empty() {
        return vec![];
    }
    let table = match table {
        Some(table) => table,
        None => {
            warn!("no mirror table, not mirroring anything");
            return vec![];
        }
    };

    for source in sources {
        namer.reserve(&source.name);
    }

    sources.iter().map(|source| {
        let mut mirrored = source.clone();
        mirrored.name = namer.get_fresh_name(format!("{}{}", source.name, MIRRORED_SUFFIX));

        let stats = mirror_into(source, skeleton, table, &mut mirrored);
        debug!("{} -> {}: {:?}", source.name, mirrored.name, stats);

        notifier.animation_mirrored(&mirrored);
        mirrored
    }).collect()
}
