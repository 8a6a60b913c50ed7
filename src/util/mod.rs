//! More-or-less general-purpose utility functions.

pub mod namers;
pub mod out_dir;

pub use self::namers::UniqueNamer;
pub use self::out_dir::OutDir;
