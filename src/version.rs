/// Version string for `--version`.
pub fn version_info() -> String {
    let mut s = format!("{}", env!("CARGO_PKG_VERSION"));

    // These variables can optionally be set during the build process
    if let Some(info) = option_env!("ANIM_MIRROR_BUILD_COMMIT_HASH") {
        s.push_str(&format!("\nbuild commit: {}", info));
    }
    if let Some(info) = option_env!("ANIM_MIRROR_BUILD_COMMIT_DATE") {
        s.push_str(&format!("\nbuild commit date: {}", info));
    }
    s
}
