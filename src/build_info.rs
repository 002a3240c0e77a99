//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `flappy <version> (<date> <commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!(
        "{} {} ({} {})",
        crate::core::constants::APP_NAME,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
