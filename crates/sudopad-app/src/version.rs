//! Build metadata shown in the sidebar and logged at startup.

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// If git metadata is unavailable, the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").map_or("unknown", short_hash);

    format!("{pkg_version} ({git_hash})")
}

fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}
