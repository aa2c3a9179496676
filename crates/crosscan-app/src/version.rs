//! Build metadata recorded by the build script.

const SHORT_SHA_LEN: usize = 7;

/// Returns `pkg_version (short_sha)`, with `-dirty` appended to the hash when
/// the working tree had uncommitted changes at build time.
///
/// Without git metadata the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let sha = option_env!("VERGEN_GIT_SHA").map_or("unknown", |sha| {
        sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
    });
    let dirty = if option_env!("VERGEN_GIT_DIRTY") == Some("true") {
        "-dirty"
    } else {
        ""
    };

    format!("{pkg_version} ({sha}{dirty})")
}
