//! Filesystem-safe filename sanitization.

/// Characters rejected by Windows filesystems; replaced with `_` so saved
/// names stay portable across platforms.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Substituted when sanitization leaves nothing usable.
pub const PLACEHOLDER_FILENAME: &str = "unnamed_file";

/// Maximum filename length in codepoints.
const MAX_LEN: usize = 200;

/// Maps a recovered filename onto a string safe as a path component.
///
/// Forbidden characters become `_`, boundary whitespace and periods are
/// stripped, the result is capped at 200 codepoints, and an empty result
/// becomes [`PLACEHOLDER_FILENAME`]. Total, deterministic, and idempotent.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    let capped: String = replaced
        .trim_matches(is_boundary_junk)
        .chars()
        .take(MAX_LEN)
        .collect();

    // Truncation can expose a trailing period or space; trim again.
    let trimmed = capped.trim_matches(is_boundary_junk);

    if trimmed.is_empty() {
        PLACEHOLDER_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_boundary_junk(c: char) -> bool {
    c.is_whitespace() || c == '.'
}
