//! Filename recovery from Content-Disposition headers.
//!
//! Servers percent-encode suggested filenames under unspecified text
//! encodings. This module extracts the raw token from the header, decodes it
//! to bytes, tries a ranked list of encodings to get a readable (CJK-capable)
//! name back, and sanitizes the result for the local filesystem.

mod content_disposition;
mod encoding;
mod percent;
mod sanitize;

pub use content_disposition::extract_filename_token;
pub use encoding::{contains_cjk, resolve_filename};
pub use percent::percent_decode_bytes;
pub use sanitize::{sanitize_filename, PLACEHOLDER_FILENAME};

/// Recovers a human-readable filename from a Content-Disposition value.
///
/// Returns `None` when the header carries no usable `filename=` token; the
/// caller should fall back to a name of its own (e.g. the listed filename)
/// before sanitizing. The returned name is not yet sanitized.
pub fn recover_filename(header_value: &str) -> Option<String> {
    let token = extract_filename_token(header_value)?;
    let bytes = percent_decode_bytes(&token);
    let resolved = resolve_filename(&bytes);
    if resolved != token {
        tracing::debug!(token = %token, resolved = %resolved, "decoded filename token");
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_name_survives_unchanged() {
        let r = recover_filename("attachment; filename=\"report.txt\"");
        assert_eq!(r.as_deref(), Some("report.txt"));
        assert_eq!(sanitize_filename("report.txt"), "report.txt");
    }

    #[test]
    fn percent_encoded_utf8_cjk_recovered() {
        let r = recover_filename("attachment; filename=%E4%B8%AD%E6%96%87.txt");
        assert_eq!(r.as_deref(), Some("中文.txt"));
        assert_eq!(sanitize_filename("中文.txt"), "中文.txt");
    }

    #[test]
    fn malformed_escape_kept_literal() {
        let r = recover_filename("attachment; filename=\"bad%GGname.txt\"");
        assert_eq!(r.as_deref(), Some("bad%GGname.txt"));
    }

    #[test]
    fn absent_header_yields_none() {
        assert!(recover_filename("").is_none());
        assert!(recover_filename("attachment").is_none());
    }

    #[test]
    fn gbk_encoded_token_recovered() {
        // "中文.txt" percent-encoded from its GBK byte layout.
        let r = recover_filename("attachment; filename=\"%D6%D0%CE%C4.txt\"");
        assert_eq!(r.as_deref(), Some("中文.txt"));
    }

    #[test]
    fn ascii_alnum_round_trip() {
        for name in ["abc123.bin", "File42", "x"] {
            let encoded: String = name
                .bytes()
                .map(|b| format!("%{b:02X}"))
                .collect();
            let header = format!("attachment; filename=\"{encoded}\"");
            assert_eq!(recover_filename(&header).as_deref(), Some(name));
        }
    }

    #[test]
    fn empty_token_resolves_to_empty_string() {
        let r = recover_filename("attachment; filename=\"\"");
        assert_eq!(r.as_deref(), Some(""));
    }
}
