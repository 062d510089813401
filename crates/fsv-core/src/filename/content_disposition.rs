//! Content-Disposition header parsing: locating the raw filename token.

/// Extracts the raw filename token from a Content-Disposition header value.
///
/// Supports:
/// - `filename="value"` (quoted; token runs to the matching quote)
/// - `filename=value` (token runs to the next `;` or end of value)
///
/// Returns `None` when the value is empty, carries no `filename=` marker, or
/// opens a quote that never closes. The token is trimmed of surrounding
/// whitespace but otherwise returned verbatim; percent-decoding and encoding
/// recovery are the caller's concern.
pub fn extract_filename_token(header_value: &str) -> Option<String> {
    let value = header_value.trim();
    let start = value.find("filename=")? + "filename=".len();
    let rest = &value[start..];

    let token = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        &quoted[..end]
    } else {
        match rest.find(';') {
            Some(end) => &rest[..end],
            None => rest,
        }
    };

    Some(token.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_token() {
        let r = extract_filename_token("attachment; filename=\"report.txt\"");
        assert_eq!(r.as_deref(), Some("report.txt"));
    }

    #[test]
    fn unquoted_token_to_end() {
        let r = extract_filename_token("attachment; filename=report.txt");
        assert_eq!(r.as_deref(), Some("report.txt"));
    }

    #[test]
    fn unquoted_token_stops_at_semicolon() {
        let r = extract_filename_token("attachment; filename=report.txt; size=42");
        assert_eq!(r.as_deref(), Some("report.txt"));
    }

    #[test]
    fn percent_encoded_token_returned_verbatim() {
        let r = extract_filename_token("attachment; filename=%E4%B8%AD%E6%96%87.txt");
        assert_eq!(r.as_deref(), Some("%E4%B8%AD%E6%96%87.txt"));
    }

    #[test]
    fn missing_marker_is_absent() {
        assert!(extract_filename_token("attachment").is_none());
        assert!(extract_filename_token("inline; name=x").is_none());
    }

    #[test]
    fn empty_value_is_absent() {
        assert!(extract_filename_token("").is_none());
        assert!(extract_filename_token("   ").is_none());
    }

    #[test]
    fn unmatched_quote_is_absent() {
        assert!(extract_filename_token("attachment; filename=\"broken.txt").is_none());
    }

    #[test]
    fn token_whitespace_trimmed() {
        let r = extract_filename_token("attachment; filename=\"  padded.txt  \"");
        assert_eq!(r.as_deref(), Some("padded.txt"));
    }

    #[test]
    fn empty_quoted_token_is_empty_string() {
        let r = extract_filename_token("attachment; filename=\"\"");
        assert_eq!(r.as_deref(), Some(""));
    }
}
