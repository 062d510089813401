//! Parse HTTP response header lines into ResponseMeta.

/// Response headers the harness inspects after a GET.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    /// Declared body size, if `Content-Length` is present.
    pub content_length: Option<u64>,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// `Content-Disposition` value if present (filename hint).
    pub content_disposition: Option<String>,
}

/// Parse collected header lines into ResponseMeta.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseMeta {
    let mut meta = ResponseMeta::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    meta.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") {
                meta.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-disposition") {
                meta.content_disposition = Some(value.to_string());
            }
        }
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_headers_content_length_and_type() {
        let lines = [
            "HTTP/1.1 200 OK".to_string(),
            "Content-Length: 12345".to_string(),
            "Content-Type: application/json; charset=utf-8".to_string(),
        ];
        let m = parse_headers(&lines);
        assert_eq!(m.content_length, Some(12345));
        assert_eq!(
            m.content_type.as_deref(),
            Some("application/json; charset=utf-8")
        );
        assert!(m.content_disposition.is_none());
    }

    #[test]
    fn parse_headers_content_disposition() {
        let lines = ["Content-Disposition: attachment; filename=\"report.txt\"".to_string()];
        let m = parse_headers(&lines);
        assert_eq!(
            m.content_disposition.as_deref(),
            Some("attachment; filename=\"report.txt\"")
        );
    }

    #[test]
    fn parse_headers_case_insensitive() {
        let lines = ["content-length: 7".to_string()];
        let m = parse_headers(&lines);
        assert_eq!(m.content_length, Some(7));
    }

    #[test]
    fn parse_headers_bad_length_ignored() {
        let lines = ["Content-Length: banana".to_string()];
        let m = parse_headers(&lines);
        assert!(m.content_length.is_none());
    }
}
