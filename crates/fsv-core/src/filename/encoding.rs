//! Multi-encoding recovery of a filename byte sequence.
//!
//! Servers percent-encode filenames under whatever encoding their filesystem
//! happened to use; UTF-8 and the Chinese legacy encodings cover the cases
//! this harness targets. Candidates are tried in a fixed priority order and a
//! candidate wins when it decodes cleanly and reads as CJK text. Latin-1 maps
//! every byte to a codepoint and is the unconditional last resort, so
//! resolution is total. Kana-only or Cyrillic names fall through to Latin-1
//! and come out mangled; that is a known limit of the CJK heuristic.

type DecodeFn = fn(&[u8]) -> Option<String>;

/// Candidate encodings tried, in priority order, before the Latin-1 fallback.
const CANDIDATES: &[(&str, DecodeFn)] = &[
    ("utf-8", decode_utf8),
    ("gbk", decode_gbk),
    ("gb2312", decode_gb2312),
];

/// Codepoint ranges counted as CJK: unified ideographs, extension A, extension B.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),
    (0x3400, 0x4DBF),
    (0x2_0000, 0x2_A6DF),
];

/// Interprets a decoded byte sequence as text, preferring CJK-plausible
/// candidates and falling back to Latin-1. Empty input yields an empty
/// string; the caller substitutes its own default name.
pub fn resolve_filename(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    for (name, decode) in CANDIDATES {
        if let Some(text) = decode(bytes) {
            if contains_cjk(&text) {
                tracing::debug!(encoding = *name, "filename recovered");
                return text;
            }
        }
    }

    decode_latin1(bytes)
}

/// True if the text contains at least one codepoint in a recognized CJK range.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| {
        let cp = c as u32;
        CJK_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
    })
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

fn decode_gbk(bytes: &[u8]) -> Option<String> {
    let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// GB2312 is a strict subset of GBK, and encoding_rs folds the gb2312 label
/// into its GBK decoder; the narrower GB2312 byte grammar is enforced here
/// before handing off.
fn decode_gb2312(bytes: &[u8]) -> Option<String> {
    if !is_gb2312(bytes) {
        return None;
    }
    decode_gbk(bytes)
}

/// GB2312 grammar: ASCII, or a lead byte 0xA1-0xF7 followed by a trail byte
/// 0xA1-0xFE.
fn is_gb2312(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            i += 1;
            continue;
        }
        if !(0xA1..=0xF7).contains(&b) {
            return false;
        }
        match bytes.get(i + 1) {
            Some(t) if (0xA1..=0xFE).contains(t) => i += 2,
            _ => return false,
        }
    }
    true
}

/// Latin-1 maps every byte to U+0000..=U+00FF; it cannot fail.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
