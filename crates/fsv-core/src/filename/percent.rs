//! Percent-decoding of a filename token into raw bytes.
//!
//! The header is untrusted and loosely specified, so decoding is lenient:
//! malformed escapes degrade to literal bytes instead of failing.

/// Decodes `%XX` escapes and `+` in a token into a raw byte sequence.
///
/// `%` followed by two hex digits becomes one byte, a `%` without two valid
/// hex digits stays a literal `%`, `+` becomes a space, and every other byte
/// is copied through. Never fails; the output is never longer than the input.
pub fn percent_decode_bytes(token: &str) -> Vec<u8> {
    let bytes = token.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let pair = if i + 2 < bytes.len() {
                    hex_digit(bytes[i + 1]).zip(hex_digit(bytes[i + 2]))
                } else {
                    None
                };
                match pair {
                    Some((high, low)) => {
                        out.push(high << 4 | low);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
