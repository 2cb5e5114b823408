use regex::{Captures, Regex};
use std::sync::LazyLock;

// Apple-style decimal AVC form: avc1.<profile>.<level>
static LEGACY_AVC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)avc1\.([0-9]+)\.([0-9]+)").expect("legacy avc pattern"));

/// Rewrite legacy `avc1.<dec>.<dec>` codecs into the packed-hex form
/// `avc1.<profile>00<level>`.
///
/// The input is treated as a comma-separated list; every legacy codec in each
/// field is rewritten and everything else (separators, whitespace, other
/// codecs) is left untouched. Empty input comes back unchanged.
///
/// ```
/// use mediacodecs::translate_legacy_codec;
///
/// assert_eq!(translate_legacy_codec("avc1.66.30"), "avc1.42001e");
/// assert_eq!(translate_legacy_codec("avc1.100.41, mp4a.40.2"), "avc1.640029, mp4a.40.2");
/// ```
pub fn translate_legacy_codec(codec: &str) -> String {
    if codec.is_empty() {
        return String::new();
    }
    codec
        .split(',')
        .map(translate_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Element-wise [`translate_legacy_codec`].
pub fn translate_legacy_codecs<S: AsRef<str>>(codecs: &[S]) -> Vec<String> {
    codecs
        .iter()
        .map(|c| translate_legacy_codec(c.as_ref()))
        .collect()
}

fn translate_field(field: &str) -> String {
    LEGACY_AVC
        .replace_all(field, |caps: &Captures| {
            format!("avc1.{}00{}", hex_byte(&caps[1]), hex_byte(&caps[2]))
        })
        .into_owned()
}

/// Last two lowercase hex digits of a decimal digit string, zero padded.
///
/// Only the low byte survives, so the value is reduced mod 256 digit by digit
/// and never overflows.
fn hex_byte(digits: &str) -> String {
    let low = digits
        .bytes()
        .fold(0u16, |acc, d| (acc * 10 + u16::from(d - b'0')) % 256);
    hex::encode([low as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_byte_pads_and_truncates() {
        assert_eq!(hex_byte("0"), "00");
        assert_eq!(hex_byte("5"), "05");
        assert_eq!(hex_byte("077"), "4d");
        assert_eq!(hex_byte("255"), "ff");
        assert_eq!(hex_byte("300"), "2c");
    }

    #[test]
    fn hex_byte_handles_numbers_past_u64() {
        // 99999999999999999999999 mod 256 = 255
        assert_eq!(hex_byte("99999999999999999999999"), "ff");
        // 2^64 mod 256 = 0
        assert_eq!(hex_byte("18446744073709551616"), "00");
    }
}
