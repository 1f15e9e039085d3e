use crate::compat::{Cow, String};
use crate::error::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// application/x-www-form-urlencoded percent-encode set
/// Everything except ASCII alphanumerics, `*`, `-`, `.` and `_`.
/// Space is handled separately and serialized as `+`.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Write a form-urlencoded component directly to buffer
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for (i, part) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(part, FORM_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded component (`+` is a space).
/// Invalid UTF-8 is replaced rather than rejected.
pub fn form_decode(input: &str) -> String {
    let input: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode_str(&input).decode_utf8_lossy().into_owned()
}

/// Decode percent-encoded string, leaving `+` untouched
pub fn percent_decode(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| Error::InvalidPercentEncoding)
}
