//! Transcoding between UTF-8 text and fixed-width code points.
//!
//! UTF-8 is the only supported byte encoding; every build uses it for both
//! input and output.

use crate::buffer::{output_byte_capacity, CodePointBuffer};
use crate::error::{BidiError, Result};

/// Widest UTF-8 encoding of a single code point.
pub const MAX_BYTES_PER_CODE_POINT: usize = 4;

/// Decode UTF-8 `bytes` into `out`, returning the number of code points
/// written.
///
/// The bytes are validated up front; nothing is written for ill-formed
/// input.
pub fn charset_to_codepoints(bytes: &[u8], out: &mut CodePointBuffer) -> Result<usize> {
    let text = std::str::from_utf8(bytes)?;
    decode_str(text, out)
}

/// Decode an already validated string into `out`.
pub(crate) fn decode_str(text: &str, out: &mut CodePointBuffer) -> Result<usize> {
    out.clear();
    for ch in text.chars() {
        out.push(ch)?;
    }
    Ok(out.len())
}

/// Encode `code_points` as a new UTF-8 string.
///
/// Output space is reserved once for the worst case; the string never
/// reallocates while encoding.
pub fn codepoints_to_charset(code_points: &[char]) -> Result<String> {
    let mut out = reserve_output(code_points.len())?;
    encode_into(code_points, &mut out);
    Ok(out)
}

/// An empty string with room for `count` code points of any width.
pub(crate) fn reserve_output(count: usize) -> Result<String> {
    let requested = output_byte_capacity(count)?;
    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(|source| BidiError::Allocation { requested, source })?;
    Ok(out)
}

/// Append `code_points` to `out`, which must already have room for them.
pub(crate) fn encode_into(code_points: &[char], out: &mut String) {
    debug_assert!(out.capacity() - out.len() >= code_points.len() * MAX_BYTES_PER_CODE_POINT);
    out.extend(code_points);
}
