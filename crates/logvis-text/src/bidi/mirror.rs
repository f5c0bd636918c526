//! Character mirroring for right-to-left runs (UAX-9 rule L4).
//!
//! Backed by the `Bidi_Mirroring_Glyph` property compiled into
//! `icu_properties`, so every pair in `BidiMirroring.txt` is covered.

use icu_properties::{CodePointMapData, props::BidiMirroringGlyph};

/// Return the mirrored counterpart of `ch`, or `ch` itself.
pub fn mirrored_char(ch: char) -> char {
    let glyph = CodePointMapData::<BidiMirroringGlyph>::new().get(ch);
    if glyph.mirrored {
        glyph.mirroring_glyph.unwrap_or(ch)
    } else {
        ch
    }
}
