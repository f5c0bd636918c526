//! The logical-to-visual reordering capability.
//!
//! [`ReorderEngine`] is the seam between the shim and whatever implements
//! the Unicode BiDi algorithm. [`UnicodeBidiEngine`] backs it with the
//! `unicode-bidi` crate.

use unicode_bidi::{bidi_class, BidiClass, BidiInfo, Level};

use crate::bidi::direction::{BaseDirection, ResolvedDirection};
use crate::bidi::mirror::mirrored_char;
use crate::error::ReorderError;

/// Reorders a paragraph of code points from logical to visual order.
pub trait ReorderEngine {
    /// Write the visual order of `logical` into `visual` and return the
    /// resolved base direction.
    ///
    /// `visual` must be exactly as long as `logical`; code points are
    /// permuted (and possibly mirrored), never added or dropped.
    fn log2vis(
        &self,
        logical: &[char],
        hint: BaseDirection,
        visual: &mut [char],
    ) -> Result<ResolvedDirection, ReorderError>;
}

impl<E: ReorderEngine + ?Sized> ReorderEngine for &E {
    fn log2vis(
        &self,
        logical: &[char],
        hint: BaseDirection,
        visual: &mut [char],
    ) -> Result<ResolvedDirection, ReorderError> {
        (**self).log2vis(logical, hint, visual)
    }
}

/// UAX-9 reordering via `unicode-bidi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBidiEngine {
    mirroring: bool,
}

impl Default for UnicodeBidiEngine {
    fn default() -> Self {
        Self { mirroring: true }
    }
}

impl UnicodeBidiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable mirroring of characters in right-to-left runs.
    pub fn with_mirroring(mut self, mirroring: bool) -> Self {
        self.mirroring = mirroring;
        self
    }

    pub fn mirroring(&self) -> bool {
        self.mirroring
    }

    fn place(&self, ch: char, level: Level) -> char {
        if self.mirroring && level.is_rtl() {
            mirrored_char(ch)
        } else {
            ch
        }
    }
}

impl ReorderEngine for UnicodeBidiEngine {
    /// Paragraph separators stay at the end of their own paragraph; only
    /// the content before them is permuted. Every paragraph is laid out at
    /// the level resolved from the whole text.
    ///
    /// The working `String` and offset table are reserved fallibly.
    /// Allocations made inside `unicode-bidi` itself are not.
    fn log2vis(
        &self,
        logical: &[char],
        hint: BaseDirection,
        visual: &mut [char],
    ) -> Result<ResolvedDirection, ReorderError> {
        if logical.len() != visual.len() {
            return Err(ReorderError::LengthMismatch {
                logical: logical.len(),
                visual: visual.len(),
            });
        }
        if logical.is_empty() {
            return Ok(hint.fallback());
        }

        let (text, char_starts) = utf8_copy(logical)?;
        let base_level = hint.paragraph_level(&text);
        let info = BidiInfo::new(&text, Some(base_level));

        for para in &info.paragraphs {
            let first = char_starts.partition_point(|&b| b < para.range.start);
            let end = char_starts.partition_point(|&b| b < para.range.end);

            let mut content_end = end;
            while content_end > first && bidi_class(logical[content_end - 1]) == BidiClass::B {
                content_end -= 1;
            }
            visual[content_end..end].copy_from_slice(&logical[content_end..end]);
            if content_end == first {
                continue;
            }

            let line_end = char_starts
                .get(content_end)
                .copied()
                .unwrap_or(text.len());
            // Levels per code point for the whole text, with rule L1
            // applied to this paragraph's content.
            let levels = info.reordered_levels_per_char(para, para.range.start..line_end);
            let line_levels = &levels[first..content_end];

            for (offset, logical_idx) in BidiInfo::reorder_visual(line_levels)
                .into_iter()
                .enumerate()
            {
                visual[first + offset] =
                    self.place(logical[first + logical_idx], line_levels[logical_idx]);
            }
        }

        let direction = ResolvedDirection::from_level(base_level);
        log::trace!(
            "log2vis: {} code points, {} paragraph(s), resolved {:?}",
            logical.len(),
            info.paragraphs.len(),
            direction
        );
        Ok(direction)
    }
}

/// UTF-8 copy of `logical` plus the byte offset of each code point.
fn utf8_copy(logical: &[char]) -> Result<(String, Vec<usize>), ReorderError> {
    let byte_len: usize = logical.iter().map(|ch| ch.len_utf8()).sum();

    let mut text = String::new();
    text.try_reserve_exact(byte_len)
        .map_err(|source| ReorderError::Allocation {
            requested: byte_len,
            source,
        })?;
    let mut char_starts = Vec::new();
    char_starts
        .try_reserve_exact(logical.len())
        .map_err(|source| ReorderError::Allocation {
            requested: logical.len().saturating_mul(std::mem::size_of::<usize>()),
            source,
        })?;

    for &ch in logical {
        char_starts.push(text.len());
        text.push(ch);
    }
    Ok((text, char_starts))
}
