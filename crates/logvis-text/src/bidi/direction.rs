//! Paragraph direction hints and resolved directions.

use logvis_config::DirectionSetting;
use unicode_bidi::{bidi_class, BidiClass, Level, LTR_LEVEL, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char),
    /// defaulting to left-to-right.
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
    /// Detect from text, falling back to left-to-right when no strong
    /// character is present.
    WeakLtr,
    /// Detect from text, falling back to right-to-left when no strong
    /// character is present.
    WeakRtl,
}

impl BaseDirection {
    /// Embedding level shared by every paragraph of `text`.
    ///
    /// Detection looks at the whole text, so a strong character after a
    /// paragraph separator still decides the direction.
    pub fn paragraph_level(self, text: &str) -> Level {
        match self {
            BaseDirection::Ltr => LTR_LEVEL,
            BaseDirection::Rtl => RTL_LEVEL,
            BaseDirection::Auto | BaseDirection::WeakLtr | BaseDirection::WeakRtl => {
                first_strong_direction(text)
                    .unwrap_or(self.fallback())
                    .level()
            }
        }
    }

    /// Direction reported when the text itself cannot decide, e.g. for
    /// empty input.
    pub fn fallback(self) -> ResolvedDirection {
        match self {
            BaseDirection::Rtl | BaseDirection::WeakRtl => ResolvedDirection::Rtl,
            BaseDirection::Auto | BaseDirection::Ltr | BaseDirection::WeakLtr => {
                ResolvedDirection::Ltr
            }
        }
    }
}

impl From<ResolvedDirection> for BaseDirection {
    fn from(direction: ResolvedDirection) -> Self {
        match direction {
            ResolvedDirection::Ltr => BaseDirection::Ltr,
            ResolvedDirection::Rtl => BaseDirection::Rtl,
        }
    }
}

impl From<DirectionSetting> for BaseDirection {
    fn from(setting: DirectionSetting) -> Self {
        match setting {
            DirectionSetting::Auto => BaseDirection::Auto,
            DirectionSetting::Ltr => BaseDirection::Ltr,
            DirectionSetting::Rtl => BaseDirection::Rtl,
            DirectionSetting::WeakLtr => BaseDirection::WeakLtr,
            DirectionSetting::WeakRtl => BaseDirection::WeakRtl,
        }
    }
}

/// Direction the reordering engine resolved for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDirection {
    Ltr,
    Rtl,
}

impl ResolvedDirection {
    pub fn from_level(level: Level) -> Self {
        if level.is_rtl() {
            ResolvedDirection::Rtl
        } else {
            ResolvedDirection::Ltr
        }
    }

    pub fn level(self) -> Level {
        match self {
            ResolvedDirection::Ltr => LTR_LEVEL,
            ResolvedDirection::Rtl => RTL_LEVEL,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == ResolvedDirection::Rtl
    }
}

/// Direction of the first strong character in `text`, ignoring characters
/// inside isolates (UAX-9 rule P2).
///
/// The scan continues past paragraph separators; an isolate left open at
/// a separator ends there.
pub fn first_strong_direction(text: &str) -> Option<ResolvedDirection> {
    let mut isolate_depth = 0usize;
    for ch in text.chars() {
        match bidi_class(ch) {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => isolate_depth += 1,
            BidiClass::PDI => isolate_depth = isolate_depth.saturating_sub(1),
            BidiClass::B => isolate_depth = 0,
            BidiClass::L if isolate_depth == 0 => return Some(ResolvedDirection::Ltr),
            BidiClass::R | BidiClass::AL if isolate_depth == 0 => {
                return Some(ResolvedDirection::Rtl);
            }
            _ => {}
        }
    }
    None
}
