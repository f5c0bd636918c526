//! Logical-to-visual reordering of whole strings.
//!
//! [`Reorderer`] marshals a UTF-8 string into call-scoped code point
//! buffers, hands them to a [`ReorderEngine`], and encodes the visual
//! order back into a new string.

use logvis_config::LogvisConfig;

use crate::bidi::{BaseDirection, ReorderEngine, ResolvedDirection, UnicodeBidiEngine};
use crate::buffer::CodePointBuffer;
use crate::charset::{decode_str, encode_into, reserve_output};
use crate::error::{BidiError, Result};

/// A string in visual order together with its resolved base direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub text: String,
    pub direction: ResolvedDirection,
}

/// Options applied by a [`Reorderer`] on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderOptions {
    /// Hint used by [`Reorderer::reorder_default`].
    pub default_direction: BaseDirection,
    /// Inputs longer than this many bytes are rejected before allocating.
    pub max_input_bytes: Option<usize>,
}

/// Reorders strings from logical to visual order.
///
/// A `Reorderer` holds no per-call state and can be shared between
/// threads when its engine can.
#[derive(Debug, Clone, Default)]
pub struct Reorderer<E = UnicodeBidiEngine> {
    engine: E,
    options: ReorderOptions,
}

impl Reorderer<UnicodeBidiEngine> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reorderer from loaded configuration.
    pub fn from_config(config: &LogvisConfig) -> Self {
        let engine = UnicodeBidiEngine::new().with_mirroring(config.bidi.mirroring);
        let options = ReorderOptions {
            default_direction: config.bidi.base_direction.into(),
            max_input_bytes: config.bidi.max_input_bytes,
        };
        Self::with_engine(engine).with_options(options)
    }
}

impl<E: ReorderEngine> Reorderer<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            options: ReorderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReorderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Reorder `text`, updating `direction` in place.
    ///
    /// On entry `direction` is the paragraph hint. On success it is
    /// replaced by the resolved direction (`Ltr` or `Rtl`); on failure it
    /// is left as it was.
    pub fn log2vis(&self, text: &str, direction: &mut BaseDirection) -> Result<String> {
        let reordered = self.reorder(text, *direction)?;
        *direction = reordered.direction.into();
        Ok(reordered.text)
    }

    /// Validate `bytes` as UTF-8 and reorder them.
    pub fn reorder_bytes(&self, bytes: &[u8], hint: BaseDirection) -> Result<Reordered> {
        let text = std::str::from_utf8(bytes).map_err(|err| {
            log::debug!(
                "rejecting {} byte input: invalid UTF-8 at byte {}",
                bytes.len(),
                err.valid_up_to()
            );
            BidiError::from(err)
        })?;
        self.reorder(text, hint)
    }

    /// Reorder `text` from logical to visual order.
    pub fn reorder(&self, text: &str, hint: BaseDirection) -> Result<Reordered> {
        if let Some(limit) = self.options.max_input_bytes {
            if text.len() > limit {
                log::debug!("rejecting {} byte input (limit {})", text.len(), limit);
                return Err(BidiError::InputTooLarge {
                    len: text.len(),
                    limit,
                });
            }
        }

        let mut logical = CodePointBuffer::for_input(text.len())?;
        let count = decode_str(text, &mut logical)?;

        // Everything the call needs is allocated before the engine runs.
        let mut visual = CodePointBuffer::with_capacity(count)?;
        let mut text = reserve_output(count)?;
        let direction = self
            .engine
            .log2vis(logical.as_slice(), hint, visual.claim(count)?)
            .map_err(|err| {
                log::debug!("reordering engine failed: {err}");
                BidiError::from(err)
            })?;

        encode_into(visual.as_slice(), &mut text);
        log::trace!(
            "reordered {} code points with hint {:?} -> {:?}",
            count,
            hint,
            direction
        );
        Ok(Reordered { text, direction })
    }

    /// Reorder `text` using the configured default direction hint.
    pub fn reorder_default(&self, text: &str) -> Result<Reordered> {
        self.reorder(text, self.options.default_direction)
    }
}

/// Reorder `text` with the default engine, updating `direction` in place.
///
/// See [`Reorderer::log2vis`].
pub fn log2vis(text: &str, direction: &mut BaseDirection) -> Result<String> {
    Reorderer::new().log2vis(text, direction)
}

/// Reorder `text` with the default engine.
pub fn reorder(text: &str, hint: BaseDirection) -> Result<Reordered> {
    Reorderer::new().reorder(text, hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReorderError;
    use logvis_config::DirectionSetting;

    struct FailingEngine;

    impl ReorderEngine for FailingEngine {
        fn log2vis(
            &self,
            _logical: &[char],
            _hint: BaseDirection,
            _visual: &mut [char],
        ) -> std::result::Result<ResolvedDirection, ReorderError> {
            Err(ReorderError::Engine("boom".into()))
        }
    }

    /// Reverses code points without any bidi analysis.
    struct ReverseEngine;

    impl ReorderEngine for ReverseEngine {
        fn log2vis(
            &self,
            logical: &[char],
            _hint: BaseDirection,
            visual: &mut [char],
        ) -> std::result::Result<ResolvedDirection, ReorderError> {
            for (dst, src) in visual.iter_mut().zip(logical.iter().rev()) {
                *dst = *src;
            }
            Ok(ResolvedDirection::Rtl)
        }
    }

    #[test]
    fn abc_stays_abc() {
        let out = reorder("abc", BaseDirection::Auto).unwrap();
        assert_eq!(out.text, "abc");
        assert_eq!(out.direction, ResolvedDirection::Ltr);
    }

    #[test]
    fn log2vis_writes_back_resolved_direction() {
        let mut direction = BaseDirection::Auto;
        let out = log2vis("\u{05E9}\u{05DC}\u{05D5}\u{05DD} abc", &mut direction).unwrap();
        assert_eq!(out, "abc \u{05DD}\u{05D5}\u{05DC}\u{05E9}");
        assert_eq!(direction, BaseDirection::Rtl);

        let mut direction = BaseDirection::WeakRtl;
        log2vis("abc", &mut direction).unwrap();
        assert_eq!(direction, BaseDirection::Ltr);
    }

    #[test]
    fn direction_untouched_on_failure() {
        let reorderer = Reorderer::with_engine(FailingEngine);
        let mut direction = BaseDirection::WeakRtl;
        assert!(reorderer.log2vis("abc", &mut direction).is_err());
        assert_eq!(direction, BaseDirection::WeakRtl);
    }

    #[test]
    fn engine_failures_propagate_unchanged() {
        let err = Reorderer::with_engine(FailingEngine)
            .reorder("abc", BaseDirection::Auto)
            .unwrap_err();
        match err {
            BidiError::Reordering(inner) => {
                assert_eq!(inner, ReorderError::Engine("boom".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn engine_sees_code_points_not_bytes() {
        let out = Reorderer::with_engine(ReverseEngine)
            .reorder("a\u{05D0}\u{1F600}", BaseDirection::Auto)
            .unwrap();
        assert_eq!(out.text, "\u{1F600}\u{05D0}a");
        assert_eq!(out.direction, ResolvedDirection::Rtl);
    }

    /// Counts engine calls so tests can see whether it ran.
    #[derive(Default)]
    struct CountingEngine {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl ReorderEngine for CountingEngine {
        fn log2vis(
            &self,
            logical: &[char],
            _hint: BaseDirection,
            visual: &mut [char],
        ) -> std::result::Result<ResolvedDirection, ReorderError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            visual.copy_from_slice(logical);
            Ok(ResolvedDirection::Ltr)
        }
    }

    #[test]
    fn output_has_room_for_widest_encoding() {
        let out = Reorderer::with_engine(ReverseEngine)
            .reorder("abc", BaseDirection::Auto)
            .unwrap();
        assert_eq!(out.text, "cba");
        assert!(out.text.capacity() >= 3 * crate::charset::MAX_BYTES_PER_CODE_POINT);
    }

    #[test]
    fn engine_not_called_when_input_rejected() {
        let reorderer = Reorderer::with_engine(CountingEngine::default()).with_options(ReorderOptions {
            max_input_bytes: Some(2),
            ..ReorderOptions::default()
        });
        assert!(reorderer.reorder("abc", BaseDirection::Auto).is_err());
        assert!(reorderer.reorder_bytes(b"\xFF", BaseDirection::Auto).is_err());
        assert_eq!(reorderer.engine().calls.load(std::sync::atomic::Ordering::SeqCst), 0);

        reorderer.reorder("ab", BaseDirection::Auto).unwrap();
        assert_eq!(reorderer.engine().calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        let err = Reorderer::new()
            .reorder_bytes(b"\xD7\x90\xD7", BaseDirection::Auto)
            .unwrap_err();
        assert!(matches!(
            err,
            BidiError::Encoding {
                valid_up_to: 2,
                error_len: None
            }
        ));
    }

    #[test]
    fn valid_bytes_are_reordered() {
        let out = Reorderer::new()
            .reorder_bytes("\u{05D0}\u{05D1}".as_bytes(), BaseDirection::Auto)
            .unwrap();
        assert_eq!(out.text, "\u{05D1}\u{05D0}");
        assert_eq!(out.direction, ResolvedDirection::Rtl);
    }

    #[test]
    fn input_limit_is_enforced() {
        let reorderer = Reorderer::new().with_options(ReorderOptions {
            max_input_bytes: Some(4),
            ..ReorderOptions::default()
        });
        assert!(reorderer.reorder("abcd", BaseDirection::Auto).is_ok());
        let err = reorderer.reorder("abcde", BaseDirection::Auto).unwrap_err();
        assert!(matches!(err, BidiError::InputTooLarge { len: 5, limit: 4 }));
    }

    #[test]
    fn empty_input() {
        let out = reorder("", BaseDirection::Rtl).unwrap();
        assert_eq!(out.text, "");
        assert_eq!(out.direction, ResolvedDirection::Rtl);
    }

    #[test]
    fn from_config_applies_settings() {
        let mut config = LogvisConfig::default();
        config.bidi.base_direction = DirectionSetting::WeakRtl;
        config.bidi.mirroring = false;
        config.bidi.max_input_bytes = Some(32);

        let reorderer = Reorderer::from_config(&config);
        assert!(!reorderer.engine().mirroring());
        assert_eq!(reorderer.options().max_input_bytes, Some(32));
        assert_eq!(reorderer.options().default_direction, BaseDirection::WeakRtl);

        let out = reorderer.reorder_default("42").unwrap();
        assert_eq!(out.direction, ResolvedDirection::Rtl);
    }
}
