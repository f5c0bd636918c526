//! logvis-text: logical-to-visual reordering of bidirectional text.
//!
//! Converts a string in reading order into the order its characters must
//! be placed on a strictly left-to-right rendering surface, and reports
//! the paragraph direction the Unicode BiDi algorithm resolved.
//!
//! ```
//! use logvis_text::{log2vis, BaseDirection};
//!
//! let mut direction = BaseDirection::Auto;
//! let visual = log2vis("\u{05E9}\u{05DC}\u{05D5}\u{05DD} abc", &mut direction).unwrap();
//! assert_eq!(visual, "abc \u{05DD}\u{05D5}\u{05DC}\u{05E9}");
//! assert_eq!(direction, BaseDirection::Rtl);
//! ```

pub mod bidi;
pub mod buffer;
pub mod charset;
pub mod error;
pub mod shim;

pub use bidi::{BaseDirection, ReorderEngine, ResolvedDirection, UnicodeBidiEngine};
pub use buffer::CodePointBuffer;
pub use charset::{charset_to_codepoints, codepoints_to_charset};
pub use error::{BidiError, ReorderError, Result};
pub use shim::{log2vis, reorder, ReorderOptions, Reordered, Reorderer};
