//! Bidirectional (BiDi) reordering built on `unicode-bidi`.
//!
//! - Paragraph direction hints and resolution
//! - Logical-to-visual reordering of code points
//! - Mirroring of paired characters in right-to-left runs

pub mod direction;
pub mod engine;
pub mod mirror;

pub use direction::{first_strong_direction, BaseDirection, ResolvedDirection};
pub use engine::{ReorderEngine, UnicodeBidiEngine};
pub use mirror::mirrored_char;
