//! Outline scanning and editor support for the Prodel procedures language.
//!
//! The interesting part of this crate is [`scanning`]: a lexical scanner
//! that produces a hierarchical outline of a Prodel source document without
//! parsing it. Editor buffers are in an invalid state on almost every
//! keystroke, so the scanner never rejects input; it tracks `begin`/`end`
//! nesting textually and clamps anything unterminated to the end of the
//! document.

pub mod editor;
pub mod language;
pub mod regex;
pub mod rendering;
pub mod scanning;
