//! Low-level tokenizer core for a Starlark-family configuration/scripting
//! dialect.
//!
//! This crate performs **raw scanning only**: it classifies bytes into
//! [`RawTag`] + length pairs with zero allocation and no diagnostics. It has
//! no notion of keywords, escape decoding, numeric values, indentation, or
//! error messages — those live one layer up, in the cooking crate that
//! consumes [`RawToken`]s and turns them into fully resolved tokens.
//!
//! # Architecture
//!
//! `starlex_core` is the "raw" half of a two-layer lexer (modeled after
//! `rustc_lexer` / `rustc_parse::lexer`'s own separation):
//!
//! - **`starlex_core`** (this crate): produces `(RawTag, len)` pairs from raw
//!   bytes. No spans, no interning, no diagnostics, no indentation state.
//! - **`starlex`**: drives the indentation/bracket-depth state machine,
//!   resolves keywords, decodes escapes, parses numeric values, and attaches
//!   spans and diagnostics.
//!
//! This split lets an external tool (syntax highlighter, naive formatter)
//! depend on raw scanning alone without pulling in the interner or
//! diagnostic machinery.
//!
//! # Usage
//!
//! ```
//! use starlex_core::SourceBuffer;
//!
//! let buf = SourceBuffer::new("x = 1\n");
//! assert_eq!(buf.len(), 6);
//! assert!(buf.encoding_issues().is_empty());
//! ```
//!
//! # Stability
//!
//! - `RawTag` enum: variants may be added (`#[non_exhaustive]`)
//! - `RawToken` struct: fields are stable
//! - `SourceBuffer` / `Cursor`: API is stable

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
