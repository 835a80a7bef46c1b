//! Comment records (§6): raw text, no classification.
//!
//! `ori_lexer`'s own `comments.rs` classifies doc-comment flavors
//! (`#Description`, `@param`, `!Warning`, ...) for its documentation
//! pipeline; this grammar's comments carry no such structure, so the module
//! shrinks to the flat record §6 specifies, collected by the indentation
//! engine and the driver as they encounter `#`-to-end-of-line runs.

use crate::file_locations::Location;

/// A single `#`-to-end-of-line comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub location: Location,
    /// Byte offset of the leading `#`.
    pub start: u32,
    /// Raw text, including the leading `#`, excluding the terminating newline.
    pub text: String,
}
