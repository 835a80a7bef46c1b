//! Indentation engine: indent stack, pending-dent counter, bracket-depth
//! suppression (§4.C).
//!
//! No other module in this crate pair's lineage tracks significant
//! whitespace, so there is no direct module to generalize here — this is
//! built fresh, in the surrounding idiom (explicit state struct, `#[cold]`
//! error factories on [`crate::lex_error::LexError`], errors recorded as
//! values rather than raised), cross-checked against the
//! indentation-tracking lexers in the wider retrieval pack (`py_lexer`,
//! `ruff_python_parser`, `lex-fmt-core`'s `sem_indentation`), all of which
//! share the same indent-stack-plus-pending-dents shape.

use crate::comments::Comment;
use crate::file_locations::FileLocations;
use crate::lex_error::LexError;

/// Tracks the stack of currently-open indentation levels.
///
/// `stack[0] == 0` always; the stack is strictly increasing from bottom to
/// top. Column widths, not byte counts — a tab counts as one column (§9's
/// documented tab-policy parity).
pub(crate) struct IndentEngine {
    stack: Vec<u32>,
}

impl IndentEngine {
    pub(crate) fn new() -> Self {
        Self { stack: vec![0] }
    }

    /// Measure indentation starting at `*pos`, advancing it past spaces,
    /// tabs, CRs, blank lines, and line comments (pushed to `comments`),
    /// stopping at the first byte that isn't part of indentation (not
    /// consumed) or at end-of-buffer.
    ///
    /// Returns the signed change to fold into the driver's `dents` counter.
    pub(crate) fn measure(
        &mut self,
        bytes: &[u8],
        pos: &mut u32,
        locations: &FileLocations,
        comments: &mut Vec<Comment>,
        errors: &mut Vec<LexError>,
    ) -> i32 {
        let mut count = 0u32;
        loop {
            match bytes.get(*pos as usize).copied() {
                Some(b' ') => {
                    count += 1;
                    *pos += 1;
                }
                Some(b'\t') => {
                    count += 1;
                    errors.push(LexError::tab_in_indentation(locations.locate(*pos)));
                    *pos += 1;
                }
                Some(b'\r') => {
                    *pos += 1;
                }
                Some(b'\n') => {
                    *pos += 1;
                    count = 0;
                }
                Some(b'#') => {
                    let start = *pos;
                    while !matches!(bytes.get(*pos as usize), None | Some(b'\n')) {
                        *pos += 1;
                    }
                    comments.push(Comment {
                        location: locations.locate(start),
                        start,
                        text: String::from_utf8_lossy(&bytes[start as usize..*pos as usize])
                            .into_owned(),
                    });
                    count = 0;
                }
                None => {
                    count = 0;
                    break;
                }
                Some(_) => break,
            }
        }
        self.apply(count, *pos, locations, errors)
    }

    /// Compare `count` against the current top of the stack and adjust it,
    /// returning the signed `dents` delta.
    fn apply(
        &mut self,
        count: u32,
        pos: u32,
        locations: &FileLocations,
        errors: &mut Vec<LexError>,
    ) -> i32 {
        let top = *self.stack.last().expect("indent stack is never empty");
        if count > top {
            self.stack.push(count);
            1
        } else if count < top {
            let mut delta = 0i32;
            while *self.stack.last().expect("indent stack is never empty") > count {
                self.stack.pop();
                delta -= 1;
            }
            if *self.stack.last().expect("indent stack is never empty") < count {
                errors.push(LexError::indentation_error(
                    locations.locate(pos.saturating_sub(1)),
                ));
            }
            delta
        } else {
            0
        }
    }

    /// Levels still open above the sentinel (`stack.len() - 1`).
    pub(crate) fn open_levels(&self) -> usize {
        self.stack.len() - 1
    }
}

/// Close one bracket level, recording "indentation error" at `pos - 1` if
/// `depth` is already zero (bracket underflow).
pub(crate) fn pop_paren(
    depth: &mut u32,
    pos: u32,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
) {
    match depth.checked_sub(1) {
        Some(next) => *depth = next,
        None => errors.push(LexError::indentation_error(
            locations.locate(pos.saturating_sub(1)),
        )),
    }
}
