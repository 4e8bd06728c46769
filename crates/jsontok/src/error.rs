//! Error taxonomy and the caller-facing diagnostic type.

use alloc::string::String;

use thiserror::Error;

/// What went wrong, recorded sticky in [`ParseState::ecode`](crate::ParseState::ecode).
///
/// Discriminants are the single-letter ASCII codes the debug formatter
/// prints after `!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u8)]
pub enum ErrorCode {
    /// A byte could not start any value, key, or structural token here.
    #[error("bad value")]
    BadValue = b'B',
    /// A decimal ended exactly at the buffer limit on a digit: genuinely
    /// ambiguous, more digits could follow in the next chunk.
    #[error("possibly truncated decimal")]
    PossiblyTruncatedDecimal = b'D',
    /// The stream was explicitly ended (empty continuation buffer) while an
    /// object key was still awaiting its value.
    #[error("key without value")]
    KeyWithoutValue = b'K',
    /// A key or value started but the buffer ended before it completed.
    #[error("truncated value")]
    Truncated = b'T',
    /// A structurally valid token appeared where the grammar forbids it.
    #[error("unexpected token")]
    UnexpectedToken = b'U',
}

impl ErrorCode {
    /// Whether a continuation buffer (or other caller intervention) may
    /// resolve this. `BadValue` and `UnexpectedToken` are fatal for the
    /// stream; the truncation family may just mean "wait for more data".
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        !matches!(self, ErrorCode::BadValue | ErrorCode::UnexpectedToken)
    }

    /// Single-letter diagnostic code used by the debug formatter.
    #[must_use]
    pub fn letter(self) -> char {
        self as u8 as char
    }
}

/// A diagnostic built from a failed parse state snapshot.
///
/// Offsets are absolute stream offsets (the state's `soff` is folded in),
/// and `snapshot` is the [`token_string`](crate::token_string) rendering of
/// the state at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} at bytes {start}..{end} (line {line}, col {col}): {snapshot}")]
pub struct ParseError {
    /// The recorded error code.
    pub code: ErrorCode,
    /// Absolute start of the faulting span.
    pub start: usize,
    /// Absolute end of the faulting span (exclusive).
    pub end: usize,
    /// 1-based line of the scan point.
    pub line: usize,
    /// 1-based column of the scan point.
    pub col: usize,
    /// Formatter rendering of the failed state.
    pub snapshot: String,
}
