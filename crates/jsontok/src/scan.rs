//! The three token scanners: literal keywords, quoted strings, decimals.
//!
//! Each scanner reports how far it got with [`Scan`]: `Complete(end)` is the
//! offset just past the token, `Incomplete(end)` is where the scan stopped,
//! either at the limit (possibly truncated, more bytes could resolve it) or
//! at a byte that cannot belong to the token (malformed). The engine tells
//! the two apart by comparing `end` against the limit.

use memchr::memchr;

use crate::charclass;

/// Outcome of a forward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// The token is complete; `end` is the offset just past it.
    Complete(usize),
    /// The scan stopped at `end` without completing the token.
    Incomplete(usize),
}

impl Scan {
    /// The stop offset, regardless of outcome.
    pub(crate) fn end(self) -> usize {
        match self {
            Scan::Complete(end) | Scan::Incomplete(end) => end,
        }
    }
}

/// Match the remaining bytes of a literal keyword (`rue`, `alse`, `ull`)
/// starting at `off`. An `Incomplete` end points at the first byte that
/// failed to match, or at the limit when the buffer ran out first.
pub(crate) fn skip_literal(src: &[u8], off: usize, lim: usize, rest: &[u8]) -> Scan {
    let take = rest.len().min(lim - off);
    let mut i = 0;
    while i < take && src[off + i] == rest[i] {
        i += 1;
    }
    if i == rest.len() {
        Scan::Complete(off + i)
    } else {
        Scan::Incomplete(off + i)
    }
}

/// Find the unescaped closing quote; `off` is just past the opening quote.
///
/// A quote is escaped iff the run of backslashes immediately preceding it
/// has odd length; the run is bounded by the string start, so a backslash
/// belonging to earlier input is never counted.
pub(crate) fn skip_string(src: &[u8], off: usize, lim: usize) -> Scan {
    let start = off;
    let mut at = off;
    while let Some(found) = memchr(b'"', &src[at..lim]) {
        let quote = at + found;
        let mut run = 0;
        while quote - run > start && src[quote - run - 1] == b'\\' {
            run += 1;
        }
        if run % 2 == 0 {
            return Scan::Complete(quote + 1);
        }
        at = quote + 1;
    }
    Scan::Incomplete(lim)
}

/// Consume decimal-body bytes (`-+.eE` and digits). Complete only when the
/// byte after the run is a delimiter, since nothing short of a delimiter
/// proves the literal ended. An `Incomplete` end at the limit may mean
/// truncation; short of the limit it means a byte that can neither extend
/// nor terminate a number.
pub(crate) fn skip_decimal(src: &[u8], mut off: usize, lim: usize) -> Scan {
    while off < lim && charclass::is(src[off], charclass::DECIMAL_BODY) {
        off += 1;
    }
    if off < lim && charclass::is(src[off], charclass::DELIM) {
        Scan::Complete(off)
    } else {
        Scan::Incomplete(off)
    }
}
