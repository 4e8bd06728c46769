//! The caller-owned parse state record.

use alloc::vec::Vec;

use log::trace;

use crate::{
    error::{ErrorCode, ParseError},
    fmt,
    position::{self, Position},
    token::{Container, Token},
};

/// Mutable tokenizer state for one logical byte stream.
///
/// A `ParseState` is created once per stream and passed by mutable reference
/// into every [`advance`](ParseState::advance) call, which moves it past
/// exactly one token. All fields are public: the record is the interface,
/// and callers are free to inspect offsets between calls. The engine borrows
/// `src` and never copies input bytes; it holds no other resources, so
/// dropping the state is all the teardown there is.
///
/// Offsets `koff`/`klim`/`voff`/`vlim` are relative to the current buffer;
/// add `soff` for absolute stream offsets. The invariant
/// `koff <= klim <= voff <= vlim` holds after every call.
///
/// A state is not safe for concurrent mutation, but independent states share
/// nothing and may run on separate threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState<'src> {
    /// Buffer currently being scanned.
    pub src: &'src [u8],
    /// Continuation buffer, swapped in when `src` is exhausted cleanly. An
    /// empty buffer here marks legitimate end-of-input.
    pub next_src: Option<&'src [u8]>,
    /// Bytes consumed from all previous buffers; monotonic, never reset.
    pub soff: usize,
    /// Exclusive scan limit within `src`.
    pub lim: usize,
    /// Offset of the opening quote of the most recent object key.
    pub koff: usize,
    /// Offset just past the key's closing quote; `koff == klim` means no key.
    pub klim: usize,
    /// Offset where the most recent value starts.
    pub voff: usize,
    /// Offset just past the most recent value (exclusive).
    pub vlim: usize,
    /// Last token produced; [`Token::End`] when none.
    pub tok: Token,
    /// Grammar position: container context and sub-phase in one value.
    pub pos: Position,
    /// Sticky error. Once set, `advance` is a no-op until the caller clears
    /// it ([`clear_error`](ParseState::clear_error)) or re-feeds
    /// ([`continue_with`](ParseState::continue_with)).
    pub ecode: Option<ErrorCode>,
    /// Completed values: each scalar, each container close, each key/value
    /// pair counts once. Keys and container opens do not count.
    pub vcount: usize,
    /// 1-based line number of the scan point.
    pub line: usize,
    /// Absolute stream offset of the start of the current line.
    pub lineoff: usize,
    /// Open containers, innermost last. Depth is bounded only by memory.
    pub stack: Vec<Container>,
}

impl<'src> ParseState<'src> {
    /// Initial state over `src`: top level, before the first value.
    #[must_use]
    pub fn new(src: &'src [u8]) -> Self {
        Self::with_limit(src, src.len())
    }

    /// Initial state scanning only `src[..lim]`.
    #[must_use]
    pub fn with_limit(src: &'src [u8], lim: usize) -> Self {
        ParseState {
            src,
            next_src: None,
            soff: 0,
            lim,
            koff: 0,
            klim: 0,
            voff: 0,
            vlim: 0,
            tok: Token::End,
            pos: Position::ArrBeforeFirstValue,
            ecode: None,
            vcount: 0,
            line: 1,
            lineoff: 0,
            stack: Vec::new(),
        }
    }

    /// Queue `src` to be swapped in when the current buffer is exhausted
    /// cleanly. Queue an empty buffer to signal end-of-input explicitly.
    pub fn set_next(&mut self, src: &'src [u8]) {
        self.next_src = Some(src);
    }

    /// Manually re-feed the tokenizer with a fresh buffer, keeping grammar
    /// position, stack, counts and line bookkeeping. Buffer-relative offsets
    /// and any error are reset; `soff` accumulates so absolute offsets stay
    /// contiguous.
    ///
    /// This is the caller-driven twin of the automatic `next_src` swap, and
    /// the way to resume after a truncation the caller has resolved (for
    /// example by re-feeding the truncated tail bytes at the front of the
    /// new buffer).
    pub fn continue_with(&mut self, src: &'src [u8]) {
        trace!(
            "re-feed: {} bytes after absolute offset {}",
            src.len(),
            self.soff + self.lim
        );
        self.soff += self.lim;
        self.src = src;
        self.lim = src.len();
        self.koff = 0;
        self.klim = 0;
        self.voff = 0;
        self.vlim = 0;
        self.tok = Token::End;
        self.ecode = None;
    }

    /// Clear the sticky error so `advance` may make progress again. Offsets
    /// are left exactly as the error path recorded them.
    pub fn clear_error(&mut self) {
        self.ecode = None;
    }

    /// Resolve a [`PossiblyTruncatedDecimal`](ErrorCode::PossiblyTruncatedDecimal)
    /// at the end of the buffer as a complete number: apply the
    /// already-validated decimal transition, count the value and drop the
    /// error. Returns `false` when the state is not in that condition.
    ///
    /// A caller that knows the next chunk starts with a delimiter calls this
    /// and then queues the chunk; scanning resumes without re-emitting the
    /// number.
    pub fn accept_truncated_decimal(&mut self) -> bool {
        if self.ecode != Some(ErrorCode::PossiblyTruncatedDecimal) {
            return false;
        }
        // The transition was checked before the truncation was recorded, so
        // this lookup cannot miss.
        let Some(next) = position::transition(self.pos, b'd') else {
            return false;
        };
        self.pos = next;
        self.vcount += 1;
        self.tok = Token::Decimal;
        self.ecode = None;
        true
    }

    /// Bytes of the most recent key span, quotes included.
    #[must_use]
    pub fn key(&self) -> &'src [u8] {
        &self.src[self.koff..self.klim]
    }

    /// Bytes of the most recent value span.
    #[must_use]
    pub fn value(&self) -> &'src [u8] {
        &self.src[self.voff..self.vlim]
    }

    /// Absolute stream span of the most recent key.
    #[must_use]
    pub fn key_span(&self) -> (usize, usize) {
        (self.soff + self.koff, self.soff + self.klim)
    }

    /// Absolute stream span of the most recent value.
    #[must_use]
    pub fn value_span(&self) -> (usize, usize) {
        (self.soff + self.voff, self.soff + self.vlim)
    }

    /// 1-based column of the scan point on the current line.
    #[must_use]
    pub fn col(&self) -> usize {
        self.soff + self.vlim - self.lineoff + 1
    }

    /// Build the diagnostic for the current error, if any.
    #[must_use]
    pub fn error(&self) -> Option<ParseError> {
        let code = self.ecode?;
        let (start, end) = self.value_span();
        Some(ParseError {
            code,
            start,
            end,
            line: self.line,
            col: self.col(),
            snapshot: fmt::token_string(self),
        })
    }

    /// Default error policy: fatal codes (`BadValue`, `UnexpectedToken`)
    /// become an `Err`; recoverable codes are left for the caller to
    /// interpret, since in a streaming context they may simply mean "wait
    /// for more data".
    ///
    /// # Errors
    ///
    /// Returns the diagnostic for a fatal recorded error code.
    pub fn check(&self) -> Result<(), ParseError> {
        match self.error() {
            Some(err) if !err.code.is_recoverable() => Err(err),
            _ => Ok(()),
        }
    }
}
