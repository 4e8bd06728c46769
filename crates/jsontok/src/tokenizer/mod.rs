//! The pull-based scanning engine.
//!
//! [`advance`](ParseState::advance) moves the state past exactly one token.
//! The hot loop reads one byte, dispatches on it, and for multi-byte tokens
//! hands off to a scanner from [`scan`]; grammar legality is a single
//! transition-table load keyed on position and token code. Close brackets
//! bypass the table and resolve through the container stack.

use log::{debug, trace};

use crate::{
    charclass,
    error::ErrorCode,
    position::{self, Position},
    scan::{self, Scan},
    state::ParseState,
    token::{Container, Token},
};

impl<'src> ParseState<'src> {
    /// Scan the next token, updating the state in place.
    ///
    /// Returns the token's kind, or [`Token::End`] when no token is
    /// available: the buffer is exhausted, the stream legitimately ended, or
    /// an error was recorded in `ecode`. While an error is recorded, calls
    /// return `End` without moving; see
    /// [`clear_error`](ParseState::clear_error) and
    /// [`continue_with`](ParseState::continue_with).
    pub fn advance(&mut self) -> Token {
        if self.ecode.is_some() {
            return Token::End;
        }
        self.koff = self.klim;
        self.voff = self.vlim;
        loop {
            while self.vlim < self.lim {
                self.voff = self.vlim;
                let b = self.src[self.vlim];
                self.vlim += 1;
                match b {
                    b'\x08' | b'\t' | b'\n' | b'\x0c' | b'\r' | b' ' => {
                        if b == b'\n' {
                            self.line += 1;
                            self.lineoff = self.soff + self.vlim;
                        }
                        while self.vlim < self.lim {
                            let w = self.src[self.vlim];
                            if !charclass::is(w, charclass::WHITESPACE) {
                                break;
                            }
                            self.vlim += 1;
                            if w == b'\n' {
                                self.line += 1;
                                self.lineoff = self.soff + self.vlim;
                            }
                        }
                    }
                    b',' | b':' => match position::transition(self.pos, b) {
                        Some(next) => self.pos = next,
                        None => return self.fail_unexpected(),
                    },
                    b'"' => {
                        let scanned = scan::skip_string(self.src, self.vlim, self.lim);
                        let Some(next) = position::transition(self.pos, b's') else {
                            self.vlim = scanned.end();
                            return self.fail_unexpected();
                        };
                        if next == Position::ObjAfterKey {
                            // A key is recorded, not emitted; scanning
                            // continues toward the value.
                            self.koff = self.voff;
                            self.klim = scanned.end();
                            self.voff = scanned.end();
                            match scanned {
                                Scan::Complete(end) => {
                                    self.pos = next;
                                    self.vlim = end;
                                }
                                Scan::Incomplete(end) => {
                                    return self.fail_incomplete(Token::String, end);
                                }
                            }
                        } else {
                            match scanned {
                                Scan::Complete(end) => {
                                    self.vlim = end;
                                    self.pos = next;
                                    self.vcount += 1;
                                    return self.emit(Token::String);
                                }
                                Scan::Incomplete(end) => {
                                    return self.fail_incomplete(Token::String, end);
                                }
                            }
                        }
                    }
                    b'f' | b'n' | b't' => {
                        let (rest, kind): (&[u8], Token) = match b {
                            b'f' => (b"alse", Token::False),
                            b'n' => (b"ull", Token::Null),
                            _ => (b"rue", Token::True),
                        };
                        let scanned = scan::skip_literal(self.src, self.vlim, self.lim, rest);
                        let Some(next) = position::transition(self.pos, b) else {
                            self.vlim = scanned.end();
                            return self.fail_unexpected();
                        };
                        match scanned {
                            Scan::Complete(end) => {
                                self.vlim = end;
                                self.pos = next;
                                self.vcount += 1;
                                return self.emit(kind);
                            }
                            Scan::Incomplete(end) => {
                                return self.fail_incomplete(kind, end);
                            }
                        }
                    }
                    b'0'..=b'9' | b'-' => {
                        let scanned = scan::skip_decimal(self.src, self.vlim, self.lim);
                        let Some(next) = position::transition(self.pos, b'd') else {
                            self.vlim = scanned.end();
                            return self.fail_unexpected();
                        };
                        match scanned {
                            Scan::Complete(end) => {
                                self.vlim = end;
                                self.pos = next;
                                self.vcount += 1;
                                return self.emit(Token::Decimal);
                            }
                            Scan::Incomplete(end) => {
                                return self.fail_incomplete(Token::Decimal, end);
                            }
                        }
                    }
                    b'[' | b'{' => {
                        let Some(next) = position::transition(self.pos, b) else {
                            return self.fail_unexpected();
                        };
                        self.pos = next;
                        if b == b'[' {
                            self.stack.push(Container::Array);
                            return self.emit(Token::ArrayBegin);
                        }
                        self.stack.push(Container::Object);
                        return self.emit(Token::ObjectBegin);
                    }
                    b']' => {
                        if !matches!(
                            self.pos,
                            Position::ArrBeforeFirstValue | Position::ArrAfterValue
                        ) {
                            return self.fail_unexpected();
                        }
                        self.close_container();
                        return self.emit(Token::ArrayEnd);
                    }
                    b'}' => {
                        if !matches!(
                            self.pos,
                            Position::ObjBeforeFirstKey | Position::ObjAfterValue
                        ) {
                            return self.fail_unexpected();
                        }
                        self.close_container();
                        return self.emit(Token::ObjectEnd);
                    }
                    _ => {
                        self.vlim -= 1;
                        return self.fail(ErrorCode::BadValue);
                    }
                }
            }
            // Clean exhaustion: no byte was mid-token.
            self.voff = self.vlim;
            match self.next_src.take() {
                Some(next) if !next.is_empty() => self.swap_buffer(next),
                Some(_) => {
                    // Empty continuation is the explicit end-of-stream
                    // signal. Only here does a dangling key become an
                    // error; at mere end-of-buffer more input may still
                    // arrive to supply the value.
                    if matches!(self.pos, Position::ObjAfterKey | Position::ObjBeforeValue) {
                        return self.fail(ErrorCode::KeyWithoutValue);
                    }
                    return self.end_src();
                }
                None => return self.end_src(),
            }
        }
    }

    /// [`advance`](ParseState::advance), mapping fatal errors to `Err` via
    /// [`check`](ParseState::check).
    ///
    /// # Errors
    ///
    /// Returns the diagnostic when the scan recorded `BadValue` or
    /// `UnexpectedToken`.
    pub fn advance_checked(&mut self) -> Result<Token, crate::ParseError> {
        let tok = self.advance();
        self.check()?;
        Ok(tok)
    }

    /// [`advance`](ParseState::advance) with an error hook: `on_error` is
    /// invoked once when this call records a new error, before returning.
    pub fn advance_with<F>(&mut self, mut on_error: F) -> Token
    where
        F: FnMut(&ParseState<'src>),
    {
        let had_error = self.ecode.is_some();
        let tok = self.advance();
        if !had_error && self.ecode.is_some() {
            on_error(self);
        }
        tok
    }

    #[inline]
    fn emit(&mut self, kind: Token) -> Token {
        self.tok = kind;
        kind
    }

    fn end_src(&mut self) -> Token {
        if self.koff == self.klim {
            self.koff = self.voff;
            self.klim = self.voff;
        }
        self.emit(Token::End)
    }

    fn fail(&mut self, code: ErrorCode) -> Token {
        debug!(
            "scan stopped with {code} at absolute offset {} (line {}, col {})",
            self.soff + self.voff,
            self.line,
            self.col()
        );
        self.ecode = Some(code);
        self.end_src()
    }

    fn fail_unexpected(&mut self) -> Token {
        self.fail(ErrorCode::UnexpectedToken)
    }

    /// A scanner stopped short. At the limit this is a truncation (a decimal
    /// that ends on a digit is only *possibly* truncated); short of the
    /// limit the stopping byte itself is bad and is folded into the span.
    fn fail_incomplete(&mut self, kind: Token, end: usize) -> Token {
        self.vlim = end;
        if end >= self.lim {
            let code = if kind == Token::Decimal
                && charclass::is(self.src[end - 1], charclass::DECIMAL_DIGIT)
            {
                ErrorCode::PossiblyTruncatedDecimal
            } else {
                ErrorCode::Truncated
            };
            self.fail(code)
        } else {
            self.vlim += 1;
            self.fail(ErrorCode::BadValue)
        }
    }

    /// Pop one container and land after a value in whatever encloses it.
    /// An empty stack means the top level, which scans like an array body.
    fn close_container(&mut self) {
        self.stack.pop();
        self.pos = match self.stack.last() {
            Some(Container::Object) => Position::ObjAfterValue,
            _ => Position::ArrAfterValue,
        };
        self.vcount += 1;
    }

    /// Install a queued continuation buffer and keep scanning.
    fn swap_buffer(&mut self, next: &'src [u8]) {
        trace!(
            "buffer swap: {} bytes after absolute offset {}",
            next.len(),
            self.soff + self.lim
        );
        self.soff += self.lim;
        self.src = next;
        self.lim = next.len();
        self.koff = 0;
        self.klim = 0;
        self.voff = 0;
        self.vlim = 0;
        self.tok = Token::End;
    }
}

#[cfg(test)]
mod tests;
