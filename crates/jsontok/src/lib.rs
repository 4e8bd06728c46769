//! A resumable, zero-copy JSON tokenizer.
//!
//! `jsontok` locates token boundaries in JSON text without building a value
//! tree, decoding escapes, or copying input bytes. The caller owns a
//! [`ParseState`] record and repeatedly calls [`ParseState::advance`]; each
//! call moves the state past exactly one token and leaves the key and value
//! byte spans in the record. Input can arrive as one buffer or as many:
//! queueing a continuation buffer with [`ParseState::set_next`] lets the
//! engine swap buffers mid-call, so a stream fed in chunks tokenizes the
//! same as a stream fed whole.
//!
//! The hot loop is a hand-tuned finite-state machine: grammar positions are
//! bit-packed so that a single table lookup keyed by `position | byte`
//! replaces a multi-way branch, and per-byte classification goes through a
//! 256-entry flag table. Errors are recorded in the state (sticky until the
//! caller clears them) rather than raised, so the engine never unwinds
//! across a buffer boundary.
//!
//! ```
//! use jsontok::{ParseState, Token};
//!
//! let mut ps = ParseState::new(b"{\"a\":1}");
//! assert_eq!(ps.advance(), Token::ObjectBegin);
//! assert_eq!(ps.advance(), Token::Decimal);
//! assert_eq!(ps.key(), b"\"a\"");
//! assert_eq!(ps.value(), b"1");
//! assert_eq!(ps.advance(), Token::ObjectEnd);
//! assert_eq!(ps.advance(), Token::End);
//! assert!(ps.ecode.is_none());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod charclass;
mod error;
mod fmt;
mod position;
mod scan;
mod state;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, ParseError};
pub use fmt::{token_string, token_string_detail};
pub use position::Position;
pub use state::ParseState;
pub use token::{Container, Token};
