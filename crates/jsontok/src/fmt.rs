//! Compact debug rendering of a parse state.
//!
//! The format packs the last key/token, its span, any error, and (in detail
//! mode) the grammar position and open containers into one short string:
//! `k3@1:d2@5` is a three-byte key at offset 1 holding a two-byte decimal at
//! offset 5; `E1@4!D:B_V:{` is end-of-buffer one byte into a possibly
//! truncated decimal at offset 4, positioned before a value inside an object.
//! Offsets are buffer-relative.

use alloc::string::String;
use core::fmt::Write;

use crate::{state::ParseState, token::Token};

/// Render the last token with key prefix, span, and error suffix. Position
/// and stack context are appended only for `End` tokens, where the scan point
/// matters most.
#[must_use]
pub fn token_string(ps: &ParseState<'_>) -> String {
    render(ps, false)
}

/// Like [`token_string`] but always appends position and stack context.
#[must_use]
pub fn token_string_detail(ps: &ParseState<'_>) -> String {
    render(ps, true)
}

fn render(ps: &ParseState<'_>, detail: bool) -> String {
    let mut out = String::new();
    if ps.koff != ps.klim {
        let _ = write!(out, "k{}@{}:", ps.klim - ps.koff, ps.koff);
    }
    out.push(ps.tok.letter());
    if !ps.tok.fixed_len() && ps.vlim != ps.voff {
        let _ = write!(out, "{}", ps.vlim - ps.voff);
    }
    let _ = write!(out, "@{}", ps.voff);
    if let Some(code) = ps.ecode {
        out.push('!');
        out.push(code.letter());
    }
    if detail || ps.tok == Token::End {
        out.push(':');
        out.push_str(ps.pos.name());
        if !ps.stack.is_empty() {
            out.push(':');
            for c in &ps.stack {
                out.push(c.letter());
            }
        }
    }
    out
}
