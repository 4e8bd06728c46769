use alloc::{string::String, vec::Vec};

use crate::{fmt, ParseState, Token};

/// Advance until `End`, rendering each stop with the debug formatter. The
/// final `End` rendering (which carries position and stack context) is
/// included.
pub(crate) fn collect(ps: &mut ParseState<'_>) -> String {
    let mut toks = Vec::new();
    loop {
        let tok = ps.advance();
        toks.push(fmt::token_string(ps));
        if tok == Token::End {
            break;
        }
    }
    toks.join(",")
}

/// Tokenize `src` as a single buffer and render the whole run.
pub(crate) fn src_tokens(src: &[u8]) -> String {
    collect(&mut ParseState::new(src))
}
