use crate::{token_string, ErrorCode, ParseState, Position, Token};

#[test]
fn single_string_document() {
    let mut ps = ParseState::new(b"\"ab\"");
    assert_eq!(ps.advance(), Token::String);
    assert_eq!(ps.value(), b"\"ab\"");
    assert_eq!(ps.value_span(), (0, 4));
    assert_eq!(ps.vcount, 1);
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
}

#[test]
fn key_and_value_spans() {
    let mut ps = ParseState::new(b"{ \"key\" : 128 }");
    assert_eq!(ps.advance(), Token::ObjectBegin);
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.key(), b"\"key\"");
    assert_eq!(ps.key_span(), (2, 7));
    assert_eq!(ps.value(), b"128");
    assert_eq!(ps.value_span(), (10, 13));
    assert_eq!(ps.advance(), Token::ObjectEnd);
    assert_eq!(ps.advance(), Token::End);
}

#[test]
fn literals_in_an_array() {
    let mut ps = ParseState::new(b"[true,false,null]");
    assert_eq!(ps.advance(), Token::ArrayBegin);
    assert_eq!(ps.advance(), Token::True);
    assert_eq!(ps.advance(), Token::False);
    assert_eq!(ps.advance(), Token::Null);
    assert_eq!(ps.advance(), Token::ArrayEnd);
    assert_eq!(ps.vcount, 4);
    assert_eq!(ps.advance(), Token::End);
}

#[test]
fn whitespace_updates_line_bookkeeping() {
    let mut ps = ParseState::new(b"[1,\n 2,\r\n3]");
    while ps.advance() != Token::End {}
    assert!(ps.ecode.is_none());
    assert_eq!(ps.line, 3);
    // line 3 starts after the \r\n at offset 9
    assert_eq!(ps.lineoff, 9);
}

#[test]
fn error_diagnostic_carries_line_and_col() {
    let mut ps = ParseState::new(b"[1,\n2,\nx]");
    while ps.advance() != Token::End {}
    let err = ps.error().unwrap();
    assert_eq!(err.code, ErrorCode::BadValue);
    assert_eq!((err.start, err.end), (7, 7));
    assert_eq!((err.line, err.col), (3, 1));
    assert_eq!(err.snapshot, "E@7!B:B_V:[");
}

#[test]
fn sticky_error_blocks_and_preserves_state() {
    let mut ps = ParseState::new(b"\"a\",3");
    assert_eq!(ps.advance(), Token::String);
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::PossiblyTruncatedDecimal));
    let frozen = ps.clone();
    for _ in 0..3 {
        assert_eq!(ps.advance(), Token::End);
    }
    assert_eq!(ps, frozen);
}

#[test]
fn clear_error_resumes_after_the_bad_span() {
    let mut ps = ParseState::new(b"\"a\",3,t");
    assert_eq!(ps.advance(), Token::String);
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::Truncated));
    ps.clear_error();
    // resumes from vlim, which sits at the end of the bad span
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
    assert_eq!(ps.pos, Position::ArrBeforeValue);
}

#[test]
fn accept_truncated_decimal_applies_the_pending_transition() {
    let mut ps = ParseState::new(b"[1,25");
    assert_eq!(ps.advance(), Token::ArrayBegin);
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::PossiblyTruncatedDecimal));
    assert_eq!(ps.value(), b"25");
    assert!(ps.accept_truncated_decimal());
    assert!(ps.ecode.is_none());
    assert_eq!(ps.tok, Token::Decimal);
    assert_eq!(ps.pos, Position::ArrAfterValue);
    assert_eq!(ps.vcount, 2);
    // only applies to the truncated-decimal condition
    assert!(!ps.accept_truncated_decimal());
}

#[test]
fn queued_buffer_swaps_in_mid_advance() {
    let second = b"2]";
    let mut ps = ParseState::new(b"[1,");
    ps.set_next(second);
    assert_eq!(ps.advance(), Token::ArrayBegin);
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.soff, 3);
    assert_eq!(ps.value_span(), (3, 4));
    assert_eq!(ps.advance(), Token::ArrayEnd);
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
    assert!(ps.stack.is_empty());
}

#[test]
fn empty_queued_buffer_means_end_of_input() {
    let mut ps = ParseState::new(b"1 ");
    ps.set_next(b"");
    assert_eq!(ps.advance(), Token::Decimal);
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
    // repeated end-reads are idempotent
    let frozen = ps.clone();
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps, frozen);
}

#[test]
fn dangling_key_errors_only_at_explicit_end() {
    let mut ps = ParseState::new(b"{\"a\"");
    assert_eq!(ps.advance(), Token::ObjectBegin);
    // end of buffer alone: the value may still arrive
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
    assert_eq!(ps.pos, Position::ObjAfterKey);

    ps.set_next(b"");
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::KeyWithoutValue));
}

#[test]
fn dangling_key_resolved_by_continuation() {
    let second = b":1}";
    let mut ps = ParseState::new(b"{\"a\"");
    ps.set_next(second);
    assert_eq!(ps.advance(), Token::ObjectBegin);
    assert_eq!(ps.advance(), Token::Decimal);
    assert!(ps.ecode.is_none());
    assert_eq!(ps.value_span(), (5, 6));
    assert_eq!(ps.advance(), Token::ObjectEnd);
}

#[test]
fn key_pending_after_colon_errors_at_explicit_end() {
    let mut ps = ParseState::new(b"{\"a\":");
    ps.set_next(b"");
    assert_eq!(ps.advance(), Token::ObjectBegin);
    assert_eq!(ps.advance(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::KeyWithoutValue));
    assert_eq!(token_string(&ps), "k3@1:E@5!K:B_V:{");
}

#[test]
fn advance_checked_raises_on_fatal_codes() {
    let mut ps = ParseState::new(b"[1,]");
    assert_eq!(ps.advance_checked().unwrap(), Token::ArrayBegin);
    assert_eq!(ps.advance_checked().unwrap(), Token::Decimal);
    let err = ps.advance_checked().unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedToken);
    assert_eq!((err.start, err.end), (3, 4));
}

#[test]
fn advance_checked_passes_truncations_through() {
    let mut ps = ParseState::new(b"[12");
    assert_eq!(ps.advance_checked().unwrap(), Token::ArrayBegin);
    assert_eq!(ps.advance_checked().unwrap(), Token::End);
    assert_eq!(ps.ecode, Some(ErrorCode::PossiblyTruncatedDecimal));
}

#[test]
fn advance_with_invokes_the_hook_once_per_new_error() {
    let mut ps = ParseState::new(b"x");
    let mut seen = std::vec::Vec::new();
    ps.advance_with(|s| seen.push(s.ecode));
    ps.advance_with(|s| seen.push(s.ecode));
    assert_eq!(seen, [Some(ErrorCode::BadValue)]);
}

#[test]
fn stray_close_at_top_level_is_accepted() {
    // the top level scans like an array body, so a lone `]` closes nothing
    // and lands after a value
    let mut ps = ParseState::new(b"]");
    assert_eq!(ps.advance(), Token::ArrayEnd);
    assert_eq!(ps.pos, Position::ArrAfterValue);
    assert_eq!(ps.advance(), Token::End);
    assert!(ps.ecode.is_none());
}

#[test]
fn deep_nesting_grows_the_stack() {
    let mut src = std::vec::Vec::new();
    for _ in 0..512 {
        src.push(b'[');
    }
    for _ in 0..512 {
        src.push(b']');
    }
    let mut ps = ParseState::new(&src);
    let mut max_depth = 0;
    while ps.advance() != Token::End {
        max_depth = max_depth.max(ps.stack.len());
    }
    assert!(ps.ecode.is_none());
    assert_eq!(max_depth, 512);
    assert!(ps.stack.is_empty());
}
