//! Token and container marker types.

/// A classified token produced by [`advance`](crate::ParseState::advance).
///
/// Discriminants are the ASCII codes the formatter prints: structural tokens
/// keep their own byte, strings are `s`, decimals `d` (a decimal's first
/// byte varies, so it gets a synthesized code). `End` is code zero and means
/// "no token": end of current input, legitimate end of stream, or an error;
/// disambiguate by reading [`ParseState::ecode`](crate::ParseState::ecode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Token {
    /// No token available before the limit.
    End = 0,
    /// A quoted string value (boundaries located, escapes not decoded).
    String = b's',
    /// A decimal literal (delimiter-terminated; grammar not fully validated).
    Decimal = b'd',
    /// The literal `true`.
    True = b't',
    /// The literal `false`.
    False = b'f',
    /// The literal `null`.
    Null = b'n',
    /// `[`
    ArrayBegin = b'[',
    /// `]`
    ArrayEnd = b']',
    /// `{`
    ObjectBegin = b'{',
    /// `}`
    ObjectEnd = b'}',
}

impl Token {
    /// Formatter letter: `End` prints as `E`, everything else as its code.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Token::End => 'E',
            other => other as u8 as char,
        }
    }

    /// Tokens whose byte length is fixed by their kind; the formatter
    /// suppresses an explicit length for these.
    pub(crate) fn fixed_len(self) -> bool {
        matches!(
            self,
            Token::True
                | Token::False
                | Token::Null
                | Token::ArrayBegin
                | Token::ArrayEnd
                | Token::ObjectBegin
                | Token::ObjectEnd
        )
    }
}

/// Marker for one open nesting level on the container stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Container {
    /// An open array.
    Array = b'[',
    /// An open object.
    Object = b'{',
}

impl Container {
    /// The container's opening byte, as printed by the debug formatter.
    #[must_use]
    pub fn letter(self) -> char {
        self as u8 as char
    }
}
