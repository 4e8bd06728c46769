//! Grammar positions and the position transition table.
//!
//! A position combines the enclosing container kind with where the scan sits
//! relative to keys and values. The discriminants keep the low 7 bits clear
//! so a grammar-significant input byte (always ASCII) can be OR-ed in to
//! index the transition table directly: one load per structural byte instead
//! of a branch on (state, symbol).

/// Encoded grammar position.
///
/// The top level is treated as an array body (comma-separated values), so
/// `ArrBeforeFirstValue` doubles as the initial state and `ArrAfterValue` as
/// the resting state after a complete top-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Position {
    /// In an array, before the first value.
    ArrBeforeFirstValue = 0x080,
    /// In an array, before a subsequent value (a comma was consumed).
    ArrBeforeValue = 0x100,
    /// In an array, after a value.
    ArrAfterValue = 0x180,
    /// In an object, before the first key.
    ObjBeforeFirstKey = 0x200,
    /// In an object, before a subsequent key.
    ObjBeforeKey = 0x280,
    /// In an object, after a key, before the colon.
    ObjAfterKey = 0x300,
    /// In an object, after the colon, before the value.
    ObjBeforeValue = 0x380,
    /// In an object, after a value.
    ObjAfterValue = 0x400,
}

impl Position {
    /// Three-letter diagnostic name used by the debug formatter. The object
    /// before/after-value states share the array spellings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::ArrBeforeFirstValue => "BFV",
            Position::ArrBeforeValue | Position::ObjBeforeValue => "B_V",
            Position::ArrAfterValue | Position::ObjAfterValue => "A_V",
            Position::ObjBeforeFirstKey => "BFK",
            Position::ObjBeforeKey => "B_K",
            Position::ObjAfterKey => "A_K",
        }
    }
}

// Highest position value plus the 7-bit byte range.
const MAP_LEN: usize = 0x480;

static POS_MAP: [Option<Position>; MAP_LEN] = build();

const fn map(
    mut t: [Option<Position>; MAP_LEN],
    from: &[Position],
    bytes: &[u8],
    to: Position,
) -> [Option<Position>; MAP_LEN] {
    let mut i = 0;
    while i < from.len() {
        let mut j = 0;
        while j < bytes.len() {
            t[from[i] as usize | bytes[j] as usize] = Some(to);
            j += 1;
        }
        i += 1;
    }
    t
}

const fn build() -> [Option<Position>; MAP_LEN] {
    use Position::{
        ArrAfterValue, ArrBeforeFirstValue, ArrBeforeValue, ObjAfterKey, ObjAfterValue,
        ObjBeforeFirstKey, ObjBeforeKey, ObjBeforeValue,
    };
    // Legal value-start token codes: null, true, false, decimal, string.
    let val = b"ntfds";
    let mut t = [None; MAP_LEN];
    t = map(t, &[ArrBeforeFirstValue, ArrBeforeValue], val, ArrAfterValue);
    t = map(t, &[ArrAfterValue], b",", ArrBeforeValue);
    t = map(
        t,
        &[ArrBeforeFirstValue, ArrBeforeValue, ObjBeforeValue],
        b"[",
        ArrBeforeFirstValue,
    );
    t = map(
        t,
        &[ArrBeforeFirstValue, ArrBeforeValue, ObjBeforeValue],
        b"{",
        ObjBeforeFirstKey,
    );
    t = map(t, &[ObjAfterValue], b",", ObjBeforeKey);
    t = map(t, &[ObjBeforeFirstKey, ObjBeforeKey], b"s", ObjAfterKey);
    t = map(t, &[ObjAfterKey], b":", ObjBeforeValue);
    t = map(t, &[ObjBeforeValue], val, ObjAfterValue);
    // `]` and `}` are resolved through the container stack, not the table:
    // the post-close position depends on what is underneath, not on the
    // pre-close position alone.
    t
}

/// Single-lookup grammar transition for `byte` at `pos`; `None` is illegal.
#[inline]
pub(crate) fn transition(pos: Position, byte: u8) -> Option<Position> {
    POS_MAP[pos as usize | byte as usize]
}
