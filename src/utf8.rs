//! UTF-8 front-end used while the parser is mid-codepoint.
//!
//! Decoding is delegated to `utf8parse`, which implements RFC 3629 (4-byte
//! max, no legacy 5-/6-byte lead bytes). Invalid or overlong sequences
//! resolve to `U+FFFD` rather than propagating an error, matching the
//! parser's infallible contract.

use crate::enums::State;
use utf8parse::Receiver;

#[derive(Default)]
pub(crate) struct Decoder {
    inner: Option<char>,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Decoder::default()
    }

    pub fn get(self) -> Option<char> {
        self.inner
    }
}

impl Receiver for Decoder {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Tracks the parser state we were in when a multi-byte UTF-8 sequence
/// began, so that once it completes we know whether the resulting
/// codepoint should be printed or routed to `OSC_PUT`.
#[derive(Default)]
pub(crate) struct Utf8Parser {
    state: State,
    inner: utf8parse::Parser,
}

impl Utf8Parser {
    pub(crate) fn state(&self) -> State {
        self.state
    }

    pub(crate) fn set_state(&mut self, new_state: State) {
        self.state = new_state;
    }

    pub(crate) fn advance(&mut self, byte: u8) -> Decoder {
        let mut decoder = Decoder::new();
        self.inner.advance(&mut decoder, byte);
        decoder
    }
}
