//! The driving state machine: consumes bytes (or already-decoded code
//! points) and dispatches [`Actor`] callbacks.

use crate::actor::Actor;
use crate::csi::{self, CsiParam, Intermediates, Params};
use crate::enums::{Action, State};
use crate::{transitions, utf8};

/// Printable characters are batched into a buffer and flushed as a single
/// [`Actor::print`] call rather than one call per character. 64 is the
/// minimum useful size; this is doubled for throughput on typical shell
/// output (ls listings, source dumps) without growing unreasonably.
const PRINT_BUFFER_SIZE: usize = 128;

pub struct Parser {
    state: State,
    intermediates: Intermediates,
    params: Params,
    /// Single flag for "some parameter or intermediate past the fixed
    /// capacity was discarded", shared by the params and intermediates
    /// accumulators and reported verbatim to the actor on dispatch.
    ignore_flagged: bool,
    print_buffer: [char; PRINT_BUFFER_SIZE],
    print_len: usize,
    utf8_parser: utf8::Utf8Parser,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::default(),
            intermediates: Intermediates::default(),
            params: Params::default(),
            ignore_flagged: false,
            // `[char; N]: Default` only exists for small N in std; build
            // the buffer with a repeat expression instead.
            print_buffer: ['\0'; PRINT_BUFFER_SIZE],
            print_len: 0,
            utf8_parser: utf8::Utf8Parser::default(),
        }
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The parser's current position in the state machine. Exposed for
    /// diagnostics and tests; embedding applications should not need to
    /// branch on it.
    pub fn state(&self) -> State {
        self.state
    }

    /// Feeds raw bytes through the parser, driving `actor` for each
    /// completed event. Safe to call repeatedly with arbitrary chunk
    /// boundaries — including mid-UTF-8 and mid-escape-sequence splits —
    /// since all parsing state lives on `self` between calls.
    pub fn feed_bytes<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            self.process_byte(byte, actor);
        }
        self.flush_print(actor);
    }

    /// Feeds already-decoded code points through the parser. Each code
    /// point is treated the way a fully-assembled UTF-8 sequence would be:
    /// values in the C0/C1/ASCII range can still drive state transitions
    /// (so e.g. feeding `'\u{1b}'` followed by `'['` still opens a CSI
    /// sequence), while anything above `0xFF` can only ever be printed or
    /// passed through an open OSC string.
    pub fn feed_codepoints<A: Actor>(&mut self, codepoints: &[char], actor: &mut A) {
        for &c in codepoints {
            self.process_codepoint(c, actor);
        }
        self.flush_print(actor);
    }

    fn process_byte<A: Actor>(&mut self, byte: u8, actor: &mut A) {
        if self.state == State::Utf8Sequence {
            self.advance_utf8(actor, byte);
            return;
        }

        // Fast path: consecutive printable ASCII in Ground bypasses the
        // transition table entirely and is appended straight to the print
        // batch, since `ground()` maps the whole range to `(Ground, Print)`.
        if self.state == State::Ground && (0x20..=0x7f).contains(&byte) {
            self.emit_print(byte as char, actor);
            return;
        }

        self.flush_print(actor);
        let (next_state, action) = transitions::transit(self.state, byte);
        self.run_transition(next_state, action, byte, actor);
    }

    fn process_codepoint<A: Actor>(&mut self, c: char, actor: &mut A) {
        if (c as u32) <= 0xff {
            self.process_byte(c as u8, actor);
            return;
        }

        // No C0/C1 control or ASCII final byte is above 0xFF, so the only
        // states that can meaningfully receive one are Ground (print it)
        // and an open OSC string (forward its UTF-8 encoding byte by byte).
        self.flush_print(actor);
        match self.state {
            State::Ground => self.emit_print(c, actor),
            State::OscString => self.osc_put_char(c, actor),
            _ => {
                log::debug!("dropped out-of-range codepoint {c:?} in state {:?}", self.state);
                actor.error();
            },
        }
    }

    fn run_transition<A: Actor>(
        &mut self,
        next_state: State,
        action: Action,
        byte: u8,
        actor: &mut A,
    ) {
        if self.state == next_state {
            self.perform(action, byte, actor);
            return;
        }

        if next_state != State::Utf8Sequence {
            self.perform(transitions::exit_action(self.state), 0, actor);
        }

        self.perform(action, byte, actor);
        self.perform(transitions::entry_action(next_state), byte, actor);

        self.utf8_parser.set_state(self.state);
        self.state = next_state;
    }

    fn perform<A: Actor>(&mut self, action: Action, byte: u8, actor: &mut A) {
        use Action::*;

        match action {
            Print => self.emit_print(byte as char, actor),
            Execute => actor.execute(byte),
            Put => actor.put(byte),
            CsiDispatch => self.csi_dispatch(actor, byte),
            EscDispatch => self.esc_dispatch(actor, byte),
            Param => self.handle_param_byte(byte),
            Clear => self.clear(),
            Collect => self.intermediates.collect(byte, &mut self.ignore_flagged),
            Hook => self.hook(actor, byte),
            Unhook => actor.unhook(),
            OscStart => actor.osc_start(),
            OscPut => actor.osc_put(byte),
            OscEnd => actor.osc_end(),
            Utf8 => self.advance_utf8(actor, byte),
            Error => {
                log::error!("no transition for ({:?}, {byte:#04x})", self.state);
                actor.error();
            },
            None | Ignore => {},
        }
    }

    /// Appends a code point to the print batch, flushing first if full.
    fn emit_print<A: Actor>(&mut self, c: char, actor: &mut A) {
        if self.print_len == PRINT_BUFFER_SIZE {
            self.flush_print(actor);
        }
        self.print_buffer[self.print_len] = c;
        self.print_len += 1;
    }

    fn flush_print<A: Actor>(&mut self, actor: &mut A) {
        if self.print_len == 0 {
            return;
        }
        actor.print(&self.print_buffer[..self.print_len]);
        self.print_len = 0;
        self.intermediates.clear();
        self.params.clear();
        self.ignore_flagged = false;
    }

    fn osc_put_char<A: Actor>(&mut self, c: char, actor: &mut A) {
        let mut tmp = [0u8; 4];
        for &byte in c.encode_utf8(&mut tmp).as_bytes() {
            actor.osc_put(byte);
        }
    }

    // https://github.com/wezterm/wezterm/blob/main/vtparse/src/lib.rs#L669
    fn advance_utf8<A: Actor>(&mut self, actor: &mut A, byte: u8) {
        let decoder = self.utf8_parser.advance(byte);

        let Some(c) = decoder.get() else {
            return;
        };

        let src_state = self.utf8_parser.state();

        // C1 controls are sometimes encoded as UTF-8 rather than emitted
        // raw. If the decoded value is in byte range and would itself
        // cause a state transition, run that transition instead of
        // treating it as ordinary text.
        if c as u32 <= 0xff {
            let byte = c as u8;
            let (next_state, action) = transitions::transit(src_state, byte);

            if action == Action::Execute
                || (next_state != src_state && next_state != State::Utf8Sequence)
            {
                self.flush_print(actor);
                self.perform(transitions::exit_action(src_state), 0, actor);
                self.perform(action, byte, actor);
                self.perform(transitions::entry_action(next_state), 0, actor);

                self.utf8_parser.set_state(src_state);
                self.state = next_state;
                return;
            }
        }

        match src_state {
            State::Ground => self.emit_print(c, actor),
            State::OscString => self.osc_put_char(c, actor),
            _ => {
                log::debug!("dropped decoded utf8 codepoint {c:?} in state {src_state:?}");
                actor.error();
            },
        }

        self.state = src_state;
    }

    /// Promotes early intermediates to parameters.
    ///
    /// Handles sequences such as DECSET that use `?` before other numeric
    /// parameters. `?` is technically in the intermediate byte range and
    /// shouldn't appear in the parameter position per ECMA-48, but every
    /// terminal accepts it there in practice.
    fn promote_intermediates_to_params(&mut self) {
        if !self.intermediates.get().is_empty() {
            for &p in self.intermediates.get() {
                if self.params.is_full() {
                    csi::flag_ignore(&mut self.ignore_flagged);
                    break;
                }
                self.params.push(CsiParam::P(p), &mut self.ignore_flagged);
            }
            self.intermediates.reset_index();
        }
    }

    /// Accumulates a CSI/DCS parameter byte: a digit, a `;` separator, or a
    /// sub-parameter/prefix byte such as `:` or `?`.
    ///
    /// `;` never becomes its own entry — per ECMA-48, it only delimits
    /// parameters, each of which defaults to `0` whether or not any digit
    /// follows (`CSI 1 ; m` reports `[1, 0]`, not `[1]`). Every other
    /// non-digit byte (`:`, a leading `?`) is instead recorded as its own
    /// [`CsiParam::P`] entry, preserving ECMA-48 sub-parameter structure for
    /// consumers that want it.
    fn handle_param_byte(&mut self, byte: u8) {
        if self.params.is_full() {
            csi::flag_ignore(&mut self.ignore_flagged);
            return;
        }

        self.promote_intermediates_to_params();

        if byte.is_ascii_digit() {
            let digit = (byte - b'0') as i64;
            match self.params.current().take() {
                Some(CsiParam::Integer(value)) => {
                    let updated = value.saturating_mul(10).saturating_add(digit);
                    *self.params.current() = Some(CsiParam::Integer(updated));
                },
                _ => {
                    *self.params.current() = Some(CsiParam::Integer(digit));
                },
            }
        } else if byte == b';' {
            let finished = self.params.current().take().unwrap_or(CsiParam::Integer(0));
            self.params.push(finished, &mut self.ignore_flagged);
            *self.params.current() = Some(CsiParam::Integer(0));
        } else {
            self.params.finish(&mut self.ignore_flagged);
            self.params.push(CsiParam::P(byte), &mut self.ignore_flagged);
        }
    }

    fn hook<A: Actor>(&mut self, actor: &mut A, byte: u8) {
        self.params.finish(&mut self.ignore_flagged);
        actor.hook(
            byte,
            self.params.get_integers(),
            self.intermediates.get(),
            self.ignore_flagged,
        );
    }

    fn csi_dispatch<A: Actor>(&mut self, actor: &mut A, byte: u8) {
        self.params.finish(&mut self.ignore_flagged);
        self.promote_intermediates_to_params();
        actor.csi_dispatch(
            self.params.get_integers(),
            self.params.get(),
            self.intermediates.get(),
            self.ignore_flagged,
            byte,
        );
    }

    fn esc_dispatch<A: Actor>(&mut self, actor: &mut A, byte: u8) {
        self.params.finish(&mut self.ignore_flagged);
        actor.esc_dispatch(
            self.params.get_integers(),
            self.intermediates.get(),
            self.ignore_flagged,
            byte,
        );
    }

    fn clear(&mut self) {
        self.intermediates.clear();
        self.params.clear();
        self.ignore_flagged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    pub enum ActorEvent {
        Print(Vec<char>),
        Execute(u8),
        Hook {
            byte: u8,
            params: Vec<i64>,
            intermediates: Vec<u8>,
            ignore_flagged: bool,
        },
        Put(u8),
        Unhook,
        OscStart,
        OscPut(u8),
        OscEnd,
        EscDispatch {
            params: Vec<i64>,
            intermediates: Vec<u8>,
            ignore_flagged: bool,
            byte: u8,
        },
        CsiDispatch {
            params: Vec<i64>,
            raw_params: Vec<CsiParam>,
            intermediates: Vec<u8>,
            ignore_flagged: bool,
            byte: u8,
        },
        Error,
    }

    #[derive(Default)]
    struct CollectingActor {
        events: Vec<ActorEvent>,
    }

    impl Actor for CollectingActor {
        fn print(&mut self, text: &[char]) {
            self.events.push(ActorEvent::Print(text.to_vec()));
        }

        fn execute(&mut self, byte: u8) {
            self.events.push(ActorEvent::Execute(byte));
        }

        fn hook(&mut self, byte: u8, params: &[i64], intermediates: &[u8], ignore_flagged: bool) {
            self.events.push(ActorEvent::Hook {
                byte,
                params: params.to_vec(),
                intermediates: intermediates.to_vec(),
                ignore_flagged,
            });
        }

        fn put(&mut self, byte: u8) {
            self.events.push(ActorEvent::Put(byte));
        }

        fn unhook(&mut self) {
            self.events.push(ActorEvent::Unhook);
        }

        fn osc_start(&mut self) {
            self.events.push(ActorEvent::OscStart);
        }

        fn osc_put(&mut self, byte: u8) {
            self.events.push(ActorEvent::OscPut(byte));
        }

        fn osc_end(&mut self) {
            self.events.push(ActorEvent::OscEnd);
        }

        fn csi_dispatch(
            &mut self,
            params: &[i64],
            raw_params: &[CsiParam],
            intermediates: &[u8],
            ignore_flagged: bool,
            byte: u8,
        ) {
            self.events.push(ActorEvent::CsiDispatch {
                params: params.to_vec(),
                raw_params: raw_params.to_vec(),
                intermediates: intermediates.to_vec(),
                ignore_flagged,
                byte,
            });
        }

        fn esc_dispatch(
            &mut self,
            params: &[i64],
            intermediates: &[u8],
            ignore_flagged: bool,
            byte: u8,
        ) {
            self.events.push(ActorEvent::EscDispatch {
                params: params.to_vec(),
                intermediates: intermediates.to_vec(),
                ignore_flagged,
                byte,
            });
        }

        fn error(&mut self) {
            self.events.push(ActorEvent::Error);
        }
    }

    fn parse(bytes: &[u8]) -> Vec<ActorEvent> {
        let mut parser = Parser::new();
        let mut actor = CollectingActor::default();
        parser.feed_bytes(bytes, &mut actor);
        actor.events
    }

    fn osc_text(events: &[ActorEvent]) -> Vec<u8> {
        events
            .iter()
            .filter_map(|e| match e {
                ActorEvent::OscPut(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_printable_ascii_with_batching() {
        assert_eq!(
            parse(b"test\x07\x1b[32mmy\x1b[0mparser"),
            vec![
                ActorEvent::Print(vec!['t', 'e', 's', 't']),
                ActorEvent::Execute(0x07),
                ActorEvent::CsiDispatch {
                    params: vec![32],
                    raw_params: vec![CsiParam::Integer(32)],
                    intermediates: vec![],
                    ignore_flagged: false,
                    byte: b'm',
                },
                ActorEvent::Print(vec!['m', 'y']),
                ActorEvent::CsiDispatch {
                    params: vec![0],
                    raw_params: vec![CsiParam::Integer(0)],
                    intermediates: vec![],
                    ignore_flagged: false,
                    byte: b'm',
                },
                ActorEvent::Print(vec!['p', 'a', 'r', 's', 'e', 'r']),
            ]
        );
    }

    #[test]
    fn print_flushes_at_end_of_chunk() {
        assert_eq!(parse(b"yo"), vec![ActorEvent::Print(vec!['y', 'o'])]);
    }

    #[test]
    fn print_batch_flushes_on_overflow() {
        let long = "a".repeat(PRINT_BUFFER_SIZE + 10);
        let events = parse(long.as_bytes());
        assert_eq!(events.len(), 2);
        match &events[0] {
            ActorEvent::Print(chars) => assert_eq!(chars.len(), PRINT_BUFFER_SIZE),
            other => panic!("expected Print, got {other:?}"),
        }
        match &events[1] {
            ActorEvent::Print(chars) => assert_eq!(chars.len(), 10),
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn print_utf8() {
        assert_eq!(
            parse("\u{af}".as_bytes()),
            vec![ActorEvent::Print(vec!['\u{af}'])]
        );
    }

    #[test]
    fn chunk_boundary_independence_mid_escape() {
        let mut parser = Parser::new();
        let mut actor = CollectingActor::default();
        parser.feed_bytes(b"\x1b[3", &mut actor);
        parser.feed_bytes(b"2m", &mut actor);
        assert_eq!(
            actor.events,
            vec![ActorEvent::CsiDispatch {
                params: vec![32],
                raw_params: vec![CsiParam::Integer(32)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'm',
            }]
        );
    }

    #[test]
    fn chunk_boundary_independence_mid_utf8() {
        let bytes = "\u{1f600}".as_bytes();
        let mut parser = Parser::new();
        let mut actor = CollectingActor::default();
        for &b in bytes {
            parser.feed_bytes(&[b], &mut actor);
        }
        assert_eq!(actor.events, vec![ActorEvent::Print(vec!['\u{1f600}'])]);
    }

    #[test]
    fn osc_with_c1_st_is_byte_granular() {
        let events = parse(b"\x1b]0;there\x9c");
        assert_eq!(events[0], ActorEvent::OscStart);
        assert_eq!(osc_text(&events), b"0;there");
        assert_eq!(*events.last().unwrap(), ActorEvent::OscEnd);
    }

    #[test]
    fn osc_with_bel_terminator() {
        let events = parse(b"\x1b]0;hello\x07");
        assert_eq!(events[0], ActorEvent::OscStart);
        assert_eq!(osc_text(&events), b"0;hello");
        assert_eq!(*events.last().unwrap(), ActorEvent::OscEnd);
    }

    #[test]
    fn osc_with_no_params() {
        let events = parse(b"\x1b]\x07");
        assert_eq!(events, vec![ActorEvent::OscStart, ActorEvent::OscEnd]);
    }

    #[test]
    fn osc_with_esc_sequence_terminator() {
        // `ESC \` is the long form of ST. The ESC breaks out of OscString
        // into Escape, so the `\` is dispatched as its own escape sequence
        // rather than being consumed as part of the OSC terminator.
        let events = parse(b"\x1b]woot\x1b\\");
        assert_eq!(events[0], ActorEvent::OscStart);
        assert_eq!(osc_text(&events[..events.len() - 2]), b"woot");
        assert_eq!(events[events.len() - 2], ActorEvent::OscEnd);
        assert_eq!(
            events[events.len() - 1],
            ActorEvent::EscDispatch {
                params: vec![],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'\\',
            }
        );
    }

    #[test]
    fn osc_utf8_payload_forwarded_byte_for_byte() {
        let events = parse("\x1b]\u{af}\x07".as_bytes());
        assert_eq!(osc_text(&events), "\u{af}".as_bytes());
    }

    #[test]
    fn decset() {
        assert_eq!(
            parse(b"\x1b[?1l"),
            vec![ActorEvent::CsiDispatch {
                params: vec![0, 1],
                raw_params: vec![CsiParam::P(b'?'), CsiParam::Integer(1)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'l',
            }]
        );
    }

    #[test]
    fn fancy_underline_with_colon_subparams() {
        assert_eq!(
            parse(b"\x1b[4:3m"),
            vec![ActorEvent::CsiDispatch {
                params: vec![4, 0, 3],
                raw_params: vec![CsiParam::Integer(4), CsiParam::P(b':'), CsiParam::Integer(3)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'm',
            }]
        );
    }

    #[test]
    fn csi_omitted_param() {
        assert_eq!(
            parse(b"\x1b[;1m"),
            vec![ActorEvent::CsiDispatch {
                params: vec![0, 1],
                raw_params: vec![CsiParam::Integer(0), CsiParam::Integer(1)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'm',
            }]
        );
    }

    #[test]
    fn csi_semicolon_params_report_as_plain_integers() {
        // Regression test: a `;`-separated CSI body must report a plain,
        // zero-filled integer sequence with no literal separator entry
        // interleaved — `ESC[1;31m` is `params=[1, 31]`, not
        // `[Integer(1), P(b';'), Integer(31)]`.
        assert_eq!(
            parse(b"\x1b[1;31m"),
            vec![ActorEvent::CsiDispatch {
                params: vec![1, 31],
                raw_params: vec![CsiParam::Integer(1), CsiParam::Integer(31)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'm',
            }]
        );

        // A trailing omitted parameter still defaults to 0 rather than being
        // dropped.
        assert_eq!(
            parse(b"\x1b[1;m"),
            vec![ActorEvent::CsiDispatch {
                params: vec![1, 0],
                raw_params: vec![CsiParam::Integer(1), CsiParam::Integer(0)],
                intermediates: vec![],
                ignore_flagged: false,
                byte: b'm',
            }]
        );
    }

    #[test]
    fn csi_too_many_params_sets_ignore_flagged() {
        let mut input = "\x1b[0".to_string();
        for n in 1..=300 {
            input.push_str(&format!(";{n}"));
        }
        input.push('p');

        let events = parse(input.as_bytes());
        match &events[0] {
            ActorEvent::CsiDispatch { ignore_flagged, .. } => assert!(*ignore_flagged),
            other => panic!("expected CsiDispatch, got {other:?}"),
        }
    }

    #[test]
    fn csi_intermediates_overflow_sets_ignore_flagged() {
        assert_eq!(
            parse(b"\x1b[1 p"),
            vec![ActorEvent::CsiDispatch {
                params: vec![1],
                raw_params: vec![CsiParam::Integer(1)],
                intermediates: vec![b' '],
                ignore_flagged: false,
                byte: b'p',
            }]
        );

        let events = parse(b"\x1b[1 !#p");
        match &events[0] {
            ActorEvent::CsiDispatch { intermediates, ignore_flagged, .. } => {
                assert_eq!(intermediates, &[b' ', b'!']);
                assert!(*ignore_flagged);
            },
            other => panic!("expected CsiDispatch, got {other:?}"),
        }
    }

    #[test]
    fn utf8_encoded_c1_control_still_executes() {
        assert_eq!(
            parse("\u{8d}".as_bytes()),
            vec![ActorEvent::Execute(0x8d)]
        );
    }

    #[test]
    fn tmux_control_mode_dcs_passthrough() {
        assert_eq!(
            parse(b"\x1bP1000phello\x1b\\"),
            vec![
                ActorEvent::Hook {
                    byte: b'p',
                    params: vec![1000],
                    intermediates: vec![],
                    ignore_flagged: false,
                },
                ActorEvent::Put(b'h'),
                ActorEvent::Put(b'e'),
                ActorEvent::Put(b'l'),
                ActorEvent::Put(b'l'),
                ActorEvent::Put(b'o'),
                ActorEvent::Unhook,
                ActorEvent::EscDispatch {
                    params: vec![],
                    intermediates: vec![],
                    ignore_flagged: false,
                    byte: b'\\',
                },
            ]
        );
    }

    #[test]
    fn sixel_dcs_passthrough() {
        assert_eq!(
            parse(b"\x1bPqhello\x1b\\"),
            vec![
                ActorEvent::Hook {
                    byte: b'q',
                    params: vec![],
                    intermediates: vec![],
                    ignore_flagged: false,
                },
                ActorEvent::Put(b'h'),
                ActorEvent::Put(b'e'),
                ActorEvent::Put(b'l'),
                ActorEvent::Put(b'l'),
                ActorEvent::Put(b'o'),
                ActorEvent::Unhook,
                ActorEvent::EscDispatch {
                    params: vec![],
                    intermediates: vec![],
                    ignore_flagged: false,
                    byte: b'\\',
                },
            ]
        );
    }

    #[test]
    fn omitted_dcs_param() {
        assert_eq!(
            parse(b"\x1bP;1q\x1b\\"),
            vec![
                ActorEvent::Hook {
                    byte: b'q',
                    params: vec![0, 1],
                    intermediates: vec![],
                    ignore_flagged: false,
                },
                ActorEvent::Unhook,
                ActorEvent::EscDispatch {
                    params: vec![],
                    intermediates: vec![],
                    ignore_flagged: false,
                    byte: b'\\',
                },
            ]
        );
    }

    #[test]
    fn feed_codepoints_matches_feed_bytes() {
        let mut byte_parser = Parser::new();
        let mut byte_actor = CollectingActor::default();
        byte_parser.feed_bytes(b"hi\x1b[31mred", &mut byte_actor);

        let mut cp_parser = Parser::new();
        let mut cp_actor = CollectingActor::default();
        let codepoints: Vec<char> = "hi\x1b[31mred".chars().collect();
        cp_parser.feed_codepoints(&codepoints, &mut cp_actor);

        assert_eq!(byte_actor.events, cp_actor.events);
    }
}
