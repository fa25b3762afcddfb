//! Callbacks invoked by the virtual terminal parser.
//!
//! The [`Parser`](crate::parser::Parser) walks a byte stream and translates
//! it into terminal-level events. Those events are handed to an [`Actor`]
//! implementation, which is responsible for whatever the embedding
//! application does with them — screen updates, logging, recording. The
//! trait has one method per event tag rather than a single generic
//! `(tag, payload)` callback: each call site already knows which
//! arguments are relevant, so the payload is curated per method rather than
//! packed into a uniform shape the caller has to unpack.
//!
//! Implementations should be prepared to receive any sequence of calls that
//! is valid per the virtual terminal protocol, and should not perform
//! their own byte-level parsing — that is the whole point of this crate.
use crate::csi::CsiParam;

/// Consumer-facing interface for terminal events emitted by the parser.
///
/// ## Terminology
///
/// An *intermediate* is a byte in the range 0x20-0x2f occurring before the
/// final byte of an escape, CSI, or DCS sequence. No standard sequence uses
/// more than two; `ignore_flagged` is set when a sequence exceeded that (or
/// exceeded the parameter capacity) and reports that some input was
/// discarded rather than silently dropping it.
///
/// `params` in every method is the plain, zero-filled sequence of decimal
/// integers separated by `;` (an omitted parameter surfaces as `0`, its
/// default value). CSI additionally exposes `raw_params`, the same sequence
/// with ECMA-48 colon sub-parameters and any non-digit prefix byte (e.g. the
/// `?` in `CSI ?1 l`) preserved as [`CsiParam::P`] entries interleaved with
/// the integers — consumers that don't care about sub-parameter structure
/// should use `params` and ignore `raw_params`.
pub trait Actor {
    /// Emits a run of printable Unicode code points accumulated since the
    /// last event. The parser batches consecutive printable characters
    /// rather than calling this once per character.
    fn print(&mut self, text: &[char]);

    /// Executes an immediate single-byte control function.
    ///
    /// Covers C0/C1 control characters that are not part of a longer
    /// sequence (e.g. `BEL`, `BS`, `CR`, `CAN`, `SUB`, `IND`, `NEL`, `HTS`).
    fn execute(&mut self, byte: u8);

    /// Signals the start of a Device Control String (DCS), identified by
    /// its final byte, parameters, and any collected intermediates.
    fn hook(
        &mut self,
        byte: u8,
        params: &[i64],
        intermediates: &[u8],
        ignore_flagged: bool,
    );

    /// Passes one payload byte of an active device control string to the
    /// handler chosen in `hook`.
    fn put(&mut self, byte: u8);

    /// Marks the end of the current device control string.
    fn unhook(&mut self);

    /// Signals the start of an Operating System Command (OSC).
    fn osc_start(&mut self);

    /// Passes one payload byte of an active OSC string. Bytes are reported
    /// one at a time rather than buffered, so the parser's accumulators stay
    /// fixed-size regardless of OSC payload length.
    fn osc_put(&mut self, byte: u8);

    /// Marks the end of the current OSC string.
    fn osc_end(&mut self);

    /// Dispatches a Control Sequence Introducer (CSI) escape.
    ///
    /// `params` is the plain, zero-filled integer sequence (e.g. `CSI
    /// 1;31 m` reports `[1, 31]`); `raw_params` is the same sequence with
    /// sub-parameter separators and prefix bytes preserved, see the
    /// trait-level docs.
    fn csi_dispatch(
        &mut self,
        params: &[i64],
        raw_params: &[CsiParam],
        intermediates: &[u8],
        ignore_flagged: bool,
        byte: u8,
    );

    /// Dispatches a standard (non-CSI) escape sequence.
    fn esc_dispatch(
        &mut self,
        params: &[i64],
        intermediates: &[u8],
        ignore_flagged: bool,
        byte: u8,
    );

    /// Reports that the transition table had no entry for the current
    /// `(state, byte)` pair. The table is exhaustive, so well-formed
    /// implementations never observe this; it exists so the dispatcher has
    /// somewhere to route an unrecognized entry rather than panicking.
    fn error(&mut self) {}
}
