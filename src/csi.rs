//! Parameter and intermediate-byte accumulators shared by CSI, DCS, and ESC
//! sequences, plus the [`CsiParam`] type used to report them.

/// A single parameter in a CSI (or DCS) sequence.
///
/// CSI escapes typically take the form `CSI 3 m`, and can bundle several
/// values together as `CSI 3 ; 4 m` — `;` is purely a separator and never
/// produces an entry of its own, so both end up as a plain run of
/// `CsiParam::Integer`. ECMA-48 also allows colons to subdivide a parameter,
/// as in `CSI 4:3 m` (a curly underline in modern terminals); rather than
/// model that as a nested list, the colon and any non-digit prefix byte
/// (such as `?` in `CSI ?1 l`) are reported as their own `CsiParam::P(byte)`
/// entries interleaved with the integers, mirroring the literal byte stream.
///
/// Reference: wezterm's vtparse, https://github.com/wezterm/wezterm/blob/main/vtparse/src/lib.rs#L381
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CsiParam {
    Integer(i64),
    P(u8),
}

impl Default for CsiParam {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl CsiParam {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

pub(crate) const MAX_PARAMS: usize = 256;
pub(crate) const MAX_INTERMEDIATES: usize = 2;

/// Raises `ignore_flagged`, logging only on the false-to-true transition so a
/// busy sequence that keeps overflowing doesn't log once per byte.
pub(crate) fn flag_ignore(ignore_flagged: &mut bool) {
    if !*ignore_flagged {
        log::debug!("parameter or intermediate capacity exceeded, ignore_flagged set");
    }
    *ignore_flagged = true;
}

/// Accumulates CSI/DCS parameters into a fixed-capacity array.
///
/// Once `MAX_PARAMS` entries have been pushed, further parameters are
/// dropped and `ignore_flagged` is raised on the shared flag passed to
/// `push`/`finish` — the same bit that the intermediate collector raises on
/// overflow, per the single ignore flag the dispatcher reports.
#[derive(Debug)]
pub(crate) struct Params {
    items: [CsiParam; MAX_PARAMS],
    /// Parallel to `items`: the integer value of each entry, or 0 for a
    /// `CsiParam::P` entry. Kept alongside `items` so `get_integers` can
    /// hand back a plain `&[i64]` (for ESC_DISPATCH/HOOK) without allocating.
    integers: [i64; MAX_PARAMS],
    current: Option<CsiParam>,
    idx: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            items: [CsiParam::default(); MAX_PARAMS],
            integers: [0; MAX_PARAMS],
            current: None,
            idx: 0,
        }
    }
}

impl Params {
    pub(crate) fn get(&self) -> &[CsiParam] {
        &self.items[..self.idx]
    }

    pub(crate) fn get_integers(&self) -> &[i64] {
        &self.integers[..self.idx]
    }

    pub(crate) fn is_full(&self) -> bool {
        self.idx >= MAX_PARAMS
    }

    pub(crate) fn push(&mut self, param: CsiParam, ignore_flagged: &mut bool) {
        if self.idx >= MAX_PARAMS {
            flag_ignore(ignore_flagged);
            return;
        }

        self.integers[self.idx] = param.as_integer().unwrap_or(0);
        self.items[self.idx] = param;
        self.idx += 1;
    }

    pub(crate) fn finish(&mut self, ignore_flagged: &mut bool) {
        if let Some(val) = self.current.take() {
            self.push(val, ignore_flagged);
        }
    }

    pub(crate) fn current(&mut self) -> &mut Option<CsiParam> {
        &mut self.current
    }

    pub(crate) fn clear(&mut self) {
        self.current.take();
        self.idx = 0;
        self.items = [CsiParam::default(); MAX_PARAMS];
        self.integers = [0; MAX_PARAMS];
    }
}

/// Accumulates the (small) run of intermediate bytes between a sequence's
/// introducer and its final byte, e.g. the space in `CSI 1 SP p`.
#[derive(Debug, Default)]
pub(crate) struct Intermediates {
    items: [u8; MAX_INTERMEDIATES],
    idx: usize,
}

impl Intermediates {
    pub(crate) fn get(&self) -> &[u8] {
        &self.items[..self.idx]
    }

    pub(crate) fn reset_index(&mut self) {
        self.idx = 0;
    }

    pub(crate) fn collect(&mut self, byte: u8, ignore_flagged: &mut bool) {
        if self.idx < MAX_INTERMEDIATES {
            self.items[self.idx] = byte;
            self.idx += 1;
        } else {
            flag_ignore(ignore_flagged);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.reset_index();
        self.items = Default::default();
    }
}
