//! Strategies deciding the orientation of the next swing.

use crate::{
    error::SwingError,
    model::{
        note::{Bomb, Hand, Note},
        swing::{Parity, ResetKind, SwingDescriptor},
    },
    orientation::Orientation,
};

pub use self::reset::ResetParityPolicy;

mod bomb;
mod reset;

/// Everything known at a boundary between two swings.
#[derive(Copy, Clone, Debug)]
pub struct ParityContext<'a> {
    /// The swing that was just completed.
    pub last_swing: &'a SwingDescriptor,
    /// First note of the swing being decided.
    pub next_note: &'a Note,
    /// Bombs strictly between the final notes of the last and the next swing.
    pub bombs: &'a [Bomb],
    /// Assumed lateral displacement of the player, one of `-1`, `0`, `1`.
    pub lateral_offset: i32,
    pub hand: Hand,
}

impl ParityContext<'_> {
    pub const fn orientation(&self) -> Orientation {
        Orientation::new(self.hand)
    }

    pub const fn last_parity(&self) -> Parity {
        self.last_swing.parity
    }
}

/// Outcome of a [`ParityPolicy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParityDecision {
    pub parity: Parity,
    /// Reason for a reset if `parity` repeats the last swing's parity.
    pub reset_kind: ResetKind,
}

impl ParityDecision {
    pub const fn new(parity: Parity) -> Self {
        Self {
            parity,
            reset_kind: ResetKind::None,
        }
    }

    pub const fn reset(parity: Parity, reset_kind: ResetKind) -> Self {
        Self { parity, reset_kind }
    }
}

/// Decides the parity of each swing following the first one.
///
/// Errors are local to one swing boundary; the segmentation falls back to
/// [`AlternatingParity`] for that boundary and carries on.
pub trait ParityPolicy {
    fn parity_check(&self, ctx: &ParityContext<'_>) -> Result<ParityDecision, SwingError>;
}

impl<P: ParityPolicy + ?Sized> ParityPolicy for &P {
    fn parity_check(&self, ctx: &ParityContext<'_>) -> Result<ParityDecision, SwingError> {
        (**self).parity_check(ctx)
    }
}

/// [`ParityPolicy`] that flips parity on every swing and never resets.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlternatingParity;

impl ParityPolicy for AlternatingParity {
    fn parity_check(&self, ctx: &ParityContext<'_>) -> Result<ParityDecision, SwingError> {
        Ok(ParityDecision::new(ctx.last_parity().flip()))
    }
}
