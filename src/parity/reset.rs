use crate::{
    error::SwingError,
    model::{
        note::{CutDirection, Note},
        swing::{Parity, ResetKind},
    },
};

use super::{ParityContext, ParityDecision, ParityPolicy, bomb::bomb_reset};

/// Default [`ParityPolicy`].
///
/// Alternates forehand and backhand unless a bomb blocks the follow-up
/// swing or the wrist would have to rotate by more than 90 degrees, in
/// which case the hand resets and repeats its previous parity.
#[derive(Copy, Clone, Debug, Default)]
pub struct ResetParityPolicy;

impl ResetParityPolicy {
    /// Largest rotation between two swings that is still played without a reset.
    pub const MAX_ROTATION: f64 = 90.0;

    /// Notes that are cut downwards no matter the previous swing.
    fn forced_forehand(note: &Note) -> bool {
        if note.row != 0 {
            return false;
        }

        match note.direction {
            CutDirection::Dot => true,
            CutDirection::Left | CutDirection::Right => note.column == 0 || note.column == 3,
            _ => false,
        }
    }
}

impl ParityPolicy for ResetParityPolicy {
    fn parity_check(&self, ctx: &ParityContext<'_>) -> Result<ParityDecision, SwingError> {
        // AFN: angle from neutral, i.e. a forehand down or backhand up cut.
        let orientation = ctx.orientation();
        let last = ctx.last_swing;
        let last_parity = ctx.last_parity();

        if Self::forced_forehand(ctx.next_note) {
            return Ok(ParityDecision::new(Parity::Forehand));
        }

        if bomb_reset(ctx)? {
            return Ok(ParityDecision::reset(last_parity, ResetKind::Bomb));
        }

        let current_afn = last.start.angle;

        // Dots are read as the direction the last swing ended on.
        let direction = if ctx.next_note.is_dot() {
            orientation.direction_for_angle(last.end.angle, last_parity)?
        } else {
            ctx.next_note.direction
        };

        let next_afn = orientation.angle(direction, last_parity.flip());

        // Rotating further would require a triangle.
        if (current_afn - next_afn).abs() > Self::MAX_ROTATION {
            return Ok(ParityDecision::reset(last_parity, ResetKind::Normal));
        }

        Ok(ParityDecision::new(last_parity.flip()))
    }
}
