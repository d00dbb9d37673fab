use crate::{
    model::{
        note::{Bomb, CutDirection, Note, Obstacle},
        swing::{Parity, ResetKind, SwingDescriptor},
    },
    orientation::Orientation,
    parity::{ParityContext, ParityDecision, ParityPolicy},
    util::time::swing_ebpm,
};

use super::{dots::dot_checks, lateral::PlayerLateralOffset};

/// Splits the notes of one hand into swings.
pub(crate) struct Segmentation<'a, P> {
    pub bpm: f64,
    pub orientation: Orientation,
    pub slider_precision: f64,
    pub undodge_seconds: f64,
    pub policy: &'a P,
}

impl<P: ParityPolicy> Segmentation<'_, P> {
    /// All slices must be sorted by beat and `notes` must belong to the
    /// hand of `self.orientation`.
    pub fn segment(
        &self,
        notes: &[Note],
        bombs: &[Bomb],
        obstacles: &[Obstacle],
    ) -> Vec<SwingDescriptor> {
        let mut groups = group_notes(notes, self.slider_precision, self.orientation).into_iter();

        let Some(first) = groups.next().and_then(|group| self.first_swing(group)) else {
            return Vec::new();
        };

        let mut swings = Vec::with_capacity(groups.len() + 1);
        swings.push(first);

        let mut lateral = PlayerLateralOffset::default();

        for group in groups {
            let prev = &swings[swings.len() - 1];

            if let Some(swing) = self.next_swing(prev, group, bombs, obstacles, &mut lateral) {
                swings.push(swing);
            }
        }

        swings
    }

    fn first_swing(&self, group: Vec<Note>) -> Option<SwingDescriptor> {
        let parity = match group.first() {
            Some(note) if note.direction.is_backhand_natural() => Parity::Backhand,
            _ => Parity::Forehand,
        };

        SwingDescriptor::draft(group, parity, self.orientation)
    }

    fn next_swing(
        &self,
        prev: &SwingDescriptor,
        group: Vec<Note>,
        bombs: &[Bomb],
        obstacles: &[Obstacle],
        lateral: &mut PlayerLateralOffset,
    ) -> Option<SwingDescriptor> {
        let mut swing = SwingDescriptor::draft(group, Parity::Forehand, self.orientation)?;
        let first = *swing.first_note()?;

        dot_checks(&mut swing, prev, self.orientation);
        swing.is_inverted = is_inverted(prev, &swing);

        let prev_beat = anchor_beat(prev);
        let last_beat = anchor_beat(&swing);

        lateral.observe(between(obstacles, prev_beat, last_beat, |obstacle| obstacle.beat));
        lateral.decay(self.bpm, last_beat, self.undodge_seconds);

        let ctx = ParityContext {
            last_swing: prev,
            next_note: &first,
            bombs: between(bombs, prev_beat, last_beat, |bomb| bomb.beat),
            lateral_offset: lateral.offset(),
            hand: self.orientation.hand(),
        };

        let decision = self.policy.parity_check(&ctx).unwrap_or_else(|err| {
            log::warn!("parity check failed at beat {}, alternating instead: {err}", first.beat);

            ParityDecision::new(prev.parity.flip())
        });

        if decision.parity != swing.parity {
            swing.set_parity(decision.parity, self.orientation);
            dot_checks(&mut swing, prev, self.orientation);
        }

        if swing.parity == prev.parity {
            swing.is_reset = true;
            swing.reset_kind = match decision.reset_kind {
                ResetKind::None => ResetKind::Normal,
                kind => kind,
            };

            log::debug!(
                "{:?} reset at beat {} ({:?})",
                swing.reset_kind,
                swing.start_beat,
                swing.parity
            );
        }

        let ebpm = swing_ebpm(self.bpm, last_beat - prev_beat);
        swing.ebpm = if swing.is_reset { ebpm * 2.0 } else { ebpm };

        Some(swing)
    }
}

/// Beat of the last note cut by `swing`.
fn anchor_beat(swing: &SwingDescriptor) -> f64 {
    swing.last_note().map_or(swing.start_beat, |note| note.beat)
}

/// Group adjacent notes that are cut within the same swing.
pub(crate) fn group_notes(
    notes: &[Note],
    slider_precision: f64,
    orientation: Orientation,
) -> Vec<Vec<Note>> {
    notes
        .chunk_by(|a, b| same_swing(a, b, slider_precision, orientation))
        .inspect(|group| {
            if group.len() > 1 {
                log::trace!("{} notes cut together at beat {}", group.len(), group[0].beat);
            }
        })
        .map(<[Note]>::to_vec)
        .collect()
}

fn same_swing(a: &Note, b: &Note, slider_precision: f64, orientation: Orientation) -> bool {
    const MAX_ANGLE_DIFF: f64 = 45.0;

    if (b.beat - a.beat).abs() > slider_precision {
        return false;
    }

    a.is_dot()
        || b.is_dot()
        || a.direction == b.direction
        || (orientation.forehand(a.direction) - orientation.forehand(b.direction)).abs()
            <= MAX_ANGLE_DIFF
}

/// Whether any note of `swing` lies where a note of `prev` points away from.
pub(crate) fn is_inverted(prev: &SwingDescriptor, swing: &SwingDescriptor) -> bool {
    prev.notes
        .iter()
        .any(|prior| swing.notes.iter().any(|next| inverts(prior, next)))
}

const fn inverts(prior: &Note, next: &Note) -> bool {
    let (col, row) = (prior.column, prior.row);

    match prior.direction {
        CutDirection::Up => next.column > col,
        CutDirection::Down => next.column < col,
        CutDirection::Left => next.column < col,
        CutDirection::Right => next.row > row,
        CutDirection::UpLeft => next.column < col && next.row > row,
        CutDirection::UpRight => next.column > col && next.row > row,
        CutDirection::DownLeft => next.column < col && next.row < row,
        CutDirection::DownRight => next.column > col && next.row < row,
        CutDirection::Dot => false,
    }
}

/// Items strictly between the beats `after` and `before`.
///
/// `items` must be sorted by beat.
fn between<T>(items: &[T], after: f64, before: f64, beat: impl Fn(&T) -> f64) -> &[T] {
    let start = items.partition_point(|item| beat(item) <= after);
    let end = items.partition_point(|item| beat(item) < before);

    &items[start..end.max(start)]
}
