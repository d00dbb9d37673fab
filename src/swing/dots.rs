use std::mem;

use crate::{
    model::{
        note::{CutDirection, Note},
        swing::{Parity, SwingDescriptor},
    },
    orientation::Orientation,
    util::{float_ext::FloatExt, grid::angle_between},
};

/// Resolve the angles of dot notes in `swing` from its own notes and the
/// previous swing.
pub(crate) fn dot_checks(
    swing: &mut SwingDescriptor,
    prev: &SwingDescriptor,
    orientation: Orientation,
) {
    if swing.is_dot_stack() {
        orient_dot_stack(swing, prev, orientation);
    } else if swing.is_single_dot() {
        // Cut against the previous arrow.
        let angle = prev
            .last_note()
            .map(|note| note.direction)
            .and_then(|direction| orientation.opposite_angle(direction, swing.parity));

        if let Some(angle) = angle {
            swing.start.angle = angle;
            swing.end.angle = angle;
        }
    } else {
        // Dots at either end of a mixed swing follow the closest arrow.
        if swing.first_note().is_some_and(Note::is_dot) {
            if let Some(direction) = arrow(swing.notes.iter()) {
                swing.start.angle = orientation.angle(direction, swing.parity);
            }
        }

        if swing.last_note().is_some_and(Note::is_dot) {
            if let Some(direction) = arrow(swing.notes.iter().rev()) {
                swing.end.angle = orientation.angle(direction, swing.parity);
            }
        }
    }
}

fn arrow<'a>(mut notes: impl Iterator<Item = &'a Note>) -> Option<CutDirection> {
    notes
        .find(|note| !note.is_dot())
        .map(|note| note.direction)
}

/// Let a dot stack start at the end closest to the previous swing and cut
/// along the stack's axis.
fn orient_dot_stack(
    swing: &mut SwingDescriptor,
    prev: &SwingDescriptor,
    orientation: Orientation,
) {
    let to_start = prev.end.distance_sq(swing.start.column, swing.start.row);
    let to_end = prev.end.distance_sq(swing.end.column, swing.end.row);

    if to_start > to_end {
        mem::swap(&mut swing.start, &mut swing.end);
    }

    let hand = orientation.hand();

    let angle = match swing.parity {
        Parity::Forehand => angle_between(&swing.end, &swing.start, hand),
        Parity::Backhand => angle_between(&swing.start, &swing.end, hand),
    };

    swing.start.angle = angle;
    swing.end.angle = angle;
}

/// Smooth out the angles of consecutive single dot swings.
///
/// Every run of single dots that follows an arrow swing is interpolated
/// between the angle the hand was left at and the angle of the next arrow
/// swing.
pub(crate) fn fix_dot_orientation(swings: &mut [SwingDescriptor], orientation: Orientation) {
    const MAX_ANGLE: f64 = 90.0;

    let mut i = 1;

    while i < swings.len() {
        let starts_run = swings[i].is_single_dot()
            && swings[i - 1].first_note().is_some_and(|note| !note.is_dot());

        if !starts_run {
            i += 1;

            continue;
        }

        let run = swings[i..]
            .iter()
            .take_while(|swing| swing.is_single_dot())
            .count();

        let pre = swings[i - 1].end.angle;

        let mut post = match swings.get(i + run) {
            Some(next) if !next.is_dot_stack() => next.start.angle,
            // dot stacks orient themselves so there is nothing to aim for
            _ => pre,
        };

        if run > 2 {
            let (min, max) = orientation.half_plane();
            post = post.clamp(min, max);
        }

        let steps = (run + 1) as f64;

        for (k, swing) in swings[i..i + run].iter_mut().enumerate() {
            let angle = pre
                .lerp(post, (k + 1) as f64 / steps)
                .clamp(-MAX_ANGLE, MAX_ANGLE);

            swing.start.angle = angle;
            swing.end.angle = angle;
        }

        log::trace!("smoothed {run} dot swing(s) from {pre} towards {post}");

        i += run;
    }
}
