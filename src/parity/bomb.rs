use crate::{
    error::SwingError,
    model::{
        note::{Bomb, CutDirection, GRID_ROWS, Note},
        swing::{Parity, SwingDescriptor},
    },
    util::float_ext::FloatExt,
};

use super::ParityContext;

/// Whether any bomb between two swings blocks the natural follow-up swing.
pub(super) fn bomb_reset(ctx: &ParityContext<'_>) -> Result<bool, SwingError> {
    if ctx.bombs.is_empty() {
        return Ok(false);
    }

    for bomb in ctx.bombs {
        bomb.validate()?;
    }

    let last = ctx.last_swing;

    let Some(note) = terminal_note(last) else {
        return Ok(false);
    };

    let last_direction = ctx
        .orientation()
        .direction_for_angle(last.end.angle, last.parity)?;

    let column = note.column + lane_offset(note, ctx.bombs).unwrap_or(ctx.lateral_offset);

    let reset = ctx
        .bombs
        .iter()
        .filter(|bomb| !is_central(bomb))
        .any(|bomb| blocks_return(last_direction, last.parity, column, note.row, bomb));

    Ok(reset)
}

/// The note the last swing ended on.
///
/// Within a vertical stack cut on the same beat as the end note, the note
/// off the edge rows is preferred, edge notes make bombs right next to the
/// stack look like obstacles.
fn terminal_note(swing: &SwingDescriptor) -> Option<&Note> {
    let end = swing
        .notes
        .iter()
        .rev()
        .find(|note| note.same_position(swing.end.column, swing.end.row))
        .or_else(|| swing.notes.last())?;

    let inner = swing.notes.iter().find(|note| {
        note.column == end.column
            && FloatExt::eq(note.beat, end.beat)
            && note.row != 0
            && note.row != GRID_ROWS - 1
    });

    inner.or(Some(end))
}

// Too central to get in the way of any swing.
const fn is_central(bomb: &Bomb) -> bool {
    (bomb.column == 1 || bomb.column == 2) && bomb.row == 1
}

/// Inward shift when the whole outer lane of `note` is covered in bombs.
fn lane_offset(note: &Note, bombs: &[Bomb]) -> Option<i32> {
    let inward = match note.column {
        0 => 1,
        3 => -1,
        _ => return None,
    };

    let lane_covered = (0..GRID_ROWS)
        .all(|row| bombs.iter().any(|bomb| bomb.column == note.column && bomb.row == row));

    lane_covered.then_some(inward)
}

/// Whether `bomb` lies on the path the hand travels back through after
/// cutting in `direction` at `(column, row)`.
const fn blocks_return(
    direction: CutDirection,
    parity: Parity,
    column: i32,
    row: i32,
    bomb: &Bomb,
) -> bool {
    let (x, y) = (bomb.column, bomb.row);

    let level = match parity {
        Parity::Forehand => y == row || y == row - 1,
        Parity::Backhand => y == row,
    };

    match direction {
        // hand comes back up
        CutDirection::Down | CutDirection::DownLeft | CutDirection::DownRight => {
            x == column && ((y >= row && y != 0) || y > row)
        }
        // hand comes back down
        CutDirection::Up | CutDirection::UpLeft | CutDirection::UpRight => {
            x == column && ((y <= row && y != GRID_ROWS - 1) || y < row)
        }
        CutDirection::Left => level && column < 3 && x >= column,
        CutDirection::Right => level && column > 0 && x <= column,
        CutDirection::Dot => false,
    }
}
