use crate::orientation::Orientation;

use super::note::Note;

/// Orientation of the saber during a swing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Palm facing the swing direction; a neutral forehand is a downward cut.
    #[default]
    Forehand,
    Backhand,
}

impl Parity {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forehand => Self::Backhand,
            Self::Backhand => Self::Forehand,
        }
    }
}

/// Why a swing breaks the forehand/backhand alternation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResetKind {
    #[default]
    None,
    /// Geometry forced the reset, e.g. a triangle.
    Normal,
    /// A bomb blocks the natural follow-up swing.
    Bomb,
}

/// Pose of the hand at one end of a swing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositioningData {
    /// Signed angle from neutral in degrees.
    pub angle: f64,
    pub column: i32,
    pub row: i32,
}

impl PositioningData {
    pub const fn new(angle: f64, column: i32, row: i32) -> Self {
        Self { angle, column, row }
    }

    pub(crate) fn at_note(angle: f64, note: &Note) -> Self {
        Self::new(angle, note.column, note.row)
    }

    pub(crate) fn distance_sq(&self, column: i32, row: i32) -> i32 {
        let dx = self.column - column;
        let dy = self.row - row;

        dx * dx + dy * dy
    }
}

/// A single inferred swing, also called a cut.
#[derive(Clone, Debug, PartialEq)]
pub struct SwingDescriptor {
    pub parity: Parity,
    pub start_beat: f64,
    pub end_beat: f64,
    /// Effective BPM the swing is played at.
    pub ebpm: f64,
    pub start: PositioningData,
    pub end: PositioningData,
    /// Notes cut by this swing in beat order. Empty for synthetic swings.
    pub notes: Vec<Note>,
    pub is_reset: bool,
    pub reset_kind: ResetKind,
    pub is_inverted: bool,
}

impl SwingDescriptor {
    /// Beats a swing lingers after cutting its last note.
    pub const END_PADDING: f64 = 0.1;

    /// Swing over `notes` with angles looked up for `parity`.
    ///
    /// Returns `None` if `notes` is empty.
    pub(crate) fn draft(
        notes: Vec<Note>,
        parity: Parity,
        orientation: Orientation,
    ) -> Option<Self> {
        let (first, last) = (*notes.first()?, *notes.last()?);

        Some(Self {
            parity,
            start_beat: first.beat,
            end_beat: last.beat + Self::END_PADDING,
            ebpm: 0.0,
            start: PositioningData::at_note(orientation.angle(first.direction, parity), &first),
            end: PositioningData::at_note(orientation.angle(last.direction, parity), &last),
            notes,
            is_reset: false,
            reset_kind: ResetKind::None,
            is_inverted: false,
        })
    }

    /// Switch to `parity` and look the endpoint angles up again.
    pub(crate) fn set_parity(&mut self, parity: Parity, orientation: Orientation) {
        self.parity = parity;

        if let Some(first) = self.notes.first() {
            self.start.angle = orientation.angle(first.direction, parity);
        }

        if let Some(last) = self.notes.last() {
            self.end.angle = orientation.angle(last.direction, parity);
        }
    }

    /// Whether the swing was inserted to avoid a reset rather than cutting notes.
    pub fn is_synthetic(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn first_note(&self) -> Option<&Note> {
        self.notes.first()
    }

    pub fn last_note(&self) -> Option<&Note> {
        self.notes.last()
    }

    pub fn duration_beats(&self) -> f64 {
        self.end_beat - self.start_beat
    }

    /// Whether every note of the swing is a dot.
    pub(crate) fn is_all_dots(&self) -> bool {
        !self.notes.is_empty() && self.notes.iter().all(Note::is_dot)
    }

    /// A single dot note on its own.
    pub(crate) fn is_single_dot(&self) -> bool {
        self.notes.len() == 1 && self.notes[0].is_dot()
    }

    /// Two or more notes that are all dots.
    pub(crate) fn is_dot_stack(&self) -> bool {
        self.notes.len() > 1 && self.is_all_dots()
    }
}
