use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::SwingError;

/// Number of grid columns, counted from the left.
pub const GRID_COLUMNS: i32 = 4;

/// Number of grid rows, counted from the bottom.
pub const GRID_ROWS: i32 = 3;

/// The saber a note belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Map a beatmap colour index onto a hand.
    ///
    /// `0` is the left (red) saber, `1` the right (blue) one.
    pub const fn from_colour(colour: u8) -> Option<Self> {
        match colour {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Direction a note has to be cut in.
///
/// The discriminants match the cut direction codes of the beatmap format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CutDirection {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    UpLeft = 4,
    UpRight = 5,
    DownLeft = 6,
    DownRight = 7,
    /// Directionless note, has to be resolved through its context.
    Dot = 8,
}

impl CutDirection {
    /// All directions in code order.
    pub const ALL: [Self; 9] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::Dot,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_dot(self) -> bool {
        matches!(self, Self::Dot)
    }

    /// The geometrically opposing direction.
    ///
    /// Dots have no natural opposite.
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Self::Up => Some(Self::Down),
            Self::Down => Some(Self::Up),
            Self::Left => Some(Self::Right),
            Self::Right => Some(Self::Left),
            Self::UpLeft => Some(Self::DownRight),
            Self::DownRight => Some(Self::UpLeft),
            Self::UpRight => Some(Self::DownLeft),
            Self::DownLeft => Some(Self::UpRight),
            Self::Dot => None,
        }
    }

    /// Directions a reset is naturally played forehanded in.
    pub const fn is_forehand_natural(self) -> bool {
        matches!(
            self,
            Self::Down | Self::Left | Self::Right | Self::DownLeft | Self::DownRight
        )
    }

    /// Directions a reset is naturally played backhanded in.
    pub const fn is_backhand_natural(self) -> bool {
        matches!(self, Self::Up | Self::UpLeft | Self::UpRight)
    }
}

impl TryFrom<u8> for CutDirection {
    type Error = SwingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(SwingError::InvalidCutDirection(code))
    }
}

impl Display for CutDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
            Self::Dot => "dot",
        };

        f.write_str(name)
    }
}

/// A colour note that has to be cut by one saber.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pub beat: f64,
    pub column: i32,
    pub row: i32,
    pub direction: CutDirection,
    pub hand: Hand,
}

impl Note {
    /// Create a note from raw beatmap values, validating the grid position.
    pub fn new(
        beat: f64,
        column: i32,
        row: i32,
        direction: u8,
        hand: Hand,
    ) -> Result<Self, SwingError> {
        let direction =
            CutDirection::try_from(direction).map_err(|_| SwingError::InvalidNoteData {
                beat,
                reason: format!("cut direction {direction} is not in 0..=8"),
            })?;

        let note = Self {
            beat,
            column,
            row,
            direction,
            hand,
        };

        note.validate()?;

        Ok(note)
    }

    /// Check that the note lies on the grid at a finite beat.
    pub fn validate(&self) -> Result<(), SwingError> {
        validate_position(self.beat, self.column, self.row)
    }

    pub const fn is_dot(&self) -> bool {
        self.direction.is_dot()
    }

    pub const fn same_position(&self, column: i32, row: i32) -> bool {
        self.column == column && self.row == row
    }
}

/// A bomb the saber must not touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bomb {
    pub beat: f64,
    pub column: i32,
    pub row: i32,
}

impl Bomb {
    pub const fn new(beat: f64, column: i32, row: i32) -> Self {
        Self { beat, column, row }
    }

    pub fn validate(&self) -> Result<(), SwingError> {
        validate_position(self.beat, self.column, self.row)
    }
}

/// A wall the player has to dodge.
///
/// Walls are only used to guess where the player stands, never for collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub beat: f64,
    pub column: i32,
    pub width: i32,
    pub row: i32,
    pub height: i32,
    pub duration: f64,
}

impl Obstacle {
    /// Lateral player offset that dodging this wall implies.
    ///
    /// Walls in the center-left lane (or full-width walls starting at the
    /// left edge) push the player right, center-right walls push left.
    pub const fn dodge_offset(&self) -> Option<i32> {
        match self.column {
            1 => Some(1),
            0 if self.width > 1 => Some(1),
            2 => Some(-1),
            _ => None,
        }
    }
}

fn validate_position(beat: f64, column: i32, row: i32) -> Result<(), SwingError> {
    let reason = if !beat.is_finite() {
        format!("beat {beat} is not finite")
    } else if !(0..GRID_COLUMNS).contains(&column) {
        format!("column {column} is not in 0..{GRID_COLUMNS}")
    } else if !(0..GRID_ROWS).contains(&row) {
        format!("row {row} is not in 0..{GRID_ROWS}")
    } else {
        return Ok(());
    };

    Err(SwingError::InvalidNoteData { beat, reason })
}
