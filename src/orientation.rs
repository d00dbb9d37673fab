//! Cut direction to angle tables.
//!
//! Angles are measured from neutral in degrees, neutral being a forehand
//! downward cut (or a backhand upward cut). Rotating the wrist inwards is
//! positive for the right hand; the left hand mirrors every entry except for
//! straight up and down.

use crate::{
    error::SwingError,
    model::{
        note::{CutDirection, Hand},
        swing::Parity,
    },
    util::float_ext::FloatExt,
};

// Indexed by cut direction code: up, down, left, right, up-left, up-right,
// down-left, down-right, dot.
const RIGHT_FOREHAND: [f64; 9] = [-180.0, 0.0, -90.0, 90.0, -135.0, 135.0, -45.0, 45.0, 0.0];
const RIGHT_BACKHAND: [f64; 9] = [0.0, -180.0, 90.0, -90.0, 45.0, -45.0, 135.0, -135.0, 0.0];
const LEFT_FOREHAND: [f64; 9] = [-180.0, 0.0, 90.0, -90.0, 135.0, -135.0, 45.0, -45.0, 0.0];
const LEFT_BACKHAND: [f64; 9] = [0.0, -180.0, -90.0, 90.0, -45.0, 45.0, -135.0, 135.0, 0.0];

/// Orientation tables of one hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Orientation {
    hand: Hand,
}

impl Orientation {
    pub const fn new(hand: Hand) -> Self {
        Self { hand }
    }

    pub const fn hand(self) -> Hand {
        self.hand
    }

    const fn table(self, parity: Parity) -> &'static [f64; 9] {
        match (self.hand, parity) {
            (Hand::Right, Parity::Forehand) => &RIGHT_FOREHAND,
            (Hand::Right, Parity::Backhand) => &RIGHT_BACKHAND,
            (Hand::Left, Parity::Forehand) => &LEFT_FOREHAND,
            (Hand::Left, Parity::Backhand) => &LEFT_BACKHAND,
        }
    }

    pub const fn forehand(self, direction: CutDirection) -> f64 {
        self.angle(direction, Parity::Forehand)
    }

    pub const fn backhand(self, direction: CutDirection) -> f64 {
        self.angle(direction, Parity::Backhand)
    }

    /// Angle from neutral of `direction` when cut with `parity`.
    pub const fn angle(self, direction: CutDirection, parity: Parity) -> f64 {
        self.table(parity)[direction as usize]
    }

    /// Angle of the direction opposing `direction`.
    ///
    /// Dots have no opposite so the returned angle is `None`.
    pub const fn opposite_angle(self, direction: CutDirection, parity: Parity) -> Option<f64> {
        match direction.opposite() {
            Some(opposite) => Some(self.angle(opposite, parity)),
            None => None,
        }
    }

    /// Cut direction whose angle is closest to `angle` under `parity`.
    ///
    /// The angle is snapped to the nearest multiple of 45 degrees and wrapped
    /// into `[-180, 180)`; the first direction in code order with that angle
    /// wins, so dots are never returned.
    pub fn direction_for_angle(
        self,
        angle: f64,
        parity: Parity,
    ) -> Result<CutDirection, SwingError> {
        let wrapped = snap_angle(angle);
        let table = self.table(parity);

        CutDirection::ALL
            .into_iter()
            .find(|&direction| FloatExt::eq(table[direction as usize], wrapped))
            .ok_or(SwingError::MissingOrientationMapping { angle })
    }

    /// Range of angles the hand naturally rests in.
    pub const fn half_plane(self) -> (f64, f64) {
        match self.hand {
            Hand::Right => (-90.0, 0.0),
            Hand::Left => (0.0, 90.0),
        }
    }
}

/// Snap `angle` to the nearest multiple of 45 degrees within `[-180, 180)`.
pub fn snap_angle(angle: f64) -> f64 {
    let snapped = (angle / 45.0).round_ties_even() * 45.0;

    (snapped + 180.0).rem_euclid(360.0) - 180.0
}
