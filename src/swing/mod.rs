use std::{ops::Index, slice};

use crate::{
    model::{note::Hand, swing::SwingDescriptor},
    util::time::beats_to_seconds,
};

pub use self::{
    lateral::PlayerLateralOffset,
    summary::{EbpmStats, SwingSummary},
};

pub(crate) use self::{
    avoidance::Avoidance,
    dots::fix_dot_orientation,
    segmentation::Segmentation,
};

mod avoidance;
mod dots;
mod lateral;
mod segmentation;
mod summary;

/// The inferred swings of one hand, ordered by start beat.
#[derive(Clone, Debug, PartialEq)]
pub struct SwingSequence {
    swings: Vec<SwingDescriptor>,
    bpm: f64,
    hand: Hand,
}

impl SwingSequence {
    pub(crate) const fn new(swings: Vec<SwingDescriptor>, bpm: f64, hand: Hand) -> Self {
        Self { swings, bpm, hand }
    }

    pub const fn hand(&self) -> Hand {
        self.hand
    }

    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    pub fn len(&self) -> usize {
        self.swings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swings.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&SwingDescriptor> {
        self.swings.get(idx)
    }

    pub fn iter(&self) -> slice::Iter<'_, SwingDescriptor> {
        self.swings.iter()
    }

    pub fn swings(&self) -> &[SwingDescriptor] {
        &self.swings
    }

    pub fn into_swings(self) -> Vec<SwingDescriptor> {
        self.swings
    }

    /// Seconds between the end of swing `idx` and the start of the next one.
    ///
    /// This is how long the saber has to travel before its next swing.
    /// Returns `None` for the last swing or an out of bounds index.
    pub fn time_to_next_swing(&self, idx: usize) -> Option<f64> {
        let curr = self.swings.get(idx)?;
        let next = self.swings.get(idx + 1)?;

        Some(beats_to_seconds(self.bpm, next.start_beat - curr.end_beat))
    }

    pub fn summary(&self) -> SwingSummary {
        SwingSummary::new(&self.swings)
    }
}

impl Index<usize> for SwingSequence {
    type Output = SwingDescriptor;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.swings[idx]
    }
}

impl IntoIterator for SwingSequence {
    type Item = SwingDescriptor;
    type IntoIter = std::vec::IntoIter<SwingDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.swings.into_iter()
    }
}

impl<'a> IntoIterator for &'a SwingSequence {
    type Item = &'a SwingDescriptor;
    type IntoIter = slice::Iter<'a, SwingDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.swings.iter()
    }
}

/// Swings of both hands of a level.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSwings {
    pub left: SwingSequence,
    pub right: SwingSequence,
}

impl HandSwings {
    pub const fn get(&self, hand: Hand) -> &SwingSequence {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }
}
