#![allow(unused)]

use saber_parity::{
    Bomb, CutDirection, Hand, LevelData, Note, Obstacle, SwingDescriptor, SwingSequence,
};

pub const BPM: f64 = 120.0;

pub fn right(beat: f64, column: i32, row: i32, direction: CutDirection) -> Note {
    Note {
        beat,
        column,
        row,
        direction,
        hand: Hand::Right,
    }
}

pub fn left(beat: f64, column: i32, row: i32, direction: CutDirection) -> Note {
    Note {
        hand: Hand::Left,
        ..right(beat, column, row, direction)
    }
}

pub fn wall(beat: f64, column: i32, width: i32) -> Obstacle {
    Obstacle {
        beat,
        column,
        width,
        row: 0,
        height: 5,
        duration: 1.0,
    }
}

pub fn level(notes: Vec<Note>, bombs: Vec<Bomb>, obstacles: Vec<Obstacle>) -> LevelData {
    LevelData {
        bpm: BPM,
        notes,
        bombs,
        obstacles,
    }
}

/// Swings that cut notes, skipping synthetic ones.
pub fn real_swings(swings: &SwingSequence) -> Vec<&SwingDescriptor> {
    swings.iter().filter(|swing| !swing.is_synthetic()).collect()
}
