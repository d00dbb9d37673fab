use super::note::{Bomb, Note, Obstacle};

/// Parsed contents of one difficulty, with notes of both hands mixed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelData {
    pub bpm: f64,
    pub notes: Vec<Note>,
    pub bombs: Vec<Bomb>,
    pub obstacles: Vec<Obstacle>,
}

impl LevelData {
    pub const fn new(bpm: f64) -> Self {
        Self {
            bpm,
            notes: Vec::new(),
            bombs: Vec::new(),
            obstacles: Vec::new(),
        }
    }
}
