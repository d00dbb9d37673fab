use crate::{
    error::SwingError,
    model::{
        level::LevelData,
        note::{Bomb, Hand, Note, Obstacle},
    },
    orientation::Orientation,
    parity::{ParityPolicy, ResetParityPolicy},
    swing::{fix_dot_orientation, Avoidance, HandSwings, Segmentation, SwingSequence},
};

/// Swing inference for the notes of one or both hands.
///
/// # Example
///
/// ```
/// use saber_parity::{Hand, LevelData, Note, Parity, SwingAnalysis};
///
/// let mut level = LevelData::new(120.0);
/// level.notes.push(Note::new(0.0, 1, 0, 1, Hand::Right)?);
/// level.notes.push(Note::new(1.0, 1, 0, 0, Hand::Right)?);
///
/// let swings = SwingAnalysis::new().hand(Hand::Right).calculate(&level)?;
///
/// assert_eq!(swings.len(), 2);
/// assert_eq!(swings[0].parity, Parity::Forehand);
/// assert_eq!(swings[1].parity, Parity::Backhand);
/// # Ok::<_, saber_parity::SwingError>(())
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct SwingAnalysis<P = ResetParityPolicy> {
    hand: Hand,
    slider_precision: f64,
    undodge_seconds: f64,
    avoidance_gap_seconds: f64,
    avoidance_duration: f64,
    policy: P,
}

impl SwingAnalysis {
    pub const DEFAULT_SLIDER_PRECISION: f64 = 1.0 / 6.0;
    pub const DEFAULT_UNDODGE_SECONDS: f64 = 0.35;
    pub const DEFAULT_AVOIDANCE_GAP_SECONDS: f64 = 0.1;
    pub const DEFAULT_AVOIDANCE_DURATION: f64 = 0.2;

    /// Analysis of the right hand with the default [`ResetParityPolicy`].
    pub const fn new() -> Self {
        Self {
            hand: Hand::Right,
            slider_precision: Self::DEFAULT_SLIDER_PRECISION,
            undodge_seconds: Self::DEFAULT_UNDODGE_SECONDS,
            avoidance_gap_seconds: Self::DEFAULT_AVOIDANCE_GAP_SECONDS,
            avoidance_duration: Self::DEFAULT_AVOIDANCE_DURATION,
            policy: ResetParityPolicy,
        }
    }
}

impl Default for SwingAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ParityPolicy> SwingAnalysis<P> {
    /// Specify the hand whose notes are analyzed.
    ///
    /// Only relevant for [`SwingAnalysis::calculate`] and
    /// [`SwingAnalysis::calculate_notes`].
    pub fn hand(mut self, hand: Hand) -> Self {
        self.hand = hand;

        self
    }

    /// Maximum distance in beats between two notes cut by the same swing.
    pub fn slider_precision(mut self, beats: f64) -> Self {
        self.slider_precision = beats;

        self
    }

    /// Seconds after which the player steps back to the center after
    /// dodging a wall.
    pub fn undodge_seconds(mut self, seconds: f64) -> Self {
        self.undodge_seconds = seconds;

        self
    }

    /// Seconds between the swing before a reset and the synthetic swing
    /// inserted in front of it.
    pub fn avoidance_gap_seconds(mut self, seconds: f64) -> Self {
        self.avoidance_gap_seconds = seconds;

        self
    }

    /// Length of synthetic swings in beats.
    pub fn avoidance_duration(mut self, beats: f64) -> Self {
        self.avoidance_duration = beats;

        self
    }

    /// Use a different [`ParityPolicy`].
    pub fn policy<Q: ParityPolicy>(self, policy: Q) -> SwingAnalysis<Q> {
        SwingAnalysis {
            hand: self.hand,
            slider_precision: self.slider_precision,
            undodge_seconds: self.undodge_seconds,
            avoidance_gap_seconds: self.avoidance_gap_seconds,
            avoidance_duration: self.avoidance_duration,
            policy,
        }
    }

    /// Infer the swings of the configured hand.
    pub fn calculate(&self, level: &LevelData) -> Result<SwingSequence, SwingError> {
        self.run(
            self.hand,
            level.bpm,
            &level.notes,
            &level.bombs,
            &level.obstacles,
        )
    }

    /// Infer the swings of both hands independently.
    pub fn calculate_both(&self, level: &LevelData) -> Result<HandSwings, SwingError> {
        let left = self.run(Hand::Left, level.bpm, &level.notes, &level.bombs, &level.obstacles)?;
        let right = self.run(Hand::Right, level.bpm, &level.notes, &level.bombs, &level.obstacles)?;

        Ok(HandSwings { left, right })
    }

    /// Infer the swings of the configured hand from loose collections.
    ///
    /// Notes of the other hand are ignored and none of the slices have to
    /// be sorted.
    pub fn calculate_notes(
        &self,
        bpm: f64,
        notes: &[Note],
        bombs: &[Bomb],
        obstacles: &[Obstacle],
    ) -> Result<SwingSequence, SwingError> {
        self.run(self.hand, bpm, notes, bombs, obstacles)
    }

    fn run(
        &self,
        hand: Hand,
        bpm: f64,
        notes: &[Note],
        bombs: &[Bomb],
        obstacles: &[Obstacle],
    ) -> Result<SwingSequence, SwingError> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(SwingError::InvalidBpm(bpm));
        }

        let mut notes: Vec<Note> = notes.iter().filter(|note| note.hand == hand).copied().collect();

        for note in notes.iter() {
            note.validate()?;
        }

        notes.sort_by(|a, b| a.beat.total_cmp(&b.beat));

        let mut bombs = bombs.to_vec();
        bombs.sort_by(|a, b| a.beat.total_cmp(&b.beat));

        let mut obstacles = obstacles.to_vec();
        obstacles.sort_by(|a, b| a.beat.total_cmp(&b.beat));

        log::debug!("analyzing {} notes of the {hand:?} hand at {bpm} BPM", notes.len());

        let orientation = Orientation::new(hand);

        let segmentation = Segmentation {
            bpm,
            orientation,
            slider_precision: self.slider_precision,
            undodge_seconds: self.undodge_seconds,
            policy: &self.policy,
        };

        let mut swings = segmentation.segment(&notes, &bombs, &obstacles);
        fix_dot_orientation(&mut swings, orientation);

        let avoidance = Avoidance {
            bpm,
            orientation,
            gap_seconds: self.avoidance_gap_seconds,
            duration: self.avoidance_duration,
        };

        let swings = avoidance.apply(swings);

        log::debug!("inferred {} swings for the {hand:?} hand", swings.len());

        Ok(SwingSequence::new(swings, bpm, hand))
    }
}
