use crate::{model::note::Obstacle, util::time::beats_to_seconds};

/// Where the player is assumed to stand after dodging walls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerLateralOffset {
    offset: i32,
    last_triggered: f64,
}

impl PlayerLateralOffset {
    /// `1` when the player moved right, `-1` when moved left, `0` otherwise.
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Beat of the last wall that moved the player.
    pub const fn last_triggered(&self) -> f64 {
        self.last_triggered
    }

    /// Move the player out of the way of `obstacles`.
    ///
    /// The last qualifying wall wins.
    pub fn observe(&mut self, obstacles: &[Obstacle]) {
        for obstacle in obstacles {
            if let Some(offset) = obstacle.dodge_offset() {
                if offset != self.offset {
                    log::trace!("dodging wall at beat {}, offset {offset}", obstacle.beat);
                }

                self.offset = offset;
                self.last_triggered = obstacle.beat;
            }
        }
    }

    /// Return to the center once `undodge_seconds` passed since the last dodge.
    pub fn decay(&mut self, bpm: f64, beat: f64, undodge_seconds: f64) {
        if beats_to_seconds(bpm, beat - self.last_triggered) > undodge_seconds {
            if self.offset != 0 {
                log::trace!("back in the center at beat {beat}");
            }

            self.offset = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(beat: f64, column: i32, width: i32) -> Obstacle {
        Obstacle {
            beat,
            column,
            width,
            row: 0,
            height: 5,
            duration: 0.5,
        }
    }

    #[test]
    fn last_wall_wins() {
        let mut lateral = PlayerLateralOffset::default();
        lateral.observe(&[wall(1.0, 1, 1), wall(1.5, 2, 1), wall(1.75, 3, 1)]);

        assert_eq!(lateral.offset(), -1);
        assert_eq!(lateral.last_triggered(), 1.5);
    }

    #[test]
    fn decays_after_a_while() {
        let mut lateral = PlayerLateralOffset::default();
        lateral.observe(&[wall(4.0, 0, 2)]);

        // 120 BPM: half a beat is 0.25s
        lateral.decay(120.0, 4.5, 0.35);
        assert_eq!(lateral.offset(), 1);

        // one beat is 0.5s
        lateral.decay(120.0, 5.0, 0.35);
        assert_eq!(lateral.offset(), 0);
    }
}
