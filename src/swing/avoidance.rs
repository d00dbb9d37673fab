use crate::{
    model::{
        note::CutDirection,
        swing::{Parity, PositioningData, ResetKind, SwingDescriptor},
    },
    orientation::Orientation,
    util::{float_ext::FloatExt, time::seconds_to_beats},
};

/// Timing of synthetic swings.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Avoidance {
    pub bpm: f64,
    pub orientation: Orientation,
    /// Seconds between the end of the swing before a reset and the synthetic swing.
    pub gap_seconds: f64,
    /// Length of a synthetic swing in beats.
    pub duration: f64,
}

impl Avoidance {
    /// Insert a synthetic swing in front of every reset so that the hand
    /// moves back into position before repeating its parity.
    pub fn apply(&self, swings: Vec<SwingDescriptor>) -> Vec<SwingDescriptor> {
        let resets = swings.iter().filter(|swing| swing.is_reset).count();
        let mut result: Vec<SwingDescriptor> = Vec::with_capacity(swings.len() + resets);

        for swing in swings {
            if swing.is_reset {
                if let Some(prev) = result.last() {
                    let synthetic = self.synthetic_swing(prev, &swing);

                    log::trace!(
                        "inserting {:?} swing at beat {} ahead of reset",
                        synthetic.parity,
                        synthetic.start_beat
                    );

                    result.push(synthetic);
                }
            }

            result.push(swing);
        }

        result
    }

    fn synthetic_swing(
        &self,
        prev: &SwingDescriptor,
        reset: &SwingDescriptor,
    ) -> SwingDescriptor {
        let parity = reset.parity.flip();

        let after_gap = prev.end_beat + seconds_to_beats(self.bpm, self.gap_seconds);

        // Squeezed between the last cut note and the reset when the gap is too short.
        let start_beat = if after_gap < reset.start_beat {
            after_gap
        } else {
            let last_cut = prev.last_note().map_or(prev.start_beat, |note| note.beat);

            last_cut
                .lerp(reset.start_beat, 0.5)
                .min(reset.start_beat)
                .max(prev.start_beat)
        };

        let end_beat = (start_beat + self.duration).min(reset.start_beat.max(start_beat));

        let position = match prev.last_note() {
            Some(note) => {
                let angle = match note.direction.opposite() {
                    Some(opposite) => self.orientation.angle(opposite, parity),
                    None => match parity {
                        Parity::Forehand => self.orientation.forehand(CutDirection::Down),
                        Parity::Backhand => self.orientation.backhand(CutDirection::Up),
                    },
                };

                PositioningData::at_note(angle, note)
            }
            None => prev.end,
        };

        SwingDescriptor {
            parity,
            start_beat,
            end_beat,
            ebpm: reset.ebpm,
            start: position,
            end: position,
            notes: Vec::new(),
            is_reset: false,
            reset_kind: ResetKind::None,
            is_inverted: false,
        }
    }
}
