use crate::model::swing::{Parity, ResetKind, SwingDescriptor};

/// Aggregated metrics over a [`SwingSequence`].
///
/// [`SwingSequence`]: super::SwingSequence
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwingSummary {
    /// Amount of swings including synthetic ones.
    pub n_swings: usize,
    /// Amount of swings inserted in front of resets.
    pub n_synthetic: usize,
    pub n_forehand: usize,
    pub n_backhand: usize,
    pub n_normal_resets: usize,
    pub n_bomb_resets: usize,
    pub n_inverted: usize,
    /// Effective BPM spread over the swings that have one.
    pub ebpm: Option<EbpmStats>,
}

/// Minimum, maximum, and mean effective BPM.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EbpmStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SwingSummary {
    pub const fn n_resets(&self) -> usize {
        self.n_normal_resets + self.n_bomb_resets
    }

    /// Swings that actually cut notes.
    pub const fn n_real(&self) -> usize {
        self.n_swings - self.n_synthetic
    }

    pub(crate) fn new(swings: &[SwingDescriptor]) -> Self {
        let mut summary = Self {
            n_swings: swings.len(),
            ..Self::default()
        };

        let mut ebpm_sum = 0.0;
        let mut ebpm_count = 0_u32;

        for swing in swings {
            match swing.parity {
                Parity::Forehand => summary.n_forehand += 1,
                Parity::Backhand => summary.n_backhand += 1,
            }

            if swing.is_synthetic() {
                summary.n_synthetic += 1;

                continue;
            }

            match swing.reset_kind {
                ResetKind::None => {}
                ResetKind::Normal => summary.n_normal_resets += 1,
                ResetKind::Bomb => summary.n_bomb_resets += 1,
            }

            if swing.is_inverted {
                summary.n_inverted += 1;
            }

            if swing.ebpm <= 0.0 {
                continue;
            }

            ebpm_sum += swing.ebpm;
            ebpm_count += 1;

            summary.ebpm = Some(match summary.ebpm {
                Some(stats) => EbpmStats {
                    min: stats.min.min(swing.ebpm),
                    max: stats.max.max(swing.ebpm),
                    mean: 0.0,
                },
                None => EbpmStats {
                    min: swing.ebpm,
                    max: swing.ebpm,
                    mean: 0.0,
                },
            });
        }

        if let Some(ref mut stats) = summary.ebpm {
            stats.mean = ebpm_sum / f64::from(ebpm_count);
        }

        summary
    }
}
