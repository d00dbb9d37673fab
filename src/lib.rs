//! Swing inference for saber rhythm games.
//!
//! Given the notes, bombs, and walls of a level, this crate infers how each
//! saber moves through it: which notes are cut by the same swing, whether a
//! swing is played forehanded or backhanded, where the hand has to reset,
//! and how fast every swing is.
//!
//! ### Usage
//!
//! ```
//! use saber_parity::{Hand, LevelData, Note, ResetKind, SwingAnalysis};
//!
//! let mut level = LevelData::new(150.0);
//!
//! // Down, up, down, down. The last two downward cuts force a reset.
//! for (beat, direction) in [(0.0, 1), (1.0, 0), (2.0, 1), (3.0, 1)] {
//!     level.notes.push(Note::new(beat, 2, 1, direction, Hand::Right)?);
//! }
//!
//! let swings = SwingAnalysis::new().calculate(&level)?;
//! let summary = swings.summary();
//!
//! assert_eq!(summary.n_resets(), 1);
//! assert!(swings.iter().any(|swing| swing.reset_kind == ResetKind::Normal));
//!
//! // A synthetic swing is inserted in front of the reset.
//! assert_eq!(summary.n_synthetic, 1);
//! # Ok::<_, saber_parity::SwingError>(())
//! ```
//!
//! ### Parity policies
//!
//! The forehand/backhand decision at every swing boundary is made by a
//! [`ParityPolicy`]. [`ResetParityPolicy`] is used by default, a custom
//! policy can be specified through [`SwingAnalysis::policy`].
//!
//! ### Logging
//!
//! Decisions are reported through the [`log`] facade. No logger is
//! installed by this crate.

#![deny(rustdoc::broken_intra_doc_links, missing_debug_implementations)]
#![warn(clippy::missing_const_for_fn, clippy::doc_markdown)]

#[doc(inline)]
pub use self::{
    analysis::SwingAnalysis,
    error::SwingError,
    model::{
        level::LevelData,
        note::{Bomb, CutDirection, Hand, Note, Obstacle},
        swing::{Parity, PositioningData, ResetKind, SwingDescriptor},
    },
    orientation::Orientation,
    parity::{AlternatingParity, ParityContext, ParityDecision, ParityPolicy, ResetParityPolicy},
    swing::{EbpmStats, HandSwings, PlayerLateralOffset, SwingSequence, SwingSummary},
    util::time::{beats_to_seconds, seconds_to_beats},
};

mod analysis;
mod error;

/// Notes, swings, and level contents.
pub mod model;

/// Cut direction angles.
pub mod orientation;

/// Forehand and backhand decisions.
pub mod parity;

/// Swing sequences and their post-processing.
pub mod swing;

mod util;
