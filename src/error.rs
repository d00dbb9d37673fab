/// Errors that can occur while inferring swings.
#[derive(Debug, thiserror::Error)]
pub enum SwingError {
    #[error("invalid note data at beat {beat}: {reason}")]
    InvalidNoteData { beat: f64, reason: String },
    #[error("cut direction code {0} is not in 0..=8")]
    InvalidCutDirection(u8),
    #[error("no cut direction maps to an angle of {angle} degrees")]
    MissingOrientationMapping { angle: f64 },
    #[error("BPM must be finite and positive, got {0}")]
    InvalidBpm(f64),
}
