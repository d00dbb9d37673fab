/// Convert a beat span into seconds.
pub const fn beats_to_seconds(bpm: f64, beats: f64) -> f64 {
    beats / (bpm / 60.0)
}

/// Convert seconds into a beat span.
pub const fn seconds_to_beats(bpm: f64, seconds: f64) -> f64 {
    seconds * (bpm / 60.0)
}

/// Effective BPM of a swing that takes `beats` from the previous one.
///
/// A swing covers half of a full back-and-forth motion, hence the halving.
/// Zero or negative spans have no meaningful speed and yield `0.0`.
pub const fn swing_ebpm(bpm: f64, beats: f64) -> f64 {
    let ms = beats_to_seconds(bpm, beats) * 1000.0;

    if ms > 0.0 { 60_000.0 / ms / 2.0 } else { 0.0 }
}
