use crate::model::{note::Hand, swing::PositioningData};

/// Signed angle in degrees between straight up and the vector `(dx, dy)`.
///
/// Clockwise rotations are negative. A zero vector has an angle of zero and
/// a vector pointing straight down yields `180.0`.
pub fn signed_angle_from_up(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let unsigned = dx.atan2(dy).to_degrees().abs();

    if dx > 0.0 { -unsigned } else { unsigned }
}

/// Angle of the line going from `from` to `to`, mirrored for the left hand.
pub fn angle_between(from: &PositioningData, to: &PositioningData, hand: Hand) -> f64 {
    let dx = f64::from(to.column - from.column);
    let dy = f64::from(to.row - from.row);
    let angle = signed_angle_from_up(dx, dy);

    match hand {
        Hand::Right => angle,
        Hand::Left if angle != 0.0 => -angle,
        Hand::Left => angle,
    }
}
