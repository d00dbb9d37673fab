pub trait FloatExt: Sized {
    const EPS: Self;

    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// Linear interpolation, `t` is clamped to `0.0..=1.0`.
    fn lerp(self, target: Self, t: Self) -> Self;
}

impl FloatExt for f64 {
    const EPS: Self = 1e-7;

    fn eq(self, other: Self) -> bool {
        (self - other).abs() < Self::EPS
    }

    fn lerp(self, target: Self, t: Self) -> Self {
        self + (target - self) * t.clamp(0.0, 1.0)
    }
}
