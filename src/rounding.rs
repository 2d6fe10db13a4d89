/// Controls how a lossy conversion snaps an exact [`crate::Rational`] value to an
/// integer.
///
/// Every conversion in this crate that can lose precision (rounding seconds to a
/// frame boundary, rendering a frame count, dividing a [`crate::Timestamp`] by a
/// scalar, ...) takes one of these explicitly rather than picking a mode for the
/// caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round to the nearest integer, ties away from zero (`0.5 -> 1`, `-0.5 -> -1`).
    Closest,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Do not round: toward zero when an integer is unavoidable, or "keep the exact
    /// value" in contexts that accept a non-integral result. Also known as `trunc`.
    ///
    /// Operations whose result type demands an integer (frame counts, Premiere
    /// ticks, feet-and-frames, either slot of `divrem`/`rem`) reject this mode with
    /// an `InvalidArgument` error instead of silently truncating.
    Off,
    /// Round away from zero.
    Up,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::Closest
    }
}
