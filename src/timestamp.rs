use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num::BigInt;

use crate::consts::{big, PREMIERE_TICKS_PER_SECOND};
use crate::errors::{ArithmeticError, ParseError};
use crate::feet_and_frames::{FeetAndFrames, FilmFormat};
use crate::format::{format_runtime, format_timecode};
use crate::framerate::Framerate;
use crate::rational::Rational;
use crate::rounding::RoundingMode;
use crate::source_feet_frames::FeetAndFramesSource;
use crate::source_frames::FramesSource;
use crate::source_ppro_ticks::PremiereTicksSource;
use crate::source_seconds::SecondsSource;

/// Options controlling [`Timestamp::with_seconds`].
#[derive(Clone, Copy, Debug)]
pub struct SecondsOptions {
    /// How to snap the parsed seconds value to a frame boundary. Default
    /// [`RoundingMode::Closest`].
    pub round: RoundingMode,
    /// When true, a `round = RoundingMode::Off` value that does not land on a
    /// frame boundary is kept exactly rather than rejected.
    pub allow_partial_frames: bool,
}

impl Default for SecondsOptions {
    fn default() -> Self {
        SecondsOptions {
            round: RoundingMode::Closest,
            allow_partial_frames: false,
        }
    }
}

/// The core value of this crate: an exact point in time, anchored to a
/// [`Framerate`].
///
/// Unless constructed with [`SecondsOptions::allow_partial_frames`], `seconds
/// * rate.playback()` is always an integer. Equality is structural on both
/// `seconds` and `rate`; use [`Timestamp::compare`]/[`Timestamp::eq`] to
/// compare two timestamps by real seconds alone, ignoring rate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    seconds: Rational,
    rate: Framerate,
}

impl Timestamp {
    /// The exact rational number of real-world seconds since `00:00:00:00`.
    pub fn seconds(&self) -> &Rational {
        &self.seconds
    }

    /// The framerate this timestamp is anchored to.
    pub fn rate(&self) -> &Framerate {
        &self.rate
    }

    fn from_seconds_unchecked(seconds: Rational, rate: Framerate) -> Self {
        Timestamp { seconds, rate }
    }

    fn snap_to_frame(seconds: Rational, rate: &Framerate, round: RoundingMode) -> Rational {
        let frames = (seconds * rate.playback().clone()).round(round);
        Rational::from_integer(frames) / rate.playback().clone()
    }

    /// Builds a timestamp from anything implementing [`FramesSource`] — an
    /// integer frame count or a frame-like string (SMPTE timecode or
    /// feet-and-frames).
    pub fn with_frames<T: FramesSource>(src: T, rate: Framerate) -> Result<Self, ParseError> {
        let frame_count = src.to_frames(&rate)?;
        let seconds = Rational::from_integer(frame_count) / rate.playback().clone();
        Ok(Timestamp::from_seconds_unchecked(seconds, rate))
    }

    /// Builds a timestamp from anything implementing [`SecondsSource`] — a
    /// rational/float seconds value or a runtime string.
    pub fn with_seconds<T: SecondsSource>(
        src: T,
        rate: Framerate,
        opts: SecondsOptions,
    ) -> Result<Self, ParseError> {
        let seconds = src.to_seconds(&rate)?;

        if opts.round == RoundingMode::Off {
            let frame_aligned = (seconds.clone() * rate.playback().clone()).is_integer();
            if !frame_aligned && !opts.allow_partial_frames {
                return Err(ParseError::PartialFrame);
            }
            return Ok(Timestamp::from_seconds_unchecked(seconds, rate));
        }

        let snapped = Timestamp::snap_to_frame(seconds, &rate, opts.round);
        Ok(Timestamp::from_seconds_unchecked(snapped, rate))
    }

    /// Builds a timestamp from a Premiere-ticks count.
    pub fn with_premiere_ticks<T: PremiereTicksSource>(
        src: T,
        rate: Framerate,
    ) -> Result<Self, ParseError> {
        let ticks = src.to_ticks(&rate)?;
        let seconds = Rational::new(ticks, big(PREMIERE_TICKS_PER_SECOND));
        Ok(Timestamp::from_seconds_unchecked(
            Timestamp::snap_to_frame(seconds, &rate, RoundingMode::Closest),
            rate,
        ))
    }

    /// Builds a timestamp from a feet-and-frames value or string.
    pub fn with_feet_and_frames<T: FeetAndFramesSource>(
        src: T,
        format: FilmFormat,
        rate: Framerate,
    ) -> Result<Self, ParseError> {
        let frame_count = src.to_frames(format, &rate)?;
        let seconds = Rational::from_integer(frame_count) / rate.playback().clone();
        Ok(Timestamp::from_seconds_unchecked(seconds, rate))
    }

    /// Integer frame count, rounded per `round` (frame-aligned timestamps
    /// round exactly regardless of `round`).
    pub fn frames(&self, round: RoundingMode) -> Result<BigInt, ArithmeticError> {
        let rational_frames = self.seconds.clone() * self.rate.playback().clone();
        if rational_frames.is_integer() {
            return Ok(rational_frames.round(RoundingMode::Closest));
        }
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed when seconds is not frame-aligned".to_string(),
            ));
        }
        Ok(rational_frames.round(round))
    }

    /// SMPTE timecode string, e.g. `01:00:00:00`.
    pub fn timecode(&self, round: RoundingMode) -> Result<String, ArithmeticError> {
        let frames = self.frames(round)?;
        Ok(format_timecode(&frames, &self.rate))
    }

    /// Runtime string, e.g. `01:00:03.6`.
    pub fn runtime(&self, precision: usize, trim_zeros: bool) -> String {
        format_runtime(&self.seconds, precision, trim_zeros)
    }

    /// Integer Adobe Premiere Pro tick count.
    pub fn premiere_ticks(&self, round: RoundingMode) -> Result<BigInt, ArithmeticError> {
        let ticks = self.seconds.clone() * Rational::from_integer(big(PREMIERE_TICKS_PER_SECOND));
        if ticks.is_integer() {
            return Ok(ticks.round(RoundingMode::Closest));
        }
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed when ticks is not integral".to_string(),
            ));
        }
        Ok(ticks.round(round))
    }

    /// Feet-and-frames value at the given film format.
    pub fn feet_and_frames(
        &self,
        format: FilmFormat,
        round: RoundingMode,
    ) -> Result<FeetAndFrames, ArithmeticError> {
        let frames = self.frames(round)?;
        Ok(FeetAndFrames::from_frames(&frames, format))
    }

    /// Compares two timestamps by real seconds alone, ignoring rate.
    pub fn compare(&self, other: &Timestamp) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }

    pub fn eq_value(&self, other: &Timestamp) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn lt(&self, other: &Timestamp) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn lte(&self, other: &Timestamp) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn gt(&self, other: &Timestamp) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn gte(&self, other: &Timestamp) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// `seconds = self.seconds + rhs.seconds`, at `self.rate`.
    pub fn add(&self, rhs: &Timestamp, round: RoundingMode) -> Result<Timestamp, ArithmeticError> {
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed for add".to_string(),
            ));
        }
        let seconds = self.seconds.clone() + rhs.seconds.clone();
        let snapped = Timestamp::snap_to_frame(seconds, &self.rate, round);
        Ok(Timestamp::from_seconds_unchecked(snapped, self.rate.clone()))
    }

    /// `seconds = self.seconds - rhs.seconds`, at `self.rate`.
    pub fn sub(&self, rhs: &Timestamp, round: RoundingMode) -> Result<Timestamp, ArithmeticError> {
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed for sub".to_string(),
            ));
        }
        let seconds = self.seconds.clone() - rhs.seconds.clone();
        let snapped = Timestamp::snap_to_frame(seconds, &self.rate, round);
        Ok(Timestamp::from_seconds_unchecked(snapped, self.rate.clone()))
    }

    /// Flips the sign of `seconds`.
    pub fn negate(&self) -> Timestamp {
        Timestamp::from_seconds_unchecked(-self.seconds.clone(), self.rate.clone())
    }

    /// Absolute value of `seconds`.
    pub fn abs(&self) -> Timestamp {
        Timestamp::from_seconds_unchecked(self.seconds.abs(), self.rate.clone())
    }

    /// `seconds = self.seconds * scalar`, rounded to a frame boundary.
    pub fn mult(&self, scalar: &Rational, round: RoundingMode) -> Result<Timestamp, ArithmeticError> {
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed for mult".to_string(),
            ));
        }
        let seconds = self.seconds.clone() * scalar.clone();
        let snapped = Timestamp::snap_to_frame(seconds, &self.rate, round);
        Ok(Timestamp::from_seconds_unchecked(snapped, self.rate.clone()))
    }

    /// `seconds = self.seconds / scalar`, rounded to a frame boundary. Default
    /// rounding for division is [`RoundingMode::Floor`], matching integer
    /// division intuition.
    pub fn div(&self, scalar: &Rational, round: RoundingMode) -> Result<Timestamp, ArithmeticError> {
        if scalar.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if round == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed for div".to_string(),
            ));
        }
        let seconds = self.seconds.clone() / scalar.clone();
        let snapped = Timestamp::snap_to_frame(seconds, &self.rate, round);
        Ok(Timestamp::from_seconds_unchecked(snapped, self.rate.clone()))
    }

    /// Divides by `scalar`, returning `(quotient, remainder)` both snapped to
    /// frame boundaries at `self.rate`. Neither `round_frames` nor
    /// `round_remainder` may be [`RoundingMode::Off`].
    pub fn divrem(
        &self,
        scalar: &Rational,
        round_frames: RoundingMode,
        round_remainder: RoundingMode,
    ) -> Result<(Timestamp, Timestamp), ArithmeticError> {
        if round_frames == RoundingMode::Off || round_remainder == RoundingMode::Off {
            return Err(ArithmeticError::InvalidArgument(
                "round = off is not allowed in divrem".to_string(),
            ));
        }
        let quotient = self.div(scalar, round_frames)?;
        let remainder = self.sub(&quotient.mult(scalar, round_remainder)?, round_remainder)?;
        Ok((quotient, remainder))
    }

    /// The remainder half of [`Timestamp::divrem`].
    pub fn rem(
        &self,
        scalar: &Rational,
        round_frames: RoundingMode,
        round_remainder: RoundingMode,
    ) -> Result<Timestamp, ArithmeticError> {
        let (_, remainder) = self.divrem(scalar, round_frames, round_remainder)?;
        Ok(remainder)
    }

    /// Moves this timestamp to `new_rate`, keeping the frame count identical
    /// and recomputing `seconds = frames / new_rate.playback()`.
    pub fn rebase(&self, new_rate: Framerate) -> Result<Timestamp, ArithmeticError> {
        let frames = self.frames(RoundingMode::Closest)?;
        let seconds = Rational::from_integer(frames) / new_rate.playback().clone();
        Ok(Timestamp::from_seconds_unchecked(seconds, new_rate))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tc = self.timecode(RoundingMode::Closest).unwrap_or_default();
        write!(f, "<{} <{}>>", tc, self.rate)
    }
}

// Operator overloads mirror the named, `Result`-returning methods above at
// the default rounding mode (`closest`, except `Div`/`Rem` which default to
// `floor` per `Timestamp::div`), for callers who want the ergonomic
// infix forms and are content with a panic on the rare invalid case (zero
// divisor) rather than threading a `Result` through `+`/`-`/`*`.

impl Add for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Self) -> Self::Output {
        Timestamp::add(&self, &rhs, RoundingMode::Closest).expect("add")
    }
}

impl Sub for Timestamp {
    type Output = Timestamp;
    fn sub(self, rhs: Self) -> Self::Output {
        Timestamp::sub(&self, &rhs, RoundingMode::Closest).expect("sub")
    }
}

impl Neg for Timestamp {
    type Output = Timestamp;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<Rational> for Timestamp {
    type Output = Timestamp;
    fn mul(self, rhs: Rational) -> Self::Output {
        Timestamp::mult(&self, &rhs, RoundingMode::Closest).expect("mult")
    }
}

impl Mul<i64> for Timestamp {
    type Output = Timestamp;
    fn mul(self, rhs: i64) -> Self::Output {
        self * Rational::from_integer(BigInt::from(rhs))
    }
}

impl Div<Rational> for Timestamp {
    type Output = Timestamp;
    fn div(self, rhs: Rational) -> Self::Output {
        Timestamp::div(&self, &rhs, RoundingMode::Floor).expect("div")
    }
}

impl Div<i64> for Timestamp {
    type Output = Timestamp;
    fn div(self, rhs: i64) -> Self::Output {
        self / Rational::from_integer(BigInt::from(rhs))
    }
}

impl Rem<Rational> for Timestamp {
    type Output = Timestamp;
    fn rem(self, rhs: Rational) -> Self::Output {
        Timestamp::rem(&self, &rhs, RoundingMode::Floor, RoundingMode::Closest).expect("rem")
    }
}

impl Rem<i64> for Timestamp {
    type Output = Timestamp;
    fn rem(self, rhs: i64) -> Self::Output {
        self % Rational::from_integer(BigInt::from(rhs))
    }
}


/// Panic-on-error ("raising") convenience variants, for callers who have
/// already validated their inputs and want ergonomic unwrapped results.
pub mod raising {
    use super::*;

    pub fn with_frames<T: FramesSource>(src: T, rate: Framerate) -> Timestamp {
        Timestamp::with_frames(src, rate).expect("with_frames")
    }

    pub fn with_seconds<T: SecondsSource>(src: T, rate: Framerate, opts: SecondsOptions) -> Timestamp {
        Timestamp::with_seconds(src, rate, opts).expect("with_seconds")
    }

    pub fn with_premiere_ticks<T: PremiereTicksSource>(src: T, rate: Framerate) -> Timestamp {
        Timestamp::with_premiere_ticks(src, rate).expect("with_premiere_ticks")
    }

    pub fn with_feet_and_frames<T: FeetAndFramesSource>(
        src: T,
        format: FilmFormat,
        rate: Framerate,
    ) -> Timestamp {
        Timestamp::with_feet_and_frames(src, format, rate).expect("with_feet_and_frames")
    }

    pub fn add(a: &Timestamp, b: &Timestamp, round: RoundingMode) -> Timestamp {
        a.add(b, round).expect("add")
    }

    pub fn sub(a: &Timestamp, b: &Timestamp, round: RoundingMode) -> Timestamp {
        a.sub(b, round).expect("sub")
    }

    pub fn mult(a: &Timestamp, scalar: &Rational, round: RoundingMode) -> Timestamp {
        a.mult(scalar, round).expect("mult")
    }

    pub fn div(a: &Timestamp, scalar: &Rational, round: RoundingMode) -> Timestamp {
        a.div(scalar, round).expect("div")
    }

    pub fn divrem(
        a: &Timestamp,
        scalar: &Rational,
        round_frames: RoundingMode,
        round_remainder: RoundingMode,
    ) -> (Timestamp, Timestamp) {
        a.divrem(scalar, round_frames, round_remainder).expect("divrem")
    }

    pub fn rem(
        a: &Timestamp,
        scalar: &Rational,
        round_frames: RoundingMode,
        round_remainder: RoundingMode,
    ) -> Timestamp {
        a.rem(scalar, round_frames, round_remainder).expect("rem")
    }

    pub fn rebase(ts: &Timestamp, new_rate: Framerate) -> Timestamp {
        ts.rebase(new_rate).expect("rebase")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::framerate::rates;

    #[test]
    fn test_with_frames_scenario_one() {
        let ts = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();
        assert_eq!(
            Rational::new(BigInt::from(18018), BigInt::from(5)),
            *ts.seconds()
        );
        assert_eq!("01:00:00:00", ts.timecode(RoundingMode::Closest).unwrap());
        assert_eq!("01:00:03.6", ts.runtime(9, true));
        assert_eq!(BigInt::from(86_400), ts.frames(RoundingMode::Closest).unwrap());
        assert_eq!(
            BigInt::from(915_372_057_600_000i64),
            ts.premiere_ticks(RoundingMode::Closest).unwrap()
        );
        assert_eq!(
            "5400+00",
            ts.feet_and_frames(FilmFormat::FF35mm4Perf, RoundingMode::Closest)
                .unwrap()
                .to_string()
        );
    }

    #[test]
    fn test_with_frames_drop_frame_rejects_bad_label() {
        let err = Timestamp::with_frames("00:01:00;01", rates::F29_97_DF.clone());
        assert_eq!(Err(ParseError::BadDropFrames), err);
    }

    #[test]
    fn test_add_across_rates() {
        let a = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();
        let b = Timestamp::with_frames("00:00:00:02", rates::F47_95.clone()).unwrap();
        let result = a.add(&b, RoundingMode::Closest).unwrap();
        let expected = Timestamp::with_frames("01:00:00:01", rates::F23_98.clone()).unwrap();
        assert_eq!(expected, result);
    }

    #[test]
    fn test_divrem_scenario() {
        let a = Timestamp::with_frames("01:00:00:01", rates::F24.clone()).unwrap();
        let (q, r) = a
            .divrem(
                &Rational::from_integer(BigInt::from(2)),
                RoundingMode::Floor,
                RoundingMode::Closest,
            )
            .unwrap();
        let expected_q = Timestamp::with_frames("00:30:00:00", rates::F24.clone()).unwrap();
        let expected_r = Timestamp::with_frames("00:00:00:01", rates::F24.clone()).unwrap();
        assert_eq!(expected_q, q);
        assert_eq!(expected_r, r);
    }

    #[test]
    fn test_partial_frame_rejected_then_allowed() {
        let seconds = Rational::new(BigInt::from(239), BigInt::from(240));
        let err = Timestamp::with_seconds(
            seconds.clone(),
            rates::F24.clone(),
            SecondsOptions {
                round: RoundingMode::Off,
                allow_partial_frames: false,
            },
        );
        assert_eq!(Err(ParseError::PartialFrame), err);

        let ts = Timestamp::with_seconds(
            seconds.clone(),
            rates::F24.clone(),
            SecondsOptions {
                round: RoundingMode::Off,
                allow_partial_frames: true,
            },
        )
        .unwrap();
        assert_eq!(seconds, *ts.seconds());
    }

    #[test]
    fn test_negate_involution_and_abs() {
        let a = Timestamp::with_frames(24, rates::F24.clone()).unwrap();
        assert_eq!(a, a.negate().negate());
        assert_eq!(a.abs(), a.negate().abs());
    }

    #[test]
    fn test_mult_identity_and_zero() {
        let a = Timestamp::with_frames(24, rates::F24.clone()).unwrap();
        let one = Rational::from_integer(BigInt::from(1));
        let zero = Rational::zero();
        assert_eq!(a, a.mult(&one, RoundingMode::Closest).unwrap());
        let zeroed = a.mult(&zero, RoundingMode::Closest).unwrap();
        assert_eq!(BigInt::from(0), zeroed.frames(RoundingMode::Closest).unwrap());
    }

    #[test]
    fn test_rebase_scenario() {
        let a = Timestamp::with_frames("01:00:00;00", rates::F29_97_DF.clone()).unwrap();
        let rebased = a.rebase(rates::F29_97_NDF.clone()).unwrap();
        assert_eq!("00:59:56:12", rebased.timecode(RoundingMode::Closest).unwrap());
    }

    #[test]
    fn test_rebase_round_trip_is_lossless() {
        let a = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();
        let rebased = a.rebase(rates::F47_95.clone()).unwrap();
        let back = rebased.rebase(rates::F23_98.clone()).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_rebase_round_trip_drop_frame_is_lossless() {
        let a = Timestamp::with_frames("01:00:00;00", rates::F29_97_DF.clone()).unwrap();
        let rebased = a.rebase(rates::F29_97_NDF.clone()).unwrap();
        let back = rebased.rebase(rates::F29_97_DF.clone()).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_max_frames_wraparound() {
        let max = crate::drop_frame::max_frames(&rates::F29_97_DF);
        let ts = Timestamp::with_frames(max, rates::F29_97_DF.clone()).unwrap();
        assert_eq!("24:00:00;00", ts.timecode(RoundingMode::Closest).unwrap());
    }

    #[test]
    fn test_max_frames_wraparound_non_drop() {
        let max = crate::drop_frame::max_frames(&rates::F24);
        let ts = Timestamp::with_frames(max, rates::F24.clone()).unwrap();
        assert_eq!("24:00:00:00", ts.timecode(RoundingMode::Closest).unwrap());
    }

    #[test]
    fn test_display() {
        let ts = Timestamp::with_frames(24, rates::F23_98.clone()).unwrap();
        assert_eq!("<00:00:01:00 <23.98 NTSC>>", ts.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let ts = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn test_round_trip_every_representation() {
        let ts = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();

        let tc = ts.timecode(RoundingMode::Closest).unwrap();
        assert_eq!(ts, Timestamp::with_frames(tc.as_str(), rates::F23_98.clone()).unwrap());

        let frames = ts.frames(RoundingMode::Closest).unwrap();
        assert_eq!(ts, Timestamp::with_frames(frames, rates::F23_98.clone()).unwrap());

        let runtime = ts.runtime(9, true);
        assert_eq!(
            ts,
            Timestamp::with_seconds(
                crate::source_seconds::RuntimeStr(runtime.as_str()),
                rates::F23_98.clone(),
                SecondsOptions::default(),
            )
            .unwrap()
        );

        let ticks = ts.premiere_ticks(RoundingMode::Closest).unwrap();
        assert_eq!(
            ts,
            Timestamp::with_premiere_ticks(ticks, rates::F23_98.clone()).unwrap()
        );

        let ff = ts
            .feet_and_frames(FilmFormat::FF35mm4Perf, RoundingMode::Closest)
            .unwrap();
        assert_eq!(
            ts,
            Timestamp::with_feet_and_frames(
                ff.to_string().as_str(),
                FilmFormat::FF35mm4Perf,
                rates::F23_98.clone(),
            )
            .unwrap()
        );
    }

    #[test]
    fn test_compare_consistency_with_frame_count() {
        let a = Timestamp::with_frames(100, rates::F24.clone()).unwrap();
        let b = Timestamp::with_frames(200, rates::F24.clone()).unwrap();
        assert_eq!(
            a.compare(&b),
            a.frames(RoundingMode::Closest)
                .unwrap()
                .cmp(&b.frames(RoundingMode::Closest).unwrap())
        );
        assert!(a.lt(&b));
        assert!(b.gt(&a));
        assert!(a.eq_value(&a));
    }

    #[test]
    fn test_add_sub_symmetry() {
        let a = Timestamp::with_frames(240, rates::F24.clone()).unwrap();
        let b = Timestamp::with_frames(48, rates::F24.clone()).unwrap();
        let sum = a.add(&b, RoundingMode::Closest).unwrap();
        let back = sum.sub(&b, RoundingMode::Closest).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_divrem_matches_div_and_rem() {
        let a = Timestamp::with_frames("01:00:00:01", rates::F24.clone()).unwrap();
        let divisor = Rational::from_integer(BigInt::from(2));
        let (q, r) = a
            .divrem(&divisor, RoundingMode::Floor, RoundingMode::Closest)
            .unwrap();
        assert_eq!(q, a.div(&divisor, RoundingMode::Floor).unwrap());
        assert_eq!(
            r,
            a.rem(&divisor, RoundingMode::Floor, RoundingMode::Closest)
                .unwrap()
        );
    }
}
