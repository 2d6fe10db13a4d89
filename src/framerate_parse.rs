use std::fmt::Debug;
use std::str::FromStr;

use num::BigInt;

use crate::errors::FramerateError;
use crate::framerate::NtscKind;
use crate::rational::Rational;

/// The result type of [`FramerateSource::to_playback`].
pub type FramerateSourceResult = Result<Rational, FramerateError>;

/// The divisor a drop-frame playback speed must divide cleanly, expressed as a
/// rational (a multiple of 29.97).
fn drop_divisor_playback() -> Rational {
    Rational::new(30000.into(), 1001.into())
}

/// The divisor a drop-frame timebase must divide cleanly (a multiple of 30).
fn drop_divisor_timebase() -> Rational {
    Rational::new(30.into(), 1.into())
}

/// Validates that `value` satisfies the NTSC/drop-frame invariants for the given
/// `ntsc` kind. `is_base` is true when `value` is a timebase (rounded frame
/// label) rather than a playback speed.
fn validate_ntsc_value(value: &Rational, ntsc: NtscKind, is_base: bool) -> Result<(), FramerateError> {
    if !value.is_positive() {
        return Err(FramerateError::InvalidFramerate(
            "framerates must be positive".to_string(),
        ));
    }

    if !ntsc.is_ntsc() {
        return Ok(());
    }

    if is_base {
        if !value.is_integer() {
            return Err(FramerateError::InvalidFramerate(
                "ntsc timebases must be whole numbers".to_string(),
            ));
        }
    } else if value.denom() != &BigInt::from(1001) {
        return Err(FramerateError::InvalidFramerate(
            "ntsc framerates must be n/1001".to_string(),
        ));
    }

    if ntsc != NtscKind::Drop {
        return Ok(());
    }

    let divisor = if is_base {
        drop_divisor_timebase()
    } else {
        drop_divisor_playback()
    };
    let ratio = value.clone() / divisor.clone();
    if !ratio.is_integer() {
        let rate_type = if is_base { "timebase" } else { "playback" };
        return Err(FramerateError::DropFrameNotAllowed(format!(
            "dropframe must have {0} divisible by {1} (multiple of 29.97)",
            rate_type, divisor,
        )));
    }

    Ok(())
}

/// Multiplies a rounded NTSC timebase by `1000/1001` to get its playback speed.
fn ntsc_multiplier() -> Rational {
    Rational::new(1000.into(), 1001.into())
}

/// Implemented by any type that can be parsed into a rational playback
/// frames-per-second value, given the NTSC standard it should be validated
/// against, whether it represents a playback speed or a timecode timebase, and
/// (for playback speeds only) whether a whole-number input should be coerced to
/// the nearest NTSC-fractional rate.
pub trait FramerateSource: Debug {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult;
}

impl FramerateSource for Rational {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        let mut value = self.clone();

        if is_timebase {
            validate_ntsc_value(&value, ntsc.clone(), true)?;
            if ntsc.is_ntsc() {
                value = Rational::from_integer(value.round(crate::RoundingMode::Closest))
                    * ntsc_multiplier();
            }
            return Ok(value);
        }

        if coerce_ntsc && ntsc.is_ntsc() && value.is_integer() {
            value = value * ntsc_multiplier();
        }
        validate_ntsc_value(&value, ntsc, false)?;
        Ok(value)
    }
}

impl FramerateSource for BigInt {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        Rational::from_integer(self.clone()).to_playback(ntsc, is_timebase, coerce_ntsc)
    }
}

macro_rules! impl_framerate_source_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FramerateSource for $t {
                fn to_playback(
                    &self,
                    ntsc: NtscKind,
                    is_timebase: bool,
                    coerce_ntsc: bool,
                ) -> FramerateSourceResult {
                    BigInt::from(*self).to_playback(ntsc, is_timebase, coerce_ntsc)
                }
            }
        )+
    };
}

impl_framerate_source_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl FramerateSource for f64 {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        if !ntsc.is_ntsc() {
            return Err(FramerateError::InvalidFramerate(
                "float values cannot be parsed for non-NTSC framerates due to imprecision"
                    .to_string(),
            ));
        }

        let mut rational = Rational::from_decimal_str(&format!("{}", self)).ok_or_else(|| {
            FramerateError::InvalidFramerate(format!("could not parse '{}' as a decimal", self))
        })?;

        // Floats are inherently imprecise, so unlike a string/rational playback
        // input, we always round a float playback speed to the nearest NTSC
        // multiple rather than requiring the caller to opt in with coerce_ntsc.
        if !is_timebase {
            rational =
                Rational::from_integer(rational.round(crate::RoundingMode::Closest)) * ntsc_multiplier();
        }

        rational.to_playback(ntsc, is_timebase, coerce_ntsc)
    }
}

impl FramerateSource for f32 {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        f64::from(*self).to_playback(ntsc, is_timebase, coerce_ntsc)
    }
}

impl FramerateSource for &str {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        if let Some((numer, denom)) = self.split_once('/') {
            if let (Ok(numer), Ok(denom)) =
                (BigInt::from_str(numer.trim()), BigInt::from_str(denom.trim()))
            {
                return Rational::new(numer, denom).to_playback(ntsc, is_timebase, coerce_ntsc);
            }
        }

        if let Some(rational) = Rational::from_decimal_str(self) {
            return rational.to_playback(ntsc, is_timebase, coerce_ntsc);
        }

        Err(FramerateError::InvalidFramerate(format!(
            "could not parse '{0}' as rational, int, or float for framerate",
            self
        )))
    }
}

impl FramerateSource for String {
    fn to_playback(
        &self,
        ntsc: NtscKind,
        is_timebase: bool,
        coerce_ntsc: bool,
    ) -> FramerateSourceResult {
        self.as_str().to_playback(ntsc, is_timebase, coerce_ntsc)
    }
}
