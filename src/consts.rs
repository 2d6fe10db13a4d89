use lazy_static::lazy_static;
use num::BigInt;
use regex::Regex;

/// The number of seconds in a minute.
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
/// The number of seconds in an hour.
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;

/// The number of ticks Adobe Premiere Pro divides a second into. Chosen (by Adobe)
/// because it is evenly divisible by every common whole and NTSC-fractional
/// frame rate.
pub(crate) const PREMIERE_TICKS_PER_SECOND: i64 = 254_016_000_000;

/// Frames-per-foot for each supported film gauge/perforation.
pub(crate) const FRAMES_PER_FOOT_35MM_4PERF: i64 = 16;
pub(crate) const FRAMES_PER_FOOT_35MM_2PERF: i64 = 32;
pub(crate) const FRAMES_PER_FOOT_16MM: i64 = 40;

pub(crate) fn big(value: i64) -> BigInt {
    BigInt::from(value)
}

lazy_static! {
    /// Matches a SMPTE timecode string, e.g. `01:00:00:00` or `-1:12`. Section
    /// separators accept either `:` or `;` freely; the trailing separator carries
    /// no meaning on input (it is only meaningful in formatted output).
    pub(crate) static ref TIMECODE_REGEX: Regex = Regex::new(
        r"^(?P<negative>-)?((?P<section1>[0-9]+)[:;])?((?P<section2>[0-9]+)[:;])?((?P<section3>[0-9]+)[:;])?(?P<frames>[0-9]+)$"
    ).unwrap();

    /// Matches a runtime string, e.g. `01:00:03.6` or `3.5`.
    pub(crate) static ref RUNTIME_REGEX: Regex = Regex::new(
        r"^(?P<negative>-)?((?P<section1>[0-9]+)[:;])?((?P<section2>[0-9]+)[:;])?(?P<seconds>[0-9]+(\.[0-9]+)?)$"
    ).unwrap();

    /// Matches a feet-and-frames string, e.g. `5400+00`.
    pub(crate) static ref FEET_AND_FRAMES_REGEX: Regex = Regex::new(
        r"^(?P<negative>-)?(?P<feet>[0-9]+)\+(?P<frames>[0-9]+)$"
    ).unwrap();
}
