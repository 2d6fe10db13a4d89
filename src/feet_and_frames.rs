//! Feet-and-frames film length notation.

use std::fmt;

use num::{BigInt, Signed};

use crate::consts::{
    big, FRAMES_PER_FOOT_16MM, FRAMES_PER_FOOT_35MM_2PERF, FRAMES_PER_FOOT_35MM_4PERF,
    FEET_AND_FRAMES_REGEX,
};
use crate::errors::ParseError;

/// Film gauge/perforation layout, each with its own frames-per-foot count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilmFormat {
    /// 35mm, 4 perforations per frame: 16 frames per foot.
    FF35mm4Perf,
    /// 35mm, 2 perforations per frame: 32 frames per foot.
    FF35mm2Perf,
    /// 16mm: 40 frames per foot.
    FF16mm,
}

impl Default for FilmFormat {
    fn default() -> Self {
        FilmFormat::FF35mm4Perf
    }
}

impl FilmFormat {
    /// The number of frames in one foot of film for this gauge.
    pub fn frames_per_foot(&self) -> BigInt {
        let value = match self {
            FilmFormat::FF35mm4Perf => FRAMES_PER_FOOT_35MM_4PERF,
            FilmFormat::FF35mm2Perf => FRAMES_PER_FOOT_35MM_2PERF,
            FilmFormat::FF16mm => FRAMES_PER_FOOT_16MM,
        };
        big(value)
    }
}

/// A film-length value expressed as feet and the leftover frames on the
/// current foot, e.g. `5400+00`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeetAndFrames {
    pub feet: BigInt,
    pub frames: BigInt,
    pub format: FilmFormat,
}

impl FeetAndFrames {
    /// Builds a value from a total (signed) frame count. Feet and frames share
    /// the sign of `total_frames`.
    pub fn from_frames(total_frames: &BigInt, format: FilmFormat) -> Self {
        let negative = total_frames.is_negative();
        let magnitude = total_frames.abs();
        let frames_per_foot = format.frames_per_foot();

        let mut feet = &magnitude / &frames_per_foot;
        let mut frames = &magnitude % &frames_per_foot;
        if negative {
            feet = -feet;
            frames = -frames;
        }

        FeetAndFrames {
            feet,
            frames,
            format,
        }
    }

    /// The total (signed) frame count this value represents.
    pub fn to_frames(&self) -> BigInt {
        self.feet.clone() * self.format.frames_per_foot() + self.frames.clone()
    }

    /// Parses a `[-]FEET+FF` string. Fails with [`ParseError::UnrecognizedFormat`]
    /// if the string does not match, or [`ParseError::InvalidArgument`] if the
    /// frames component is not less than `format.frames_per_foot()`.
    ///
    /// To accept an overflowing frames component by carrying the excess into
    /// `feet` instead of rejecting it, use
    /// [`FeetAndFrames::from_string_allow_overflow`].
    pub fn from_string(s: &str, format: FilmFormat) -> Result<Self, ParseError> {
        let (feet, frames, is_negative) = Self::parse_raw(s)?;

        if frames >= format.frames_per_foot() {
            return Err(ParseError::InvalidArgument(format!(
                "frames value {} must be less than {} frames-per-foot",
                frames,
                format.frames_per_foot(),
            )));
        }

        Ok(Self::assemble(feet, frames, format, is_negative))
    }

    /// As [`FeetAndFrames::from_string`], but a frames component that is not
    /// less than `format.frames_per_foot()` carries the excess into `feet`
    /// rather than being rejected.
    pub fn from_string_allow_overflow(s: &str, format: FilmFormat) -> Result<Self, ParseError> {
        let (feet, frames, is_negative) = Self::parse_raw(s)?;
        let frames_per_foot = format.frames_per_foot();
        let carry = &frames / &frames_per_foot;
        let feet = feet + carry.clone();
        let frames = frames - carry * frames_per_foot;

        Ok(Self::assemble(feet, frames, format, is_negative))
    }

    fn parse_raw(s: &str) -> Result<(BigInt, BigInt, bool), ParseError> {
        let matched = FEET_AND_FRAMES_REGEX
            .captures(s)
            .ok_or(ParseError::UnrecognizedFormat)?;

        let feet_str = matched.name("feet").unwrap().as_str();
        let frames_str = matched.name("frames").unwrap().as_str();
        let is_negative = matched.name("negative").is_some();

        let feet: BigInt = feet_str
            .parse()
            .map_err(|_| ParseError::InvalidArgument(format!("invalid feet value '{}'", feet_str)))?;
        let frames: BigInt = frames_str.parse().map_err(|_| {
            ParseError::InvalidArgument(format!("invalid frames value '{}'", frames_str))
        })?;

        Ok((feet, frames, is_negative))
    }

    fn assemble(feet: BigInt, frames: BigInt, format: FilmFormat, is_negative: bool) -> Self {
        let mut feet = feet;
        let mut frames = frames;
        if is_negative {
            feet = -feet;
            frames = -frames;
        }

        FeetAndFrames {
            feet,
            frames,
            format,
        }
    }
}

impl fmt::Display for FeetAndFrames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.feet.is_negative() || self.frames.is_negative();
        if negative {
            write!(f, "-")?;
        }
        write!(f, "{}+{:02}", self.feet.abs(), self.frames.abs())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FilmFormat::FF35mm4Perf, 16)]
    #[case(FilmFormat::FF35mm2Perf, 32)]
    #[case(FilmFormat::FF16mm, 40)]
    fn test_frames_per_foot(#[case] format: FilmFormat, #[case] expected: i64) {
        assert_eq!(BigInt::from(expected), format.frames_per_foot());
    }

    #[test]
    fn test_from_frames() {
        let ff = FeetAndFrames::from_frames(&BigInt::from(86_400), FilmFormat::FF35mm4Perf);
        assert_eq!(BigInt::from(5400), ff.feet);
        assert_eq!(BigInt::from(0), ff.frames);
        assert_eq!("5400+00", ff.to_string());
    }

    #[test]
    fn test_from_string() {
        let ff = FeetAndFrames::from_string("5400+00", FilmFormat::FF35mm4Perf).unwrap();
        assert_eq!(BigInt::from(86_400), ff.to_frames());
    }

    #[test]
    fn test_from_string_negative() {
        let ff = FeetAndFrames::from_string("-5400+05", FilmFormat::FF35mm4Perf).unwrap();
        assert_eq!(BigInt::from(-5), ff.frames);
        assert_eq!(BigInt::from(-86_405), ff.to_frames());
    }

    #[test]
    fn test_from_string_rejects_overflowing_frames() {
        assert!(FeetAndFrames::from_string("10+16", FilmFormat::FF35mm4Perf).is_err());
    }

    #[test]
    fn test_from_string_allow_overflow_carries_into_feet() {
        let ff = FeetAndFrames::from_string_allow_overflow("10+16", FilmFormat::FF35mm4Perf).unwrap();
        assert_eq!(BigInt::from(11), ff.feet);
        assert_eq!(BigInt::from(0), ff.frames);
    }

    #[test]
    fn test_from_string_allow_overflow_negative_carries_into_feet() {
        let ff = FeetAndFrames::from_string_allow_overflow("-10+16", FilmFormat::FF35mm4Perf).unwrap();
        assert_eq!(BigInt::from(-11), ff.feet);
        assert_eq!(BigInt::from(0), ff.frames);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let ff = FeetAndFrames::from_frames(&BigInt::from(86_405), FilmFormat::FF35mm4Perf);
        let json = serde_json::to_string(&ff).unwrap();
        let back: FeetAndFrames = serde_json::from_str(&json).unwrap();
        assert_eq!(ff, back);
    }
}
