use std::fmt::Debug;

use num::BigInt;
use regex::Match;

use crate::consts::{FEET_AND_FRAMES_REGEX, TIMECODE_REGEX};
use crate::errors::ParseError;
use crate::feet_and_frames::FilmFormat;
use crate::framerate::Framerate;
use crate::sections::Sections;

/// The result type of [`FramesSource::to_frames`].
pub type FramesSourceResult = Result<BigInt, ParseError>;

/// Types implementing this trait can be converted into the number of frames
/// elapsed since `00:00:00:00`.
pub trait FramesSource: Debug {
    fn to_frames(&self, rate: &Framerate) -> FramesSourceResult;
}

impl<T> FramesSource for &T
where
    T: FramesSource,
{
    fn to_frames(&self, rate: &Framerate) -> FramesSourceResult {
        (*self).to_frames(rate)
    }
}

impl FramesSource for BigInt {
    fn to_frames(&self, _: &Framerate) -> FramesSourceResult {
        Ok(self.clone())
    }
}

macro_rules! impl_frames_source_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FramesSource for $t {
                fn to_frames(&self, _: &Framerate) -> FramesSourceResult {
                    Ok(BigInt::from(*self))
                }
            }
        )+
    };
}

impl_frames_source_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl FramesSource for &str {
    fn to_frames(&self, rate: &Framerate) -> FramesSourceResult {
        if let Some(matched) = TIMECODE_REGEX.captures(self) {
            return parse_timecode_string(&matched, rate);
        }

        match parse_feet_and_frames_str(self) {
            Ok(frames) => return Ok(frames),
            Err(ParseError::UnrecognizedFormat) => {}
            Err(err) => return Err(err),
        }

        log::debug!("'{}' matched neither a timecode nor a feet-and-frames pattern", self);
        Err(ParseError::UnrecognizedFormat)
    }
}

impl FramesSource for String {
    fn to_frames(&self, rate: &Framerate) -> FramesSourceResult {
        self.as_str().to_frames(rate)
    }
}

/// A wrapper that forces its string to be parsed as a SMPTE timecode,
/// bypassing the feet-and-frames fallback `&str`/`String` attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SmpteTimecodeStr<'a>(pub &'a str);

impl<'a> FramesSource for SmpteTimecodeStr<'a> {
    fn to_frames(&self, rate: &Framerate) -> FramesSourceResult {
        let matched = TIMECODE_REGEX
            .captures(self.0)
            .ok_or(ParseError::UnrecognizedFormat)?;
        parse_timecode_string(&matched, rate)
    }
}

fn convert_tc_int(value: &str, section_name: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|err| {
        ParseError::InvalidArgument(format!("error converting {} to integer: {}", section_name, err))
    })
}

fn parse_timecode_string(matched: &regex::Captures, rate: &Framerate) -> FramesSourceResult {
    let frames = convert_tc_int(matched.name("frames").unwrap().as_str(), "frames")?;

    let mut sections: Vec<Match> = Vec::new();
    if let Some(section) = matched.name("section1") {
        sections.push(section);
    }
    if let Some(section) = matched.name("section2") {
        sections.push(section);
    }
    if let Some(section) = matched.name("section3") {
        sections.push(section);
    }

    let is_negative = matched.name("negative").is_some();

    let seconds: i64 = match sections.pop() {
        None => 0,
        Some(section) => convert_tc_int(section.as_str(), "seconds")?,
    };
    let minutes: i64 = match sections.pop() {
        None => 0,
        Some(section) => convert_tc_int(section.as_str(), "minutes")?,
    };
    let hours: i64 = match sections.pop() {
        None => 0,
        Some(section) => convert_tc_int(section.as_str(), "hours")?,
    };

    let sections = Sections::from_label(hours, minutes, seconds, frames, is_negative);
    sections.to_frames(rate)
}

fn parse_feet_and_frames_str(s: &str) -> FramesSourceResult {
    if !FEET_AND_FRAMES_REGEX.is_match(s) {
        return Err(ParseError::UnrecognizedFormat);
    }
    let ff = crate::feet_and_frames::FeetAndFrames::from_string(s, FilmFormat::default())?;
    Ok(ff.to_frames())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::framerate::rates;

    #[test]
    fn test_timecode_non_drop() {
        let frames = "01:00:00:00".to_frames(&rates::F23_98).unwrap();
        assert_eq!(BigInt::from(86_400), frames);
    }

    #[test]
    fn test_timecode_partial() {
        let frames = "1:12".to_frames(&rates::F24).unwrap();
        assert_eq!(BigInt::from(36), frames);
    }

    #[test]
    fn test_feet_and_frames_fallback() {
        let frames = "5400+00".to_frames(&rates::F23_98).unwrap();
        assert_eq!(BigInt::from(86_400), frames);
    }

    #[test]
    fn test_bad_drop_frames_is_definitive_rejection() {
        let err = "00:01:00;01".to_frames(&rates::F29_97_DF);
        assert_eq!(Err(ParseError::BadDropFrames), err);
    }

    #[test]
    fn test_smpte_wrapper_rejects_feet_and_frames() {
        let err = SmpteTimecodeStr("5400+00").to_frames(&rates::F23_98);
        assert_eq!(Err(ParseError::UnrecognizedFormat), err);
    }

    #[test]
    fn test_unrecognized_format() {
        let err = "not-a-timecode".to_frames(&rates::F24);
        assert_eq!(Err(ParseError::UnrecognizedFormat), err);
    }
}
