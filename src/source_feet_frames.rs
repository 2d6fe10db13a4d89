use std::fmt::Debug;

use num::BigInt;

use crate::errors::ParseError;
use crate::feet_and_frames::{FeetAndFrames, FilmFormat};
use crate::framerate::Framerate;

/// The result type of [`FeetAndFramesSource::to_frames`].
pub type FeetAndFramesSourceResult = Result<BigInt, ParseError>;

/// Types implementing this trait can be converted into the number of frames
/// elapsed since `00:00:00:00`, interpreted as feet-and-frames film length.
pub trait FeetAndFramesSource: Debug {
    fn to_frames(&self, format: FilmFormat, rate: &Framerate) -> FeetAndFramesSourceResult;
}

impl<T> FeetAndFramesSource for &T
where
    T: FeetAndFramesSource,
{
    fn to_frames(&self, format: FilmFormat, rate: &Framerate) -> FeetAndFramesSourceResult {
        (*self).to_frames(format, rate)
    }
}

impl FeetAndFramesSource for &str {
    fn to_frames(&self, format: FilmFormat, _: &Framerate) -> FeetAndFramesSourceResult {
        let ff = FeetAndFrames::from_string(self, format)?;
        Ok(ff.to_frames())
    }
}

impl FeetAndFramesSource for String {
    fn to_frames(&self, format: FilmFormat, rate: &Framerate) -> FeetAndFramesSourceResult {
        self.as_str().to_frames(format, rate)
    }
}

/// A wrapper that forces its string to be parsed as feet-and-frames, useful at
/// call sites that would otherwise dispatch through the SMPTE-then-feet
/// fallback in [`crate::source_frames::FramesSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeetAndFramesStr<'a>(pub &'a str);

impl<'a> FeetAndFramesSource for FeetAndFramesStr<'a> {
    fn to_frames(&self, format: FilmFormat, rate: &Framerate) -> FeetAndFramesSourceResult {
        self.0.to_frames(format, rate)
    }
}
