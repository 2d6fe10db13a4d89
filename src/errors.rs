use thiserror::Error;

/// Returned by [`crate::Rational`] operations that fail on a malformed argument.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RationalError {
    /// Returned by division and `divrem`/`rem` when the divisor is zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Returned from [`crate::Framerate::with_playback`] and
/// [`crate::Framerate::with_timebase`] when the supplied rate or NTSC combination is
/// invalid.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FramerateError {
    /// The supplied value could not be parsed, or an NTSC/non-NTSC invariant was
    /// violated.
    #[error("{0}")]
    InvalidFramerate(String),
    /// A drop-frame rate was requested whose nominal rate is not a multiple of 30.
    #[error("{0}")]
    DropFrameNotAllowed(String),
}

/// Returned when parsing any external representation (timecode string, runtime
/// string, feet-and-frames string, frame count, seconds, Premiere ticks) into a
/// [`crate::Timestamp`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The input matched no known parser for the representation being attempted.
    #[error("string format not recognized")]
    UnrecognizedFormat,
    /// A drop-frame SMPTE label names a frame that should have been dropped.
    #[error("frames value not allowed for drop-frame timecode. frame should have been dropped")]
    BadDropFrames,
    /// `with_seconds` was asked for an exact (non-rounded) result but the input is
    /// not aligned to a frame boundary.
    #[error("seconds is not cleanly divisible by rate.playback. This check can be turned off by setting allow_partial_frames to true")]
    PartialFrame,
    /// A caller-supplied argument was structurally valid but not allowed in this
    /// context (e.g. `RoundingMode::Off` where an integer result is required).
    #[error("{0}")]
    InvalidArgument(String),
    /// The framerate supplied alongside the value being parsed was itself invalid.
    #[error(transparent)]
    Framerate(#[from] FramerateError),
}

/// Returned by [`crate::Timestamp`] arithmetic operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ArithmeticError {
    /// The scalar operand of a `div`/`divrem`/`rem` was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `RoundingMode::Off` was requested in a context that requires an integer
    /// result.
    #[error("{0}")]
    InvalidArgument(String),
    /// An exact (non-rounded) conversion was requested but the value does not sit
    /// on a frame boundary.
    #[error("seconds is not cleanly divisible by rate.playback. This check can be turned off by setting allow_partial_frames to true")]
    PartialFrame,
}

impl From<RationalError> for ArithmeticError {
    fn from(err: RationalError) -> Self {
        match err {
            RationalError::DivisionByZero => ArithmeticError::DivisionByZero,
        }
    }
}

impl From<ArithmeticError> for ParseError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => {
                ParseError::InvalidArgument("division by zero".to_string())
            }
            ArithmeticError::InvalidArgument(msg) => ParseError::InvalidArgument(msg),
            ArithmeticError::PartialFrame => ParseError::PartialFrame,
        }
    }
}
