//! Hours/minutes/seconds/frames decomposition of a frame count.

use num::{BigInt, Signed, ToPrimitive, Zero};

use crate::consts::{big, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::drop_frame::{self, LabelSections};
use crate::errors::ParseError;
use crate::framerate::{Framerate, NtscKind};

/// The decoded hours/minutes/seconds/frames fields of a SMPTE label, plus a
/// sign flag. Field magnitudes are non-negative and carry no invariant tying
/// them to a particular framerate until combined with one via
/// [`Sections::to_frames`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sections {
    pub negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
}

impl Sections {
    /// Stores the given fields as-is, with no carry normalization (so that an
    /// over-wide field like `minutes = 120` survives to be resolved by
    /// [`Sections::to_frames`]).
    pub fn from_label(hours: i64, minutes: i64, seconds: i64, frames: i64, negative: bool) -> Self {
        Sections {
            negative,
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Converts this label to a signed total frame count at `rate`, applying
    /// the drop-frame label adjustment when `rate.ntsc() == NtscKind::Drop`.
    pub fn to_frames(&self, rate: &Framerate) -> Result<BigInt, ParseError> {
        let drop_adjustment = if rate.ntsc() == NtscKind::Drop {
            let label_sections = LabelSections {
                negative: self.negative,
                hours: self.hours,
                minutes: self.minutes,
                seconds: self.seconds,
                frames: self.frames,
            };
            drop_frame::label_to_frame_offset(&label_sections, rate)?
        } else {
            BigInt::zero()
        };

        let total_seconds =
            self.seconds + self.minutes * SECONDS_PER_MINUTE + self.hours * SECONDS_PER_HOUR;
        let timebase = rate.timebase_integer();

        let mut frames = big(total_seconds) * timebase + big(self.frames) + drop_adjustment;
        if self.negative {
            frames = -frames;
        }
        Ok(frames)
    }

    /// Decomposes a (non-negative-or-negative) total frame count at `rate`
    /// back into hours/minutes/seconds/frames, inverting the drop-frame
    /// adjustment for drop-frame rates.
    pub fn from_frame_count(frame_count: &BigInt, rate: &Framerate) -> Self {
        let negative = frame_count.is_negative();
        let magnitude = frame_count.abs();

        let adjusted = if rate.ntsc() == NtscKind::Drop {
            magnitude.clone() + drop_frame::frame_to_label_offset(&magnitude, rate)
        } else {
            magnitude
        };

        let timebase = rate.timebase_integer();
        let (total_seconds, frames) = div_mod(&adjusted, &timebase);
        let (total_minutes, seconds) = div_mod(&total_seconds, &big(SECONDS_PER_MINUTE));
        let (hours, minutes) = div_mod(&total_minutes, &big(60));

        Sections {
            negative,
            hours: to_i64(&hours),
            minutes: to_i64(&minutes),
            seconds: to_i64(&seconds),
            frames: to_i64(&frames),
        }
    }
}

fn div_mod(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    (a / b, a % b)
}

fn to_i64(value: &BigInt) -> i64 {
    value.to_i64().expect("section field should always fit in i64")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::framerate::rates;

    #[test]
    fn test_to_frames_non_drop() {
        let sections = Sections::from_label(1, 0, 0, 0, false);
        let frames = sections.to_frames(&rates::F23_98).unwrap();
        assert_eq!(BigInt::from(86_400), frames);
    }

    #[test]
    fn test_to_frames_negative() {
        let sections = Sections::from_label(0, 0, 1, 0, true);
        let frames = sections.to_frames(&rates::F24).unwrap();
        assert_eq!(BigInt::from(-24), frames);
    }

    #[test]
    fn test_roundtrip_non_drop() {
        let sections = Sections::from_label(1, 2, 3, 4, false);
        let frames = sections.to_frames(&rates::F24).unwrap();
        let back = Sections::from_frame_count(&frames, &rates::F24);
        assert_eq!(sections, back);
    }

    #[test]
    fn test_roundtrip_drop() {
        let sections = Sections::from_label(1, 2, 3, 4, false);
        let frames = sections.to_frames(&rates::F29_97_DF).unwrap();
        let back = Sections::from_frame_count(&frames, &rates::F29_97_DF);
        assert_eq!(sections, back);
    }

    #[test]
    fn test_bad_drop_frame_label_rejected() {
        let sections = Sections::from_label(0, 1, 0, 0, false);
        assert_eq!(
            Err(ParseError::BadDropFrames),
            sections.to_frames(&rates::F29_97_DF)
        );
    }
}
