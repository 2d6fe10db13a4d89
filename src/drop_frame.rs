//! Drop-frame label adjustment.
//!
//! NTSC drop-frame timecode keeps its frame-number labels in sync with
//! wall-clock time by periodically skipping label values rather than actual
//! frames: on every minute boundary except the tenth, the first few frame
//! numbers of that minute are never used as a label. Nothing is ever dropped
//! from the underlying frame count; only the string labeling shifts.
//!
//! Algorithm adapted from
//! <https://www.davidheidelberger.com/2010/06/10/drop-frame-timecode/>.

use num::{BigInt, Zero};

use crate::errors::ParseError;
use crate::framerate::{Framerate, NtscKind};

/// The raw, un-adjusted hours/minutes/seconds/frames parsed out of a SMPTE
/// timecode string, before the drop-frame label offset is applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LabelSections {
    pub negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
}

/// The number of frame labels skipped at the start of each non-tenth minute,
/// e.g. `2` for 29.97 drop-frame, `4` for 59.94 drop-frame. `None` for any
/// non-drop-frame rate.
pub(crate) fn drop_frames_per_minute(rate: &Framerate) -> Option<BigInt> {
    if rate.ntsc() != NtscKind::Drop {
        return None;
    }
    let timebase = rate.timebase_integer();
    Some((timebase / BigInt::from(30)) * BigInt::from(2))
}

/// Converts the sections parsed out of a drop-frame SMPTE timecode string into
/// the adjustment (always zero or negative) that must be added to the naive
/// frame count (`hours/minutes/seconds` converted straight to frames, plus
/// `frames`) to get the true, un-dropped frame number.
///
/// Returns [`ParseError::BadDropFrames`] if the label names a frame value that
/// should have been skipped (a frames place below the per-minute drop count,
/// on a minute boundary that isn't a multiple of ten).
pub(crate) fn label_to_frame_offset(
    sections: &LabelSections,
    rate: &Framerate,
) -> Result<BigInt, ParseError> {
    let drop_frames = drop_frames_per_minute(rate).expect("rate must be drop-frame");

    let has_bad_frames = BigInt::from(sections.frames) < drop_frames;
    let is_tenth_minute = sections.minutes % 10 == 0;
    let is_minute_boundary = sections.seconds == 0;

    if has_bad_frames && is_minute_boundary && !is_tenth_minute {
        return Err(ParseError::BadDropFrames);
    }

    let total_minutes = BigInt::from(60 * sections.hours + sections.minutes);
    let tenths = total_minutes.clone() / BigInt::from(10);
    let adjustment = drop_frames * (total_minutes - tenths);

    Ok(-adjustment)
}

/// Converts a true frame number into the adjusted frame number that produces
/// the correct drop-frame label when formatted with ordinary
/// hours/minutes/seconds/frames division.
pub(crate) fn frame_to_label_offset(frame_number: &BigInt, rate: &Framerate) -> BigInt {
    let timebase = rate.timebase_integer();
    let drop_frames = drop_frames_per_minute(rate).expect("rate must be drop-frame");

    let frames_per_minute = timebase.clone() * BigInt::from(60);
    let frames_per_minute_drop = frames_per_minute.clone() - drop_frames.clone();
    let frames_per_10minutes_drop = frames_per_minute_drop.clone() * BigInt::from(9)
        + frames_per_minute.clone();

    let tens_of_minutes = div_floor(frame_number.clone(), frames_per_10minutes_drop.clone());
    let mut frames =
        frame_number.clone() - tens_of_minutes.clone() * frames_per_10minutes_drop;

    let mut adjustment = BigInt::from(9) * drop_frames.clone() * tens_of_minutes;

    if frames < frames_per_minute {
        return adjustment;
    }

    frames = frames - timebase;
    adjustment = adjustment + drop_frames.clone();

    let minutes_drop = frames / frames_per_minute_drop;
    adjustment = adjustment + minutes_drop * drop_frames;

    adjustment
}

fn div_floor(a: BigInt, b: BigInt) -> BigInt {
    let r = a.clone() % b.clone();
    let q = a / b.clone();
    if r.is_zero() || ((r < BigInt::zero()) == (b < BigInt::zero())) {
        q
    } else {
        q - BigInt::from(1)
    }
}

/// The frame count at which a 24-hour timecode label wraps to
/// `24:00:00:00`/`24:00:00;00`. Every real frame is counted regardless of
/// `rate`'s NTSC/drop-frame labeling, since drop-frame only skips labels, not
/// actual frames, so this is just `timebase * seconds_per_day`.
pub(crate) fn max_frames(rate: &Framerate) -> BigInt {
    rate.timebase_integer() * BigInt::from(24 * 60 * 60)
}
