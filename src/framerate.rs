use std::fmt;

use num::{BigInt, Zero};

use crate::errors::FramerateError;
use crate::framerate_parse::FramerateSource;
use crate::rational::Rational;
use crate::rounding::RoundingMode;

/// The NTSC standard, if any, a [`Framerate`] adheres to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NtscKind {
    /// A true whole or arbitrary rational rate; not NTSC.
    None,
    /// NTSC-fractional (`playback = nominal * 1000/1001`), labeled without
    /// dropping frame numbers. Timecode built on this rate slowly drifts from
    /// true wall-clock time over long durations.
    NonDrop,
    /// NTSC-fractional, labeled by periodically skipping frame numbers so that
    /// timecode stays in sync with true wall-clock time. Only legal for rates
    /// whose nominal rate is a multiple of 30.
    Drop,
}

impl NtscKind {
    /// Whether this is any NTSC flavor (drop or non-drop).
    pub fn is_ntsc(&self) -> bool {
        *self != NtscKind::None
    }
}

impl fmt::Display for NtscKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NtscKind::None => "",
            NtscKind::NonDrop => "NTSC",
            NtscKind::Drop => "NTSC DF",
        };
        write!(f, "{}", label)
    }
}

/// The rate at which a video's frames are played back, paired with the NTSC
/// convention (if any) used to label them.
///
/// `playback` is always positive; an NTSC rate's `playback` is always
/// `nominal * 1000/1001`; a drop-frame rate's nominal rate is always a multiple
/// of 30.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Framerate {
    playback: Rational,
    ntsc: NtscKind,
}

impl Framerate {
    /// The exact real-world playback speed, in frames-per-second.
    pub fn playback(&self) -> &Rational {
        &self.playback
    }

    /// The NTSC standard this rate adheres to.
    pub fn ntsc(&self) -> NtscKind {
        self.ntsc
    }

    /// The integer frames-per-second label used for SMPTE timecode (e.g. `24` for
    /// 23.98, `30` for 29.97, `60` for 59.94). For non-NTSC rates this is just
    /// the playback rate.
    pub fn timebase(&self) -> Rational {
        if self.ntsc.is_ntsc() {
            Rational::from_integer(self.timebase_integer())
        } else {
            self.playback.clone()
        }
    }

    /// Alias of [`Framerate::timebase`]. The source this crate is modeled on
    /// exposed two identically-behaving helpers under different names; this
    /// crate keeps both names for call-site clarity but implements one in terms
    /// of the other.
    pub fn smpte_timebase(&self) -> Rational {
        self.timebase()
    }

    pub(crate) fn timebase_integer(&self) -> BigInt {
        self.playback.round(RoundingMode::Closest)
    }

    /// Creates a [`Framerate`] from a real-world playback speed in
    /// frames-per-second (e.g. `23.976` or `24000/1001`).
    ///
    /// A non-fractional playback speed supplied alongside an NTSC `ntsc` kind is
    /// rejected unless [`Framerate::with_playback_coerced`] is used instead.
    pub fn with_playback<T: FramerateSource>(rate: T, ntsc: NtscKind) -> Result<Self, FramerateError> {
        let playback = rate.to_playback(ntsc, false, false)?;
        Ok(Framerate { playback, ntsc })
    }

    /// As [`Framerate::with_playback`], but a whole-number (or otherwise
    /// non-`/1001`) input paired with an NTSC `ntsc` kind is multiplied by
    /// `1000/1001` on entry rather than rejected.
    pub fn with_playback_coerced<T: FramerateSource>(
        rate: T,
        ntsc: NtscKind,
    ) -> Result<Self, FramerateError> {
        let playback = rate.to_playback(ntsc, false, true)?;
        Ok(Framerate { playback, ntsc })
    }

    /// Creates a [`Framerate`] from a timecode timebase (the integer label used
    /// in SMPTE strings, e.g. `24`, `30`, `60`). For NTSC rates the resulting
    /// playback speed is the timebase multiplied by `1000/1001`.
    pub fn with_timebase<T: FramerateSource>(base: T, ntsc: NtscKind) -> Result<Self, FramerateError> {
        let playback = base.to_playback(ntsc, true, false)?;
        Ok(Framerate { playback, ntsc })
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.playback.to_f64().unwrap_or(0.0);
        let value_str = format!("{:.2}", value);
        let value_str = value_str.trim_end_matches('0').trim_end_matches('.');

        write!(f, "{}", value_str)?;
        if !self.ntsc.is_ntsc() {
            return Ok(());
        }

        // Only the 30/60-per-second NTSC family can be labeled either drop or
        // non-drop, so only that family needs the DF/NDF disambiguator; the
        // 24/48 family is unambiguously non-drop and renders as plain "NTSC".
        // `NtscKind::Display` can't make this distinction on its own (it has
        // no notion of the underlying rate), so the NDF suffix is appended
        // here rather than delegated.
        let is_drop_capable = (&self.timebase_integer() % BigInt::from(30)).is_zero();
        if self.ntsc == NtscKind::NonDrop && is_drop_capable {
            return write!(f, " NTSC NDF");
        }
        write!(f, " {}", self.ntsc)
    }
}

/// Common framerates seen in the wild, as ready-to-use constants.
pub mod rates {
    use super::{Framerate, NtscKind};
    use lazy_static::lazy_static;

    lazy_static! {
        /// 23.98 NTSC non-drop-frame.
        pub static ref F23_98: Framerate = Framerate::with_timebase(24, NtscKind::NonDrop).unwrap();
        /// 24 fps.
        pub static ref F24: Framerate = Framerate::with_timebase(24, NtscKind::None).unwrap();
        /// 29.97 NTSC non-drop-frame.
        pub static ref F29_97_NDF: Framerate =
            Framerate::with_timebase(30, NtscKind::NonDrop).unwrap();
        /// 29.97 NTSC drop-frame.
        pub static ref F29_97_DF: Framerate = Framerate::with_timebase(30, NtscKind::Drop).unwrap();
        /// 30 fps.
        pub static ref F30: Framerate = Framerate::with_timebase(30, NtscKind::None).unwrap();
        /// 47.95 NTSC non-drop-frame.
        pub static ref F47_95: Framerate = Framerate::with_timebase(48, NtscKind::NonDrop).unwrap();
        /// 48 fps.
        pub static ref F48: Framerate = Framerate::with_timebase(48, NtscKind::None).unwrap();
        /// 59.94 NTSC non-drop-frame.
        pub static ref F59_94_NDF: Framerate =
            Framerate::with_timebase(60, NtscKind::NonDrop).unwrap();
        /// 59.94 NTSC drop-frame.
        pub static ref F59_94_DF: Framerate = Framerate::with_timebase(60, NtscKind::Drop).unwrap();
        /// 60 fps.
        pub static ref F60: Framerate = Framerate::with_timebase(60, NtscKind::None).unwrap();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NtscKind::None, false)]
    #[case(NtscKind::NonDrop, true)]
    #[case(NtscKind::Drop, true)]
    fn test_is_ntsc(#[case] value: NtscKind, #[case] expected: bool) {
        assert_eq!(expected, value.is_ntsc());
    }

    #[test]
    fn test_with_playback_float_23_98() {
        let rate = Framerate::with_playback(23.98, NtscKind::NonDrop).unwrap();
        assert_eq!(Rational::new(24000.into(), 1001.into()), *rate.playback());
        assert_eq!(Rational::from_integer(24.into()), rate.timebase());
        assert_eq!(NtscKind::NonDrop, rate.ntsc());
    }

    #[test]
    fn test_with_timebase_24_ntsc() {
        let rate = Framerate::with_timebase(24, NtscKind::NonDrop).unwrap();
        assert_eq!(Rational::new(24000.into(), 1001.into()), *rate.playback());
    }

    #[test]
    fn test_with_playback_whole_number_ntsc_rejected() {
        let err = Framerate::with_playback(24, NtscKind::NonDrop);
        assert!(err.is_err());
    }

    #[test]
    fn test_with_playback_coerced_whole_number_ntsc() {
        let rate = Framerate::with_playback_coerced(24, NtscKind::NonDrop).unwrap();
        assert_eq!(Rational::new(24000.into(), 1001.into()), *rate.playback());
    }

    #[test]
    fn test_drop_frame_requires_multiple_of_30() {
        let err = Framerate::with_playback(23.98, NtscKind::Drop);
        assert!(err.is_err());
    }

    #[test]
    fn test_non_ntsc_arbitrary_rate() {
        let rate = Framerate::with_playback(48, NtscKind::None).unwrap();
        assert_eq!(Rational::from_integer(48.into()), *rate.playback());
        assert_eq!(Rational::from_integer(48.into()), rate.timebase());
    }

    #[test]
    fn test_display() {
        assert_eq!("23.98 NTSC", rates::F23_98.to_string());
        assert_eq!("24", rates::F24.to_string());
        assert_eq!("29.97 NTSC DF", rates::F29_97_DF.to_string());
        assert_eq!("29.97 NTSC NDF", rates::F29_97_NDF.to_string());
        assert_eq!("47.95 NTSC", rates::F47_95.to_string());
        assert_eq!("59.94 NTSC DF", rates::F59_94_DF.to_string());
        assert_eq!("59.94 NTSC NDF", rates::F59_94_NDF.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let rate = rates::F29_97_DF.clone();
        let json = serde_json::to_string(&rate).unwrap();
        let back: Framerate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, back);
    }
}
