//! Rendering a frame count / seconds value back to each external string
//! representation.

use num::{BigInt, ToPrimitive};

use crate::framerate::{Framerate, NtscKind};
use crate::rational::Rational;
use crate::rounding::RoundingMode;
use crate::sections::Sections;

/// Renders a frame count as a SMPTE timecode string at `rate`, applying the
/// drop-frame label adjustment and using `;` as the final separator iff
/// `rate.ntsc() == NtscKind::Drop`.
pub fn format_timecode(frame_count: &BigInt, rate: &Framerate) -> String {
    let sections = Sections::from_frame_count(frame_count, rate);
    let sep = if rate.ntsc() == NtscKind::Drop { ';' } else { ':' };

    let mut out = String::new();
    if sections.negative {
        out.push('-');
    }
    out.push_str(&format!(
        "{:02}:{:02}:{:02}{}{:02}",
        sections.hours, sections.minutes, sections.seconds, sep, sections.frames
    ));
    out
}

/// Renders a rational seconds value as a runtime string (`[-]HH:MM:SS[.frac]`).
///
/// `precision` is the maximum number of fractional digits. When `trim_zeros`
/// is true, trailing zero digits beyond the first fractional digit are
/// dropped (but a bare `.0` is always kept rather than an empty fractional
/// part); when false the fractional part is zero-padded out to `precision`
/// digits.
pub fn format_runtime(seconds: &Rational, precision: usize, trim_zeros: bool) -> String {
    let negative = seconds.is_negative();
    let magnitude = seconds.abs();

    let whole = magnitude.round(RoundingMode::Floor);
    let whole_i64 = whole.to_i64().expect("runtime seconds out of range");

    let hours = whole_i64 / 3600;
    let minutes = (whole_i64 % 3600) / 60;
    let secs = whole_i64 % 60;

    let fraction = magnitude - Rational::from_integer(whole);
    let frac_digits = render_fraction(&fraction, precision, trim_zeros);

    format!(
        "{}{:02}:{:02}:{:02}{}",
        if negative { "-" } else { "" },
        hours,
        minutes,
        secs,
        frac_digits,
    )
}

fn render_fraction(fraction: &Rational, precision: usize, trim_zeros: bool) -> String {
    let mut digits = String::new();
    let mut remainder = fraction.clone();
    let ten = Rational::from_integer(BigInt::from(10));

    for _ in 0..precision {
        remainder = remainder * ten.clone();
        let digit = remainder.round(RoundingMode::Floor);
        digits.push_str(&digit.to_string());
        remainder = remainder - Rational::from_integer(digit);
    }

    if trim_zeros {
        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }
    }

    format!(".{}", digits)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::framerate::rates;
    use num::BigInt;

    #[test]
    fn test_format_timecode_non_drop() {
        let tc = format_timecode(&BigInt::from(86_400), &rates::F23_98);
        assert_eq!("01:00:00:00", tc);
    }

    #[test]
    fn test_format_timecode_drop_uses_semicolon() {
        let tc = format_timecode(&BigInt::from(0), &rates::F29_97_DF);
        assert_eq!("00:00:00;00", tc);
    }

    #[test]
    fn test_format_timecode_negative() {
        let tc = format_timecode(&BigInt::from(-24), &rates::F24);
        assert_eq!("-00:00:01:00", tc);
    }

    #[test]
    fn test_format_runtime() {
        let seconds = Rational::new(BigInt::from(18018), BigInt::from(5));
        assert_eq!("01:00:03.6", format_runtime(&seconds, 9, true));
    }

    #[test]
    fn test_format_runtime_whole_seconds_keeps_dot_zero() {
        let seconds = Rational::from_integer(BigInt::from(5));
        assert_eq!("00:00:05.0", format_runtime(&seconds, 9, true));
    }

    #[test]
    fn test_format_runtime_no_trim() {
        let seconds = Rational::new(BigInt::from(1), BigInt::from(2));
        assert_eq!("00:00:00.500000000", format_runtime(&seconds, 9, false));
    }
}
