use std::fmt::Debug;

use regex::Match;

use crate::consts::RUNTIME_REGEX;
use crate::consts::{big, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::ParseError;
use crate::framerate::Framerate;
use crate::rational::Rational;

/// The result type of [`SecondsSource::to_seconds`].
pub type SecondsSourceResult = Result<Rational, ParseError>;

/// Types implementing this trait can be converted into the number of
/// real-world seconds elapsed since `00:00:00:00`.
pub trait SecondsSource: Debug {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult;
}

impl<T> SecondsSource for &T
where
    T: SecondsSource,
{
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        (*self).to_seconds(rate)
    }
}

impl SecondsSource for Rational {
    fn to_seconds(&self, _: &Framerate) -> SecondsSourceResult {
        Ok(self.clone())
    }
}

impl SecondsSource for f64 {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        let rational = Rational::from_decimal_str(&format!("{}", self)).ok_or_else(|| {
            ParseError::InvalidArgument(format!("could not parse '{}' as a decimal", self))
        })?;
        rational.to_seconds(rate)
    }
}

impl SecondsSource for f32 {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        f64::from(*self).to_seconds(rate)
    }
}

impl SecondsSource for &str {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        if let Some(matched) = RUNTIME_REGEX.captures(self) {
            return parse_runtime_str(&matched, rate);
        }

        log::debug!("'{}' did not match the runtime pattern", self);
        Err(ParseError::UnrecognizedFormat)
    }
}

impl SecondsSource for String {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        self.as_str().to_seconds(rate)
    }
}

/// A wrapper that forces its string to be parsed as a runtime, rather than
/// dispatched through the general seconds-like `&str` entry point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuntimeStr<'a>(pub &'a str);

impl<'a> SecondsSource for RuntimeStr<'a> {
    fn to_seconds(&self, rate: &Framerate) -> SecondsSourceResult {
        let matched = RUNTIME_REGEX
            .captures(self.0)
            .ok_or(ParseError::UnrecognizedFormat)?;
        parse_runtime_str(&matched, rate)
    }
}

fn convert_tc_int(value: &str, section_name: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|err| {
        ParseError::InvalidArgument(format!("error converting {} to integer: {}", section_name, err))
    })
}

fn parse_runtime_str(matched: &regex::Captures, rate: &Framerate) -> SecondsSourceResult {
    let mut sections: Vec<Match> = Vec::new();
    if let Some(section) = matched.name("section1") {
        sections.push(section);
    }
    if let Some(section) = matched.name("section2") {
        sections.push(section);
    }

    let is_negative = matched.name("negative").is_some();

    let minutes: i64 = match sections.pop() {
        None => 0,
        Some(section) => convert_tc_int(section.as_str(), "minutes")?,
    };
    let hours: i64 = match sections.pop() {
        None => 0,
        Some(section) => convert_tc_int(section.as_str(), "hours")?,
    };

    let seconds_str = matched.name("seconds").unwrap().as_str();
    let mut seconds_rat = Rational::from_decimal_str(seconds_str).ok_or_else(|| {
        ParseError::InvalidArgument(format!("could not parse '{}' as a decimal", seconds_str))
    })?;

    seconds_rat = seconds_rat
        + Rational::from_integer(big(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE));

    if is_negative {
        seconds_rat = -seconds_rat;
    }

    seconds_rat.to_seconds(rate)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::framerate::rates;
    use num::BigInt;

    #[test]
    fn test_runtime_basic() {
        let seconds = "01:00:03.6".to_seconds(&rates::F23_98).unwrap();
        assert_eq!(Rational::new(BigInt::from(18018), BigInt::from(5)), seconds);
    }

    #[test]
    fn test_runtime_partial() {
        let seconds = "1:12.5".to_seconds(&rates::F24).unwrap();
        assert_eq!(Rational::new(BigInt::from(145), BigInt::from(2)), seconds);
    }

    #[test]
    fn test_runtime_negative() {
        let seconds = "-3.5".to_seconds(&rates::F24).unwrap();
        assert_eq!(Rational::new(BigInt::from(-7), BigInt::from(2)), seconds);
    }

    #[test]
    fn test_unrecognized_format() {
        assert_eq!(
            Err(ParseError::UnrecognizedFormat),
            "garbage".to_seconds(&rates::F24)
        );
    }
}
