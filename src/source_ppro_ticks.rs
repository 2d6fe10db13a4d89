use std::fmt::Debug;

use num::BigInt;

use crate::errors::ParseError;
use crate::framerate::Framerate;

/// The result type of [`PremiereTicksSource::to_ticks`].
pub type PremiereTicksSourceResult = Result<BigInt, ParseError>;

/// Types implementing this trait can be converted into the number of Adobe
/// Premiere Pro ticks elapsed since `00:00:00:00`.
pub trait PremiereTicksSource: Debug {
    fn to_ticks(&self, rate: &Framerate) -> PremiereTicksSourceResult;
}

impl<T> PremiereTicksSource for &T
where
    T: PremiereTicksSource,
{
    fn to_ticks(&self, rate: &Framerate) -> PremiereTicksSourceResult {
        (*self).to_ticks(rate)
    }
}

impl PremiereTicksSource for BigInt {
    fn to_ticks(&self, _: &Framerate) -> PremiereTicksSourceResult {
        Ok(self.clone())
    }
}

macro_rules! impl_ppro_ticks_source_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl PremiereTicksSource for $t {
                fn to_ticks(&self, _: &Framerate) -> PremiereTicksSourceResult {
                    Ok(BigInt::from(*self))
                }
            }
        )+
    };
}

impl_ppro_ticks_source_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

/// A wrapper marking an integer as an explicit Premiere-ticks value, useful at
/// call sites where a bare integer would otherwise be ambiguous with a frame
/// count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PremiereTicks(pub i64);

impl PremiereTicksSource for PremiereTicks {
    fn to_ticks(&self, rate: &Framerate) -> PremiereTicksSourceResult {
        self.0.to_ticks(rate)
    }
}
