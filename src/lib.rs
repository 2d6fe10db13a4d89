/*!
<p align="center">A SMPTE timecode and framerate library for Rust</p>
<p align="center">
    <a href="https://crates.io/crates/vtc"><img src="https://img.shields.io/crates/v/vtc" alt="crates.io version" height="18"></a>
    <a href="https://docs.rs/vtc"><img src="https://docs.rs/vtc/badge.svg" alt="Documentation"></a>
</p>

# Overview

`vtc` is inspired by years of scripting workflow solutions in a Hollywood cutting
room. It aims to capture all the ways in which timecode is used throughout the
industry so users can spend more time on their workflow logic, and less time
handling the corner-cases of parsing and calculating timecode.

Every point in time is held internally as an exact rational number of seconds —
never a binary float — so arithmetic and repeated rebasing never drift.

## Demo

```rust,ignore
use vtc::{rates, FilmFormat, Framerate, NtscKind, RoundingMode, Timestamp};

// with_frames is the natural constructor for timecode-like input, since
// timecode is a human-readable way to represent a frame count.
let ts = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();

assert_eq!(ts.timecode(RoundingMode::Closest).unwrap(), "01:00:00:00");
assert_eq!(ts.runtime(9, true), "01:00:03.6");
assert_eq!(ts.frames(RoundingMode::Closest).unwrap(), 86_400.into());
assert_eq!(
    ts.premiere_ticks(RoundingMode::Closest).unwrap(),
    915_372_057_600_000i64.into(),
);
assert_eq!(
    ts.feet_and_frames(FilmFormat::FF35mm4Perf, RoundingMode::Closest)
        .unwrap()
        .to_string(),
    "5400+00",
);

// Partial timecode fills in from the least-significant field.
let partial = Timestamp::with_frames("3:12", rates::F23_98.clone()).unwrap();
assert_eq!(partial.timecode(RoundingMode::Closest).unwrap(), "00:00:03:12");

// Drop-frame labels that name a dropped frame are a definitive parse error,
// not an ambiguity the parser tries to recover from.
let err = Timestamp::with_frames("00:01:00;01", rates::F29_97_DF.clone());
assert!(err.is_err());

// Arithmetic composes seconds exactly, even across differing rates, then
// snaps the result to a frame boundary at the left operand's rate.
let a = Timestamp::with_frames("01:00:00:00", rates::F23_98.clone()).unwrap();
let b = Timestamp::with_frames("00:00:00:02", rates::F47_95.clone()).unwrap();
let sum = a.add(&b, RoundingMode::Closest).unwrap();
assert_eq!(sum.timecode(RoundingMode::Closest).unwrap(), "01:00:00:01");

// Rebasing keeps the frame count and recomputes seconds at the new rate.
let dropframe = Timestamp::with_frames("01:00:00;00", rates::F29_97_DF.clone()).unwrap();
let rebased = dropframe.rebase(rates::F29_97_NDF.clone()).unwrap();
assert_eq!(rebased.timecode(RoundingMode::Closest).unwrap(), "00:59:56:12");

// Arbitrary framerates work too, not just the built-in constants.
let arbitrary = Framerate::with_playback(48, NtscKind::None).unwrap();
let custom = Timestamp::with_frames("01:00:00:00", arbitrary).unwrap();
assert_eq!(custom.frames(RoundingMode::Closest).unwrap(), 172_800.into());
```

## Features

- SMPTE conventions: NTSC fractional rates, drop-frame and non-drop-frame labeling.
- Representations: SMPTE timecode, integer frame count, runtime string, exact
  rational seconds, Adobe Premiere ticks, feet-and-frames (35mm 4-perf, 35mm
  2-perf, 16mm).
- Operations: comparison, add, subtract, multiply, divide, divrem, rem,
  negate, absolute value, rebase — each with an explicit, caller-selectable
  rounding mode.
- Flexible parsing: partial timecodes (`1:12`), partial runtimes (`1.5`),
  negative values, either `:` or `;` as a section separator on input.
- Built-in constants for the common broadcast framerates.

## Goals

- Parse and format every timecode representation in the table above.
- A clean, idiomatic Rust API built on exact arbitrary-precision rationals.
- Support every arithmetic operation that makes sense for timecode.

## Non-Goals

- Real-time timecode generators or frame-accurate media decoding.

# Timecode: a history

If you're already familiar with timecode, its history, and its flavors, feel
free to skip this section.

Back in the days of film, a running strip of numbers ran along the edge of the
film stock to uniquely identify each frame, called
[keycode](https://en.wikipedia.org/wiki/Keykode).

Keycode was essential to the film editing process. The raw negative of a film
is irreplaceable: you lose quality each time you make a copy. Editing film is
necessarily a
[destructive process](https://nofilmschool.com/2017/06/editing-on-a-flatbed),
and often required multiple iterations. It would be just a tad nerve-wracking
to take a pair of scissors and some glue to the one-of-a-kind film reels
straight out of the camera on set, then run it over and over through a
flatbed.

To avoid potential disaster, editors made their cut of the film using copies
of the raw negative, called a [work print](https://en.wikipedia.org/wiki/Workprint),
allowing the editor to work without fear of sinking a project from slicing,
dicing, and wearing at the film.

When the edit was complete, it was necessary to know *exactly* where the edits
had been made, so it could be recreated with the raw negative for finishing. A
*cut list* would be written out, with the exact reels and keycodes for every
cut, and would be used to make an exact duplicate of the editor's work print
with the mint condition raw negative.

In video and digital filmmaking, the same approach is used. Massive raw files
from a RED, ARRI, Sony, or other cinema camera are rendered down to more
manageable files an editor's machine won't choke on. Once the edit is
complete, the raw files are re-assembled using a digital cutlist on a powerful
machine for finishing out the film.

In film, editors referenced *keycode* to know exactly what frame was being
displayed on screen at any given time. In digital video, the same role is
played by *timecode*.

For a technical deep-dive into the many flavors of timecode, see
[Frame.io's blog post](https://blog.frame.io/2017/07/17/timecode-and-frame-rates)
on the subject.
!*/

mod consts;
mod drop_frame;
mod errors;
mod feet_and_frames;
mod format;
mod framerate;
mod framerate_parse;
mod rational;
mod rounding;
mod sections;
mod source_feet_frames;
mod source_frames;
mod source_ppro_ticks;
mod source_seconds;
mod timestamp;

pub use errors::{ArithmeticError, FramerateError, ParseError, RationalError};
pub use feet_and_frames::{FeetAndFrames, FilmFormat};
pub use framerate::{rates, Framerate, NtscKind};
pub use framerate_parse::{FramerateSource, FramerateSourceResult};
pub use rational::Rational;
pub use rounding::RoundingMode;
pub use sections::Sections;
pub use source_feet_frames::{FeetAndFramesSource, FeetAndFramesSourceResult, FeetAndFramesStr};
pub use source_frames::{FramesSource, FramesSourceResult, SmpteTimecodeStr};
pub use source_ppro_ticks::{PremiereTicks, PremiereTicksSource, PremiereTicksSourceResult};
pub use source_seconds::{RuntimeStr, SecondsSource, SecondsSourceResult};
pub use timestamp::{raising, SecondsOptions, Timestamp};
