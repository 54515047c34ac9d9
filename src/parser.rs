//! This module aggregates the sentences of a feed into fix records.
//!
//! Every recognized sentence contributes some fields and a weight to a
//! [FixAggregator](struct.FixAggregator.html). Once the accumulated
//! weight hits exactly `10` a [CompletedFix](struct.CompletedFix.html)
//! is produced from whatever the aggregator currently holds.

use arrayvec::ArrayVec;
use chrono::{NaiveDate, NaiveTime};
use std::io;

use err::ParseError;
use lexer::{self, SentenceKind};

/// Weight at which a fix is complete.
pub const COMPLETE: u32 = 10;
/// Number of azimuths reported with every fix.
pub const REPORTED_AZIMUTHS: usize = 3;

const GGA_TIME: usize = 1;
const RMC_LAT: usize = 3;
const RMC_LAT_DIR: usize = 4;
const RMC_LONG: usize = 5;
const RMC_LONG_DIR: usize = 6;
const RMC_DATE: usize = 9;
const VTG_SPEED: usize = 7;
const GSV_AZIMUTH: usize = 6;

/// The fields collected so far.
///
/// Nothing in here is ever cleared. Values survive separators as well as
/// completed fixes and `azimuths` only grows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartialFix {
    pub time: String,
    pub lat: String,
    pub lat_dir: String,
    pub long: String,
    pub long_dir: String,
    /// Date as sent, expected to be `ddmmyy`.
    pub date: String,
    /// Speed over ground.
    pub speed: String,
    /// Every azimuth seen, in order of arrival.
    pub azimuths: Vec<String>,
}

/// A snapshot of the aggregated fields, taken when the fix completed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedFix {
    /// Universal Time Coordinated, `hhmmss.sss` as sent.
    pub time: String,
    pub lat: String,
    /// `N` or `S` as sent.
    pub lat_dir: String,
    pub long: String,
    /// `E` or `W` as sent.
    pub long_dir: String,
    pub date: String,
    pub speed: String,
    /// The first three azimuths ever recorded.
    pub azimuths: [String; REPORTED_AZIMUTHS],
}

impl CompletedFix {
    /// The time of the fix, if it is a valid `hhmmss.sss` time.
    pub fn utc(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H%M%S%.f").ok()
    }

    /// The date of the fix, if it is a valid `ddmmyy` date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d%m%y").ok()
    }
}

/// What a single matched kind does to the aggregator.
#[derive(Debug)]
enum Effect<'a> {
    Time(&'a str),
    Position {
        lat: &'a str,
        lat_dir: &'a str,
        long: &'a str,
        long_dir: &'a str,
        date: &'a str,
    },
    Speed(&'a str),
    Azimuth(&'a str),
    Ignore,
}

impl<'a> Effect<'a> {
    /// Pull the fields `kind` is interested in out of `fields`.
    fn extract(kind: SentenceKind, fields: &[&'a str]) -> Result<Self, ParseError> {
        Ok(match kind {
            SentenceKind::Fix => Effect::Time(field!(fields, kind, GGA_TIME)?),
            SentenceKind::RecMinC => {
                // highest index first, a short sentence reports the date
                let date = field!(fields, kind, RMC_DATE)?;
                Effect::Position {
                    lat: field!(fields, kind, RMC_LAT)?,
                    lat_dir: field!(fields, kind, RMC_LAT_DIR)?,
                    long: field!(fields, kind, RMC_LONG)?,
                    long_dir: field!(fields, kind, RMC_LONG_DIR)?,
                    date,
                }
            }
            SentenceKind::Vector => Effect::Speed(field!(fields, kind, VTG_SPEED)?),
            SentenceKind::SatelliteView => Effect::Azimuth(field!(fields, kind, GSV_AZIMUTH)?),
            SentenceKind::Active | SentenceKind::Separator | SentenceKind::Unknown => {
                Effect::Ignore
            }
        })
    }

    #[inline]
    fn weight(&self) -> u32 {
        match self {
            Effect::Time(_) | Effect::Speed(_) | Effect::Azimuth(_) => 1,
            Effect::Position { .. } => 5,
            Effect::Ignore => 0,
        }
    }
}

/// Collects fields of consecutive sentences until a fix is complete.
#[derive(Debug, Default)]
pub struct FixAggregator {
    fix: PartialFix,
    weight: u32,
}

impl FixAggregator {
    pub fn new() -> Self {
        FixAggregator::default()
    }

    /// The weight accumulated since the last separator or completed fix.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The fields collected so far.
    pub fn partial(&self) -> &PartialFix {
        &self.fix
    }

    /// Feed a single line of the feed.
    ///
    /// Returns the completed fix if this line brought the weight to
    /// exactly `COMPLETE`. A line that carries a tag but lacks one of its
    /// fields fails with `ParseError::MalformedSentence` and leaves the
    /// aggregator untouched, including the effects of any other tag on
    /// the same line.
    pub fn feed(&mut self, line: &str) -> Result<Option<CompletedFix>, ParseError> {
        let kinds = lexer::classify(line);
        debug!("{:?}: {}", &kinds[..], line);
        if kinds.first() == Some(&SentenceKind::Separator) {
            trace!("separator, dropping weight {}", self.weight);
            self.weight = 0;
            return Ok(None);
        }

        let fields = lexer::split(line);
        let mut effects = ArrayVec::<[Effect; 5]>::new();
        for kind in kinds.iter() {
            effects.push(Effect::extract(*kind, &fields)?);
        }
        for effect in effects {
            self.apply(effect);
        }

        if self.weight != COMPLETE {
            return Ok(None);
        }
        self.weight = 0;
        self.snapshot().map(Some)
    }

    fn apply(&mut self, effect: Effect) {
        self.weight = self.weight.saturating_add(effect.weight());
        match effect {
            Effect::Time(time) => self.fix.time = time.to_owned(),
            Effect::Position {
                lat,
                lat_dir,
                long,
                long_dir,
                date,
            } => {
                self.fix.lat = lat.to_owned();
                self.fix.lat_dir = lat_dir.to_owned();
                self.fix.long = long.to_owned();
                self.fix.long_dir = long_dir.to_owned();
                self.fix.date = date.to_owned();
            }
            Effect::Speed(speed) => self.fix.speed = speed.to_owned(),
            Effect::Azimuth(azimuth) => self.fix.azimuths.push(azimuth.to_owned()),
            Effect::Ignore => (),
        }
    }

    /// Take a copy of the current fields as a completed fix.
    fn snapshot(&self) -> Result<CompletedFix, ParseError> {
        let recorded = self.fix.azimuths.len();
        if recorded < REPORTED_AZIMUTHS {
            return Err(ParseError::MissingAzimuth(recorded));
        }
        let az = &self.fix.azimuths;
        let fix = CompletedFix {
            time: self.fix.time.clone(),
            lat: self.fix.lat.clone(),
            lat_dir: self.fix.lat_dir.clone(),
            long: self.fix.long.clone(),
            long_dir: self.fix.long_dir.clone(),
            date: self.fix.date.clone(),
            speed: self.fix.speed.clone(),
            azimuths: [az[0].clone(), az[1].clone(), az[2].clone()],
        };
        debug!(
            "fix complete at {:?} on {:?}",
            fix.utc(),
            fix.naive_date()
        );
        Ok(fix)
    }
}

/// Reads a feed line by line and yields every completed fix.
///
/// Errors other than `ParseError::Io` only concern a single line or fix,
/// iteration may simply continue after them.
#[derive(Debug)]
pub struct FixParser<R: io::BufRead> {
    input: R,
    aggregator: FixAggregator,
    buf: Vec<u8>,
    lines: u64,
    done: bool,
}

impl<R: io::BufRead> FixParser<R> {
    /// Create a new parser that reads from `input`.
    pub fn new(input: R) -> Self {
        FixParser {
            input,
            aggregator: FixAggregator::new(),
            buf: Vec::new(),
            lines: 0,
            done: false,
        }
    }

    /// Number of lines read so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn aggregator(&self) -> &FixAggregator {
        &self.aggregator
    }

    /// Read lines until a fix completes.
    /// Returns `None` once the input is exhausted.
    pub fn read_fix(&mut self) -> Result<Option<CompletedFix>, ParseError> {
        while let Some(line) = self.read_line()? {
            self.lines += 1;
            if let Some(fix) = self.aggregator.feed(&line)? {
                return Ok(Some(fix));
            }
        }
        Ok(None)
    }

    /// Read the next line without its line ending.
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>, io::Error> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: io::BufRead> Iterator for FixParser<R> {
    type Item = Result<CompletedFix, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.read_fix();
        if let Err(ParseError::Io(_)) = result {
            self.done = true;
        }
        try_some!(result).map(Ok)
    }
}
