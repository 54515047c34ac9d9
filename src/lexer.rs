//! Splitting of sentence lines into fields and tagging of lines by the
//! sentence kinds they contain.

use arrayvec::ArrayVec;

use std::fmt;

/// Marker that separates groups of sentences in the feed.
pub const SEPARATOR: &str = "------------------";

const TAGGED_KINDS: usize = 5;

/// The kinds of lines the feed may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// `GPGGA`, global positioning system fix data.
    Fix,
    /// `GPRMC`, recommended minimum specific data.
    RecMinC,
    /// `GPVTG`, track made good and ground speed.
    Vector,
    /// `GPGSA`, dilution of precision and active satellites.
    Active,
    /// `GPGSV`, satellites in view.
    SatelliteView,
    Separator,
    Unknown,
}

/// Tagged kinds in the order their effects are applied.
const TAGGED: [SentenceKind; TAGGED_KINDS] = [
    SentenceKind::Fix,
    SentenceKind::RecMinC,
    SentenceKind::Vector,
    SentenceKind::Active,
    SentenceKind::SatelliteView,
];

impl SentenceKind {
    /// The substring that identifies a line of this kind, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            SentenceKind::Fix => Some("GPGGA"),
            SentenceKind::RecMinC => Some("GPRMC"),
            SentenceKind::Vector => Some("GPVTG"),
            SentenceKind::Active => Some("GPGSA"),
            SentenceKind::SatelliteView => Some("GPGSV"),
            SentenceKind::Separator | SentenceKind::Unknown => None,
        }
    }

    #[inline]
    fn matches(&self, line: &str) -> bool {
        match self.tag() {
            Some(tag) => line.contains(tag),
            None => false,
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None if *self == SentenceKind::Separator => f.write_str("separator"),
            None => f.write_str("unknown"),
        }
    }
}

/// Every kind a single line was found to be.
///
/// A separator line is only ever `[Separator]` and a line without any
/// tag is `[Unknown]`. Otherwise it holds each matching tagged kind,
/// in application order. A line may carry more than one tag.
pub type Classification = ArrayVec<[SentenceKind; TAGGED_KINDS]>;

/// Split `line` into its comma separated fields.
///
/// Empty fields between two commas are kept, a line ending in a comma
/// does not produce a trailing empty field and an empty line has no
/// fields at all. Whitespace is left untouched.
pub fn split(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    if line.is_empty() || line.ends_with(',') {
        fields.pop();
    }
    fields
}

/// Tag `line` with the kinds it contains.
pub fn classify(line: &str) -> Classification {
    let mut kinds = Classification::new();
    if line.contains(SEPARATOR) {
        kinds.push(SentenceKind::Separator);
        return kinds;
    }

    kinds.extend(TAGGED.iter().cloned().filter(|k| k.matches(line)));
    if kinds.is_empty() {
        kinds.push(SentenceKind::Unknown);
    }
    kinds
}
