//! Aggregates the sentences of an NMEA 0183 feed into fix records.
//!
//! Lines of the feed are tagged by the `GPGGA`, `GPRMC`, `GPVTG`, `GPGSA`
//! and `GPGSV` substrings they contain. Their fields are collected until
//! enough of them are known for a fix, which is then rendered as text and
//! written to a file and to stdout.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod config;
pub mod err;
#[macro_use]
mod macros;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod sink;

pub use config::Config;
pub use err::{FormatError, ParseError, RunError};
pub use format::render;
pub use lexer::{classify, split, SentenceKind};
pub use parser::{CompletedFix, FixAggregator, FixParser};
pub use sink::Sink;

use std::fs::File;
use std::io::{self, BufReader, Write};

/// Counters of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the feed.
    pub lines: u64,
    /// Records written.
    pub records: u64,
    /// Lines skipped because a field was missing.
    pub skipped_lines: u64,
    /// Completed fixes that could not be turned into a record.
    pub dropped_records: u64,
}

/// Parse every line of `input` and emit a record for each completed fix.
///
/// Malformed lines and fixes that cannot be rendered are logged and
/// skipped. Failing to read `input` or to write to `sink` ends the run.
pub fn process<R, P, L>(input: R, sink: &mut Sink<P, L>) -> Result<RunSummary, RunError>
where
    R: io::BufRead,
    P: Write,
    L: Write,
{
    let mut parser = FixParser::new(input);
    let mut summary = RunSummary::default();

    while let Some(result) = parser.next() {
        let fix = match result {
            Ok(fix) => fix,
            Err(ParseError::MalformedSentence(kind, index, len)) => {
                warn!(
                    "line {}: skipping {} sentence, field {} of {} missing",
                    parser.lines(),
                    kind,
                    index,
                    len
                );
                summary.skipped_lines += 1;
                continue;
            }
            Err(e @ ParseError::MissingAzimuth(..)) => {
                warn!("line {}: dropping fix: {}", parser.lines(), e);
                summary.dropped_records += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match render(&fix) {
            Ok(record) => sink.emit(&record)?,
            Err(e) => {
                warn!("line {}: dropping fix: {}", parser.lines(), e);
                summary.dropped_records += 1;
            }
        }
    }

    summary.lines = parser.lines();
    summary.records = sink.records();
    Ok(summary)
}

/// Run over the files named by `config`.
///
/// The output file is always created, even if the input does not exist.
/// A missing input is not an error, it just produces no records.
pub fn run(config: &Config) -> Result<RunSummary, RunError> {
    let mut sink = Sink::create(&config.output)?;

    let summary = match File::open(&config.input) {
        Ok(file) => {
            info!("reading sentences from {}", config.input.display());
            process(BufReader::new(file), &mut sink)?
        }
        Err(e) => {
            warn!("cannot open {}: {}", config.input.display(), e);
            RunSummary::default()
        }
    };
    sink.finish()?;

    info!(
        "{} lines read, {} records written, {} lines skipped, {} fixes dropped",
        summary.lines, summary.records, summary.skipped_lines, summary.dropped_records
    );
    Ok(summary)
}
