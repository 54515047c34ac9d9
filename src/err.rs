use std::error::Error;
use std::io;

use lexer::SentenceKind;

quick_error! {
    #[derive(Debug)]
    pub enum ParseError {
        MalformedSentence(kind: SentenceKind, index: usize, len: usize) {
            description("Malformed sentence")
            display("{} sentence has {} fields, field {} is required", kind, len, index)
        }
        MissingAzimuth(available: usize) {
            description("Missing azimuth")
            display("Fix is complete but only {} azimuths recorded", available)
        }
        Io(err: io::Error) {
            from()
            description(err.description())
            display("Encountered I/O error while reading sentences: {}", err)
            cause(err)
        }
    }
}

// Quick error can't handle from for tuples
impl From<(SentenceKind, usize, usize)> for ParseError {
    fn from((kind, index, len): (SentenceKind, usize, usize)) -> Self {
        ParseError::MalformedSentence(kind, index, len)
    }
}

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum FormatError {
        ShortDate(date: String) {
            description("Date too short")
            display("Date \"{}\" is not in the ddmmyy format", date)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum RunError {
        Parse(err: ParseError) {
            from()
            description(err.description())
            display("Could not read sentences: {}", err)
            cause(err)
        }
        Format(err: FormatError) {
            from()
            description(err.description())
            display("Could not render fix: {}", err)
            cause(err)
        }
        Io(err: io::Error) {
            from()
            description(err.description())
            display("Encountered I/O error while writing fixes: {}", err)
            cause(err)
        }
    }
}
