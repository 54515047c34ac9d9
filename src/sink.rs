//! Destinations for rendered records.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

/// Writes every record to a persisted destination and to a live observer.
#[derive(Debug)]
pub struct Sink<P: Write, L: Write> {
    persisted: P,
    live: L,
    records: u64,
}

impl Sink<BufWriter<File>, Stdout> {
    /// Create (or truncate) the file at `path` and echo to stdout.
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self, io::Error> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!("writing fixes to {}", path.display());
        Ok(Sink::new(BufWriter::new(file), io::stdout()))
    }
}

impl<P: Write, L: Write> Sink<P, L> {
    pub fn new(persisted: P, live: L) -> Self {
        Sink {
            persisted,
            live,
            records: 0,
        }
    }

    /// Write `record` to both destinations, persisted one first.
    pub fn emit(&mut self, record: &str) -> Result<(), io::Error> {
        self.persisted.write_all(record.as_bytes())?;
        self.live.write_all(record.as_bytes())?;
        self.records += 1;
        Ok(())
    }

    /// Number of records emitted.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flush both destinations and hand them back.
    pub fn finish(mut self) -> Result<(P, L), io::Error> {
        self.persisted.flush()?;
        self.live.flush()?;
        Ok((self.persisted, self.live))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_to_both() {
        let mut sink = Sink::new(Vec::new(), Vec::new());
        sink.emit("one\n").unwrap();
        sink.emit("two\n").unwrap();
        assert_eq!(sink.records(), 2);

        let (persisted, live) = sink.finish().unwrap();
        assert_eq!(persisted, b"one\ntwo\n".to_vec());
        assert_eq!(live, persisted);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_is_not_counted() {
        let mut sink = Sink::new(Broken, Vec::new());
        assert_matches!(sink.emit("x"), Err(ref e) if e.kind() == io::ErrorKind::Other);
        assert_eq!(sink.records(), 0);
        let (_, live) = sink.finish().unwrap();
        assert!(live.is_empty());
    }
}
