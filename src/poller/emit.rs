use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::domain::Song;

/// ISO-8601 UTC with a space between date and time.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Writes emitted records as tab-separated lines, flushing after every
/// line so downstream pipes see songs as they are detected.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, at: DateTime<Utc>, station_id: &str, song: &Song) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            at.format(TIMESTAMP_FORMAT),
            station_id,
            song
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
