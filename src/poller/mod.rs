pub mod emit;

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error};

use crate::domain::Song;
use crate::scrapers::NowPlayingSource;
use emit::Emitter;

/// Drives all registered stations on a fixed interval and deduplicates
/// against the last song seen per station.
///
/// The last-seen table is owned here, so independent pollers (e.g. under
/// test) never interfere with each other. It is in-memory only and dies
/// with the process.
pub struct Poller {
    stations: Vec<Box<dyn NowPlayingSource>>,
    last_seen: HashMap<String, Song>,
    interval: Duration,
}

impl Poller {
    pub fn new(stations: Vec<Box<dyn NowPlayingSource>>, interval: Duration) -> Self {
        Self {
            stations,
            last_seen: HashMap::new(),
            interval,
        }
    }

    /// One pass over every station, in registration order. A failing or
    /// empty station logs and never stops the cycle; only a song that
    /// differs from the station's last-seen entry is emitted.
    pub async fn run_cycle<W: Write>(&mut self, emitter: &mut Emitter<W>) {
        for station in &self.stations {
            let id = station.station_id();
            match station.now_playing().await {
                Err(err) => error!("ERROR while fetching from {id}: {err}"),
                Ok(None) => debug!("{id}: nothing to report"),
                Ok(Some(song)) => {
                    if self.last_seen.get(id) == Some(&song) {
                        continue;
                    }
                    self.last_seen.insert(id.to_string(), song.clone());
                    if let Err(err) = emitter.emit(Utc::now(), id, &song) {
                        error!("failed to write record for {id}: {err}");
                    }
                }
            }
        }
    }

    /// Continuous mode: cycle, sleep, repeat. Never returns; process
    /// termination is the only stop mechanism.
    pub async fn run_forever<W: Write>(&mut self, emitter: &mut Emitter<W>) {
        loop {
            self.run_cycle(emitter).await;
            tokio::time::sleep(self.interval).await;
        }
    }
}
