pub mod parsers;
pub mod select;

use crate::common::constants::*;
use crate::common::error::Result;
use crate::domain::Song;
use crate::infra::http_client::FetchClient;

use parsers::{ByteFmParser, Swr3Parser};

/// A registered station able to report its currently playing song.
#[async_trait::async_trait]
pub trait NowPlayingSource: Send + Sync {
    /// Stable station identifier, as printed in emitted records.
    fn station_id(&self) -> &'static str;

    /// One fetch-and-parse round. `Ok(None)` means the page did not contain
    /// a usable song this time (structural mismatch, news break, empty
    /// playlist); `Err` is reserved for transport and decode failures.
    async fn now_playing(&self) -> Result<Option<Song>>;
}

/// Trait for station-specific extraction logic.
///
/// A parser carries the structural knowledge about one station: where to
/// fetch from, which query parameters the host expects, and where in the
/// resulting document the currently playing song is located.
pub trait PlaylistParser: Send + Sync {
    fn station_id(&self) -> &'static str;

    fn url(&self) -> &'static str;

    /// Extra query parameters for the fetch. Some stations key their
    /// server-side playlist buffer on the current minute of the hour.
    fn query_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Parse a fetched document into the currently playing song.
    fn parse_now_playing(&self, body: &str) -> Result<Option<Song>>;
}

/// Generic scraper pairing the shared HTTP client with a station parser.
pub struct StationScraper {
    client: FetchClient,
    parser: Box<dyn PlaylistParser>,
}

impl StationScraper {
    pub fn new(client: FetchClient, parser: Box<dyn PlaylistParser>) -> Self {
        Self { client, parser }
    }
}

#[async_trait::async_trait]
impl NowPlayingSource for StationScraper {
    fn station_id(&self) -> &'static str {
        self.parser.station_id()
    }

    async fn now_playing(&self) -> Result<Option<Song>> {
        let body = self
            .client
            .get_text(self.parser.url(), &self.parser.query_params())
            .await?;
        self.parser.parse_now_playing(&body)
    }
}

/// Factory function to create the scraper for one station identifier.
pub fn create_station(
    station_id: &str,
    client: FetchClient,
) -> Option<Box<dyn NowPlayingSource>> {
    let parser: Box<dyn PlaylistParser> = match station_id {
        FM4 => Box::new(parsers::rules::fm4()),
        SWR3 => Box::new(Swr3Parser),
        ANTENNE_BAYERN => Box::new(parsers::rules::antenne_bayern()),
        BAYERN3 => Box::new(parsers::rules::bayern3()),
        DETEKTOR_FM => Box::new(parsers::rules::detektor_fm()),
        BYTE_FM => Box::new(ByteFmParser),
        RADIO7 => Box::new(parsers::rules::radio7()),
        DONAU3_FM => Box::new(parsers::rules::donau3_fm()),
        FRITZ => Box::new(parsers::rules::fritz()),
        RADIO_KOELN => Box::new(parsers::rules::radio_koeln()),
        EINSLIVE => Box::new(parsers::rules::einslive()),
        _ => return None,
    };
    Some(Box::new(StationScraper::new(client, parser)))
}

/// All registered stations, in registration order.
pub fn all_stations(client: &FetchClient) -> Vec<Box<dyn NowPlayingSource>> {
    ALL_STATIONS
        .iter()
        .map(|id| create_station(id, client.clone()).expect("registered station"))
        .collect()
}
