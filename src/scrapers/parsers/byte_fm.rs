use scraper::Html;
use serde::Deserialize;
use tracing::warn;

use crate::common::constants::BYTE_FM;
use crate::common::error::Result;
use crate::domain::Song;
use crate::scrapers::PlaylistParser;

/// ByteFM delivers its song history as JSON; the newest entry is an
/// HTML-wrapped "Artist – Title" string with an entity-encoded dash.
/// A literal title of "Nachrichten" marks a news break, not a song.
pub struct ByteFmParser;

#[derive(Deserialize)]
struct SongHistory {
    tracks: Vec<String>,
}

impl PlaylistParser for ByteFmParser {
    fn station_id(&self) -> &'static str {
        BYTE_FM
    }

    fn url(&self) -> &'static str {
        "https://byte.fm/ajax/song-history"
    }

    fn parse_now_playing(&self, body: &str) -> Result<Option<Song>> {
        let history: SongHistory = serde_json::from_str(body)?;
        let raw = match history.tracks.first() {
            Some(raw) => raw.replace("&ndash;", "-"),
            None => {
                warn!("no track on {}: empty song history", BYTE_FM);
                return Ok(None);
            }
        };

        // Strip the wrapping markup, then split into artist and title.
        let fragment = Html::parse_fragment(&raw);
        let text: String = fragment.root_element().text().collect();
        let (artist, title) = match text.split_once('-') {
            Some(parts) => parts,
            None => {
                warn!("no track on {}: no separator in {:?}", BYTE_FM, text.trim());
                return Ok(None);
            }
        };

        let artist = artist.trim();
        let title = title.trim();
        if artist.is_empty() || title.is_empty() {
            warn!("no track on {}: empty field in {:?}", BYTE_FM, text.trim());
            return Ok(None);
        }
        if title.to_lowercase() == "nachrichten" {
            return Ok(None);
        }
        Ok(Some(Song::new(title, artist)))
    }
}
