use scraper::{Html, Selector};
use tracing::warn;

use crate::common::constants::SWR3;
use crate::common::error::Result;
use crate::domain::Song;
use crate::scrapers::select::own_texts;
use crate::scrapers::PlaylistParser;

/// SWR3 playlist page. Inside the now-playing list item the artist is
/// wrapped in either a `<strong>` or an `<a>`, and the title is the
/// trailing text of the same `<li>`, so the two have to be paired per
/// list item rather than extracted with independent selectors.
pub struct Swr3Parser;

impl PlaylistParser for Swr3Parser {
    fn station_id(&self) -> &'static str {
        SWR3
    }

    fn url(&self) -> &'static str {
        "http://www.swr3.de/musik/playlisten"
    }

    fn parse_now_playing(&self, body: &str) -> Result<Option<Song>> {
        let doc = Html::parse_document(body);
        let li_selector = Selector::parse("ul#nowplaying li").unwrap();
        let strong_selector = Selector::parse("strong").unwrap();
        let anchor_selector = Selector::parse("a").unwrap();

        for li in doc.select(&li_selector) {
            let artist = li
                .select(&strong_selector)
                .next()
                .or_else(|| li.select(&anchor_selector).next())
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|s| !s.is_empty());
            let title = own_texts(&li).pop();
            if let (Some(artist), Some(title)) = (artist, title) {
                return Ok(Some(Song::new(&title, &artist)));
            }
        }
        warn!("no track on {}: no usable now-playing list item", SWR3);
        Ok(None)
    }
}
