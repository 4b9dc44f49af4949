use std::fmt;

/// A song as scraped from a station page.
///
/// Both fields are trimmed and lowercased on construction, so equality,
/// dedup and the serialized form all agree on one normalization and a
/// station re-rendering the same track with different casing is not
/// mistaken for a new song.
///
/// A `Song` is never built from empty extraction results; scrapers that
/// cannot fill both fields return no result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    title: String,
    artist: String,
}

impl Song {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.trim().to_lowercase(),
            artist: artist.trim().to_lowercase(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }
}

impl fmt::Display for Song {
    /// Canonical form: title and artist separated by a TAB.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.title, self.artist)
    }
}
