//! Rule configurations for the stations whose extraction is purely
//! selector-chain plus pick-policy. Disambiguation policies are noted per
//! station; they encode how each page orders its playlist.

use crate::common::constants::*;
use crate::scrapers::select::{Pick, RuleParser, TextRule};

/// ORF track service. The page lists the recent tracks chronologically;
/// the last tracktitle/artist pair is the one on air.
pub fn fm4() -> RuleParser {
    RuleParser {
        station_id: FM4,
        url: "http://hop.orf.at/img-trackservice/fm4.html",
        title: TextRule {
            selectors: &["span.tracktitle"],
            own_text: false,
            pick: Pick::Last,
        },
        artist: TextRule {
            selectors: &["span.artist"],
            own_text: false,
            pick: Pick::Last,
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Song search page; the first hit is the current one.
pub fn antenne_bayern() -> RuleParser {
    RuleParser {
        station_id: ANTENNE_BAYERN,
        url: "http://www.antenne.de/musik/song-suche.html",
        title: TextRule {
            selectors: &["h2.song_title a"],
            own_text: false,
            pick: Pick::First,
        },
        artist: TextRule {
            selectors: &["p.artist a"],
            own_text: false,
            pick: Pick::First,
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Playlist research form showing the last couple of songs as a flat
/// span list; the tail of the list is the most recent title/artist pair.
pub fn bayern3() -> RuleParser {
    RuleParser {
        station_id: BAYERN3,
        url: "https://www.br.de/radio/bayern-3/bayern-3-playlist-musiktitel-recherche-100.html",
        title: TextRule {
            selectors: &["li.title span"],
            own_text: false,
            pick: Pick::LastButOne,
        },
        artist: TextRule {
            selectors: &["li.title span"],
            own_text: false,
            pick: Pick::Last,
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Now-playing widget on the front page. The second span holds the title,
/// which sometimes embeds a slash-delimited suffix to strip.
pub fn detektor_fm() -> RuleParser {
    RuleParser {
        station_id: DETEKTOR_FM,
        url: "http://detektor.fm/",
        title: TextRule {
            selectors: &["div.nowplaying.nowplaying-musikstream.hide.white span"],
            own_text: false,
            pick: Pick::Nth(1),
        },
        artist: TextRule {
            selectors: &["div.nowplaying.nowplaying-musikstream.hide.white strong"],
            own_text: false,
            pick: Pick::First,
        },
        title_strip_after: Some('/'),
        clock_param: None,
    }
}

/// Fixed-position track widget: the second h1 is the title, the second h2
/// the artist.
pub fn radio7() -> RuleParser {
    RuleParser {
        station_id: RADIO7,
        url: "http://radio7.de/content/html/shared/playlist/index.html",
        title: TextRule {
            selectors: &["div.win-pls-track-rgt h1"],
            own_text: false,
            pick: Pick::Nth(1),
        },
        artist: TextRule {
            selectors: &["div.win-pls-track-rgt h2"],
            own_text: false,
            pick: Pick::Nth(1),
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Playlist endpoint keyed on the current minute of the hour; returns a
/// fixed-position table where cell 1 is the title and cell 2 the artist.
pub fn donau3_fm() -> RuleParser {
    RuleParser {
        station_id: DONAU3_FM,
        url: "http://www.donau3fm.de/wp-content/themes/ex-studios-2015/playlist/getplaylist.php",
        title: TextRule {
            selectors: &["table td"],
            own_text: true,
            pick: Pick::Nth(1),
        },
        artist: TextRule {
            selectors: &["table td"],
            own_text: true,
            pick: Pick::Nth(2),
        },
        title_strip_after: None,
        clock_param: Some("pl_time_m"),
    }
}

/// Daily playlist table, chronological; last row is the current track.
pub fn fritz() -> RuleParser {
    RuleParser {
        station_id: FRITZ,
        url: "http://www.fritz.de/musik/playlists/index.html",
        title: TextRule {
            selectors: &["table.playlist_aktueller_tag td.tracktitle"],
            own_text: true,
            pick: Pick::Last,
        },
        artist: TextRule {
            selectors: &["table.playlist_aktueller_tag td.trackinterpret a"],
            own_text: false,
            pick: Pick::Last,
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Front-page widget: the artist sits in a bold tag, the title is the
/// surrounding div's own trailing text.
pub fn radio_koeln() -> RuleParser {
    RuleParser {
        station_id: RADIO_KOELN,
        url: "http://www.radiokoeln.de/",
        title: TextRule {
            selectors: &["div#playlist_title div"],
            own_text: true,
            pick: Pick::Last,
        },
        artist: TextRule {
            selectors: &["div#playlist_title div b"],
            own_text: false,
            pick: Pick::First,
        },
        title_strip_after: None,
        clock_param: None,
    }
}

/// Playlist table: artist in the first bold cell, title is that cell's
/// own text.
pub fn einslive() -> RuleParser {
    RuleParser {
        station_id: EINSLIVE,
        url: "http://www.einslive.de/einslive/musik/playlist/playlist284.html",
        title: TextRule {
            selectors: &["div.playlist td"],
            own_text: true,
            pick: Pick::First,
        },
        artist: TextRule {
            selectors: &["div.playlist td strong"],
            own_text: false,
            pick: Pick::First,
        },
        title_strip_after: None,
        clock_param: None,
    }
}
