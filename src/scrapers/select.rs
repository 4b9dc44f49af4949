//! Selector-based text extraction shared by the station parsers.
//!
//! Most stations reduce to "evaluate a CSS selector chain against the page
//! and keep the Nth non-empty match"; this module provides that engine so
//! only genuinely quirky stations need custom parser code.

use chrono::{Timelike, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::common::error::Result;
use crate::domain::Song;
use crate::scrapers::PlaylistParser;

/// Which of the matched text fragments to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Last,
    /// Zero-based index into the non-empty matches.
    Nth(usize),
    /// Second to last. Some playlist tables end title-then-artist.
    LastButOne,
}

impl Pick {
    pub fn apply<'a>(&self, matches: &'a [String]) -> Option<&'a str> {
        let picked = match *self {
            Pick::First => matches.first(),
            Pick::Last => matches.last(),
            Pick::Nth(n) => matches.get(n),
            Pick::LastButOne => matches.len().checked_sub(2).and_then(|i| matches.get(i)),
        };
        picked.map(String::as_str)
    }
}

/// One extraction rule: a fallback chain of CSS selectors plus a pick
/// policy. The first selector that yields any non-empty match wins.
pub struct TextRule {
    pub selectors: &'static [&'static str],
    /// Only direct child text nodes, not descendant element text. Needed
    /// when the wanted fragment shares its parent with a tag holding the
    /// other field.
    pub own_text: bool,
    pub pick: Pick,
}

impl TextRule {
    pub fn extract(&self, doc: &Html) -> Option<String> {
        for css in self.selectors {
            let matches = if self.own_text {
                select_own_texts(doc, css)
            } else {
                select_texts(doc, css)
            };
            if let Some(text) = self.pick.apply(&matches) {
                return Some(text.to_string());
            }
        }
        None
    }
}

/// Data-driven parser for stations whose extraction reduces to selector
/// chains and pick policies.
pub struct RuleParser {
    pub station_id: &'static str,
    pub url: &'static str,
    pub title: TextRule,
    pub artist: TextRule,
    /// Discard everything from this separator onwards in the title. One
    /// station embeds a slash-delimited suffix in its title field.
    pub title_strip_after: Option<char>,
    /// Name of a query parameter carrying the current minute of the hour,
    /// for hosts that rotate their playlist buffer server-side.
    pub clock_param: Option<&'static str>,
}

impl RuleParser {
    fn post_process(&self, title: String) -> String {
        match self.title_strip_after {
            Some(sep) => title.split(sep).next().unwrap_or("").trim().to_string(),
            None => title,
        }
    }
}

impl PlaylistParser for RuleParser {
    fn station_id(&self) -> &'static str {
        self.station_id
    }

    fn url(&self) -> &'static str {
        self.url
    }

    fn query_params(&self) -> Vec<(String, String)> {
        match self.clock_param {
            Some(name) => vec![(name.to_string(), Utc::now().minute().to_string())],
            None => Vec::new(),
        }
    }

    fn parse_now_playing(&self, body: &str) -> Result<Option<Song>> {
        let doc = Html::parse_document(body);
        let title = self
            .title
            .extract(&doc)
            .map(|t| self.post_process(t))
            .filter(|t| !t.is_empty());
        let artist = self.artist.extract(&doc);
        match (title, artist) {
            (Some(title), Some(artist)) => Ok(Some(Song::new(&title, &artist))),
            (title, artist) => {
                warn!(
                    "no track on {}: title={:?} artist={:?}",
                    self.station_id, title, artist
                );
                Ok(None)
            }
        }
    }
}

/// Text content of every element matched by `css`, trimmed, empties dropped.
pub fn select_texts(doc: &Html, css: &str) -> Vec<String> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Direct child text nodes of every element matched by `css`, trimmed,
/// empties dropped.
pub fn select_own_texts(doc: &Html, css: &str) -> Vec<String> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .flat_map(|el| own_texts(&el))
        .collect()
}

/// Non-empty direct child text nodes of one element.
pub fn own_texts(el: &ElementRef) -> Vec<String> {
    el.children()
        .filter_map(|child| child.value().as_text())
        .map(|t| t.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pick_policies() {
        let matches = strings(&["a", "b", "c"]);
        assert_eq!(Pick::First.apply(&matches), Some("a"));
        assert_eq!(Pick::Last.apply(&matches), Some("c"));
        assert_eq!(Pick::Nth(1).apply(&matches), Some("b"));
        assert_eq!(Pick::LastButOne.apply(&matches), Some("b"));
    }

    #[test]
    fn pick_on_insufficient_matches_is_none() {
        let one = strings(&["a"]);
        assert_eq!(Pick::Nth(3).apply(&one), None);
        assert_eq!(Pick::LastButOne.apply(&one), None);
        assert_eq!(Pick::First.apply(&[]), None);
    }

    #[test]
    fn select_texts_drops_empty_matches() {
        let doc = Html::parse_document(
            "<ul><li>  </li><li>First</li><li></li><li>Second</li></ul>",
        );
        assert_eq!(select_texts(&doc, "li"), strings(&["First", "Second"]));
    }

    #[test]
    fn own_texts_skips_nested_element_text() {
        let doc = Html::parse_document("<li><strong>Artist</strong> Title</li>");
        assert_eq!(select_own_texts(&doc, "li"), strings(&["Title"]));
        assert_eq!(select_texts(&doc, "li"), strings(&["Artist Title"]));
    }

    #[test]
    fn rule_falls_back_to_secondary_selector() {
        let doc = Html::parse_document("<div><a class=\"alt\">From Fallback</a></div>");
        let rule = TextRule {
            selectors: &["strong.primary", "a.alt"],
            own_text: false,
            pick: Pick::First,
        };
        assert_eq!(rule.extract(&doc), Some("From Fallback".to_string()));
    }

    #[test]
    fn rule_with_no_match_anywhere_is_none() {
        let doc = Html::parse_document("<div><p>irrelevant</p></div>");
        let rule = TextRule {
            selectors: &["strong.primary", "a.alt"],
            own_text: false,
            pick: Pick::First,
        };
        assert_eq!(rule.extract(&doc), None);
    }
}
