use nowplaying_scraper::common::constants::*;
use nowplaying_scraper::domain::Song;
use nowplaying_scraper::infra::http_client::FetchClient;
use nowplaying_scraper::scrapers::parsers::{rules, ByteFmParser, Swr3Parser};
use nowplaying_scraper::scrapers::{create_station, PlaylistParser};

#[test]
fn fm4_takes_the_last_listed_track() {
    let song = rules::fm4()
        .parse_now_playing(include_str!("resources/fm4.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("New Song", "New Artist")));
}

#[test]
fn fm4_without_artist_nodes_is_no_result() {
    let song = rules::fm4()
        .parse_now_playing(include_str!("resources/fm4_no_artists.html"))
        .unwrap();
    assert_eq!(song, None);
}

#[test]
fn fm4_on_empty_document_is_no_result() {
    let song = rules::fm4().parse_now_playing("<html></html>").unwrap();
    assert_eq!(song, None);
}

#[test]
fn swr3_artist_in_strong_tag() {
    let song = Swr3Parser
        .parse_now_playing(include_str!("resources/swr3.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Stolen Dance", "Milky Chance")));
}

#[test]
fn swr3_falls_back_to_anchor_artist() {
    let song = Swr3Parser
        .parse_now_playing(include_str!("resources/swr3_anchor.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("I Follow Rivers", "Lykke Li")));
}

#[test]
fn swr3_without_nowplaying_list_is_no_result() {
    let song = Swr3Parser
        .parse_now_playing("<html><ul><li>unrelated</li></ul></html>")
        .unwrap();
    assert_eq!(song, None);
}

#[test]
fn antenne_bayern_takes_first_hit() {
    let song = rules::antenne_bayern()
        .parse_now_playing(include_str!("resources/antenne_bayern.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Chasing Cars", "Snow Patrol")));
}

#[test]
fn bayern3_takes_tail_pair_of_span_list() {
    let song = rules::bayern3()
        .parse_now_playing(include_str!("resources/bayern3.html"))
        .unwrap();
    assert_eq!(
        song,
        Some(Song::new("Applaus Applaus", "Sportfreunde Stiller"))
    );
}

#[test]
fn bayern3_with_single_span_is_no_result() {
    let song = rules::bayern3()
        .parse_now_playing("<li class=\"title\"><span>Lonely</span></li>")
        .unwrap();
    assert_eq!(song, None);
}

#[test]
fn detektor_fm_strips_slash_suffix_from_title() {
    let song = rules::detektor_fm()
        .parse_now_playing(include_str!("resources/detektor_fm.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Feel It Still", "Portugal. The Man")));
}

#[test]
fn byte_fm_splits_entity_encoded_separator() {
    let body = r#"{"tracks": ["<strong>Tocotronic &ndash; Ich Bin Viel Zu Lange Mit Euch Mitgegangen</strong>", "Older Entry"]}"#;
    let song = ByteFmParser.parse_now_playing(body).unwrap();
    assert_eq!(
        song,
        Some(Song::new(
            "Ich Bin Viel Zu Lange Mit Euch Mitgegangen",
            "Tocotronic"
        ))
    );
}

#[test]
fn byte_fm_plain_dash_without_markup() {
    let body = r#"{"tracks": ["Moderat - A New Error"]}"#;
    let song = ByteFmParser.parse_now_playing(body).unwrap();
    assert_eq!(song, Some(Song::new("A New Error", "Moderat")));
}

#[test]
fn byte_fm_news_break_is_no_result() {
    // No separator at all: insufficient split parts.
    let body = r#"{"tracks": ["Nachrichten"]}"#;
    assert_eq!(ByteFmParser.parse_now_playing(body).unwrap(), None);
}

#[test]
fn byte_fm_news_break_title_is_no_result_in_any_case() {
    let body = r#"{"tracks": ["ByteFM - NACHRICHTEN"]}"#;
    assert_eq!(ByteFmParser.parse_now_playing(body).unwrap(), None);
}

#[test]
fn byte_fm_empty_track_list_is_no_result() {
    let body = r#"{"tracks": []}"#;
    assert_eq!(ByteFmParser.parse_now_playing(body).unwrap(), None);
}

#[test]
fn byte_fm_undecodable_payload_is_an_error() {
    assert!(ByteFmParser.parse_now_playing("<html>not json</html>").is_err());
}

#[test]
fn radio7_takes_second_heading_texts() {
    let song = rules::radio7()
        .parse_now_playing(include_str!("resources/radio7.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Budapest", "George Ezra")));
}

#[test]
fn donau3_fm_reads_fixed_table_positions() {
    let song = rules::donau3_fm()
        .parse_now_playing(include_str!("resources/donau3_fm.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Auf Uns", "Andreas Bourani")));
}

#[test]
fn donau3_fm_requests_current_minute_slot() {
    let params = rules::donau3_fm().query_params();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].0, "pl_time_m");
    let minute: u32 = params[0].1.parse().unwrap();
    assert!(minute < 60);
}

#[test]
fn fritz_takes_last_row_of_daily_playlist() {
    let song = rules::fritz()
        .parse_now_playing(include_str!("resources/fritz.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Leider Geil", "Deichkind")));
}

#[test]
fn radio_koeln_pairs_bold_artist_with_trailing_text() {
    let song = rules::radio_koeln()
        .parse_now_playing(include_str!("resources/radio_koeln.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Au Revoir", "Mark Forster")));
}

#[test]
fn einslive_takes_first_playlist_cell() {
    let song = rules::einslive()
        .parse_now_playing(include_str!("resources/einslive.html"))
        .unwrap();
    assert_eq!(song, Some(Song::new("Traum", "Cro")));
}

#[test]
fn every_registered_station_has_a_scraper() {
    let client = FetchClient::new().unwrap();
    for id in ALL_STATIONS {
        let station = create_station(id, client.clone())
            .unwrap_or_else(|| panic!("no scraper for {id}"));
        assert_eq!(station.station_id(), *id);
    }
}

#[test]
fn unknown_station_id_has_no_scraper() {
    let client = FetchClient::new().unwrap();
    assert!(create_station("wdr5", client).is_none());
}
