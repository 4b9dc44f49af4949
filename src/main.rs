use std::io;
use std::time::Duration;

use clap::Parser;

use nowplaying_scraper::common::constants::{ALL_STATIONS, DEFAULT_INTERVAL_SECS};
use nowplaying_scraper::infra::http_client::FetchClient;
use nowplaying_scraper::observability::logging::init_logging;
use nowplaying_scraper::poller::emit::Emitter;
use nowplaying_scraper::poller::Poller;
use nowplaying_scraper::scrapers::{all_stations, create_station};

#[derive(Parser)]
#[command(name = "nowplaying-scraper")]
#[command(about = "Polls radio station playlists and prints newly played songs as TSV")]
#[command(version)]
struct Cli {
    /// A registered station id for a one-shot scrape, or a poll interval
    /// in seconds for continuous mode.
    target: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let client = FetchClient::new()?;

    // An integer argument sets the poll interval; anything else is taken
    // as a station id for a single-shot scrape.
    let mut interval = Duration::from_secs(DEFAULT_INTERVAL_SECS);
    if let Some(target) = cli.target {
        match target.parse::<u64>() {
            Ok(secs) => interval = Duration::from_secs(secs),
            Err(_) => return single_shot(&target, client).await,
        }
    }

    let mut poller = Poller::new(all_stations(&client), interval);
    let mut emitter = Emitter::new(io::stdout());
    poller.run_forever(&mut emitter).await;
    Ok(())
}

/// Scrape one station once and print the result, without timestamp or
/// dedup. An unknown id is a usage error rather than falling through to
/// continuous mode.
async fn single_shot(station_id: &str, client: FetchClient) -> anyhow::Result<()> {
    let station = create_station(station_id, client).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown station '{}' (known: {})",
            station_id,
            ALL_STATIONS.join(", ")
        )
    })?;
    match station.now_playing().await? {
        Some(song) => println!("{song}"),
        None => println!("none"),
    }
    Ok(())
}
