/// Station identifier constants to ensure consistency across the codebase.
/// Identifiers are lowercase-and-dot tokens so downstream consumers can use
/// them as categorical labels without re-encoding.
pub const FM4: &str = "fm4";
pub const SWR3: &str = "swr3";
pub const ANTENNE_BAYERN: &str = "antenne.bayern";
pub const BAYERN3: &str = "bayern3";
pub const DETEKTOR_FM: &str = "detektor.fm";
pub const BYTE_FM: &str = "byte.fm";
pub const RADIO7: &str = "radio7";
pub const DONAU3_FM: &str = "donau3.fm";
pub const FRITZ: &str = "fritz";
pub const RADIO_KOELN: &str = "radio.koeln";
pub const EINSLIVE: &str = "einslive";

/// Registration order, which is also the iteration order within a poll cycle.
pub const ALL_STATIONS: &[&str] = &[
    FM4,
    SWR3,
    ANTENNE_BAYERN,
    BAYERN3,
    DETEKTOR_FM,
    BYTE_FM,
    RADIO7,
    DONAU3_FM,
    FRITZ,
    RADIO_KOELN,
    EINSLIVE,
];

/// Stable client signature presented to every station host.
pub const USER_AGENT: &str = "curl/7.35.0";

/// Seconds between poll cycles unless overridden on the command line.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Budget for a single station fetch. One unresponsive host must not stall
/// the whole cycle indefinitely.
pub const FETCH_TIMEOUT_SECS: u64 = 10;
