use chrono::{TimeZone, Utc};

/// Presale code shown in the tickets section.
pub const PRESALE_CODE: &str = "SOLSTICE26";

pub const TICKET_URL: &str = "https://tickets.solsticefestival.example";

/// Festival start, as a unix timestamp in milliseconds. The countdown ticks
/// against this single hardcoded instant; edit it here when the date moves.
pub fn festival_start_ms() -> i64 {
    Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}
