use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_CERTIFICATE_ID: &str = "0x00000";
pub const PLACEHOLDER_TRANSACTION_HASH: &str = "0x0000000000000000000000000000000000000000";

/// Everything the certificate page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub bride_name: String,
    pub groom_name: String,
    pub certificate_id: String,
    pub transaction_hash: String,
    pub issued_date: String,
}

impl DisplayRecord {
    /// The values shown before (or instead of) a resolved certificate.
    pub fn placeholder() -> Self {
        Self {
            bride_name: String::new(),
            groom_name: String::new(),
            certificate_id: PLACEHOLDER_CERTIFICATE_ID.to_string(),
            transaction_hash: PLACEHOLDER_TRANSACTION_HASH.to_string(),
            issued_date: format_date(&Utc::now()),
        }
    }

    pub fn sample(bride_name: String, groom_name: String) -> Self {
        Self {
            bride_name,
            groom_name,
            ..Self::placeholder()
        }
    }
}

/// The block timestamp as a UTC date, if chrono can represent it.
pub fn block_datetime(timestamp_secs: u64) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(timestamp_secs).ok()?.checked_mul(1000)?;
    Utc.timestamp_millis_opt(millis).single()
}

/// US calendar date (`M/D/YYYY`) of a block timestamp given in seconds.
///
/// Ledger blocks are range-checked with [`block_datetime`] when fetched;
/// anything else still out of range falls back to the epoch.
pub fn format_block_timestamp(timestamp_secs: u64) -> String {
    format_date(&block_datetime(timestamp_secs).unwrap_or_default())
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
