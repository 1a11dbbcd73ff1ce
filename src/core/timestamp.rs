use base64::prelude::*;
use chrono::{DateTime, Local, TimeZone};

/// Daraja timestamp layout: `YYYYMMDDHHmmss`
pub const DARAJA_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current local time formatted for the Daraja `Timestamp` field
pub fn timestamp() -> String {
    timestamp_at(&Local::now())
}

/// Format a given instant in its own timezone as a Daraja timestamp
pub fn timestamp_at<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(DARAJA_TIMESTAMP_FORMAT).to_string()
}

/// STK push password: base64(shortcode + passkey + timestamp)
pub fn password(shortcode: &str, passkey: &str, timestamp: &str) -> String {
    BASE64_STANDARD.encode(format!("{}{}{}", shortcode, passkey, timestamp))
}
