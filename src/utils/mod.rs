//! UUID and timestamp helpers.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Generates a random v4 UUID.
#[must_use]
pub fn generate_uuid() -> Uuid {
    Uuid::new_v4()
}

/// The current time as an RFC3339 string with millisecond precision.
#[must_use]
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_uuid_is_v4() {
        let id = generate_uuid();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = iso_timestamp();
        assert!(ts.contains('T'));
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
