use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// `2024-05-01T12:30:45.123Z`: UTC with millisecond precision.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: OffsetDateTime,
    pub credential_configured: bool,
}

impl HealthResponse {
    pub fn ok(credential_configured: bool) -> Self {
        Self {
            status: "OK",
            timestamp: OffsetDateTime::now_utc(),
            credential_configured,
        }
    }
}

fn serialize_timestamp<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = value
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;

    #[test]
    fn serializes_camel_case_with_millisecond_timestamp() {
        let health = HealthResponse {
            status: "OK",
            timestamp: OffsetDateTime::UNIX_EPOCH,
            credential_configured: true,
        };

        let value = serde_json::to_value(&health).expect("serialize");
        assert_eq!(value["status"], "OK");
        assert_eq!(value["timestamp"], "1970-01-01T00:00:00.000Z");
        assert_eq!(value["credentialConfigured"], true);
    }

    #[test]
    fn sub_millisecond_digits_are_dropped() {
        let health = HealthResponse {
            status: "OK",
            timestamp: OffsetDateTime::UNIX_EPOCH + Duration::nanoseconds(123_456_789),
            credential_configured: false,
        };

        let value = serde_json::to_value(&health).expect("serialize");
        assert_eq!(value["timestamp"], "1970-01-01T00:00:00.123Z");
    }
}
