use chrono::{DateTime, Utc};

/// Name of the environment variable that pins the build timestamp for reproducible builds.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// This helper function determines the build timestamp.
///
/// An explicit RFC 3339 timestamp wins over the value of `$SOURCE_DATE_EPOCH` (seconds since the
/// UNIX epoch), which wins over the current time.
pub fn build_timestamp(explicit: Option<&str>, source_date_epoch: Option<&str>) -> Result<DateTime<Utc>, String> {
    if let Some(timestamp) = explicit {
        return DateTime::parse_from_rfc3339(timestamp)
            .map(|datetime| datetime.with_timezone(&Utc))
            .map_err(|error| format!("Failed to parse timestamp {}: {}", timestamp, error));
    }

    if let Some(epoch) = source_date_epoch {
        let seconds: i64 = epoch
            .trim()
            .parse()
            .map_err(|error| format!("Failed to parse ${}={}: {}", SOURCE_DATE_EPOCH, epoch, error))?;

        return match DateTime::from_timestamp(seconds, 0) {
            Some(datetime) => Ok(datetime),
            None => Err(format!("${}={} is out of range", SOURCE_DATE_EPOCH, epoch)),
        };
    }

    Ok(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn explicit_timestamp() {
        let timestamp = build_timestamp(Some("2021-01-02T04:04:05+01:00"), Some("0")).unwrap();
        assert_eq!(timestamp, Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn source_date_epoch() {
        let timestamp = build_timestamp(None, Some("1609556645")).unwrap();
        assert_eq!(timestamp, Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn invalid_values() {
        assert!(build_timestamp(Some("yesterday"), None).is_err());
        assert!(build_timestamp(None, Some("soon")).is_err());
    }

    #[test]
    fn defaults_to_now() {
        let before = Utc::now();
        let timestamp = build_timestamp(None, None).unwrap();
        assert!(timestamp >= before);
    }
}
