use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The single persisted record of the last successful push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushStatus {
    #[serde(with = "date_format")]
    pub last_pushed_date: NaiveDate,

    /// Stored at second resolution.
    #[serde(with = "time_format")]
    pub last_pushed_time: NaiveTime,
}

impl PushStatus {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            last_pushed_date: now.date(),
            last_pushed_time: now.time(),
        }
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.last_pushed_date == date
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushed_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(10, 5, 42)
            .unwrap()
    }

    #[test]
    fn serializes_date_and_time_as_plain_strings() {
        let json = serde_json::to_string(&PushStatus::at(pushed_at())).unwrap();

        assert_eq!(
            json,
            r#"{"last_pushed_date":"2024-06-03","last_pushed_time":"10:05:42"}"#
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = r#"{"last_pushed_date":"2024-06-03","last_pushed_time":"10:05:42","extra":1}"#;

        assert!(serde_json::from_str::<PushStatus>(raw).is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let raw = r#"{"last_pushed_date":"03/06/2024","last_pushed_time":"10:05:42"}"#;

        assert!(serde_json::from_str::<PushStatus>(raw).is_err());
    }

    #[test]
    fn matches_only_its_own_date() {
        let status = PushStatus::at(pushed_at());

        assert!(status.is_for(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
        assert!(!status.is_for(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()));
    }
}
