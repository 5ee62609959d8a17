//! Serializes `chrono::Duration` as whole seconds plus a nanosecond remainder.

use chrono::Duration;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Parts {
    secs: i64,
    nanos: i32,
}

pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Parts {
        secs: value.num_seconds(),
        nanos: value.subsec_nanos(),
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let parts = Parts::deserialize(deserializer)?;
    Duration::try_seconds(parts.secs)
        .and_then(|secs| secs.checked_add(&Duration::nanoseconds(i64::from(parts.nanos))))
        .ok_or_else(|| {
            D::Error::custom(format!(
                "duration of {}s {}ns is out of range",
                parts.secs, parts.nanos
            ))
        })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        period: Duration,
    }

    #[test]
    fn negative_fractional_duration_round_trips() {
        let holder = Holder {
            period: -Duration::milliseconds(1500),
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"period":{"secs":-1,"nanos":-500000000}}"#);
        assert_eq!(serde_json::from_str::<Holder>(&json).unwrap(), holder);
    }

    #[test]
    fn out_of_range_seconds_are_a_deserialize_error() {
        let json = format!(r#"{{"period":{{"secs":{},"nanos":0}}}}"#, i64::MAX);
        let err = serde_json::from_str::<Holder>(&json).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
