//! Serde adapters for `Duration` values written as human-readable strings.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use std::time::Duration;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Upstream {
//!     #[serde(with = "nftstore_utils::humantime_serde")]
//!     rpc_timeout: Duration,
//! }
//!
//! let cfg: Upstream = serde_json::from_str(r#"{"rpc_timeout": "1500ms"}"#).unwrap();
//! assert_eq!(cfg.rpc_timeout, Duration::from_millis(1500));
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserializer, Serializer, de};

/// Deserializes a `Duration` via [`humantime::parse_duration`].
///
/// # Errors
/// Fails if the value is not a string or cannot be parsed as a duration.
pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    d.deserialize_str(DurationVisitor)
}

/// Serializes a `Duration` via [`humantime::format_duration`].
///
/// # Errors
/// Propagates serializer errors.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_str(&humantime::format_duration(*d))
}

struct DurationVisitor;

impl de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("a duration such as \"250ms\" or \"2s\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Duration, E>
    where
        E: de::Error,
    {
        humantime::parse_duration(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        latency: Duration,
    }

    #[test]
    fn parses_and_formats() {
        let holder: Holder = serde_json::from_str(r#"{"latency": "2s 500ms"}"#).unwrap();
        assert_eq!(holder.latency, Duration::from_millis(2500));

        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"latency":"2s 500ms"}"#);
    }

    #[test]
    fn zero_is_formatted_as_0s() {
        let holder = Holder {
            latency: Duration::ZERO,
        };
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"latency":"0s"}"#);
    }

    #[test]
    fn rejects_garbage() {
        let err = serde_json::from_str::<Holder>(r#"{"latency": "soon"}"#);
        assert!(err.is_err());
    }
}
