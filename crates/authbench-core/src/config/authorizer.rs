use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the stub authorizers, resolved once at process start and
/// handed to the handler at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthorizerConfig {
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub delay_parse: DelayParse,
}

/// How the raw `DELAY_MILLISECONDS` value is turned into a delay.
///
/// `Inverted` keeps the behaviour of the REST authorizer's original startup
/// code, whose error check was reversed: a valid number is discarded and the
/// default stays in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DelayParse {
    #[default]
    Standard,
    Inverted,
}

impl DelayParse {
    pub fn resolve(&self, raw: Option<&str>) -> u64 {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return 0;
        };
        match (self, raw.trim().parse::<i64>()) {
            (Self::Standard, Ok(parsed)) => parsed.max(0) as u64,
            (Self::Standard, Err(_)) => 0,
            // success keeps the default, failure assigns the zeroed parse result
            (Self::Inverted, _) => 0,
        }
    }
}

impl AuthorizerConfig {
    pub fn from_raw(raw_delay: Option<&str>, delay_parse: DelayParse) -> Self {
        let delay_ms = delay_parse.resolve(raw_delay);
        if raw_delay.is_some_and(|raw| !raw.is_empty()) && delay_ms == 0 {
            tracing::debug!(raw = ?raw_delay, ?delay_parse, "delay not applied, keeping default");
        }
        Self {
            delay_ms,
            delay_parse,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_parses_milliseconds() {
        assert_eq!(DelayParse::Standard.resolve(Some("100")), 100);
        assert_eq!(DelayParse::Standard.resolve(Some(" 25 ")), 25);
    }

    #[test]
    fn standard_ignores_garbage_and_missing_values() {
        assert_eq!(DelayParse::Standard.resolve(None), 0);
        assert_eq!(DelayParse::Standard.resolve(Some("")), 0);
        assert_eq!(DelayParse::Standard.resolve(Some("abc")), 0);
        assert_eq!(DelayParse::Standard.resolve(Some("1.5")), 0);
    }

    #[test]
    fn standard_clamps_negative_values() {
        assert_eq!(DelayParse::Standard.resolve(Some("-20")), 0);
    }

    #[test]
    fn inverted_never_applies_a_delay() {
        assert_eq!(DelayParse::Inverted.resolve(Some("100")), 0);
        assert_eq!(DelayParse::Inverted.resolve(Some("abc")), 0);
        assert_eq!(DelayParse::Inverted.resolve(None), 0);
    }

    #[test]
    fn config_exposes_duration() {
        let config = AuthorizerConfig::from_raw(Some("250"), DelayParse::Standard);
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.delay(), Duration::from_millis(250));
    }
}
