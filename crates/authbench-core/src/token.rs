use std::{
    collections::HashMap,
    fmt::{self, Display},
    str::FromStr,
};

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{de::Visitor, Deserialize, Serialize};
use url::Url;

use crate::Error;

/// Where a bearer token travels on a request: `header:<name>` or `query:<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPlacement {
    Header(String),
    Query(String),
}

impl TokenPlacement {
    /// Attaches `token` to an outgoing request.
    pub fn apply(&self, url: &mut Url, headers: &mut HeaderMap, token: &str) -> Result<(), Error> {
        match self {
            Self::Header(name) => {
                headers.insert(
                    HeaderName::from_bytes(name.as_bytes())?,
                    HeaderValue::from_str(token)?,
                );
            }
            Self::Query(name) => {
                url.query_pairs_mut().append_pair(name, token);
            }
        }
        Ok(())
    }

    /// Reads the token back out of a gateway event. Header names compare
    /// case-insensitively since gateways lowercase them.
    pub fn extract(
        &self,
        headers: Option<&HashMap<String, String>>,
        raw_query: Option<&str>,
    ) -> Option<String> {
        match self {
            Self::Header(name) => headers?
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.clone()),
            Self::Query(name) => form_urlencoded::parse(raw_query?.as_bytes())
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.to_string()),
        }
    }
}

impl FromStr for TokenPlacement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("header", name)) if !name.is_empty() => Ok(Self::Header(name.to_string())),
            Some(("query", name)) if !name.is_empty() => Ok(Self::Query(name.to_string())),
            _ => Err(Error::InvalidTokenPlacement(format!(
                "expected header:{{name}} or query:{{name}} but got {}",
                s
            ))),
        }
    }
}

impl Display for TokenPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(s) => write!(f, "header:{}", s),
            Self::Query(s) => write!(f, "query:{}", s),
        }
    }
}

impl Serialize for TokenPlacement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenPlacement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PlacementVisitor;

        impl Visitor<'_> for PlacementVisitor {
            type Value = TokenPlacement;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a token placement like header:Authorization or query:token")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                TokenPlacement::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PlacementVisitor)
    }
}
