//! IRI references.
//!
//! An [`Iri`] keeps the exact text it was parsed from so that a value read
//! off the wire serializes back unchanged, while still guaranteeing the text
//! is an absolute reference with a scheme.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use url::Url;

use crate::error::{Error, Result};

/// An absolute IRI used as an opaque reference.
#[derive(Clone)]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    /// Parse an absolute IRI.
    ///
    /// Strings without a scheme are rejected: `"hello"` is plain text, not a
    /// reference.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| Error::InvalidIri {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        if url.scheme().is_empty() {
            return Err(Error::InvalidIri {
                input: input.to_string(),
                reason: "no scheme".to_string(),
            });
        }
        Ok(Iri {
            raw: input.to_string(),
            url,
        })
    }

    /// The text this IRI was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host_str(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// The parsed, normalized form.
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iri").field(&self.raw).finish()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for Iri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Iri::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Iri::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Iri {
            raw: url.to_string(),
            url,
        }
    }
}

/// `about:blank`, the zero value of an anyURI.
impl Default for Iri {
    fn default() -> Self {
        Iri::from(Url::parse("about:blank").expect("about:blank is an absolute IRI"))
    }
}

impl Serialize for Iri {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Iri {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IriVisitor)
    }
}

struct IriVisitor;

impl<'de> Visitor<'de> for IriVisitor {
    type Value = Iri;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an absolute IRI string such as \"https://example.com/x\"")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Iri, E>
    where
        E: de::Error,
    {
        Iri::parse(v).map_err(de::Error::custom)
    }
}
