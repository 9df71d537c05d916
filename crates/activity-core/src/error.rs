//! Error types for property (de)serialization.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Result type alias for framework operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting JSON as vocabulary values
#[derive(Error, Debug)]
pub enum Error {
    /// The raw JSON shape does not match the primitive a kind expects
    #[error("{found} cannot be interpreted as {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("{input:?} cannot be interpreted as an IRI: {reason}")]
    InvalidIri { input: String, reason: String },

    #[error("no \"type\" property in map")]
    MissingDiscriminator,

    #[error("\"type\" property is not of {expected:?} type: {found}")]
    WrongDiscriminator { expected: String, found: String },

    #[error("\"type\" property is unrecognized type: {0}")]
    UnrecognizedDiscriminator(String),

    /// A property of an object failed to deserialize
    #[error("property {property:?}: {source}")]
    Property {
        property: String,
        #[source]
        source: Box<Error>,
    },

    /// A kind was looked up before anything registered it
    #[error("kind {0} has not been registered")]
    RegistryNotInitialized(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::TypeMismatch`] describing the offending JSON value.
    pub fn type_mismatch(expected: &'static str, found: &JsonValue) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Attach the name of the property that failed.
    pub fn in_property(self, property: impl Into<String>) -> Self {
        Error::Property {
            property: property.into(),
            source: Box::new(self),
        }
    }

    /// True for the discriminator family of errors.
    pub fn is_discriminator(&self) -> bool {
        matches!(
            self,
            Error::MissingDiscriminator
                | Error::WrongDiscriminator { .. }
                | Error::UnrecognizedDiscriminator(_)
        )
    }
}
