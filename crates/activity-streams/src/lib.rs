//! ActivityStreams 2.0 on top of the activity-core property framework.
//!
//! ```no_run
//! use activity_streams::{properties, Codec, TypeKind};
//!
//! let codec = Codec::default();
//! let mut note = codec.new_object(TypeKind::Note);
//! note.append(&properties::CONTENT, "Hello, world");
//! let json = codec.encode_string(&note).unwrap();
//! let back = codec.decode_str(&json).unwrap();
//! assert_eq!(back.kind(), TypeKind::Note);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod kinds;
pub mod object;
pub mod properties;
pub mod registry;
pub mod resolver;
mod types;
pub mod value;

pub use codec::Codec;
pub use config::CodecConfig;
pub use error::{Result, StreamsError};
pub use kinds::{Kind, TypeKind};
pub use object::{Object, PropertyValue};
pub use properties::NS;
pub use registry::build_registry;
pub use resolver::resolve;
pub use value::{ActivityStreams, Functional, NonFunctional, PropertyDefinition, Registry, Value};
