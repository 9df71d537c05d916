//! Primitive value codecs.
//!
//! Every codec exposes the same three pure functions:
//!
//! - `serialize(&T) -> JsonValue`
//! - `deserialize(&JsonValue) -> Result<T>`, failing with
//!   [`Error::TypeMismatch`](crate::Error::TypeMismatch) when the JSON shape is wrong
//! - `less(&T, &T) -> bool`, a strict weak ordering

pub mod any_uri;
pub mod bcp47;
pub mod boolean;
pub mod date_time;
pub mod duration;
pub mod float;
pub mod non_negative_integer;
pub mod string;
