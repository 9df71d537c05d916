//! Deserialize a document whose vocabulary type is not known in advance.

use activity_core::{alias_for, AliasMap, JsonMap};
use tracing::debug;

use crate::error::{Result, StreamsError};
use crate::kinds::TypeKind;
use crate::object::{discriminator, Object};
use crate::properties::NS;
use crate::value::Registry;

/// Deserialize `map` as the first vocabulary type, in priority order, that
/// its `type` discriminator names.
///
/// A document typed `["Question", "Note"]` resolves to `Note`, which comes
/// first in priority order, regardless of the order in the array.
pub fn resolve(map: &JsonMap, aliases: &AliasMap, registry: &Registry) -> Result<Object> {
    let names = discriminator(map, alias_for(aliases, NS))?;
    let kind = TypeKind::ALL
        .iter()
        .copied()
        .find(|kind| names.contains(&kind.name()))
        .ok_or_else(|| StreamsError::UnknownType(names.join(", ")))?;
    debug!(%kind, "resolved document type");
    Ok(Object::deserialize_map(kind, map, aliases, registry)?)
}
