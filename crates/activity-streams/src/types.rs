//! Which properties each vocabulary type carries.
//!
//! A type's properties are the concatenation of a few shared groups. The
//! resulting order is the order properties are deserialized, serialized and
//! compared in.

use crate::kinds::TypeKind;
use crate::properties::*;
use crate::value::PropertyDefinition;

type PropertyGroup = &'static [&'static PropertyDefinition];

const OBJECT_GROUP: PropertyGroup = &[
    &TYPE,
    &ID,
    &ALTITUDE,
    &ATTACHMENT,
    &ATTRIBUTED_TO,
    &AUDIENCE,
    &BCC,
    &BTO,
    &CC,
    &CONTENT,
    &CONTEXT,
    &DURATION,
    &END_TIME,
    &GENERATOR,
    &ICON,
    &IMAGE,
    &IN_REPLY_TO,
    &LIKES,
    &LOCATION,
    &MEDIA_TYPE,
    &NAME,
    &PREVIEW,
    &PUBLISHED,
    &REPLIES,
    &SHARES,
    &START_TIME,
    &SUMMARY,
    &TAG,
    &TO,
    &UPDATED,
    &URL,
];

const LINK_GROUP: PropertyGroup = &[
    &TYPE,
    &ID,
    &ATTRIBUTED_TO,
    &HEIGHT,
    &HREF,
    &HREFLANG,
    &MEDIA_TYPE,
    &NAME,
    &PREVIEW,
    &REL,
    &WIDTH,
];

const INTRANSITIVE_GROUP: PropertyGroup = &[&ACTOR, &INSTRUMENT, &ORIGIN, &RESULT, &TARGET];

const ACTIVITY_GROUP: PropertyGroup = &[&OBJECT];

const QUESTION_GROUP: PropertyGroup = &[&ANY_OF, &CLOSED, &ONE_OF];

const PLACE_GROUP: PropertyGroup = &[&ACCURACY, &LATITUDE, &LONGITUDE, &RADIUS, &UNITS];

const COLLECTION_GROUP: PropertyGroup = &[&CURRENT, &FIRST, &LAST, &TOTAL_ITEMS];

const ITEMS_GROUP: PropertyGroup = &[&ITEMS];

const ORDERED_ITEMS_GROUP: PropertyGroup = &[&ORDERED_ITEMS];

const PAGE_GROUP: PropertyGroup = &[&NEXT, &PART_OF, &PREV];

const ORDERED_PAGE_GROUP: PropertyGroup = &[&START_INDEX];

const RELATIONSHIP_GROUP: PropertyGroup = &[&OBJECT, &RELATIONSHIP, &SUBJECT];

const TOMBSTONE_GROUP: PropertyGroup = &[&DELETED, &FORMER_TYPE];

const PROFILE_GROUP: PropertyGroup = &[&DESCRIBES];

const LINK_TYPE: &[PropertyGroup] = &[LINK_GROUP];
const OBJECT_TYPE: &[PropertyGroup] = &[OBJECT_GROUP];
const INTRANSITIVE_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, INTRANSITIVE_GROUP];
const ACTIVITY_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, INTRANSITIVE_GROUP, ACTIVITY_GROUP];
const QUESTION_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, INTRANSITIVE_GROUP, QUESTION_GROUP];
const PLACE_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, PLACE_GROUP];
const COLLECTION_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, COLLECTION_GROUP, ITEMS_GROUP];
const COLLECTION_PAGE_TYPE: &[PropertyGroup] =
    &[OBJECT_GROUP, COLLECTION_GROUP, ITEMS_GROUP, PAGE_GROUP];
const ORDERED_COLLECTION_TYPE: &[PropertyGroup] =
    &[OBJECT_GROUP, COLLECTION_GROUP, ORDERED_ITEMS_GROUP];
const ORDERED_COLLECTION_PAGE_TYPE: &[PropertyGroup] = &[
    OBJECT_GROUP,
    COLLECTION_GROUP,
    ORDERED_ITEMS_GROUP,
    PAGE_GROUP,
    ORDERED_PAGE_GROUP,
];
const RELATIONSHIP_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, RELATIONSHIP_GROUP];
const TOMBSTONE_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, TOMBSTONE_GROUP];
const PROFILE_TYPE: &[PropertyGroup] = &[OBJECT_GROUP, PROFILE_GROUP];

impl TypeKind {
    fn groups(self) -> &'static [PropertyGroup] {
        use TypeKind::*;
        match self {
            Link | Mention => LINK_TYPE,
            IntransitiveActivity | Arrive | Travel => INTRANSITIVE_TYPE,
            Question => QUESTION_TYPE,
            Activity | Accept | Add | Announce | Block | Create | Delete | Dislike | Flag
            | Follow | Ignore | Invite | Join | Leave | Like | Listen | Move | Offer | Read
            | Reject | Remove | TentativeAccept | TentativeReject | Undo | Update | View => {
                ACTIVITY_TYPE
            }
            Place => PLACE_TYPE,
            Collection => COLLECTION_TYPE,
            CollectionPage => COLLECTION_PAGE_TYPE,
            OrderedCollection => ORDERED_COLLECTION_TYPE,
            OrderedCollectionPage => ORDERED_COLLECTION_PAGE_TYPE,
            Relationship => RELATIONSHIP_TYPE,
            Tombstone => TOMBSTONE_TYPE,
            Profile => PROFILE_TYPE,
            Object | Application | Article | Audio | Document | Event | Group | Image | Note
            | Organization | Page | Person | Service | Video => OBJECT_TYPE,
        }
    }

    /// Properties of this type, in definition order.
    pub fn properties(self) -> impl Iterator<Item = &'static PropertyDefinition> {
        self.groups().iter().flat_map(|group| group.iter().copied())
    }

    /// The definition of the property called `name`, if this type has one.
    pub fn property(self, name: &str) -> Option<&'static PropertyDefinition> {
        self.properties().find(|def| def.name == name)
    }

    /// True if `def` is one of this type's properties.
    pub fn has_property(self, def: &PropertyDefinition) -> bool {
        self.properties().any(|own| own == def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_properties() {
        for &kind in TypeKind::ALL {
            let mut seen = HashSet::new();
            for def in kind.properties() {
                assert!(seen.insert(def.name), "{} lists {} twice", kind, def.name);
            }
        }
    }

    #[test]
    fn test_question_properties() {
        let question = TypeKind::Question;
        assert!(question.has_property(&ANY_OF));
        assert!(question.has_property(&CLOSED));
        assert!(question.has_property(&ACTOR));
        assert!(!question.has_property(&OBJECT));
        assert_eq!(question.property("oneOf").map(|d| d.name), Some("oneOf"));
    }

    #[test]
    fn test_every_type_has_discriminator() {
        for &kind in TypeKind::ALL {
            assert_eq!(kind.properties().next().map(|d| d.name), Some("type"));
        }
    }

    #[test]
    fn test_link_properties() {
        assert!(TypeKind::Mention.has_property(&HREF));
        assert!(!TypeKind::Link.has_property(&CONTENT));
    }
}
