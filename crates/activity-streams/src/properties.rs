//! Property definitions of the ActivityStreams core vocabulary.
//!
//! The order of the kinds in each definition is the order values are tried
//! in during deserialization. Language maps (`nameMap`, `contentMap`,
//! `summaryMap`) are not modelled and are kept among unknown properties.

use activity_core::PropertyDef;

use crate::kinds::{Kind, TypeKind, ANY_TYPE, CLOSED_KINDS};
use crate::value::PropertyDefinition;

/// Namespace of the ActivityStreams vocabulary.
///
/// This is the JSON-LD context IRI; alias maps keyed on the vocabulary
/// document IRI `https://www.w3.org/TR/activitystreams-vocabulary` do not
/// match it.
pub const NS: &str = "https://www.w3.org/ns/activitystreams";

const IMAGE_OR_LINK: &[Kind] = &[
    Kind::Type(TypeKind::Image),
    Kind::Type(TypeKind::Link),
    Kind::Type(TypeKind::Mention),
];

const COLLECTIONS: &[Kind] = &[
    Kind::Type(TypeKind::Collection),
    Kind::Type(TypeKind::CollectionPage),
    Kind::Type(TypeKind::OrderedCollection),
    Kind::Type(TypeKind::OrderedCollectionPage),
];

const COLLECTION_OR_LINK: &[Kind] = &[
    Kind::Type(TypeKind::Collection),
    Kind::Type(TypeKind::CollectionPage),
    Kind::Type(TypeKind::OrderedCollection),
    Kind::Type(TypeKind::OrderedCollectionPage),
    Kind::Type(TypeKind::Link),
    Kind::Type(TypeKind::Mention),
];

const PAGE_OR_LINK: &[Kind] = &[
    Kind::Type(TypeKind::CollectionPage),
    Kind::Type(TypeKind::OrderedCollectionPage),
    Kind::Type(TypeKind::Link),
    Kind::Type(TypeKind::Mention),
];

const URL_KINDS: &[Kind] = &[
    Kind::AnyUri,
    Kind::Type(TypeKind::Link),
    Kind::Type(TypeKind::Mention),
];

macro_rules! functional {
    ($ident:ident, $name:literal, $kinds:expr) => {
        pub static $ident: PropertyDefinition = PropertyDef::functional($name, NS, $kinds);
    };
}

macro_rules! non_functional {
    ($ident:ident, $name:literal, $kinds:expr) => {
        pub static $ident: PropertyDefinition = PropertyDef::non_functional($name, NS, $kinds);
    };
}

// JSON-LD keyword aliases, always written without prefix.
pub static ID: PropertyDefinition = PropertyDef::functional("id", NS, &[Kind::AnyUri]).keyword();
pub static TYPE: PropertyDefinition =
    PropertyDef::non_functional("type", NS, &[Kind::AnyUri, Kind::String]).keyword();

non_functional!(ACTOR, "actor", ANY_TYPE);
non_functional!(ANY_OF, "anyOf", ANY_TYPE);
non_functional!(ATTACHMENT, "attachment", ANY_TYPE);
non_functional!(ATTRIBUTED_TO, "attributedTo", ANY_TYPE);
non_functional!(AUDIENCE, "audience", ANY_TYPE);
non_functional!(BCC, "bcc", ANY_TYPE);
non_functional!(BTO, "bto", ANY_TYPE);
non_functional!(CC, "cc", ANY_TYPE);
non_functional!(CONTEXT, "context", ANY_TYPE);
non_functional!(GENERATOR, "generator", ANY_TYPE);
non_functional!(IN_REPLY_TO, "inReplyTo", ANY_TYPE);
non_functional!(INSTRUMENT, "instrument", ANY_TYPE);
non_functional!(ITEMS, "items", ANY_TYPE);
non_functional!(LOCATION, "location", ANY_TYPE);
non_functional!(OBJECT, "object", ANY_TYPE);
non_functional!(ONE_OF, "oneOf", ANY_TYPE);
non_functional!(ORDERED_ITEMS, "orderedItems", ANY_TYPE);
non_functional!(ORIGIN, "origin", ANY_TYPE);
non_functional!(PREVIEW, "preview", ANY_TYPE);
non_functional!(RELATIONSHIP, "relationship", ANY_TYPE);
non_functional!(RESULT, "result", ANY_TYPE);
non_functional!(TAG, "tag", ANY_TYPE);
non_functional!(TARGET, "target", ANY_TYPE);
non_functional!(TO, "to", ANY_TYPE);
functional!(DESCRIBES, "describes", ANY_TYPE);
functional!(SUBJECT, "subject", ANY_TYPE);

non_functional!(CLOSED, "closed", CLOSED_KINDS);

non_functional!(ICON, "icon", IMAGE_OR_LINK);
non_functional!(IMAGE, "image", IMAGE_OR_LINK);
non_functional!(URL, "url", URL_KINDS);

non_functional!(CONTENT, "content", &[Kind::String]);
non_functional!(NAME, "name", &[Kind::String]);
non_functional!(SUMMARY, "summary", &[Kind::String]);
non_functional!(FORMER_TYPE, "formerType", &[Kind::String]);
non_functional!(REL, "rel", &[Kind::String]);
functional!(MEDIA_TYPE, "mediaType", &[Kind::String]);
functional!(UNITS, "units", &[Kind::String]);

functional!(DURATION, "duration", &[Kind::Duration]);
functional!(DELETED, "deleted", &[Kind::DateTime]);
functional!(END_TIME, "endTime", &[Kind::DateTime]);
functional!(PUBLISHED, "published", &[Kind::DateTime]);
functional!(START_TIME, "startTime", &[Kind::DateTime]);
functional!(UPDATED, "updated", &[Kind::DateTime]);

functional!(ACCURACY, "accuracy", &[Kind::Float]);
functional!(ALTITUDE, "altitude", &[Kind::Float]);
functional!(LATITUDE, "latitude", &[Kind::Float]);
functional!(LONGITUDE, "longitude", &[Kind::Float]);
functional!(RADIUS, "radius", &[Kind::Float]);

functional!(HEIGHT, "height", &[Kind::NonNegativeInteger]);
functional!(WIDTH, "width", &[Kind::NonNegativeInteger]);
functional!(START_INDEX, "startIndex", &[Kind::NonNegativeInteger]);
functional!(TOTAL_ITEMS, "totalItems", &[Kind::NonNegativeInteger]);

functional!(HREF, "href", &[Kind::AnyUri]);
functional!(HREFLANG, "hreflang", &[Kind::Bcp47]);

functional!(REPLIES, "replies", COLLECTIONS);
functional!(LIKES, "likes", COLLECTIONS);
functional!(SHARES, "shares", COLLECTIONS);
functional!(PART_OF, "partOf", COLLECTION_OR_LINK);
functional!(CURRENT, "current", PAGE_OR_LINK);
functional!(FIRST, "first", PAGE_OR_LINK);
functional!(LAST, "last", PAGE_OR_LINK);
functional!(NEXT, "next", PAGE_OR_LINK);
functional!(PREV, "prev", PAGE_OR_LINK);
