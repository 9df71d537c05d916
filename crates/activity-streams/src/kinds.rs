//! The closed set of kinds an ActivityStreams property value can take.

use std::fmt;
use std::str::FromStr;

macro_rules! type_kinds {
    ($($name:ident),* $(,)?) => {
        /// A vocabulary type.
        ///
        /// Declaration order is the priority order: `Object` and `Link`
        /// first, then every extended type alphabetically. Properties that
        /// accept any vocabulary type try them in this order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TypeKind {
            $($name),*
        }

        impl TypeKind {
            pub const ALL: &'static [TypeKind] = &[$(TypeKind::$name),*];

            /// The name written in a `type` discriminator.
            pub fn name(self) -> &'static str {
                match self {
                    $(TypeKind::$name => stringify!($name)),*
                }
            }
        }

        impl FromStr for TypeKind {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(TypeKind::$name),)*
                    other => Err(format!("unknown vocabulary type {:?}", other)),
                }
            }
        }

        /// Every vocabulary type, as property kinds.
        pub(crate) const ANY_TYPE: &[Kind] = &[$(Kind::Type(TypeKind::$name)),*];

        /// Range of `closed`: a point in time, a flag, or any vocabulary type.
        pub(crate) const CLOSED_KINDS: &[Kind] =
            &[Kind::DateTime, Kind::Boolean, $(Kind::Type(TypeKind::$name)),*];
    };
}

type_kinds! {
    Object,
    Link,
    Accept,
    Activity,
    Add,
    Announce,
    Application,
    Arrive,
    Article,
    Audio,
    Block,
    Collection,
    CollectionPage,
    Create,
    Delete,
    Dislike,
    Document,
    Event,
    Flag,
    Follow,
    Group,
    Ignore,
    Image,
    IntransitiveActivity,
    Invite,
    Join,
    Leave,
    Like,
    Listen,
    Mention,
    Move,
    Note,
    Offer,
    OrderedCollection,
    OrderedCollectionPage,
    Organization,
    Page,
    Person,
    Place,
    Profile,
    Question,
    Read,
    Reject,
    Relationship,
    Remove,
    Service,
    TentativeAccept,
    TentativeReject,
    Tombstone,
    Travel,
    Undo,
    Update,
    Video,
    View,
}

impl TypeKind {
    /// Direct supertypes.
    pub fn parents(self) -> &'static [TypeKind] {
        use TypeKind::*;
        match self {
            Object | Link => &[],
            Mention => &[Link],
            Activity | Application | Article | Collection | Document | Event | Group | Note
            | Organization | Person | Place | Profile | Relationship | Service | Tombstone => {
                &[Object]
            }
            IntransitiveActivity | Accept | Add | Announce | Create | Delete | Dislike | Flag
            | Follow | Ignore | Join | Leave | Like | Listen | Move | Offer | Read | Reject
            | Remove | Undo | Update | View => &[Activity],
            Arrive | Question | Travel => &[IntransitiveActivity],
            Block => &[Ignore],
            Invite => &[Offer],
            TentativeAccept => &[Accept],
            TentativeReject => &[Reject],
            Audio | Image | Page | Video => &[Document],
            CollectionPage | OrderedCollection => &[Collection],
            OrderedCollectionPage => &[OrderedCollection, CollectionPage],
        }
    }

    /// True if `self` is a (transitive) subtype of `other`.
    pub fn extends(self, other: TypeKind) -> bool {
        self.parents()
            .iter()
            .any(|&parent| parent == other || parent.extends(other))
    }

    pub fn is_extended_by(self, other: TypeKind) -> bool {
        other.extends(self)
    }

    /// Links and objects never describe the same thing.
    pub fn is_disjoint_with(self, other: TypeKind) -> bool {
        self.is_link() != other.is_link()
    }

    /// `Link` or one of its subtypes.
    pub fn is_link(self) -> bool {
        self == TypeKind::Link || self.extends(TypeKind::Link)
    }

    pub fn is_activity(self) -> bool {
        self == TypeKind::Activity || self.extends(TypeKind::Activity)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of an ActivityStreams property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    DateTime,
    Duration,
    Float,
    AnyUri,
    Bcp47,
    NonNegativeInteger,
    String,
    Type(TypeKind),
}

impl Kind {
    pub const PRIMITIVES: &'static [Kind] = &[
        Kind::Boolean,
        Kind::DateTime,
        Kind::Duration,
        Kind::Float,
        Kind::AnyUri,
        Kind::Bcp47,
        Kind::NonNegativeInteger,
        Kind::String,
    ];

    pub fn type_kind(self) -> Option<TypeKind> {
        match self {
            Kind::Type(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Boolean => f.write_str("xsd:boolean"),
            Kind::DateTime => f.write_str("xsd:dateTime"),
            Kind::Duration => f.write_str("xsd:duration"),
            Kind::Float => f.write_str("xsd:float"),
            Kind::AnyUri => f.write_str("xsd:anyURI"),
            Kind::Bcp47 => f.write_str("rfc:bcp47"),
            Kind::NonNegativeInteger => f.write_str("xsd:nonNegativeInteger"),
            Kind::String => f.write_str("xsd:string"),
            Kind::Type(t) => fmt::Display::fmt(t, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_priority_order() {
        assert_eq!(TypeKind::ALL.len(), 54);
        assert_eq!(TypeKind::ALL[0], TypeKind::Object);
        assert_eq!(TypeKind::ALL[1], TypeKind::Link);
        assert!(TypeKind::ALL[2..].windows(2).all(|w| w[0].name() < w[1].name()));
        assert_eq!(ANY_TYPE.len(), TypeKind::ALL.len());
    }

    #[rstest]
    #[case(TypeKind::Question, TypeKind::IntransitiveActivity, true)]
    #[case(TypeKind::Question, TypeKind::Activity, true)]
    #[case(TypeKind::Question, TypeKind::Object, true)]
    #[case(TypeKind::Block, TypeKind::Activity, true)]
    #[case(TypeKind::OrderedCollectionPage, TypeKind::CollectionPage, true)]
    #[case(TypeKind::Mention, TypeKind::Link, true)]
    #[case(TypeKind::Mention, TypeKind::Object, false)]
    #[case(TypeKind::Note, TypeKind::Note, false)]
    #[case(TypeKind::Object, TypeKind::Note, false)]
    fn test_extends(#[case] kind: TypeKind, #[case] other: TypeKind, #[case] expected: bool) {
        assert_eq!(kind.extends(other), expected);
        assert_eq!(other.is_extended_by(kind), expected);
    }

    #[test]
    fn test_disjoint() {
        assert!(TypeKind::Question.is_disjoint_with(TypeKind::Link));
        assert!(TypeKind::Question.is_disjoint_with(TypeKind::Mention));
        assert!(TypeKind::Mention.is_disjoint_with(TypeKind::Note));
        assert!(!TypeKind::Question.is_disjoint_with(TypeKind::Note));
    }

    #[rstest]
    #[case(TypeKind::Activity, true)]
    #[case(TypeKind::Question, true)]
    #[case(TypeKind::Invite, true)]
    #[case(TypeKind::Note, false)]
    #[case(TypeKind::Mention, false)]
    fn test_is_activity(#[case] kind: TypeKind, #[case] expected: bool) {
        assert_eq!(kind.is_activity(), expected);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Question".parse::<TypeKind>(), Ok(TypeKind::Question));
        assert!("question".parse::<TypeKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Float.to_string(), "xsd:float");
        assert_eq!(Kind::Type(TypeKind::Note).to_string(), "Note");
    }
}
