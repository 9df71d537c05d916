//! A small vocabulary of shapes used by the integration tests.
//!
//! `Circle` and `Disk` accept exactly the same JSON, so which of them a
//! value becomes depends only on the order a property lists them in.

#![allow(dead_code)]

use activity_core::values::{float, string};
use activity_core::{
    AliasMap, Error, JsonLdContext, KindFns, KindRegistry, PropertyDef, Result, Vocabulary,
};
use serde_json::{json, Value as JsonValue};
use std::fmt;
use std::sync::OnceLock;

pub const NS: &str = "https://shapes.example/ns";
pub const EXT: &str = "https://ext.example/ns";

#[derive(Debug, Clone, PartialEq)]
pub struct Shapes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Float,
    Text,
    Circle,
    Disk,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Float => "float",
            ShapeKind::Text => "text",
            ShapeKind::Circle => "circle",
            ShapeKind::Disk => "disk",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Float(f64),
    Text(String),
    Circle(f64),
    Disk(f64),
}

impl Vocabulary for Shapes {
    type Kind = ShapeKind;
    type Value = Shape;

    fn kind_of(value: &Shape) -> ShapeKind {
        match value {
            Shape::Float(_) => ShapeKind::Float,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Disk(_) => ShapeKind::Disk,
        }
    }
}

pub static SIZE: PropertyDef<Shapes> =
    PropertyDef::functional("size", NS, &[ShapeKind::Float, ShapeKind::Text]);

pub static SHAPES: PropertyDef<Shapes> = PropertyDef::non_functional(
    "shapes",
    NS,
    &[ShapeKind::Circle, ShapeKind::Disk, ShapeKind::Float],
);

pub static DISKS: PropertyDef<Shapes> =
    PropertyDef::non_functional("disks", NS, &[ShapeKind::Disk, ShapeKind::Circle]);

fn radius(raw: &JsonValue) -> Result<f64> {
    match raw.get("radius") {
        Some(r) => float::deserialize(r),
        None => Err(Error::type_mismatch("an object with a radius", raw)),
    }
}

fn round_fns() -> KindFns<Shapes> {
    KindFns {
        construct: |kind| match kind {
            ShapeKind::Disk => Shape::Disk(0.0),
            _ => Shape::Circle(0.0),
        },
        deserialize: |kind, raw, _, _| {
            let r = radius(raw)?;
            Ok(match kind {
                ShapeKind::Disk => Shape::Disk(r),
                _ => Shape::Circle(r),
            })
        },
        serialize: |value, _| match value {
            Shape::Circle(r) | Shape::Disk(r) => Ok(json!({ "radius": r })),
            other => Err(Error::RegistryNotInitialized(
                Shapes::kind_of(other).to_string(),
            )),
        },
        less: |a, b, _| match (a, b) {
            (Shape::Circle(a), Shape::Circle(b)) | (Shape::Disk(a), Shape::Disk(b)) => a < b,
            _ => false,
        },
        context: |_, _| JsonLdContext::with_namespace(EXT, "ext"),
    }
}

fn build() -> KindRegistry<Shapes> {
    let mut builder = KindRegistry::builder();
    builder
        .register(
            ShapeKind::Float,
            KindFns {
                construct: |_| Shape::Float(0.0),
                deserialize: |_, raw, _, _| float::deserialize(raw).map(Shape::Float),
                serialize: |value, _| match value {
                    Shape::Float(f) => Ok(float::serialize(*f)),
                    _ => Ok(JsonValue::Null),
                },
                less: |a, b, _| match (a, b) {
                    (Shape::Float(a), Shape::Float(b)) => float::less(*a, *b),
                    _ => false,
                },
                context: |_, _| JsonLdContext::new(),
            },
        )
        .register(
            ShapeKind::Text,
            KindFns {
                construct: |_| Shape::Text(String::new()),
                deserialize: |_, raw, _, _| string::deserialize(raw).map(Shape::Text),
                serialize: |value, _| match value {
                    Shape::Text(s) => Ok(string::serialize(s)),
                    _ => Ok(JsonValue::Null),
                },
                less: |a, b, _| match (a, b) {
                    (Shape::Text(a), Shape::Text(b)) => string::less(a, b),
                    _ => false,
                },
                context: |_, _| JsonLdContext::new(),
            },
        )
        .register(ShapeKind::Circle, round_fns())
        .register(ShapeKind::Disk, round_fns());
    builder.build()
}

pub fn registry() -> &'static KindRegistry<Shapes> {
    static REGISTRY: OnceLock<KindRegistry<Shapes>> = OnceLock::new();
    REGISTRY.get_or_init(build)
}

pub fn no_aliases() -> AliasMap {
    AliasMap::new()
}

pub fn aliased(alias: &str) -> AliasMap {
    let mut aliases = AliasMap::new();
    aliases.insert(NS.to_string(), alias.to_string());
    aliases
}
