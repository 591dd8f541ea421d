//! Type classification.
//!
//! Every rule looks at types through [`Classification`] instead of checking
//! kinds and names ad hoc. Classification is a pure function of the graph and
//! is memoized per [`TypeId`].

use crate::resolve::InheritanceResolver;
use crate::symbols::{SymbolGraph, TypeDef, TypeId, TypeKind};
use dashmap::DashMap;

/// What a type is, from the serializer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Scalars, text and value types with a well-known wire format.
    Primitive,
    /// Enumeration; values are checked individually.
    Enum,
    /// Sequence, set or map shape with a first-level element type.
    Collection {
        /// Array element, or the first generic argument.
        element: TypeId,
    },
    /// The single-value async wrapper; transparent to the rules.
    AsyncWrapper {
        /// The wrapped type.
        inner: TypeId,
    },
    /// Positional record.
    Record,
    /// Any other class or struct.
    ComplexObject,
    /// Interface that is not a collection shape.
    Interface,
    /// Unresolved, malformed or otherwise irrelevant.
    Unknown,
}

impl Classification {
    /// Whether serialization metadata is expected on the type itself.
    #[must_use]
    pub fn needs_contract(self) -> bool {
        matches!(self, Self::Record | Self::ComplexObject)
    }

    /// First-level element type of a collection.
    #[must_use]
    pub fn element(self) -> Option<TypeId> {
        match self {
            Self::Collection { element } => Some(element),
            _ => None,
        }
    }
}

/// `System` types whose wire format is well understood.
const SYSTEM_KNOWN: &[&str] = &[
    "Byte", "SByte", "Int16", "Int32", "Int64", "UInt16", "UInt32", "UInt64", "Single", "Double",
    "Decimal", "Boolean", "Char", "Object", "String", "DateTime", "TimeSpan", "Guid", "Uri", "Void",
];

/// Keyword spellings some hosts report without a namespace.
const KEYWORD_ALIASES: &[&str] = &[
    "byte", "sbyte", "short", "int", "long", "ushort", "uint", "ulong", "float", "double",
    "decimal", "bool", "char", "object", "string", "void",
];

/// Other namespaced types with a well-known wire format.
const OTHER_KNOWN: &[(&str, &str)] = &[("System.Xml", "XmlQualifiedName")];

/// Names of collection types and the interfaces that make a type one.
const COLLECTION_SHAPES: &[&str] = &[
    "IEnumerable",
    "ICollection",
    "IList",
    "IDictionary",
    "List",
    "Array",
    "Dictionary",
    "HashSet",
    "Queue",
    "Stack",
];

/// Memoizing classifier.
pub struct Classifier<'a> {
    resolver: &'a InheritanceResolver<'a>,
    cache: DashMap<TypeId, Classification>,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier that uses `resolver` for interface lookups.
    #[must_use]
    pub fn new(resolver: &'a InheritanceResolver<'a>) -> Self {
        Self {
            resolver,
            cache: DashMap::new(),
        }
    }

    /// The resolver backing this classifier.
    #[must_use]
    pub fn resolver(&self) -> &'a InheritanceResolver<'a> {
        self.resolver
    }

    /// The graph being classified.
    #[must_use]
    pub fn graph(&self) -> &'a SymbolGraph {
        self.resolver.graph()
    }

    /// Classifies a type.
    #[must_use]
    pub fn classify(&self, id: TypeId) -> Classification {
        if let Some(hit) = self.cache.get(&id) {
            return *hit;
        }
        let computed = self.compute(id);
        self.cache.insert(id, computed);
        computed
    }

    /// Strips async wrappers until a non-wrapper type is reached.
    #[must_use]
    pub fn unwrap_async(&self, id: TypeId) -> TypeId {
        let mut current = id;
        for _ in 0..=self.graph().len() {
            match self.classify(current) {
                Classification::AsyncWrapper { inner } => current = inner,
                _ => return current,
            }
        }
        current
    }

    fn compute(&self, id: TypeId) -> Classification {
        let Some(def) = self.graph().get(id) else {
            return Classification::Unknown;
        };

        if def.kind == TypeKind::Enum {
            return Classification::Enum;
        }
        if def.kind == TypeKind::Void || is_known_primitive(def) {
            return Classification::Primitive;
        }

        let wrapper = &self.resolver.framework().async_wrapper;
        if def.is(&wrapper.name, &wrapper.namespace) {
            return match def.type_arguments.as_slice() {
                [] => Classification::Primitive,
                [inner] => Classification::AsyncWrapper { inner: *inner },
                _ => Classification::Unknown,
            };
        }

        if def.kind == TypeKind::Array {
            return def
                .element_type
                .map_or(Classification::Unknown, |element| {
                    Classification::Collection { element }
                });
        }

        if self.is_collection_shape(id, def) {
            return def
                .type_arguments
                .first()
                .map_or(Classification::Unknown, |&element| {
                    Classification::Collection { element }
                });
        }

        match def.kind {
            TypeKind::Record => Classification::Record,
            TypeKind::Class | TypeKind::Struct => Classification::ComplexObject,
            TypeKind::Interface => Classification::Interface,
            _ => Classification::Unknown,
        }
    }

    fn is_collection_shape(&self, id: TypeId, def: &TypeDef) -> bool {
        if !matches!(
            def.kind,
            TypeKind::Class | TypeKind::Struct | TypeKind::Interface | TypeKind::Record
        ) {
            return false;
        }
        if COLLECTION_SHAPES.contains(&def.name.as_str()) {
            return true;
        }
        let graph = self.graph();
        self.resolver
            .all_interfaces(id)
            .iter()
            .filter_map(|&iface| graph.get(iface))
            .any(|iface| COLLECTION_SHAPES.contains(&iface.name.as_str()))
    }
}

fn is_known_primitive(def: &TypeDef) -> bool {
    match def.namespace.as_deref() {
        None | Some("") => KEYWORD_ALIASES.contains(&def.name.as_str()),
        Some("System") => SYSTEM_KNOWN.contains(&def.name.as_str()),
        Some(ns) => OTHER_KNOWN
            .iter()
            .any(|&(known_ns, name)| known_ns == ns && name == def.name),
    }
}
