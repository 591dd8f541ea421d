//! Symbol model supplied by the host front end.
//!
//! The host resolves source text into a [`SymbolGraph`]: an arena of
//! [`TypeDef`] values addressed by [`TypeId`], plus the list of types declared
//! in the compilation unit being analyzed. The graph is an immutable snapshot
//! for the duration of one analysis pass; nothing in this crate mutates it.
//!
//! References between types are plain ids. An id that does not resolve is
//! tolerated everywhere: lookups return `None` and classification falls back
//! to [`Classification::Unknown`](crate::Classification::Unknown).

use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Index of a [`TypeDef`] inside a [`SymbolGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Returns the arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural kind of a type as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Reference type.
    Class,
    /// Value type.
    Struct,
    /// Interface.
    Interface,
    /// Enumeration.
    Enum,
    /// Type with compiler-synthesized positional value semantics.
    Record,
    /// Array; the element is in [`TypeDef::element_type`].
    Array,
    /// The `void` pseudo-type.
    Void,
    /// Unbound generic parameter.
    TypeParameter,
    /// Anything else (delegates, pointers, ...).
    Other,
}

/// Declared accessibility of a member or constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// Visible everywhere.
    #[default]
    Public,
    /// Visible within the assembly.
    Internal,
    /// Visible to derived types.
    Protected,
    /// Visible within the assembly or to derived types.
    ProtectedInternal,
    /// Visible to derived types within the assembly.
    PrivateProtected,
    /// Visible within the declaring type.
    Private,
}

/// An attribute applied to a symbol.
///
/// Matched by name, against either the simple or the fully-qualified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRef {
    /// Simple name as written or resolved (e.g. `DataContract` or `DataContractAttribute`).
    pub name: String,
    /// Fully-qualified metadata name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl AttributeRef {
    /// Creates an attribute reference with only a simple name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
        }
    }

    /// Sets the fully-qualified name.
    #[must_use]
    pub fn qualified(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// An explicitly declared constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorRef {
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Number of parameters.
    #[serde(default)]
    pub parameter_count: usize,
}

impl ConstructorRef {
    /// Creates a constructor reference.
    #[must_use]
    pub fn new(accessibility: Accessibility, parameter_count: usize) -> Self {
        Self {
            accessibility,
            parameter_count,
        }
    }

    /// Whether this is a public constructor taking no parameters.
    #[must_use]
    pub fn is_public_parameterless(&self) -> bool {
        self.accessibility == Accessibility::Public && self.parameter_count == 0
    }
}

/// What a [`MemberRef`] describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Property, including record positional properties.
    #[default]
    Property,
    /// Field.
    Field,
    /// Named value of an enum.
    EnumValue,
}

/// A data member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    /// Member name.
    pub name: String,
    /// Member kind.
    #[serde(default)]
    pub kind: MemberKind,
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Declared type, absent for enum values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeId>,
    /// Attributes applied to the member.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeRef>,
    /// Location of the member's identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl MemberRef {
    /// Creates a public property.
    #[must_use]
    pub fn property(name: impl Into<String>, declared_type: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            accessibility: Accessibility::Public,
            declared_type: Some(declared_type),
            attributes: Vec::new(),
            location: None,
        }
    }

    /// Creates an enum value.
    #[must_use]
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::EnumValue,
            accessibility: Accessibility::Public,
            declared_type: None,
            attributes: Vec::new(),
            location: None,
        }
    }

    /// Sets the accessibility.
    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeRef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Whether this member is a public property.
    #[must_use]
    pub fn is_public_property(&self) -> bool {
        self.kind == MemberKind::Property && self.accessibility == Accessibility::Public
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRef {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty: TypeId,
    /// Location of the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl ParameterRef {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            location: None,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// A method declared on an interface or implemented by a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterRef>,
    /// Return type; `None` means `void`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeId>,
    /// The interface this method is declared on or explicitly implements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defining_interface: Option<TypeId>,
    /// Location of the method identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl MethodRef {
    /// Creates a `void` method without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            defining_interface: None,
            location: None,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, parameter: ParameterRef) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, ty: TypeId) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Sets the defining interface.
    #[must_use]
    pub fn defined_by(mut self, interface: TypeId) -> Self {
        self.defining_interface = Some(interface);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Whether `other` has the same name, parameter types and return type.
    ///
    /// Parameter names are not part of a signature.
    fn same_signature(&self, other: &Self) -> bool {
        self.name == other.name
            && self.return_type == other.return_type
            && self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(&other.parameters)
                .all(|(a, b)| a.ty == b.ty)
    }
}

/// A resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Simple name without generic arity (e.g. `List`).
    pub name: String,
    /// Containing namespace, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Structural kind.
    pub kind: TypeKind,
    /// Attributes applied to the type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeRef>,
    /// Base class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeId>,
    /// Directly implemented or extended interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeId>,
    /// Transitively flattened interfaces, when the host already computed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_interfaces: Option<Vec<TypeId>>,
    /// Explicitly declared constructors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<ConstructorRef>,
    /// Properties, fields and enum values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberRef>,
    /// Methods declared on the type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodRef>,
    /// Generic type arguments, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeId>,
    /// Element type for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<TypeId>,
    /// Location of the type's identifier in its declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Whether the declaration was produced by a code generator.
    #[serde(default)]
    pub is_generated: bool,
}

impl TypeDef {
    /// Creates a type of the given kind.
    #[must_use]
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            attributes: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            all_interfaces: None,
            constructors: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            type_arguments: Vec::new(),
            element_type: None,
            location: None,
            is_generated: false,
        }
    }

    /// Creates a class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Creates a struct.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Struct, name)
    }

    /// Creates an interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    /// Creates an enum.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, name)
    }

    /// Creates a record.
    #[must_use]
    pub fn record(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Record, name)
    }

    /// Creates an array of `element`.
    #[must_use]
    pub fn array(element: TypeId) -> Self {
        let mut def = Self::new(TypeKind::Array, "Array");
        def.element_type = Some(element);
        def
    }

    /// Sets the namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeRef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Sets the base type.
    #[must_use]
    pub fn extends(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    /// Adds a directly implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: TypeId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Adds an explicit constructor.
    #[must_use]
    pub fn constructor(mut self, constructor: ConstructorRef) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Adds a member.
    #[must_use]
    pub fn member(mut self, member: MemberRef) -> Self {
        self.members.push(member);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn method(mut self, method: MethodRef) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a generic type argument.
    #[must_use]
    pub fn type_argument(mut self, argument: TypeId) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Marks the type as generated.
    #[must_use]
    pub fn generated(mut self) -> Self {
        self.is_generated = true;
        self
    }

    /// Whether `(name, namespace)` equals the given identity.
    #[must_use]
    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    /// Returns `namespace.name`, or just the name outside any namespace.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Iterates over properties (not fields or enum values).
    pub fn properties(&self) -> impl Iterator<Item = &MemberRef> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Property)
    }

    /// Iterates over enum values.
    pub fn enum_values(&self) -> impl Iterator<Item = &MemberRef> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::EnumValue)
    }
}

/// Errors raised while loading a symbol graph.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// IO error reading the graph file.
    #[error("Failed to read symbol graph {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The graph document is not valid JSON or does not match the schema.
    #[error("Failed to parse symbol graph: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

/// The resolved types of one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGraph {
    /// Every type known to the unit, including referenced framework types.
    #[serde(default)]
    pub types: Vec<TypeDef>,
    /// Types declared in the unit, in source order.
    #[serde(default)]
    pub declarations: Vec<TypeId>,
}

impl SymbolGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a graph from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        serde_json::from_str(content).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a graph from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Adds a referenced (not declared) type and returns its id.
    pub fn add(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(def);
        id
    }

    /// Adds a type and marks it as declared in this unit.
    pub fn declare(&mut self, def: TypeDef) -> TypeId {
        let id = self.add(def);
        self.declarations.push(id);
        id
    }

    /// Looks up a type.
    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    /// Looks up a type for in-place edits while building a graph.
    pub fn get_mut(&mut self, id: TypeId) -> Option<&mut TypeDef> {
        self.types.get_mut(id.index())
    }

    /// Returns the simple name of a type, or `?` for a dangling id.
    #[must_use]
    pub fn name_of(&self, id: TypeId) -> &str {
        self.get(id).map_or("?", |t| t.name.as_str())
    }

    /// Number of types in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the strict ancestors of a type, nearest first.
    ///
    /// Stops at the first dangling or repeated id.
    pub fn base_chain(&self, id: TypeId) -> impl Iterator<Item = (TypeId, &TypeDef)> + '_ {
        let mut seen = HashSet::from([id]);
        let mut next = self.get(id).and_then(|t| t.base_type);
        std::iter::from_fn(move || {
            let current = next?;
            if !seen.insert(current) {
                return None;
            }
            let def = self.get(current)?;
            next = def.base_type;
            Some((current, def))
        })
    }

    /// Finds the method of `class` (or one of its ancestors) implementing
    /// `method` of `interface`.
    ///
    /// A method explicitly tied to the interface wins over one that merely
    /// matches by name and arity.
    #[must_use]
    pub fn find_implementation(
        &self,
        class: TypeId,
        interface: TypeId,
        method: &MethodRef,
    ) -> Option<&MethodRef> {
        let owners: Vec<&TypeDef> = self
            .get(class)
            .into_iter()
            .chain(self.base_chain(class).map(|(_, def)| def))
            .collect();

        let explicit = owners.iter().copied().find_map(|owner| {
            owner
                .methods
                .iter()
                .find(|m| m.defining_interface == Some(interface) && m.same_signature(method))
        });

        explicit.or_else(|| {
            owners.iter().copied().find_map(|owner| {
                owner
                    .methods
                    .iter()
                    .find(|m| m.defining_interface.is_none() && m.same_signature(method))
            })
        })
    }

    /// Returns every `(owner, target)` pair where `owner` references an id
    /// outside the arena.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(TypeId, TypeId)> {
        let mut dangling = Vec::new();
        for (index, def) in self.types.iter().enumerate() {
            let owner = TypeId(u32::try_from(index).unwrap_or(u32::MAX));
            let method_types = def.methods.iter().flat_map(|m| {
                m.return_type
                    .into_iter()
                    .chain(m.parameters.iter().map(|p| p.ty))
            });
            let referenced = def
                .base_type
                .into_iter()
                .chain(def.interfaces.iter().copied())
                .chain(def.all_interfaces.iter().flatten().copied())
                .chain(def.type_arguments.iter().copied())
                .chain(def.element_type)
                .chain(def.members.iter().filter_map(|m| m.declared_type))
                .chain(method_types);
            for target in referenced {
                if self.get(target).is_none() {
                    dangling.push((owner, target));
                }
            }
        }
        for &declared in &self.declarations {
            if self.get(declared).is_none() {
                dangling.push((declared, declared));
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_json() {
        let json = r#"{
            "types": [
                { "name": "Order", "namespace": "Shop", "kind": "class",
                  "attributes": [{ "name": "DataContract" }],
                  "location": { "file": "Order.cs", "line": 3, "column": 14 } },
                { "name": "Status", "kind": "enum",
                  "members": [{ "name": "Open", "kind": "enum_value" }] }
            ],
            "declarations": [0, 1]
        }"#;

        let graph = SymbolGraph::from_json(json).expect("graph should parse");
        assert_eq!(graph.len(), 2);
        let order = graph.get(TypeId(0)).expect("order exists");
        assert!(order.is("Order", "Shop"));
        assert_eq!(order.qualified_name(), "Shop.Order");
        assert_eq!(order.location.as_ref().map(|l| l.line), Some(3));
        let status = graph.get(TypeId(1)).expect("status exists");
        assert_eq!(status.enum_values().count(), 1);
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"{ "types": [{ "name": "X", "kind": "module" }] }"#;
        assert!(matches!(
            SymbolGraph::from_json(json),
            Err(ModelError::Parse { .. })
        ));
    }

    #[test]
    fn base_chain_stops_on_cycle() {
        let mut graph = SymbolGraph::new();
        let a = graph.add(TypeDef::class("A"));
        let b = graph.add(TypeDef::class("B").extends(a));
        if let Some(def) = graph.get_mut(a) {
            def.base_type = Some(b);
        }
        let chain: Vec<TypeId> = graph.base_chain(b).map(|(id, _)| id).collect();
        assert_eq!(chain, vec![a]);
    }

    #[test]
    fn explicit_implementation_preferred() {
        let mut graph = SymbolGraph::new();
        let iface = graph.add(TypeDef::interface("IOrderActor"));
        let contract = MethodRef::new("Submit").defined_by(iface);
        let class = graph.add(
            TypeDef::class("OrderActor")
                .method(MethodRef::new("Submit").at(Location::new("a.cs", 1, 1)))
                .method(
                    MethodRef::new("Submit")
                        .defined_by(iface)
                        .at(Location::new("a.cs", 2, 1)),
                ),
        );
        let found = graph
            .find_implementation(class, iface, &contract)
            .expect("implementation");
        assert_eq!(found.location.as_ref().map(|l| l.line), Some(2));
    }

    #[test]
    fn implementation_found_on_base_class() {
        let mut graph = SymbolGraph::new();
        let iface = graph.add(TypeDef::interface("IOrderActor"));
        let contract = MethodRef::new("Cancel").defined_by(iface);
        let base = graph.add(TypeDef::class("OrderActorBase").method(MethodRef::new("Cancel")));
        let class = graph.add(TypeDef::class("OrderActor").extends(base));
        assert!(graph.find_implementation(class, iface, &contract).is_some());
        let other = MethodRef::new("Cancel").param(ParameterRef::new("reason", iface));
        assert!(graph.find_implementation(class, iface, &other).is_none());
    }

    #[test]
    fn overloads_resolve_by_parameter_types() {
        let mut graph = SymbolGraph::new();
        let order = graph.add(TypeDef::class("Order"));
        let item = graph.add(TypeDef::structure("Item"));
        let iface = graph.add(TypeDef::interface("IStockActor"));
        let class = graph.add(
            TypeDef::class("StockActor")
                .method(
                    MethodRef::new("Put")
                        .param(ParameterRef::new("o", order))
                        .at(Location::new("a.cs", 3, 17)),
                )
                .method(
                    MethodRef::new("Put")
                        .param(ParameterRef::new("i", item))
                        .at(Location::new("a.cs", 4, 17)),
                ),
        );

        let by_item = MethodRef::new("Put").param(ParameterRef::new("value", item));
        let found = graph
            .find_implementation(class, iface, &by_item)
            .expect("implementation");
        assert_eq!(found.location.as_ref().map(|l| l.line), Some(4));

        let returning = MethodRef::new("Put")
            .param(ParameterRef::new("o", order))
            .returns(item);
        assert!(graph.find_implementation(class, iface, &returning).is_none());
    }

    #[test]
    fn reports_dangling_references() {
        let mut graph = SymbolGraph::new();
        let c = graph.declare(TypeDef::class("C").extends(TypeId(42)));
        graph.declarations.push(TypeId(7));
        let dangling = graph.dangling_references();
        assert!(dangling.contains(&(c, TypeId(42))));
        assert!(dangling.contains(&(TypeId(7), TypeId(7))));
    }
}
