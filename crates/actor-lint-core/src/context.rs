//! Context types for rule execution.

use crate::classify::{Classification, Classifier};
use crate::config::FrameworkConfig;
use crate::resolve::InheritanceResolver;
use crate::surface::ActorSurface;
use crate::symbols::{SymbolGraph, TypeDef, TypeId, TypeKind};
use std::collections::HashSet;

/// What a declaration is, as far as rule dispatch is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationRole {
    /// Class deriving from the actor base type.
    ActorClass,
    /// Any other class.
    Class,
    /// Interface.
    Interface,
    /// Enum.
    Enum,
    /// Struct, record or anything else.
    Other,
}

impl DeclarationRole {
    /// Determines the role of a declared type.
    #[must_use]
    pub fn of(id: TypeId, def: &TypeDef, resolver: &InheritanceResolver<'_>) -> Self {
        match def.kind {
            TypeKind::Enum => Self::Enum,
            TypeKind::Interface => Self::Interface,
            TypeKind::Class if resolver.derives_from_actor_base(id) => Self::ActorClass,
            TypeKind::Class => Self::Class,
            _ => Self::Other,
        }
    }
}

/// The declaration under analysis.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    /// Id of the declared type.
    pub id: TypeId,
    /// The declared type.
    pub def: &'a TypeDef,
    /// Dispatch role.
    pub role: DeclarationRole,
}

/// Context provided to rules for one declaration.
///
/// Everything reachable from here is shared and read-only; a rule cannot
/// observe other declarations' findings.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// The symbol graph of the unit.
    pub graph: &'a SymbolGraph,
    /// Inheritance queries.
    pub resolver: &'a InheritanceResolver<'a>,
    /// Type classification.
    pub classifier: &'a Classifier<'a>,
    /// Framework identities.
    pub framework: &'a FrameworkConfig,
    /// The declaration being checked.
    pub declaration: Declaration<'a>,
    /// Remotable surface, present for actor classes only.
    pub surface: Option<&'a ActorSurface>,
    /// Declarations selected for this pass, after exclusions.
    pub checked: &'a HashSet<TypeId>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for `declaration`.
    #[must_use]
    pub fn new(
        classifier: &'a Classifier<'a>,
        declaration: Declaration<'a>,
        surface: Option<&'a ActorSurface>,
        checked: &'a HashSet<TypeId>,
    ) -> Self {
        let resolver = classifier.resolver();
        Self {
            graph: resolver.graph(),
            resolver,
            classifier,
            framework: resolver.framework(),
            declaration,
            surface,
            checked,
        }
    }

    /// Whether `id` is itself checked in this pass.
    #[must_use]
    pub fn is_checked(&self, id: TypeId) -> bool {
        self.checked.contains(&id)
    }

    /// Shorthand for classifying a type.
    #[must_use]
    pub fn classify(&self, id: TypeId) -> Classification {
        self.classifier.classify(id)
    }

    /// Looks up a type.
    #[must_use]
    pub fn type_def(&self, id: TypeId) -> Option<&'a TypeDef> {
        self.graph.get(id)
    }

    /// Name of a type as shown in messages: the simple name, or `Elem[]` for
    /// arrays.
    #[must_use]
    pub fn display_name(&self, id: TypeId) -> String {
        display_name(self.graph, id)
    }
}

pub(crate) fn display_name(graph: &SymbolGraph, id: TypeId) -> String {
    let mut suffix = String::new();
    let mut current = id;
    for _ in 0..=graph.len() {
        match graph.get(current) {
            Some(def) if def.kind == TypeKind::Array => match def.element_type {
                Some(element) => {
                    suffix.push_str("[]");
                    current = element;
                }
                None => break,
            },
            _ => break,
        }
    }
    format!("{}{suffix}", graph.name_of(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_names_carry_brackets() {
        let mut graph = SymbolGraph::new();
        let item = graph.add(TypeDef::class("Item"));
        let items = graph.add(TypeDef::array(item));
        let jagged = graph.add(TypeDef::array(items));
        let raw = graph.add(TypeDef::new(TypeKind::Array, "Array"));
        assert_eq!(display_name(&graph, item), "Item");
        assert_eq!(display_name(&graph, items), "Item[]");
        assert_eq!(display_name(&graph, jagged), "Item[][]");
        assert_eq!(display_name(&graph, raw), "Array");
        assert_eq!(display_name(&graph, TypeId(40)), "?");
    }

    #[test]
    fn roles() {
        let mut graph = SymbolGraph::new();
        let actor = graph.add(TypeDef::class("Actor").namespace("Dapr.Actors.Runtime"));
        let class = graph.add(TypeDef::class("CartActor").extends(actor));
        let plain = graph.add(TypeDef::class("Cart"));
        let record = graph.add(TypeDef::record("Line"));
        let framework = FrameworkConfig::default();
        let resolver = InheritanceResolver::new(&graph, &framework);

        let role = |id: TypeId| {
            let def = graph.get(id).expect("declared");
            DeclarationRole::of(id, def, &resolver)
        };
        assert_eq!(role(class), DeclarationRole::ActorClass);
        assert_eq!(role(plain), DeclarationRole::Class);
        assert_eq!(role(actor), DeclarationRole::Class);
        assert_eq!(role(record), DeclarationRole::Other);
    }
}
