//! Inheritance queries over the symbol graph.

use crate::config::{FrameworkConfig, TypeIdentity};
use crate::symbols::{SymbolGraph, TypeDef, TypeId};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Answers "derives from the actor base" and "extends the capability marker".
///
/// Interface flattening is memoized per [`TypeId`]. The cache only ever holds
/// completed results, so concurrent workers may race to compute the same
/// entry; the last write wins and every write is identical.
pub struct InheritanceResolver<'g> {
    graph: &'g SymbolGraph,
    framework: &'g FrameworkConfig,
    flattened: DashMap<TypeId, Arc<[TypeId]>>,
}

impl<'g> InheritanceResolver<'g> {
    /// Creates a resolver over `graph` using the given framework identities.
    #[must_use]
    pub fn new(graph: &'g SymbolGraph, framework: &'g FrameworkConfig) -> Self {
        Self {
            graph,
            framework,
            flattened: DashMap::new(),
        }
    }

    /// The graph being resolved.
    #[must_use]
    pub fn graph(&self) -> &'g SymbolGraph {
        self.graph
    }

    /// The framework identities in use.
    #[must_use]
    pub fn framework(&self) -> &'g FrameworkConfig {
        self.framework
    }

    /// Whether `id` is the capability marker interface itself.
    #[must_use]
    pub fn is_capability(&self, id: TypeId) -> bool {
        self.graph
            .get(id)
            .is_some_and(|def| matches_identity(def, &self.framework.capability_interface))
    }

    /// Whether any strict ancestor of `id` is the actor base type.
    #[must_use]
    pub fn derives_from_actor_base(&self, id: TypeId) -> bool {
        let base = &self.framework.actor_base;
        self.graph
            .base_chain(id)
            .any(|(_, def)| matches_identity(def, base))
    }

    /// Whether the flattened interface set of `id` contains the capability marker.
    ///
    /// The marker does not derive from itself.
    #[must_use]
    pub fn derives_from_capability(&self, id: TypeId) -> bool {
        self.all_interfaces(id)
            .iter()
            .any(|&iface| self.is_capability(iface))
    }

    /// Returns the transitive interface set of `id`, including interfaces
    /// inherited through base classes, in first-seen order.
    ///
    /// Uses the host's pre-flattened set when one was supplied.
    #[must_use]
    pub fn all_interfaces(&self, id: TypeId) -> Arc<[TypeId]> {
        if let Some(cached) = self.flattened.get(&id) {
            return Arc::clone(cached.value());
        }
        let computed = self.flatten(id);
        self.flattened.insert(id, Arc::clone(&computed));
        computed
    }

    fn flatten(&self, id: TypeId) -> Arc<[TypeId]> {
        let Some(def) = self.graph.get(id) else {
            return Arc::from(Vec::new());
        };
        if let Some(all) = &def.all_interfaces {
            return Arc::from(all.as_slice());
        }

        let mut ordered = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut stack: Vec<TypeId> = Vec::new();

        let owners = std::iter::once(def).chain(self.graph.base_chain(id).map(|(_, d)| d));
        for owner in owners {
            stack.extend(owner.interfaces.iter().rev());
            while let Some(next) = stack.pop() {
                if !seen.insert(next) {
                    continue;
                }
                ordered.push(next);

                if let Some(done) = self.flattened.get(&next) {
                    ordered.extend(done.iter().copied().filter(|&i| seen.insert(i)));
                    continue;
                }
                let Some(next_def) = self.graph.get(next) else {
                    continue;
                };
                match &next_def.all_interfaces {
                    Some(all) => ordered.extend(all.iter().copied().filter(|&i| seen.insert(i))),
                    None => stack.extend(next_def.interfaces.iter().rev()),
                }
            }
        }

        Arc::from(ordered)
    }
}

fn matches_identity(def: &TypeDef, identity: &TypeIdentity) -> bool {
    def.is(&identity.name, &identity.namespace)
}
