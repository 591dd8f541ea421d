//! The remotable surface of an actor class.
//!
//! An actor class exposes every method of every interface in its flattened
//! interface set that derives from the capability marker. Each parameter and
//! non-void return of the implementing method is a [`SignatureUse`]. The types
//! reachable from a use are its async-unwrapped type and, for collections, the
//! first-level element type.

use crate::classify::{Classification, Classifier};
use crate::symbols::{MethodRef, TypeId, TypeKind};
use crate::types::Location;

/// Where in a signature a type is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsePosition {
    /// A named parameter.
    Parameter {
        /// Parameter name.
        name: String,
    },
    /// The return value.
    Return,
}

/// One parameter or return value on the actor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureUse {
    /// Capability interface declaring the method.
    pub interface: TypeId,
    /// Method name.
    pub method: String,
    /// Parameter or return.
    pub position: UsePosition,
    /// Type as written in the signature.
    pub declared: TypeId,
    /// Type after stripping async wrappers.
    pub ty: TypeId,
    /// Classification of [`Self::ty`].
    pub classification: Classification,
    /// First-level element of a collection use, with its classification.
    pub element: Option<(TypeId, Classification)>,
    /// Parameter location, or the implementing method's location for returns.
    pub location: Option<Location>,
}

impl SignatureUse {
    /// Whether this is a parameter use.
    #[must_use]
    pub fn is_parameter(&self) -> bool {
        matches!(self.position, UsePosition::Parameter { .. })
    }

    /// Iterates over the reachable types of this use: the unwrapped type
    /// first, then the collection element when there is one.
    pub fn reachable(&self) -> impl Iterator<Item = (TypeId, Classification)> + '_ {
        std::iter::once((self.ty, self.classification)).chain(self.element)
    }
}

/// Every signature use of one actor class, in interface then method order.
///
/// An implementing method appears once even when several capability
/// interfaces declare it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSurface {
    uses: Vec<SignatureUse>,
}

impl ActorSurface {
    /// Collects the surface of `class`.
    ///
    /// Interface methods without an implementation on the class or its bases
    /// contribute nothing.
    #[must_use]
    pub fn collect(class: TypeId, classifier: &Classifier<'_>) -> Self {
        let resolver = classifier.resolver();
        let graph = classifier.graph();
        let mut uses = Vec::new();
        let mut visited: Vec<&MethodRef> = Vec::new();

        let contracts = resolver
            .all_interfaces(class)
            .iter()
            .copied()
            .filter(|&iface| resolver.derives_from_capability(iface))
            .collect::<Vec<_>>();

        for interface in contracts {
            let Some(interface_def) = graph.get(interface) else {
                continue;
            };
            for contract in &interface_def.methods {
                let Some(implementation) = graph.find_implementation(class, interface, contract)
                else {
                    continue;
                };
                // One implicit implementation can satisfy several interfaces.
                if visited.iter().any(|seen| std::ptr::eq(*seen, implementation)) {
                    continue;
                }
                visited.push(implementation);

                let non_void = implementation
                    .return_type
                    .filter(|&ret| graph.get(ret).map_or(true, |def| def.kind != TypeKind::Void));
                if let Some(ret) = non_void {
                    uses.push(make_use(
                        classifier,
                        interface,
                        &implementation.name,
                        UsePosition::Return,
                        ret,
                        implementation.location.clone(),
                    ));
                }

                for parameter in &implementation.parameters {
                    uses.push(make_use(
                        classifier,
                        interface,
                        &implementation.name,
                        UsePosition::Parameter {
                            name: parameter.name.clone(),
                        },
                        parameter.ty,
                        parameter.location.clone(),
                    ));
                }
            }
        }

        Self { uses }
    }

    /// All uses.
    #[must_use]
    pub fn uses(&self) -> &[SignatureUse] {
        &self.uses
    }

    /// Whether the surface has no uses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }

    /// Iterates over every reachable type together with the use reaching it.
    pub fn reachable(&self) -> impl Iterator<Item = (TypeId, Classification, &SignatureUse)> {
        self.uses
            .iter()
            .flat_map(|u| u.reachable().map(move |(ty, class)| (ty, class, u)))
    }
}

fn make_use(
    classifier: &Classifier<'_>,
    interface: TypeId,
    method: &str,
    position: UsePosition,
    declared: TypeId,
    location: Option<Location>,
) -> SignatureUse {
    let ty = classifier.unwrap_async(declared);
    let classification = classifier.classify(ty);
    let element = classification
        .element()
        .map(|element| (element, classifier.classify(element)));
    SignatureUse {
        interface,
        method: method.to_string(),
        position,
        declared,
        ty,
        classification,
        element,
        location,
    }
}
