//! Predicates shared by several rules.

use actor_lint_core::utils::{has_attribute, AttributeConcept};
use actor_lint_core::{Label, RuleContext, SignatureUse, TypeDef, TypeId, TypeKind};

/// Whether the type carries any recognized serialization-contract attribute.
pub(crate) fn has_serialization_contract(def: &TypeDef) -> bool {
    has_attribute(&def.attributes, AttributeConcept::SerializationContract)
}

/// Whether the type carries the contract-level attribute itself.
pub(crate) fn has_data_contract(def: &TypeDef) -> bool {
    has_attribute(&def.attributes, AttributeConcept::DataContract)
}

/// Whether an interface looks like an actor contract but does not extend the
/// capability marker.
pub(crate) fn is_unmarked_actor_interface(ctx: &RuleContext<'_>, id: TypeId) -> bool {
    let Some(def) = ctx.type_def(id) else {
        return false;
    };
    def.kind == TypeKind::Interface
        && def.name.ends_with(&ctx.framework.actor_interface_suffix)
        && !ctx.resolver.is_capability(id)
        && !ctx.resolver.derives_from_capability(id)
}

/// A label pointing at the signature use that made a type reachable.
pub(crate) fn use_label(use_: &SignatureUse) -> Option<Label> {
    use_.location
        .clone()
        .map(|location| Label::new(location, format!("used by '{}'", use_.method)))
}
