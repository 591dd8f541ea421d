//! Graph builders for tests.
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to the rule crates' tests. Every symbol a [`Fixture`] creates gets a fresh
//! location on the next line of a single virtual file, so findings can be
//! told apart by line.

use crate::classify::Classifier;
use crate::config::FrameworkConfig;
use crate::context::{Declaration, DeclarationRole, RuleContext};
use crate::resolve::InheritanceResolver;
use crate::rule::Rule;
use crate::sink::DiagnosticSink;
use crate::surface::ActorSurface;
use crate::symbols::{MemberRef, MethodRef, ParameterRef, SymbolGraph, TypeDef, TypeId};
use crate::types::{Location, Violation};
use std::collections::{HashMap, HashSet};

/// One method of an actor contract, mirrored onto its implementation.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    name: String,
    params: Vec<(String, TypeId)>,
    returns: Option<TypeId>,
}

impl Signature {
    /// A `void` method without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: TypeId) -> Self {
        self.params.push((name.into(), ty));
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, ty: TypeId) -> Self {
        self.returns = Some(ty);
        self
    }
}

/// A graph under construction with the framework types installed.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// The graph built so far.
    pub graph: SymbolGraph,
    /// The actor base class.
    pub actor_base: TypeId,
    /// The capability marker interface.
    pub capability: TypeId,
    file: String,
    line: usize,
    system: HashMap<String, TypeId>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new("Actors.cs")
    }
}

impl Fixture {
    /// Creates a graph whose declarations live in `file`.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        let framework = FrameworkConfig::default();
        let mut graph = SymbolGraph::new();
        let actor_base = graph.add(
            TypeDef::class(&framework.actor_base.name)
                .namespace(&framework.actor_base.namespace),
        );
        let capability = graph.add(
            TypeDef::interface(&framework.capability_interface.name)
                .namespace(&framework.capability_interface.namespace),
        );
        Self {
            graph,
            actor_base,
            capability,
            file: file.into(),
            line: 0,
            system: HashMap::new(),
        }
    }

    /// Returns a location on the next unused line.
    pub fn loc(&mut self) -> Location {
        self.line += 1;
        Location::new(self.file.as_str(), self.line, 5)
    }

    /// Adds a referenced type, without a location.
    pub fn add(&mut self, def: TypeDef) -> TypeId {
        self.graph.add(def)
    }

    /// Declares a type, giving it a location when it has none.
    pub fn declare(&mut self, mut def: TypeDef) -> TypeId {
        if def.location.is_none() {
            def.location = Some(self.loc());
        }
        self.graph.declare(def)
    }

    /// Adds a referenced type that has a declaration location but is not
    /// itself declared in the unit.
    pub fn add_located(&mut self, mut def: TypeDef) -> TypeId {
        if def.location.is_none() {
            def.location = Some(self.loc());
        }
        self.graph.add(def)
    }

    /// A public property with a location.
    pub fn property(&mut self, name: &str, ty: TypeId) -> MemberRef {
        MemberRef::property(name, ty).at(self.loc())
    }

    /// An enum value with a location.
    pub fn enum_value(&mut self, name: &str) -> MemberRef {
        MemberRef::enum_value(name).at(self.loc())
    }

    /// The `System` type of the given name (`String`, `Int32`, `Guid`, ...).
    pub fn system(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.system.get(name) {
            return id;
        }
        let def = match name {
            "String" | "Object" | "Uri" => TypeDef::class(name),
            _ => TypeDef::structure(name),
        };
        let id = self.graph.add(def.namespace("System"));
        self.system.insert(name.to_string(), id);
        id
    }

    /// `Task<inner>`.
    pub fn task_of(&mut self, inner: TypeId) -> TypeId {
        self.graph.add(
            TypeDef::class("Task")
                .namespace("System.Threading.Tasks")
                .type_argument(inner),
        )
    }

    /// Non-generic `Task`.
    pub fn task(&mut self) -> TypeId {
        self.graph
            .add(TypeDef::class("Task").namespace("System.Threading.Tasks"))
    }

    /// `List<element>`.
    pub fn list_of(&mut self, element: TypeId) -> TypeId {
        self.graph.add(
            TypeDef::class("List")
                .namespace("System.Collections.Generic")
                .type_argument(element),
        )
    }

    /// `Dictionary<key, value>`.
    pub fn dictionary_of(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.graph.add(
            TypeDef::class("Dictionary")
                .namespace("System.Collections.Generic")
                .type_argument(key)
                .type_argument(value),
        )
    }

    /// `element[]`.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        self.graph.add(TypeDef::array(element))
    }

    /// Declares an interface `name` extending the capability marker, with the
    /// given methods.
    pub fn contract(&mut self, name: &str, signatures: &[Signature]) -> TypeId {
        let mut def = TypeDef::interface(name).implements(self.capability);
        for signature in signatures {
            def = def.method(contract_method(signature));
        }
        self.declare(def)
    }

    /// Declares an actor class `name` implementing `contract`, with a located
    /// implementation for every given signature.
    pub fn actor(&mut self, name: &str, contract: TypeId, signatures: &[Signature]) -> TypeId {
        let location = self.loc();
        let mut def = TypeDef::class(name)
            .extends(self.actor_base)
            .implements(contract)
            .at(location);
        for signature in signatures {
            def = def.method(self.implementation(signature));
        }
        self.graph.declare(def)
    }

    /// Declares a contract `I{name}` and an actor `name` implementing it.
    pub fn actor_with(&mut self, name: &str, signatures: &[Signature]) -> (TypeId, TypeId) {
        let contract = self.contract(&format!("I{name}"), signatures);
        let class = self.actor(name, contract, signatures);
        (class, contract)
    }

    /// A located implementation method for `signature`.
    pub fn implementation(&mut self, signature: &Signature) -> MethodRef {
        let mut method = MethodRef::new(&signature.name).at(self.loc());
        for (name, ty) in &signature.params {
            let location = self.loc();
            method = method.param(ParameterRef::new(name, *ty).at(location));
        }
        if let Some(ret) = signature.returns {
            method = method.returns(ret);
        }
        method
    }

    /// Runs one rule over every declaration with the default framework
    /// identities and returns its sorted findings.
    #[must_use]
    pub fn check(&self, rule: &dyn Rule) -> Vec<Violation> {
        check(rule, &self.graph)
    }
}

fn contract_method(signature: &Signature) -> MethodRef {
    let mut method = MethodRef::new(&signature.name);
    for (name, ty) in &signature.params {
        method = method.param(ParameterRef::new(name, *ty));
    }
    if let Some(ret) = signature.returns {
        method = method.returns(ret);
    }
    method
}

/// Runs one rule over every resolvable declaration of `graph`.
#[must_use]
pub fn check(rule: &dyn Rule, graph: &SymbolGraph) -> Vec<Violation> {
    let sink = DiagnosticSink::new();
    sink.extend(check_raw(rule, graph));
    sink.into_sorted()
}

/// Like [`check`], but returns findings in emission order without
/// deduplication.
#[must_use]
pub fn check_raw(rule: &dyn Rule, graph: &SymbolGraph) -> Vec<Violation> {
    let framework = FrameworkConfig::default();
    let resolver = InheritanceResolver::new(graph, &framework);
    let classifier = Classifier::new(&resolver);
    let checked: HashSet<TypeId> = graph
        .declarations
        .iter()
        .copied()
        .filter(|&id| graph.get(id).is_some())
        .collect();
    let mut violations = Vec::new();

    for &id in &graph.declarations {
        let Some(def) = graph.get(id) else {
            continue;
        };
        let role = DeclarationRole::of(id, def, &resolver);
        if !rule.applies_to(role) {
            continue;
        }
        let surface = (role == DeclarationRole::ActorClass)
            .then(|| ActorSurface::collect(id, &classifier));
        let ctx = RuleContext::new(
            &classifier,
            Declaration { id, def, role },
            surface.as_ref(),
            &checked,
        );
        violations.extend(rule.check(&ctx));
    }
    violations
}
