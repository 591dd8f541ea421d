//! Attribute alias tables.
//!
//! Attributes are matched by name. Each logical concept accepts a small set of
//! spellings: the short form (`DataContract`), the metadata form with the
//! `Attribute` suffix (`DataContractAttribute`) and the fully-qualified form.

use crate::symbols::AttributeRef;

/// A logical attribute concept the rules look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeConcept {
    /// Type-level opt-in to explicit member selection (`[DataContract]`).
    DataContract,
    /// Any type-level marker recognized as a serialization contract.
    SerializationContract,
    /// Property-level participation marker (`[DataMember]`).
    DataMember,
    /// Per-value enum marker (`[EnumMember]`).
    EnumMember,
    /// Explicit wire name for a property (`[JsonPropertyName]`).
    WireName,
}

const DATA_CONTRACT: &[&str] = &[
    "DataContract",
    "DataContractAttribute",
    "System.Runtime.Serialization.DataContractAttribute",
];

const SERIALIZATION_CONTRACT: &[&str] = &[
    "DataContract",
    "DataContractAttribute",
    "System.Runtime.Serialization.DataContractAttribute",
    "Serializable",
    "SerializableAttribute",
    "System.SerializableAttribute",
    "JsonObject",
    "JsonObjectAttribute",
    "Newtonsoft.Json.JsonObjectAttribute",
];

const DATA_MEMBER: &[&str] = &[
    "DataMember",
    "DataMemberAttribute",
    "System.Runtime.Serialization.DataMemberAttribute",
];

const ENUM_MEMBER: &[&str] = &[
    "EnumMember",
    "EnumMemberAttribute",
    "System.Runtime.Serialization.EnumMemberAttribute",
];

const WIRE_NAME: &[&str] = &[
    "JsonPropertyName",
    "JsonPropertyNameAttribute",
    "System.Text.Json.Serialization.JsonPropertyNameAttribute",
];

impl AttributeConcept {
    /// Accepted spellings for this concept.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::DataContract => DATA_CONTRACT,
            Self::SerializationContract => SERIALIZATION_CONTRACT,
            Self::DataMember => DATA_MEMBER,
            Self::EnumMember => ENUM_MEMBER,
            Self::WireName => WIRE_NAME,
        }
    }

    /// Whether a single attribute reference denotes this concept.
    #[must_use]
    pub fn matches(self, attribute: &AttributeRef) -> bool {
        let aliases = self.aliases();
        aliases.contains(&attribute.name.as_str())
            || attribute
                .full_name
                .as_deref()
                .is_some_and(|full| aliases.contains(&full))
    }
}

/// Checks whether any attribute in `attributes` denotes `concept`.
#[must_use]
pub fn has_attribute(attributes: &[AttributeRef], concept: AttributeConcept) -> bool {
    attributes.iter().any(|a| concept.matches(a))
}
