//! IRIs, literals, entities and individuals.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::{owl, rdf, rdfs, xsd};
use crate::ModelError;

// ============================================================================
// IRIs and literals
// ============================================================================

/// An absolute IRI. Stored without angle brackets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Validating constructor used at untrusted boundaries.
    pub fn parse(iri: &str) -> Result<Self, ModelError> {
        if iri.is_empty() {
            return Err(ModelError::InvalidIri {
                iri: iri.to_string(),
                reason: "empty".to_string(),
            });
        }
        if let Some(bad) = iri
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '`'))
        {
            return Err(ModelError::InvalidIri {
                iri: iri.to_string(),
                reason: format!("forbidden character {bad:?}"),
            });
        }
        Ok(Self(iri.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment or last path segment, used for diagnostics.
    pub fn local_name(&self) -> &str {
        self.0
            .rsplit(|c| c == '#' || c == '/')
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Iri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A typed literal. Plain literals carry `xsd:string`, language-tagged
/// literals carry `rdf:langString`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Iri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new(rdf::LANG_STRING),
            language: Some(language.into()),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lexical)?;
        match &self.language {
            Some(lang) => write!(f, "@{lang}"),
            None => write!(f, "^^{}", self.datatype),
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

macro_rules! entity_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Iri);

        impl $name {
            pub fn new(iri: impl Into<Iri>) -> Self {
                Self(iri.into())
            }

            pub fn iri(&self) -> &Iri {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_newtype!(Class);
entity_newtype!(Datatype);
entity_newtype!(ObjectProperty);
entity_newtype!(DataProperty);
entity_newtype!(AnnotationProperty);
entity_newtype!(NamedIndividual);

/// The six OWL 2 entity types, identified by their declaration type IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Class,
    Datatype,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::Class,
        EntityType::Datatype,
        EntityType::ObjectProperty,
        EntityType::DataProperty,
        EntityType::AnnotationProperty,
        EntityType::NamedIndividual,
    ];

    /// The `rdf:type` object used to declare entities of this type.
    pub fn type_iri(self) -> &'static str {
        match self {
            EntityType::Class => owl::CLASS,
            EntityType::Datatype => rdfs::DATATYPE,
            EntityType::ObjectProperty => owl::OBJECT_PROPERTY,
            EntityType::DataProperty => owl::DATATYPE_PROPERTY,
            EntityType::AnnotationProperty => owl::ANNOTATION_PROPERTY,
            EntityType::NamedIndividual => owl::NAMED_INDIVIDUAL,
        }
    }

    pub fn from_type_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.type_iri() == iri)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityType::Class => "Class",
            EntityType::Datatype => "Datatype",
            EntityType::ObjectProperty => "ObjectProperty",
            EntityType::DataProperty => "DataProperty",
            EntityType::AnnotationProperty => "AnnotationProperty",
            EntityType::NamedIndividual => "NamedIndividual",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Entity {
    Class(Class),
    Datatype(Datatype),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
}

impl Entity {
    pub fn of_type(entity_type: EntityType, iri: impl Into<Iri>) -> Self {
        let iri = iri.into();
        match entity_type {
            EntityType::Class => Entity::Class(Class(iri)),
            EntityType::Datatype => Entity::Datatype(Datatype(iri)),
            EntityType::ObjectProperty => Entity::ObjectProperty(ObjectProperty(iri)),
            EntityType::DataProperty => Entity::DataProperty(DataProperty(iri)),
            EntityType::AnnotationProperty => Entity::AnnotationProperty(AnnotationProperty(iri)),
            EntityType::NamedIndividual => Entity::NamedIndividual(NamedIndividual(iri)),
        }
    }

    pub fn iri(&self) -> &Iri {
        match self {
            Entity::Class(e) => e.iri(),
            Entity::Datatype(e) => e.iri(),
            Entity::ObjectProperty(e) => e.iri(),
            Entity::DataProperty(e) => e.iri(),
            Entity::AnnotationProperty(e) => e.iri(),
            Entity::NamedIndividual(e) => e.iri(),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Class(_) => EntityType::Class,
            Entity::Datatype(_) => EntityType::Datatype,
            Entity::ObjectProperty(_) => EntityType::ObjectProperty,
            Entity::DataProperty(_) => EntityType::DataProperty,
            Entity::AnnotationProperty(_) => EntityType::AnnotationProperty,
            Entity::NamedIndividual(_) => EntityType::NamedIndividual,
        }
    }
}

// ============================================================================
// Individuals and property expressions
// ============================================================================

/// An anonymous individual, identified by its blank-node label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousIndividual(pub String);

impl AnonymousIndividual {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    pub fn named(iri: impl Into<Iri>) -> Self {
        Individual::Named(NamedIndividual::new(iri))
    }

    pub fn anonymous(label: impl Into<String>) -> Self {
        Individual::Anonymous(AnonymousIndividual::new(label))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    Named(ObjectProperty),
    Inverse(ObjectProperty),
}

impl ObjectPropertyExpression {
    pub fn named(iri: impl Into<Iri>) -> Self {
        ObjectPropertyExpression::Named(ObjectProperty::new(iri))
    }

    pub fn inverse(iri: impl Into<Iri>) -> Self {
        ObjectPropertyExpression::Inverse(ObjectProperty::new(iri))
    }

    /// The named property underneath any inversion.
    pub fn property(&self) -> &ObjectProperty {
        match self {
            ObjectPropertyExpression::Named(p) | ObjectPropertyExpression::Inverse(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(value: ObjectProperty) -> Self {
        ObjectPropertyExpression::Named(value)
    }
}
