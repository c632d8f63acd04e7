//! RDF, RDFS, OWL, XSD and SWRL vocabulary constants.
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `owl` - OWL 2 vocabulary (http://www.w3.org/2002/07/owl#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `swrl` / `swrlb` - SWRL rule and built-in vocabularies
//! - `builtin` - the entities every OWL 2 graph treats as implicitly declared

/// RDF vocabulary constants
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    pub const PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";
    pub const XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";

    /// rdf:langRange facet IRI
    pub const LANG_RANGE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langRange";

    /// rdf:List IRI
    pub const LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDFS vocabulary constants
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// OWL 2 vocabulary constants
pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    // Entity and structural types
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
    pub const ANNOTATION: &str = "http://www.w3.org/2002/07/owl#Annotation";

    // Anonymous axiom roots
    pub const ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";
    pub const ALL_DISJOINT_PROPERTIES: &str =
        "http://www.w3.org/2002/07/owl#AllDisjointProperties";
    pub const ALL_DIFFERENT: &str = "http://www.w3.org/2002/07/owl#AllDifferent";
    pub const NEGATIVE_PROPERTY_ASSERTION: &str =
        "http://www.w3.org/2002/07/owl#NegativePropertyAssertion";

    // Reification
    pub const ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    pub const ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
    pub const ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

    // Axiom predicates
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const DISJOINT_UNION_OF: &str = "http://www.w3.org/2002/07/owl#disjointUnionOf";
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";
    pub const PROPERTY_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#propertyDisjointWith";
    pub const PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    pub const HAS_KEY: &str = "http://www.w3.org/2002/07/owl#hasKey";
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
    pub const MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
    pub const DISTINCT_MEMBERS: &str = "http://www.w3.org/2002/07/owl#distinctMembers";
    pub const SOURCE_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#sourceIndividual";
    pub const ASSERTION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#assertionProperty";
    pub const TARGET_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#targetIndividual";
    pub const TARGET_VALUE: &str = "http://www.w3.org/2002/07/owl#targetValue";

    // Property characteristics
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    pub const INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    pub const REFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ReflexiveProperty";
    pub const IRREFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#IrreflexiveProperty";
    pub const SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
    pub const ASYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AsymmetricProperty";
    pub const TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";

    // Class expression constructors
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    pub const HAS_SELF: &str = "http://www.w3.org/2002/07/owl#hasSelf";
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    pub const MIN_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
    pub const MAX_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";
    pub const QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    pub const ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    pub const ON_DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#onDataRange";

    // Data range constructors
    pub const DATATYPE_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#datatypeComplementOf";
    pub const ON_DATATYPE: &str = "http://www.w3.org/2002/07/owl#onDatatype";
    pub const WITH_RESTRICTIONS: &str = "http://www.w3.org/2002/07/owl#withRestrictions";

    // Built-in entities
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    pub const TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    pub const BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
    pub const TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
    pub const BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";
    pub const REAL: &str = "http://www.w3.org/2002/07/owl#real";
    pub const RATIONAL: &str = "http://www.w3.org/2002/07/owl#rational";

    // Built-in annotation properties
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    pub const DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
    pub const PRIOR_VERSION: &str = "http://www.w3.org/2002/07/owl#priorVersion";
    pub const BACKWARD_COMPATIBLE_WITH: &str =
        "http://www.w3.org/2002/07/owl#backwardCompatibleWith";
    pub const INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";
}

/// XSD vocabulary constants
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    // Constraining facets
    pub const LENGTH: &str = "http://www.w3.org/2001/XMLSchema#length";
    pub const MIN_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#minLength";
    pub const MAX_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#maxLength";
    pub const PATTERN: &str = "http://www.w3.org/2001/XMLSchema#pattern";
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minInclusive";
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minExclusive";
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxInclusive";
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxExclusive";
    pub const TOTAL_DIGITS: &str = "http://www.w3.org/2001/XMLSchema#totalDigits";
    pub const FRACTION_DIGITS: &str = "http://www.w3.org/2001/XMLSchema#fractionDigits";
}

/// SWRL rule vocabulary constants
pub mod swrl {
    pub const NS: &str = "http://www.w3.org/2003/11/swrl#";

    pub const IMP: &str = "http://www.w3.org/2003/11/swrl#Imp";
    pub const VARIABLE: &str = "http://www.w3.org/2003/11/swrl#Variable";
    pub const ATOM_LIST: &str = "http://www.w3.org/2003/11/swrl#AtomList";
    pub const BODY: &str = "http://www.w3.org/2003/11/swrl#body";
    pub const HEAD: &str = "http://www.w3.org/2003/11/swrl#head";

    pub const CLASS_ATOM: &str = "http://www.w3.org/2003/11/swrl#ClassAtom";
    pub const DATA_RANGE_ATOM: &str = "http://www.w3.org/2003/11/swrl#DataRangeAtom";
    pub const INDIVIDUAL_PROPERTY_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#IndividualPropertyAtom";
    pub const DATAVALUED_PROPERTY_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#DatavaluedPropertyAtom";
    pub const BUILTIN_ATOM: &str = "http://www.w3.org/2003/11/swrl#BuiltinAtom";
    pub const SAME_INDIVIDUAL_ATOM: &str = "http://www.w3.org/2003/11/swrl#SameIndividualAtom";
    pub const DIFFERENT_INDIVIDUALS_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#DifferentIndividualsAtom";

    pub const CLASS_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#classPredicate";
    pub const DATA_RANGE: &str = "http://www.w3.org/2003/11/swrl#dataRange";
    pub const PROPERTY_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#propertyPredicate";
    pub const BUILTIN: &str = "http://www.w3.org/2003/11/swrl#builtin";
    pub const ARGUMENTS: &str = "http://www.w3.org/2003/11/swrl#arguments";
    pub const ARGUMENT1: &str = "http://www.w3.org/2003/11/swrl#argument1";
    pub const ARGUMENT2: &str = "http://www.w3.org/2003/11/swrl#argument2";
}

/// SWRL built-in function namespace
pub mod swrlb {
    pub const NS: &str = "http://www.w3.org/2003/11/swrlb#";

    pub const EQUAL: &str = "http://www.w3.org/2003/11/swrlb#equal";
    pub const ADD: &str = "http://www.w3.org/2003/11/swrlb#add";
    pub const GREATER_THAN: &str = "http://www.w3.org/2003/11/swrlb#greaterThan";
}

/// Entities that are implicitly declared in every graph.
pub mod builtin {
    use super::{owl, rdf, rdfs, xsd};

    pub const CLASSES: &[&str] = &[owl::THING, owl::NOTHING];

    pub const OBJECT_PROPERTIES: &[&str] = &[owl::TOP_OBJECT_PROPERTY, owl::BOTTOM_OBJECT_PROPERTY];

    pub const DATA_PROPERTIES: &[&str] = &[owl::TOP_DATA_PROPERTY, owl::BOTTOM_DATA_PROPERTY];

    pub const ANNOTATION_PROPERTIES: &[&str] = &[
        rdfs::LABEL,
        rdfs::COMMENT,
        rdfs::SEE_ALSO,
        rdfs::IS_DEFINED_BY,
        owl::VERSION_INFO,
        owl::DEPRECATED,
        owl::PRIOR_VERSION,
        owl::BACKWARD_COMPATIBLE_WITH,
        owl::INCOMPATIBLE_WITH,
    ];

    pub const DATATYPES: &[&str] = &[
        rdfs::LITERAL,
        rdf::PLAIN_LITERAL,
        rdf::LANG_STRING,
        rdf::XML_LITERAL,
        owl::REAL,
        owl::RATIONAL,
    ];

    /// Namespaces whose IRIs are never user entities (apart from the lists above).
    pub const RESERVED_NAMESPACES: &[&str] =
        &[rdf::NS, rdfs::NS, owl::NS, xsd::NS, super::swrl::NS];

    pub fn is_class(iri: &str) -> bool {
        CLASSES.contains(&iri)
    }

    pub fn is_object_property(iri: &str) -> bool {
        OBJECT_PROPERTIES.contains(&iri)
    }

    pub fn is_data_property(iri: &str) -> bool {
        DATA_PROPERTIES.contains(&iri)
    }

    pub fn is_annotation_property(iri: &str) -> bool {
        ANNOTATION_PROPERTIES.contains(&iri)
    }

    /// Every `xsd:` IRI counts as a built-in datatype, facets excluded.
    pub fn is_datatype(iri: &str) -> bool {
        DATATYPES.contains(&iri) || (iri.starts_with(xsd::NS) && !is_facet(iri))
    }

    pub fn is_facet(iri: &str) -> bool {
        matches!(
            iri,
            xsd::LENGTH
                | xsd::MIN_LENGTH
                | xsd::MAX_LENGTH
                | xsd::PATTERN
                | xsd::MIN_INCLUSIVE
                | xsd::MIN_EXCLUSIVE
                | xsd::MAX_INCLUSIVE
                | xsd::MAX_EXCLUSIVE
                | xsd::TOTAL_DIGITS
                | xsd::FRACTION_DIGITS
        ) || iri == rdf::LANG_RANGE
    }

    pub fn is_reserved(iri: &str) -> bool {
        RESERVED_NAMESPACES.iter().any(|ns| iri.starts_with(ns))
    }

    /// True for any IRI that is implicitly declared as some entity.
    pub fn is_builtin(iri: &str) -> bool {
        is_class(iri)
            || is_object_property(iri)
            || is_data_property(iri)
            || is_annotation_property(iri)
            || is_datatype(iri)
    }

}
