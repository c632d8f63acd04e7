//! SWRL rules: atoms over individual and data arguments.

use serde::{Deserialize, Serialize};

use crate::entity::{DataProperty, Individual, Iri, Literal, ObjectPropertyExpression};
use crate::expression::{ClassExpression, DataRange};

/// A rule variable, identified by IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(pub Iri);

impl Variable {
    pub fn new(iri: impl Into<Iri>) -> Self {
        Self(iri.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IArg {
    Individual(Individual),
    Variable(Variable),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DArg {
    Literal(Literal),
    Variable(Variable),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Atom {
    Class {
        class: ClassExpression,
        arg: IArg,
    },
    DataRange {
        range: DataRange,
        arg: DArg,
    },
    ObjectProperty {
        property: ObjectPropertyExpression,
        first: IArg,
        second: IArg,
    },
    DataProperty {
        property: DataProperty,
        first: IArg,
        second: DArg,
    },
    BuiltIn {
        builtin: Iri,
        args: Vec<DArg>,
    },
    SameIndividuals {
        first: IArg,
        second: IArg,
    },
    DifferentIndividuals {
        first: IArg,
        second: IArg,
    },
}

/// `body -> head`. Atom order is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub body: Vec<Atom>,
    pub head: Vec<Atom>,
}

impl Rule {
    pub fn new(body: Vec<Atom>, head: Vec<Atom>) -> Self {
        Self { body, head }
    }

    pub fn variables(&self) -> Vec<&Variable> {
        fn i_var(arg: &IArg) -> Option<&Variable> {
            match arg {
                IArg::Variable(v) => Some(v),
                IArg::Individual(_) => None,
            }
        }
        fn d_var(arg: &DArg) -> Option<&Variable> {
            match arg {
                DArg::Variable(v) => Some(v),
                DArg::Literal(_) => None,
            }
        }

        let mut out: Vec<&Variable> = Vec::new();
        for atom in self.body.iter().chain(self.head.iter()) {
            let found: Vec<&Variable> = match atom {
                Atom::Class { arg, .. } => i_var(arg).into_iter().collect(),
                Atom::DataRange { arg, .. } => d_var(arg).into_iter().collect(),
                Atom::ObjectProperty { first, second, .. }
                | Atom::SameIndividuals { first, second }
                | Atom::DifferentIndividuals { first, second } => {
                    i_var(first).into_iter().chain(i_var(second)).collect()
                }
                Atom::DataProperty { first, second, .. } => {
                    i_var(first).into_iter().chain(d_var(second)).collect()
                }
                Atom::BuiltIn { args, .. } => args.iter().filter_map(d_var).collect(),
            };
            for v in found {
                if !out.contains(&v) {
                    out.push(v);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_collected_once_in_order() {
        let x = Variable::new("urn:swrl#x");
        let y = Variable::new("urn:swrl#y");
        let rule = Rule::new(
            vec![
                Atom::Class {
                    class: ClassExpression::class("http://example.com/Person"),
                    arg: IArg::Variable(x.clone()),
                },
                Atom::DataProperty {
                    property: DataProperty::new("http://example.com/age"),
                    first: IArg::Variable(x.clone()),
                    second: DArg::Variable(y.clone()),
                },
            ],
            vec![Atom::BuiltIn {
                builtin: Iri::new(crate::vocab::swrlb::GREATER_THAN),
                args: vec![DArg::Variable(y.clone()), DArg::Literal(Literal::integer(17))],
            }],
        );
        assert_eq!(rule.variables(), vec![&x, &y]);
    }
}
