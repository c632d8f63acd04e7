//! SWRL rules.
//!
//! ```text
//! _:r a swrl:Imp ; swrl:body _:b ; swrl:head _:h .
//! _:b a swrl:AtomList ; rdf:first _:atom ; rdf:rest ... .
//! _:atom a swrl:ClassAtom ; swrl:classPredicate C ; swrl:argument1 ?x .
//! ?x a swrl:Variable .
//! ```

use owlbridge_graph::{AtomShape, Graph, Node, Statement, Triple};
use owlbridge_model::swrl::{Atom, DArg, IArg, Rule, Variable};
use owlbridge_model::vocab::{rdf, swrl};
use owlbridge_model::{Axiom, AxiomBody, AxiomKind};

use super::{body_of, by_type, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

const PROPERTY_ATOM: [&str; 3] = [swrl::PROPERTY_PREDICATE, swrl::ARGUMENT1, swrl::ARGUMENT2];

// ============================================================================
// Reading atoms
// ============================================================================

impl<'g> Reader<'g> {
    /// The atoms of the list linked from `root` by `predicate`, including the
    /// `swrl:AtomList` typing of each cell.
    fn atom_list(&self, root: &Node, predicate: &str) -> Result<Translated<Vec<Atom>>> {
        let list = self.required_list(root, predicate)?;
        let atoms: Translated<Vec<Atom>> = list
            .members
            .iter()
            .map(|m| self.atom(m))
            .collect::<Result<_>>()?;
        let cell_types: Vec<Triple> = list
            .cells
            .iter()
            .flat_map(|cell| self.typing(cell, &[swrl::ATOM_LIST]))
            .collect();
        Ok(atoms.with_triples(list.triples).with_triples(cell_types))
    }

    fn atom(&self, node: &Node) -> Result<Translated<Atom>> {
        let shape = self
            .graph()
            .atom_shape(node)
            .ok_or_else(|| TranslateError::unsupported(node, "a SWRL atom"))?;

        let atom = match shape {
            AtomShape::Class => {
                let links = self.links(node, [swrl::CLASS_PREDICATE, swrl::ARGUMENT1])?;
                self.class_expression(&links[0].object)?
                    .zip(self.i_arg(&links[1].object)?)
                    .map(|(class, arg)| Atom::Class { class, arg })
                    .with_triples(links.into_iter().cloned())
            }
            AtomShape::DataRange => {
                let links = self.links(node, [swrl::DATA_RANGE, swrl::ARGUMENT1])?;
                self.data_range(&links[0].object)?
                    .zip(self.d_arg(&links[1].object)?)
                    .map(|(range, arg)| Atom::DataRange { range, arg })
                    .with_triples(links.into_iter().cloned())
            }
            AtomShape::ObjectProperty => {
                let links = self.links(node, PROPERTY_ATOM)?;
                self.object_property_expression(&links[0].object)?
                    .zip(self.i_arg(&links[1].object)?)
                    .zip(self.i_arg(&links[2].object)?)
                    .map(|((property, first), second)| Atom::ObjectProperty {
                        property,
                        first,
                        second,
                    })
                    .with_triples(links.into_iter().cloned())
            }
            AtomShape::DataProperty => {
                let links = self.links(node, PROPERTY_ATOM)?;
                self.data_property(&links[0].object)?
                    .zip(self.i_arg(&links[1].object)?)
                    .zip(self.d_arg(&links[2].object)?)
                    .map(|((property, first), second)| Atom::DataProperty {
                        property,
                        first,
                        second,
                    })
                    .with_triples(links.into_iter().cloned())
            }
            AtomShape::BuiltIn => {
                let [builtin] = self.links(node, [swrl::BUILTIN])?;
                let iri = builtin
                    .object
                    .as_iri()
                    .ok_or_else(|| TranslateError::unsupported(&builtin.object, "a built-in IRI"))?
                    .clone();
                let list = self.required_list(node, swrl::ARGUMENTS)?;
                let args: Translated<Vec<DArg>> = list
                    .members
                    .iter()
                    .map(|m| self.d_arg(m))
                    .collect::<Result<_>>()?;
                args.map(|args| Atom::BuiltIn { builtin: iri, args })
                    .with_triple(builtin.clone())
                    .with_triples(list.triples)
            }
            AtomShape::SameIndividuals | AtomShape::DifferentIndividuals => {
                let links = self.links(node, [swrl::ARGUMENT1, swrl::ARGUMENT2])?;
                self.i_arg(&links[0].object)?
                    .zip(self.i_arg(&links[1].object)?)
                    .map(|(first, second)| match shape {
                        AtomShape::SameIndividuals => Atom::SameIndividuals { first, second },
                        _ => Atom::DifferentIndividuals { first, second },
                    })
                    .with_triples(links.into_iter().cloned())
            }
        };
        Ok(atom.with_triples(self.typing(node, &[shape.type_iri()])))
    }

    fn links<const N: usize>(&self, node: &Node, predicates: [&str; N]) -> Result<[&'g Triple; N]> {
        let mut links = Vec::with_capacity(N);
        for predicate in predicates {
            links.push(self.required(node, predicate)?);
        }
        links
            .try_into()
            .map_err(|_| TranslateError::structural(node, "incomplete atom"))
    }

    fn variable(&self, node: &Node) -> Result<Translated<Variable>> {
        let iri = node
            .as_iri()
            .ok_or_else(|| TranslateError::unsupported(node, "a SWRL variable"))?;
        Ok(Translated::new(
            Variable(iri.clone()),
            self.typing(node, &[swrl::VARIABLE]),
        ))
    }

    fn i_arg(&self, node: &Node) -> Result<Translated<IArg>> {
        if self.graph().is_swrl_variable(node) {
            return Ok(self.variable(node)?.map(IArg::Variable));
        }
        Ok(self.individual(node)?.map(IArg::Individual))
    }

    fn d_arg(&self, node: &Node) -> Result<Translated<DArg>> {
        if self.graph().is_swrl_variable(node) {
            return Ok(self.variable(node)?.map(DArg::Variable));
        }
        Ok(self.literal(node)?.map(DArg::Literal))
    }
}

// ============================================================================
// Writing atoms
// ============================================================================

impl Writer<'_> {
    fn atom_list(&mut self, atoms: &[Atom]) -> Node {
        let members: Vec<Node> = atoms.iter().map(|a| self.atom(a)).collect();
        let cells: Vec<Node> = members
            .iter()
            .map(|_| self.typed_blank(swrl::ATOM_LIST))
            .collect();
        let mut rest = Node::iri(rdf::NIL);
        for (cell, member) in cells.into_iter().zip(members).rev() {
            self.add(Triple::new(cell.clone(), rdf::FIRST, member));
            self.add(Triple::new(cell.clone(), rdf::REST, rest));
            rest = cell;
        }
        rest
    }

    fn atom(&mut self, atom: &Atom) -> Node {
        let shape = match atom {
            Atom::Class { .. } => AtomShape::Class,
            Atom::DataRange { .. } => AtomShape::DataRange,
            Atom::ObjectProperty { .. } => AtomShape::ObjectProperty,
            Atom::DataProperty { .. } => AtomShape::DataProperty,
            Atom::BuiltIn { .. } => AtomShape::BuiltIn,
            Atom::SameIndividuals { .. } => AtomShape::SameIndividuals,
            Atom::DifferentIndividuals { .. } => AtomShape::DifferentIndividuals,
        };
        let node = self.typed_blank(shape.type_iri());

        let links: Vec<(&str, Node)> = match atom {
            Atom::Class { class, arg } => vec![
                (swrl::CLASS_PREDICATE, self.class_expression(class)),
                (swrl::ARGUMENT1, self.i_arg(arg)),
            ],
            Atom::DataRange { range, arg } => vec![
                (swrl::DATA_RANGE, self.data_range(range)),
                (swrl::ARGUMENT1, self.d_arg(arg)),
            ],
            Atom::ObjectProperty {
                property,
                first,
                second,
            } => vec![
                (swrl::PROPERTY_PREDICATE, self.object_property_expression(property)),
                (swrl::ARGUMENT1, self.i_arg(first)),
                (swrl::ARGUMENT2, self.i_arg(second)),
            ],
            Atom::DataProperty {
                property,
                first,
                second,
            } => vec![
                (swrl::PROPERTY_PREDICATE, self.data_property(property)),
                (swrl::ARGUMENT1, self.i_arg(first)),
                (swrl::ARGUMENT2, self.d_arg(second)),
            ],
            Atom::BuiltIn { builtin, args } => {
                let args = args.iter().map(|a| self.d_arg(a)).collect();
                vec![
                    (swrl::BUILTIN, Node::Iri(builtin.clone())),
                    (swrl::ARGUMENTS, self.list(args)),
                ]
            }
            Atom::SameIndividuals { first, second }
            | Atom::DifferentIndividuals { first, second } => vec![
                (swrl::ARGUMENT1, self.i_arg(first)),
                (swrl::ARGUMENT2, self.i_arg(second)),
            ],
        };
        for (predicate, object) in links {
            self.add(Triple::new(node.clone(), predicate, object));
        }
        node
    }

    fn i_arg(&mut self, arg: &IArg) -> Node {
        match arg {
            IArg::Variable(v) => Node::Iri(v.0.clone()),
            IArg::Individual(i) => self.individual(i),
        }
    }

    fn d_arg(&mut self, arg: &DArg) -> Node {
        match arg {
            DArg::Variable(v) => Node::Iri(v.0.clone()),
            DArg::Literal(l) => self.literal(l),
        }
    }
}

// ============================================================================
// Translator
// ============================================================================

pub struct RuleTranslator;

impl RuleTranslator {
    fn is_atom_list(graph: &Graph, root: &Node, predicate: &str) -> bool {
        graph
            .unique(root, predicate)
            .and_then(|link| graph.read_list(&link.object).ok())
            .is_some_and(|list| list.members.iter().all(|m| graph.atom_shape(m).is_some()))
    }
}

impl AxiomTranslator for RuleTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SwrlRule
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_type(graph, swrl::IMP)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        let root = statement.subject();
        statement.predicate() == rdf::TYPE
            && statement.object().is(swrl::IMP)
            && !root.is_literal()
            && Self::is_atom_list(graph, root, swrl::BODY)
            && Self::is_atom_list(graph, root, swrl::HEAD)
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let root = statement.subject();
        let body = reader.atom_list(root, swrl::BODY)?;
        let head = reader.atom_list(root, swrl::HEAD)?;
        let rule = body
            .zip(head)
            .map(|(body, head)| AxiomBody::SwrlRule(Rule::new(body, head)));
        finish(statement, config, rule)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::SwrlRule(rule) = body_of(axiom, self.kind())? else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        for variable in rule.variables() {
            writer.add(Triple::new(
                variable.0.clone(),
                rdf::TYPE,
                Node::iri(swrl::VARIABLE),
            ));
        }
        let body = writer.atom_list(&rule.body);
        let head = writer.atom_list(&rule.head);
        let root = writer.fresh();
        writer.add(Triple::new(root.clone(), swrl::BODY, body));
        writer.add(Triple::new(root.clone(), swrl::HEAD, head));
        writer.add_annotated(
            Triple::new(root, rdf::TYPE, Node::iri(swrl::IMP)),
            &axiom.annotations,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use owlbridge_model::vocab::{rdfs, swrlb, xsd};
    use owlbridge_model::{
        Annotation, ClassExpression, DataProperty, DataRange, Individual, Iri, Literal,
        ObjectPropertyExpression,
    };

    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(format!("urn:swrl#{name}"))
    }

    fn adult_rule() -> Rule {
        let (x, age) = (var("x"), var("age"));
        Rule::new(
            vec![
                Atom::Class {
                    class: ClassExpression::class("http://example.com/Person"),
                    arg: IArg::Variable(x.clone()),
                },
                Atom::DataProperty {
                    property: DataProperty::new("http://example.com/age"),
                    first: IArg::Variable(x.clone()),
                    second: DArg::Variable(age.clone()),
                },
                Atom::BuiltIn {
                    builtin: Iri::new(swrlb::GREATER_THAN),
                    args: vec![DArg::Variable(age), DArg::Literal(Literal::integer(17))],
                },
            ],
            vec![
                Atom::Class {
                    class: ClassExpression::class("http://example.com/Adult"),
                    arg: IArg::Variable(x.clone()),
                },
                Atom::DataRange {
                    range: DataRange::datatype(xsd::INTEGER),
                    arg: DArg::Literal(Literal::integer(1)),
                },
            ],
        )
    }

    fn read_back(graph: &Graph) -> Translated<Axiom> {
        let config = LoaderConfig::default();
        let statements: Vec<_> = RuleTranslator.statements(graph, &config).collect();
        assert_eq!(statements.len(), 1);
        RuleTranslator.read(&statements[0], &config).expect("read")
    }

    #[test]
    fn rules_keep_atom_order_and_consume_every_triple() {
        let axiom = Axiom::annotated(
            AxiomBody::SwrlRule(adult_rule()),
            [Annotation::literal(rdfs::LABEL, Literal::string("adults"))],
        );
        let mut graph = Graph::new();
        RuleTranslator.write(&axiom, &mut graph).expect("write");

        assert!(graph.has_type(&Node::iri("urn:swrl#x"), swrl::VARIABLE));
        let read = read_back(&graph);
        assert_eq!(read.object(), &axiom);
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn object_atoms_mix_variables_and_individuals() {
        let rule = Rule::new(
            vec![Atom::ObjectProperty {
                property: ObjectPropertyExpression::inverse("http://example.com/hasChild"),
                first: IArg::Variable(var("x")),
                second: IArg::Individual(Individual::named("http://example.com/bob")),
            }],
            vec![Atom::DifferentIndividuals {
                first: IArg::Variable(var("x")),
                second: IArg::Individual(Individual::named("http://example.com/bob")),
            }],
        );
        let axiom = Axiom::new(AxiomBody::SwrlRule(rule));
        let mut graph = Graph::new();
        RuleTranslator.write(&axiom, &mut graph).expect("write");

        let read = read_back(&graph);
        assert_eq!(read.object(), &axiom);
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn atom_without_arguments_is_structural() {
        let mut graph = Graph::new();
        let atom = graph.fresh_blank();
        graph.add(Triple::new(atom.clone(), rdf::TYPE, Node::iri(swrl::CLASS_ATOM)));
        graph.add(Triple::new(
            atom.clone(),
            swrl::CLASS_PREDICATE,
            Node::iri("http://example.com/Person"),
        ));
        let body = graph.write_list([atom]);
        let root = graph.fresh_blank();
        graph.add(Triple::new(root.clone(), swrl::BODY, body));
        graph.add(Triple::new(root.clone(), swrl::HEAD, Node::iri(rdf::NIL)));
        graph.add(Triple::new(root, rdf::TYPE, Node::iri(swrl::IMP)));

        let config = LoaderConfig::default();
        let statement = RuleTranslator
            .statements(&graph, &config)
            .next()
            .expect("recognized by shape");
        let err = RuleTranslator.read(&statement, &config).expect_err("missing argument");
        assert!(err.is_structural());
    }
}
