//! Values that appear as the subject or object of an axiom triple.

use owlbridge_graph::{Graph, Node};
use owlbridge_model::{
    ClassExpression, DataProperty, DataRange, Datatype, Individual, ObjectProperty,
    ObjectPropertyExpression,
};

use crate::codec::{Reader, Writer};
use crate::error::Result;
use crate::translated::Translated;

pub trait Operand: Ord + Clone + Send + Sync + 'static {
    /// Cheap shape test used during recognition.
    fn accepts(graph: &Graph, node: &Node) -> bool;
    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>>;
    fn write(writer: &mut Writer<'_>, value: &Self) -> Node;
}

impl Operand for ClassExpression {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        graph.is_class_expression(node)
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.class_expression(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.class_expression(value)
    }
}

impl Operand for DataRange {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        graph.is_data_range(node)
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.data_range(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.data_range(value)
    }
}

impl Operand for Datatype {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        matches!(node, Node::Iri(iri) if graph.is_datatype_iri(iri))
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.datatype(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.datatype(value)
    }
}

impl Operand for ObjectProperty {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        matches!(node, Node::Iri(iri) if graph.is_object_property(iri))
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.object_property(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.object_property(value)
    }
}

impl Operand for ObjectPropertyExpression {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        graph.is_object_property_expression(node)
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.object_property_expression(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.object_property_expression(value)
    }
}

impl Operand for DataProperty {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        graph.is_data_property_node(node)
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.data_property(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.data_property(value)
    }
}

impl Operand for Individual {
    fn accepts(graph: &Graph, node: &Node) -> bool {
        graph.is_individual(node)
    }

    fn read(reader: &Reader<'_>, node: &Node) -> Result<Translated<Self>> {
        reader.individual(node)
    }

    fn write(writer: &mut Writer<'_>, value: &Self) -> Node {
        writer.individual(value)
    }
}
