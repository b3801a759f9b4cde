//! Translation of the diagram model into DOT graphs.
//!
//! Groups become `cluster_N` subgraphs, icons select node shapes and fills,
//! and edges become plain directed DOT edges. Conversion is pure; the layout
//! engine is invoked elsewhere.

use dot_generator::*;
use dot_structures::*;

use crate::model::{Diagram, Element, Icon, NodeGroup};

/// Cluster fills rotated by nesting depth.
const CLUSTER_FILLS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];
const CLUSTER_BORDER: &str = "#AEB6BE";
const EDGE_COLOR: &str = "#7B8894";

pub(super) fn to_graph(diagram: &Diagram) -> Graph {
    let mut graph_attrs = vec![
        quoted_attr("label", diagram.title()),
        attr!("labelloc", "t"),
        attr!("fontsize", "24"),
        attr!("fontname", "Helvetica"),
        attr!("rankdir", diagram.direction().as_dot()),
        attr!("pad", "0.5"),
        attr!("nodesep", "0.60"),
        attr!("ranksep", "0.75"),
    ];
    if diagram.ortho_edges() {
        graph_attrs.push(attr!("splines", "ortho"));
    }

    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)),
        Stmt::GAttribute(GraphAttributes::Node(vec![
            quoted_attr("style", "rounded,filled"),
            attr!("fontname", "Helvetica"),
            attr!("fillcolor", "white"),
        ])),
        Stmt::GAttribute(GraphAttributes::Edge(vec![quoted_attr("color", EDGE_COLOR)])),
    ];

    let mut cluster_seq = 0usize;
    for element in diagram.elements() {
        stmts.push(element_stmt(element, 0, &mut cluster_seq));
    }
    for edge in diagram.edges() {
        stmts.push(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id!(edge.source())),
                Vertex::N(node_id!(edge.target())),
            ),
            attributes: vec![],
        }));
    }

    Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    }
}

fn element_stmt(element: &Element, depth: usize, cluster_seq: &mut usize) -> Stmt {
    match element {
        Element::Node(node) => Stmt::Node(node_stmt(node)),
        Element::Group(group) => Stmt::Subgraph(group_subgraph(group, depth, cluster_seq)),
    }
}

fn node_stmt(node: &crate::model::Node) -> Node {
    let (shape, fill) = icon_style(node.icon());
    let mut attributes = vec![
        quoted_attr("label", node.label()),
        attr!("shape", shape),
        quoted_attr("fillcolor", fill),
    ];
    if node.icon() == Icon::Users {
        attributes.push(attr!("peripheries", "2"));
    }
    Node {
        id: node_id!(node.key()),
        attributes,
    }
}

fn group_subgraph(group: &NodeGroup, depth: usize, cluster_seq: &mut usize) -> Subgraph {
    // Subgraph names must carry the `cluster` prefix for the layout engine
    // to draw them as boxes; labels are free-form.
    let id = Id::Plain(format!("cluster_{}", *cluster_seq));
    *cluster_seq += 1;

    let mut stmts = vec![
        Stmt::Attribute(quoted_attr("label", group.name())),
        Stmt::Attribute(attr!("labeljust", "l")),
        Stmt::Attribute(attr!("fontsize", "12")),
        Stmt::Attribute(attr!("style", "rounded")),
        Stmt::Attribute(quoted_attr("bgcolor", CLUSTER_FILLS[depth % CLUSTER_FILLS.len()])),
        Stmt::Attribute(quoted_attr("pencolor", CLUSTER_BORDER)),
    ];
    if let Some(direction) = group.direction() {
        stmts.push(Stmt::Attribute(attr!("rankdir", direction.as_dot())));
    }
    for element in group.elements() {
        stmts.push(element_stmt(element, depth + 1, cluster_seq));
    }

    Subgraph { id, stmts }
}

fn icon_style(icon: Icon) -> (&'static str, &'static str) {
    match icon {
        Icon::User => ("ellipse", "#CEE4F2"),
        Icon::Users => ("ellipse", "#CEE4F2"),
        Icon::Runtime => ("box", "#F5E8D0"),
        Icon::Framework => ("component", "#D7EBD5"),
        Icon::Database => ("cylinder", "#D6E4F5"),
        Icon::Server => ("box3d", "#E4E4E4"),
        Icon::Storage => ("folder", "#EFE6C0"),
        Icon::Queue => ("cds", "#F2DCDB"),
        Icon::Monitoring => ("note", "#E6DFF2"),
    }
}

fn quoted(value: &str) -> Id {
    Id::Escaped(format!("\"{}\"", value.replace('"', "\\\"")))
}

fn quoted_attr(name: &str, value: &str) -> Attribute {
    Attribute(id!(name), quoted(value))
}

#[cfg(test)]
mod tests {
    use graphviz_rust::printer::PrinterContext;

    use super::*;
    use crate::catalog::{ArchitectureKind, PortKind};
    use crate::config::DetailLevel;
    use crate::model::{Diagram, Icon};

    fn dot_text(diagram: &Diagram) -> String {
        graphviz_rust::print(to_graph(diagram), &mut PrinterContext::default())
    }

    #[test]
    fn context_diagram_emits_title_and_clusters() {
        let text = dot_text(&ArchitectureKind::Context.build());
        assert!(text.starts_with("digraph"));
        assert!(text.contains("Samstraumr System Context"));
        assert!(text.contains("cluster_0"));
        assert!(text.contains("cluster_1"));
        assert!(text.contains("rankdir=LR"));
        assert!(text.contains("->"));
    }

    #[test]
    fn top_to_bottom_diagrams_emit_tb_rankdir() {
        let text = dot_text(&ArchitectureKind::Code.build());
        assert!(text.contains("rankdir=TB"));
    }

    #[test]
    fn orthogonal_routing_is_requested_when_set() {
        let text = dot_text(&ArchitectureKind::CleanArchitecture.build());
        assert!(text.contains("splines=ortho"));

        let text = dot_text(&ArchitectureKind::Context.build());
        assert!(!text.contains("splines"));
    }

    #[test]
    fn cluster_ids_are_unique_across_nesting() {
        let diagram = PortKind::Detailed.build(DetailLevel::High);
        let text = dot_text(&diagram);
        // 1 outer + 5 port groups + 5 method groups + 1 implementations group.
        assert!(text.contains("cluster_11"));
        assert!(!text.contains("cluster_12"));
    }

    #[test]
    fn icons_choose_node_shapes() {
        let mut diagram = Diagram::new("Shapes", crate::model::Direction::LeftRight);
        diagram.node("db", "Event Store", Icon::Database);
        diagram.node("fs", "File System", Icon::Storage);
        let text = dot_text(&diagram);
        assert!(text.contains("shape=cylinder"));
        assert!(text.contains("shape=folder"));
    }

    #[test]
    fn labels_are_quoted() {
        let mut diagram = Diagram::new("Quoting", crate::model::Direction::LeftRight);
        diagram.node("ci", "CI/CD System", Icon::Server);
        let text = dot_text(&diagram);
        assert!(text.contains("\"CI/CD System\""));
    }
}
