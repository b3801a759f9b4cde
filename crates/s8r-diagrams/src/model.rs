//! In-memory diagram specification tree.
//!
//! A [`Diagram`] is an explicit description of one architecture diagram:
//! labeled [`Node`]s arranged in named, possibly nested [`NodeGroup`]s, plus
//! directed [`Edge`]s between node keys. The tree is built once by the
//! catalog, handed to the renderer, and discarded; nothing here performs I/O
//! or talks to the layout engine, so builders can be asserted on directly.

use std::fmt::{self, Display};

/// Layout direction for a diagram or group, mapped to Graphviz `rankdir`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right ranks (the rendering pipeline's default).
    #[default]
    LeftRight,
    /// Top-to-bottom ranks.
    TopBottom,
}

impl Direction {
    /// The `rankdir` value understood by the layout engine.
    pub fn as_dot(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::TopBottom => "TB",
        }
    }
}

/// Icon/category tag for a node, drawn from a fixed vocabulary.
///
/// Tags select the visual treatment of a node (shape and fill); they carry
/// no other semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// A single human actor.
    User,
    /// A group of human actors.
    Users,
    /// A language-runtime component (classes, services, interfaces).
    Runtime,
    /// A web-framework component.
    Framework,
    /// A database.
    Database,
    /// A generic server or external system.
    Server,
    /// Generic file or document storage.
    Storage,
    /// A message queue or broker.
    Queue,
    /// A monitoring system.
    Monitoring,
}

/// A labeled, icon-tagged node.
///
/// The `key` is the node's identity within its diagram: edges reference keys,
/// and keys are expected to be unique. Labels are display text only and may
/// repeat across nodes.
#[derive(Debug, Clone)]
pub struct Node {
    key: String,
    label: String,
    icon: Icon,
}

impl Node {
    fn new(key: &str, label: &str, icon: Icon) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
        }
    }

    /// The key edges reference this node by.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The icon tag selecting the node's visual treatment.
    pub fn icon(&self) -> Icon {
        self.icon
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// One entry in a diagram or group: a node or a nested group.
#[derive(Debug, Clone)]
pub enum Element {
    Node(Node),
    Group(NodeGroup),
}

/// A named visual grouping of nodes and nested groups.
///
/// Groups are layout constructs only; they never participate in edges.
#[derive(Debug, Clone)]
pub struct NodeGroup {
    name: String,
    direction: Option<Direction>,
    elements: Vec<Element>,
}

impl NodeGroup {
    fn new(name: &str, direction: Option<Direction>) -> Self {
        Self {
            name: name.to_string(),
            direction,
            elements: Vec::new(),
        }
    }

    /// Add a node to this group.
    pub fn node(&mut self, key: &str, label: &str, icon: Icon) {
        self.elements.push(Element::Node(Node::new(key, label, icon)));
    }

    /// Add a nested group, populated by the closure.
    pub fn group(&mut self, name: &str, build: impl FnOnce(&mut NodeGroup)) {
        let mut child = NodeGroup::new(name, None);
        build(&mut child);
        self.elements.push(Element::Group(child));
    }

    /// Add a nested group with its own layout direction.
    pub fn directed_group(
        &mut self,
        name: &str,
        direction: Direction,
        build: impl FnOnce(&mut NodeGroup),
    ) {
        let mut child = NodeGroup::new(name, Some(direction));
        build(&mut child);
        self.elements.push(Element::Group(child));
    }

    /// The group's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direction override, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The group's child elements, in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// A directed edge between two node keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    /// The key of the source node.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The key of the target node.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// A complete diagram specification.
///
/// Built once per generation call; construction is pure. Edge endpoints must
/// name node keys declared in the same diagram — that is a catalog-authoring
/// invariant enforced by tests, not re-checked at render time.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    direction: Direction,
    ortho_edges: bool,
    elements: Vec<Element>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create an empty diagram with a title and layout direction.
    pub fn new(title: &str, direction: Direction) -> Self {
        Self {
            title: title.to_string(),
            direction,
            ortho_edges: false,
            elements: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Request orthogonal edge routing from the layout engine.
    pub fn with_ortho_edges(mut self) -> Self {
        self.ortho_edges = true;
        self
    }

    /// Add a top-level node.
    pub fn node(&mut self, key: &str, label: &str, icon: Icon) {
        self.elements.push(Element::Node(Node::new(key, label, icon)));
    }

    /// Add a top-level group, populated by the closure.
    pub fn group(&mut self, name: &str, build: impl FnOnce(&mut NodeGroup)) {
        let mut child = NodeGroup::new(name, None);
        build(&mut child);
        self.elements.push(Element::Group(child));
    }

    /// Add a directed edge between two node keys.
    pub fn edge(&mut self, source: &str, target: &str) {
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    /// The diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The top-level layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether orthogonal edge routing was requested.
    pub fn ortho_edges(&self) -> bool {
        self.ortho_edges
    }

    /// Top-level elements, in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All nodes in the tree, depth-first in declaration order.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        collect_nodes(&self.elements, &mut nodes);
        nodes
    }

    /// Find a group anywhere in the tree by name.
    pub fn group_named(&self, name: &str) -> Option<&NodeGroup> {
        find_group(&self.elements, name)
    }
}

fn collect_nodes<'tree>(elements: &'tree [Element], out: &mut Vec<&'tree Node>) {
    for element in elements {
        match element {
            Element::Node(node) => out.push(node),
            Element::Group(group) => collect_nodes(group.elements(), out),
        }
    }
}

fn find_group<'tree>(elements: &'tree [Element], name: &str) -> Option<&'tree NodeGroup> {
    for element in elements {
        if let Element::Group(group) = element {
            if group.name() == name {
                return Some(group);
            }
            if let Some(nested) = find_group(group.elements(), name) {
                return Some(nested);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagram {
        let mut diagram = Diagram::new("Sample", Direction::TopBottom);
        diagram.node("users", "Users", Icon::Users);
        diagram.group("Framework", |g| {
            g.node("core", "Core", Icon::Runtime);
            g.group("Infrastructure", |inner| {
                inner.node("db", "Event Store", Icon::Database);
            });
        });
        diagram.edge("users", "core");
        diagram.edge("core", "db");
        diagram
    }

    #[test]
    fn nodes_are_collected_depth_first() {
        let diagram = sample();
        let keys: Vec<&str> = diagram.nodes().iter().map(|n| n.key()).collect();
        assert_eq!(keys, vec!["users", "core", "db"]);
    }

    #[test]
    fn group_lookup_descends_into_nested_groups() {
        let diagram = sample();
        assert!(diagram.group_named("Framework").is_some());
        let infra = diagram.group_named("Infrastructure").expect("nested group");
        assert_eq!(infra.elements().len(), 1);
        assert!(diagram.group_named("Missing").is_none());
    }

    #[test]
    fn edges_keep_declaration_order() {
        let diagram = sample();
        let pairs: Vec<(&str, &str)> = diagram
            .edges()
            .iter()
            .map(|e| (e.source(), e.target()))
            .collect();
        assert_eq!(pairs, vec![("users", "core"), ("core", "db")]);
    }

    #[test]
    fn duplicate_labels_are_permitted() {
        let mut diagram = Diagram::new("Dup", Direction::LeftRight);
        diagram.node("a", "Service", Icon::Runtime);
        diagram.node("b", "Service", Icon::Runtime);
        assert_eq!(diagram.nodes().len(), 2);
    }

    #[test]
    fn directed_group_records_override() {
        let mut diagram = Diagram::new("Directed", Direction::TopBottom);
        diagram.group("Outer", |g| {
            g.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("m1", "get()", Icon::Runtime);
            });
        });
        let methods = diagram.group_named("Methods").expect("methods group");
        assert_eq!(methods.direction(), Some(Direction::LeftRight));
        assert_eq!(diagram.group_named("Outer").unwrap().direction(), None);
    }
}
