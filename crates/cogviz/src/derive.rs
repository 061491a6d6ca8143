//! Derivation of the node and link lists from cognitive objects.
//!
//! Every object becomes one node, in input order. Relations are resolved to
//! links by exact id first, then by exact name. In force mode, objects that
//! declare no relations are chained to their predecessor so the layout does
//! not fall apart into isolated points; hierarchical layouts skip that chain
//! because it would invent levels.

use log::{debug, trace};

use cogviz_core::{identifier::Id, mode::LayoutMode, object::CognitiveObject};

/// Directed edge from the object declaring a relation to the object it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    source: Id,
    target: Id,
}

impl Link {
    pub fn new(source: Id, target: Id) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns true if the link starts and ends at the same node.
    pub fn is_self_link(&self) -> bool {
        self.source == self.target
    }
}

/// Nodes and links derived from one object list under one layout mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphData {
    nodes: Vec<Id>,
    links: Vec<Link>,
}

impl GraphData {
    /// Node ids in input order.
    pub fn nodes(&self) -> &[Id] {
        &self.nodes
    }

    /// Links in derivation order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Derives the graph for `objects` under `mode`.
///
/// # Examples
///
/// ```
/// use cogviz::derive::derive;
/// use cogviz_core::{
///     identifier::Id,
///     mode::LayoutMode,
///     object::{CognitiveObject, CognitiveType},
/// };
///
/// let objects = [
///     CognitiveObject::new("a", "Alpha", CognitiveType::Fact),
///     CognitiveObject::new("b", "Beta", CognitiveType::Goal).with_relations(["a", "zzz"]),
/// ];
///
/// let graph = derive(&objects, LayoutMode::Force);
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.links().len(), 1);
/// assert_eq!(graph.links()[0].source(), Id::new("b"));
/// assert_eq!(graph.links()[0].target(), Id::new("a"));
/// ```
pub fn derive(objects: &[CognitiveObject], mode: LayoutMode) -> GraphData {
    let nodes: Vec<Id> = objects.iter().map(|object| Id::new(object.id())).collect();
    let mut links = Vec::new();

    for (index, object) in objects.iter().enumerate() {
        let source = nodes[index];

        if object.relations().is_empty() {
            if index > 0 && mode == LayoutMode::Force {
                links.push(Link::new(nodes[index - 1], source));
            }
            continue;
        }

        for reference in object.relations() {
            match resolve(objects, reference) {
                Some(target) => links.push(Link::new(source, nodes[target])),
                None => trace!(
                    source = object.id(),
                    reference = reference.as_str();
                    "Dropping unresolved relation"
                ),
            }
        }
    }

    debug!(
        mode:% = mode,
        node_count = nodes.len(),
        link_count = links.len();
        "Derived graph data"
    );

    GraphData { nodes, links }
}

/// Index of the object named by `reference`: id match wins over name match.
fn resolve(objects: &[CognitiveObject], reference: &str) -> Option<usize> {
    objects
        .iter()
        .position(|object| object.id() == reference)
        .or_else(|| objects.iter().position(|object| object.name() == reference))
}
