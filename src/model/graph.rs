use super::types::{
    Association, Node, NodeId, NodeKind, ParameterDirection, Relationship,
};

struct NodeEntry {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed structural model.
///
/// Owns every [`Node`] plus the relationship edges between them. Ownership is
/// a tree: each node except the roots has exactly one parent, recorded as an
/// immutable index into the arena (a back-reference, not a second owner).
/// Relationships (generalizations, interface realizations, associations) are
/// a separate edge list so the ownership tree stays acyclic.
///
/// The generation core treats a populated model as read-only input; all
/// mutation happens through [`add_root`](Model::add_root),
/// [`add_child`](Model::add_child) and
/// [`add_relationship`](Model::add_relationship) before a run starts.
#[derive(Default)]
pub struct Model {
    entries: Vec<NodeEntry>,
    relationships: Vec<Relationship>,
    /// Project author, emitted as `@author` in type doc headers when set.
    pub author: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Insert a node without a parent and return its id.
    pub fn add_root(&mut self, node: Node) -> NodeId {
        self.insert(node, None)
    }

    /// Insert a node under `parent` and return its id.
    ///
    /// Children keep insertion order; the walker and the emitters generate
    /// them strictly in declaration order.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        self.insert(node, Some(parent))
    }

    fn insert(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(NodeEntry {
            node,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.entries[p.0].children.push(id);
        }
        id
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.entries[id.0].node
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.entries[id.0].children
    }

    /// Child attributes of a type node, in declaration order.
    pub fn attributes_of(&self, id: NodeId) -> Vec<NodeId> {
        self.children_of_kind(id, |kind| matches!(kind, NodeKind::Attribute(_)))
    }

    /// Child operations of a type node, in declaration order.
    pub fn operations_of(&self, id: NodeId) -> Vec<NodeId> {
        self.children_of_kind(id, |kind| matches!(kind, NodeKind::Operation(_)))
    }

    /// Nested type definitions owned by a type node.
    pub fn owned_types_of(&self, id: NodeId) -> Vec<NodeId> {
        self.children_of_kind(id, |kind| {
            matches!(
                kind,
                NodeKind::Class
                    | NodeKind::Interface
                    | NodeKind::Enumeration(_)
                    | NodeKind::AnnotationType
            )
        })
    }

    /// Non-return parameters of an operation, in declaration order.
    pub fn call_parameters(&self, operation: NodeId) -> Vec<NodeId> {
        self.children(operation)
            .iter()
            .copied()
            .filter(|&c| {
                matches!(
                    &self.node(c).kind,
                    NodeKind::Parameter(p) if p.direction == ParameterDirection::In
                )
            })
            .collect()
    }

    /// The return parameter of an operation, if declared.
    pub fn return_parameter(&self, operation: NodeId) -> Option<NodeId> {
        self.children(operation).iter().copied().find(|&c| {
            matches!(
                &self.node(c).kind,
                NodeKind::Parameter(p) if p.direction == ParameterDirection::Return
            )
        })
    }

    /// Generalization targets of `id`, in insertion order.
    ///
    /// Classes use only the first entry for their `extends` clause;
    /// interfaces list all of them.
    pub fn superclasses(&self, id: NodeId) -> Vec<NodeId> {
        self.relationships
            .iter()
            .filter_map(|rel| match rel {
                Relationship::Generalization { source, target } if *source == id => Some(*target),
                _ => None,
            })
            .collect()
    }

    /// Interface realization targets of `id`, in insertion order.
    pub fn realized_interfaces(&self, id: NodeId) -> Vec<NodeId> {
        self.relationships
            .iter()
            .filter_map(|rel| match rel {
                Relationship::InterfaceRealization { source, target } if *source == id => {
                    Some(*target)
                }
                _ => None,
            })
            .collect()
    }

    /// Every association with an end attached to `id`, in insertion order.
    pub fn associations_of(&self, id: NodeId) -> Vec<&Association> {
        self.relationships
            .iter()
            .filter_map(|rel| match rel {
                Relationship::Association(a)
                    if a.end1.reference == id || a.end2.reference == id =>
                {
                    Some(a)
                }
                _ => None,
            })
            .collect()
    }

    fn children_of_kind(&self, id: NodeId, pred: impl Fn(&NodeKind) -> bool) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| pred(&self.node(c).kind))
            .collect()
    }
}
