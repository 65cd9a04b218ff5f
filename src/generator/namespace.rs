use super::emit::Emitter;
use super::naming::upper_camel;
use super::NAMESPACE_SEPARATOR;
use crate::model::{NodeId, NodeKind};

impl Emitter<'_> {
    /// Resolve the namespace segments of `id`, root-to-leaf.
    ///
    /// Walks the parent index upward, one segment per Project/Module/Package
    /// ancestor; the walk stops at the first ancestor that is none of these
    /// kinds. Segment names are UpperCamel-cased, Module segments get the
    /// configured bundle suffix appended. A node without qualifying ancestors
    /// yields an empty sequence; there is no error condition.
    pub fn resolve_namespace(&self, id: NodeId) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = self.model.parent(id);
        while let Some(parent) = current {
            let node = self.model.node(parent);
            match node.kind {
                NodeKind::Project | NodeKind::Package => segments.push(upper_camel(&node.name)),
                NodeKind::Module => {
                    let mut segment = upper_camel(&node.name);
                    segment.push_str(&self.options.bundle_suffix);
                    segments.push(segment);
                }
                _ => break,
            }
            current = self.model.parent(parent);
        }
        segments.reverse();
        segments
    }

    /// The fully qualified namespace of `id`: segments joined with `\`,
    /// prefixed with the configured base namespace when present.
    pub fn resolve_qualified_namespace(&self, id: NodeId) -> String {
        let mut namespace = self.resolve_namespace(id).join(NAMESPACE_SEPARATOR);
        if let Some(base) = self.options.base_namespace.as_deref().filter(|b| !b.is_empty()) {
            namespace = format!("{}{}{}", base, NAMESPACE_SEPARATOR, namespace);
        }
        namespace
    }
}
