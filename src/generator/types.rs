use super::emit::Emitter;
use super::{NAMESPACE_SEPARATOR, TYPE_VOID};
use crate::model::TypeRef;

/// Multiplicity strings marking a many-valued typed element.
const COLLECTION_MULTIPLICITIES: [&str; 3] = ["0..*", "1..*", "*"];

impl Emitter<'_> {
    /// Resolve a typed element into a PHP type expression.
    ///
    /// A node reference resolves to its namespace-qualified name, a plain
    /// type name is used verbatim, and absent information degrades to the
    /// `void` sentinel; this function never fails. When the multiplicity
    /// marks a many-valued element, a `[]` collection marker is appended to
    /// any resolved (non-sentinel) type.
    pub fn resolve_type(&self, type_ref: &TypeRef, multiplicity: &str) -> String {
        let mut ty = match type_ref {
            TypeRef::Node(id) if !self.model.node(*id).name.is_empty() => {
                let namespace = self.resolve_namespace(*id).join(NAMESPACE_SEPARATOR);
                format!(
                    "{}{}{}{}",
                    NAMESPACE_SEPARATOR,
                    namespace,
                    NAMESPACE_SEPARATOR,
                    self.model.node(*id).name
                )
            }
            TypeRef::Named(name) if !name.is_empty() => name.clone(),
            _ => TYPE_VOID.to_string(),
        };
        if !multiplicity.is_empty()
            && ty != TYPE_VOID
            && COLLECTION_MULTIPLICITIES.contains(&multiplicity.trim())
        {
            ty.push_str("[]");
        }
        ty
    }

    /// The plain (unqualified) declared type name of a typed element, used
    /// for column descriptors and accessor docs. `None` when the element
    /// declares no resolvable type.
    pub(crate) fn declared_type_name(&self, type_ref: &TypeRef) -> Option<String> {
        match type_ref {
            TypeRef::Named(name) if !name.is_empty() => Some(name.clone()),
            TypeRef::Node(id) if !self.model.node(*id).name.is_empty() => {
                Some(self.model.node(*id).name.clone())
            }
            _ => None,
        }
    }
}
