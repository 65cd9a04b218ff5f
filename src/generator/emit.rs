use super::members::class_modifiers;
use super::naming::snake;
use super::writer::{write_doc, CodeWriter};
use super::NAMESPACE_SEPARATOR;
use crate::config::GenOptions;
use crate::model::{Model, NodeId, NodeKind};

/// Pure emission engine: resolves namespaces, types and associations and
/// renders one complete textual unit per structural element into a
/// [`CodeWriter`]. Holds only borrows of the read-only model and the resolved
/// option set; all mutable state lives in the writer passed through.
pub struct Emitter<'a> {
    pub(crate) model: &'a Model,
    pub(crate) options: &'a GenOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a Model, options: &'a GenOptions) -> Self {
        Emitter { model, options }
    }

    /// Emit the `namespace ...;` declaration for a type node, if it has one.
    pub fn write_namespace_declaration(&self, writer: &mut CodeWriter, id: NodeId) {
        let namespace = self.resolve_qualified_namespace(id);
        if !namespace.is_empty() {
            writer.write_line(&format!("namespace {};\n", namespace));
        }
    }

    /// Emit the import block preceding an entity class.
    pub fn write_uses_declaration(&self, writer: &mut CodeWriter) {
        writer.write_line("use Doctrine\\ORM\\Mapping as ORM;\n");
    }

    /// Emit a complete class body.
    ///
    /// Header doc (qualified name, free documentation, author, entity/table
    /// annotations), modifiers, extends/implements clauses, then the
    /// synthesized PK, declared attributes, association-derived fields,
    /// accessors, operations, inherited-abstract stubs and nested
    /// definitions.
    pub fn write_class(&self, writer: &mut CodeWriter, id: NodeId) {
        let node = self.model.node(id);

        let mut doc = format!(
            "{}{}{}",
            self.resolve_qualified_namespace(id),
            NAMESPACE_SEPARATOR,
            node.name
        );
        if !node.documentation.is_empty() {
            doc.push_str(&format!("\n\n{}", node.documentation.trim()));
        }
        if let Some(author) = self.model.author.as_deref().filter(|a| !a.is_empty()) {
            doc.push_str(&format!("\n@author {}", author));
        }
        if self.options.annotations_enabled() {
            doc.push_str(&format!(
                "\n\n@ORM\\Entity\n@ORM\\Table(name=\"{}\")",
                snake(&node.name)
            ));
        }
        write_doc(writer, &doc, self.options);

        let mut terms = Vec::new();
        let modifiers = class_modifiers(node);
        if !modifiers.is_empty() {
            terms.push(modifiers.join(" "));
        }
        terms.push("class".to_string());
        terms.push(node.name.clone());

        let superclasses = self.model.superclasses(id);
        // Single inheritance in the output: only the first target is used.
        let superclass = superclasses.first().copied();
        if let Some(parent) = superclass {
            terms.push(format!("extends {}", self.model.node(parent).name));
        }

        let interfaces = self.model.realized_interfaces(id);
        if !interfaces.is_empty() {
            let names = interfaces
                .iter()
                .map(|&i| self.model.node(i).name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            terms.push(format!("implements {}", names));
        }
        writer.write_line(&terms.join(" "));
        writer.write_line("{");
        writer.indent();

        self.write_pk(writer);
        writer.newline();
        for attribute in self.model.attributes_of(id) {
            self.write_member_variable(writer, attribute);
            writer.newline();
        }

        for association in self.model.associations_of(id) {
            self.write_association(writer, association, id);
            writer.newline();
        }

        self.write_pk_getter(writer);
        for attribute in self.model.attributes_of(id) {
            self.write_setter_and_getter(writer, attribute);
        }

        for operation in self.model.operations_of(id) {
            self.write_method(writer, operation, false, false);
            writer.newline();
        }

        if let Some(parent) = superclass {
            for method in self.model.operations_of(parent) {
                if self.model.node(method).is_abstract {
                    self.write_inherited_stub(writer, method, id, false);
                }
            }
        }

        for nested in self.model.owned_types_of(id) {
            match self.model.node(nested).kind {
                NodeKind::Class => self.write_class(writer, nested),
                NodeKind::AnnotationType => self.write_annotation_type(writer, nested),
                NodeKind::Interface => self.write_interface(writer, nested),
                NodeKind::Enumeration(_) => self.write_enum(writer, nested),
                _ => continue,
            }
            writer.newline();
        }

        writer.outdent();
        writer.write_line("}");
    }

    /// Emit a complete interface body: signature-only operations, member
    /// declarations for navigable association ends, nested classes and
    /// enumerations.
    pub fn write_interface(&self, writer: &mut CodeWriter, id: NodeId) {
        let node = self.model.node(id);

        write_doc(writer, &node.documentation, self.options);

        let mut terms = vec![node.visibility.to_string()];
        terms.push("interface".to_string());
        terms.push(node.name.clone());

        let superclasses = self.model.superclasses(id);
        if !superclasses.is_empty() {
            let names = superclasses
                .iter()
                .map(|&s| self.model.node(s).name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            terms.push(format!("extends {}", names));
        }
        writer.write_line(&format!("{} {{", terms.join(" ")));
        writer.newline();
        writer.indent();

        for attribute in self.model.attributes_of(id) {
            self.write_member_variable(writer, attribute);
            writer.newline();
        }
        for association in self.model.associations_of(id) {
            if association.end1.reference == id && association.end2.navigable {
                self.write_end_member(writer, &association.end2);
                writer.newline();
            } else if association.end2.reference == id && association.end1.navigable {
                self.write_end_member(writer, &association.end1);
                writer.newline();
            }
        }

        for operation in self.model.operations_of(id) {
            self.write_method(writer, operation, true, false);
            writer.newline();
        }

        for nested in self.model.owned_types_of(id) {
            match self.model.node(nested).kind {
                NodeKind::Class => self.write_class(writer, nested),
                NodeKind::AnnotationType => self.write_annotation_type(writer, nested),
                NodeKind::Enumeration(_) => self.write_enum(writer, nested),
                // Nested interfaces are not rendered inside interfaces.
                _ => continue,
            }
            writer.newline();
        }

        writer.outdent();
        writer.write_line("}");
    }

    /// Emit an enumeration: documentation, modifiers and the literal list,
    /// comma-separated with no trailing comma.
    pub fn write_enum(&self, writer: &mut CodeWriter, id: NodeId) {
        let node = self.model.node(id);
        let NodeKind::Enumeration(data) = &node.kind else {
            return;
        };

        write_doc(writer, &node.documentation, self.options);

        let terms = vec![
            node.visibility.to_string(),
            "enum".to_string(),
            node.name.clone(),
        ];
        writer.write_line(&format!("{} {{", terms.join(" ")));
        writer.indent();

        let count = data.literals.len();
        for (index, literal) in data.literals.iter().enumerate() {
            if index + 1 < count {
                writer.write_line(&format!("{},", literal));
            } else {
                writer.write_line(literal);
            }
        }

        writer.outdent();
        writer.write_line("}");
    }

    /// Emit an annotation type (`@interface`): attributes plus operation
    /// signatures with both body and parameter list suppressed.
    pub fn write_annotation_type(&self, writer: &mut CodeWriter, id: NodeId) {
        let node = self.model.node(id);

        let mut doc = node.documentation.trim().to_string();
        if let Some(author) = self.model.author.as_deref().filter(|a| !a.is_empty()) {
            doc.push_str(&format!("\n@author {}", author));
        }
        write_doc(writer, &doc, self.options);

        let mut terms = Vec::new();
        let modifiers = class_modifiers(node);
        if !modifiers.is_empty() {
            terms.push(modifiers.join(" "));
        }
        terms.push("@interface".to_string());
        terms.push(node.name.clone());

        writer.write_line(&format!("{} {{", terms.join(" ")));
        writer.newline();
        writer.indent();

        for attribute in self.model.attributes_of(id) {
            self.write_member_variable(writer, attribute);
            writer.newline();
        }

        for operation in self.model.operations_of(id) {
            self.write_method(writer, operation, true, true);
            writer.newline();
        }

        for nested in self.model.owned_types_of(id) {
            match self.model.node(nested).kind {
                NodeKind::Class => self.write_class(writer, nested),
                NodeKind::AnnotationType => self.write_annotation_type(writer, nested),
                NodeKind::Interface => self.write_interface(writer, nested),
                NodeKind::Enumeration(_) => self.write_enum(writer, nested),
                _ => continue,
            }
            writer.newline();
        }

        writer.outdent();
        writer.write_line("}");
    }
}
