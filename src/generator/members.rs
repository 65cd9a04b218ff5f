use super::emit::Emitter;
use super::naming::capitalize;
use super::writer::{write_doc, write_specification, CodeWriter};
use crate::model::{AssociationEnd, Node, NodeId, NodeKind, TypeRef};

/// Modifiers shared by classes and members: everything except visibility.
pub(crate) fn class_modifiers(node: &Node) -> Vec<&'static str> {
    let mut modifiers = Vec::new();
    if node.is_static {
        modifiers.push("static");
    }
    if node.is_abstract {
        modifiers.push("abstract");
    }
    if node.is_leaf {
        modifiers.push("final");
    }
    if node.is_concurrent {
        modifiers.push("synchronized");
    }
    modifiers
}

/// Visibility plus the class modifiers, in rendering order.
pub(crate) fn member_modifiers(node: &Node) -> Vec<String> {
    let mut modifiers = vec![node.visibility.to_string()];
    modifiers.extend(class_modifiers(node).into_iter().map(String::from));
    modifiers
}

/// Unified view of a field-like element: a declared attribute or an
/// association end rendered as an interface member.
struct MemberDecl<'m> {
    name: &'m str,
    documentation: &'m str,
    type_ref: &'m TypeRef,
    multiplicity: &'m str,
    is_unique: bool,
    is_id: bool,
    default_value: Option<&'m str>,
    /// Final members render as class constants.
    is_const: bool,
    modifiers: Vec<String>,
}

impl Emitter<'_> {
    /// Emit the synthesized primary-key field.
    ///
    /// Runs once per class, before its declared attributes, when a default
    /// primary key is configured and annotation mapping is enabled.
    pub fn write_pk(&self, writer: &mut CodeWriter) {
        if self.options.default_pk.is_empty() || !self.options.annotations_enabled() {
            return;
        }
        let doc = "@ORM\\Id\n@ORM\\Column(type=\"integer\")\n@ORM\\GeneratedValue(strategy=\"AUTO\")";
        write_doc(writer, doc, self.options);
        writer.write_line(&format!("protected ${};", self.options.default_pk));
    }

    /// Emit a declared attribute as a member variable.
    ///
    /// Attributes with an empty name are skipped entirely; model
    /// incompleteness is never an error here.
    pub fn write_member_variable(&self, writer: &mut CodeWriter, attribute: NodeId) {
        let node = self.model.node(attribute);
        let NodeKind::Attribute(data) = &node.kind else {
            return;
        };
        self.write_member_decl(
            writer,
            &MemberDecl {
                name: &node.name,
                documentation: &node.documentation,
                type_ref: &data.type_ref,
                multiplicity: &data.multiplicity,
                is_unique: data.is_unique,
                is_id: data.is_id,
                default_value: data.default_value.as_deref(),
                is_const: node.is_leaf,
                modifiers: member_modifiers(node),
            },
        );
    }

    /// Emit a navigable association end as a member variable (interfaces).
    pub fn write_end_member(&self, writer: &mut CodeWriter, end: &AssociationEnd) {
        let type_ref = TypeRef::Node(end.reference);
        self.write_member_decl(
            writer,
            &MemberDecl {
                name: &end.name,
                documentation: &end.documentation,
                type_ref: &type_ref,
                multiplicity: &end.multiplicity,
                is_unique: false,
                is_id: false,
                default_value: None,
                is_const: false,
                modifiers: vec![end.visibility.to_string()],
            },
        );
    }

    fn write_member_decl(&self, writer: &mut CodeWriter, member: &MemberDecl<'_>) {
        if member.name.is_empty() {
            return;
        }

        let resolved = self.resolve_type(member.type_ref, member.multiplicity);
        let mut doc = format!("@var {} {}", resolved, member.documentation.trim());
        if self.options.annotations_enabled() {
            let mut terms = vec![format!("name=\"{}\"", member.name)];
            let declared = self.declared_type_name(member.type_ref);
            terms.push(format!(
                "type=\"{}\"",
                declared
                    .as_deref()
                    .unwrap_or(self.options.unknown_type.as_str())
            ));
            if declared.as_deref() == Some("string") {
                terms.push("length=255".to_string());
            }
            if declared.as_deref() == Some("decimal") {
                terms.push("scale=2".to_string());
            }
            if member.is_unique {
                terms.push("unique=\"true\"".to_string());
            }
            doc.push_str(&format!("\n\n@ORM\\Column({})", terms.join(", ")));
            if member.is_id {
                doc.push_str("\n@ORM\\Id");
                doc.push_str("\n@ORM\\GeneratedValue(strategy=\"AUTO\")");
            }
        }
        write_doc(writer, &doc, self.options);

        let mut terms = Vec::new();
        if member.is_const {
            terms.push(format!("const {}", member.name.to_uppercase()));
        } else {
            if !member.modifiers.is_empty() {
                terms.push(member.modifiers.join(" "));
            }
            terms.push(format!("${}", member.name));
        }
        if let Some(default) = member.default_value {
            if !default.is_empty() {
                terms.push(format!("= {}", default));
            }
        }
        writer.write_line(&format!("{};", terms.join(" ")));
    }

    /// Emit the dedicated primary-key getter.
    ///
    /// Always emitted, even when no explicit PK attribute exists on the
    /// model; falls back to `id` when no default PK is configured.
    pub fn write_pk_getter(&self, writer: &mut CodeWriter) {
        let pk = if self.options.default_pk.is_empty() {
            "id"
        } else {
            &self.options.default_pk
        };
        let doc = format!("Get {}\n\n@return integer", pk);
        write_doc(writer, &doc, self.options);

        writer.write_line(&format!("public function get{}()", capitalize(pk)));
        writer.write_line("{");
        writer.indent();
        writer.write_line(&format!("return $this->{};", pk));
        writer.outdent();
        writer.write_line("}");
        writer.newline();
    }

    /// Emit the setter/getter pair for a declared attribute.
    ///
    /// Skipped entirely for attributes with an empty name.
    pub fn write_setter_and_getter(&self, writer: &mut CodeWriter, attribute: NodeId) {
        let node = self.model.node(attribute);
        let NodeKind::Attribute(data) = &node.kind else {
            return;
        };
        if node.name.is_empty() {
            return;
        }
        let name = &node.name;
        let declared = self.declared_type_name(&data.type_ref);
        let plain_type = declared.as_deref().unwrap_or("type");

        // Setter
        let doc = format!(
            "Set {}\n\n@param {} {} {}",
            name,
            plain_type,
            name,
            node.documentation.trim()
        );
        write_doc(writer, &doc, self.options);
        writer.write_line(&format!(
            "public function set{}(${})",
            capitalize(name),
            name
        ));
        writer.write_line("{");
        writer.indent();
        writer.write_line(&format!("$this->{} = ${};", name, name));
        writer.outdent();
        writer.write_line("}");
        writer.newline();

        // Getter
        let doc = format!(
            "Get {}\n\n@return {} {}",
            name,
            plain_type,
            node.documentation.trim()
        );
        write_doc(writer, &doc, self.options);
        writer.write_line(&format!("public function get{}()", capitalize(name)));
        writer.write_line("{");
        writer.indent();
        writer.write_line(&format!("return $this->{};", name));
        writer.outdent();
        writer.write_line("}");
        writer.newline();
    }

    /// Emit an operation.
    ///
    /// `skip_body` renders a signature-only declaration (interfaces);
    /// `skip_params` suppresses the parameter list (annotation types).
    /// Abstract operations always render signature-only. A non-empty
    /// specification becomes the literal body, otherwise a stub body with a
    /// return statement defaulted by the return type category is emitted.
    pub fn write_method(
        &self,
        writer: &mut CodeWriter,
        operation: NodeId,
        skip_body: bool,
        skip_params: bool,
    ) {
        let node = self.model.node(operation);
        let NodeKind::Operation(data) = &node.kind else {
            return;
        };
        if node.name.is_empty() {
            return;
        }

        let params = self.model.call_parameters(operation);
        let return_param = self.model.return_parameter(operation);

        let mut doc = node.documentation.trim().to_string();
        for &param in &params {
            let param_node = self.model.node(param);
            doc.push_str(&format!(
                "\n@param {} ${} {}",
                self.parameter_type(param),
                param_node.name,
                param_node.documentation
            ));
        }
        if let Some(ret) = return_param {
            doc.push_str(&format!(
                "\n@return {} {}",
                self.parameter_type(ret),
                self.model.node(ret).documentation
            ));
        }
        write_doc(writer, &doc, self.options);

        let modifiers = member_modifiers(node);
        let mut terms = Vec::new();
        if !modifiers.is_empty() {
            terms.push(modifiers.join(" "));
        }
        terms.push("function".to_string());
        terms.push(format!(
            "{}({})",
            node.name,
            self.parameter_list(&params, skip_params)
        ));

        if skip_body || node.is_abstract {
            writer.write_line(&format!("{};", terms.join(" ")));
            return;
        }

        writer.write_line(&format!("{} {{", terms.join(" ")));
        writer.indent();
        if !data.specification.is_empty() {
            write_specification(writer, &data.specification);
        } else {
            writer.write_line("// TODO implement here");
            if let Some(ret) = return_param {
                self.write_default_return(writer, &self.parameter_type(ret));
            }
        }
        writer.outdent();
        writer.write_line("}");
    }

    /// Emit a stub implementation for an abstract superclass operation not
    /// overridden by `class_id`.
    pub fn write_inherited_stub(
        &self,
        writer: &mut CodeWriter,
        method: NodeId,
        class_id: NodeId,
        skip_params: bool,
    ) {
        let method_node = self.model.node(method);
        if method_node.name.is_empty() {
            return;
        }
        let overridden = self
            .model
            .operations_of(class_id)
            .iter()
            .any(|&op| self.model.node(op).name == method_node.name);
        if overridden {
            return;
        }

        let params = self.model.call_parameters(method);
        let return_param = self.model.return_parameter(method);

        let mut doc = method_node.documentation.trim().to_string();
        for &param in &params {
            let param_node = self.model.node(param);
            doc.push_str(&format!(
                "\n@param {} {} {}",
                self.parameter_type(param),
                param_node.name,
                param_node.documentation
            ));
        }
        if let Some(ret) = return_param {
            doc.push_str(&format!(
                "\n@return {} {}",
                self.parameter_type(ret),
                self.model.node(ret).documentation
            ));
        }
        write_doc(writer, &doc, self.options);

        let mut terms = vec![method_node.visibility.to_string()];
        terms.push("function".to_string());
        terms.push(format!(
            "{}({})",
            method_node.name,
            self.parameter_list(&params, skip_params)
        ));

        writer.write_line(&format!("{} {{", terms.join(" ")));
        writer.indent();
        writer.write_line("// TODO implement here");
        writer.outdent();
        writer.write_line("}");
    }

    fn parameter_type(&self, parameter: NodeId) -> String {
        match &self.model.node(parameter).kind {
            NodeKind::Parameter(data) => self.resolve_type(&data.type_ref, &data.multiplicity),
            _ => super::TYPE_VOID.to_string(),
        }
    }

    fn parameter_list(&self, params: &[NodeId], skip_params: bool) -> String {
        if skip_params {
            return String::new();
        }
        params
            .iter()
            .map(|&p| format!("${}", self.model.node(p).name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_default_return(&self, writer: &mut CodeWriter, return_type: &str) {
        let statement = match return_type {
            "boolean" => "return false;",
            "int" | "long" | "short" | "byte" => "return 0;",
            "float" | "double" => "return 0.0;",
            "char" => "return '0';",
            "string" => "return \"\";",
            _ => "return null;",
        };
        writer.write_line(statement);
    }
}
