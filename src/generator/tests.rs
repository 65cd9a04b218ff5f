#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::GenOptions;
use crate::model::{
    Association, AssociationEnd, AttributeData, Model, Node, NodeId, NodeKind, OperationData,
    ParameterData, ParameterDirection, TypeRef, Visibility,
};

fn attribute(name: &str, ty: &str) -> Node {
    Node::new(
        NodeKind::Attribute(AttributeData {
            type_ref: TypeRef::Named(ty.to_string()),
            ..Default::default()
        }),
        name,
    )
}

/// Project("shop system") → Module("store") → Package("catalog") → Class("Product")
fn nested_model() -> (Model, NodeId) {
    let mut model = Model::new();
    let project = model.add_root(Node::new(NodeKind::Project, "shop system"));
    let module = model.add_child(project, Node::new(NodeKind::Module, "store"));
    let package = model.add_child(module, Node::new(NodeKind::Package, "catalog"));
    let class = model.add_child(package, Node::new(NodeKind::Class, "Product"));
    (model, class)
}

#[test]
fn test_resolve_namespace_chain() {
    let (model, class) = nested_model();
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    assert_eq!(
        emitter.resolve_namespace(class),
        vec!["ShopSystem", "StoreBundle", "Catalog"]
    );
}

#[test]
fn test_resolve_namespace_without_bundle_suffix() {
    let (model, class) = nested_model();
    let options = GenOptions {
        bundle_suffix: String::new(),
        ..GenOptions::default()
    };
    let emitter = Emitter::new(&model, &options);
    assert_eq!(
        emitter.resolve_namespace(class),
        vec!["ShopSystem", "Store", "Catalog"]
    );
}

#[test]
fn test_resolve_namespace_stops_at_non_container() {
    let mut model = Model::new();
    let package = model.add_root(Node::new(NodeKind::Package, "outer"));
    let class = model.add_child(package, Node::new(NodeKind::Class, "Outer"));
    let nested = model.add_child(class, Node::new(NodeKind::Class, "Inner"));
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    // The walk stops at the owning class; the package above it does not leak
    // into the nested class namespace.
    assert!(emitter.resolve_namespace(nested).is_empty());
    assert_eq!(emitter.resolve_namespace(class), vec!["Outer"]);
}

#[test]
fn test_resolve_qualified_namespace_with_base() {
    let (model, class) = nested_model();
    let options = GenOptions {
        base_namespace: Some("App".to_string()),
        ..GenOptions::default()
    };
    let emitter = Emitter::new(&model, &options);
    assert_eq!(
        emitter.resolve_qualified_namespace(class),
        "App\\ShopSystem\\StoreBundle\\Catalog"
    );
}

#[test]
fn test_resolve_type_plain_and_collection() {
    let model = Model::new();
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);

    let named = TypeRef::Named("string".to_string());
    assert_eq!(emitter.resolve_type(&named, ""), "string");
    assert_eq!(emitter.resolve_type(&named, "1"), "string");
    assert_eq!(emitter.resolve_type(&named, "0..*"), "string[]");
    assert_eq!(emitter.resolve_type(&named, "1..*"), "string[]");
    assert_eq!(emitter.resolve_type(&named, "*"), "string[]");
    assert_eq!(emitter.resolve_type(&named, " * "), "string[]");
}

#[test]
fn test_resolve_type_sentinel() {
    let mut model = Model::new();
    let unnamed = model.add_root(Node::new(NodeKind::Class, ""));
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);

    assert_eq!(emitter.resolve_type(&TypeRef::None, ""), "void");
    assert_eq!(emitter.resolve_type(&TypeRef::Named(String::new()), ""), "void");
    assert_eq!(emitter.resolve_type(&TypeRef::Node(unnamed), ""), "void");
    // The sentinel never picks up a collection marker.
    assert_eq!(emitter.resolve_type(&TypeRef::None, "*"), "void");
}

#[test]
fn test_resolve_type_node_reference_is_qualified() {
    let (model, class) = nested_model();
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    assert_eq!(
        emitter.resolve_type(&TypeRef::Node(class), ""),
        "\\ShopSystem\\StoreBundle\\Catalog\\Product"
    );
    assert_eq!(
        emitter.resolve_type(&TypeRef::Node(class), "1..*"),
        "\\ShopSystem\\StoreBundle\\Catalog\\Product[]"
    );
}

#[test]
fn test_classify_table() {
    let mut model = Model::new();
    let a = model.add_root(Node::new(NodeKind::Class, "A"));
    let b = model.add_root(Node::new(NodeKind::Class, "B"));
    let end = |mult: &str| AssociationEnd::new(a, mult);
    let other = |mult: &str| AssociationEnd::new(b, mult);

    assert_eq!(classify(&end("*"), &other("1")), AssociationKind::ManyToOne);
    assert_eq!(classify(&end("1"), &other("*")), AssociationKind::OneToMany);
    assert_eq!(classify(&end("*"), &other("*")), AssociationKind::ManyToMany);
    assert_eq!(classify(&end("1"), &other("1")), AssociationKind::OneToOne);
    // Only the trailing character matters.
    assert_eq!(classify(&end("0..*"), &other("0..1")), AssociationKind::ManyToOne);
    assert_eq!(classify(&end("1..*"), &other("1..*")), AssociationKind::ManyToMany);
}

#[test]
fn test_classify_unclassifiable_defaults_to_one_to_one() {
    let mut model = Model::new();
    let a = model.add_root(Node::new(NodeKind::Class, "A"));
    let b = model.add_root(Node::new(NodeKind::Class, "B"));
    let end = |mult: &str| AssociationEnd::new(a, mult);
    let other = |mult: &str| AssociationEnd::new(b, mult);

    assert_eq!(classify(&end(""), &other("*")), AssociationKind::OneToOne);
    assert_eq!(classify(&end("0..n"), &other("1")), AssociationKind::OneToOne);
    assert_eq!(classify(&end("*"), &other("many")), AssociationKind::OneToOne);
}

#[test]
fn test_classify_swapping_roles() {
    let mut model = Model::new();
    let a = model.add_root(Node::new(NodeKind::Class, "A"));
    let b = model.add_root(Node::new(NodeKind::Class, "B"));
    let many = AssociationEnd::new(a, "*");
    let one = AssociationEnd::new(b, "1");
    assert_eq!(classify(&many, &one), AssociationKind::ManyToOne);
    assert_eq!(classify(&one, &many), AssociationKind::OneToMany);
}

#[test]
fn test_write_pk_field() {
    let model = Model::new();
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_pk(&mut writer);
    assert_eq!(
        writer.data(),
        "/**\n * @ORM\\Id\n * @ORM\\Column(type=\"integer\")\n * @ORM\\GeneratedValue(strategy=\"AUTO\")\n */\nprotected $id;\n"
    );
}

#[test]
fn test_write_pk_uses_configured_name() {
    let model = Model::new();
    let options = GenOptions {
        default_pk: "uuid".to_string(),
        ..GenOptions::default()
    };
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_pk(&mut writer);
    assert!(writer.data().ends_with("protected $uuid;\n"));
}

#[test]
fn test_write_pk_disabled_when_no_default() {
    let model = Model::new();
    let options = GenOptions {
        default_pk: String::new(),
        ..GenOptions::default()
    };
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_pk(&mut writer);
    assert_eq!(writer.data(), "");
}

#[test]
fn test_write_member_variable_column_descriptor() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Customer"));
    let attr = model.add_child(
        class,
        Node::new(
            NodeKind::Attribute(AttributeData {
                type_ref: TypeRef::Named("string".to_string()),
                is_unique: true,
                ..Default::default()
            }),
            "email",
        )
        .with_visibility(Visibility::Private),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_member_variable(&mut writer, attr);
    let data = writer.data();
    assert!(data.contains(
        "@ORM\\Column(name=\"email\", type=\"string\", length=255, unique=\"true\")"
    ));
    assert!(data.ends_with("private $email;\n"));
}

#[test]
fn test_write_member_variable_decimal_scale_and_id() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Invoice"));
    let attr = model.add_child(
        class,
        Node::new(
            NodeKind::Attribute(AttributeData {
                type_ref: TypeRef::Named("decimal".to_string()),
                is_id: true,
                ..Default::default()
            }),
            "total",
        ),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_member_variable(&mut writer, attr);
    let data = writer.data();
    assert!(data.contains("@ORM\\Column(name=\"total\", type=\"decimal\", scale=2)"));
    assert!(data.contains(" * @ORM\\Id\n"));
    assert!(data.contains(" * @ORM\\GeneratedValue(strategy=\"AUTO\")\n"));
}

#[test]
fn test_write_member_variable_unknown_type_fallback() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Thing"));
    let attr = model.add_child(
        class,
        Node::new(NodeKind::Attribute(AttributeData::default()), "blob"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_member_variable(&mut writer, attr);
    assert!(writer.data().contains("@ORM\\Column(name=\"blob\", type=\"void\")"));
}

#[test]
fn test_write_member_variable_skips_empty_name() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Thing"));
    let attr = model.add_child(
        class,
        Node::new(NodeKind::Attribute(AttributeData::default()), ""),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_member_variable(&mut writer, attr);
    assert_eq!(writer.data(), "");
}

#[test]
fn test_final_attribute_renders_as_const() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Config"));
    let attr = model.add_child(
        class,
        Node::new(
            NodeKind::Attribute(AttributeData {
                type_ref: TypeRef::Named("string".to_string()),
                default_value: Some("\"production\"".to_string()),
                ..Default::default()
            }),
            "mode",
        )
        .with_leaf(true),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_member_variable(&mut writer, attr);
    assert!(writer.data().ends_with("const MODE = \"production\";\n"));
}

#[test]
fn test_write_pk_getter() {
    let model = Model::new();
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_pk_getter(&mut writer);
    assert_eq!(
        writer.data(),
        "/**\n * Get id\n * \n * @return integer\n */\npublic function getId()\n{\n    return $this->id;\n}\n\n"
    );
}

#[test]
fn test_pk_getter_falls_back_to_id() {
    let model = Model::new();
    let options = GenOptions {
        default_pk: String::new(),
        ..GenOptions::default()
    };
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_pk_getter(&mut writer);
    assert!(writer.data().contains("public function getId()"));
}

#[test]
fn test_setter_and_getter() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Customer"));
    let attr = model.add_child(class, attribute("email", "string"));
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_setter_and_getter(&mut writer, attr);
    let data = writer.data();
    assert!(data.contains("public function setEmail($email)\n{\n    $this->email = $email;\n}\n"));
    assert!(data.contains("public function getEmail()\n{\n    return $this->email;\n}\n"));
    assert!(data.contains(" * @param string email"));
    assert!(data.contains(" * @return string"));
}

#[test]
fn test_accessors_skip_empty_name() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Customer"));
    let attr = model.add_child(
        class,
        Node::new(NodeKind::Attribute(AttributeData::default()), ""),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_setter_and_getter(&mut writer, attr);
    assert_eq!(writer.data(), "");
}

fn operation_with_return(model: &mut Model, class: NodeId, name: &str, ret: &str) -> NodeId {
    let op = model.add_child(
        class,
        Node::new(NodeKind::Operation(OperationData::default()), name),
    );
    model.add_child(
        op,
        Node::new(
            NodeKind::Parameter(ParameterData {
                type_ref: TypeRef::Named(ret.to_string()),
                direction: ParameterDirection::Return,
                ..Default::default()
            }),
            "",
        ),
    );
    op
}

#[test]
fn test_method_stub_default_returns() {
    let cases = [
        ("boolean", "return false;"),
        ("int", "return 0;"),
        ("long", "return 0;"),
        ("float", "return 0.0;"),
        ("double", "return 0.0;"),
        ("char", "return '0';"),
        ("string", "return \"\";"),
        ("Customer", "return null;"),
    ];
    for (ty, expected) in cases {
        let mut model = Model::new();
        let class = model.add_root(Node::new(NodeKind::Class, "Svc"));
        let op = operation_with_return(&mut model, class, "run", ty);
        let options = GenOptions::default();
        let emitter = Emitter::new(&model, &options);
        let mut writer = CodeWriter::new(&options);
        emitter.write_method(&mut writer, op, false, false);
        assert!(
            writer.data().contains(expected),
            "return type {} should produce {}",
            ty,
            expected
        );
        assert!(writer.data().contains("// TODO implement here"));
    }
}

#[test]
fn test_method_literal_specification_body() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Svc"));
    let op = model.add_child(
        class,
        Node::new(
            NodeKind::Operation(OperationData {
                specification: "return $this->total * 2;".to_string(),
            }),
            "double",
        ),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_method(&mut writer, op, false, false);
    let data = writer.data();
    assert!(data.contains("return $this->total * 2;"));
    assert!(!data.contains("TODO"));
}

#[test]
fn test_abstract_method_signature_only() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Svc"));
    let op = model.add_child(
        class,
        Node::new(NodeKind::Operation(OperationData::default()), "run").with_abstract(true),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_method(&mut writer, op, false, false);
    assert!(writer.data().contains("public abstract function run();"));
    assert!(!writer.data().contains("{"));
}

#[test]
fn test_method_parameter_list_and_suppression() {
    let mut model = Model::new();
    let class = model.add_root(Node::new(NodeKind::Class, "Svc"));
    let op = model.add_child(
        class,
        Node::new(NodeKind::Operation(OperationData::default()), "rename"),
    );
    model.add_child(
        op,
        Node::new(
            NodeKind::Parameter(ParameterData {
                type_ref: TypeRef::Named("string".to_string()),
                ..Default::default()
            }),
            "name",
        ),
    );
    model.add_child(
        op,
        Node::new(
            NodeKind::Parameter(ParameterData {
                type_ref: TypeRef::Named("boolean".to_string()),
                ..Default::default()
            }),
            "force",
        ),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);

    let mut writer = CodeWriter::new(&options);
    emitter.write_method(&mut writer, op, true, false);
    assert!(writer.data().contains("public function rename($name, $force);"));

    let mut writer = CodeWriter::new(&options);
    emitter.write_method(&mut writer, op, true, true);
    assert!(writer.data().contains("public function rename();"));
}

#[test]
fn test_association_many_to_one_field() {
    let mut model = Model::new();
    let order = model.add_root(Node::new(NodeKind::Class, "Order"));
    let customer = model.add_root(Node::new(NodeKind::Class, "Customer"));
    let association = Association::new(
        AssociationEnd::new(order, "*"),
        AssociationEnd::new(customer, "1"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_association(&mut writer, &association, order);
    let data = writer.data();
    assert!(data.contains("@ManyToOne(targetEntity=\"Customer\", inversedBy=\"orders\")"));
    assert!(data.contains("@JoinColumn(name=\"customer_id\", referencedColumnName=\"id\")"));
    assert!(data.ends_with("public $customer;\n"));
}

#[test]
fn test_association_one_to_many_field_is_pluralized() {
    let mut model = Model::new();
    let order = model.add_root(Node::new(NodeKind::Class, "Order"));
    let customer = model.add_root(Node::new(NodeKind::Class, "Customer"));
    let association = Association::new(
        AssociationEnd::new(order, "*"),
        AssociationEnd::new(customer, "1"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    // Same association seen from the one side.
    let mut writer = CodeWriter::new(&options);
    emitter.write_association(&mut writer, &association, customer);
    let data = writer.data();
    assert!(data.contains("@OneToMany(targetEntity=\"Order\", mappedBy=\"customer\")"));
    assert!(data.ends_with("public $orders;\n"));
}

#[test]
fn test_association_many_to_many_join_table() {
    let mut model = Model::new();
    let post = model.add_root(Node::new(NodeKind::Class, "Post"));
    let tag = model.add_root(Node::new(NodeKind::Class, "Tag"));
    let association = Association::new(
        AssociationEnd::new(post, "*"),
        AssociationEnd::new(tag, "*"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_association(&mut writer, &association, post);
    let data = writer.data();
    assert!(data.contains("@ManyToMany(targetEntity=\"Tag\", inversedBy=\"posts\")"));
    assert!(data.contains("@JoinTable(name=\"post_tags\")"));
    assert!(data.ends_with("public $tags;\n"));
}

#[test]
fn test_association_one_to_one_join_column() {
    let mut model = Model::new();
    let user = model.add_root(Node::new(NodeKind::Class, "User"));
    let profile = model.add_root(Node::new(NodeKind::Class, "Profile"));
    let association = Association::new(
        AssociationEnd::new(user, "1"),
        AssociationEnd::new(profile, "1"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_association(&mut writer, &association, user);
    let data = writer.data();
    assert!(data.contains("@OneToOne(targetEntity=\"Profile\")"));
    assert!(data.contains("@JoinColumn(name=\"profile_id\", referencedColumnName=\"id\")"));
    assert!(data.ends_with("public $profile;\n"));
}

#[test]
fn test_inherited_stub_skips_overridden() {
    let mut model = Model::new();
    let base = model.add_root(Node::new(NodeKind::Class, "Base"));
    let child = model.add_root(Node::new(NodeKind::Class, "Child"));
    let abstract_op = model.add_child(
        base,
        Node::new(NodeKind::Operation(OperationData::default()), "run").with_abstract(true),
    );
    model.add_child(
        child,
        Node::new(NodeKind::Operation(OperationData::default()), "run"),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_inherited_stub(&mut writer, abstract_op, child, false);
    assert_eq!(writer.data(), "");
}

#[test]
fn test_inherited_stub_body() {
    let mut model = Model::new();
    let base = model.add_root(Node::new(NodeKind::Class, "Base"));
    let child = model.add_root(Node::new(NodeKind::Class, "Child"));
    let abstract_op = model.add_child(
        base,
        Node::new(NodeKind::Operation(OperationData::default()), "run").with_abstract(true),
    );
    let options = GenOptions::default();
    let emitter = Emitter::new(&model, &options);
    let mut writer = CodeWriter::new(&options);
    emitter.write_inherited_stub(&mut writer, abstract_op, child, false);
    assert!(writer
        .data()
        .contains("public function run() {\n    // TODO implement here\n}\n"));
}
