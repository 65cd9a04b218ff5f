use std::fmt;

/// Index of a node inside a [`Model`](super::Model) arena.
///
/// Ids are handed out by [`Model::add_root`](super::Model::add_root) and
/// [`Model::add_child`](super::Model::add_child) and are only meaningful for
/// the arena that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Member visibility as rendered into PHP source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        write!(f, "{}", s)
    }
}

/// Declared type of an attribute or parameter.
///
/// A typed element either references another structural element in the model,
/// carries a plain type name (`"string"`, `"decimal"`, ...), or declares no
/// type at all. Resolution of this into a PHP type expression lives in
/// [`Emitter::resolve_type`](crate::generator::Emitter::resolve_type).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeRef {
    /// No type information present.
    #[default]
    None,
    /// A plain type name, e.g. a PHP primitive.
    Named(String),
    /// A reference to another node in the model.
    Node(NodeId),
}

/// Direction of an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterDirection {
    /// A regular call parameter.
    #[default]
    In,
    /// The operation's return value.
    Return,
}

/// Payload of an [`NodeKind::Attribute`] node.
#[derive(Debug, Clone, Default)]
pub struct AttributeData {
    /// Declared type of the attribute.
    pub type_ref: TypeRef,
    /// Multiplicity string, e.g. `"1"`, `"0..*"`. Empty when unspecified.
    pub multiplicity: String,
    /// Whether the column carries a uniqueness constraint.
    pub is_unique: bool,
    /// Whether the attribute is the identifying field of its class.
    pub is_id: bool,
    /// Literal initializer rendered after the field declaration.
    pub default_value: Option<String>,
}

/// Payload of an [`NodeKind::Operation`] node.
#[derive(Debug, Clone, Default)]
pub struct OperationData {
    /// Literal method body. When empty, a stub body is synthesized.
    pub specification: String,
}

/// Payload of an [`NodeKind::Parameter`] node.
#[derive(Debug, Clone, Default)]
pub struct ParameterData {
    pub type_ref: TypeRef,
    pub multiplicity: String,
    pub direction: ParameterDirection,
}

/// Payload of an [`NodeKind::Enumeration`] node.
#[derive(Debug, Clone, Default)]
pub struct EnumerationData {
    /// Literal names in declaration order.
    pub literals: Vec<String>,
}

/// Closed set of structural element kinds.
///
/// The tree walker and the emitters dispatch exhaustively on this enum; a
/// kind without a generation rule (attributes, operations and parameters are
/// rendered by their owning type, never as standalone files) is a no-op for
/// the walker.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Root project. Maps to a directory.
    Project,
    /// A model/bundle. Maps to a directory with the configured bundle suffix.
    Module,
    /// A package. Maps to a directory.
    Package,
    /// A class. Maps to a `<Name>.php` entity file.
    Class,
    /// An interface. Maps to a `<Name>.php` file.
    Interface,
    /// An enumeration. Maps to a `<Name>.php` file.
    Enumeration(EnumerationData),
    /// An annotation type (`@interface`). Maps to a `<Name>.php` file.
    AnnotationType,
    /// A class attribute; owned by a Class/Interface/AnnotationType node.
    Attribute(AttributeData),
    /// An operation; owned by a type node. Parameters are child nodes.
    Operation(OperationData),
    /// An operation parameter; owned by an Operation node.
    Parameter(ParameterData),
}

/// A single structural element.
///
/// Nodes are constructed by the caller, inserted into a [`Model`](super::Model)
/// and never mutated by the generation core.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub documentation: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    /// Final / leaf elements render as `final` classes or `const` members.
    pub is_leaf: bool,
    /// Concurrent elements pick up a `synchronized` modifier.
    pub is_concurrent: bool,
    pub stereotype: Option<String>,
    pub kind: NodeKind,
}

impl Node {
    /// Create a node of the given kind with default flags.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            documentation: String::new(),
            visibility: Visibility::default(),
            is_static: false,
            is_abstract: false,
            is_leaf: false,
            is_concurrent: false,
            stereotype: None,
            kind,
        }
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_leaf(mut self, is_leaf: bool) -> Self {
        self.is_leaf = is_leaf;
        self
    }

    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }
}

/// One side of a binary association.
#[derive(Debug, Clone)]
pub struct AssociationEnd {
    /// Role name. May be empty; interface member emission skips unnamed ends.
    pub name: String,
    pub documentation: String,
    /// The node this end is attached to.
    pub reference: NodeId,
    /// Multiplicity string; classified by its trailing character only.
    pub multiplicity: String,
    pub navigable: bool,
    /// Rendered as the modifier when the end appears as an interface member.
    pub visibility: Visibility,
}

impl AssociationEnd {
    pub fn new(reference: NodeId, multiplicity: impl Into<String>) -> Self {
        AssociationEnd {
            name: String::new(),
            documentation: String::new(),
            reference,
            multiplicity: multiplicity.into(),
            navigable: true,
            visibility: Visibility::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_navigable(mut self, navigable: bool) -> Self {
        self.navigable = navigable;
        self
    }
}

/// A binary association between two model elements.
#[derive(Debug, Clone)]
pub struct Association {
    pub end1: AssociationEnd,
    pub end2: AssociationEnd,
    /// Rendered as the modifier of the derived field. Defaults to public.
    pub visibility: Visibility,
}

impl Association {
    pub fn new(end1: AssociationEnd, end2: AssociationEnd) -> Self {
        Association {
            end1,
            end2,
            visibility: Visibility::default(),
        }
    }
}

/// Graph edges between nodes, kept separate from the ownership tree.
#[derive(Debug, Clone)]
pub enum Relationship {
    /// `source` extends `target`.
    Generalization { source: NodeId, target: NodeId },
    /// `source` implements `target`.
    InterfaceRealization { source: NodeId, target: NodeId },
    Association(Association),
}
