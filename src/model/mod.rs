//! # Structural Model
//!
//! Read-only input to the generation core: an arena of [`Node`]s connected by
//! an ownership tree (projects own modules, modules own packages, packages
//! own types, types own attributes/operations) plus a separate
//! [`Relationship`] edge list for generalizations, interface realizations and
//! associations.
//!
//! The caller builds the model up front; a generation run is a pure traversal
//! over it. Nothing in this module is mutated by the generator.

mod graph;
mod types;

pub use graph::Model;
pub use types::{
    Association, AssociationEnd, AttributeData, EnumerationData, Node, NodeId, NodeKind,
    OperationData, ParameterData, ParameterDirection, Relationship, TypeRef, Visibility,
};
