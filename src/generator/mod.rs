//! # Generator Module
//!
//! The generator module turns a populated structural [`Model`](crate::model::Model)
//! into a tree of Doctrine-annotated PHP source files.
//!
//! ## Overview
//!
//! Generation is a single read-only traversal:
//!
//! ```text
//! Model → Tree Walker → Type Emitters → CodeWriter → FileSystem collaborator
//! ```
//!
//! 1. **Tree Walker** ([`generate`]) - maps container nodes to directories
//!    and type nodes to files, strictly sequentially, aborting on the first
//!    failure
//! 2. **Type Emitters** ([`Emitter`]) - render one complete textual unit per
//!    class/interface/enumeration/annotation type
//! 3. **Resolvers** - namespace resolution over the ownership chain, type
//!    resolution with collection markers, association-cardinality
//!    classification
//! 4. **CodeWriter** - append-only buffer carrying the only mutable state of
//!    a run: the indentation depth
//!
//! ## Generated Structure
//!
//! A project/module/package tree produces:
//!
//! ```text
//! <destination>/
//! └── MyProject/
//!     └── ShopBundle/
//!         └── Entity/
//!             ├── Customer.php
//!             ├── Order.php
//!             └── Status.php
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use doctrinegen::config::GenOptions;
//! use doctrinegen::fs::DiskFileSystem;
//! use doctrinegen::generator::generate;
//!
//! generate(&model, root, Path::new("out"), &GenOptions::default(), &DiskFileSystem).await?;
//! ```
//!
//! Model incompleteness (missing types, empty names, absent multiplicities)
//! never fails a run; it degrades to sentinel types or silent skips. Only
//! filesystem rejections and cancellation surface as errors.

mod association;
mod emit;
mod error;
mod members;
mod naming;
mod namespace;
#[cfg(test)]
mod tests;
mod types;
mod walk;
mod writer;

pub use association::{classify, AssociationKind};
pub use emit::Emitter;
pub use error::GenerateError;
pub use naming::{capitalize, lower_first, pluralize, snake, upper_camel};
pub use walk::generate;
pub use writer::{write_doc, CodeWriter};

/// Separator between namespace segments in generated code.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Sentinel type expression for unresolvable typed elements.
pub(crate) const TYPE_VOID: &str = "void";
