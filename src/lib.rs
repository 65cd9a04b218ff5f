//! # doctrinegen
//!
//! **doctrinegen** generates Doctrine 2 annotated PHP entity sources from a
//! hierarchical structural model: projects, modules, packages, classes,
//! interfaces, enumerations, attributes, operations, associations and
//! generalizations.
//!
//! ## Overview
//!
//! The crate is a model-to-text engine. The caller assembles a read-only
//! [`model::Model`] (an arena of nodes plus relationship edges), picks a
//! destination directory and an option set, and runs one generation pass.
//! Containers become directories, types become `.php` files carrying
//! `@ORM\*` persistence metadata inside PHPDoc blocks.
//!
//! ## Architecture
//!
//! - **[`model`]** - the structural model arena: node kinds, ownership tree,
//!   generalization/realization/association edges
//! - **[`config`]** - the per-run option set (`GenOptions`), loadable from
//!   YAML or JSON
//! - **[`generator`]** - namespace and type resolution, association
//!   classification, member/accessor synthesis, the four type emitters and
//!   the sequential tree walker
//! - **[`fs`]** - the filesystem collaborator trait plus the `tokio::fs`
//!   backed production implementation
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctrinegen::config::GenOptions;
//! use doctrinegen::fs::DiskFileSystem;
//! use doctrinegen::generator::generate;
//! use doctrinegen::model::{Model, Node, NodeKind};
//! use std::path::Path;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), doctrinegen::generator::GenerateError> {
//! let mut model = Model::new();
//! let package = model.add_root(Node::new(NodeKind::Package, "Shop"));
//! model.add_child(package, Node::new(NodeKind::Class, "Customer"));
//!
//! generate(
//!     &model,
//!     package,
//!     Path::new("out"),
//!     &GenOptions::default(),
//!     &DiskFileSystem,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Behaviors
//!
//! - **Deterministic**: output is a pure function of model and options;
//!   regenerating from unchanged inputs is byte-identical
//! - **Sequential, fail-fast**: siblings generate in declaration order and
//!   the first filesystem failure aborts the rest of the run
//! - **Lenient model handling**: missing types resolve to a `void` sentinel,
//!   unnamed attributes are skipped, unclassifiable multiplicities fall back
//!   to one-to-one; incomplete models never fail a run
//! - **Synthesized identity**: every entity class receives a primary-key
//!   field and getter even when the model declares none

pub mod config;
pub mod fs;
pub mod generator;
pub mod model;

pub use config::{GenOptions, MappingMode};
pub use fs::{DiskFileSystem, FileSystem};
pub use generator::{classify, generate, AssociationKind, Emitter, GenerateError};
pub use model::{Model, Node, NodeId, NodeKind};
