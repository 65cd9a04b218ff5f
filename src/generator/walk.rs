use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::debug;

use super::emit::Emitter;
use super::error::GenerateError;
use super::naming::upper_camel;
use super::writer::CodeWriter;
use crate::config::GenOptions;
use crate::fs::FileSystem;
use crate::model::{Model, NodeId, NodeKind};

/// Generate source files for `root` and everything it owns under
/// `destination`.
///
/// Container nodes (project/module/package) map to directories, type nodes
/// map to `<Name>.php` files; any other node kind is a no-op. Children are
/// generated strictly sequentially in declaration order, and the first
/// failure aborts the remaining siblings at every level. A run either
/// completes or stops at its first fault, with whatever partial output was
/// already written left on disk.
///
/// # Errors
///
/// [`GenerateError::Cancelled`] when `destination` is empty (no destination
/// chosen); [`GenerateError::Io`] when the filesystem collaborator rejects a
/// directory create or file write.
pub async fn generate(
    model: &Model,
    root: NodeId,
    destination: &Path,
    options: &GenOptions,
    fs: &dyn FileSystem,
) -> Result<(), GenerateError> {
    if destination.as_os_str().is_empty() {
        return Err(GenerateError::Cancelled);
    }
    let walker = Walker {
        model,
        options,
        fs,
    };
    walker.generate_element(root, destination.to_path_buf()).await
}

struct Walker<'a> {
    model: &'a Model,
    options: &'a GenOptions,
    fs: &'a dyn FileSystem,
}

type WalkFuture<'f> = Pin<Box<dyn Future<Output = Result<(), GenerateError>> + Send + 'f>>;

impl Walker<'_> {
    /// Recursive dispatch on node kind. Boxed because async recursion needs
    /// an indirection for its fixed-size future.
    fn generate_element<'s>(&'s self, id: NodeId, path: PathBuf) -> WalkFuture<'s> {
        Box::pin(async move {
            let node = self.model.node(id);
            match &node.kind {
                NodeKind::Project | NodeKind::Package => {
                    let dir = path.join(upper_camel(&node.name));
                    self.create_directory(&dir).await?;
                    self.generate_children(id, &dir).await
                }
                NodeKind::Module => {
                    let mut name = upper_camel(&node.name);
                    name.push_str(&self.options.bundle_suffix);
                    let mut dir = path.join(name);
                    if !self.options.entity_folder.is_empty() {
                        dir = dir.join(&self.options.entity_folder);
                    }
                    self.create_directory(&dir).await?;
                    self.generate_children(id, &dir).await
                }
                NodeKind::Class => {
                    let emitter = Emitter::new(self.model, self.options);
                    let mut writer = CodeWriter::new(self.options);
                    writer.write_line("<?php\n");
                    emitter.write_namespace_declaration(&mut writer, id);
                    emitter.write_uses_declaration(&mut writer);
                    emitter.write_class(&mut writer, id);
                    self.write_unit(&path, &node.name, writer).await
                }
                NodeKind::Interface => {
                    let emitter = Emitter::new(self.model, self.options);
                    let mut writer = CodeWriter::new(self.options);
                    writer.write_line("<?php\n");
                    emitter.write_namespace_declaration(&mut writer, id);
                    writer.newline();
                    emitter.write_interface(&mut writer, id);
                    self.write_unit(&path, &node.name, writer).await
                }
                NodeKind::Enumeration(_) => {
                    let emitter = Emitter::new(self.model, self.options);
                    let mut writer = CodeWriter::new(self.options);
                    writer.write_line("<?php\n");
                    emitter.write_namespace_declaration(&mut writer, id);
                    writer.newline();
                    emitter.write_enum(&mut writer, id);
                    self.write_unit(&path, &node.name, writer).await
                }
                NodeKind::AnnotationType => {
                    let emitter = Emitter::new(self.model, self.options);
                    let mut writer = CodeWriter::new(self.options);
                    writer.write_line("<?php\n");
                    emitter.write_namespace_declaration(&mut writer, id);
                    writer.newline();
                    emitter.write_annotation_type(&mut writer, id);
                    self.write_unit(&path, &node.name, writer).await
                }
                // Attributes, operations and parameters are rendered by
                // their owning type; nothing to generate standalone.
                _ => Ok(()),
            }
        })
    }

    async fn generate_children(&self, id: NodeId, dir: &Path) -> Result<(), GenerateError> {
        for &child in self.model.children(id) {
            self.generate_element(child, dir.to_path_buf()).await?;
        }
        Ok(())
    }

    async fn create_directory(&self, dir: &Path) -> Result<(), GenerateError> {
        self.fs
            .create_directory(dir)
            .await
            .map_err(|source| GenerateError::Io {
                path: dir.to_path_buf(),
                source,
            })
    }

    async fn write_unit(
        &self,
        dir: &Path,
        name: &str,
        writer: CodeWriter,
    ) -> Result<(), GenerateError> {
        let file_path = dir.join(format!("{}.php", name));
        debug!(path = %file_path.display(), "emitting type unit");
        self.fs
            .write_file(&file_path, writer.data(), true)
            .await
            .map_err(|source| GenerateError::Io {
                path: file_path,
                source,
            })
    }
}
