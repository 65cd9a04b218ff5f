use std::fmt;

use super::emit::Emitter;
use super::naming::{lower_first, pluralize, snake};
use super::writer::{write_doc, CodeWriter};
use crate::model::{Association, AssociationEnd, NodeId};

/// Relationship cardinality inferred from a pair of association ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    ManyToOne,
    OneToMany,
    ManyToMany,
    OneToOne,
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssociationKind::ManyToOne => "ManyToOne",
            AssociationKind::OneToMany => "OneToMany",
            AssociationKind::ManyToMany => "ManyToMany",
            AssociationKind::OneToOne => "OneToOne",
        };
        write!(f, "{}", s)
    }
}

/// Binary reduction of a multiplicity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MultiplicityClass {
    One,
    Many,
}

/// Classify a multiplicity by its trailing character only: `*` is many,
/// `1` is one, anything else is unclassifiable.
fn classify_multiplicity(multiplicity: &str) -> Option<MultiplicityClass> {
    match multiplicity.chars().last() {
        Some('*') => Some(MultiplicityClass::Many),
        Some('1') => Some(MultiplicityClass::One),
        _ => None,
    }
}

/// Infer the relationship kind for a source/target end pair.
///
/// An unclassifiable multiplicity on either side forces the one-to-one
/// default. Swapping the end roles swaps ManyToOne and OneToMany and leaves
/// the symmetric kinds fixed.
pub fn classify(source_end: &AssociationEnd, target_end: &AssociationEnd) -> AssociationKind {
    use MultiplicityClass::{Many, One};
    match (
        classify_multiplicity(&source_end.multiplicity),
        classify_multiplicity(&target_end.multiplicity),
    ) {
        (Some(Many), Some(One)) => AssociationKind::ManyToOne,
        (Some(One), Some(Many)) => AssociationKind::OneToMany,
        (Some(Many), Some(Many)) => AssociationKind::ManyToMany,
        _ => AssociationKind::OneToOne,
    }
}

impl Emitter<'_> {
    /// Emit the field derived from `association` into the body of `class_id`.
    ///
    /// The end whose reference name matches the class under emission becomes
    /// the source side; the field is named after the other end's referenced
    /// type, pluralized on the many side. When both ends reference classes
    /// with the same name (self-associations, duplicate names across
    /// namespaces) the first end wins; the direction choice is ambiguous by
    /// construction and deliberately left that way.
    pub fn write_association(
        &self,
        writer: &mut CodeWriter,
        association: &Association,
        class_id: NodeId,
    ) {
        let class_name = &self.model.node(class_id).name;
        let (source_end, target_end) =
            if &self.model.node(association.end1.reference).name == class_name {
                (&association.end1, &association.end2)
            } else {
                (&association.end2, &association.end1)
            };

        let kind = classify(source_end, target_end);

        if self.options.annotations_enabled() {
            match kind {
                AssociationKind::ManyToOne => {
                    self.write_many_to_one_doc(writer, source_end, target_end)
                }
                AssociationKind::OneToMany => {
                    self.write_one_to_many_doc(writer, source_end, target_end)
                }
                AssociationKind::ManyToMany => {
                    self.write_many_to_many_doc(writer, source_end, target_end)
                }
                AssociationKind::OneToOne => self.write_one_to_one_doc(writer, target_end),
            }
        }

        let mut terms = vec![association.visibility.to_string()];
        let target_name = &self.model.node(target_end.reference).name;
        let field = match kind {
            AssociationKind::ManyToMany | AssociationKind::OneToMany => {
                pluralize(&lower_first(target_name))
            }
            _ => lower_first(target_name),
        };
        terms.push(format!("${}", field));
        writer.write_line(&format!("{};", terms.join(" ")));
    }

    fn write_many_to_one_doc(
        &self,
        writer: &mut CodeWriter,
        source_end: &AssociationEnd,
        target_end: &AssociationEnd,
    ) {
        let source = &self.model.node(source_end.reference).name;
        let target = &self.model.node(target_end.reference).name;
        let doc = format!(
            "@ManyToOne(targetEntity=\"{}\", inversedBy=\"{}\")\n\
             @JoinColumn(name=\"{}_id\", referencedColumnName=\"{}\")",
            target,
            pluralize(&source.to_lowercase()),
            snake(target),
            self.options.default_pk
        );
        write_doc(writer, &doc, self.options);
    }

    fn write_one_to_many_doc(
        &self,
        writer: &mut CodeWriter,
        source_end: &AssociationEnd,
        target_end: &AssociationEnd,
    ) {
        let source = &self.model.node(source_end.reference).name;
        let target = &self.model.node(target_end.reference).name;
        let doc = format!(
            "@OneToMany(targetEntity=\"{}\", mappedBy=\"{}\")",
            target,
            source.to_lowercase()
        );
        write_doc(writer, &doc, self.options);
    }

    fn write_many_to_many_doc(
        &self,
        writer: &mut CodeWriter,
        source_end: &AssociationEnd,
        target_end: &AssociationEnd,
    ) {
        let source = &self.model.node(source_end.reference).name;
        let target = &self.model.node(target_end.reference).name;
        let doc = format!(
            "@ManyToMany(targetEntity=\"{}\", inversedBy=\"{}\")\n\
             @JoinTable(name=\"{}_{}\")",
            target,
            pluralize(&source.to_lowercase()),
            snake(source),
            pluralize(&target.to_lowercase())
        );
        write_doc(writer, &doc, self.options);
    }

    fn write_one_to_one_doc(&self, writer: &mut CodeWriter, target_end: &AssociationEnd) {
        let target = &self.model.node(target_end.reference).name;
        let doc = format!(
            "@OneToOne(targetEntity=\"{}\")\n\
             @JoinColumn(name=\"{}_id\", referencedColumnName=\"{}\")",
            target,
            snake(target),
            self.options.default_pk
        );
        write_doc(writer, &doc, self.options);
    }
}
