// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Base<Class>`: the always-regenerated abstract base of an entity.
//!
//! # Layout
//!
//! ```text
//! package <pkg>.base;
//! <imports>
//! <do-not-change marker>
//! public abstract class Base<Class> [extends <Parent>] implements Serializable {
//!     serialVersionUID
//!     scalar fields        (id, key components, properties)
//!     association fields   (many-to-one, sets)
//!     PROP_ constants      (column-backed id and properties)
//!     constructors         (no-arg, plus id-arg when a simple id is known)
//!     initialize()
//!     accessors
//!     equals / hashCode / toString   (per identifier kind)
//!     toDebugString()
//! }
//! ```

use super::{EntityView, GENERATED_MARKER, imports::ImportSet, members, package_line};
use crate::{
    emit::ArtifactKind,
    mapping::{Backing, CompositeIdentifier},
    resolve::ResolvedIdentifier
};

/// Render the base class of an entity.
pub(crate) fn render(view: &EntityView<'_>) -> String {
    let entity = view.entity;
    let class_name = view.class_name();

    let mut imports = ImportSet::new();
    imports.add("java.io.Serializable");

    let mut scalar_fields = String::new();
    let mut association_fields = String::new();
    let mut constants = String::new();
    let mut body = String::new();

    // Identifier
    if let Some(id) = entity.simple_identifier() {
        imports.add_type(&id.ty);
        scalar_fields.push_str(&members::field(id.ty.simple_name(), &id.name));
        constants.push_str(&members::property_constant(&id.column, &id.name));
        body.push_str(&members::accessors(id.ty.simple_name(), &id.name, false));
    }
    if let Some(composite) = entity.composite_identifier() {
        for component in composite.components() {
            imports.add_type(&component.ty);
            scalar_fields.push_str(&members::field(component.ty.simple_name(), &component.name));
            body.push_str(&members::accessors(component.ty.simple_name(), &component.name, false));
        }
    }

    // Scalar properties
    for property in &entity.properties {
        imports.add_type(&property.ty);
        let ty = property.ty.simple_name();
        scalar_fields.push_str(&members::field(ty, &property.name));
        if let Backing::Column(column) = &property.backing {
            constants.push_str(&members::property_constant(column, &property.name));
        }
        body.push_str(&members::accessors(ty, &property.name, property.ty.is_boolean()));
    }

    // Associations
    for association in &entity.many_to_ones {
        imports.add_type(&association.target);
        let ty = association.target.simple_name();
        association_fields.push_str(&members::field(ty, &association.name));
        body.push_str(&members::accessors(ty, &association.name, false));
    }
    for collection in &entity.collections {
        imports.add_type(&collection.element);
        imports.add("java.util.Set");
        imports.add("java.util.HashSet");
        let element = collection.element.simple_name();
        association_fields.push_str(&members::collection_field(element, &collection.name));
        body.push_str(&members::collection_accessors(element, &collection.name));
    }

    // Supertype and self
    if let Some(parent) = view.parent {
        imports.add_type(parent);
    }
    if let Some(id) = view.identifier {
        imports.add_type(&id.ty);
    }
    if view.identifier.is_some() || entity.composite_identifier().is_some() {
        imports.add(view.qualified(ArtifactKind::ConcreteClass));
    }

    let extends = view
        .parent
        .map(|parent| format!(" extends {}", parent.simple_name()))
        .unwrap_or_default();

    let mut sections = vec![String::from("\tprivate static final long serialVersionUID = 1L;\n")];
    for section in [scalar_fields, association_fields, constants] {
        if !section.is_empty() {
            sections.push(section);
        }
    }
    sections.push(constructors(class_name, view.identifier));

    let mut out = package_line(&ArtifactKind::BaseClass.package(view.package));
    out.push_str(&imports.render());
    out.push('\n');
    out.push_str(GENERATED_MARKER);
    out.push_str(&format!(
        "public abstract class Base{}{} implements Serializable {{\n",
        class_name, extends
    ));
    out.push_str(&sections.join("\n"));
    out.push('\n');
    out.push_str("\tprotected void initialize() {}\n");
    out.push_str(&body);

    if let Some(id) = view.identifier {
        out.push_str(&simple_identity(class_name, id, view));
    } else if let Some(composite) = entity.composite_identifier() {
        out.push_str(&composite_identity(class_name, composite));
    }
    out.push_str(&debug_string(class_name, view));
    out.push_str("}\n");

    out
}

/// No-arg constructor, plus an identifier constructor when one is known.
fn constructors(class_name: &str, identifier: Option<&ResolvedIdentifier>) -> String {
    let mut out = format!("\tpublic Base{}() {{\n\t\tinitialize();\n\t}}\n", class_name);

    if let Some(id) = identifier {
        let param = members::parameter_name(&id.name);
        out.push_str(&format!(
            "\n\tpublic Base{}({} {}) {{\n\t\tset{}({});\n\t\tinitialize();\n\t}}\n",
            class_name,
            id.ty.simple_name(),
            param,
            id.name,
            param
        ));
    }

    out
}

/// Equality, hashing, and `toString` over a single identifier.
///
/// `toString` shows the `Name` property when the entity or an ancestor
/// has one, else `Label`, else the identifier alone.
fn simple_identity(class_name: &str, id: &ResolvedIdentifier, view: &EntityView<'_>) -> String {
    let get = format!("get{}()", id.name);
    let mut out = String::new();

    out.push_str("\n\tpublic boolean equals(Object o) {\n");
    out.push_str(&format!(
        "\t\tif (o == null || !(o instanceof {})) return false;\n",
        class_name
    ));
    out.push_str(&format!(
        "\t\tif ({} == null || (({})o).{} == null) return false;\n",
        get, class_name, get
    ));
    out.push_str(&format!(
        "\t\treturn {}.equals((({})o).{});\n",
        get, class_name, get
    ));
    out.push_str("\t}\n");

    out.push_str("\n\tpublic int hashCode() {\n");
    out.push_str(&format!("\t\tif ({} == null) return super.hashCode();\n", get));
    out.push_str(&format!("\t\treturn {}.hashCode();\n", get));
    out.push_str("\t}\n");

    let label = ["Name", "Label"]
        .into_iter()
        .find(|p| view.properties.contains(*p));
    out.push_str("\n\tpublic String toString() {\n");
    match label {
        Some(label) => out.push_str(&format!(
            "\t\treturn \"{}[\"+{}+\" \"+get{}()+\"]\";\n",
            class_name, get, label
        )),
        None => out.push_str(&format!(
            "\t\treturn \"{}[\"+{}+\"]\";\n",
            class_name, get
        ))
    }
    out.push_str("\t}\n");

    out
}

/// Component-wise equality, XOR hashing, and `toString` over a composite
/// key.
///
/// Two instances are equal only when every component is non-null on both
/// sides and equal; the hash falls back to object identity while any
/// component is unset.
fn composite_identity(class_name: &str, composite: &CompositeIdentifier) -> String {
    let other = members::parameter_name(class_name);
    let getters: Vec<String> = composite
        .components()
        .iter()
        .map(|c| format!("get{}()", c.name))
        .collect();
    let mut out = String::new();

    out.push_str("\n\tpublic boolean equals(Object o) {\n");
    out.push_str(&format!(
        "\t\tif (o == null || !(o instanceof {})) return false;\n",
        class_name
    ));
    out.push_str(&format!("\t\t{} {} = ({})o;\n", class_name, other, class_name));
    for get in &getters {
        out.push_str(&format!(
            "\t\tif ({} == null || {}.{} == null || !{}.equals({}.{})) return false;\n",
            get, other, get, get, other, get
        ));
    }
    out.push_str("\t\treturn true;\n");
    out.push_str("\t}\n");

    let any_null: Vec<String> = getters.iter().map(|g| format!("{} == null", g)).collect();
    let hashes: Vec<String> = getters.iter().map(|g| format!("{}.hashCode()", g)).collect();
    out.push_str("\n\tpublic int hashCode() {\n");
    out.push_str(&format!(
        "\t\tif ({}) return super.hashCode();\n",
        any_null.join(" || ")
    ));
    out.push_str(&format!("\t\treturn {};\n", hashes.join(" ^ ")));
    out.push_str("\t}\n");

    out.push_str("\n\tpublic String toString() {\n");
    out.push_str(&format!(
        "\t\treturn \"{}[\" + {} + \"]\";\n",
        class_name,
        getters.join(" + \", \" + ")
    ));
    out.push_str("\t}\n");

    out
}

/// `toDebugString()` listing every accumulated property in name order.
fn debug_string(class_name: &str, view: &EntityView<'_>) -> String {
    let mut out = String::from("\n\tpublic String toDebugString() {\n");
    out.push_str(&format!("\t\treturn \"{}[\" +\n", class_name));
    for property in view.properties {
        out.push_str(&format!(
            "\t\t\t\"\\n\\t{}: \" + get{}() +\n",
            property, property
        ));
    }
    out.push_str("\t\t\t\"]\";\n");
    out.push_str("\t}\n");
    out
}
