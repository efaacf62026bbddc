// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field, constant, and accessor fragments of a base class.
//!
//! Every member follows the same naming scheme:
//!
//! | Fragment | Form for `uniqueId : Long` |
//! |----------|----------------------------|
//! | field | `private Long iUniqueId;` |
//! | constant | `public static String PROP_UID = "uniqueId";` |
//! | getter | `public Long getUniqueId() { return iUniqueId; }` |
//! | setter | `public void setUniqueId(Long uniqueId) { iUniqueId = uniqueId; }` |
//!
//! `Boolean` properties also get an `isName()` alias. Set-valued members
//! get an `addTo<name>` method that allocates the set on first use.

use crate::types::decapitalize;

/// Reserved words that cannot be used as parameter names.
const JAVA_KEYWORDS: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "null", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while"
];

/// Parameter name for an accessor-form member or type name.
///
/// The first letter is lower-cased; characters that cannot appear in an
/// identifier are dropped, and a reserved word gets a `Value` suffix
/// (`default` becomes `defaultValue`).
pub(crate) fn parameter_name(name: &str) -> String {
    let ident: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    let param = decapitalize(&ident);
    if JAVA_KEYWORDS.contains(&param.as_str()) {
        format!("{}Value", param)
    } else {
        param
    }
}

/// `private <type> i<Name>;`
pub(crate) fn field(ty: &str, name: &str) -> String {
    format!("\tprivate {} i{};\n", ty, name)
}

/// `private Set<<type>> i<Name>;`
pub(crate) fn collection_field(element: &str, name: &str) -> String {
    format!("\tprivate Set<{}> i{};\n", element, name)
}

/// `public static String PROP_<COLUMN> = "<name>";`
pub(crate) fn property_constant(column: &str, name: &str) -> String {
    format!(
        "\tpublic static String PROP_{} = \"{}\";\n",
        column.to_uppercase(),
        decapitalize(name)
    )
}

/// Getter and setter, preceded by a blank line.
///
/// With `boolean_alias` an `is<Name>()` getter is emitted first.
pub(crate) fn accessors(ty: &str, name: &str, boolean_alias: bool) -> String {
    let param = parameter_name(name);
    let mut out = String::from("\n");

    if boolean_alias {
        out.push_str(&format!("\tpublic {} is{}() {{ return i{}; }}\n", ty, name, name));
    }
    out.push_str(&format!("\tpublic {} get{}() {{ return i{}; }}\n", ty, name, name));
    out.push_str(&format!(
        "\tpublic void set{}({} {}) {{ i{} = {}; }}\n",
        name, ty, param, name, param
    ));

    out
}

/// Getter, setter, and `addTo` method of a set-valued member, preceded by
/// a blank line.
pub(crate) fn collection_accessors(element: &str, name: &str) -> String {
    let set = format!("Set<{}>", element);
    let item = parameter_name(element);
    let mut out = accessors(&set, name, false);

    out.push_str(&format!(
        "\tpublic void addTo{}({} {}) {{\n",
        decapitalize(name),
        element,
        item
    ));
    out.push_str(&format!(
        "\t\tif (i{} == null) i{} = new HashSet<{}>();\n",
        name, name, element
    ));
    out.push_str(&format!("\t\ti{}.add({});\n", name, item));
    out.push_str("\t}\n");

    out
}
