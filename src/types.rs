// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type normalization from mapping tokens to Java type names.
//!
//! Mapping documents name types loosely: `long`, `java.lang.Long`,
//! `java.sql.Timestamp`, `Room`, `org.unitime.XmlBlobType`. Generated code
//! needs one canonical, possibly-qualified name per type so that imports
//! and simple names can be derived consistently.
//!
//! # Normalization Table
//!
//! | Mapping token | Package | Java type |
//! |---------------|---------|-----------|
//! | `java.lang.String` | any | `String` |
//! | `long` | any | `Long` |
//! | `byte[]` | any | `byte[]` |
//! | `java.sql.Date` | any | `java.util.Date` |
//! | `java.sql.Timestamp` | any | `java.util.Date` |
//! | `org.x.XmlBlobType` | any | `org.dom4j.Document` |
//! | `org.x.XmlClobType` | any | `org.dom4j.Document` |
//! | `java.util.Locale` | any | `java.util.Locale` |
//! | `widget` | `a.b` | `a.b.Widget` |
//! | `org.y.Widget` | any | `org.y.Widget` |

use std::fmt;

/// Autoboxed scalar wrappers that stay unqualified.
const WRAPPERS: [&str; 6] = ["Boolean", "Long", "Integer", "String", "Float", "Double"];

/// Prefix stripped from `java.lang` types.
const JAVA_LANG: &str = "java.lang.";

/// Raw byte array marker.
const BYTE_ARRAY: &str = "byte[]";

/// General-purpose date/time type replacing the `java.sql` ones.
const DATE_TYPE: &str = "java.util.Date";

/// Structured document type replacing XML large-object markers.
const DOCUMENT_TYPE: &str = "org.dom4j.Document";

/// Large-object type suffixes mapped to [`DOCUMENT_TYPE`].
const DOCUMENT_SUFFIXES: [&str; 2] = [".XmlBlobType", ".XmlClobType"];

/// Canonical Java type name.
///
/// Holds the qualified name when the type lives in a package, or the bare
/// name for wrappers and arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JavaType {
    name: String
}

impl JavaType {
    /// Normalize a mapping type token.
    ///
    /// `package` is the default package of the mapping resource; an
    /// unqualified token that is not a wrapper is placed in it. When the
    /// resource declares no package the token stays unqualified.
    ///
    /// # Examples
    ///
    /// ```
    /// use hbm_modelgen::JavaType;
    ///
    /// assert_eq!(JavaType::normalize("java.lang.String", None).qualified(), "String");
    /// assert_eq!(JavaType::normalize("widget", Some("a.b")).qualified(), "a.b.Widget");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str, package: Option<&str>) -> Self {
        Self {
            name: normalize_name(raw, package)
        }
    }

    /// Wrap an already canonical name.
    #[must_use]
    pub fn from_canonical(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }

    /// Full canonical name (e.g. `java.util.Date`, `Long`).
    #[must_use]
    pub fn qualified(&self) -> &str {
        &self.name
    }

    /// Name as written in generated code once imported (e.g. `Date`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => &self.name
        }
    }

    /// Package part of a qualified name.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.name.rfind('.').map(|pos| &self.name[..pos])
    }

    /// Qualified name to import, if the type needs an import line.
    #[must_use]
    pub fn import(&self) -> Option<&str> {
        self.package().map(|_| self.name.as_str())
    }

    /// Check whether this is the `Boolean` wrapper.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.name == "Boolean"
    }

    /// Suffix of the typed `Query.setXxx` method used to bind a parameter
    /// of this type (e.g. `Long` binds with `setLong`).
    #[must_use]
    pub fn query_setter(&self) -> &str {
        self.simple_name()
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Normalize an optional type token, propagating absence.
///
/// Mapping elements without a type attribute yield `None`; this is not an
/// error at this level.
#[must_use]
pub fn normalize_type(raw: Option<&str>, package: Option<&str>) -> Option<JavaType> {
    raw.map(|raw| JavaType::normalize(raw, package))
}

fn normalize_name(raw: &str, package: Option<&str>) -> String {
    if let Some(stripped) = raw.strip_prefix(JAVA_LANG) {
        return stripped.to_string();
    }
    if raw == BYTE_ARRAY {
        return raw.to_string();
    }

    let name = if raw.contains('.') {
        raw.to_string()
    } else {
        capitalize(raw)
    };

    if WRAPPERS.contains(&name.as_str()) {
        return name;
    }
    if name == "java.sql.Date" || name.eq_ignore_ascii_case("java.sql.Timestamp") {
        return DATE_TYPE.to_string();
    }
    if DOCUMENT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return DOCUMENT_TYPE.to_string();
    }
    if name.starts_with("java.") || name.contains('.') {
        return name;
    }

    match package {
        Some(package) if !package.is_empty() => format!("{package}.{name}"),
        _ => name
    }
}

/// Upper-case the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Lower-case the first character.
pub(crate) fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new()
    }
}
