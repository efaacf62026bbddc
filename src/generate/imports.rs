// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Import block of a generated source file.
//!
//! Imports are kept sorted and rendered in groups by top-level package,
//! with one blank line between groups:
//!
//! ```text
//! import java.io.Serializable;
//! import java.util.Set;
//!
//! import org.x.Building;
//! ```

use std::collections::BTreeSet;

use crate::types::JavaType;

/// Sorted set of qualified names to import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ImportSet {
    names: BTreeSet<String>
}

impl ImportSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Import a type if it lives in a package.
    pub(crate) fn add_type(&mut self, ty: &JavaType) {
        if let Some(import) = ty.import() {
            self.names.insert(import.to_string());
        }
    }

    /// Import a qualified name.
    pub(crate) fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.contains('.') {
            self.names.insert(name);
        }
    }

    /// Render `import` lines, grouped by top-level package.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        let mut last: Option<&str> = None;

        for name in &self.names {
            let top = name.split('.').next().unwrap_or(name);
            if last.is_some_and(|last| last != top) {
                out.push('\n');
            }
            out.push_str(&format!("import {};\n", name));
            last = Some(top);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_top_level_package() {
        let mut imports = ImportSet::new();
        imports.add("org.x.Room");
        imports.add("java.util.Set");
        imports.add("java.io.Serializable");
        imports.add("org.x.Building");

        assert_eq!(
            imports.render(),
            "import java.io.Serializable;\n\
             import java.util.Set;\n\
             \n\
             import org.x.Building;\n\
             import org.x.Room;\n"
        );
    }

    #[test]
    fn unqualified_types_are_not_imported() {
        let mut imports = ImportSet::new();
        imports.add_type(&JavaType::from_canonical("Long"));
        imports.add_type(&JavaType::from_canonical("byte[]"));
        imports.add("Serializable");
        assert_eq!(imports.render(), "");
    }

    #[test]
    fn duplicates_collapse() {
        let mut imports = ImportSet::new();
        imports.add_type(&JavaType::from_canonical("java.util.Date"));
        imports.add("java.util.Date");
        assert_eq!(imports.render(), "import java.util.Date;\n");
    }
}
