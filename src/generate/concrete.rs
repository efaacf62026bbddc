// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `<Class>`: the concrete class stub, created once and then owned by hand.

use super::{EntityView, package_line};
use crate::emit::ArtifactKind;

/// Render the concrete class stub.
pub(crate) fn render(view: &EntityView<'_>) -> String {
    let class_name = view.class_name();
    let modifier = if view.entity.is_abstract { " abstract" } else { "" };

    let mut out = package_line(view.package);
    out.push_str(&format!(
        "import {};\n\n",
        view.qualified(ArtifactKind::BaseClass)
    ));
    out.push_str(&format!(
        "public{} class {} extends Base{} {{\n\n",
        modifier, class_name, class_name
    ));
    out.push_str(&format!("\tpublic {}() {{\n\t\tsuper();\n\t}}\n\n", class_name));
    out.push_str("}\n");
    out
}
