// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `<Class>DAO`: the data-access stub, created once and then owned by hand.
//!
//! Never abstract, even for abstract entities: `Base<Class>DAO.getInstance()`
//! instantiates it.

use super::{EntityView, package_line};
use crate::emit::ArtifactKind;

/// Render the data-access stub.
pub(crate) fn render(view: &EntityView<'_>) -> String {
    let class_name = view.class_name();

    let mut out = package_line(&ArtifactKind::Dao.package(view.package));
    out.push_str(&format!(
        "import {};\n\n",
        view.qualified(ArtifactKind::DaoBase)
    ));
    out.push_str(&format!(
        "public class {}DAO extends Base{}DAO {{\n\n",
        class_name, class_name
    ));
    out.push_str(&format!("\tpublic {}DAO() {{}}\n\n", class_name));
    out.push_str("}\n");
    out
}
