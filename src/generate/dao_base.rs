// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Base<Class>DAO`: the always-regenerated data-access base.
//!
//! Extends the project's `_RootDAO<Entity, Id>` and adds one finder per
//! column-backed many-to-one. The finder binds the target's identifier,
//! whose type comes from the first pass since the target may be mapped in
//! a later resource:
//!
//! ```text
//! <many-to-one name="building" class="Building" column="building_id"/>
//!   → findByBuilding(org.hibernate.Session hibSession, Long buildingId)
//!     from Room x where x.building.uniqueId = :buildingId
//! ```

use super::{EntityView, GENERATED_MARKER, imports::ImportSet, members, package_line};
use crate::{
    emit::{ArtifactKind, qualify},
    mapping::ManyToOneDef,
    types::decapitalize
};

/// Root data-access class every DAO base extends.
const ROOT_DAO: &str = "_RootDAO";

/// Render the data-access base class.
pub(crate) fn render(view: &EntityView<'_>) -> String {
    let class_name = view.class_name();
    let finders: Vec<&ManyToOneDef> = view
        .entity
        .many_to_ones
        .iter()
        .filter(|m| m.backing.is_column())
        .collect();

    let mut imports = ImportSet::new();
    imports.add(view.qualified(ArtifactKind::ConcreteClass));
    imports.add(view.qualified(ArtifactKind::Dao));
    imports.add(qualify(&ArtifactKind::Dao.package(view.package), ROOT_DAO));

    let id_type = match view.identifier {
        Some(id) => {
            imports.add_type(&id.ty);
            id.ty.simple_name().to_string()
        }
        None => {
            imports.add("java.io.Serializable");
            String::from("Serializable")
        }
    };
    if !finders.is_empty() {
        imports.add("java.util.List");
    }

    let mut body = String::new();
    for finder in &finders {
        body.push_str(&render_finder(view, finder, &mut imports));
    }

    let mut out = package_line(&ArtifactKind::DaoBase.package(view.package));
    out.push_str(&imports.render());
    out.push('\n');
    out.push_str(GENERATED_MARKER);
    out.push_str(&format!(
        "public abstract class Base{}DAO extends {}<{},{}> {{\n\n",
        class_name, ROOT_DAO, class_name, id_type
    ));
    out.push_str(&format!("\tprivate static {}DAO sInstance;\n\n", class_name));
    out.push_str(&format!(
        "\tpublic static {}DAO getInstance() {{\n\t\tif (sInstance == null) sInstance = new {}DAO();\n\t\treturn sInstance;\n\t}}\n\n",
        class_name, class_name
    ));
    out.push_str(&format!(
        "\tpublic Class<{}> getReferenceClass() {{\n\t\treturn {}.class;\n\t}}\n",
        class_name, class_name
    ));
    out.push_str(&body);
    out.push_str("}\n");

    out
}

/// `findBy<Name>` for one association.
fn render_finder(view: &EntityView<'_>, finder: &ManyToOneDef, imports: &mut ImportSet) -> String {
    let class_name = view.class_name();
    let target_id = view.model.finder_identifier(finder.target.simple_name());
    imports.add_type(&target_id.ty);

    let property = decapitalize(&finder.name);
    let param = format!("{}Id", members::parameter_name(&finder.name));
    let id_type = target_id.ty.simple_name();

    let mut out = String::from("\n\t@SuppressWarnings(\"unchecked\")\n");
    out.push_str(&format!(
        "\tpublic List<{}> findBy{}(org.hibernate.Session hibSession, {} {}) {{\n",
        class_name, finder.name, id_type, param
    ));
    out.push_str(&format!(
        "\t\treturn hibSession.createQuery(\"from {} x where x.{}.{} = :{}\").set{}(\"{}\", {}).list();\n",
        class_name,
        property,
        decapitalize(&target_id.name),
        param,
        target_id.ty.query_setter(),
        param,
        param
    ));
    out.push_str("\t}\n");
    out
}
