use std::collections::BTreeSet;

use crate::generator::{
  ast::{Definition, RefRegistry},
  naming::identifiers::package_alias,
};

pub(crate) const KUBERNETES_OBJECT_IMPORT: &str =
  "import { KubernetesObject } from '@googlecontainertools/kpt-functions';";

/// Import block for a file holding `definitions`, which all share the first definition's package.
///
/// Returns an empty string for an empty batch or one without external references.
pub(crate) fn render_header(registry: &RefRegistry, definitions: &[&Definition]) -> String {
  let Some(first) = definitions.first() else {
    return String::new();
  };
  let current_package = first.meta().package;

  let mut lines = vec![];
  if definitions
    .iter()
    .any(|definition| registry.is_kubernetes_object(&definition.to_ref()))
  {
    lines.push(KUBERNETES_OBJECT_IMPORT.to_string());
  }
  lines.extend(
    referenced_packages(current_package, definitions)
      .into_iter()
      .map(|package| format!("import * as {} from './{package}';", package_alias(package))),
  );

  lines.join("\n")
}

/// Distinct packages referenced by `definitions`, other than `current_package`, sorted.
pub(crate) fn referenced_packages<'a>(current_package: &str, definitions: &[&'a Definition]) -> BTreeSet<&'a str> {
  definitions
    .iter()
    .copied()
    .flat_map(Definition::imports)
    .map(|r| r.package.as_str())
    .filter(|package| *package != current_package)
    .collect()
}
