use std::iter;

use itertools::Itertools;

use super::{
  coercion::render_constructor_line,
  fields::{render_class_field, render_interface_member},
  indent, string_literal,
};
use crate::generator::ast::{Documentation, GroupVersionKind, Object, RefRegistry};

/// Properties whose values come from the type itself once a GVK is known.
const IDENTITY_FIELDS: [&str; 2] = ["apiVersion", "kind"];

/// Required properties the `named` factory can still satisfy from a name alone.
const NAMED_FACTORY_FIELDS: [&str; 3] = ["metadata", "apiVersion", "kind"];

/// Renders `object` as a class, followed by its type guard and companion namespace when it has
/// them. Nested types are rendered recursively inside the namespace.
pub(crate) fn render_object(registry: &RefRegistry, object: &Object) -> String {
  let package = object.package.as_str();
  let mut fields = Vec::with_capacity(object.properties.len());
  let mut constructor_lines = Vec::with_capacity(object.properties.len());

  for property in object.named_properties() {
    fields.push(render_class_field(package, property));
    let override_value = identity_override(object, property.name);
    constructor_lines.push(indent(&render_constructor_line(
      registry,
      package,
      property,
      override_value.as_deref(),
    )));
  }

  let constructor = if object.has_required_fields() {
    render_constructor(object, &constructor_lines)
  } else {
    String::new()
  };
  let implements = if object.is_kubernetes_object {
    " implements KubernetesObject"
  } else {
    ""
  };

  format!(
    "{docs}export class {name}{implements} {{\n{fields}{constructor}\n}}{guard}{namespace}",
    docs = Documentation::from_raw(&object.description),
    name = object.name,
    fields = indent(&fields.join("\n\n")),
    guard = render_type_guard(object),
    namespace = render_namespace(registry, object),
  )
}

fn identity_override(object: &Object, property_name: &str) -> Option<String> {
  if object.group_version_kinds.is_empty() || !IDENTITY_FIELDS.contains(&property_name) {
    return None;
  }
  Some(format!("{}.{property_name}", object.name))
}

fn render_constructor(object: &Object, lines: &[String]) -> String {
  let optional = if object.has_required_fields() { "" } else { "?" };
  indent(&format!(
    "\n\nconstructor(desc{optional}: {}) {{{}\n}}",
    descriptor_type(object),
    lines.concat()
  ))
}

/// Qualified type of the constructor's descriptor argument.
fn descriptor_type(object: &Object) -> String {
  let qualified = object.namespace.iter().chain(iter::once(&object.name)).join(".");
  if object.is_kubernetes_object {
    format!("{qualified}.Interface")
  } else {
    qualified
  }
}

fn render_type_guard(object: &Object) -> String {
  if object.group_version_kind().is_none() {
    return String::new();
  }
  let name = &object.name;
  format!(
    "\n\nexport function is{name}(o: any): o is {name} {{\n  return o && o.apiVersion === {name}.apiVersion && o.kind === {name}.kind;\n}}"
  )
}

fn render_namespace(registry: &RefRegistry, object: &Object) -> String {
  if object.nested_types.is_empty() && !object.is_kubernetes_object && object.group_version_kinds.is_empty() {
    return String::new();
  }

  let mut classes = vec![];
  if object.group_version_kind().is_some() {
    classes.push(indent(&render_interface(object)));
  }
  classes.extend(
    object
      .nested_types
      .iter()
      .sorted_by(|a, b| a.name.cmp(&b.name))
      .map(|nested| indent(&render_object(registry, nested))),
  );

  let constants = object
    .group_version_kind()
    .map(|gvk| indent(&render_constants(gvk)))
    .unwrap_or_default();
  let named = if object.is_kubernetes_object && only_metadata_required(object) {
    indent(&render_named_factory(&object.name))
  } else {
    String::new()
  };

  format!(
    "\n\nexport namespace {} {{\n{constants}{named}{}\n}}",
    object.name,
    classes.join("\n")
  )
}

/// Structural interface mirroring the class, minus the fields fixed by the GVK.
fn render_interface(object: &Object) -> String {
  let has_gvk = object.group_version_kind().is_some();
  let members = object
    .named_properties()
    .filter(|property| !(has_gvk && IDENTITY_FIELDS.contains(&property.name)))
    .map(|property| render_interface_member(&object.package, property))
    .join("\n\n");

  format!(
    "{}export interface Interface {{\n{}\n}}",
    Documentation::from_raw(&object.description),
    indent(&members)
  )
}

fn render_constants(gvk: &GroupVersionKind) -> String {
  format!(
    "export const apiVersion = {};\nexport const group = {};\nexport const version = {};\nexport const kind = {};\n\n",
    string_literal(&gvk.api_version()),
    string_literal(&gvk.group),
    string_literal(&gvk.version),
    string_literal(&gvk.kind),
  )
}

fn only_metadata_required(object: &Object) -> bool {
  object
    .named_properties()
    .all(|property| !property.required() || NAMED_FACTORY_FIELDS.contains(&property.name))
}

fn render_named_factory(name: &str) -> String {
  format!(
    "// named constructs a {name} with metadata.name set to name.\nexport function named(name: string): {name} {{\n  return new {name}({{metadata: {{name}}}});\n}}\n"
  )
}

