use super::types::render_type;
use crate::generator::ast::{Documentation, NamedProperty};

/// Field declaration inside a generated class.
pub(crate) fn render_class_field(current_package: &str, property: NamedProperty<'_>) -> String {
  render_member(current_package, property, "public ")
}

/// Member declaration inside a generated interface.
pub(crate) fn render_interface_member(current_package: &str, property: NamedProperty<'_>) -> String {
  render_member(current_package, property, "")
}

fn render_member(current_package: &str, property: NamedProperty<'_>, modifier: &str) -> String {
  let docs = Documentation::from_raw(property.description());
  let optional = if property.required() { "" } else { "?" };
  format!(
    "{docs}{modifier}{}{optional}: {};",
    property.name,
    render_type(current_package, property.ty())
  )
}
