use crate::generator::{
  ast::{PrimitiveKind, Type},
  naming::identifiers::package_alias,
};

/// TypeScript type expression for `ty` as seen from a file for `current_package`.
pub(crate) fn render_type(current_package: &str, ty: &Type) -> String {
  match ty {
    Type::Empty => "object".to_string(),
    Type::Primitive(kind) => render_primitive(*kind).to_string(),
    Type::Ref(r) if r.package == current_package => r.name.clone(),
    Type::Ref(r) => format!("{}.{}", package_alias(&r.package), r.name),
    Type::Array { items } => format!("{}[]", render_type(current_package, items)),
    Type::Map { values } => format!("{{[key: string]: {}}}", render_type(current_package, values)),
  }
}

// TypeScript has a single numeric type; integer precision is dropped.
fn render_primitive(kind: PrimitiveKind) -> &'static str {
  match kind {
    PrimitiveKind::Boolean => "boolean",
    PrimitiveKind::Integer | PrimitiveKind::Number => "number",
    PrimitiveKind::String => "string",
  }
}
