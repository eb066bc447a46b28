//! Constructor-time coercion of untyped descriptor values into typed fields.
//!
//! Only refs to registered Kubernetes objects are constructed, either directly or as the
//! element type of an array. Arrays of arrays and map values are passed through untouched.

use crate::generator::{
  ast::{NamedProperty, RefRegistry, Type},
  naming::identifiers::package_alias,
};

/// Expression converting the raw value `source` into a value of type `ty`.
pub(crate) fn constructor_expr(registry: &RefRegistry, current_package: &str, ty: &Type, source: &str) -> String {
  match ty {
    Type::Empty | Type::Primitive(_) => source.to_string(),
    Type::Ref(r) if registry.is_kubernetes_object(r) => {
      if r.package == current_package {
        format!("new {}({source})", r.name)
      } else {
        format!("new {}.{}({source})", package_alias(&r.package), r.name)
      }
    }
    Type::Ref(_) => source.to_string(),
    Type::Array { items } if is_constructible_ref(registry, items) => {
      format!(
        "{source}.map((i) => {})",
        constructor_expr(registry, current_package, items, "i")
      )
    }
    Type::Array { .. } | Type::Map { .. } => source.to_string(),
  }
}

/// One `this.<name> = <value>;` assignment, preceded by a newline.
///
/// `override_value` replaces the coerced descriptor value entirely.
pub(crate) fn render_constructor_line(
  registry: &RefRegistry,
  current_package: &str,
  property: NamedProperty<'_>,
  override_value: Option<&str>,
) -> String {
  let name = property.name;
  let value = match override_value {
    Some(value) => value.to_string(),
    None => {
      let source = format!("desc.{name}");
      let value = constructor_expr(registry, current_package, property.ty(), &source);
      if !property.required() && is_constructible_array(registry, property.ty()) {
        format!("({source} !== undefined) ? {value} : undefined")
      } else {
        value
      }
    }
  };
  format!("\nthis.{name} = {value};")
}

fn is_constructible_ref(registry: &RefRegistry, ty: &Type) -> bool {
  ty.as_reference().is_some_and(|r| registry.is_kubernetes_object(r))
}

fn is_constructible_array(registry: &RefRegistry, ty: &Type) -> bool {
  matches!(ty, Type::Array { items } if is_constructible_ref(registry, items))
}
