use indexmap::IndexMap;

use crate::generator::ast::{GroupVersionKind, Object, Property, RefRegistry};

pub(super) const META_PACKAGE: &str = "io.k8s.apimachinery.meta.v1";

pub(super) fn properties(entries: &[(&str, Property)]) -> IndexMap<String, Property> {
  entries
    .iter()
    .map(|(name, property)| ((*name).to_string(), property.clone()))
    .collect()
}

pub(super) fn object(name: &str, package: &str, entries: &[(&str, Property)]) -> Object {
  Object::builder()
    .name(name)
    .package(package)
    .properties(properties(entries))
    .build()
}

pub(super) fn kubernetes_object(
  name: &str,
  package: &str,
  gvk: GroupVersionKind,
  entries: &[(&str, Property)],
) -> Object {
  Object::builder()
    .name(name)
    .package(package)
    .properties(properties(entries))
    .group_version_kinds(vec![gvk])
    .is_kubernetes_object(true)
    .build()
}

pub(super) fn registry(objects: &[&Object]) -> RefRegistry {
  objects.iter().map(|object| (*object).clone()).collect()
}
