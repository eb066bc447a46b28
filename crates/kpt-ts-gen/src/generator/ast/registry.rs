use std::collections::HashMap;

use super::{Definition, Object, Ref};
use crate::generator::errors::GeneratorError;

/// Lookup of every top-level object, keyed by its `Ref`.
#[derive(Debug, Clone, Default)]
pub struct RefRegistry {
  objects: HashMap<Ref, Object>,
}

impl RefRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers every object in `definitions`. Aliases are not constructible and are skipped.
  pub fn from_definitions<'a>(definitions: impl IntoIterator<Item = &'a Definition>) -> Result<Self, GeneratorError> {
    let mut registry = Self::new();
    for definition in definitions {
      let Definition::Object(object) = definition else {
        continue;
      };
      if registry.insert(object.clone()).is_some() {
        return Err(GeneratorError::DuplicateDefinition {
          package: object.package.clone(),
          name: object.name.clone(),
        });
      }
    }
    Ok(registry)
  }

  pub fn insert(&mut self, object: Object) -> Option<Object> {
    self.objects.insert(object.to_ref(), object)
  }

  pub fn get(&self, r: &Ref) -> Option<&Object> {
    self.objects.get(r)
  }

  /// Whether `r` names a registered object carrying the Kubernetes-object capability.
  pub fn is_kubernetes_object(&self, r: &Ref) -> bool {
    self.get(r).is_some_and(|object| object.is_kubernetes_object)
  }

  pub fn len(&self) -> usize {
    self.objects.len()
  }

  pub fn is_empty(&self) -> bool {
    self.objects.is_empty()
  }
}

impl FromIterator<Object> for RefRegistry {
  fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
    Self {
      objects: iter.into_iter().map(|object| (object.to_ref(), object)).collect(),
    }
  }
}
