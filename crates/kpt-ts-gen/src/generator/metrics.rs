use crate::generator::ast::{Definition, Object, RefRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub files_generated: usize,
  pub definitions_rendered: usize,
  pub objects_generated: usize,
  pub nested_types_generated: usize,
  pub kubernetes_objects_generated: usize,
  pub type_aliases_generated: usize,
  pub imports_generated: usize,
}

impl GenerationStats {
  pub fn record_file(&mut self, import_count: usize) {
    self.files_generated += 1;
    self.imports_generated += import_count;
  }

  pub fn record_definition(&mut self, definition: &Definition, registry: &RefRegistry) {
    self.definitions_rendered += 1;
    match definition {
      Definition::Object(object) => {
        self.objects_generated += 1;
        self.nested_types_generated += count_nested(object);
        if registry.is_kubernetes_object(&object.to_ref()) {
          self.kubernetes_objects_generated += 1;
        }
      }
      Definition::Alias(_) => self.type_aliases_generated += 1,
    }
  }
}

fn count_nested(object: &Object) -> usize {
  object
    .nested_types
    .iter()
    .map(|nested| 1 + count_nested(nested))
    .sum()
}
