//! Orchestration for the definitions to TypeScript pipeline.
//!
//! The orchestrator owns a loaded [`DefinitionsDocument`], builds the ref registry from it once,
//! and renders one output file per package.
//!
//! ## Usage
//!
//! ```ignore
//! let document: DefinitionsDocument = serde_json::from_str(&json)?;
//! let orchestrator = Orchestrator::new(document)?;
//! let output = orchestrator.generate();
//!
//! for file in &output.files {
//!   std::fs::write(out_dir.join(&file.name), &file.code)?;
//! }
//! ```

use std::collections::BTreeMap;

use crate::generator::{
  ast::{Definition, DefinitionsDocument, RefRegistry},
  codegen::{Language, TypeScript, imports::referenced_packages},
  errors::GeneratorError,
  metrics::GenerationStats,
};

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  /// File name relative to the output directory, e.g. `io.k8s.api.core.v1.ts`
  pub name: String,
  pub code: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  /// Files ordered by name
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: DefinitionsDocument,
  registry: RefRegistry,
}

impl Orchestrator {
  /// Builds the ref registry for `document`.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::DuplicateDefinition`] when two objects share a package and name.
  pub fn new(document: DefinitionsDocument) -> Result<Self, GeneratorError> {
    let registry = RefRegistry::from_definitions(&document.definitions)?;
    Ok(Self { document, registry })
  }

  pub fn definitions(&self) -> &[Definition] {
    &self.document.definitions
  }

  pub fn registry(&self) -> &RefRegistry {
    &self.registry
  }

  /// Renders every definition, grouped into one file per package.
  ///
  /// Files are ordered by name and definitions within a file by definition name, so the same
  /// document always produces byte-identical output.
  pub fn generate(&self) -> GeneratedOutput {
    let language = TypeScript::new(&self.registry);

    let mut batches: BTreeMap<String, Vec<&Definition>> = BTreeMap::new();
    for definition in &self.document.definitions {
      batches.entry(language.file_name(definition)).or_default().push(definition);
    }

    let mut stats = GenerationStats::default();
    let mut files = Vec::with_capacity(batches.len());
    for (name, mut batch) in batches {
      batch.sort_by(|a, b| a.meta().name.cmp(b.meta().name));

      let import_count = batch
        .first()
        .map_or(0, |first| referenced_packages(first.meta().package, &batch).len());
      stats.record_file(import_count);
      for definition in &batch {
        stats.record_definition(definition, &self.registry);
      }

      files.push(GeneratedFile {
        name,
        code: language.render_file(&batch),
      });
    }

    GeneratedOutput { files, stats }
  }
}
