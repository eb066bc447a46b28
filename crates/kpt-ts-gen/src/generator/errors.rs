use thiserror::Error;

/// Failures outside the renderer itself. Rendering is infallible once the model is built.
#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("invalid definitions document: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("duplicate definition '{name}' in package '{package}'")]
  DuplicateDefinition { package: String, name: String },
}
