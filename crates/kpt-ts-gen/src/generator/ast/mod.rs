mod definitions;
mod documentation;
mod registry;
mod types;

pub use definitions::{
  Alias, Definition, DefinitionMeta, DefinitionsDocument, GroupVersionKind, NamedProperty, Object, Property,
};
pub use documentation::Documentation;
pub use registry::RefRegistry;
pub use types::{PrimitiveKind, Ref, Type};
