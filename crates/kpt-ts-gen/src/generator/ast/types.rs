use serde::{Deserialize, Serialize};

/// Scalar kinds a schema property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
  Boolean,
  Integer,
  Number,
  String,
}

/// Named pointer to another definition, scoped by package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ref {
  pub package: String,
  pub name: String,
}

impl Ref {
  pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      package: package.into(),
      name: name.into(),
    }
  }
}

impl std::fmt::Display for Ref {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}.{}", self.package, self.name)
  }
}

/// Schema type of a property or alias target.
///
/// Recursion only happens through `Ref`, which is resolved by name and never inlined,
/// so the boxed variants always terminate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Type {
  #[default]
  Empty,
  Primitive(PrimitiveKind),
  Ref(Ref),
  Array { items: Box<Type> },
  Map { values: Box<Type> },
}

impl Type {
  pub fn as_reference(&self) -> Option<&Ref> {
    match self {
      Type::Ref(r) => Some(r),
      _ => None,
    }
  }

  /// Every `Ref` reachable from this type, outermost first.
  pub fn collect_refs<'a>(&'a self, out: &mut Vec<&'a Ref>) {
    match self {
      Type::Empty | Type::Primitive(_) => {}
      Type::Ref(r) => out.push(r),
      Type::Array { items } => items.collect_refs(out),
      Type::Map { values } => values.collect_refs(out),
    }
  }
}

#[cfg(test)]
impl Type {
  pub fn reference(package: impl Into<String>, name: impl Into<String>) -> Self {
    Type::Ref(Ref::new(package, name))
  }

  pub fn array(items: Type) -> Self {
    Type::Array { items: Box::new(items) }
  }

  pub fn map(values: Type) -> Self {
    Type::Map {
      values: Box::new(values),
    }
  }
}

impl From<PrimitiveKind> for Type {
  fn from(kind: PrimitiveKind) -> Self {
    Type::Primitive(kind)
  }
}

impl From<Ref> for Type {
  fn from(r: Ref) -> Self {
    Type::Ref(r)
  }
}
