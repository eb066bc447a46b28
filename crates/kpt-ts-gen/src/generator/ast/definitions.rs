use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use super::types::{Ref, Type};

/// Group/Version/Kind identity of a resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, bon::Builder)]
pub struct GroupVersionKind {
  #[serde(default)]
  #[builder(default, into)]
  pub group: String,
  #[builder(into)]
  pub version: String,
  #[builder(into)]
  pub kind: String,
}

impl GroupVersionKind {
  /// `group/version`, or the bare version for the legacy core group.
  pub fn api_version(&self) -> String {
    if self.group.is_empty() {
      self.version.clone()
    } else {
      format!("{}/{}", self.group, self.version)
    }
  }
}

#[cfg(test)]
impl GroupVersionKind {
  pub fn new(group: impl Into<String>, version: impl Into<String>, kind: impl Into<String>) -> Self {
    Self {
      group: group.into(),
      version: version.into(),
      kind: kind.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, bon::Builder)]
pub struct Property {
  #[serde(rename = "type", default)]
  #[builder(default)]
  pub ty: Type,
  #[serde(default)]
  #[builder(default)]
  pub required: bool,
  #[serde(default)]
  #[builder(default, into)]
  pub description: String,
}

#[cfg(test)]
impl Property {
  pub fn required(ty: Type) -> Self {
    Self {
      ty,
      required: true,
      description: String::new(),
    }
  }

  pub fn optional(ty: Type) -> Self {
    Self {
      ty,
      required: false,
      description: String::new(),
    }
  }
}

/// Borrowed view pairing a property with the key it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedProperty<'a> {
  pub name: &'a str,
  pub property: &'a Property,
}

impl<'a> NamedProperty<'a> {
  pub fn ty(&self) -> &'a Type {
    &self.property.ty
  }

  pub fn required(&self) -> bool {
    self.property.required
  }

  pub fn description(&self) -> &'a str {
    &self.property.description
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct Object {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub package: String,
  /// Enclosing names for nested types, outermost first.
  #[serde(default)]
  #[builder(default)]
  pub namespace: Vec<String>,
  #[serde(default)]
  #[builder(default, into)]
  pub description: String,
  #[serde(default)]
  #[builder(default)]
  pub properties: IndexMap<String, Property>,
  #[serde(default)]
  #[builder(default)]
  pub nested_types: Vec<Object>,
  #[serde(default)]
  #[builder(default)]
  pub group_version_kinds: Vec<GroupVersionKind>,
  #[serde(default)]
  #[builder(default)]
  pub is_kubernetes_object: bool,
}

impl Object {
  /// Properties in declaration order.
  pub fn named_properties(&self) -> impl Iterator<Item = NamedProperty<'_>> {
    self
      .properties
      .iter()
      .map(|(name, property)| NamedProperty { name, property })
  }

  /// The primary kind; additional GVKs are carried but never rendered.
  pub fn group_version_kind(&self) -> Option<&GroupVersionKind> {
    self.group_version_kinds.first()
  }

  pub fn has_required_fields(&self) -> bool {
    self.properties.values().any(|p| p.required)
  }

  pub fn to_ref(&self) -> Ref {
    Ref::new(&self.package, &self.name)
  }

  fn collect_imports<'a>(&'a self, out: &mut Vec<&'a Ref>) {
    for property in self.properties.values() {
      property.ty.collect_refs(out);
    }
    for nested in &self.nested_types {
      nested.collect_imports(out);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, bon::Builder)]
pub struct Alias {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub package: String,
  #[serde(default)]
  #[builder(default, into)]
  pub description: String,
  #[serde(rename = "type")]
  pub ty: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionMeta<'a> {
  pub package: &'a str,
  pub name: &'a str,
}

impl DefinitionMeta<'_> {
  pub fn to_ref(self) -> Ref {
    Ref::new(self.package, self.name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase")]
pub enum Definition {
  Object(Object),
  Alias(Alias),
}

impl Definition {
  pub fn meta(&self) -> DefinitionMeta<'_> {
    match self {
      Definition::Object(o) => DefinitionMeta {
        package: &o.package,
        name: &o.name,
      },
      Definition::Alias(a) => DefinitionMeta {
        package: &a.package,
        name: &a.name,
      },
    }
  }

  pub fn to_ref(&self) -> Ref {
    self.meta().to_ref()
  }

  /// Refs this definition depends on, including those of nested types. May contain duplicates
  /// and refs into the definition's own package.
  pub fn imports(&self) -> Vec<&Ref> {
    let mut refs = vec![];
    match self {
      Definition::Object(o) => o.collect_imports(&mut refs),
      Definition::Alias(a) => a.ty.collect_refs(&mut refs),
    }
    refs
  }

  /// `object` or `alias`, matching the document's variant keys.
  pub fn kind_label(&self) -> &'static str {
    self.into()
  }
}

impl From<Object> for Definition {
  fn from(object: Object) -> Self {
    Definition::Object(object)
  }
}

impl From<Alias> for Definition {
  fn from(alias: Alias) -> Self {
    Definition::Alias(alias)
  }
}

/// Serialized form of a batch of definitions, as handed over by the schema parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefinitionsDocument {
  #[serde(default)]
  pub definitions: Vec<Definition>,
}
