use itertools::Itertools;

use super::ast::{Definition, RefRegistry};

pub mod coercion;
pub mod fields;
pub mod imports;
pub mod objects;
pub mod type_aliases;
pub mod types;

#[cfg(test)]
mod tests;

/// Text emission for one target language.
pub trait Language {
  /// Output file that `definition` belongs to.
  fn file_name(&self, definition: &Definition) -> String;

  /// Import block for a batch of same-package definitions.
  fn render_header(&self, definitions: &[&Definition]) -> String;

  fn render_definition(&self, definition: &Definition) -> String;

  /// Header and definitions joined by blank lines, newline-terminated.
  fn render_file(&self, definitions: &[&Definition]) -> String {
    let header = self.render_header(definitions);
    let mut code = Some(header)
      .filter(|header| !header.is_empty())
      .into_iter()
      .chain(definitions.iter().map(|definition| self.render_definition(definition)))
      .join("\n\n");
    code.push('\n');
    code
  }
}

/// TypeScript classes for the kpt functions SDK.
#[derive(Debug, Clone, Copy)]
pub struct TypeScript<'a> {
  registry: &'a RefRegistry,
}

impl<'a> TypeScript<'a> {
  pub fn new(registry: &'a RefRegistry) -> Self {
    Self { registry }
  }
}

impl Language for TypeScript<'_> {
  fn file_name(&self, definition: &Definition) -> String {
    format!("{}.ts", definition.meta().package)
  }

  fn render_header(&self, definitions: &[&Definition]) -> String {
    imports::render_header(self.registry, definitions)
  }

  fn render_definition(&self, definition: &Definition) -> String {
    match definition {
      Definition::Object(object) => objects::render_object(self.registry, object),
      Definition::Alias(alias) => type_aliases::render_type_alias(alias),
    }
  }
}

/// Prefixes two spaces to every non-empty line.
pub(crate) fn indent(s: &str) -> String {
  s.split('\n')
    .map(|line| if line.is_empty() { String::new() } else { format!("  {line}") })
    .join("\n")
}

/// Double-quoted literal with Go `%q` escapes, byte-compatible with the kpt SDK's own generator.
///
/// ASCII controls other than the named escapes become `\xNN`. Non-ASCII control and whitespace
/// characters become `\uNNNN`, or `\UNNNNNNNN` above the BMP. Everything else is written raw.
pub(crate) fn string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\u{7}' => out.push_str("\\a"),
      '\u{8}' => out.push_str("\\b"),
      '\u{c}' => out.push_str("\\f"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{b}' => out.push_str("\\v"),
      c if c.is_ascii_control() => {
        out.push_str(&format!("\\x{:02x}", u32::from(c)));
      }
      c if !c.is_ascii() && (c.is_control() || c.is_whitespace()) => {
        let code = u32::from(c);
        if code < 0x1_0000 {
          out.push_str(&format!("\\u{code:04x}"));
        } else {
          out.push_str(&format!("\\U{code:08x}"));
        }
      }
      c => out.push(c),
    }
  }
  out.push('"');
  out
}
