/// Number of trailing package segments that make up an import alias.
const ALIAS_SEGMENTS: usize = 3;

/// Import alias for `package`: its last three dot-separated segments, every segment after the
/// first title-cased, concatenated. `io.k8s.apimachinery.pkg.apis.meta.v1` becomes `apisMetaV1`.
///
/// Distinct packages sharing their last three segments collide; nothing here detects that.
/// Packages with fewer than three segments use all of them.
pub(crate) fn package_alias(package: &str) -> String {
  let segments: Vec<&str> = package.split('.').collect();
  let start = segments.len().saturating_sub(ALIAS_SEGMENTS);

  segments[start..]
    .iter()
    .enumerate()
    .map(|(i, segment)| if i == 0 { (*segment).to_string() } else { title_case(segment) })
    .collect()
}

/// Upper-cases the first letter of every word. Letters, digits and `_` continue a word; any
/// other ASCII character, or whitespace, starts a new one.
pub(crate) fn title_case(input: &str) -> String {
  let mut result = String::with_capacity(input.len());
  let mut prev = ' ';
  for c in input.chars() {
    if is_word_separator(prev) {
      result.extend(c.to_uppercase());
    } else {
      result.push(c);
    }
    prev = c;
  }
  result
}

fn is_word_separator(c: char) -> bool {
  if c.is_ascii() {
    return !(c.is_ascii_alphanumeric() || c == '_');
  }
  if c.is_alphanumeric() {
    return false;
  }
  c.is_whitespace()
}
