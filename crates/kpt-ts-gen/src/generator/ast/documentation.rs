/// Description text rendered as one `//` comment per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  /// Splits on `\n` only. A trailing newline yields a trailing empty comment line.
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    if input.is_empty() {
      return Self::default();
    }
    Self {
      lines: input.split('\n').map(String::from).collect(),
    }
  }
}

impl std::fmt::Display for Documentation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for line in &self.lines {
      writeln!(f, "// {line}")?;
    }
    Ok(())
  }
}
