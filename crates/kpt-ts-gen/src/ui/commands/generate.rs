use std::path::{Component, Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    metrics::GenerationStats,
    orchestrator::{GeneratedFile, GeneratedOutput, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::loader::DocumentLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    Ok(Self {
      input,
      output,
      verbose,
      quiet,
    })
  }

  async fn load_orchestrator(&self) -> anyhow::Result<Orchestrator> {
    let document = DocumentLoader::open(&self.input).await?.parse()?;
    Ok(Orchestrator::new(document)?)
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output).await?;
    for file in files {
      let mut components = Path::new(&file.name).components();
      if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
        anyhow::bail!(
          "refusing to write '{}': package names must not contain path separators",
          file.name
        );
      }
      tokio::fs::write(self.output.join(&file.name), &file.code).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose {
      println!("            {}", message.with(self.colors.info()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading definitions from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, orchestrator: &Orchestrator) {
    self.info(&"Generating TypeScript classes...".with(self.colors.primary()).to_string());
    self.detail(&format!(
      "{} definitions loaded, {} objects registered",
      orchestrator.definitions().len(),
      orchestrator.registry().len()
    ));
    if orchestrator.registry().is_empty() {
      self.detail("no objects registered, constructors will not coerce any fields");
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Files generated:", stats.files_generated.to_string());
    self.stat("Definitions rendered:", stats.definitions_rendered.to_string());
    self.stat("", format!("{} classes", stats.objects_generated));
    if stats.nested_types_generated > 0 {
      self.stat("", format!("{} nested classes", stats.nested_types_generated));
    }
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    self.stat("Kubernetes objects:", stats.kubernetes_objects_generated.to_string());
    self.stat("Package imports:", stats.imports_generated.to_string());
  }

  fn log_writing(&self, output: &GeneratedOutput) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
    for file in &output.files {
      self.detail(&file.name);
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript classes".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let orchestrator = config.load_orchestrator().await?;

  logger.log_generating(&orchestrator);
  let output = orchestrator.generate();
  logger.print_statistics(&output.stats);

  logger.log_writing(&output);
  config.write_files(&output.files).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  fn command(input: PathBuf, output: PathBuf) -> GenerateCommand {
    GenerateCommand {
      input,
      output,
      verbose: false,
      quiet: true,
    }
  }

  #[test]
  fn test_from_command_rejects_verbose_and_quiet() {
    let mut cmd = command(PathBuf::from("in.json"), PathBuf::from("out"));
    cmd.verbose = true;

    let err = GenerateConfig::from_command(cmd).unwrap_err();
    assert!(err.to_string().contains("cannot be used together"));
  }

  #[test]
  fn test_from_command_keeps_paths() {
    let config = GenerateConfig::from_command(command(PathBuf::from("in.json"), PathBuf::from("out"))).unwrap();
    assert_eq!(config.input, PathBuf::from("in.json"));
    assert_eq!(config.output, PathBuf::from("out"));
    assert!(config.quiet);
  }

  #[tokio::test]
  async fn test_generate_code_writes_one_file_per_package() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("definitions.json");
    let output = dir.path().join("generated");
    tokio::fs::write(
      &input,
      r#"{
        "definitions": [
          { "alias": { "name": "Quantity", "package": "io.k8s.apimachinery.pkg.api.resource", "type": { "primitive": "string" } } },
          { "object": { "name": "Widget", "package": "com.example.widgets.v1", "properties": {
            "size": { "type": { "ref": { "package": "io.k8s.apimachinery.pkg.api.resource", "name": "Quantity" } }, "required": true }
          } } }
        ]
      }"#,
    )
    .await
    .unwrap();

    let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
    generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap();

    let quantity = tokio::fs::read_to_string(output.join("io.k8s.apimachinery.pkg.api.resource.ts"))
      .await
      .unwrap();
    assert_eq!(quantity, "export type Quantity = string;\n");

    let widget = tokio::fs::read_to_string(output.join("com.example.widgets.v1.ts")).await.unwrap();
    assert!(widget.starts_with(
      "import * as pkgApiResource from './io.k8s.apimachinery.pkg.api.resource';\n\nexport class Widget {\n  public size: pkgApiResource.Quantity;\n"
    ));
  }

  #[tokio::test]
  async fn test_write_files_rejects_names_outside_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out");
    let config = GenerateConfig::from_command(command(dir.path().join("in.json"), output.clone())).unwrap();

    for name in ["../escape.ts", "nested/file.ts", ".."] {
      let file = GeneratedFile {
        name: name.to_string(),
        code: String::new(),
      };
      let err = config.write_files(&[file]).await.unwrap_err();
      assert!(err.to_string().contains("must not contain path separators"), "{name}");
    }
    assert!(!dir.path().join("escape.ts").exists());
  }

  #[tokio::test]
  async fn test_write_files_accepts_dotted_package_names() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out");
    let config = GenerateConfig::from_command(command(dir.path().join("in.json"), output.clone())).unwrap();
    let file = GeneratedFile {
      name: "io.k8s.api.core.v1.ts".to_string(),
      code: "export type Name = string;\n".to_string(),
    };

    config.write_files(&[file]).await.unwrap();
    let written = tokio::fs::read_to_string(output.join("io.k8s.api.core.v1.ts")).await.unwrap();
    assert_eq!(written, "export type Name = string;\n");
  }

  #[tokio::test]
  async fn test_generate_code_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerateConfig::from_command(command(dir.path().join("missing.json"), dir.path().join("out"))).unwrap();

    assert!(generate_code(config, &Colors::new(false, Theme::Dark)).await.is_err());
  }
}
