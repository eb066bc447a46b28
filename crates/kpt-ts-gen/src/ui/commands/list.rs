use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::ast::{Definition, DefinitionsDocument},
  ui::{Colors, colors::cell_color, term_width},
  utils::loader::DocumentLoader,
};

struct DefinitionRow {
  package: String,
  name: String,
  kind: &'static str,
  gvk: String,
}

fn definition_rows(document: &DefinitionsDocument) -> Vec<DefinitionRow> {
  let mut rows: Vec<DefinitionRow> = document
    .definitions
    .iter()
    .map(|definition| {
      let meta = definition.meta();
      let gvk = match definition {
        Definition::Object(object) => object
          .group_version_kind()
          .map(|gvk| format!("{}/{}", gvk.api_version(), gvk.kind))
          .unwrap_or_default(),
        Definition::Alias(_) => String::new(),
      };
      DefinitionRow {
        package: meta.package.to_string(),
        name: meta.name.to_string(),
        kind: definition.kind_label(),
        gvk,
      }
    })
    .collect();

  rows.sort_by(|a, b| a.package.cmp(&b.package).then_with(|| a.name.cmp(&b.name)));
  rows
}

pub async fn list_definitions(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = DocumentLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("PACKAGE").fg(cell_color(colors.label())));
  row.add_cell(Cell::new("NAME").fg(cell_color(colors.label())));
  row.add_cell(Cell::new("KIND").fg(cell_color(colors.label())));
  row.add_cell(Cell::new("GVK").fg(cell_color(colors.label())));
  table.set_header(row);

  for definition in definition_rows(&document) {
    let mut row = Row::new();
    row.add_cell(Cell::new(definition.package).fg(cell_color(colors.primary())));
    row.add_cell(
      Cell::new(definition.name)
        .fg(cell_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(definition.kind)
        .fg(cell_color(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(definition.gvk).fg(cell_color(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
