use super::types::render_type;
use crate::generator::ast::{Alias, Documentation};

pub(crate) fn render_type_alias(alias: &Alias) -> String {
  format!(
    "{}export type {} = {};",
    Documentation::from_raw(&alias.description),
    alias.name,
    render_type(&alias.package, &alias.ty)
  )
}
