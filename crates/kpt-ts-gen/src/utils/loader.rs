use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::{ast::DefinitionsDocument, errors::GeneratorError};

/// Memory-mapped definitions document, parsed on demand.
pub struct DocumentLoader {
  file: AsyncMmapFile,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> Result<DefinitionsDocument, GeneratorError> {
    Ok(serde_json::from_slice(self.file.as_slice())?)
  }
}
