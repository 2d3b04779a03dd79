//! Installed-embedding enumeration.

use async_trait::async_trait;
use charforge_core::embedding::{select_installed, EmbeddingSelection};
use charforge_core::resolution::ModelFamily;

use crate::backend::CollaboratorError;

/// Source of installed embedding file names.
#[async_trait]
pub trait EmbeddingCatalog: Send + Sync {
    async fn installed(&self) -> Result<Vec<String>, CollaboratorError>;
}

/// A fixed list of installed files.
#[derive(Debug, Clone, Default)]
pub struct StaticEmbeddingCatalog {
    files: Vec<String>,
}

impl StaticEmbeddingCatalog {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl EmbeddingCatalog for StaticEmbeddingCatalog {
    async fn installed(&self) -> Result<Vec<String>, CollaboratorError> {
        Ok(self.files.clone())
    }
}

/// Known embeddings for `family` that the catalog reports as installed.
///
/// An enumeration failure is logged and yields an empty selection.
pub async fn discover<C: EmbeddingCatalog + ?Sized>(
    catalog: &C,
    family: ModelFamily,
) -> EmbeddingSelection {
    match catalog.installed().await {
        Ok(files) => select_installed(family, &files),
        Err(e) => {
            tracing::warn!(error = %e, "Embedding enumeration failed, injecting none");
            EmbeddingSelection::default()
        }
    }
}
