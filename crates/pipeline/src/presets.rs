//! Preset persistence seam and the in-memory reference store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use charforge_core::catalog::NONE_LABEL;
use charforge_core::preset::{is_no_preset, sanitize_preset_label, PresetDocument};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::backend::CollaboratorError;

#[async_trait]
pub trait PresetStore: Send + Sync {
    /// Stored document for `label`, `None` when there is none.
    async fn load(&self, label: &str) -> Result<Option<PresetDocument>, CollaboratorError>;

    /// Store `doc` under `label`; returns the label actually used.
    async fn save(&self, label: &str, doc: PresetDocument) -> Result<String, CollaboratorError>;

    /// Selectable labels, [`NONE_LABEL`] first.
    async fn list(&self) -> Result<Vec<String>, CollaboratorError>;
}

/// Outcome of the optional save step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "label", rename_all = "snake_case")]
pub enum SaveStatus {
    Saved(String),
    Failed,
    Skipped,
}

impl std::fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved(label) => write!(f, "saved as {label}"),
            Self::Failed => f.write_str("save failed"),
            Self::Skipped => f.write_str("-"),
        }
    }
}

/// Presets held in process memory, keyed by sanitised label.
#[derive(Debug, Default)]
pub struct InMemoryPresetStore {
    presets: RwLock<BTreeMap<String, PresetDocument>>,
}

impl InMemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PresetStore for InMemoryPresetStore {
    async fn load(&self, label: &str) -> Result<Option<PresetDocument>, CollaboratorError> {
        if is_no_preset(label) {
            return Ok(None);
        }
        let presets = self.presets.read().await;
        Ok(presets.get(label.trim()).cloned())
    }

    async fn save(&self, label: &str, doc: PresetDocument) -> Result<String, CollaboratorError> {
        let safe = sanitize_preset_label(label)
            .map_err(|e| CollaboratorError::Rejected(e.to_string()))?;
        self.presets.write().await.insert(safe.clone(), doc);
        tracing::debug!(preset = %safe, "Preset saved");
        Ok(safe)
    }

    async fn list(&self) -> Result<Vec<String>, CollaboratorError> {
        let presets = self.presets.read().await;
        let mut labels = Vec::with_capacity(presets.len() + 1);
        labels.push(NONE_LABEL.to_string());
        labels.extend(presets.keys().cloned());
        Ok(labels)
    }
}

/// Load a preset, treating any store failure as "no preset".
pub async fn load_or_empty<S: PresetStore + ?Sized>(store: &S, label: &str) -> Option<PresetDocument> {
    if is_no_preset(label) {
        return None;
    }
    match store.load(label).await {
        Ok(Some(doc)) => {
            tracing::debug!(preset = %label, keys = doc.len(), "Preset loaded");
            Some(doc)
        }
        Ok(None) => {
            tracing::debug!(preset = %label, "Preset not found");
            None
        }
        Err(e) => {
            tracing::warn!(preset = %label, error = %e, "Preset load failed, using request values");
            None
        }
    }
}

/// Save when `label` is non-blank, reporting the outcome instead of failing.
pub async fn save_with_status<S: PresetStore + ?Sized>(
    store: &S,
    label: &str,
    doc: PresetDocument,
) -> SaveStatus {
    if label.trim().is_empty() {
        return SaveStatus::Skipped;
    }
    match store.save(label.trim(), doc).await {
        Ok(saved) => SaveStatus::Saved(saved),
        Err(e) => {
            tracing::warn!(preset = %label, error = %e, "Preset save failed");
            SaveStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(name: &str) -> PresetDocument {
        let mut d = PresetDocument::new();
        d.insert("character_name".into(), json!(name));
        d
    }

    // -- InMemoryPresetStore --

    #[tokio::test]
    async fn save_sanitises_label() {
        let store = InMemoryPresetStore::new();
        let saved = store.save("  Aria/../v2!  ", doc("Aria")).await;
        assert_eq!(saved.as_deref(), Ok("Ariav2"));
        assert!(store.load("Ariav2").await.ok().flatten().is_some());
    }

    #[tokio::test]
    async fn unusable_label_is_rejected() {
        let store = InMemoryPresetStore::new();
        let result = store.save("///", doc("x")).await;
        assert!(matches!(result, Err(CollaboratorError::Rejected(_))));
    }

    #[tokio::test]
    async fn list_puts_none_first_then_sorted() {
        let store = InMemoryPresetStore::new();
        store.save("zeta", doc("z")).await.ok();
        store.save("Alpha", doc("a")).await.ok();
        let labels = store.list().await.unwrap_or_default();
        assert_eq!(labels, vec!["None", "Alpha", "zeta"]);
    }

    #[tokio::test]
    async fn none_label_loads_nothing() {
        let store = InMemoryPresetStore::new();
        store.save("None", doc("ghost")).await.ok();
        assert_eq!(store.load("None").await, Ok(None));
        assert_eq!(store.load("").await, Ok(None));
    }

    // -- save_with_status --

    #[tokio::test]
    async fn blank_label_skips_save() {
        let store = InMemoryPresetStore::new();
        assert_eq!(save_with_status(&store, "  ", doc("x")).await, SaveStatus::Skipped);
        assert_eq!(store.list().await.map(|l| l.len()), Ok(1));
    }

    #[tokio::test]
    async fn rejected_label_reports_failure() {
        let store = InMemoryPresetStore::new();
        assert_eq!(save_with_status(&store, "***", doc("x")).await, SaveStatus::Failed);
    }
}
