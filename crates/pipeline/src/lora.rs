//! LoRA slots and the degrade-and-continue application chain.

use charforge_core::catalog::NONE_LABEL;
use charforge_core::validation::validate_lora_strength;
use serde::Serialize;

use crate::backend::ModelBackend;

/// Number of LoRA slots on the full generation path.
pub const MAX_LORA_SLOTS: usize = 3;

/// Default strength for a newly added slot.
pub const DEFAULT_LORA_STRENGTH: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoraSlot {
    pub name: String,
    pub model_strength: f64,
    pub clip_strength: f64,
}

impl LoraSlot {
    pub fn new(name: impl Into<String>, model_strength: f64, clip_strength: f64) -> Self {
        Self {
            name: name.into(),
            model_strength,
            clip_strength,
        }
    }

    /// An empty slot.
    pub fn none() -> Self {
        Self::new(NONE_LABEL, DEFAULT_LORA_STRENGTH, DEFAULT_LORA_STRENGTH)
    }

    /// Blank or "None" names leave the handles untouched.
    pub fn is_passthrough(&self) -> bool {
        let name = self.name.trim();
        name.is_empty() || name == NONE_LABEL
    }
}

impl Default for LoraSlot {
    fn default() -> Self {
        Self::none()
    }
}

/// What happened to one non-empty slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoraOutcome {
    /// 1-based slot number.
    pub slot: usize,
    pub lora: LoraSlot,
    pub applied: bool,
}

/// Apply one slot. Failures keep the incoming handles.
pub async fn apply_slot<B: ModelBackend>(
    backend: &B,
    model: B::Model,
    clip: B::Clip,
    lora: &LoraSlot,
) -> (B::Model, B::Clip, bool) {
    if lora.is_passthrough() {
        return (model, clip, false);
    }
    for strength in [lora.model_strength, lora.clip_strength] {
        if let Err(e) = validate_lora_strength(strength) {
            tracing::warn!(lora = %lora.name, error = %e, "LoRA strength outside the documented range");
        }
    }
    match backend.apply_lora(&model, &clip, lora).await {
        Ok((model, clip)) => {
            tracing::debug!(
                lora = %lora.name,
                model_strength = lora.model_strength,
                clip_strength = lora.clip_strength,
                "LoRA applied"
            );
            (model, clip, true)
        }
        Err(e) => {
            tracing::warn!(lora = %lora.name, error = %e, "LoRA skipped, continuing with previous handles");
            (model, clip, false)
        }
    }
}

/// Apply slots in order, each on top of the previous result. Only the
/// first [`MAX_LORA_SLOTS`] are used.
pub async fn apply_chain<B: ModelBackend>(
    backend: &B,
    mut model: B::Model,
    mut clip: B::Clip,
    slots: &[LoraSlot],
) -> (B::Model, B::Clip, Vec<LoraOutcome>) {
    if slots.len() > MAX_LORA_SLOTS {
        tracing::warn!(
            given = slots.len(),
            max = MAX_LORA_SLOTS,
            "Extra LoRA slots ignored"
        );
    }
    let mut outcomes = Vec::new();
    for (idx, lora) in slots.iter().take(MAX_LORA_SLOTS).enumerate() {
        let (next_model, next_clip, applied) = apply_slot(backend, model, clip, lora).await;
        model = next_model;
        clip = next_clip;
        if !lora.is_passthrough() {
            outcomes.push(LoraOutcome {
                slot: idx + 1,
                lora: lora.clone(),
                applied,
            });
        }
    }
    (model, clip, outcomes)
}
