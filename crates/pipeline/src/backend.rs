//! Model-side collaborator seam.
//!
//! Handles (model, encoder, conditioning, ControlNet, image) are opaque to
//! the pipeline; it only passes them between backend calls.

use async_trait::async_trait;

use crate::lora::LoraSlot;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Load failed: {0}")]
    LoadFailed(String),

    #[error("Apply failed: {0}")]
    ApplyFailed(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait ModelBackend: Send + Sync {
    type Model: Clone + Send + Sync;
    type Clip: Clone + Send + Sync;
    type Conditioning: Send + Sync;
    type ControlNet: Send + Sync;
    type Image: Send + Sync;

    /// Whether the encoder is dual-encoder (SDXL family).
    async fn is_dual_encoder(&self, clip: &Self::Clip) -> Result<bool, CollaboratorError>;

    /// Turn prompt text into conditioning.
    async fn encode(
        &self,
        clip: &Self::Clip,
        text: &str,
    ) -> Result<Self::Conditioning, CollaboratorError>;

    /// Load one LoRA and patch both handles.
    async fn apply_lora(
        &self,
        model: &Self::Model,
        clip: &Self::Clip,
        lora: &LoraSlot,
    ) -> Result<(Self::Model, Self::Clip), CollaboratorError>;

    /// Post-process positive conditioning with a ControlNet hint image.
    async fn apply_controlnet(
        &self,
        conditioning: &Self::Conditioning,
        controlnet: &Self::ControlNet,
        image: &Self::Image,
        strength: f64,
    ) -> Result<Self::Conditioning, CollaboratorError>;
}
