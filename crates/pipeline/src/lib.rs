//! Async orchestration around `charforge-core`.
//!
//! The core composes text; this crate drives the external collaborators
//! (text encoder, LoRA loader, ControlNet, embedding catalog, preset store)
//! through the traits in [`backend`], [`embeddings`] and [`presets`], and
//! decides per call site how a collaborator failure degrades.

pub mod backend;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod generate;
pub mod lora;
pub mod presets;
pub mod report;

pub use backend::{CollaboratorError, ModelBackend};
pub use config::PipelineSettings;
pub use error::PipelineError;
pub use generate::{generate, quick, GenerationOutput, GenerationRequest, QuickOutput, QuickRequest};
