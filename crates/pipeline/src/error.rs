use crate::backend::CollaboratorError;

/// Which prompt an encoder failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Positive,
    Negative,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
        }
    }
}

/// Failures that abort a generation. Every other collaborator failure
/// degrades in place.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to encode {kind} prompt: {source}")]
    Encoding {
        kind: PromptKind,
        #[source]
        source: CollaboratorError,
    },
}
