use thiserror::Error;

/// Tagged failure surface for one inference call.
///
/// Replaces the legacy behaviour of collapsing every hard failure into an
/// empty result string; callers that still want that surface go through
/// `SlmEngine::infer_or_empty`.
#[derive(Debug, Error)]
pub enum InferError {
    #[error("model load failed: {0}")]
    ModelLoad(String),

    #[error("context creation failed: {0}")]
    ContextCreate(String),

    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// Forward pass reported a nonzero status. Fatal during prefill;
    /// the decode loop downgrades it to an early stop.
    #[error("decode failed with status {status}")]
    Decode { status: i32 },

    #[error("detokenization failed: {0}")]
    Detokenize(String),

    #[error("sampling failed: {0}")]
    Sampling(String),
}

pub type InferResult<T> = std::result::Result<T, InferError>;
