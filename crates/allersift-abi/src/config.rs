use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Max sequence length handed to the decoding context.
pub const DEFAULT_CONTEXT_SIZE: u32 = 512;
/// CPU threads used by the forward pass.
pub const DEFAULT_THREAD_COUNT: u32 = 4;
/// Generation budget per call.
pub const DEFAULT_MAX_NEW_TOKENS: usize = 16;

/// Session construction parameters. The legacy implementation baked these
/// into the call path; here they travel as one explicit value handed to
/// `SlmBackend::load` / `SlmEngine::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Which weights file to load.
    pub model_path: PathBuf,

    /// Max sequence length (n_ctx).
    pub context_size: u32,

    /// CPU parallelism for the forward pass.
    pub thread_count: u32,

    /// Hard cap on generated tokens per call.
    pub max_new_tokens: usize,
}

impl SessionConfig {
    pub fn for_model<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: model_path.into(),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::new(),
            context_size: DEFAULT_CONTEXT_SIZE,
            thread_count: DEFAULT_THREAD_COUNT,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = SessionConfig::for_model("/models/qwen2.5-1.5b-instruct-q4_k_m.gguf");
        assert_eq!(cfg.context_size, 512);
        assert_eq!(cfg.thread_count, 4);
        assert_eq!(cfg.max_new_tokens, 16);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = SessionConfig::for_model("/tmp/model.gguf");
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model_path, cfg.model_path);
        assert_eq!(back.max_new_tokens, cfg.max_new_tokens);
    }
}
