use crate::batch::Batch;
use crate::config::SessionConfig;
use crate::error::InferResult;
use crate::token::Token;

/// Backend-agnostic interface over the native inference stack.
///
/// One value of this trait owns the loaded model, its decoding context and
/// its sampler; dropping the value releases all three. The engine drives it
/// strictly single-threaded: decode mutates internal logits state, and
/// `sample_greedy` reads the logits left by the most recent decode.
pub trait SlmBackend {
    /// Acquire model + context + sampler resources for `config`.
    ///
    /// Load failures map to `InferError::ModelLoad`, context/sampler
    /// failures to `InferError::ContextCreate`.
    fn load(config: &SessionConfig) -> InferResult<Self>
    where
        Self: Sized;

    /// Tokenize UTF-8 text, prepending the beginning-of-sequence marker.
    /// An empty vec means the tokenizer produced nothing usable.
    fn tokenize(&self, text: &str) -> InferResult<Vec<Token>>;

    /// Run one forward pass over `batch`, updating internal logits state.
    /// A nonzero native status surfaces as `InferError::Decode`.
    fn decode(&mut self, batch: &Batch) -> InferResult<()>;

    /// Deterministically pick the highest-probability token from the logits
    /// of the last decode. No temperature, no randomness.
    fn sample_greedy(&mut self) -> InferResult<Token>;

    /// Whether `token` is an end-of-generation marker for this vocabulary.
    fn is_end_of_generation(&self, token: Token) -> bool;

    /// Decode a single token ID into its UTF-8 text fragment.
    fn token_to_piece(&self, token: Token) -> InferResult<String>;

    /// Active context window (n_ctx) if known.
    fn context_window_hint(&self) -> Option<usize> {
        None
    }
}
