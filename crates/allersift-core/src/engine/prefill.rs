use super::SlmEngine;
use allersift_abi::backend::SlmBackend;
use allersift_abi::batch::{Batch, DecodeCursor};
use allersift_abi::error::InferResult;
use allersift_abi::token::Token;

use crate::metrics::{elapsed_ms, rate_per_second};

/// What prefill hands to the decode loop: a cursor positioned past the
/// prompt, plus the derived input-tokens-per-second figure.
pub(super) struct PrefillOutcome {
    pub cursor: DecodeCursor,
    pub itps: i64,
}

impl<B: SlmBackend> SlmEngine<B> {
    /// One forward pass over the entire prompt. The batch requests logits
    /// only on the last position; a nonzero status aborts the whole call.
    pub(super) fn prefill(&mut self, prompt_tokens: &[Token]) -> InferResult<PrefillOutcome> {
        let batch = Batch::prefill(prompt_tokens, 0);
        println!("⚙️ [prefill] Evaluating {} prompt tokens", batch.len());

        let t_prefill = std::time::Instant::now();
        self.backend.decode(&batch).map_err(|e| {
            eprintln!("❌ [prefill] Prompt decode failed: {e}");
            e
        })?;
        let prefill_time = elapsed_ms(t_prefill);

        let itps = rate_per_second(batch.len(), prefill_time);
        println!("✅ [prefill] Done ({prefill_time} ms)");

        Ok(PrefillOutcome {
            cursor: DecodeCursor::after_prompt(prompt_tokens.len()),
            itps,
        })
    }
}
