use super::SlmEngine;
use allersift_abi::backend::SlmBackend;
use allersift_abi::batch::{Batch, DecodeCursor};

use crate::metrics::{UNMEASURED, elapsed_ms, rate_per_second};
use std::time::Instant;

/// Continuation batches always carry exactly one token.
const CONTINUATION_LEN: usize = 1;

/// Everything the decode loop accumulated before it stopped.
pub(super) struct DecodeOutcome {
    pub text: String,
    pub ttft_ms: i64,
    pub otps: i64,
    pub oet_ms: i64,
}

impl<B: SlmBackend> SlmEngine<B> {
    /// How many positions this call may consume in total: prompt plus the
    /// generation budget, clamped to the backend's context window when it
    /// reports one.
    fn position_budget(&self, prompt_len: usize) -> usize {
        let budget = prompt_len + self.config.max_new_tokens;
        match self.backend.context_window_hint() {
            Some(n_ctx) if n_ctx < budget => {
                println!("🧮 [decode] Context window {n_ctx} caps the position budget ({budget})");
                n_ctx
            }
            _ => budget,
        }
    }

    /// Token-by-token generation. Stops on end-of-generation, on the first
    /// newline in the accumulated output, on a mid-generation backend
    /// failure (soft: partial output is kept), or when the position budget
    /// runs out. None of these escalates as an error.
    pub(super) fn decode_loop(
        &mut self,
        mut cursor: DecodeCursor,
        prompt_len: usize,
        t_start: Instant,
    ) -> DecodeOutcome {
        let position_budget = self.position_budget(prompt_len);

        let mut text = String::new();
        let mut generated = 0usize;
        let mut ttft_ms = UNMEASURED;

        let t_gen = Instant::now();

        while cursor.consumed() + CONTINUATION_LEN < position_budget {
            // Sample from the logits left by the previous forward pass.
            let token = match self.backend.sample_greedy() {
                Ok(token) => token,
                Err(e) => {
                    eprintln!("⚠️ [decode] Sampling failed mid-generation: {e}");
                    break;
                }
            };

            if self.backend.is_end_of_generation(token) {
                println!("🏁 [decode] End-of-generation token {token}. Ending.");
                break;
            }

            if ttft_ms == UNMEASURED {
                ttft_ms = elapsed_ms(t_start);
            }

            match self.backend.token_to_piece(token) {
                Ok(piece) => text.push_str(&piece),
                Err(e) => {
                    eprintln!("⚠️ [decode] Detokenize failed for {token}: {e}");
                    break;
                }
            }

            // Single-line output contract: the first newline anywhere in the
            // accumulated buffer ends generation; the appended text stays,
            // the stopping token is not counted as generated.
            if text.contains('\n') {
                println!("✂️ [decode] Newline in output. Ending.");
                break;
            }

            generated += 1;

            let batch = Batch::continuation(&cursor, token);
            if let Err(e) = self.backend.decode(&batch) {
                eprintln!("⚠️ [decode] Forward pass failed after {generated} tokens: {e}. Keeping partial output.");
                break;
            }
            cursor.advance(batch.len());
        }

        let oet_ms = elapsed_ms(t_gen);
        let otps = rate_per_second(generated, oet_ms);
        println!("✅ [decode] Generated {generated} tokens in {oet_ms} ms");

        DecodeOutcome {
            text,
            ttft_ms,
            otps,
            oet_ms,
        }
    }
}
